//! JSON codec for the preferences document.
//!
//! On-disk format: a single UTF-8 JSON object, written with 2-space
//! indentation.  See [`crate::domain::record`] for the keys.
//!
//! # Normalisation on decode
//!
//! A document that parses but has no `recentProjects` key, or has it set to
//! an empty value (`null`, `false`, `0` or `""`), gets `recentProjects: [""]`.  Older editor builds behaved this way
//! and the placeholder is pruned by the first existence check, so files
//! written by either build read back identically.

use serde_json::Value;
use thiserror::Error;

use crate::domain::record::PreferencesRecord;

/// Contents written to a freshly created preferences file.
pub const EMPTY_DOCUMENT: &str = "{}";

const RECENT_PROJECTS_KEY: &str = "recentProjects";

/// Errors that can occur while decoding or encoding the preferences document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The text is not valid JSON.
    #[error("invalid JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    /// The JSON is valid but the top-level value is not an object.
    #[error("expected a JSON object at the top level, found {0}")]
    NotAnObject(&'static str),

    /// A known key holds a value of the wrong type (e.g. `"recentProjects": 5`).
    #[error("unexpected value in preferences document: {0}")]
    Shape(#[source] serde_json::Error),

    /// The record could not be serialized.
    #[error("failed to serialize preferences: {0}")]
    Serialize(#[source] serde_json::Error),
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Decodes the text of a preferences file into a [`PreferencesRecord`].
///
/// # Errors
///
/// Returns [`DocumentError::Syntax`] for malformed JSON,
/// [`DocumentError::NotAnObject`] when the top level is an array, string,
/// number, boolean or `null`, and [`DocumentError::Shape`] when a known key
/// has the wrong type.
///
/// # Examples
///
/// ```rust
/// use editor_prefs_core::decode_document;
///
/// let record = decode_document("{}").unwrap();
/// assert_eq!(record.recent_projects, vec![String::new()]);
/// ```
pub fn decode_document(text: &str) -> Result<PreferencesRecord, DocumentError> {
    let value: Value = serde_json::from_str(text).map_err(DocumentError::Syntax)?;

    let mut object = match value {
        Value::Object(object) => object,
        other => return Err(DocumentError::NotAnObject(json_kind(&other))),
    };

    if object.get(RECENT_PROJECTS_KEY).map_or(true, is_empty_value) {
        object.insert(
            RECENT_PROJECTS_KEY.to_string(),
            Value::Array(vec![Value::String(String::new())]),
        );
    }

    serde_json::from_value(Value::Object(object)).map_err(DocumentError::Shape)
}

/// Encodes a [`PreferencesRecord`] as pretty-printed JSON (2-space indent).
///
/// # Errors
///
/// Returns [`DocumentError::Serialize`] if serialization fails, which only
/// happens for values `serde_json` cannot represent.
pub fn encode_document(record: &PreferencesRecord) -> Result<String, DocumentError> {
    serde_json::to_string_pretty(record).map_err(DocumentError::Serialize)
}

/// `true` for the scalar values an older editor build treated as "unset".
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::WindowGeometry;

    #[test]
    fn test_decode_empty_object_sets_placeholder_recent_project() {
        // Arrange / Act
        let record = decode_document(EMPTY_DOCUMENT).expect("decode");

        // Assert
        assert_eq!(record.recent_projects, vec![String::new()]);
        assert_eq!(record.editor_window, None);
        assert_eq!(record.player_window, None);
    }

    #[test]
    fn test_decode_null_recent_projects_sets_placeholder() {
        let record = decode_document(r#"{"recentProjects": null}"#).expect("decode");

        assert_eq!(record.recent_projects, vec![String::new()]);
    }

    #[test]
    fn test_decode_empty_scalar_recent_projects_sets_placeholder() {
        for text in [
            r#"{"recentProjects": false}"#,
            r#"{"recentProjects": 0}"#,
            r#"{"recentProjects": ""}"#,
        ] {
            let record = decode_document(text).expect("decode");

            assert_eq!(record.recent_projects, vec![String::new()], "input: {text}");
        }
    }

    #[test]
    fn test_decode_non_empty_scalar_recent_projects_returns_shape_error() {
        let result = decode_document(r#"{"recentProjects": "/a"}"#);

        assert!(matches!(result, Err(DocumentError::Shape(_))));
    }

    #[test]
    fn test_decode_keeps_empty_recent_projects_list() {
        // An explicit empty list is present, so no placeholder is added.
        let record = decode_document(r#"{"recentProjects": []}"#).expect("decode");

        assert!(record.recent_projects.is_empty());
    }

    #[test]
    fn test_decode_full_document() {
        // Arrange
        let text = r#"{
            "recentProjects": ["/a", "/b"],
            "editorWindow": {"x": 5, "y": 6, "width": 1280, "height": 720, "fullscreen": false},
            "playerWindow": {"x": 0, "y": 0, "width": 800, "height": 600, "fullscreen": false}
        }"#;

        // Act
        let record = decode_document(text).expect("decode");

        // Assert
        assert_eq!(record.recent_projects, vec!["/a", "/b"]);
        assert_eq!(
            record.editor_window,
            Some(WindowGeometry::windowed(5, 6, 1280, 720))
        );
        assert_eq!(
            record.player_window,
            Some(WindowGeometry::windowed(0, 0, 800, 600))
        );
        assert!(record.extra.is_empty());
    }

    #[test]
    fn test_decode_window_without_fullscreen_key_defaults_to_windowed() {
        let text = r#"{"recentProjects": [], "playerWindow": {"x": 1, "y": 2, "width": 3, "height": 4}}"#;

        let record = decode_document(text).expect("decode");

        assert_eq!(record.player_window, Some(WindowGeometry::windowed(1, 2, 3, 4)));
    }

    #[test]
    fn test_decode_invalid_json_returns_syntax_error() {
        let result = decode_document("not valid json");

        assert!(matches!(result, Err(DocumentError::Syntax(_))));
    }

    #[test]
    fn test_decode_top_level_array_returns_not_an_object() {
        let result = decode_document("[1, 2, 3]");

        assert!(matches!(result, Err(DocumentError::NotAnObject("an array"))));
    }

    #[test]
    fn test_decode_top_level_null_returns_not_an_object() {
        let result = decode_document("null");

        assert!(matches!(result, Err(DocumentError::NotAnObject("null"))));
    }

    #[test]
    fn test_decode_wrong_type_for_recent_projects_returns_shape_error() {
        let result = decode_document(r#"{"recentProjects": 5}"#);

        assert!(matches!(result, Err(DocumentError::Shape(_))));
    }

    #[test]
    fn test_decode_preserves_unknown_keys() {
        // Arrange
        let text = r#"{"recentProjects": ["/a"], "lastBuildPlatform": "Linux", "zoom": 2}"#;

        // Act
        let record = decode_document(text).expect("decode");
        let encoded = encode_document(&record).expect("encode");
        let reparsed: Value = serde_json::from_str(&encoded).expect("reparse");

        // Assert
        assert_eq!(record.extra.get("lastBuildPlatform"), Some(&Value::from("Linux")));
        assert_eq!(reparsed["lastBuildPlatform"], Value::from("Linux"));
        assert_eq!(reparsed["zoom"], Value::from(2));
    }

    #[test]
    fn test_encode_uses_two_space_indentation_and_camel_case_keys() {
        // Arrange
        let record = PreferencesRecord {
            recent_projects: vec!["/a".to_string()],
            ..Default::default()
        };

        // Act
        let text = encode_document(&record).expect("encode");

        // Assert
        assert_eq!(text, "{\n  \"recentProjects\": [\n    \"/a\"\n  ]\n}");
    }

    #[test]
    fn test_encode_omits_unset_windows() {
        let text = encode_document(&PreferencesRecord::default()).expect("encode");

        assert!(!text.contains("editorWindow"), "None editorWindow must be omitted");
        assert!(!text.contains("playerWindow"), "None playerWindow must be omitted");
    }

    #[test]
    fn test_encode_writes_all_geometry_fields() {
        let record = PreferencesRecord {
            editor_window: Some(WindowGeometry {
                x: 10,
                y: 20,
                width: 1280,
                height: 720,
                fullscreen: true,
            }),
            ..Default::default()
        };

        let value: Value =
            serde_json::from_str(&encode_document(&record).expect("encode")).expect("reparse");

        assert_eq!(value["editorWindow"]["x"], 10);
        assert_eq!(value["editorWindow"]["y"], 20);
        assert_eq!(value["editorWindow"]["width"], 1280);
        assert_eq!(value["editorWindow"]["height"], 720);
        assert_eq!(value["editorWindow"]["fullscreen"], true);
    }
}
