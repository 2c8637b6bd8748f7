//! Display snapshot sources.
//!
//! Inside the editor the window state comes from the engine's graphics
//! subsystem, which implements
//! [`DisplaySubsystem`](crate::application::preferences_store::DisplaySubsystem)
//! directly.  Outside the editor (the `editor-prefs` tool, tests) the state
//! is known up front, which is what [`FixedDisplay`] models.
//!
//! # Window geometry syntax
//!
//! The CLI describes a window as `X,Y,WIDTHxHEIGHT`, for example
//! `100,50,1280x720`.  Negative positions are allowed (monitors left of or
//! above the primary one); sizes must be positive.

use std::str::FromStr;

use thiserror::Error;

use crate::application::preferences_store::DisplaySubsystem;

/// Error type for window geometry parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WindowGeometryError {
    /// The text is not of the form `X,Y,WIDTHxHEIGHT`.
    #[error("expected X,Y,WIDTHxHEIGHT, got {0:?}")]
    Format(String),

    /// A component is not a valid integer.
    #[error("invalid number {0:?} in window geometry")]
    Number(String),

    /// Width or height is zero or negative.
    #[error("window size must be positive, got {width}x{height}")]
    NonPositiveSize { width: i32, height: i32 },
}

/// A display whose state never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDisplay {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub fullscreen: bool,
}

impl FixedDisplay {
    /// A non-fullscreen window at `(x, y)` with the given size.
    pub fn windowed(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fullscreen: false,
        }
    }

    /// The same display, switched to fullscreen.
    pub fn into_fullscreen(self) -> Self {
        Self {
            fullscreen: true,
            ..self
        }
    }
}

impl FromStr for FixedDisplay {
    type Err = WindowGeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(',').collect();
        let [x, y, size] = parts.as_slice() else {
            return Err(WindowGeometryError::Format(s.to_string()));
        };
        let Some((width, height)) = size.split_once(['x', 'X']) else {
            return Err(WindowGeometryError::Format(s.to_string()));
        };

        let x = parse_component(x)?;
        let y = parse_component(y)?;
        let width = parse_component(width)?;
        let height = parse_component(height)?;

        if width <= 0 || height <= 0 {
            return Err(WindowGeometryError::NonPositiveSize { width, height });
        }

        Ok(Self::windowed(x, y, width, height))
    }
}

fn parse_component(text: &str) -> Result<i32, WindowGeometryError> {
    let text = text.trim();
    text.parse()
        .map_err(|_| WindowGeometryError::Number(text.to_string()))
}

impl DisplaySubsystem for FixedDisplay {
    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn window_position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_window_geometry() {
        // Arrange / Act
        let display: FixedDisplay = "100,50,1280x720".parse().expect("parse");

        // Assert
        assert_eq!(display, FixedDisplay::windowed(100, 50, 1280, 720));
        assert!(!display.is_fullscreen());
    }

    #[test]
    fn test_parse_allows_negative_position_and_whitespace() {
        let display: FixedDisplay = " -1920 , 0 , 1920X1080 ".parse().expect("parse");

        assert_eq!(display.window_position(), (-1920, 0));
        assert_eq!(display.width(), 1920);
        assert_eq!(display.height(), 1080);
    }

    #[test]
    fn test_parse_rejects_missing_size() {
        let result = "100,50".parse::<FixedDisplay>();

        assert_eq!(result, Err(WindowGeometryError::Format("100,50".to_string())));
    }

    #[test]
    fn test_parse_rejects_size_without_separator() {
        let result = "0,0,1280".parse::<FixedDisplay>();

        assert!(matches!(result, Err(WindowGeometryError::Format(_))));
    }

    #[test]
    fn test_parse_rejects_non_numeric_component() {
        let result = "a,0,10x10".parse::<FixedDisplay>();

        assert_eq!(result, Err(WindowGeometryError::Number("a".to_string())));
    }

    #[test]
    fn test_parse_rejects_zero_size() {
        let result = "0,0,0x720".parse::<FixedDisplay>();

        assert_eq!(
            result,
            Err(WindowGeometryError::NonPositiveSize {
                width: 0,
                height: 720
            })
        );
    }

    #[test]
    fn test_into_fullscreen_keeps_rectangle() {
        let display = FixedDisplay::windowed(1, 2, 3, 4).into_fullscreen();

        assert!(display.is_fullscreen());
        assert_eq!(display.window_position(), (1, 2));
    }
}
