//! Document module containing the JSON codec for `prefs.json`.

pub mod codec;

pub use codec::{decode_document, encode_document, DocumentError, EMPTY_DOCUMENT};
