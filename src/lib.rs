//! # textkit
//!
//! Text helpers for display code: HTML entity decoding that reports where
//! replacements happened, string and number utilities, and attributed text
//! that survives decoding.
//!
//! ```
//! use textkit::decode::decode_html_entities;
//! use textkit::strings::StrExt;
//!
//! let decoded = decode_html_entities("Fish &amp; Chips");
//! assert_eq!(decoded.text, "Fish & Chips");
//! assert_eq!(decoded.spans, vec![5..6]);
//!
//! assert_eq!("Hola".base64(), "SG9sYQ==");
//! ```

pub mod decode;
pub mod demo;
pub mod entities;
pub mod error;
pub mod label;
pub mod numbers;
pub mod render;
pub mod settings;
pub mod strings;
pub mod styled;

pub use decode::{decode_html_entities, Decoded};
pub use error::TextError;
pub use strings::StrExt;
