//! # apidocs document
//!
//! Generic, order-preserving tree for API specification documents, with a
//! lenient YAML/JSON parser and a deterministic YAML serializer.
//!
//! ```text
//! text ──parse──▶ DocumentNode ──serialize──▶ text
//!                      │
//!                      └──to_json_pretty──▶ JSON (example payloads)
//! ```
//!
//! `parse` never fails: malformed input yields an empty mapping together with
//! [`ParseStatus::Malformed`], so callers can tell it apart from a document
//! that is simply empty. Use [`try_parse`] to get the underlying error.

pub mod error;
pub mod json;
pub mod node;
pub mod parser;
pub mod serializer;

pub use error::{DocumentError, DocumentResult};
pub use json::{from_json, parse_json, to_json, to_json_pretty};
pub use node::{DocumentNode, Mapping, Scalar};
pub use parser::{from_yaml, parse, try_parse, ParseStatus, Parsed};
pub use serializer::{serialize, to_yaml, try_serialize};
