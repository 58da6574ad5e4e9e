//! Response decoder module
//!
//! # Overview
//!
//! Maps raw response bodies onto caller-declared record types. The record
//! type is a generic parameter bound to `DeserializeOwned`, so every call site
//! fixes its shape at compile time; untyped maps are only one possible `T`.
//! Decoding is pure and never panics on malformed input.

mod decoders;
mod types;

pub use decoders::{decode_cursor_batch, decode_json, decode_record, decode_records};
pub use types::{CursorBatch, RecordsPage};
