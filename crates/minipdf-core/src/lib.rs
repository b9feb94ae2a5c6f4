//! # minipdf-core
//!
//! A small, dependency-light writer for **PDF 1.4** files.
//!
//! You build a [`Document`] out of numbered indirect objects whose values come
//! from the closed [`Value`] model, then call [`Document::write`]. The writer
//! finds the catalog, works out which objects nothing points at (they become
//! the free list), and emits header, body, cross-reference table, trailer and
//! footer in one buffered pass. Either the whole file reaches the sink or
//! nothing does.
//!
//! ## Quick start
//!
//! ```rust
//! use minipdf_core::{dictionary, Document, ObjectId, Stream, Value, WriteOptions};
//!
//! let mut doc = Document::new();
//! let pages = ObjectId::new(2, 0);
//! let page = ObjectId::new(3, 0);
//! let contents = ObjectId::new(4, 0);
//!
//! doc.add_object(1, 0, dictionary! {
//!     "Type" => Value::name("Catalog"),
//!     "Pages" => pages,
//! }).unwrap();
//! doc.add_object(2, 0, dictionary! {
//!     "Type" => Value::name("Pages"),
//!     "Kids" => vec![Value::from(page)],
//!     "Count" => 1,
//! }).unwrap();
//! doc.add_object(3, 0, dictionary! {
//!     "Type" => Value::name("Page"),
//!     "Parent" => pages,
//!     "MediaBox" => vec![Value::from(0), Value::from(0), Value::from(612), Value::from(792)],
//!     "Contents" => contents,
//! }).unwrap();
//! doc.add_object(4, 0, Stream::new(dictionary! {}, b"0 0 m 612 792 l S".to_vec())).unwrap();
//!
//! let mut out = Vec::new();
//! let options = WriteOptions::new().with_file_id_seed("example");
//! let written = doc.write_with(&mut out, &options).unwrap();
//! assert_eq!(written as usize, out.len());
//! assert!(out.starts_with(b"%PDF-1.4\n"));
//! ```
//!
//! ## Modules
//!
//! - [`types`]: `Value`, `ObjectId`, `Stream`, `Dictionary`, `dictionary!`
//! - [`encoder`]: `Value` → PDF syntax
//! - [`document`]: the object set and catalog lookup
//! - [`reachability`]: which objects are free
//! - [`xref`]: fixed-width cross-reference records
//! - [`writer`]: file assembly and write options
//! - [`json`]: `serde_json::Value` → `Value`
//! - [`error`]: error type

pub mod document;
pub mod encoder;
pub mod error;
pub mod json;
pub mod reachability;
pub mod types;
pub mod writer;
pub mod xref;

pub use document::{Document, IndirectObject};
pub use encoder::{encode, encode_into};
pub use error::{PdfError, Result, XrefField};
pub use reachability::free_objects;
pub use types::{Dictionary, ObjectId, Stream, Value};
pub use writer::{FileIdSource, WriteOptions, Writer};
pub use xref::{XrefEntry, XrefTable};
