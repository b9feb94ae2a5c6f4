//! Document writer: header, body, cross-reference table, trailer, footer.
//!
//! The whole file is rendered into memory first. The sink only sees bytes
//! once every stage has succeeded, so a failed write leaves it untouched.
//!
//! Layout:
//!
//! ```text
//! %PDF-1.4
//! %\xFF\xFF\xFF\xFF
//! 1 0 obj
//! ...
//! endobj
//! xref
//! 0 N
//! ...
//! trailer
//! <</Size N
//! /Root 1 0 R
//! /ID [<...> <...>]>>
//! startxref
//! <offset of xref>
//! %%EOF
//! ```

use std::io::Write;

use chrono::{SecondsFormat, Utc};

use crate::document::Document;
use crate::encoder::encode_into;
use crate::error::Result;
use crate::reachability::free_objects;
use crate::types::{Dictionary, Value};
use crate::xref::XrefTable;

const HEADER: &[u8] = b"%PDF-1.4\n";

/// Comment line with high bytes so transfer tools treat the file as binary.
const BINARY_MARKER: &[u8] = b"%\xFF\xFF\xFF\xFF\n";

/// Where the trailer `/ID` gets its entropy from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FileIdSource {
    /// Current UTC time, so every write gets a fresh ID.
    #[default]
    Clock,
    /// Fixed seed bytes; the same seed always yields the same ID.
    Seed(Vec<u8>),
}

impl FileIdSource {
    fn seed(&self) -> Vec<u8> {
        match self {
            Self::Clock => Utc::now()
                .to_rfc3339_opts(SecondsFormat::Nanos, true)
                .into_bytes(),
            Self::Seed(bytes) => bytes.clone(),
        }
    }

    /// MD5 digest of the seed; both `/ID` entries carry these 16 bytes.
    pub fn digest(&self) -> [u8; 16] {
        md5::compute(self.seed()).0
    }

    /// The digest as lowercase hex, as it appears between `<` and `>`.
    pub fn file_id(&self) -> String {
        hex::encode(self.digest())
    }
}

/// Options for a single write.
#[derive(Debug, Clone, Default)]
pub struct WriteOptions {
    pub file_id: FileIdSource,
}

impl WriteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the trailer ID from `seed` instead of the clock.
    pub fn with_file_id_seed(mut self, seed: impl Into<Vec<u8>>) -> Self {
        self.file_id = FileIdSource::Seed(seed.into());
        self
    }
}

/// Serializes a [`Document`] to PDF 1.4.
#[derive(Debug, Clone, Default)]
pub struct Writer {
    options: WriteOptions,
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    /// Render `doc` and commit it to `sink` in one `write_all`.
    ///
    /// Returns the number of bytes written. On any error nothing reaches the
    /// sink.
    pub fn write<W: Write>(&self, doc: &Document, sink: &mut W) -> Result<u64> {
        let buf = self.render(doc)?;
        sink.write_all(&buf)?;
        sink.flush()?;
        log::debug!("wrote {} bytes", buf.len());
        Ok(buf.len() as u64)
    }

    /// Render `doc` into a fresh buffer.
    pub fn render(&self, doc: &Document) -> Result<Vec<u8>> {
        let root = doc.find_root()?.id();
        let free = free_objects(doc, root.number);
        warn_if_sparse(doc);

        let mut buf = Vec::new();
        buf.extend_from_slice(HEADER);
        buf.extend_from_slice(BINARY_MARKER);

        let mut xref = XrefTable::new(free);
        for object in doc {
            let offset = buf.len() as u64;
            buf.extend_from_slice(
                format!("{} {} obj\n", object.number, object.generation).as_bytes(),
            );
            encode_into(&object.value, &mut buf)
                .inspect_err(|e| log::debug!("object {} failed to encode: {}", object.number, e))?;
            buf.extend_from_slice(b"\nendobj\n");
            xref.record(object, offset)?;
        }

        let xref_offset = buf.len();
        xref.render(&mut buf)?;

        let id = Value::hex_bytes(&self.options.file_id.digest());
        let mut trailer = Dictionary::new();
        trailer.insert("Size".to_string(), Value::Integer(doc.len() as i64 + 1));
        trailer.insert("Root".to_string(), Value::Reference(root));
        trailer.insert("ID".to_string(), Value::Array(vec![id.clone(), id]));

        buf.extend_from_slice(b"trailer\n");
        encode_into(&Value::Dictionary(trailer), &mut buf)?;
        buf.extend_from_slice(format!("\nstartxref\n{xref_offset}\n%%EOF").as_bytes());

        log::debug!(
            "rendered {} objects, xref at {}, {} bytes",
            doc.len(),
            xref_offset,
            buf.len()
        );
        Ok(buf)
    }
}

/// The table is written as a single `0 N` subsection, which only lines up
/// with object numbers `1..=N-1`.
fn warn_if_sparse(doc: &Document) {
    let contiguous = doc
        .iter()
        .enumerate()
        .all(|(i, object)| object.number == i as u64 + 1);
    if !contiguous {
        log::warn!(
            "object numbers are not exactly 1..={}; readers may reject the cross-reference table",
            doc.len()
        );
    }
}
