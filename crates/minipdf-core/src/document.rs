//! The document: numbered indirect objects and the catalog lookup.

use std::collections::BTreeMap;
use std::io::Write;

use crate::error::{PdfError, Result};
use crate::types::{ObjectId, Value};
use crate::writer::{WriteOptions, Writer};

/// A numbered, referenceable object (`N G obj ... endobj`).
#[derive(Debug, Clone, PartialEq)]
pub struct IndirectObject {
    pub number: u64,
    pub generation: u16,
    pub value: Value,
}

impl IndirectObject {
    pub fn new(number: u64, generation: u16, value: impl Into<Value>) -> Self {
        Self {
            number,
            generation,
            value: value.into(),
        }
    }

    pub const fn id(&self) -> ObjectId {
        ObjectId::new(self.number, self.generation)
    }
}

/// A set of indirect objects kept in ascending object-number order.
///
/// Exactly one object should be a dictionary with `/Type /Catalog`; it
/// becomes the trailer's `/Root`.
#[derive(Debug, Clone, Default)]
pub struct Document {
    objects: BTreeMap<u64, IndirectObject>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object under `number`. Fails if the number is taken.
    pub fn add_object(
        &mut self,
        number: u64,
        generation: u16,
        value: impl Into<Value>,
    ) -> Result<ObjectId> {
        self.insert(IndirectObject::new(number, generation, value))
    }

    /// Add a pre-built object. Fails if its number is taken.
    pub fn insert(&mut self, object: IndirectObject) -> Result<ObjectId> {
        let id = object.id();
        if self.objects.contains_key(&id.number) {
            return Err(PdfError::DuplicateObject(id.number));
        }
        self.objects.insert(id.number, object);
        Ok(id)
    }

    pub fn remove_object(&mut self, number: u64) -> Option<IndirectObject> {
        self.objects.remove(&number)
    }

    pub fn get(&self, number: u64) -> Option<&IndirectObject> {
        self.objects.get(&number)
    }

    pub fn contains(&self, number: u64) -> bool {
        self.objects.contains_key(&number)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// One past the highest object number in use (1 for an empty document).
    pub fn next_object_number(&self) -> u64 {
        self.objects.keys().next_back().map_or(1, |n| n + 1)
    }

    /// Objects in ascending number order.
    pub fn iter(&self) -> impl Iterator<Item = &IndirectObject> {
        self.objects.values()
    }

    /// The lowest-numbered object whose value is a `/Type /Catalog`
    /// dictionary.
    pub fn find_root(&self) -> Result<&IndirectObject> {
        self.iter()
            .find(|object| object.value.is_catalog())
            .ok_or(PdfError::MissingCatalog)
    }

    /// Write the document with default options. Returns the byte count.
    pub fn write<W: Write>(&self, sink: &mut W) -> Result<u64> {
        Writer::new().write(self, sink)
    }

    /// Write the document with explicit options. Returns the byte count.
    pub fn write_with<W: Write>(&self, sink: &mut W, options: &WriteOptions) -> Result<u64> {
        Writer::with_options(options.clone()).write(self, sink)
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a IndirectObject;
    type IntoIter = std::collections::btree_map::Values<'a, u64, IndirectObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.values()
    }
}
