//! Free-object analysis for the cross-reference table.
//!
//! An object is *free* when nothing points at it: it is not the root and no
//! `Reference` found anywhere in the document's objects (arrays, dictionaries
//! and stream dictionaries included) names it.
//!
//! Every object is walked exactly once. A target leaves the `unused` set the
//! first time a reference to it is seen and is walked right away, before the
//! outer scan moves on. Removal is monotonic and `walked` is never cleared, so
//! reference cycles terminate and the whole pass is `O(V + E)`.

use std::collections::{BTreeSet, HashSet};

use crate::document::Document;
use crate::types::{ObjectId, Value};

/// Numbers of the objects that should be written as free entries.
///
/// `root` is never free, whether or not anything references it.
pub fn free_objects(doc: &Document, root: u64) -> BTreeSet<u64> {
    let mut unused: BTreeSet<u64> = doc.iter().map(|object| object.number).collect();
    unused.remove(&root);

    let mut walked: HashSet<u64> = HashSet::with_capacity(doc.len());
    let mut worklist: Vec<u64> = Vec::new();
    let mut refs: Vec<ObjectId> = Vec::new();

    for object in doc {
        if !walked.insert(object.number) {
            continue;
        }
        worklist.push(object.number);

        while let Some(number) = worklist.pop() {
            let Some(current) = doc.get(number) else {
                continue;
            };
            refs.clear();
            collect_references(&current.value, &mut refs);

            for target in &refs {
                if !doc.contains(target.number) {
                    log::warn!(
                        "object {} references missing object {} {} R",
                        number,
                        target.number,
                        target.generation
                    );
                    continue;
                }
                if unused.remove(&target.number) && walked.insert(target.number) {
                    worklist.push(target.number);
                }
            }
        }
    }

    log::debug!(
        "reachability: {} of {} objects free (root {})",
        unused.len(),
        doc.len(),
        root
    );
    unused
}

/// Append every reference nested anywhere inside `value`, in document order.
pub fn collect_references(value: &Value, refs: &mut Vec<ObjectId>) {
    let mut stack: Vec<&Value> = vec![value];
    while let Some(value) = stack.pop() {
        match value {
            Value::Reference(id) => refs.push(*id),
            Value::Array(items) => stack.extend(items.iter().rev()),
            Value::Dictionary(dict) => stack.extend(dict.values().rev()),
            Value::Stream(stream) => stack.extend(stream.dict.values().rev()),
            Value::Null
            | Value::Boolean(_)
            | Value::Integer(_)
            | Value::Real(_)
            | Value::Name(_)
            | Value::LiteralString(_)
            | Value::HexString(_) => {}
        }
    }
}
