//! Build [`Value`]s from JSON.
//!
//! Handy for dictionaries that are mostly data (document info, viewer
//! preferences, annotation attributes). Mapping:
//!
//! - `null`, `true`/`false` → `Null`, `Boolean`
//! - integers → `Integer`, other numbers → `Real`
//! - `"/Name"` → `Name("Name")`; any other string → `LiteralString`
//! - arrays → `Array`, objects → `Dictionary` (key order kept)
//!
//! References and streams have no JSON spelling; add them afterwards.
//!
//! ```
//! use minipdf_core::Value;
//! use serde_json::json;
//!
//! let info = Value::from_json(&json!({"Type": "/Catalog", "Count": 0})).unwrap();
//! assert!(info.is_catalog());
//! ```

use serde_json::Value as Json;

use crate::error::{PdfError, Result};
use crate::types::{Dictionary, Value};

impl Value {
    /// Convert a JSON value. Fails on integers outside the `i64` range.
    pub fn from_json(json: &Json) -> Result<Self> {
        Ok(match json {
            Json::Null => Self::Null,
            Json::Bool(b) => Self::Boolean(*b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Integer(i)
                } else if n.is_u64() {
                    return Err(PdfError::UnsupportedValueType {
                        found: "integer",
                        context: "outside the signed 64-bit range",
                    });
                } else {
                    // as_f64 only fails for arbitrary-precision numbers
                    Self::Real(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Json::String(s) => match s.strip_prefix('/') {
                Some(name) => Self::Name(name.to_string()),
                None => Self::LiteralString(s.clone()),
            },
            Json::Array(items) => Self::Array(
                items
                    .iter()
                    .map(Self::from_json)
                    .collect::<Result<Vec<_>>>()?,
            ),
            Json::Object(map) => {
                let mut dict = Dictionary::with_capacity(map.len());
                for (key, value) in map {
                    dict.insert(key.clone(), Self::from_json(value)?);
                }
                Self::Dictionary(dict)
            }
        })
    }
}

impl TryFrom<&Json> for Value {
    type Error = PdfError;

    fn try_from(json: &Json) -> Result<Self> {
        Self::from_json(json)
    }
}
