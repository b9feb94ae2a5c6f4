//! PDF value types: the closed set of things an indirect object can hold.
//!
//! A [`Value`] is a tree. Arrays and dictionaries own their children; the
//! only way to point at another object is a [`Value::Reference`], which is
//! rendered as `N G R` and never followed by the encoder.

use indexmap::IndexMap;

/// Ordered name → value mapping. Insertion order is the output order.
pub type Dictionary = IndexMap<String, Value>;

/// Address of an indirect object: `(number, generation)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId {
    pub number: u64,
    pub generation: u16,
}

impl ObjectId {
    pub const fn new(number: u64, generation: u16) -> Self {
        Self { number, generation }
    }
}

/// A stream payload: caller dictionary entries plus raw bytes.
///
/// `Length`, `Filter` and `DL` are synthesized by the encoder and must not
/// appear in `dict`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stream {
    pub dict: Dictionary,
    pub data: Vec<u8>,
}

impl Stream {
    pub fn new(dict: Dictionary, data: impl Into<Vec<u8>>) -> Self {
        Self {
            dict,
            data: data.into(),
        }
    }
}

/// A PDF value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    /// Narrowed to `f32` when written.
    Real(f64),
    /// Name without the leading `/`.
    Name(String),
    /// Written as `( ... )` with escapes.
    LiteralString(String),
    /// Written as `< ... >`, one byte per character.
    HexString(String),
    Array(Vec<Value>),
    Dictionary(Dictionary),
    Reference(ObjectId),
    /// Only valid as the direct value of an indirect object.
    Stream(Stream),
}

impl Value {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Self::LiteralString(text.into())
    }

    pub fn hex(text: impl Into<String>) -> Self {
        Self::HexString(text.into())
    }

    /// Hex string carrying raw bytes.
    ///
    /// Each byte becomes a character in U+0100..=U+01FF, whose low byte is the
    /// byte itself and which is never dropped as whitespace.
    pub fn hex_bytes(bytes: &[u8]) -> Self {
        Self::HexString(
            bytes
                .iter()
                .filter_map(|&b| char::from_u32(0x100 | u32::from(b)))
                .collect(),
        )
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&Dictionary> {
        match self {
            Self::Dictionary(dict) => Some(dict),
            _ => None,
        }
    }

    /// True for a dictionary carrying `/Type /Catalog`.
    pub fn is_catalog(&self) -> bool {
        self.as_dict()
            .and_then(|dict| dict.get("Type"))
            .and_then(Value::as_name)
            == Some("Catalog")
    }

    /// Type name for error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Name(_) => "name",
            Self::LiteralString(_) => "literal string",
            Self::HexString(_) => "hex string",
            Self::Array(_) => "array",
            Self::Dictionary(_) => "dictionary",
            Self::Reference(_) => "reference",
            Self::Stream(_) => "stream",
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<f32> for Value {
    fn from(r: f32) -> Self {
        Self::Real(f64::from(r))
    }
}

impl From<f64> for Value {
    fn from(r: f64) -> Self {
        Self::Real(r)
    }
}

impl From<ObjectId> for Value {
    fn from(id: ObjectId) -> Self {
        Self::Reference(id)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Array(items)
    }
}

impl From<Dictionary> for Value {
    fn from(dict: Dictionary) -> Self {
        Self::Dictionary(dict)
    }
}

impl From<Stream> for Value {
    fn from(stream: Stream) -> Self {
        Self::Stream(stream)
    }
}

/// Build a [`Dictionary`] from `key => value` pairs.
///
/// Values go through `Value::from`, so names and strings must be spelled
/// out with [`Value::name`] / [`Value::literal`].
///
/// ```
/// use minipdf_core::{dictionary, ObjectId, Value};
///
/// let pages = ObjectId::new(2, 0);
/// let catalog = dictionary! {
///     "Type" => Value::name("Catalog"),
///     "Pages" => pages,
/// };
/// assert_eq!(catalog.len(), 2);
/// ```
#[macro_export]
macro_rules! dictionary {
    () => {
        $crate::Dictionary::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut dict = $crate::Dictionary::new();
        $(
            dict.insert(::std::string::String::from($key), $crate::Value::from($value));
        )+
        dict
    }};
}
