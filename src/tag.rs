use std::borrow::Cow;
use std::fmt;

use smol_str::SmolStr;

/// A single key/value annotation attached to a [`Link`].
///
/// [`Link`]: crate::Link
///
/// # Examples
///
/// ```
/// use errlink::Tag;
///
/// let tag = Tag::new("attempt", 3);
/// assert_eq!(tag.key(), "attempt");
/// assert_eq!(tag.value().as_i64(), Some(3));
/// ```
#[derive(Debug)]
pub struct Tag {
    key: SmolStr,
    value: TagValue,
}

impl Tag {
    /// Create a new tag.
    pub fn new(key: impl Into<SmolStr>, value: impl Into<TagValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// The tag key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The tag value.
    #[must_use]
    pub fn value(&self) -> &TagValue {
        &self.value
    }
}

/// Value of a [`Tag`].
///
/// A closed set of scalar kinds rendered without going through a generic
/// formatter, plus a catch-all for anything else that knows how to
/// display itself (see [`TagValue::display`]).
pub enum TagValue {
    /// Text value, rendered verbatim.
    Str(Cow<'static, str>),
    /// Signed integer value.
    I64(i64),
    /// Unsigned integer value.
    U64(u64),
    /// Floating point value.
    F64(f64),
    /// Boolean value.
    Bool(bool),
    /// Any other value, rendered through its [`fmt::Display`] impl.
    Display(Box<dyn fmt::Display + Send + Sync>),
}

impl TagValue {
    /// Create a catch-all value from anything that implements [`fmt::Display`].
    pub fn display(value: impl fmt::Display + Send + Sync + 'static) -> Self {
        Self::Display(Box::new(value))
    }

    /// Returns the text value, if this is a [`TagValue::Str`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the signed integer value, if this is a [`TagValue::I64`].
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::I64(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the unsigned integer value, if this is a [`TagValue::U64`].
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::U64(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the floating point value, if this is a [`TagValue::F64`].
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::F64(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a [`TagValue::Bool`].
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(value) => f.write_str(value),
            Self::I64(value) => f.write_str(itoa::Buffer::new().format(*value)),
            Self::U64(value) => f.write_str(itoa::Buffer::new().format(*value)),
            Self::F64(value) => fmt::Display::fmt(value, f),
            Self::Bool(value) => f.write_str(if *value { "true" } else { "false" }),
            Self::Display(value) => fmt::Display::fmt(value, f),
        }
    }
}

impl fmt::Debug for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(value) => f.debug_tuple("Str").field(value).finish(),
            Self::I64(value) => f.debug_tuple("I64").field(value).finish(),
            Self::U64(value) => f.debug_tuple("U64").field(value).finish(),
            Self::F64(value) => f.debug_tuple("F64").field(value).finish(),
            Self::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
            Self::Display(value) => f
                .debug_tuple("Display")
                .field(&format_args!("{value}"))
                .finish(),
        }
    }
}

impl From<&'static str> for TagValue {
    fn from(value: &'static str) -> Self {
        Self::Str(Cow::Borrowed(value))
    }
}

impl From<String> for TagValue {
    fn from(value: String) -> Self {
        Self::Str(Cow::Owned(value))
    }
}

impl From<Cow<'static, str>> for TagValue {
    fn from(value: Cow<'static, str>) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for TagValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f32> for TagValue {
    fn from(value: f32) -> Self {
        Self::F64(f64::from(value))
    }
}

impl From<f64> for TagValue {
    fn from(value: f64) -> Self {
        Self::F64(value)
    }
}

impl From<i64> for TagValue {
    fn from(value: i64) -> Self {
        Self::I64(value)
    }
}

impl From<u64> for TagValue {
    fn from(value: u64) -> Self {
        Self::U64(value)
    }
}

macro_rules! tag_value_from_int {
    ($variant:ident: $target:ty => $($t:ty),+ $(,)?) => {
        $(
            impl From<$t> for TagValue {
                fn from(value: $t) -> Self {
                    Self::$variant(value as $target)
                }
            }
        )+
    };
}

tag_value_from_int!(I64: i64 => i8, i16, i32, isize);
tag_value_from_int!(U64: u64 => u8, u16, u32, usize);
