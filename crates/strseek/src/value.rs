// Caller-facing values and the conversions the search boundary performs.
//
// The core works on already-typed input (`&[u8]`, `Pattern`, `i64`). This
// module is where loosely-typed arguments are classified:
// - pattern: integer -> byte value, string -> literal, regexp -> regex,
//   object answering `to_str` -> literal, anything else -> error
// - offset: integer, or object answering `to_int`
// An object that only answers `to_int` is never accepted as a pattern.

use std::fmt;
use std::sync::Arc;

use smol_str::SmolStr;

use crate::error::{SearchError, SearchResult};
use crate::regexp::Regexp;
use crate::search::Pattern;

/// Conversion protocol for user-defined argument objects.
pub trait Convert: fmt::Debug + Send + Sync {
    fn type_name(&self) -> &str;

    /// Implicit string conversion (`to_str`).
    fn to_str(&self) -> Option<Vec<u8>> {
        None
    }

    /// Implicit integer conversion (`to_int`).
    fn to_int(&self) -> Option<i64> {
        None
    }
}

#[derive(Debug, Clone)]
pub enum Value {
    Nil,
    Int(i64),
    Str(Arc<[u8]>),
    Symbol(SmolStr),
    Regexp(Regexp),
    Object(Arc<dyn Convert>),
}

impl Value {
    pub fn str(bytes: impl AsRef<[u8]>) -> Self {
        Value::Str(Arc::from(bytes.as_ref()))
    }

    pub fn symbol(name: &str) -> Self {
        Value::Symbol(SmolStr::new(name))
    }

    pub fn object(object: impl Convert + 'static) -> Self {
        Value::Object(Arc::new(object))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn type_name(&self) -> SmolStr {
        match self {
            Value::Nil => SmolStr::new_static("nil"),
            Value::Int(_) => SmolStr::new_static("Integer"),
            Value::Str(_) => SmolStr::new_static("String"),
            Value::Symbol(_) => SmolStr::new_static("Symbol"),
            Value::Regexp(_) => SmolStr::new_static("Regexp"),
            Value::Object(object) => SmolStr::new(object.type_name()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Regexp(a), Value::Regexp(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Int(i) => {
                let mut buffer = itoa::Buffer::new();
                f.write_str(buffer.format(*i))
            }
            Value::Str(bytes) => write!(f, "{:?}", String::from_utf8_lossy(bytes)),
            Value::Symbol(name) => write!(f, ":{name}"),
            Value::Regexp(regexp) => write!(f, "{regexp}"),
            Value::Object(object) => write!(f, "#<{}>", object.type_name()),
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::str(s)
    }
}

impl From<Regexp> for Value {
    fn from(regexp: Regexp) -> Self {
        Value::Regexp(regexp)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Nil, Into::into)
    }
}

impl Pattern {
    /// Classify a caller-supplied value. Only `to_str` is consulted on
    /// objects; integer conversion is never attempted for a pattern.
    pub fn from_value(value: &Value) -> SearchResult<Pattern> {
        match value {
            Value::Int(i) => Ok(Pattern::Byte(*i)),
            Value::Str(bytes) => Ok(Pattern::Literal(bytes.to_vec())),
            Value::Regexp(regexp) => Ok(Pattern::Regex(regexp.clone())),
            Value::Object(object) => object
                .to_str()
                .map(Pattern::Literal)
                .ok_or_else(|| SearchError::UnsupportedPatternKind {
                    type_name: value.type_name(),
                }),
            Value::Nil | Value::Symbol(_) => Err(SearchError::UnsupportedPatternKind {
                type_name: value.type_name(),
            }),
        }
    }
}

/// Convert a caller-supplied start offset.
pub fn offset_from_value(value: &Value) -> SearchResult<i64> {
    match value {
        Value::Int(i) => Ok(*i),
        Value::Object(object) => object
            .to_int()
            .ok_or_else(|| SearchError::OffsetConversion {
                type_name: value.type_name(),
            }),
        _ => Err(SearchError::OffsetConversion {
            type_name: value.type_name(),
        }),
    }
}
