//! Placeholder argument values.

use std::collections::HashMap;
use std::fmt;

/// Placeholder arguments by name, consumed by the interpolator.
pub type Args = HashMap<String, ArgValue>;

/// A value with a defined text representation, usable as a placeholder
/// argument.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Str(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Uint(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for ArgValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i32> for ArgValue {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<i64> for ArgValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<u64> for ArgValue {
    fn from(n: u64) -> Self {
        Self::Uint(n)
    }
}

impl From<usize> for ArgValue {
    fn from(n: usize) -> Self {
        Self::Uint(n as u64)
    }
}

impl From<f64> for ArgValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for ArgValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Build an [`Args`] map from `name => value` pairs.
///
/// ```
/// use lingua_core::args;
///
/// let args = args! { "latency" => 12, "host" => "eu-west" };
/// assert_eq!(args.len(), 2);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::args::Args::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::args::Args::new();
        $(map.insert($name.to_string(), $crate::args::ArgValue::from($value));)+
        map
    }};
}
