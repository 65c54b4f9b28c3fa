//! `application/x-www-form-urlencoded` query strings and form bodies.

use super::percent;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// A query or form value: one string, or a list emitted as repeated keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Emitted as a single `key=value` pair.
    Single(String),
    /// Emitted as one `key=value` pair per element, in order.
    List(Vec<String>),
}

impl Value {
    /// Iterates the string values in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let items: &[String] = match self {
            Value::Single(v) => core::slice::from_ref(v),
            Value::List(vs) => vs,
        };
        items.iter().map(String::as_str)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Single(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Single(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Single(value.clone())
    }
}

impl From<Vec<String>> for Value {
    fn from(values: Vec<String>) -> Self {
        Value::List(values)
    }
}

impl From<Vec<&str>> for Value {
    fn from(values: Vec<&str>) -> Self {
        Value::List(values.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for Value {
    fn from(values: &[&str]) -> Self {
        Value::List(values.iter().map(|v| String::from(*v)).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Value {
    fn from(values: [&str; N]) -> Self {
        Value::List(values.iter().map(|v| String::from(*v)).collect())
    }
}

macro_rules! value_from_display {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::Single(value.to_string())
                }
            }
        )*
    };
}

value_from_display!(bool, char, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64);

/// An ordered list of form pairs.
///
/// Order is preserved exactly as pushed, and the same key may appear more
/// than once.
///
/// ```rust
/// use microreq::network::application::http::Query;
///
/// let query = Query::new().with("a", "1").with("b", ["2", "3"]);
/// assert_eq!(query.encode(), "a=1&b=2&b=3");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, Value)>,
}

impl Query {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Appends a pair.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Appends a pair, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(key, value);
        self
    }

    /// Returns `true` if no pairs were added.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of pairs (a list value counts once).
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Iterates the pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Encodes as `key=value` pairs joined by `&`, keys and values passed
    /// through [`percent::encode_plus`].
    pub fn encode(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.pairs {
            let key = percent::encode_plus(key);
            for item in value.iter() {
                if !out.is_empty() {
                    out.push('&');
                }
                out.push_str(&key);
                out.push('=');
                out.push_str(&percent::encode_plus(item));
            }
        }
        out
    }

    /// Parses an encoded query string.
    ///
    /// Each `&`-separated segment becomes one [`Value::Single`] pair, split on
    /// the first `=`; a segment without `=` has an empty value. Empty segments
    /// are skipped.
    pub fn parse(s: &str) -> Self {
        let pairs = s
            .split('&')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
                (
                    percent::decode_plus(key),
                    Value::Single(percent::decode_plus(value)),
                )
            })
            .collect();
        Self { pairs }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Query {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Query {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.push(k, v);
        }
    }
}
