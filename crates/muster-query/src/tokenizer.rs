//! Query-string tokenizer.
//!
//! Decodes a raw query string into [`RawParams`]: every parameter name mapped to the list of
//! values it was given, in the order they appeared.

use std::borrow::Cow;

use tracing::trace;

use crate::error::QueryError;

/// Separates `key=value` pairs.
const PAIR_DELIMITER: char = '&';

/// Separates a key from its value.
const KEY_VALUE_DELIMITER: char = '=';

/// Decoded query parameters.
///
/// Repeating a key accumulates values rather than overwriting them. Keys keep the order of
/// their first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawParams {
    /// Parameter names with their values in encounter order.
    entries: Vec<(String, Vec<String>)>,
}

impl RawParams {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value for `key`.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(name, _)| *name == key) {
            Some((_, values)) => values.push(value),
            None => self.entries.push((key, vec![value])),
        }
    }

    /// Returns every value given for `key`, or an empty slice if it never appeared.
    pub fn values(&self, key: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, values)| values.as_slice())
            .unwrap_or_default()
    }

    /// Returns the last value given for `key`.
    pub fn last(&self, key: &str) -> Option<&str> {
        self.values(key).last().map(String::as_str)
    }

    /// Returns true if `key` appeared at least once.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no parameters were present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over keys and their values in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.push(key, value);
        }
        params
    }
}

/// Tokenizes a raw query string.
///
/// A leading `?` is ignored, empty pairs are skipped and a pair without `=` yields an empty
/// value. Keys and values are decoded with `+` as space and `%XX` escapes.
pub fn tokenize(query: &str) -> Result<RawParams, QueryError> {
    let body = query.strip_prefix('?').unwrap_or(query);
    let mut offset = query.len() - body.len();
    let mut params = RawParams::new();

    for pair in body.split(PAIR_DELIMITER) {
        let start = offset;
        offset += pair.len() + PAIR_DELIMITER.len_utf8();

        if pair.is_empty() {
            continue;
        }

        let (key, value, value_start) = match pair.split_once(KEY_VALUE_DELIMITER) {
            Some((key, value)) => (key, value, start + key.len() + 1),
            None => (pair, "", start + pair.len()),
        };

        let key = decode_component(key, start, query)?;
        let value = decode_component(value, value_start, query)?;
        params.push(key, value);
    }

    trace!(keys = params.len(), "tokenized query string");
    Ok(params)
}

/// Decodes one key or value that starts at byte `offset` of `query`.
fn decode_component(raw: &str, offset: usize, query: &str) -> Result<String, QueryError> {
    if let Some(position) = find_invalid_escape(raw) {
        return Err(QueryError::InvalidPercentEncoding {
            position: offset + position,
            input: query.to_string(),
        });
    }

    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(Cow::into_owned)
        .map_err(|source| QueryError::InvalidUtf8 {
            input: query.to_string(),
            source,
        })
}

/// Returns the byte offset of the first `%` not followed by two hex digits.
fn find_invalid_escape(raw: &str) -> Option<usize> {
    let bytes = raw.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }

        let valid = bytes
            .get(i + 1..i + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !valid {
            return Some(i);
        }
        i += 3;
    }

    None
}
