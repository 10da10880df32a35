//! Query-string representation of filter state.
//!
//! Board links carry filters as `&name=key1,key2` where every key is
//! percent-encoded on its own, so a literal comma inside a key survives as
//! `%2C` and the separating commas stay bare.

use std::collections::HashMap;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use super::dimension::Dimension;

/// Characters `encodeURIComponent` leaves alone. Shared links were produced
/// by browsers, so the encoded form has to match theirs byte for byte.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single key.
pub fn encode_component(key: &str) -> String {
    utf8_percent_encode(key, URI_COMPONENT).to_string()
}

/// Percent-decode a single key. Never fails: malformed escapes are kept
/// literally and invalid UTF-8 is replaced.
pub fn decode_component(piece: &str) -> String {
    percent_decode_str(piece).decode_utf8_lossy().into_owned()
}

/// Split a raw URL query into parameters.
///
/// Values are left percent-encoded; the comma separated pieces inside them
/// are decoded individually by [`QuerySelections::from_query_params`].
pub fn parse_query_string(query: &str) -> HashMap<String, String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((name, value)) => (decode_component(name), value.to_string()),
            None => (decode_component(pair), String::new()),
        })
        .collect()
}

/// Form state for one dimension: candidate key to checked flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSelection(HashMap<String, bool>);

impl RawSelection {
    /// A selection with every given key checked.
    pub fn from_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        keys.into_iter().map(|k| (k, true)).collect()
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.0.get(key).copied().unwrap_or(false)
    }

    /// Checked keys, in no particular order.
    pub fn checked_keys(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|(_, checked)| **checked)
            .map(|(k, _)| k.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for RawSelection {
    fn from_iter<T: IntoIterator<Item = (K, bool)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Raw selections for every dimension, as read from a URL.
///
/// Reading is catalog independent, so stale keys are still present here;
/// they are dropped once the selections are fed through
/// [`FilterSet::set_dimension`](super::FilterSet::set_dimension).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySelections {
    raw: [RawSelection; 5],
}

impl QuerySelections {
    pub fn from_query_params(params: &HashMap<String, String>) -> Self {
        let mut selections = Self::default();
        for dimension in Dimension::SERIALIZATION_ORDER {
            if let Some(value) = params.get(dimension.param_name()) {
                selections.raw[dimension.index()] = parse_list(value);
            }
        }
        selections
    }

    pub fn get(&self, dimension: Dimension) -> &RawSelection {
        &self.raw[dimension.index()]
    }
}

fn parse_list(value: &str) -> RawSelection {
    RawSelection::from_keys(
        value
            .split(',')
            .filter(|piece| !piece.is_empty())
            .map(decode_component),
    )
}
