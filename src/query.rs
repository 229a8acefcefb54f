//! Deterministic query-string encoding for filter records.

use chrono::{DateTime, SecondsFormat, Utc};

/// Accumulates `key=value` pairs for a filter record and renders them as a
/// URL-encoded query string.
///
/// Unset (`None`) fields never produce a pair. Output is sorted ascending by
/// wire key, so encoding the same filter twice yields byte-identical strings
/// regardless of push order.
#[derive(Debug, Default)]
pub(crate) struct QueryPairs {
    pairs: Vec<(&'static str, String)>,
}

impl QueryPairs {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a string field if set.
    pub(crate) fn push(&mut self, key: &'static str, value: Option<&str>) {
        if let Some(v) = value {
            self.pairs.push((key, v.to_string()));
        }
    }

    /// Add an integer field if set, rendered in decimal.
    pub(crate) fn push_int(&mut self, key: &'static str, value: Option<i64>) {
        if let Some(v) = value {
            self.pairs.push((key, v.to_string()));
        }
    }

    /// Add a boolean field if set, rendered as `true` or `false`.
    pub(crate) fn push_bool(&mut self, key: &'static str, value: Option<bool>) {
        if let Some(v) = value {
            self.pairs.push((key, v.to_string()));
        }
    }

    /// Add a timestamp field if set, rendered as RFC 3339 in UTC.
    pub(crate) fn push_datetime(&mut self, key: &'static str, value: Option<DateTime<Utc>>) {
        if let Some(v) = value {
            self.pairs
                .push((key, v.to_rfc3339_opts(SecondsFormat::Secs, true)));
        }
    }

    /// Render the accumulated pairs as a query string, values percent-encoded.
    pub(crate) fn finish(mut self) -> String {
        self.pairs.sort_by(|a, b| a.0.cmp(b.0));
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
