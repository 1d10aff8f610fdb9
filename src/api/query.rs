//! Coercion of raw query-string values into typed listing parameters.

use std::collections::HashMap;

use actix_web::web;

use crate::error::{AppError, AppResult};
use crate::validation::Validator;

/// Query-string values keyed by name, in the order they appeared.
/// A key may be absent or repeated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryValues(HashMap<String, Vec<String>>);

impl QueryValues {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut values: HashMap<String, Vec<String>> = HashMap::new();
        for (key, value) in pairs {
            values.entry(key.into()).or_default().push(value.into());
        }
        Self(values)
    }

    /// First non-empty value for `key`. An empty value counts as absent.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

impl From<web::Query<Vec<(String, String)>>> for QueryValues {
    fn from(query: web::Query<Vec<(String, String)>>) -> Self {
        Self::from_pairs(query.into_inner())
    }
}

pub fn read_string(params: &QueryValues, key: &str, default: &str) -> String {
    params.first(key).unwrap_or(default).to_string()
}

/// Splits on `,` without trimming the pieces.
pub fn read_csv(params: &QueryValues, key: &str, default: Vec<String>) -> Vec<String> {
    match params.first(key) {
        Some(value) => value.split(',').map(str::to_string).collect(),
        None => default,
    }
}

/// Parses a base-10 integer. A malformed value records an error under `key`
/// and yields `default`, so callers must still check `v.valid()`.
pub fn read_int(params: &QueryValues, key: &str, default: i64, v: &mut Validator) -> i64 {
    let Some(value) = params.first(key) else {
        return default;
    };

    match value.parse::<i64>() {
        Ok(parsed) => parsed,
        Err(_) => {
            v.add_error(key, "must be an integer value");
            default
        }
    }
}

/// Path ids are positive base-10 integers; anything else is treated as a
/// missing resource.
pub fn read_id_param(raw: &str) -> AppResult<i64> {
    match raw.parse::<i64>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(AppError::not_found()),
    }
}
