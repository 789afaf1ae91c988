//! Strapi query parameters
//!
//! Models the parameter object accepted by the REST API and flattens it into
//! bracketed `key[sub][op]=value` pairs, with arrays written as
//! `key[0]=a&key[1]=b`.

use indexmap::IndexMap;

/// Comparison value of an `$eq` filter
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Integer(i64),
    Number(f64),
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        FilterValue::Number(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Integer(value)
    }
}

impl FilterValue {
    fn to_param(&self) -> String {
        match self {
            FilterValue::Text(text) => text.clone(),
            FilterValue::Integer(integer) => integer.to_string(),
            FilterValue::Number(number) => number.to_string(),
        }
    }
}

/// A single field filter
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOperation {
    /// `$eq`, used for slug and id lookups
    Eq(FilterValue),
    /// `$lt`
    Lt(f64),
    /// `$gt`
    Gt(f64),
}

impl FilterOperation {
    pub fn eq(value: impl Into<FilterValue>) -> Self {
        FilterOperation::Eq(value.into())
    }

    pub fn operator(&self) -> &'static str {
        match self {
            FilterOperation::Eq(_) => "$eq",
            FilterOperation::Lt(_) => "$lt",
            FilterOperation::Gt(_) => "$gt",
        }
    }

    fn to_param(&self) -> String {
        match self {
            FilterOperation::Eq(value) => value.to_param(),
            FilterOperation::Lt(number) | FilterOperation::Gt(number) => number.to_string(),
        }
    }
}

/// Value of a top-level query parameter
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    List(Vec<String>),
    Text(String),
    Number(f64),
    Filters(IndexMap<String, FilterOperation>),
}

/// Insertion-ordered set of query parameters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    params: IndexMap<String, QueryValue>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any previous value for `key`
    pub fn insert(mut self, key: impl Into<String>, value: QueryValue) -> Self {
        self.params.insert(key.into(), value);
        self
    }

    /// Add relations to `populate`
    pub fn populate<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        match self.params.get_mut("populate") {
            Some(QueryValue::List(existing)) => existing.extend(fields),
            _ => {
                self.params
                    .insert("populate".to_string(), QueryValue::List(fields));
            }
        }
        self
    }

    /// Add a field filter under `filters`
    pub fn filter(mut self, field: impl Into<String>, operation: FilterOperation) -> Self {
        match self.params.get_mut("filters") {
            Some(QueryValue::Filters(existing)) => {
                existing.insert(field.into(), operation);
            }
            _ => {
                let mut filters = IndexMap::new();
                filters.insert(field.into(), operation);
                self.params
                    .insert("filters".to_string(), QueryValue::Filters(filters));
            }
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Flatten into unencoded `(key, value)` pairs in insertion order
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();

        for (key, value) in &self.params {
            match value {
                QueryValue::List(items) => {
                    for (i, item) in items.iter().enumerate() {
                        pairs.push((format!("{key}[{i}]"), item.clone()));
                    }
                }
                QueryValue::Text(text) => pairs.push((key.clone(), text.clone())),
                QueryValue::Number(number) => pairs.push((key.clone(), number.to_string())),
                QueryValue::Filters(filters) => {
                    for (field, operation) in filters {
                        pairs.push((
                            format!("{key}[{field}][{}]", operation.operator()),
                            operation.to_param(),
                        ));
                    }
                }
            }
        }

        pairs
    }
}
