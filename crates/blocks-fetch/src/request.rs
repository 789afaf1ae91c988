//! Content requests

use std::fmt;
use std::str::FromStr;

use crate::query::Query;
use crate::FetchError;

/// Content locale passed through as `locale=`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Pl,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Pl => "pl",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pl" => Ok(Language::Pl),
            "en" => Ok(Language::En),
            other => Err(FetchError::Config(format!("unsupported language: {other}"))),
        }
    }
}

/// A request for one API resource
#[derive(Debug, Clone, PartialEq)]
pub struct ContentRequest {
    pub slug: String,
    pub lang: Language,
    pub query: Option<Query>,
}

impl ContentRequest {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            lang: Language::default(),
            query: None,
        }
    }

    pub fn lang(mut self, lang: Language) -> Self {
        self.lang = lang;
        self
    }

    pub fn query(mut self, query: Query) -> Self {
        self.query = Some(query);
        self
    }
}
