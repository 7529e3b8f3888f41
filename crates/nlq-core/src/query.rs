// Canonical query - what an utterance compiles to, plus the assembler and serializer
// Key order of the JSON output follows field order here: size, sort, query

use crate::classifier::Intent;
use crate::config::CompilerConfig;
use crate::error::CompileError;
use crate::extract::Facets;
use crate::{LogLevel, TimeRange, TIMESTAMP_FIELD, UNSUPPORTED_MESSAGE};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CanonicalQuery {
    Search(SearchRequest),
    Api { api: &'static str },
    Error { error: &'static str },
}

impl CanonicalQuery {
    pub fn unsupported() -> Self {
        CanonicalQuery::Error {
            error: UNSUPPORTED_MESSAGE,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, CanonicalQuery::Error { .. })
    }

    /// Compact JSON, no whitespace
    pub fn to_json(&self) -> Result<String, CompileError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub size: u64,
    pub sort: Vec<SortOrder>,
    pub query: Query,
}

// newest first is the only ordering the compiler produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    TimestampDesc,
}

impl Serialize for SortOrder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SortOrder::TimestampDesc => Entry(TIMESTAMP_FIELD, "desc").serialize(serializer),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Query {
    MatchAll(MatchAll),
    Bool(BoolQuery),
}

// serializes as {}
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchAll {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoolQuery {
    pub must: Vec<Clause>,
}

/// One required condition of a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    Level(LogLevel),
    Service(String),
    Time(TimeRange),
    Text { field: String, term: String },
}

impl Serialize for Clause {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Clause::Level(level) => Entry("match", &Entry("log.level", level.as_str())).serialize(serializer),
            Clause::Service(name) => Entry("match", &Entry("service.name", name.as_str())).serialize(serializer),
            Clause::Time(range) => {
                let bounds = Bounds {
                    gte: range.gte(),
                    lt: range.lt(),
                };
                Entry("range", &Entry(TIMESTAMP_FIELD, &bounds)).serialize(serializer)
            }
            Clause::Text { field, term } => Entry("match", &Entry(field.as_str(), term.as_str())).serialize(serializer),
        }
    }
}

// single-key JSON object
struct Entry<'a, V: ?Sized>(&'a str, &'a V);

impl<V: Serialize + ?Sized> Serialize for Entry<'_, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.0, self.1)?;
        map.end()
    }
}

#[derive(Serialize)]
struct Bounds {
    gte: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    lt: Option<&'static str>,
}

// ASSEMBLER //

/// Build the canonical query for a classified utterance.
/// Facets are only consulted for search intents.
pub fn assemble(intent: &Intent, facets: &Facets, config: &CompilerConfig) -> CanonicalQuery {
    match intent {
        Intent::Search => CanonicalQuery::Search(assemble_search(facets, config)),
        other => match other.api_path() {
            Some(api) => CanonicalQuery::Api { api },
            None => CanonicalQuery::unsupported(),
        },
    }
}

fn assemble_search(facets: &Facets, config: &CompilerConfig) -> SearchRequest {
    // level -> service -> time -> one clause per term
    let mut must = Vec::new();
    if let Some(level) = facets.level {
        must.push(Clause::Level(level));
    }
    if let Some(service) = &facets.service {
        must.push(Clause::Service(service.clone()));
    }
    if let Some(range) = &facets.time {
        must.push(Clause::Time(range.clone()));
    }
    must.extend(facets.terms.iter().map(|term| Clause::Text {
        field: config.text_field.clone(),
        term: term.clone(),
    }));

    let query = if must.is_empty() {
        Query::MatchAll(MatchAll {})
    } else {
        Query::Bool(BoolQuery { must })
    };

    SearchRequest {
        size: facets.size.unwrap_or(config.default_size),
        sort: vec![SortOrder::TimestampDesc],
        query,
    }
}
