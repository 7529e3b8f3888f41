// Request routing
// Turns a compiled query into the request a caller would send. No I/O happens here.

use crate::error::CompileError;
use crate::query::CanonicalQuery;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub method: Method,
    pub path: String,
    pub body: Option<String>,
}

impl Route {
    /// Route for a compiled query. Error payloads have nothing to send.
    /// An empty index pattern searches every index.
    pub fn for_query(query: &CanonicalQuery, index_pattern: &str) -> Result<Option<Route>, CompileError> {
        let route = match query {
            CanonicalQuery::Api { api } => Route {
                method: Method::Get,
                path: (*api).to_string(),
                body: None,
            },
            CanonicalQuery::Search(_) => {
                let index = match index_pattern.trim() {
                    "" => "*",
                    pattern => pattern,
                };
                Route {
                    method: Method::Get,
                    path: format!("/{}/_search", index),
                    body: Some(query.to_json()?),
                }
            }
            CanonicalQuery::Error { .. } => return Ok(None),
        };
        Ok(Some(route))
    }
}

// Dev Tools console form
impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)?;
        if let Some(body) = &self.body {
            write!(f, "\n{}", body)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QueryCompiler;

    fn route(utterance: &str, index: &str) -> Option<Route> {
        let query = QueryCompiler::new().compile(utterance).unwrap();
        Route::for_query(&query, index).unwrap()
    }

    #[test]
    fn test_api_route() {
        let route = route("cluster health", "logs-*").unwrap();
        assert_eq!(route.path, "_cluster/health");
        assert_eq!(route.body, None);
        assert_eq!(route.to_string(), "GET _cluster/health");
    }

    #[test]
    fn test_search_route() {
        let route = route("show top 100 logs", "logs-*").unwrap();
        assert_eq!(
            route.to_string(),
            "GET /logs-*/_search\n{\"size\":100,\"sort\":[{\"@timestamp\":\"desc\"}],\"query\":{\"match_all\":{}}}"
        );
    }

    #[test]
    fn test_empty_index_means_all() {
        let route = route("debug logs", "  ").unwrap();
        assert_eq!(route.path, "/*/_search");
    }

    #[test]
    fn test_error_has_no_route() {
        assert_eq!(route("create a new index with custom mappings", "*"), None);
    }
}
