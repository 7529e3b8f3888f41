// Classifier - decides what kind of request an utterance is
// Order matters: unsupported check -> cluster -> cat -> search

use crate::compile_patterns;
use regex::Regex;

/// Admin API families that can match broadly without resolving to an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminFamily {
    Cluster,
    Cat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Unsupported,            // write or admin vocabulary, always rejected
    ClusterHealth,          // "cluster health", "cluster status"
    ClusterNodes,           // anything mentioning a node
    CatIndices,             // "list indices"
    CatNodes,               // "show nodes"
    CatShards,              // "list shards"
    Ambiguous(AdminFamily), // admin trigger with no resolvable endpoint
    Search,                 // everything else goes to facet extraction
}

impl Intent {
    /// Fixed API path for admin intents
    pub fn api_path(&self) -> Option<&'static str> {
        match self {
            Intent::ClusterHealth => Some("_cluster/health"),
            Intent::ClusterNodes | Intent::CatNodes => Some("_cat/nodes?v"),
            Intent::CatIndices => Some("_cat/indices?v"),
            Intent::CatShards => Some("_cat/shards?v"),
            _ => None,
        }
    }
}

// anything that mutates data or touches index structure
const UNSUPPORTED_KEYWORDS: &[&str] = &[
    "create", "delete", "update", "insert", "put", "post", "mapping", "mappings",
    "index", "reindex", "bulk", "scroll", "aggregate", "aggregation", "pipeline",
    "template", "settings", "alias", "aliases", "snapshot", "restore", "backup",
];

const MODIFY_PATTERNS: &[&str] = &[
    r"create\s+(index|mapping)",
    r"delete\s+(index|document)",
    r"update\s+(mapping|document|settings)",
    r"insert\s+",
    r"add\s+(field|mapping|alias)",
    r"remove\s+(field|mapping|alias)",
    r"modify\s+",
    r"change\s+(mapping|settings)",
];

const CLUSTER_KEYWORDS: &[&str] = &["cluster health", "cluster status", "node", "shard"];

// word bounded so "catalog" does not trigger
const CAT_PATTERNS: &[&str] = &[
    r"\blist\s+indices\b",
    r"\bshow\s+indices\b",
    r"\blist\s+nodes\b",
    r"\bshow\s+nodes\b",
    r"\blist\s+shards\b",
    r"\bshow\s+shards\b",
    r"\bcat\s+",
];

pub struct Classifier {
    modify_patterns: Vec<Regex>,
    cat_patterns: Vec<Regex>,
}

impl Classifier {
    pub fn new() -> Self {
        Self {
            modify_patterns: compile_patterns(MODIFY_PATTERNS),
            cat_patterns: compile_patterns(CAT_PATTERNS),
        }
    }

    /// Classify an already lower-cased, trimmed utterance
    pub fn classify(&self, query: &str) -> Intent {
        if self.is_unsupported(query) {
            return Intent::Unsupported;
        }
        if is_cluster_query(query) {
            return resolve_cluster(query);
        }
        if self.is_cat_query(query) {
            return resolve_cat(query);
        }
        Intent::Search
    }

    fn is_unsupported(&self, query: &str) -> bool {
        UNSUPPORTED_KEYWORDS.iter().any(|keyword| query.contains(keyword))
            || self.modify_patterns.iter().any(|re| re.is_match(query))
    }

    fn is_cat_query(&self, query: &str) -> bool {
        self.cat_patterns.iter().any(|re| re.is_match(query))
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

fn is_cluster_query(query: &str) -> bool {
    CLUSTER_KEYWORDS.iter().any(|keyword| query.contains(keyword))
}

fn resolve_cluster(query: &str) -> Intent {
    if query.contains("health") || query.contains("status") {
        Intent::ClusterHealth
    } else if query.contains("node") {
        Intent::ClusterNodes
    } else {
        Intent::Ambiguous(AdminFamily::Cluster)
    }
}

fn resolve_cat(query: &str) -> Intent {
    if query.contains("indices") || query.contains("index") {
        Intent::CatIndices
    } else if query.contains("nodes") {
        Intent::CatNodes
    } else if query.contains("shards") {
        Intent::CatShards
    } else {
        Intent::Ambiguous(AdminFamily::Cat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_beats_everything() {
        let classifier = Classifier::new();
        assert_eq!(classifier.classify("create a new index with custom mappings"), Intent::Unsupported);
        assert_eq!(classifier.classify("delete cluster health"), Intent::Unsupported);
        assert_eq!(classifier.classify("list index settings"), Intent::Unsupported);
        assert_eq!(classifier.classify("modify the retention"), Intent::Unsupported);
        assert_eq!(classifier.classify("add field host"), Intent::Unsupported);
    }

    #[test]
    fn test_keyword_substrings_reject() {
        // substring match, so words containing a keyword are rejected too
        let classifier = Classifier::new();
        assert_eq!(classifier.classify("errors from postgres"), Intent::Unsupported);
        assert_eq!(classifier.classify("bad user input"), Intent::Unsupported);
    }

    #[test]
    fn test_cluster_intents() {
        let classifier = Classifier::new();
        assert_eq!(classifier.classify("cluster health"), Intent::ClusterHealth);
        assert_eq!(classifier.classify("show cluster status"), Intent::ClusterHealth);
        assert_eq!(classifier.classify("list nodes"), Intent::ClusterNodes);
        assert_eq!(classifier.classify("shard health"), Intent::ClusterHealth);
        assert_eq!(
            classifier.classify("shard allocation"),
            Intent::Ambiguous(AdminFamily::Cluster)
        );
    }

    #[test]
    fn test_cat_intents() {
        let classifier = Classifier::new();
        assert_eq!(classifier.classify("list indices"), Intent::CatIndices);
        assert_eq!(classifier.classify("show indices"), Intent::CatIndices);
        assert_eq!(classifier.classify("cat indices"), Intent::CatIndices);
        assert_eq!(classifier.classify("cat plugins"), Intent::Ambiguous(AdminFamily::Cat));
    }

    #[test]
    fn test_search_fallback() {
        let classifier = Classifier::new();
        assert_eq!(classifier.classify("errors in last 5 minutes"), Intent::Search);
        assert_eq!(classifier.classify("catalog errors"), Intent::Search);
        assert_eq!(classifier.classify(""), Intent::Search);
    }

    #[test]
    fn test_api_paths() {
        assert_eq!(Intent::ClusterHealth.api_path(), Some("_cluster/health"));
        assert_eq!(Intent::ClusterNodes.api_path(), Some("_cat/nodes?v"));
        assert_eq!(Intent::CatShards.api_path(), Some("_cat/shards?v"));
        assert_eq!(Intent::Search.api_path(), None);
        assert_eq!(Intent::Unsupported.api_path(), None);
    }
}
