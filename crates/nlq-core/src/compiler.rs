// Query compiler
// Orchestrates: normalize -> classify -> extract facets -> assemble -> serialize

use crate::classifier::{Classifier, Intent};
use crate::config::CompilerConfig;
use crate::error::CompileError;
use crate::extract::{Extractors, Facets};
use crate::observer::{CompileObserver, Facet};
use crate::query::{assemble, CanonicalQuery};

/// What `parse` returns when anything goes wrong
pub const FALLBACK_PAYLOAD: &str =
    r#"{"error":"Unsupported query. Please rephrase or check available APIs."}"#;

/// Compiles utterances into search requests.
///
/// Patterns are compiled once in the constructor. A compiler holds no
/// per-call state, so one instance can be shared across threads.
pub struct QueryCompiler {
    config: CompilerConfig,
    classifier: Classifier,
    extractors: Extractors,
    observer: Option<Box<dyn CompileObserver>>,
}

impl QueryCompiler {
    pub fn new() -> Self {
        Self::with_config(CompilerConfig::default())
    }

    pub fn with_config(config: CompilerConfig) -> Self {
        Self {
            config,
            classifier: Classifier::new(),
            extractors: Extractors::new(),
            observer: None,
        }
    }

    /// Attach an observer that is told about every pipeline stage
    pub fn with_observer(mut self, observer: impl CompileObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Lower-case and trim, the only normalization applied
    pub fn normalize(utterance: &str) -> String {
        utterance.trim().to_lowercase()
    }

    pub fn classify(&self, utterance: &str) -> Intent {
        self.classifier.classify(&Self::normalize(utterance))
    }

    /// Compile to a typed query. Rejections are Ok(CanonicalQuery::Error);
    /// Err is only returned for internal faults.
    pub fn compile(&self, utterance: &str) -> Result<CanonicalQuery, CompileError> {
        self.notify(|o| o.utterance_received(utterance));
        let query = Self::normalize(utterance);

        let intent = self.classifier.classify(&query);
        self.notify(|o| o.intent_resolved(&intent));

        let facets = match intent {
            Intent::Search => {
                let facets = self.extractors.extract(&query)?;
                self.report_facets(&facets);
                facets
            }
            _ => Facets::default(),
        };

        Ok(assemble(&intent, &facets, &self.config))
    }

    /// Compile and serialize. Never fails: any fault becomes the fixed error payload.
    pub fn parse(&self, utterance: &str) -> String {
        let payload = match self.compile(utterance).and_then(|query| query.to_json()) {
            Ok(json) => json,
            Err(e) => {
                self.notify(|o| o.compile_failed(&e));
                FALLBACK_PAYLOAD.to_string()
            }
        };
        self.notify(|o| o.payload_emitted(&payload));
        payload
    }

    fn report_facets(&self, facets: &Facets) {
        let Some(observer) = &self.observer else {
            return;
        };
        if let Some(level) = facets.level {
            observer.facet_extracted(Facet::Level(level));
        }
        if let Some(service) = &facets.service {
            observer.facet_extracted(Facet::Service(service));
        }
        if let Some(range) = &facets.time {
            observer.facet_extracted(Facet::Time(range));
        }
        if !facets.terms.is_empty() {
            observer.facet_extracted(Facet::Terms(&facets.terms));
        }
        if let Some(size) = facets.size {
            observer.facet_extracted(Facet::Size(size));
        }
    }

    fn notify(&self, f: impl FnOnce(&dyn CompileObserver)) {
        if let Some(observer) = &self.observer {
            f(observer.as_ref());
        }
    }
}

impl Default for QueryCompiler {
    fn default() -> Self {
        Self::new()
    }
}
