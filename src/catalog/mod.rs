//! Domain capability catalog
//!
//! The static registry of healthcare data domains and the capability
//! snippets that describe them. Built once at startup, validated, then
//! shared read-only across all concurrent queries — nothing in here mutates
//! after construction.

mod loader;

pub use loader::load_catalog;

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One healthcare data domain and what it covers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainCapability {
    /// Unique identifier, e.g. `healthcare_claims_index`.
    pub domain_id: String,

    /// Human-readable domain name, e.g. "Claims Processing and Payment
    /// Reconciliation".
    pub display_name: String,

    /// Capability snippets describing what this domain covers. Each is
    /// independently embedded and searchable; order matters (it is the
    /// index insertion order, hence the tie-break order for matches).
    pub capability_descriptions: Vec<String>,

    /// Opaque handle to the underlying searchable artifact.
    pub index_file_path: String,

    /// Example queries this domain answers well, surfaced in clarification
    /// responses.
    #[serde(default)]
    pub sample_queries: Vec<String>,
}

/// The validated, immutable domain catalog.
#[derive(Debug, Clone)]
pub struct DomainCatalog {
    domains: Vec<DomainCapability>,
}

impl DomainCatalog {
    /// Build a catalog, enforcing the invariants the router relies on:
    /// at least one domain, globally unique domain ids, and at least one
    /// capability description per domain.
    pub fn new(domains: Vec<DomainCapability>) -> Result<Self, ConfigError> {
        if domains.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for domain in &domains {
            if !seen.insert(domain.domain_id.as_str()) {
                return Err(ConfigError::DuplicateDomain(domain.domain_id.clone()));
            }
            if domain.capability_descriptions.is_empty() {
                return Err(ConfigError::EmptyDomain(domain.domain_id.clone()));
            }
        }

        Ok(Self { domains })
    }

    /// All domains, in catalog order.
    pub fn domains(&self) -> &[DomainCapability] {
        &self.domains
    }

    /// Look up a domain by id.
    pub fn get(&self, domain_id: &str) -> Option<&DomainCapability> {
        self.domains.iter().find(|d| d.domain_id == domain_id)
    }

    /// Number of domains.
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Display names in catalog order, for clarification responses.
    pub fn display_names(&self) -> Vec<String> {
        self.domains.iter().map(|d| d.display_name.clone()).collect()
    }

    /// Sample queries flattened in catalog order.
    pub fn sample_queries(&self) -> Vec<String> {
        self.domains
            .iter()
            .flat_map(|d| d.sample_queries.iter().cloned())
            .collect()
    }

    /// Capability snippet counts per domain.
    pub fn capability_counts(&self) -> BTreeMap<String, usize> {
        self.domains
            .iter()
            .map(|d| (d.domain_id.clone(), d.capability_descriptions.len()))
            .collect()
    }

    /// Total capability snippets across all domains.
    pub fn total_capabilities(&self) -> usize {
        self.domains
            .iter()
            .map(|d| d.capability_descriptions.len())
            .sum()
    }

    /// Lowercased vocabulary drawn from ids and display names, consumed by
    /// the complexity analyzer's domain-term signal.
    pub fn vocabulary_terms(&self) -> Vec<String> {
        let mut terms: Vec<String> = Vec::new();
        for domain in &self.domains {
            for word in domain
                .display_name
                .split_whitespace()
                .chain(domain.domain_id.split('_'))
            {
                let term = word.to_lowercase();
                // Short connectives ("and", "of") are noise, not vocabulary
                if term.len() >= 4 && !terms.contains(&term) {
                    terms.push(term);
                }
            }
        }
        terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain(id: &str, name: &str, snippets: &[&str]) -> DomainCapability {
        DomainCapability {
            domain_id: id.to_string(),
            display_name: name.to_string(),
            capability_descriptions: snippets.iter().map(|s| s.to_string()).collect(),
            index_file_path: format!("indexes/{id}.faiss"),
            sample_queries: vec![],
        }
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(
            DomainCatalog::new(vec![]),
            Err(ConfigError::EmptyCatalog)
        ));
    }

    #[test]
    fn test_duplicate_domain_rejected() {
        let result = DomainCatalog::new(vec![
            domain("claims", "Claims", &["payment reconciliation"]),
            domain("claims", "Claims Again", &["fraud detection"]),
        ]);
        assert!(matches!(result, Err(ConfigError::DuplicateDomain(id)) if id == "claims"));
    }

    #[test]
    fn test_domain_without_snippets_rejected() {
        let result = DomainCatalog::new(vec![domain("claims", "Claims", &[])]);
        assert!(matches!(result, Err(ConfigError::EmptyDomain(id)) if id == "claims"));
    }

    #[test]
    fn test_capability_counts() {
        let catalog = DomainCatalog::new(vec![
            domain("claims", "Claims Processing", &["a", "b", "c"]),
            domain("providers", "Provider Network", &["d"]),
        ])
        .unwrap();

        let counts = catalog.capability_counts();
        assert_eq!(counts["claims"], 3);
        assert_eq!(counts["providers"], 1);
        assert_eq!(catalog.total_capabilities(), 4);
    }

    #[test]
    fn test_vocabulary_terms_lowercased_and_filtered() {
        let catalog = DomainCatalog::new(vec![domain(
            "healthcare_claims_index",
            "Claims Processing and Payment Reconciliation",
            &["snippet"],
        )])
        .unwrap();

        let terms = catalog.vocabulary_terms();
        assert!(terms.contains(&"claims".to_string()));
        assert!(terms.contains(&"reconciliation".to_string()));
        // "and" is below the length floor
        assert!(!terms.contains(&"and".to_string()));
    }
}
