//! Catalog file loading
//!
//! The catalog is a JSON file listing domains and their capability
//! snippets. Loading happens once, before the router is constructed; the
//! router itself never touches the filesystem.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use super::{DomainCapability, DomainCatalog};
use crate::error::ConfigError;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    domains: Vec<DomainCapability>,
}

/// Load and validate a domain catalog from a JSON file.
///
/// ```json
/// {
///   "domains": [
///     {
///       "domain_id": "healthcare_claims_index",
///       "display_name": "Claims Processing and Payment Reconciliation",
///       "capability_descriptions": ["claims payment reconciliation reports"],
///       "index_file_path": "indexes/healthcare_claims_index.faiss",
///       "sample_queries": ["Create claims payment reconciliation report for last month"]
///     }
///   ]
/// }
/// ```
pub fn load_catalog(path: impl AsRef<Path>) -> Result<DomainCatalog, ConfigError> {
    let raw = fs::read_to_string(path.as_ref())?;
    let file: CatalogFile = serde_json::from_str(&raw)?;
    let catalog = DomainCatalog::new(file.domains)?;
    info!(
        domains = catalog.len(),
        capabilities = catalog.total_capabilities(),
        "domain catalog loaded"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_catalog_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "domains": [
                    {{
                        "domain_id": "healthcare_claims_index",
                        "display_name": "Claims Processing",
                        "capability_descriptions": ["claims payment reconciliation"],
                        "index_file_path": "indexes/claims.faiss"
                    }}
                ]
            }}"#
        )
        .unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.get("healthcare_claims_index").unwrap().display_name,
            "Claims Processing"
        );
        // sample_queries defaults to empty when absent
        assert!(catalog.sample_queries().is_empty());
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let err = load_catalog("/nonexistent/catalog.json");
        assert!(matches!(err, Err(ConfigError::CatalogRead(_))));
    }

    #[test]
    fn test_load_catalog_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(matches!(
            load_catalog(file.path()),
            Err(ConfigError::CatalogParse(_))
        ));
    }
}
