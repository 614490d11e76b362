//! Routing decision shapes
//!
//! Every decision is one of exactly two typed variants. Callers cannot read
//! a primary data source off a clarification response — the field does not
//! exist on that variant.

use serde::{Deserialize, Serialize};

use crate::catalog::DomainCatalog;

/// Fixed guidance shown with every clarification request.
pub const CLARIFICATION_MESSAGE: &str =
    "Your query needs more specific details to find the right data source";

/// What a routable query should spell out.
pub const REQUIRED_QUERY_DETAILS: [&str; 3] = [
    "Specific domain (claims, providers, members, procedures)",
    "Time period (date range, quarter, etc.)",
    "Type of analysis or report needed",
];

/// Binary outcome of the threshold gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoutingStatus {
    #[serde(rename = "HIGH_CONFIDENCE")]
    HighConfidence,

    #[serde(rename = "REQUIRES_CLARIFICATION")]
    RequiresClarification,
}

/// One routing decision, constructed fresh per query and immutable once
/// returned.
///
/// Serializes to the two JSON shapes the chat backend consumes; the shapes
/// are distinguished by `routing_analysis.routing_status` and by which of
/// `routing_recommendation` / `clarification_request` is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoutingDecision {
    HighConfidence(HighConfidenceDecision),
    RequiresClarification(ClarificationDecision),
}

/// Decision shape when the threshold gate passes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighConfidenceDecision {
    /// Original query text, unmodified.
    pub user_query: String,

    pub routing_analysis: HighConfidenceAnalysis,

    /// Actionable next step, e.g. "Proceed with healthcare_claims_index
    /// for your analysis".
    pub routing_recommendation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighConfidenceAnalysis {
    /// Rounded to 3 decimals for display.
    pub confidence_score: f32,

    /// Always [`RoutingStatus::HighConfidence`] on this shape.
    pub routing_status: RoutingStatus,

    /// Domain id of the rank-1 match.
    pub primary_data_source: String,

    /// Opaque handle to the winning domain's searchable artifact.
    pub index_file_path: String,

    /// Every top-k snippet whose domain equals the winner — all supporting
    /// evidence, never a foreign domain's snippet.
    pub matching_capabilities: Vec<String>,
}

/// Decision shape when confidence falls below the threshold. A normal,
/// successful outcome with actionable guidance — not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClarificationDecision {
    /// Original query text, unmodified.
    pub user_query: String,

    pub routing_analysis: ClarificationAnalysis,

    pub clarification_request: ClarificationRequest,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClarificationAnalysis {
    /// Rounded to 3 decimals for display.
    pub confidence_score: f32,

    /// Always [`RoutingStatus::RequiresClarification`] on this shape.
    pub routing_status: RoutingStatus,

    /// Why the query could not be routed, naming the threshold.
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClarificationRequest {
    pub message: String,

    /// Display names of every catalog domain, in catalog order.
    pub available_healthcare_domains: Vec<String>,

    pub required_query_details: Vec<String>,

    /// Sample queries drawn from the catalog entries, in catalog order.
    pub sample_healthcare_queries: Vec<String>,
}

impl ClarificationRequest {
    /// Build the fixed clarification payload from the static catalog.
    pub fn from_catalog(catalog: &DomainCatalog) -> Self {
        Self {
            message: CLARIFICATION_MESSAGE.to_string(),
            available_healthcare_domains: catalog.display_names(),
            required_query_details: REQUIRED_QUERY_DETAILS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            sample_healthcare_queries: catalog.sample_queries(),
        }
    }
}

impl RoutingDecision {
    pub fn routing_status(&self) -> RoutingStatus {
        match self {
            RoutingDecision::HighConfidence(_) => RoutingStatus::HighConfidence,
            RoutingDecision::RequiresClarification(_) => RoutingStatus::RequiresClarification,
        }
    }

    pub fn is_high_confidence(&self) -> bool {
        matches!(self, RoutingDecision::HighConfidence(_))
    }

    pub fn user_query(&self) -> &str {
        match self {
            RoutingDecision::HighConfidence(d) => &d.user_query,
            RoutingDecision::RequiresClarification(d) => &d.user_query,
        }
    }

    pub fn confidence_score(&self) -> f32 {
        match self {
            RoutingDecision::HighConfidence(d) => d.routing_analysis.confidence_score,
            RoutingDecision::RequiresClarification(d) => d.routing_analysis.confidence_score,
        }
    }

    /// Winning domain id, present only on high-confidence decisions.
    pub fn primary_data_source(&self) -> Option<&str> {
        match self {
            RoutingDecision::HighConfidence(d) => {
                Some(&d.routing_analysis.primary_data_source)
            }
            RoutingDecision::RequiresClarification(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DomainCapability;

    fn catalog() -> DomainCatalog {
        DomainCatalog::new(vec![
            DomainCapability {
                domain_id: "healthcare_claims_index".to_string(),
                display_name: "Claims Processing and Payment Reconciliation".to_string(),
                capability_descriptions: vec!["claims payment reconciliation".to_string()],
                index_file_path: "indexes/claims.faiss".to_string(),
                sample_queries: vec![
                    "Create claims payment reconciliation report for last month".to_string(),
                ],
            },
            DomainCapability {
                domain_id: "healthcare_providers_index".to_string(),
                display_name: "Provider Network Management".to_string(),
                capability_descriptions: vec!["provider network adequacy".to_string()],
                index_file_path: "indexes/providers.faiss".to_string(),
                sample_queries: vec![
                    "Generate provider network adequacy analysis for cardiology".to_string(),
                ],
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_clarification_request_from_catalog() {
        let request = ClarificationRequest::from_catalog(&catalog());
        assert_eq!(request.available_healthcare_domains.len(), 2);
        assert_eq!(
            request.available_healthcare_domains[0],
            "Claims Processing and Payment Reconciliation"
        );
        assert_eq!(request.required_query_details.len(), 3);
        assert_eq!(request.sample_healthcare_queries.len(), 2);
        assert_eq!(request.message, CLARIFICATION_MESSAGE);
    }

    #[test]
    fn test_routing_status_serializes_screaming() {
        let json = serde_json::to_string(&RoutingStatus::HighConfidence).unwrap();
        assert_eq!(json, r#""HIGH_CONFIDENCE""#);
        let json = serde_json::to_string(&RoutingStatus::RequiresClarification).unwrap();
        assert_eq!(json, r#""REQUIRES_CLARIFICATION""#);
    }

    #[test]
    fn test_decision_json_shapes_are_disjoint() {
        let high = RoutingDecision::HighConfidence(HighConfidenceDecision {
            user_query: "fraud reports".to_string(),
            routing_analysis: HighConfidenceAnalysis {
                confidence_score: 0.646,
                routing_status: RoutingStatus::HighConfidence,
                primary_data_source: "healthcare_claims_index".to_string(),
                index_file_path: "indexes/claims.faiss".to_string(),
                matching_capabilities: vec!["fraud detection".to_string()],
            },
            routing_recommendation: "Proceed with healthcare_claims_index for your analysis"
                .to_string(),
        });

        let value = serde_json::to_value(&high).unwrap();
        assert_eq!(
            value["routing_analysis"]["routing_status"],
            "HIGH_CONFIDENCE"
        );
        assert!(value.get("clarification_request").is_none());

        // And back through the untagged enum
        let parsed: RoutingDecision = serde_json::from_value(value).unwrap();
        assert!(parsed.is_high_confidence());
        assert_eq!(parsed.primary_data_source(), Some("healthcare_claims_index"));
    }
}
