//! Node representation consumed by the case graph

use crate::types::ServiceCheckResult;
use serde::{Deserialize, Serialize};

/// Source tag stamped on every node produced from a scan
pub const NODE_SOURCE: &str = "holehe";

/// A text node describing one checked service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceNode {
    #[serde(rename = "type")]
    pub kind: NodeKind,

    /// Human-readable summary, e.g. "github: Account exists"
    pub content: String,

    pub metadata: NodeMetadata,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Text,
}

/// Structured copy of the record carried alongside the node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeMetadata {
    pub source: String,
    pub service: String,
    pub exists: bool,
    #[serde(rename = "emailrecovery")]
    pub email_recovery: Option<String>,
    pub phone_number: Option<String>,
    pub others: Option<String>,
    #[serde(rename = "rateLimit")]
    pub rate_limited: bool,
}

impl ServiceNode {
    #[must_use]
    pub fn from_result(result: &ServiceCheckResult) -> Self {
        let status = if result.exists {
            "Account exists"
        } else {
            "No account found"
        };

        Self {
            kind: NodeKind::Text,
            content: format!("{}: {status}", result.name),
            metadata: NodeMetadata {
                source: NODE_SOURCE.to_string(),
                service: result.name.clone(),
                exists: result.exists,
                email_recovery: result.email_recovery.clone(),
                phone_number: result.phone_number.clone(),
                others: result.others.clone(),
                rate_limited: result.rate_limited,
            },
        }
    }
}

impl From<&ServiceCheckResult> for ServiceNode {
    fn from(result: &ServiceCheckResult) -> Self {
        Self::from_result(result)
    }
}

/// Convert records into nodes, keeping order
#[must_use]
pub fn to_nodes(results: &[ServiceCheckResult]) -> Vec<ServiceNode> {
    results.iter().map(ServiceNode::from_result).collect()
}
