//! Property metadata types returned by the `getMetadata` operation.

use serde::{Deserialize, Serialize};

use super::response::MetricType;

/// Dimensions and metrics available on a property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Resource name (`properties/{id}/metadata`).
    #[serde(default)]
    pub name: String,

    /// Available dimensions.
    #[serde(default)]
    pub dimensions: Vec<DimensionMetadata>,

    /// Available metrics.
    #[serde(default)]
    pub metrics: Vec<MetricMetadata>,
}

/// Description of one available dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionMetadata {
    /// Name used in API requests.
    #[serde(default)]
    pub api_name: String,

    /// Name shown in the Analytics UI.
    #[serde(default)]
    pub ui_name: String,

    /// Human-readable description.
    #[serde(default)]
    pub description: String,

    /// True for user-defined dimensions.
    #[serde(default)]
    pub custom_definition: bool,

    /// Grouping category in the Analytics UI.
    #[serde(default)]
    pub category: String,
}

/// Description of one available metric.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricMetadata {
    /// Name used in API requests.
    #[serde(default)]
    pub api_name: String,

    /// Name shown in the Analytics UI.
    #[serde(default)]
    pub ui_name: String,

    /// Human-readable description.
    #[serde(default)]
    pub description: String,

    /// Declared value type.
    #[serde(rename = "type", default)]
    pub metric_type: MetricType,

    /// True for user-defined metrics.
    #[serde(default)]
    pub custom_definition: bool,

    /// Grouping category in the Analytics UI.
    #[serde(default)]
    pub category: String,
}
