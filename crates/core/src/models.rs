//! Console entities consumed by the route editor.
//!
//! Field names map 1:1 onto the console API's camelCase JSON. The editor
//! itself only reads `Route::id` and the data-center names; the remaining
//! fields ride along for display.

use serde::{Deserialize, Serialize};

use crate::types::RouteId;

// ---------------------------------------------------------------------------
// Entity structs (match console API payloads)
// ---------------------------------------------------------------------------

/// A deployment site scoping one designated-route set per cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataCenter {
    pub dc_name: String,
    /// Operator-facing description, when the console has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl DataCenter {
    pub fn new(dc_name: impl Into<String>) -> Self {
        Self {
            dc_name: dc_name.into(),
            description: None,
        }
    }
}

/// A replication route originating in one data center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: RouteId,
    /// Grouping tag, e.g. `"meta"` or `"console"`.
    #[serde(default)]
    pub tag: String,
    pub src_dc_name: String,
    pub dst_dc_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the route is currently usable for new traffic.
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub is_public: bool,
}

impl Route {
    /// An active route between the two named data centers.
    pub fn new(id: RouteId, src_dc_name: impl Into<String>, dst_dc_name: impl Into<String>) -> Self {
        Self {
            id,
            tag: String::new(),
            src_dc_name: src_dc_name.into(),
            dst_dc_name: dst_dc_name.into(),
            description: None,
            active: true,
            is_public: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
