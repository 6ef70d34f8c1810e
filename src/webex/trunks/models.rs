//! Trunk data models

use serde::Deserialize;

/// Response wrapper for the trunks list
#[derive(Deserialize, Debug)]
pub struct TrunksResponse {
    #[serde(default)]
    pub trunks: Vec<Trunk>,
}

/// Premise PSTN trunk
#[derive(Deserialize, Debug, Clone)]
pub struct Trunk {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Response wrapper for the route groups a trunk is used by
#[derive(Deserialize, Debug)]
pub struct RouteGroupsResponse {
    #[serde(rename = "routeGroups", default)]
    pub route_groups: Vec<RouteGroup>,
}

/// Route group referencing a trunk
#[derive(Deserialize, Debug, Clone)]
pub struct RouteGroup {
    #[serde(default)]
    pub name: String,
}
