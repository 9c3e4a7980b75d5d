use serde::{Deserialize, Serialize};

use crate::entities::{Comparison, Marker, RouteLine};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteQuery {
    pub start: String,
    pub end: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RouteOutcome {
    Drawn { line: RouteLine },
    Failed { notice: String },
}

impl RouteOutcome {
    pub fn line(&self) -> Option<&RouteLine> {
        match self {
            Self::Drawn { line } => Some(line),
            Self::Failed { .. } => None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoutePlan {
    pub origin: Marker,
    pub destination: Marker,
    pub driving: RouteOutcome,
    pub walking: RouteOutcome,
    pub comparison: Option<Comparison>,
}
