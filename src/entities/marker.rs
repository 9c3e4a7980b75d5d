use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerRole {
    Start,
    End,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Marker {
    pub role: MarkerRole,
    pub position: Coordinates,
    pub label: String,
    pub draggable: bool,
}

impl Marker {
    pub fn start(position: Coordinates) -> Self {
        Self {
            role: MarkerRole::Start,
            position,
            label: "Start".into(),
            draggable: true,
        }
    }

    pub fn end(position: Coordinates) -> Self {
        Self {
            role: MarkerRole::End,
            position,
            label: "Destination".into(),
            draggable: true,
        }
    }
}
