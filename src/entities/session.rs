use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{MapView, UploadPanel};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    pub token: Uuid,
    pub upload: UploadPanel,
    pub map: MapView,
    pub info: Vec<String>,
    pub find_seq: u64,
}

impl Session {
    pub fn new() -> Self {
        Self {
            token: Uuid::new_v4(),
            upload: UploadPanel::new(),
            map: MapView::new(),
            info: Vec::new(),
            find_seq: 0,
        }
    }

    // every find operation starts from a blank slate and supersedes
    // whatever older invocation may still be in flight
    pub fn begin_find(&mut self) -> u64 {
        self.info.clear();
        self.map.clear_plan();
        self.find_seq += 1;
        self.find_seq
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
