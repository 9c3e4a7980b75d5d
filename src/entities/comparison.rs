use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Comparison {
    pub driving_minutes: f64,
    pub walking_minutes: f64,
}

impl Comparison {
    pub fn new(driving_minutes: f64, walking_minutes: f64) -> Self {
        Self {
            driving_minutes,
            walking_minutes,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "route comparison: driving {:.1} min / walking {:.1} min",
            self.driving_minutes, self.walking_minutes
        )
    }
}
