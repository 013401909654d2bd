use serde::{Deserialize, Serialize};

/// Demand period a fare is quoted for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Normal,
    Peak,
}

impl TimeOfDay {
    pub fn is_peak(&self) -> bool {
        matches!(self, Self::Peak)
    }
}

impl Default for TimeOfDay {
    fn default() -> Self {
        Self::Normal
    }
}

impl From<bool> for TimeOfDay {
    fn from(is_peak_hours: bool) -> Self {
        if is_peak_hours {
            Self::Peak
        } else {
            Self::Normal
        }
    }
}
