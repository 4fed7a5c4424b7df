use crate::District;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A repair technician on the duty roster.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Technician {
    pub id: u32,
    pub name: String,
    pub area: District,
    pub status: TechnicianStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TechnicianStatus {
    Available,
    Busy,
}

impl Technician {
    pub fn is_available(&self) -> bool {
        matches!(self.status, TechnicianStatus::Available)
    }
}

/// The fixed roster for a session. Never changes once loaded.
pub fn default_roster() -> Vec<Technician> {
    vec![
        Technician {
            id: 1,
            name: "Michael Tech".to_string(),
            area: District::VictoriaIsland,
            status: TechnicianStatus::Available,
        },
        Technician {
            id: 2,
            name: "Ada Power".to_string(),
            area: District::Ikeja,
            status: TechnicianStatus::Busy,
        },
        Technician {
            id: 3,
            name: "Emeka Grid".to_string(),
            area: District::Surulere,
            status: TechnicianStatus::Available,
        },
    ]
}
