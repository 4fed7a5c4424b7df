use std::fmt;
use std::str::FromStr;

use crate::ReportError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Service districts a report can be filed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum District {
    VictoriaIsland,
    Ikeja,
    Surulere,
    Lekki,
    Yaba,
    Gbagada,
}

impl District {
    /// Every district, in the order the area selector lists them.
    pub const ALL: [District; 6] = [
        District::VictoriaIsland,
        District::Ikeja,
        District::Surulere,
        District::Lekki,
        District::Yaba,
        District::Gbagada,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            District::VictoriaIsland => "Victoria Island",
            District::Ikeja => "Ikeja",
            District::Surulere => "Surulere",
            District::Lekki => "Lekki",
            District::Yaba => "Yaba",
            District::Gbagada => "Gbagada",
        }
    }
}

impl fmt::Display for District {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for District {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        District::ALL
            .into_iter()
            .find(|district| district.as_str() == s)
            .ok_or_else(|| ReportError::UnknownDistrict(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_districts_in_selector_order() {
        let labels: Vec<&str> = District::ALL.iter().map(District::as_str).collect();

        assert_eq!(
            labels,
            vec!["Victoria Island", "Ikeja", "Surulere", "Lekki", "Yaba", "Gbagada"]
        );
    }

    #[test]
    fn parses_every_label_back_into_its_district() {
        for district in District::ALL {
            assert_eq!(district.to_string().parse::<District>(), Ok(district));
        }
    }

    #[test]
    fn rejects_unknown_district() {
        let result = "Ajah".parse::<District>();

        assert_eq!(result, Err(ReportError::UnknownDistrict("Ajah".to_string())));
    }

    #[test]
    fn rejects_empty_selection() {
        assert!("".parse::<District>().is_err());
    }
}
