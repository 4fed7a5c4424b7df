use chrono::NaiveDateTime;

use crate::District;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const NEXT_OUTAGE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A precomputed outage forecast for one district.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Prediction {
    pub area: District,
    /// Local date and time in `YYYY-MM-DD HH:MM` form.
    pub next_outage: String,
    /// Likelihood in percent.
    pub probability: u8,
    pub duration: String,
    pub reason: String,
}

impl Prediction {
    pub fn next_outage_at(&self) -> Result<NaiveDateTime, chrono::ParseError> {
        NaiveDateTime::parse_from_str(&self.next_outage, NEXT_OUTAGE_FORMAT)
    }

    /// Human readable outage time, e.g. `Sat, Aug 16, 02:00 PM`.
    ///
    /// Falls back to the raw value when it is not in the expected format.
    pub fn display_next_outage(&self) -> String {
        match self.next_outage_at() {
            Ok(at) => at.format("%a, %b %-d, %I:%M %p").to_string(),
            Err(_) => self.next_outage.clone(),
        }
    }

    /// Probability clamped to a valid percentage, for sizing the progress bar.
    pub fn probability_percent(&self) -> u8 {
        self.probability.min(100)
    }
}

/// The fixed forecast set shown on the predictions view.
pub fn default_predictions() -> Vec<Prediction> {
    vec![
        Prediction {
            area: District::VictoriaIsland,
            next_outage: "2025-08-16 14:00".to_string(),
            probability: 75,
            duration: "2-4 hours".to_string(),
            reason: "Scheduled maintenance".to_string(),
        },
        Prediction {
            area: District::Ikeja,
            next_outage: "2025-08-15 18:30".to_string(),
            probability: 45,
            duration: "1-2 hours".to_string(),
            reason: "High demand peak".to_string(),
        },
        Prediction {
            area: District::Surulere,
            next_outage: "2025-08-17 09:00".to_string(),
            probability: 60,
            duration: "3-5 hours".to_string(),
            reason: "Equipment upgrade".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_predictions_cover_three_districts() {
        let areas: Vec<District> = default_predictions().iter().map(|p| p.area).collect();

        assert_eq!(
            areas,
            vec![District::VictoriaIsland, District::Ikeja, District::Surulere]
        );
    }

    #[test]
    fn formats_next_outage_for_display() {
        let predictions = default_predictions();

        assert_eq!(predictions[0].display_next_outage(), "Sat, Aug 16, 02:00 PM");
        assert_eq!(predictions[1].display_next_outage(), "Fri, Aug 15, 06:30 PM");
        assert_eq!(predictions[2].display_next_outage(), "Sun, Aug 17, 09:00 AM");
    }

    #[test]
    fn falls_back_to_raw_value_when_unparseable() {
        let mut prediction = default_predictions().remove(0);
        prediction.next_outage = "sometime next week".to_string();

        assert!(prediction.next_outage_at().is_err());
        assert_eq!(prediction.display_next_outage(), "sometime next week");
    }

    #[test]
    fn probability_is_clamped_to_one_hundred() {
        let mut prediction = default_predictions().remove(0);
        assert_eq!(prediction.probability_percent(), 75);

        prediction.probability = 140;

        assert_eq!(prediction.probability_percent(), 100);
    }
}
