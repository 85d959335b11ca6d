//! Core data model: the typed trip request and its validated construction
//! from the untyped web form.

use crate::PlannerError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed vocabulary of selectable activities, in presentation order.
pub const ACTIVITY_CHOICES: [&str; 4] = [
    "Exploring temples",
    "Visiting historical sites",
    "Enjoying nature",
    "Adventure",
];

/// Budget tier for a trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Budget {
    Low,
    Mid,
    High,
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Budget::Low => "low",
            Budget::Mid => "mid",
            Budget::High => "high",
        };
        write!(f, "{label}")
    }
}

impl FromStr for Budget {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Budget::Low),
            "mid" => Ok(Budget::Mid),
            "high" => Ok(Budget::High),
            other => Err(PlannerError::validation(format!(
                "Unknown budget '{other}'. Expected one of: low, mid, high"
            ))),
        }
    }
}

/// Travel party type for a trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripType {
    Solo,
    Couple,
    Family,
    Friends,
}

impl fmt::Display for TripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TripType::Solo => "solo",
            TripType::Couple => "couple",
            TripType::Family => "family",
            TripType::Friends => "friends",
        };
        write!(f, "{label}")
    }
}

impl FromStr for TripType {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solo" => Ok(TripType::Solo),
            "couple" => Ok(TripType::Couple),
            "family" => Ok(TripType::Family),
            "friends" => Ok(TripType::Friends),
            other => Err(PlannerError::validation(format!(
                "Unknown trip type '{other}'. Expected one of: solo, couple, family, friends"
            ))),
        }
    }
}

/// A fully validated trip request. Immutable once built; lives only for
/// the duration of one request cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRequest {
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: Budget,
    pub trip_type: TripType,
    /// Chosen activities, order-preserving, no duplicates
    pub activities: Vec<String>,
}

/// Raw trip form as submitted by the frontend. All fields arrive as
/// free-form strings and must pass through [`TripForm::parse`] before
/// anything downstream sees them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripForm {
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub budget: String,
    pub trip_type: String,
    #[serde(default)]
    pub activities: Vec<String>,
}

impl TripForm {
    /// Parse and validate the raw form into a typed [`TripRequest`].
    ///
    /// Dates must be ISO `YYYY-MM-DD` and the end date must not precede
    /// the start date. Activities must come from [`ACTIVITY_CHOICES`];
    /// duplicates are dropped while preserving first-occurrence order.
    /// The destination is trimmed but may be empty.
    pub fn parse(&self) -> Result<TripRequest, PlannerError> {
        let start_date = parse_iso_date(&self.start_date, "start date")?;
        let end_date = parse_iso_date(&self.end_date, "end date")?;

        if end_date < start_date {
            return Err(PlannerError::validation(format!(
                "End date {end_date} is before start date {start_date}"
            )));
        }

        let budget = Budget::from_str(&self.budget)?;
        let trip_type = TripType::from_str(&self.trip_type)?;

        let mut activities: Vec<String> = Vec::new();
        for activity in &self.activities {
            let activity = activity.trim();
            if !ACTIVITY_CHOICES.contains(&activity) {
                return Err(PlannerError::validation(format!(
                    "Unknown activity '{activity}'. Expected one of: {}",
                    ACTIVITY_CHOICES.join(", ")
                )));
            }
            if !activities.iter().any(|a| a == activity) {
                activities.push(activity.to_string());
            }
        }

        Ok(TripRequest {
            destination: self.destination.trim().to_string(),
            start_date,
            end_date,
            budget,
            trip_type,
            activities,
        })
    }
}

fn parse_iso_date(raw: &str, field: &str) -> Result<NaiveDate, PlannerError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        PlannerError::validation(format!(
            "Invalid {field} '{raw}'. Expected YYYY-MM-DD"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample_form() -> TripForm {
        TripForm {
            destination: "Kyoto".to_string(),
            start_date: "2024-04-01".to_string(),
            end_date: "2024-04-07".to_string(),
            budget: "Mid".to_string(),
            trip_type: "Couple".to_string(),
            activities: vec!["Enjoying nature".to_string(), "Adventure".to_string()],
        }
    }

    #[test]
    fn test_parse_valid_form() {
        let request = sample_form().parse().expect("form should parse");
        assert_eq!(request.destination, "Kyoto");
        assert_eq!(
            request.start_date,
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
        );
        assert_eq!(
            request.end_date,
            NaiveDate::from_ymd_opt(2024, 4, 7).unwrap()
        );
        assert_eq!(request.budget, Budget::Mid);
        assert_eq!(request.trip_type, TripType::Couple);
        assert_eq!(request.activities, vec!["Enjoying nature", "Adventure"]);
    }

    #[rstest]
    #[case("low", Budget::Low)]
    #[case("Mid", Budget::Mid)]
    #[case("HIGH", Budget::High)]
    fn test_budget_parsing_is_case_insensitive(#[case] raw: &str, #[case] expected: Budget) {
        assert_eq!(Budget::from_str(raw).unwrap(), expected);
    }

    #[rstest]
    #[case("Solo", TripType::Solo)]
    #[case("couple", TripType::Couple)]
    #[case("FAMILY", TripType::Family)]
    #[case(" friends ", TripType::Friends)]
    fn test_trip_type_parsing_is_case_insensitive(#[case] raw: &str, #[case] expected: TripType) {
        assert_eq!(TripType::from_str(raw).unwrap(), expected);
    }

    #[test]
    fn test_lowercase_display() {
        assert_eq!(Budget::High.to_string(), "high");
        assert_eq!(TripType::Friends.to_string(), "friends");
    }

    #[test]
    fn test_rejects_unknown_budget() {
        let mut form = sample_form();
        form.budget = "luxury".to_string();
        let err = form.parse().unwrap_err();
        assert!(matches!(err, PlannerError::Validation { .. }));
        assert!(err.to_string().contains("luxury"));
    }

    #[test]
    fn test_rejects_malformed_date() {
        let mut form = sample_form();
        form.start_date = "01/04/2024".to_string();
        let err = form.parse().unwrap_err();
        assert!(err.to_string().contains("start date"));
    }

    #[test]
    fn test_rejects_reversed_date_range() {
        let mut form = sample_form();
        form.start_date = "2024-04-07".to_string();
        form.end_date = "2024-04-01".to_string();
        let err = form.parse().unwrap_err();
        assert!(err.to_string().contains("before start date"));
    }

    #[test]
    fn test_rejects_unknown_activity() {
        let mut form = sample_form();
        form.activities.push("Skydiving".to_string());
        let err = form.parse().unwrap_err();
        assert!(err.to_string().contains("Skydiving"));
    }

    #[test]
    fn test_activities_deduplicated_in_order() {
        let mut form = sample_form();
        form.activities = vec![
            "Adventure".to_string(),
            "Enjoying nature".to_string(),
            "Adventure".to_string(),
        ];
        let request = form.parse().unwrap();
        assert_eq!(request.activities, vec!["Adventure", "Enjoying nature"]);
    }

    #[test]
    fn test_empty_destination_is_allowed() {
        let mut form = sample_form();
        form.destination = "   ".to_string();
        let request = form.parse().unwrap();
        assert_eq!(request.destination, "");
    }

    #[test]
    fn test_single_day_trip_is_allowed() {
        let mut form = sample_form();
        form.end_date = form.start_date.clone();
        assert!(form.parse().is_ok());
    }
}
