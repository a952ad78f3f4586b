//! Daily calorie estimate from the Mifflin-St Jeor BMR equation.
//!
//! Stateless: nothing here touches the metrics store.

use crate::metrics::parse_field;
use crate::{round_whole, InputError};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "M" => Ok(Gender::Male),
            "F" => Ok(Gender::Female),
            _ => Err(InputError::InvalidGender(s.trim().to_string())),
        }
    }
}

/// Activity level and its TDEE multiplier
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
}

impl ActivityLevel {
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
        }
    }

    /// Case-insensitive match on the level name
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_lowercase().as_str() {
            "sedentary" => Some(ActivityLevel::Sedentary),
            "light" => Some(ActivityLevel::Light),
            "moderate" => Some(ActivityLevel::Moderate),
            "active" => Some(ActivityLevel::Active),
            _ => None,
        }
    }

    /// Like [`ActivityLevel::parse`], but unrecognised text counts as sedentary
    pub fn parse_or_sedentary(text: &str) -> Self {
        Self::parse(text).unwrap_or_else(|| {
            tracing::warn!(
                "Unrecognised activity level {:?}, using sedentary multiplier",
                text.trim()
            );
            ActivityLevel::Sedentary
        })
    }
}

/// Raw calculator input, as typed by the user
#[derive(Clone, Debug, Default)]
pub struct RawCalorieInput {
    pub gender: String,
    pub weight: String,
    pub height_cm: String,
    pub age: String,
    pub activity: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CalorieInput {
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: i64,
    pub activity: ActivityLevel,
}

/// Validate calculator input.
///
/// Numbers are checked before gender, so a bad number reports
/// "Invalid input." even when the gender is also wrong.
pub fn parse_calorie_input(raw: &RawCalorieInput) -> Result<CalorieInput, InputError> {
    let weight_kg = parse_field("weight", &raw.weight)?;
    let height_cm = parse_field("height_cm", &raw.height_cm)?;
    let age_years = parse_field("age", &raw.age)?;
    CalorieInput::from_parts(&raw.gender, weight_kg, height_cm, age_years, &raw.activity)
}

impl CalorieInput {
    /// Combine already-parsed numbers with the gender and activity text.
    ///
    /// Gender is the only part that can still be rejected here.
    pub fn from_parts(
        gender: &str,
        weight_kg: f64,
        height_cm: f64,
        age_years: i64,
        activity: &str,
    ) -> Result<Self, InputError> {
        Ok(CalorieInput {
            gender: gender.parse::<Gender>()?,
            weight_kg,
            height_cm,
            age_years,
            activity: ActivityLevel::parse_or_sedentary(activity),
        })
    }
}

/// Basal metabolic rate in kcal/day
pub fn basal_metabolic_rate(input: &CalorieInput) -> f64 {
    let base = 10.0 * input.weight_kg + 6.25 * input.height_cm - 5.0 * input.age_years as f64;
    match input.gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Estimated daily maintenance calories
pub fn estimate_daily_calories(input: &CalorieInput) -> i64 {
    round_whole(basal_metabolic_rate(input) * input.activity.multiplier())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(gender: &str, activity: &str) -> RawCalorieInput {
        RawCalorieInput {
            gender: gender.into(),
            weight: "70".into(),
            height_cm: "175".into(),
            age: "30".into(),
            activity: activity.into(),
        }
    }

    #[test]
    fn test_male_moderate() {
        let input = parse_calorie_input(&raw("M", "moderate")).unwrap();
        // 700 + 1093.75 - 150 + 5
        assert_eq!(basal_metabolic_rate(&input), 1648.75);
        // 1648.75 * 1.55 = 2555.5625
        assert_eq!(estimate_daily_calories(&input), 2556);
    }

    #[test]
    fn test_female_active_mixed_case() {
        let input = parse_calorie_input(&raw(" f ", "  ACTIVE ")).unwrap();
        assert_eq!(input.gender, Gender::Female);
        assert_eq!(input.activity, ActivityLevel::Active);
        // 700 + 1093.75 - 150 - 161 = 1482.75
        assert_eq!(basal_metabolic_rate(&input), 1482.75);
        assert_eq!(estimate_daily_calories(&input), 2558);
    }

    #[test]
    fn test_unknown_activity_uses_sedentary() {
        crate::logging::init_test();
        let input = RawCalorieInput {
            height_cm: "180".into(),
            ..raw("m", "couch potato")
        };
        let input = parse_calorie_input(&input).unwrap();
        assert_eq!(input.activity, ActivityLevel::Sedentary);
        // 1680 * 1.2
        assert_eq!(estimate_daily_calories(&input), 2016);
    }

    #[test]
    fn test_invalid_gender() {
        let err = parse_calorie_input(&raw("X", "light")).unwrap_err();
        assert_eq!(err, InputError::InvalidGender("X".into()));
        assert_eq!(err.to_string(), "Invalid gender.");
    }

    #[test]
    fn test_bad_number_reported_before_bad_gender() {
        let input = RawCalorieInput {
            age: "thirty".into(),
            ..raw("X", "light")
        };
        let err = parse_calorie_input(&input).unwrap_err();
        assert!(matches!(err, InputError::InvalidInput { field: "age", .. }));
    }

    #[test]
    fn test_from_parts_rejects_gender_only() {
        let input = CalorieInput::from_parts("F", 60.0, 165.0, 40, "light").unwrap();
        assert_eq!(input.gender, Gender::Female);
        assert_eq!(input.activity, ActivityLevel::Light);

        let err = CalorieInput::from_parts("other", 60.0, 165.0, 40, "light").unwrap_err();
        assert_eq!(err, InputError::InvalidGender("other".into()));
    }

    #[test]
    fn test_multiplier_table() {
        assert_eq!(ActivityLevel::parse("light").unwrap().multiplier(), 1.375);
        assert_eq!(ActivityLevel::parse("Sedentary").unwrap().multiplier(), 1.2);
        assert!(ActivityLevel::parse("").is_none());
    }
}
