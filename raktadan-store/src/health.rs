//! Donation-health calculators.
//!
//! Pure functions behind the health-checkup page: donation eligibility
//! with human-readable reasons, BMI with its category, and the ideal
//! weight range for a height. The reasons also feed the AI insight
//! prompt, so they are written as full sentences.

use chrono::NaiveDate;
use raktadan_types::DONATION_INTERVAL_DAYS;
use serde::{Deserialize, Serialize};

/// Minimum donor weight in kilograms by sex.
pub const MIN_WEIGHT_MALE_KG: f64 = 48.0;
pub const MIN_WEIGHT_OTHER_KG: f64 = 45.0;

/// Self-reported sex, used only for the weight threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
    Other,
}

/// Inputs to the eligibility check.
#[derive(Debug, Clone)]
pub struct EligibilityInput {
    pub age: u32,
    pub weight_kg: f64,
    pub sex: Sex,
    pub last_donation_date: Option<NaiveDate>,
}

/// Outcome of the eligibility check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    /// Every failed rule, as a human-readable sentence.
    Ineligible(Vec<String>),
}

impl Eligibility {
    #[must_use]
    pub fn is_eligible(&self) -> bool {
        matches!(self, Self::Eligible)
    }
}

/// Checks the provisional donation-eligibility rules as of `today`.
///
/// This is guidance only; the final decision is always made at the camp
/// after a medical screening.
#[must_use]
pub fn check_eligibility(input: &EligibilityInput, today: NaiveDate) -> Eligibility {
    let mut reasons = Vec::new();

    if input.age < 18 {
        reasons.push("donors must be at least 18 years old".to_string());
    } else if input.age > 60 {
        reasons.push("donors must be at most 60 years old".to_string());
    }

    let min_weight = match input.sex {
        Sex::Male => MIN_WEIGHT_MALE_KG,
        Sex::Female | Sex::Other => MIN_WEIGHT_OTHER_KG,
    };
    if input.weight_kg < min_weight {
        reasons.push(format!(
            "donors must weigh at least {min_weight} kg"
        ));
    }

    if let Some(last) = input.last_donation_date {
        let elapsed = (today - last).num_days();
        if (0..DONATION_INTERVAL_DAYS).contains(&elapsed) {
            let remaining = DONATION_INTERVAL_DAYS - elapsed;
            reasons.push(format!(
                "only {elapsed} days have passed since the last donation; \
                 {remaining} more day(s) are required"
            ));
        }
    }

    if reasons.is_empty() {
        Eligibility::Eligible
    } else {
        Eligibility::Ineligible(reasons)
    }
}

/// BMI weight category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Classifies a BMI value.
    #[must_use]
    pub fn of(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        };
        f.write_str(label)
    }
}

/// BMI (kg/m²) rounded to one decimal. `None` for a non-positive height.
#[must_use]
pub fn bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if height_cm <= 0.0 || weight_kg <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(round1(weight_kg / (height_m * height_m)))
}

/// The weight range in kg keeping BMI inside the healthy 18.5-24.9 band.
#[must_use]
pub fn ideal_weight_range(height_cm: f64) -> Option<(f64, f64)> {
    if height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    let sq = height_m * height_m;
    Some((round1(18.5 * sq), round1(24.9 * sq)))
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
