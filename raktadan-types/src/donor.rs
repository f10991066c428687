//! Registered blood donors.

use crate::{BloodGroup, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Minimum days between two donations by the same donor.
pub const DONATION_INTERVAL_DAYS: i64 = 120;

/// A registered donor.
///
/// The donor collection is kept sorted by name; see [`Record::restore_order`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Donor {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub blood_group: BloodGroup,
    pub address: String,
    pub mobile: String,
    pub email: Option<String>,
    pub last_donation_date: Option<NaiveDate>,
    pub health_info: Option<String>,
    pub registration_date: NaiveDate,
}

impl Donor {
    /// Whether the donor may donate again on `today`.
    ///
    /// A donor with no recorded donation is always available; otherwise at
    /// least [`DONATION_INTERVAL_DAYS`] must have passed since the last one.
    #[must_use]
    pub fn is_available_on(&self, today: NaiveDate) -> bool {
        match self.last_donation_date {
            None => true,
            Some(last) => (today - last).num_days() >= DONATION_INTERVAL_DAYS,
        }
    }
}

impl Record for Donor {
    fn id(&self) -> &str {
        &self.id
    }

    fn restore_order(items: &mut [Self]) {
        // Case-folded lexicographic order stands in for the original's
        // locale-aware collation; ties break on the raw name.
        items.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name))
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn donor(name: &str, last_donation: Option<NaiveDate>) -> Donor {
        Donor {
            id: format!("d-{name}"),
            name: name.to_string(),
            age: 30,
            blood_group: BloodGroup::OPositive,
            address: "Khansama".to_string(),
            mobile: "01712345678".to_string(),
            email: None,
            last_donation_date: last_donation,
            health_info: None,
            registration_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[test]
    fn available_without_donation_history() {
        let today = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        assert!(donor("a", None).is_available_on(today));
    }

    #[test]
    fn availability_at_the_interval_boundary() {
        let last = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let d = donor("a", Some(last));
        assert!(!d.is_available_on(last + chrono::Days::new(119)));
        assert!(d.is_available_on(last + chrono::Days::new(120)));
    }

    #[test]
    fn restore_order_sorts_by_name_case_insensitively() {
        let mut donors = vec![donor("charlie", None), donor("Alice", None), donor("bob", None)];
        Donor::restore_order(&mut donors);
        let names: Vec<_> = donors.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Alice", "bob", "charlie"]);
    }
}
