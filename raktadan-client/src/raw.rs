//! Raw row shapes as the script endpoints return them.
//!
//! Field names match the spreadsheet column headers verbatim, which mix
//! Bengali and annotated-English depending on the sheet. Everything is
//! optional: missing-value policy lives in [`crate::normalize`].

use serde::Deserialize;

/// A value that arrives as either a number or a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum NumberOrString {
    Number(f64),
    String(String),
}

impl NumberOrString {
    /// Coerces to a non-negative integer, if possible.
    pub(crate) fn as_u32(&self) -> Option<u32> {
        match self {
            Self::Number(n) if *n >= 0.0 => Some(*n as u32),
            Self::Number(_) => None,
            Self::String(s) => s.trim().parse().ok(),
        }
    }
}

/// A cell that arrives as either a comma-separated string or an array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany {
    Many(Vec<String>),
    One(String),
}

impl OneOrMany {
    /// Flattens into trimmed, non-empty items.
    pub(crate) fn into_items(self) -> Vec<String> {
        let raw = match self {
            Self::Many(items) => items,
            Self::One(cell) => cell.split(',').map(str::to_string).collect(),
        };
        raw.into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// One row of the donor sheet.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawDonorRow {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "পূর্ণ নাম")]
    pub name: Option<String>,
    #[serde(default, rename = "বয়স (বছর)")]
    pub age: Option<NumberOrString>,
    #[serde(default, rename = "রক্তের গ্রুপ")]
    pub blood_group: Option<String>,
    #[serde(default, rename = "ঠিকানা")]
    pub address: Option<String>,
    #[serde(default, rename = "মোবাইল নম্বর")]
    pub mobile: Option<String>,
    #[serde(default, rename = "ইমেইল")]
    pub email: Option<String>,
    #[serde(default, rename = "শেষ রক্তদানের তারিখ")]
    pub last_donation_date: Option<String>,
    #[serde(default, rename = "স্বাস্থ্যের তথ্য")]
    pub health_info: Option<String>,
    #[serde(default, rename = "নিবন্ধনের তারিখ")]
    pub registration_date: Option<String>,
}

/// One row of the blood request sheet.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawRequestRow {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "রোগীর নাম")]
    pub patient_name: Option<String>,
    #[serde(default, rename = "হাসপাতালের নাম ও ঠিকানা")]
    pub hospital_name: Option<String>,
    #[serde(default, rename = "প্রয়োজনীয় রক্তের গ্রুপ")]
    pub blood_group: Option<String>,
    #[serde(default, rename = "ব্যাগের সংখ্যা")]
    pub bags_needed: Option<NumberOrString>,
    #[serde(default, rename = "যোগাযোগকারীর নাম")]
    pub contact_name: Option<String>,
    #[serde(default, rename = "মোবাইল নাম্বার")]
    pub contact_mobile: Option<String>,
    #[serde(default, rename = "ডোনারের মোবাইল নাম্বার")]
    pub emergency_contact_mobile: Option<String>,
    #[serde(default, rename = "অতিরিক্ত তথ্য")]
    pub notes: Option<String>,
    #[serde(default, rename = "সাবমিট সময়")]
    pub submitted_at: Option<String>,
}

/// One row of the blog post sheet.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawBlogRow {
    #[serde(default, rename = "ID")]
    pub id: Option<String>,
    #[serde(default, rename = "Title")]
    pub title: Option<String>,
    #[serde(default, rename = "Excerpt")]
    pub excerpt: Option<String>,
    #[serde(default, rename = "Content")]
    pub content: Option<String>,
    #[serde(default, rename = "Author")]
    pub author: Option<String>,
    #[serde(default, rename = "Date")]
    pub date: Option<String>,
    #[serde(default, rename = "ImageURL")]
    pub image_url: Option<String>,
    #[serde(default, rename = "Category")]
    pub category: Option<String>,
    #[serde(default, rename = "Tags (comma-separated)")]
    pub tags: Option<OneOrMany>,
}

/// One row of the event sheet.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawEventRow {
    #[serde(default, rename = "ID (স্বতন্ত্র)")]
    pub id: Option<String>,
    #[serde(default, rename = "Title (শিরোনাম)")]
    pub title: Option<String>,
    #[serde(default, rename = "Date (YYYY-MM-DD)")]
    pub date: Option<String>,
    #[serde(default, rename = "Time (সময়)")]
    pub time: Option<String>,
    #[serde(default, rename = "Location (স্থান)")]
    pub location: Option<String>,
    #[serde(default, rename = "Description (বিবরণ)")]
    pub description: Option<String>,
    #[serde(default, rename = "ImageURL (ছবির লিঙ্ক - ঐচ্ছিক)")]
    pub image_url: Option<String>,
    #[serde(default, rename = "Report (রিপোর্ট - পূর্ববর্তী ইভেন্টের জন্য, ঐচ্ছিক)")]
    pub report: Option<String>,
    #[serde(default, rename = "Gallery (গ্যালারি - কমা দিয়ে একাধিক ছবির লিঙ্ক, ঐচ্ছিক)")]
    pub gallery: Option<String>,
}
