//! Content records: blog posts, camp events, awareness entries, and
//! committee members.
//!
//! Blog posts and camp events are fetched remotely; awareness entries and
//! committee members are seeded statically by the application.

use crate::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A blog post. Sorted by date, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: Option<String>,
    pub date: NaiveDate,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
}

impl Record for BlogPost {
    fn id(&self) -> &str {
        &self.id
    }

    fn restore_order(items: &mut [Self]) {
        items.sort_by(|a, b| b.date.cmp(&a.date));
    }
}

/// A donation camp or campaign event. Sorted by date, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampEvent {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub description: String,
    pub image_url: Option<String>,
    /// Present only for events that have already taken place.
    pub report: Option<String>,
    pub gallery: Vec<String>,
}

impl CampEvent {
    /// Whether the event has taken place as of `today`.
    #[must_use]
    pub fn is_past(&self, today: NaiveDate) -> bool {
        self.date < today || self.report.is_some()
    }
}

impl Record for CampEvent {
    fn id(&self) -> &str {
        &self.id
    }

    fn restore_order(items: &mut [Self]) {
        items.sort_by(|a, b| b.date.cmp(&a.date));
    }
}

/// Category of an awareness entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AwarenessCategory {
    Benefits,
    Rules,
    BloodGroupInfo,
}

/// A static awareness/education entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwarenessInfo {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: AwarenessCategory,
}

impl Record for AwarenessInfo {
    fn id(&self) -> &str {
        &self.id
    }

    fn restore_order(_items: &mut [Self]) {
        // Seeded order is the display order.
    }
}

/// An executive committee member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitteeMember {
    pub id: String,
    pub name: String,
    pub designation: String,
    pub image_url: Option<String>,
    pub bio: Option<String>,
}

impl Record for CommitteeMember {
    fn id(&self) -> &str {
        &self.id
    }

    fn restore_order(_items: &mut [Self]) {
        // Seeded order is the display order.
    }
}
