//! Normalization of raw sheet rows into the fixed internal schema.
//!
//! Every field has a missing-value policy: numeric fields fall back to a
//! fixed default, required strings to the `"N/A"` marker, optional
//! strings to `None`, dates to the fetch time, and a missing identity is
//! synthesized from a type tag, a timestamp, and the row's position
//! index, which keeps it unique within one fetch.
//!
//! Each function returns the collection already in its canonical order.

use crate::raw::{RawBlogRow, RawDonorRow, RawEventRow, RawRequestRow};
use chrono::{DateTime, NaiveDate, Utc};
use raktadan_types::{BlogPost, BloodGroup, BloodRequest, CampEvent, Donor, Record};
use serde_json::Value;
use tracing::debug;

/// Marker for required string fields the sheet left blank.
const NOT_AVAILABLE: &str = "N/A";

/// Marker for blog posts the sheet left untitled.
const UNTITLED: &str = "Untitled";

/// Normalizes donor rows; sorted by name.
pub fn normalize_donors(rows: Vec<Value>, fetched_at: DateTime<Utc>) -> Vec<Donor> {
    let today = fetched_at.date_naive();
    let mut donors: Vec<Donor> = rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| {
            let raw: RawDonorRow = serde_json::from_value(row).unwrap_or_default();
            Donor {
                id: identity(raw.id, "gs-donor", fetched_at, index),
                name: required(raw.name),
                age: raw.age.and_then(|a| a.as_u32()).unwrap_or(0),
                blood_group: blood_group_or_default(raw.blood_group),
                address: required(raw.address),
                mobile: required(raw.mobile),
                email: optional(raw.email),
                last_donation_date: optional(raw.last_donation_date).and_then(parse_date),
                health_info: optional(raw.health_info),
                registration_date: optional(raw.registration_date)
                    .and_then(parse_date)
                    .unwrap_or(today),
            }
        })
        .collect();
    debug!(count = donors.len(), "normalized donor rows");
    Donor::restore_order(&mut donors);
    donors
}

/// Normalizes blood request rows; sorted newest first.
pub fn normalize_requests(rows: Vec<Value>, fetched_at: DateTime<Utc>) -> Vec<BloodRequest> {
    let mut requests: Vec<BloodRequest> = rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| {
            let raw: RawRequestRow = serde_json::from_value(row).unwrap_or_default();
            let posted_at = optional(raw.submitted_at)
                .and_then(|s| parse_timestamp(&s))
                .unwrap_or(fetched_at);
            BloodRequest {
                id: raw
                    .id
                    .and_then(non_blank)
                    .unwrap_or_else(|| synthesized_id("gs-req", posted_at, index)),
                patient_name: required(raw.patient_name),
                hospital_name: required(raw.hospital_name),
                blood_group: blood_group_or_default(raw.blood_group),
                bags_needed: raw
                    .bags_needed
                    .and_then(|b| b.as_u32())
                    .filter(|n| *n > 0)
                    .unwrap_or(1),
                contact_name: required(raw.contact_name),
                contact_mobile: required(raw.contact_mobile),
                emergency_contact_mobile: optional(raw.emergency_contact_mobile),
                posted_at,
                // Fulfillment is managed remotely; rows arrive unfulfilled.
                is_fulfilled: false,
                notes: optional(raw.notes),
            }
        })
        .collect();
    debug!(count = requests.len(), "normalized blood request rows");
    BloodRequest::restore_order(&mut requests);
    requests
}

/// Normalizes blog post rows; sorted newest first.
pub fn normalize_blog_posts(rows: Vec<Value>, fetched_at: DateTime<Utc>) -> Vec<BlogPost> {
    let today = fetched_at.date_naive();
    let mut posts: Vec<BlogPost> = rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| {
            let raw: RawBlogRow = serde_json::from_value(row).unwrap_or_default();
            BlogPost {
                id: identity(raw.id, "gs-blog", fetched_at, index),
                title: optional(raw.title).unwrap_or_else(|| UNTITLED.to_string()),
                excerpt: optional(raw.excerpt).unwrap_or_default(),
                content: optional(raw.content).unwrap_or_default(),
                author: optional(raw.author),
                date: optional(raw.date).and_then(parse_date).unwrap_or(today),
                image_url: optional(raw.image_url),
                category: optional(raw.category),
                tags: raw.tags.map(|t| t.into_items()).unwrap_or_default(),
            }
        })
        .collect();
    debug!(count = posts.len(), "normalized blog post rows");
    BlogPost::restore_order(&mut posts);
    posts
}

/// Normalizes event rows; sorted newest first.
pub fn normalize_events(rows: Vec<Value>, fetched_at: DateTime<Utc>) -> Vec<CampEvent> {
    let today = fetched_at.date_naive();
    let mut events: Vec<CampEvent> = rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| {
            let raw: RawEventRow = serde_json::from_value(row).unwrap_or_default();
            CampEvent {
                id: identity(raw.id, "gs-event", fetched_at, index),
                title: optional(raw.title).unwrap_or_else(|| UNTITLED.to_string()),
                date: optional(raw.date).and_then(parse_date).unwrap_or(today),
                time: required(raw.time),
                location: required(raw.location),
                description: optional(raw.description).unwrap_or_default(),
                image_url: optional(raw.image_url),
                report: optional(raw.report),
                gallery: optional(raw.gallery)
                    .map(|cell| {
                        cell.split(',')
                            .map(|url| url.trim().to_string())
                            .filter(|url| !url.is_empty())
                            .collect()
                    })
                    .unwrap_or_default(),
            }
        })
        .collect();
    debug!(count = events.len(), "normalized event rows");
    CampEvent::restore_order(&mut events);
    events
}

/// Supplied identity, or one synthesized from tag + timestamp + index.
fn identity(id: Option<String>, tag: &str, at: DateTime<Utc>, index: usize) -> String {
    id.and_then(non_blank)
        .unwrap_or_else(|| synthesized_id(tag, at, index))
}

fn synthesized_id(tag: &str, at: DateTime<Utc>, index: usize) -> String {
    format!("{tag}-{}-{index}", at.timestamp_millis())
}

/// Trimmed value, or the `"N/A"` marker when blank.
fn required(value: Option<String>) -> String {
    value
        .and_then(non_blank)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Trimmed value, with blank cells treated as absent.
fn optional(value: Option<String>) -> Option<String> {
    value.and_then(non_blank)
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn blood_group_or_default(value: Option<String>) -> BloodGroup {
    value
        .and_then(|s| s.parse().ok())
        .unwrap_or(BloodGroup::OPositive)
}

fn parse_date(value: String) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
