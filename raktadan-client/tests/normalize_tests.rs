use chrono::{NaiveDate, TimeZone, Utc};
use pretty_assertions::assert_eq;
use raktadan_client::{
    normalize_blog_posts, normalize_donors, normalize_events, normalize_requests,
};
use raktadan_types::BloodGroup;
use serde_json::json;

fn fetched_at() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap()
}

// ── Donors ──────────────────────────────────────────────────────

#[test]
fn donor_rows_map_to_internal_schema() {
    let rows = vec![json!({
        "id": "d-1",
        "পূর্ণ নাম": "Rahim Uddin",
        "বয়স (বছর)": "32",
        "রক্তের গ্রুপ": "B+",
        "ঠিকানা": "Khansama, Dinajpur",
        "মোবাইল নম্বর": "01712345678",
        "ইমেইল": "rahim@example.com",
        "শেষ রক্তদানের তারিখ": "2024-03-01",
        "স্বাস্থ্যের তথ্য": "none",
        "নিবন্ধনের তারিখ": "2023-11-20"
    })];

    let donors = normalize_donors(rows, fetched_at());
    assert_eq!(donors.len(), 1);
    let donor = &donors[0];
    assert_eq!(donor.id, "d-1");
    assert_eq!(donor.name, "Rahim Uddin");
    assert_eq!(donor.age, 32);
    assert_eq!(donor.blood_group, BloodGroup::BPositive);
    assert_eq!(donor.email.as_deref(), Some("rahim@example.com"));
    assert_eq!(
        donor.last_donation_date,
        Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
    );
    assert_eq!(
        donor.registration_date,
        NaiveDate::from_ymd_opt(2023, 11, 20).unwrap()
    );
}

#[test]
fn donor_missing_fields_use_the_fallback_policy() {
    let donors = normalize_donors(vec![json!({})], fetched_at());
    let donor = &donors[0];

    assert!(donor.id.starts_with("gs-donor-"));
    assert_eq!(donor.name, "N/A");
    assert_eq!(donor.age, 0);
    assert_eq!(donor.blood_group, BloodGroup::OPositive);
    assert_eq!(donor.address, "N/A");
    assert_eq!(donor.mobile, "N/A");
    assert_eq!(donor.email, None);
    assert_eq!(donor.last_donation_date, None);
    assert_eq!(donor.registration_date, fetched_at().date_naive());
}

#[test]
fn donor_blank_cells_count_as_missing() {
    let rows = vec![json!({ "পূর্ণ নাম": "  ", "ইমেইল": "" })];
    let donors = normalize_donors(rows, fetched_at());
    assert_eq!(donors[0].name, "N/A");
    assert_eq!(donors[0].email, None);
}

#[test]
fn donor_age_accepts_number_or_string() {
    let rows = vec![
        json!({ "পূর্ণ নাম": "a", "বয়স (বছর)": 45 }),
        json!({ "পূর্ণ নাম": "b", "বয়স (বছর)": "27" }),
        json!({ "পূর্ণ নাম": "c", "বয়স (বছর)": "not a number" }),
    ];
    let donors = normalize_donors(rows, fetched_at());
    assert_eq!(donors[0].age, 45);
    assert_eq!(donors[1].age, 27);
    assert_eq!(donors[2].age, 0);
}

#[test]
fn donor_unknown_blood_group_falls_back_to_o_positive() {
    let rows = vec![json!({ "রক্তের গ্রুপ": "Z-" })];
    let donors = normalize_donors(rows, fetched_at());
    assert_eq!(donors[0].blood_group, BloodGroup::OPositive);
}

#[test]
fn donors_are_sorted_by_name() {
    let rows = vec![
        json!({ "পূর্ণ নাম": "karim" }),
        json!({ "পূর্ণ নাম": "Abdul" }),
        json!({ "পূর্ণ নাম": "Jamal" }),
    ];
    let donors = normalize_donors(rows, fetched_at());
    let names: Vec<_> = donors.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["Abdul", "Jamal", "karim"]);
}

#[test]
fn synthesized_donor_ids_are_unique_within_a_fetch() {
    let rows = vec![json!({}); 25];
    let donors = normalize_donors(rows, fetched_at());
    let mut ids: Vec<_> = donors.iter().map(|d| d.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 25);
}

#[test]
fn normalization_is_idempotent_for_identical_input_and_time() {
    let rows = vec![
        json!({ "পূর্ণ নাম": "Rahim", "বয়স (বছর)": "30" }),
        json!({}),
    ];
    // Identity timestamps come from the injected fetch time, so even the
    // synthesized ids repeat here; across real runs only the id's
    // timestamp component may differ.
    let first = normalize_donors(rows.clone(), fetched_at());
    let second = normalize_donors(rows, fetched_at());
    assert_eq!(first, second);
}

// ── Blood requests ──────────────────────────────────────────────

#[test]
fn request_rows_map_and_sort_newest_first() {
    let rows = vec![
        json!({
            "রোগীর নাম": "Patient A",
            "হাসপাতালের নাম ও ঠিকানা": "Khansama Health Complex",
            "প্রয়োজনীয় রক্তের গ্রুপ": "O+",
            "ব্যাগের সংখ্যা": 2,
            "যোগাযোগকারীর নাম": "Contact A",
            "মোবাইল নাম্বার": "01812345678",
            "সাবমিট সময়": "2024-06-01T08:00:00Z"
        }),
        json!({
            "রোগীর নাম": "Patient B",
            "সাবমিট সময়": "2024-06-02T08:00:00Z"
        }),
    ];

    let requests = normalize_requests(rows, fetched_at());
    assert_eq!(requests[0].patient_name, "Patient B");
    assert_eq!(requests[1].patient_name, "Patient A");
    assert_eq!(requests[1].bags_needed, 2);
    assert!(!requests[0].is_fulfilled);
    assert!(requests[0].id.starts_with("gs-req-"));
}

#[test]
fn request_bag_count_defaults_to_one() {
    let rows = vec![
        json!({ "ব্যাগের সংখ্যা": 0 }),
        json!({ "ব্যাগের সংখ্যা": "garbage" }),
        json!({}),
    ];
    let requests = normalize_requests(rows, fetched_at());
    assert!(requests.iter().all(|r| r.bags_needed == 1));
}

#[test]
fn request_unparseable_submit_time_uses_fetch_time() {
    let rows = vec![json!({ "সাবমিট সময়": "yesterday-ish" })];
    let requests = normalize_requests(rows, fetched_at());
    assert_eq!(requests[0].posted_at, fetched_at());
}

// ── Blog posts ──────────────────────────────────────────────────

#[test]
fn blog_rows_map_tags_from_string_or_array() {
    let rows = vec![
        json!({
            "ID": "p1",
            "Title": "Why donate",
            "Date": "2024-05-01",
            "Tags (comma-separated)": "health, community , "
        }),
        json!({
            "ID": "p2",
            "Title": "Camp recap",
            "Date": "2024-06-01",
            "Tags (comma-separated)": ["camp", "recap"]
        }),
    ];

    let posts = normalize_blog_posts(rows, fetched_at());
    // Newest first.
    assert_eq!(posts[0].id, "p2");
    assert_eq!(posts[0].tags, vec!["camp", "recap"]);
    assert_eq!(posts[1].tags, vec!["health", "community"]);
}

#[test]
fn blog_missing_title_gets_untitled_marker() {
    let posts = normalize_blog_posts(vec![json!({})], fetched_at());
    assert_eq!(posts[0].title, "Untitled");
    assert_eq!(posts[0].excerpt, "");
    assert_eq!(posts[0].date, fetched_at().date_naive());
    assert!(posts[0].id.starts_with("gs-blog-"));
}

// ── Events ──────────────────────────────────────────────────────

#[test]
fn event_rows_map_and_split_gallery() {
    let rows = vec![json!({
        "ID (স্বতন্ত্র)": "e1",
        "Title (শিরোনাম)": "School camp",
        "Date (YYYY-MM-DD)": "2024-04-10",
        "Time (সময়)": "10:00",
        "Location (স্থান)": "Pakoria High School",
        "Description (বিবরণ)": "Annual camp",
        "Gallery (গ্যালারি - কমা দিয়ে একাধিক ছবির লিঙ্ক, ঐচ্ছিক)": "a.jpg, b.jpg, "
    })];

    let events = normalize_events(rows, fetched_at());
    let event = &events[0];
    assert_eq!(event.id, "e1");
    assert_eq!(event.date, NaiveDate::from_ymd_opt(2024, 4, 10).unwrap());
    assert_eq!(event.gallery, vec!["a.jpg", "b.jpg"]);
    assert_eq!(event.report, None);
}

#[test]
fn event_missing_fields_use_the_fallback_policy() {
    let events = normalize_events(vec![json!({})], fetched_at());
    let event = &events[0];
    assert!(event.id.starts_with("gs-event-"));
    assert_eq!(event.title, "Untitled");
    assert_eq!(event.time, "N/A");
    assert_eq!(event.location, "N/A");
    assert!(event.gallery.is_empty());
}

// ── Properties ──────────────────────────────────────────────────

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn synthesized_ids_never_collide(count in 0usize..64) {
            let rows = vec![json!({}); count];
            let donors = normalize_donors(rows, fetched_at());
            let mut ids: Vec<_> = donors.iter().map(|d| d.id.as_str()).collect();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), count);
        }

        #[test]
        fn every_donor_row_yields_exactly_one_record(count in 0usize..64) {
            let rows = vec![json!({ "পূর্ণ নাম": "x" }); count];
            let donors = normalize_donors(rows, fetched_at());
            prop_assert_eq!(donors.len(), count);
        }
    }
}
