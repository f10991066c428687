//! Cross-collection keyword search.
//!
//! A query is matched as a case-insensitive contiguous substring of each
//! record's searchable text (the concatenation of that type's text
//! fields). Matching is diacritic-sensitive; Bengali text matches only
//! its exact form. Results are grouped in the fixed type priority order
//! with the source collection's order preserved inside each group.

use crate::AppStore;
use raktadan_types::{text, NavigationTarget, SearchItemType, SearchResult};

const EXCERPT_LEN: usize = 150;

/// Runs a keyword search over every loaded collection.
///
/// An empty or whitespace-only query returns no results without
/// touching the collections.
#[must_use]
pub fn search(store: &AppStore, query: &str) -> Vec<SearchResult> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut results = Vec::new();

    for post in store.blog_posts.items() {
        let haystack = [
            post.title.as_str(),
            post.excerpt.as_str(),
            post.content.as_str(),
            post.category.as_deref().unwrap_or(""),
            &post.tags.join(" "),
        ];
        if matches(&haystack, &needle) {
            results.push(SearchResult {
                id: format!("blog-{}", post.id),
                title: post.title.clone(),
                item_type: SearchItemType::Blog,
                excerpt: excerpt_of(if post.excerpt.is_empty() {
                    &post.content
                } else {
                    &post.excerpt
                }),
                target: NavigationTarget::BlogPostDetail(Box::new(post.clone())),
                original_id: post.id.clone(),
            });
        }
    }

    for event in store.events.items() {
        let haystack = [
            event.title.as_str(),
            event.description.as_str(),
            event.location.as_str(),
        ];
        if matches(&haystack, &needle) {
            results.push(SearchResult {
                id: format!("event-{}", event.id),
                title: event.title.clone(),
                item_type: SearchItemType::Event,
                excerpt: excerpt_of(&event.description),
                target: NavigationTarget::Events {
                    event_id: event.id.clone(),
                },
                original_id: event.id.clone(),
            });
        }
    }

    for info in store.awareness() {
        let haystack = [info.title.as_str(), info.content.as_str()];
        if matches(&haystack, &needle) {
            results.push(SearchResult {
                id: format!("awareness-{}", info.id),
                title: info.title.clone(),
                item_type: SearchItemType::Awareness,
                excerpt: excerpt_of(&info.content),
                target: NavigationTarget::Awareness,
                original_id: info.id.clone(),
            });
        }
    }

    for member in store.committee() {
        let haystack = [
            member.name.as_str(),
            member.designation.as_str(),
            member.bio.as_deref().unwrap_or(""),
        ];
        if matches(&haystack, &needle) {
            results.push(SearchResult {
                id: format!("committee-{}", member.id),
                title: member.name.clone(),
                item_type: SearchItemType::Committee,
                excerpt: excerpt_of(&member.designation),
                target: NavigationTarget::Committee,
                original_id: member.id.clone(),
            });
        }
    }

    for donor in store.donors.items() {
        let haystack = [donor.name.as_str(), donor.address.as_str()];
        if matches(&haystack, &needle) {
            results.push(SearchResult {
                id: format!("donor-{}", donor.id),
                title: donor.name.clone(),
                item_type: SearchItemType::Donor,
                excerpt: excerpt_of(&format!("{} donor, {}", donor.blood_group, donor.address)),
                target: NavigationTarget::FindDonor {
                    prefill: donor.name.clone(),
                },
                original_id: donor.id.clone(),
            });
        }
    }

    results
}

/// The fields are joined into one haystack before matching, so a query
/// may span the boundary between two adjacent fields.
fn matches(fields: &[&str], needle: &str) -> bool {
    fields.join(" ").to_lowercase().contains(needle)
}

fn excerpt_of(text: &str) -> String {
    text::excerpt(text, EXCERPT_LEN)
}
