//! The ephemeral search-result projection.
//!
//! A [`SearchResult`] is produced on demand by a query over the loaded
//! collections and is never persisted.

use crate::BlogPost;
use serde::{Deserialize, Serialize};

/// The source collection a search result came from.
///
/// The discriminant order is the fixed grouping priority of result lists:
/// blog posts first, donors last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchItemType {
    Blog,
    Event,
    Awareness,
    Committee,
    Donor,
}

/// Where selecting a search result navigates to, with any payload the
/// destination view needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationTarget {
    /// Detail view carrying the full post.
    BlogPostDetail(Box<BlogPost>),
    /// Events view, positioned at the matched event.
    Events { event_id: String },
    /// The awareness page.
    Awareness,
    /// The committee page.
    Committee,
    /// Donor search view with the search box prefilled.
    FindDonor { prefill: String },
}

/// A single match projected from one of the loaded collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Identity of the result itself, e.g. `"blog-<original id>"`.
    pub id: String,
    pub title: String,
    pub item_type: SearchItemType,
    pub excerpt: String,
    pub target: NavigationTarget,
    pub original_id: String,
}
