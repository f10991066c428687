//! The application state store.
//!
//! [`AppStore`] owns every loaded collection plus the seeded ones. All
//! transitions are `&mut self` reducers; the store is single-threaded by
//! construction and never locks. Remote orchestration lives in
//! [`crate::sync`]; the store itself never touches the network.

use crate::collection::CollectionSlot;
use crate::seed;
use chrono::NaiveDate;
use raktadan_types::{
    AwarenessInfo, BlogPost, BloodGroup, BloodRequest, CampEvent, CommitteeMember, Donor,
};
use thiserror::Error;
use tracing::info;

/// Estimated blood bags collected at one organized campaign, used for
/// the dashboard's successful-donation figure.
pub const DONATIONS_PER_CAMPAIGN: usize = 45;

/// Result type for store reducers.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors produced by store reducers.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The targeted record is not in the collection.
    #[error("no record with id {id}")]
    NotFound { id: String },
}

/// Free-text and facet filters for the donor search view.
#[derive(Debug, Clone, Default)]
pub struct DonorFilter {
    /// Case-insensitive substring over name and address.
    pub text: Option<String>,
    pub blood_group: Option<BloodGroup>,
    /// Keep only donors past the donation interval.
    pub only_available: bool,
}

/// Aggregate figures for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_donors: usize,
    /// Events that have already taken place.
    pub campaigns_organized: usize,
    /// Campaigns times the per-campaign estimate, plus fulfilled requests.
    pub estimated_donations: usize,
}

/// All client-side application state.
#[derive(Debug, Default)]
pub struct AppStore {
    pub donors: CollectionSlot<Donor>,
    pub requests: CollectionSlot<BloodRequest>,
    pub blog_posts: CollectionSlot<BlogPost>,
    pub events: CollectionSlot<CampEvent>,
    awareness: Vec<AwarenessInfo>,
    committee: Vec<CommitteeMember>,
}

impl AppStore {
    /// A store with empty remote collections and the seeded static ones.
    #[must_use]
    pub fn new() -> Self {
        Self {
            awareness: seed::awareness_entries(),
            committee: seed::committee_members(),
            ..Self::default()
        }
    }

    /// The seeded awareness entries, in display order.
    #[must_use]
    pub fn awareness(&self) -> &[AwarenessInfo] {
        &self.awareness
    }

    /// The seeded committee members, in display order.
    #[must_use]
    pub fn committee(&self) -> &[CommitteeMember] {
        &self.committee
    }

    // ── Derived queries ─────────────────────────────────────────────

    /// Unfulfilled blood requests, newest first.
    #[must_use]
    pub fn active_requests(&self) -> Vec<&BloodRequest> {
        self.requests
            .items()
            .iter()
            .filter(|r| !r.is_fulfilled)
            .collect()
    }

    /// Donors matching the filter, in name order.
    #[must_use]
    pub fn find_donors(&self, filter: &DonorFilter, today: NaiveDate) -> Vec<&Donor> {
        let needle = filter
            .text
            .as_deref()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty());

        self.donors
            .items()
            .iter()
            .filter(|donor| {
                if let Some(group) = filter.blood_group {
                    if donor.blood_group != group {
                        return false;
                    }
                }
                if filter.only_available && !donor.is_available_on(today) {
                    return false;
                }
                match &needle {
                    Some(text) => {
                        donor.name.to_lowercase().contains(text)
                            || donor.address.to_lowercase().contains(text)
                    }
                    None => true,
                }
            })
            .collect()
    }

    /// Aggregate dashboard figures as of `today`.
    #[must_use]
    pub fn dashboard_stats(&self, today: NaiveDate) -> DashboardStats {
        let campaigns = self
            .events
            .items()
            .iter()
            .filter(|e| e.is_past(today))
            .count();
        let fulfilled = self
            .requests
            .items()
            .iter()
            .filter(|r| r.is_fulfilled)
            .count();
        DashboardStats {
            total_donors: self.donors.items().len(),
            campaigns_organized: campaigns,
            estimated_donations: campaigns * DONATIONS_PER_CAMPAIGN + fulfilled,
        }
    }

    // ── Local admin reducers ────────────────────────────────────────
    //
    // The admin panel edits blog posts and donors locally; these
    // reducers mutate only the in-memory collections.

    /// Adds a blog post at its sorted position.
    pub fn create_blog_post(&mut self, post: BlogPost) {
        info!(id = %post.id, "blog post created");
        self.blog_posts.insert(post);
    }

    /// Replaces an existing blog post.
    pub fn update_blog_post(&mut self, post: BlogPost) -> StoreResult<()> {
        let id = post.id.clone();
        if self.blog_posts.replace(post) {
            info!(%id, "blog post updated");
            Ok(())
        } else {
            Err(StoreError::NotFound { id })
        }
    }

    /// Deletes a blog post.
    pub fn delete_blog_post(&mut self, id: &str) -> StoreResult<()> {
        if self.blog_posts.remove(id) {
            info!(id, "blog post deleted");
            Ok(())
        } else {
            Err(StoreError::NotFound { id: id.to_string() })
        }
    }

    /// Replaces an existing donor record.
    pub fn update_donor(&mut self, donor: Donor) -> StoreResult<()> {
        let id = donor.id.clone();
        if self.donors.replace(donor) {
            info!(%id, "donor updated");
            Ok(())
        } else {
            Err(StoreError::NotFound { id })
        }
    }

    /// Deletes a donor record.
    pub fn delete_donor(&mut self, id: &str) -> StoreResult<()> {
        if self.donors.remove(id) {
            info!(id, "donor deleted");
            Ok(())
        } else {
            Err(StoreError::NotFound { id: id.to_string() })
        }
    }
}
