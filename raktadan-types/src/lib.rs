//! Core domain types for Raktadan.
//!
//! This crate defines the fixed internal schema that every remote payload
//! is normalized into, plus the derived projections built on top of it:
//! - Donor, blood request, blog post, and camp event records
//! - The eight-variant blood group enum
//! - Statically seeded awareness and committee records
//! - The ephemeral search-result projection
//!
//! Remote-shape handling and state management live in `raktadan-client`
//! and `raktadan-store` respectively; nothing here touches the network.

mod blood_group;
mod content;
mod donor;
mod request;
mod search;
pub mod text;

pub use blood_group::BloodGroup;
pub use content::{AwarenessCategory, AwarenessInfo, BlogPost, CampEvent, CommitteeMember};
pub use donor::{Donor, DONATION_INTERVAL_DAYS};
pub use request::BloodRequest;
pub use search::{NavigationTarget, SearchItemType, SearchResult};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown blood group: {0}")]
    UnknownBloodGroup(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A record held in an identity-keyed, ordered in-memory collection.
///
/// `restore_order` re-establishes the collection's canonical ordering
/// after an insert; each record type defines its own order (donors by
/// name, requests and content by date descending).
pub trait Record {
    /// The record's identity, unique within its collection.
    fn id(&self) -> &str;

    /// Re-sorts a collection into its canonical order.
    fn restore_order(items: &mut [Self])
    where
        Self: Sized;
}
