//! In-memory application state for Raktadan.
//!
//! The store is the single owner of client-side state: the four remote
//! collections in token-arbitrated [`CollectionSlot`]s, the seeded
//! awareness and committee collections, and everything derived from
//! them. Around it live the pure feature layers:
//!
//! - **Sync**: refresh and submission orchestration over the remote
//!   clients, including the optimistic insert + reconciliation flow.
//! - **Search**: keyword search across every loaded collection.
//! - **Validation**: per-field form rules, run before any write.
//! - **Health**: donation eligibility, BMI, and ideal-weight figures.
//!
//! All state transitions are `&mut self` reducers; the store assumes a
//! single-threaded owner and takes no locks.

mod collection;
mod health;
mod search;
mod seed;
mod store;
mod sync;
mod validate;

pub use collection::{CollectionSlot, FetchToken};
pub use health::{
    bmi, check_eligibility, ideal_weight_range, BmiCategory, Eligibility, EligibilityInput, Sex,
    MIN_WEIGHT_MALE_KG, MIN_WEIGHT_OTHER_KG,
};
pub use search::search;
pub use store::{
    AppStore, DashboardStats, DonorFilter, StoreError, StoreResult, DONATIONS_PER_CAMPAIGN,
};
pub use sync::{SubmitError, SubmitResult, Synchronizer};
pub use validate::{
    is_valid_mobile, validate_blood_request, validate_contact, validate_donor, ValidationError,
    ValidationResult,
};
