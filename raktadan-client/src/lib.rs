//! Remote data clients for Raktadan.
//!
//! All persistent data lives behind spreadsheet-backed script endpoints;
//! this crate owns every interaction with them plus the generative-AI
//! text endpoint:
//!
//! - **Fetcher**: reads a collection, decodes the handful of response
//!   shapes the script endpoints are known to produce, and normalizes the
//!   raw rows into the fixed schema of `raktadan-types`.
//! - **Writer**: submits donor registrations, blood requests, volunteer
//!   offers, and contact messages as action-tagged JSON posts.
//! - **Chat**: sends a single prompt with a fixed per-feature system
//!   instruction and returns the generated text verbatim.
//!
//! Every operation is side-effect free beyond its network call and safe
//! to retry; failures are typed (see [`FetchError`], [`WriteError`],
//! [`ChatError`]) so callers can reset state and surface a message
//! instead of keeping stale data.

pub mod chat;
pub mod envelope;
mod config;
mod error;
mod fetcher;
mod normalize;
mod raw;
mod writer;

pub use chat::{ChatClient, ChatConfig, ChatHistory, ChatMessage, ChatSender};
pub use config::SheetEndpoints;
pub use error::{ChatError, ChatResult, FetchError, FetchResult, WriteError, WriteResult};
pub use fetcher::SheetClient;
pub use normalize::{
    normalize_blog_posts, normalize_donors, normalize_events, normalize_requests,
};
pub use writer::{
    BloodRequestSubmission, ContactSubmission, DonorSubmission, VolunteerSubmission,
};
