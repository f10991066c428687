//! Remote synchronization orchestration.
//!
//! The [`Synchronizer`] ties the remote clients to the store. A refresh
//! is a token-arbitrated fetch into one slot. A submission runs the full
//! write path: validate locally, await the remote write (a failure
//! surfaces to the form and changes nothing), insert an optimistic local
//! record so the new entry is visible immediately, then await a
//! reconciliation fetch that replaces the collection wholesale with the
//! server's set. The optimistic record is discarded by that replacement.

use crate::store::AppStore;
use crate::validate::{
    validate_blood_request, validate_contact, validate_donor, ValidationError,
};
use chrono::Utc;
use raktadan_client::{
    BloodRequestSubmission, ContactSubmission, DonorSubmission, SheetClient, VolunteerSubmission,
    WriteError,
};
use thiserror::Error;
use tracing::{debug, info};

/// Result type for submissions.
pub type SubmitResult<T> = Result<T, SubmitError>;

/// Errors on the submission path.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The form failed local validation; nothing left the device.
    #[error("validation failed on {} field(s)", .0.len())]
    Invalid(Vec<ValidationError>),

    /// The remote write failed; no local state was changed.
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Synthesized id for an optimistic local record.
fn local_id() -> String {
    format!("local-{}", Utc::now().timestamp_millis())
}

/// Orchestrates fetches and writes against one [`SheetClient`].
pub struct Synchronizer<'a> {
    client: &'a SheetClient,
}

impl<'a> Synchronizer<'a> {
    #[must_use]
    pub fn new(client: &'a SheetClient) -> Self {
        Self { client }
    }

    // ── Refreshes ───────────────────────────────────────────────────

    /// Refetches the donor registry into the store.
    pub async fn refresh_donors(&self, store: &mut AppStore) {
        let token = store.donors.begin_fetch();
        let outcome = self.client.fetch_donors().await;
        store.donors.complete_fetch(token, outcome);
    }

    /// Refetches blood requests into the store.
    pub async fn refresh_requests(&self, store: &mut AppStore) {
        let token = store.requests.begin_fetch();
        let outcome = self.client.fetch_blood_requests().await;
        store.requests.complete_fetch(token, outcome);
    }

    /// Refetches blog posts into the store.
    pub async fn refresh_blog_posts(&self, store: &mut AppStore) {
        let token = store.blog_posts.begin_fetch();
        let outcome = self.client.fetch_blog_posts().await;
        store.blog_posts.complete_fetch(token, outcome);
    }

    /// Refetches camp events into the store.
    pub async fn refresh_events(&self, store: &mut AppStore) {
        let token = store.events.begin_fetch();
        let outcome = self.client.fetch_events().await;
        store.events.complete_fetch(token, outcome);
    }

    /// Refetches every remote collection.
    pub async fn refresh_all(&self, store: &mut AppStore) {
        self.refresh_donors(store).await;
        self.refresh_requests(store).await;
        self.refresh_blog_posts(store).await;
        self.refresh_events(store).await;
    }

    // ── Submissions ─────────────────────────────────────────────────

    /// Registers a donor and reconciles the donor collection.
    ///
    /// Returns the server's confirmation message.
    pub async fn register_donor(
        &self,
        store: &mut AppStore,
        submission: DonorSubmission,
    ) -> SubmitResult<String> {
        let today = Utc::now().date_naive();
        validate_donor(&submission, today).map_err(SubmitError::Invalid)?;

        let message = self.client.submit_donor(&submission).await?;

        let id = local_id();
        debug!(%id, "inserting optimistic donor record");
        store.donors.insert(submission.into_record(id, today));
        self.refresh_donors(store).await;

        info!("donor registration completed");
        Ok(message)
    }

    /// Posts a blood request and reconciles the request collection.
    pub async fn post_blood_request(
        &self,
        store: &mut AppStore,
        submission: BloodRequestSubmission,
    ) -> SubmitResult<String> {
        validate_blood_request(&submission).map_err(SubmitError::Invalid)?;

        let message = self.client.submit_blood_request(&submission).await?;

        let id = local_id();
        debug!(%id, "inserting optimistic request record");
        store.requests.insert(submission.into_record(id, Utc::now()));
        self.refresh_requests(store).await;

        info!("blood request posted");
        Ok(message)
    }

    /// Offers to donate against an open request.
    ///
    /// Volunteers are not a local collection; the request list is
    /// refetched so any remote fulfillment becomes visible.
    pub async fn volunteer_for_request(
        &self,
        store: &mut AppStore,
        submission: VolunteerSubmission,
    ) -> SubmitResult<String> {
        if !crate::validate::is_valid_mobile(&submission.volunteer_mobile) {
            return Err(SubmitError::Invalid(vec![ValidationError {
                field: "volunteer_mobile".to_string(),
                message: "enter an 11-digit mobile number starting with 013-019".to_string(),
            }]));
        }

        let message = self.client.submit_volunteer(&submission).await?;
        self.refresh_requests(store).await;
        Ok(message)
    }

    /// Sends a contact message. No collection is touched.
    pub async fn send_contact_message(
        &self,
        submission: ContactSubmission,
    ) -> SubmitResult<String> {
        validate_contact(&submission).map_err(SubmitError::Invalid)?;
        let message = self.client.submit_contact_message(&submission).await?;
        Ok(message)
    }
}
