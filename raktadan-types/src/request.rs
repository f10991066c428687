//! Emergency blood requests.

use crate::{BloodGroup, Record};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A request for blood posted by or on behalf of a patient.
///
/// The request collection is kept sorted by posting time, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloodRequest {
    pub id: String,
    pub patient_name: String,
    pub hospital_name: String,
    pub blood_group: BloodGroup,
    pub bags_needed: u32,
    pub contact_name: String,
    pub contact_mobile: String,
    pub emergency_contact_mobile: Option<String>,
    pub posted_at: DateTime<Utc>,
    /// Defaults to false client-side; fulfillment is managed remotely.
    pub is_fulfilled: bool,
    pub notes: Option<String>,
}

impl Record for BloodRequest {
    fn id(&self) -> &str {
        &self.id
    }

    fn restore_order(items: &mut [Self]) {
        items.sort_by(|a, b| b.posted_at.cmp(&a.posted_at));
    }
}
