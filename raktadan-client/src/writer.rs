//! Remote writes: action-tagged JSON posts to the script endpoints.
//!
//! The endpoints accept `POST` bodies of the form
//! `{ "action": <name>, ...fields, <timestamp field>: <ISO-8601> }` and
//! answer with a `status`/`success` indicator plus a human-readable
//! `message`. Bodies are sent as `text/plain` — the script host rejects
//! a JSON content type in cross-origin requests.
//!
//! A successful call returns the server's message; a failed call never
//! mutates any local collection.

use crate::error::{WriteError, WriteResult};
use crate::SheetClient;
use chrono::{NaiveDate, Utc};
use raktadan_types::{text, BloodGroup, BloodRequest, Donor};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

/// Maximum characters of a raw body quoted in a rejection message.
const EXCERPT_LEN: usize = 100;

/// A donor registration as entered in the form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorSubmission {
    pub name: String,
    pub age: u32,
    pub blood_group: BloodGroup,
    pub address: String,
    pub mobile: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_donation_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_info: Option<String>,
}

impl DonorSubmission {
    /// Best-effort local copy of the submission, used for the optimistic
    /// insert while the authoritative refetch is pending.
    #[must_use]
    pub fn into_record(self, id: String, registration_date: NaiveDate) -> Donor {
        Donor {
            id,
            name: self.name,
            age: self.age,
            blood_group: self.blood_group,
            address: self.address,
            mobile: self.mobile,
            email: self.email,
            last_donation_date: self.last_donation_date,
            health_info: self.health_info,
            registration_date,
        }
    }
}

/// A blood request as entered in the form.
///
/// Wire field names follow the request sheet's expected payload, which
/// differs from the internal schema (`hospital`, `bagCount`, ...).
#[derive(Debug, Clone, Serialize)]
pub struct BloodRequestSubmission {
    #[serde(rename = "patientName")]
    pub patient_name: String,
    #[serde(rename = "hospital")]
    pub hospital_name: String,
    #[serde(rename = "bloodGroup")]
    pub blood_group: BloodGroup,
    #[serde(rename = "bagCount")]
    pub bags_needed: u32,
    #[serde(rename = "contactPerson")]
    pub contact_name: String,
    #[serde(rename = "contactNumber")]
    pub contact_mobile: String,
    #[serde(rename = "donorNumber")]
    pub emergency_contact_mobile: Option<String>,
    #[serde(rename = "extraInfo")]
    pub notes: Option<String>,
}

impl BloodRequestSubmission {
    /// Best-effort local copy of the submission for the optimistic insert.
    #[must_use]
    pub fn into_record(self, id: String, posted_at: chrono::DateTime<Utc>) -> BloodRequest {
        BloodRequest {
            id,
            patient_name: self.patient_name,
            hospital_name: self.hospital_name,
            blood_group: self.blood_group,
            bags_needed: self.bags_needed,
            contact_name: self.contact_name,
            contact_mobile: self.contact_mobile,
            emergency_contact_mobile: self.emergency_contact_mobile,
            posted_at,
            is_fulfilled: false,
            notes: self.notes,
        }
    }
}

/// A volunteer offer against an open blood request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerSubmission {
    pub request_id: String,
    pub patient_name: String,
    pub requested_blood_group: BloodGroup,
    pub volunteer_mobile: String,
}

/// A message sent through the contact form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub mobile: String,
    pub message: String,
}

impl SheetClient {
    /// Registers a new donor. Returns the server's confirmation message.
    pub async fn submit_donor(&self, submission: &DonorSubmission) -> WriteResult<String> {
        let url = self.endpoints().donor_url.clone();
        self.post_action(&url, "addDonor", submission, "timestamp")
            .await
    }

    /// Posts a new blood request. Returns the server's confirmation message.
    pub async fn submit_blood_request(
        &self,
        submission: &BloodRequestSubmission,
    ) -> WriteResult<String> {
        let url = self.endpoints().request_url.clone();
        self.post_action(&url, "addBloodRequest", submission, "timestamp")
            .await
    }

    /// Offers to donate against an open request.
    pub async fn submit_volunteer(&self, submission: &VolunteerSubmission) -> WriteResult<String> {
        let url = self.endpoints().request_url.clone();
        self.post_action(&url, "addVolunteerDonor", submission, "submissionTimestamp")
            .await
    }

    /// Sends a contact message.
    pub async fn submit_contact_message(
        &self,
        submission: &ContactSubmission,
    ) -> WriteResult<String> {
        let url = self.endpoints().contact_url.clone();
        self.post_action(&url, "addContactMessage", submission, "timestamp")
            .await
    }

    async fn post_action<T: Serialize>(
        &self,
        url: &str,
        action: &str,
        fields: &T,
        timestamp_field: &str,
    ) -> WriteResult<String> {
        let mut payload = serde_json::to_value(fields)?;
        let map = payload
            .as_object_mut()
            .ok_or_else(|| WriteError::Rejected {
                message: "submission payload must be an object".to_string(),
            })?;
        map.insert("action".to_string(), Value::String(action.to_string()));
        map.insert(
            timestamp_field.to_string(),
            Value::String(Utc::now().to_rfc3339()),
        );

        debug!(url, action, "submitting write");
        let response = self
            .http()
            .post(url)
            .header("Content-Type", "text/plain")
            .body(payload.to_string())
            .send()
            .await
            .map_err(|e| WriteError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| WriteError::Network(e.to_string()))?;

        match serde_json::from_str::<Value>(&body) {
            Ok(parsed) => {
                if write_succeeded(&parsed) {
                    let message = message_of(&parsed)
                        .unwrap_or_else(|| "submission recorded".to_string());
                    info!(action, "write accepted");
                    Ok(message)
                } else {
                    let message = message_of(&parsed)
                        .unwrap_or_else(|| format!("submission failed (HTTP {status})"));
                    warn!(action, %message, "write rejected");
                    Err(WriteError::Rejected { message })
                }
            }
            // Some script deployments answer accepted writes with plain text.
            Err(_) if status.is_success() && body.to_lowercase().contains("success") => {
                info!(action, "write accepted (non-JSON response)");
                Ok("submission recorded (no details from server)".to_string())
            }
            Err(_) if status.is_success() => Err(WriteError::Rejected {
                message: format!("unexpected response: {}", text::excerpt(&body, EXCERPT_LEN)),
            }),
            Err(_) => Err(WriteError::Http {
                status: status.as_u16(),
            }),
        }
    }
}

/// Whether a parsed write response declares success.
fn write_succeeded(parsed: &Value) -> bool {
    matches!(parsed.get("status"), Some(Value::String(s)) if s == "success")
        || matches!(parsed.get("success"), Some(Value::Bool(true)))
}

fn message_of(parsed: &Value) -> Option<String> {
    for key in ["message", "error"] {
        if let Some(Value::String(s)) = parsed.get(key) {
            if !s.is_empty() {
                return Some(s.clone());
            }
        }
    }
    None
}

