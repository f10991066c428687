use raktadan_client::{
    BloodRequestSubmission, ContactSubmission, DonorSubmission, SheetClient, SheetEndpoints,
    VolunteerSubmission,
};
use raktadan_store::{AppStore, SubmitError, Synchronizer};
use raktadan_types::BloodGroup;
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn donor_submission() -> DonorSubmission {
    DonorSubmission {
        name: "Rahim Uddin".to_string(),
        age: 30,
        blood_group: BloodGroup::APositive,
        address: "Khansama".to_string(),
        mobile: "01712345678".to_string(),
        email: None,
        last_donation_date: None,
        health_info: None,
    }
}

fn request_submission() -> BloodRequestSubmission {
    BloodRequestSubmission {
        patient_name: "Patient".to_string(),
        hospital_name: "Khansama Health Complex".to_string(),
        blood_group: BloodGroup::OPositive,
        bags_needed: 2,
        contact_name: "Contact".to_string(),
        contact_mobile: "01812345678".to_string(),
        emergency_contact_mobile: None,
        notes: None,
    }
}

async fn client_for(server: &MockServer) -> SheetClient {
    SheetClient::new(SheetEndpoints::with_base(&server.uri()))
}

// ── Refresh ─────────────────────────────────────────────────────

#[tokio::test]
async fn refresh_loads_the_collection_and_clears_the_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/donors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [ { "পূর্ণ নাম": "Rahim" } ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let sync = Synchronizer::new(&client);
    let mut store = AppStore::new();

    sync.refresh_donors(&mut store).await;
    assert_eq!(store.donors.items().len(), 1);
    assert!(store.donors.error().is_none());
    assert!(!store.donors.is_loading());
}

#[tokio::test]
async fn refresh_failure_empties_the_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/requests"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "error": "sheet not found" })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let sync = Synchronizer::new(&client);
    let mut store = AppStore::new();

    sync.refresh_requests(&mut store).await;
    assert!(store.requests.items().is_empty());
    assert!(store.requests.error().unwrap().contains("sheet not found"));
}

// ── Donor registration ──────────────────────────────────────────

#[tokio::test]
async fn registration_writes_then_reconciles_with_the_server_set() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/donors"))
        .and(body_string_contains("\"action\":\"addDonor\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true, "message": "donor recorded"
        })))
        .expect(1)
        .mount(&server)
        .await;
    // The reconciliation fetch answers with the authoritative set; the
    // optimistic record is replaced by it.
    Mock::given(method("GET"))
        .and(path("/donors"))
        .and(query_param("action", "getDonors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "id": "d-100", "পূর্ণ নাম": "Rahim Uddin" },
                { "id": "d-1", "পূর্ণ নাম": "Karim Mia" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let sync = Synchronizer::new(&client);
    let mut store = AppStore::new();

    let message = sync
        .register_donor(&mut store, donor_submission())
        .await
        .unwrap();
    assert_eq!(message, "donor recorded");

    let ids: Vec<_> = store.donors.items().iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, ["d-1", "d-100"]);
    assert!(!ids.iter().any(|id| id.starts_with("local-")));
}

#[tokio::test]
async fn rejected_registration_changes_nothing_locally() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/donors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "error", "message": "duplicate mobile number"
        })))
        .expect(1)
        .mount(&server)
        .await;
    // No reconciliation fetch after a failed write.
    Mock::given(method("GET"))
        .and(path("/donors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let sync = Synchronizer::new(&client);
    let mut store = AppStore::new();

    let err = sync
        .register_donor(&mut store, donor_submission())
        .await
        .unwrap_err();
    assert!(matches!(err, SubmitError::Write(_)));
    assert!(store.donors.items().is_empty());
}

#[tokio::test]
async fn invalid_registration_never_reaches_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let sync = Synchronizer::new(&client);
    let mut store = AppStore::new();

    let submission = DonorSubmission {
        mobile: "not a number".to_string(),
        ..donor_submission()
    };
    let err = sync
        .register_donor(&mut store, submission)
        .await
        .unwrap_err();
    match err {
        SubmitError::Invalid(errors) => assert_eq!(errors[0].field, "mobile"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(store.donors.items().is_empty());
}

#[tokio::test]
async fn accepted_write_with_failed_reconciliation_reports_the_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/requests"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": "success" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/requests"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let sync = Synchronizer::new(&client);
    let mut store = AppStore::new();

    // The write itself succeeded.
    sync.post_blood_request(&mut store, request_submission())
        .await
        .unwrap();
    // The reconciliation failed, so the slot is empty with an error
    // rather than keeping the optimistic record.
    assert!(store.requests.items().is_empty());
    assert!(store.requests.error().is_some());
}

// ── Volunteer and contact flows ─────────────────────────────────

#[tokio::test]
async fn volunteering_refetches_the_request_list() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/requests"))
        .and(body_string_contains("\"action\":\"addVolunteerDonor\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "success" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/requests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "রোগীর নাম": "Patient" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let sync = Synchronizer::new(&client);
    let mut store = AppStore::new();

    let submission = VolunteerSubmission {
        request_id: "req-9".to_string(),
        patient_name: "Patient".to_string(),
        requested_blood_group: BloodGroup::AbPositive,
        volunteer_mobile: "01912345678".to_string(),
    };
    sync.volunteer_for_request(&mut store, submission)
        .await
        .unwrap();
    assert_eq!(store.requests.items().len(), 1);
}

#[tokio::test]
async fn contact_message_touches_no_collection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/contact"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true, "message": "thanks"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let sync = Synchronizer::new(&client);

    let submission = ContactSubmission {
        name: "Visitor".to_string(),
        mobile: "01712345678".to_string(),
        message: "How do I join?".to_string(),
    };
    let message = sync.send_contact_message(submission).await.unwrap();
    assert_eq!(message, "thanks");
}
