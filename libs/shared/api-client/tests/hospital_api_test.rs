use assert_matches::assert_matches;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shared_api_client::{ApiError, HospitalApi, HospitalApiClient};
use shared_models::{BookingData, FetchOutcome};

fn doctor_json(id: &str, name: &str, specialization: &str) -> serde_json::Value {
    json!({
        "doctorId": id,
        "doctorName": name,
        "specialization": specialization,
        "experience": 12,
        "contact": "555-0101",
        "doctorImage": "https://images.example/doc.jpg"
    })
}

fn client_for(mock_server: &MockServer) -> HospitalApiClient {
    HospitalApiClient::with_base_url(&format!("{}/api", mock_server.uri()))
}

#[tokio::test]
async fn test_list_hospitals_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/get-all-hospital"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "_id": "h1",
                "name": "City General",
                "email": "info@city.example",
                "address": "1 Main St",
                "phone": "555-0100",
                "imageUrl": "https://images.example/h1.jpg",
                "createdAt": "2024-01-01T00:00:00.000Z",
                "updatedAt": "2024-01-01T00:00:00.000Z"
            }
        ])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let hospitals = client.list_hospitals().await;

    assert_matches!(hospitals, FetchOutcome::Loaded(ref items) if items.len() == 1);
    assert_eq!(hospitals.items()[0].name, "City General");
}

#[tokio::test]
async fn test_list_hospitals_server_error_is_reported_not_thrown() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/get-all-hospital"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let hospitals = client.list_hospitals().await;

    assert!(hospitals.is_failed());
    assert!(hospitals.into_items().is_empty());
}

#[tokio::test]
async fn test_list_doctors_unwraps_data_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/getall-doctors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "msg": "ok",
            "data": [
                doctor_json("d1", "Dr. Heart", "Cardiology"),
                doctor_json("d2", "Dr. Brain", "Neurology")
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let doctors = client.list_doctors().await.into_items();

    assert_eq!(doctors.len(), 2);
    assert_eq!(doctors[1].specialization, "Neurology");
    assert_eq!(doctors[0].experience, 12);
}

#[tokio::test]
async fn test_list_doctors_tolerates_null_profile_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/getall-doctors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "msg": "ok",
            "data": [
                doctor_json("d1", "Dr. Heart", "Cardiology"),
                {
                    "doctorId": "d2",
                    "doctorName": "Dr. Sparse",
                    "specialization": "Neurology",
                    "experience": null,
                    "contact": null,
                    "doctorImage": null
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let doctors = client.list_doctors().await;

    assert_matches!(doctors, FetchOutcome::Loaded(ref items) if items.len() == 2);
    let sparse = &doctors.items()[1];
    assert_eq!(sparse.experience, 0);
    assert_eq!(sparse.contact, "");
    assert_eq!(sparse.image().src, shared_models::PORTRAIT_PLACEHOLDER);
}

#[tokio::test]
async fn test_list_hospitals_tolerates_null_contact_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/get-all-hospital"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "_id": "h1", "name": "City General", "email": null, "phone": null, "imageUrl": null }
        ])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let hospitals = client.list_hospitals().await.into_items();

    assert_eq!(hospitals.len(), 1);
    assert_eq!(hospitals[0].phone, "");
    assert_eq!(hospitals[0].image().src, shared_models::HOSPITAL_IMAGE_PLACEHOLDER);
}

#[tokio::test]
async fn test_list_doctors_malformed_body_is_a_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/getall-doctors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert!(client.list_doctors().await.is_failed());
}

#[tokio::test]
async fn test_list_doctors_by_hospital_reads_first_roster() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/get-all-doctors-byhospital/h1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "doctors": [doctor_json("d1", "Dr. Heart", "Cardiology")] }
            ]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/get-all-doctors-byhospital/h2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let roster = client.list_doctors_by_hospital("h1").await;
    assert_eq!(roster.items().len(), 1);
    assert_eq!(roster.items()[0].doctor_id, "d1");

    let empty = client.list_doctors_by_hospital("h2").await;
    assert_eq!(empty, FetchOutcome::Loaded(vec![]));
}

#[tokio::test]
async fn test_list_slots_by_doctor() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/get-all-slots/d1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "slots": [{
                "_id": "g1",
                "userId": { "_id": "u1", "name": "Admin", "email": "admin@example.com" },
                "date": "2024-06-01",
                "doctorId": "d1",
                "slots": [
                    { "_id": "s1", "startTime": "09:00", "endTime": "09:30" },
                    { "_id": "s2", "startTime": "09:30", "endTime": "10:00" }
                ],
                "createdAt": "2024-05-01T00:00:00.000Z",
                "updatedAt": "2024-05-01T00:00:00.000Z"
            }]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let groups = client.list_slots_by_doctor("d1").await.into_items();

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].user_id.name, "Admin");
    assert_eq!(groups[0].slots[1].start_time, "09:30");
}

#[tokio::test]
async fn test_list_slots_unreachable_server_is_a_failure() {
    // Nothing listens on this port.
    let client = HospitalApiClient::with_base_url("http://127.0.0.1:9/api");
    assert!(client.list_slots_by_doctor("d1").await.is_failed());
}

#[tokio::test]
async fn test_submit_booking_posts_payload() {
    let mock_server = MockServer::start().await;

    let booking = BookingData {
        name: "Jane Doe".to_string(),
        contact_number: "+1 555 0100".to_string(),
        diagnosis: "Annual checkup".to_string(),
        doctor_id: "d1".to_string(),
        hospital_id: "h1".to_string(),
        slot_id: "s1".to_string(),
    };

    Mock::given(method("POST"))
        .and(path("/api/patients/add"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "name": "Jane Doe",
            "contactNumber": "+1 555 0100",
            "diagnosis": "Annual checkup",
            "doctorId": "d1",
            "hospitalId": "h1",
            "slotId": "s1"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "msg": "Patient added" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client.submit_booking(&booking).await.unwrap();

    assert_eq!(response["msg"], "Patient added");
}

#[tokio::test]
async fn test_submit_booking_failure_is_returned() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/patients/add"))
        .respond_with(ResponseTemplate::new(400).set_body_string("slot taken"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let booking = BookingData {
        name: "Jane".to_string(),
        contact_number: "1".to_string(),
        diagnosis: "x".to_string(),
        doctor_id: "d1".to_string(),
        hospital_id: "h1".to_string(),
        slot_id: "s1".to_string(),
    };

    let err = client.submit_booking(&booking).await.unwrap_err();
    assert_matches!(err, ApiError::Status { status: 400, ref body } if body == "slot taken");
}
