use std::sync::Arc;
use std::time::Duration;

use assert_matches::assert_matches;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use booking_cell::router::booking_routes;
use booking_cell::{BookingError, BookingPhase, BookingService, DetailsUpdate, FormField};
use shared_api_client::HospitalApiClient;
use shared_utils::test_utils::{Fixtures, StubHospitalApi, TestConfig};

const DELAY: Duration = Duration::from_secs(5);

fn stub() -> StubHospitalApi {
    StubHospitalApi::new()
        .with_hospitals(vec![
            Fixtures::hospital("h1", "City General"),
            Fixtures::hospital("h2", "Lakeside Clinic"),
        ])
        .with_hospital_doctors("h1", vec![Fixtures::doctor("d1", "Dr. Heart", "Cardiology")])
        .with_hospital_doctors("h2", vec![Fixtures::doctor("d2", "Dr. Brain", "Neurology")])
        .with_slots(
            "d1",
            vec![Fixtures::slot_group("d1", "2024-06-01", vec![Fixtures::slot("s1", "09:00", "09:30")])],
        )
        .with_slots(
            "d2",
            vec![Fixtures::slot_group("d2", "2024-06-03", vec![Fixtures::slot("s7", "11:00", "11:30")])],
        )
}

async fn fill(service: &BookingService, session: Uuid) {
    service.select_hospital(session, "h1").await.unwrap();
    service.select_doctor(session, "d1").await.unwrap();
    service.select_slot(session, "s1").await.unwrap();
    service
        .update_details(
            session,
            DetailsUpdate {
                name: Some("Jane Doe".to_string()),
                contact_number: Some("555-0100".to_string()),
                diagnosis: Some("Annual checkup".to_string()),
            },
        )
        .await
        .unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_successful_booking_resets_after_delay() {
    let api = stub();
    let service = BookingService::with_confirmation_delay(Arc::new(api.clone()), DELAY);
    let session = Uuid::new_v4();
    service.mount(session).await;
    fill(&service, session).await;

    let view = service.submit(session).await.unwrap();
    assert_eq!(view.phase, BookingPhase::Submitted);
    assert_eq!(api.bookings().len(), 1);

    tokio::time::sleep(Duration::from_secs(4)).await;
    let view = service.view(session).await.unwrap();
    assert!(view.confirmation.is_some());
    assert_eq!(view.details.name, "Jane Doe");

    tokio::time::sleep(Duration::from_secs(2)).await;
    let view = service.view(session).await.unwrap();
    assert!(view.confirmation.is_none());
    assert_eq!(view.hospital.value, "");
    assert_eq!(view.doctor.value, "");
    assert_eq!(view.slot.value, "");
    assert_eq!(view.details.name, "");
    assert_eq!(view.details.contact_number, "");
    assert_eq!(view.details.diagnosis, "");
    assert_eq!(view.hospital.options.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_old_timer_does_not_wipe_newer_form() {
    let api = stub();
    let service = BookingService::with_confirmation_delay(Arc::new(api), DELAY);
    let session = Uuid::new_v4();
    service.mount(session).await;

    fill(&service, session).await;
    service.submit(session).await.unwrap();

    tokio::time::sleep(Duration::from_secs(3)).await;
    service.dismiss_confirmation(session).await.unwrap();
    fill(&service, session).await;
    service.submit(session).await.unwrap();

    // First timer fires here and must be ignored.
    tokio::time::sleep(Duration::from_secs(3)).await;
    assert!(service.view(session).await.unwrap().confirmation.is_some());

    tokio::time::sleep(Duration::from_secs(3)).await;
    assert!(service.view(session).await.unwrap().confirmation.is_none());
}

#[tokio::test]
async fn test_failed_booking_keeps_form_and_alerts() {
    let api = stub().failing_bookings("database unavailable");
    let service = BookingService::with_confirmation_delay(Arc::new(api.clone()), DELAY);
    let session = Uuid::new_v4();
    service.mount(session).await;
    fill(&service, session).await;

    let err = service.submit(session).await.unwrap_err();
    assert_matches!(err, BookingError::SubmissionFailed(_));

    let view = service.view(session).await.unwrap();
    assert_eq!(view.alert.as_deref(), Some("Failed to book appointment. Please try again."));
    assert_eq!(view.hospital.value, "h1");
    assert_eq!(view.doctor.value, "d1");
    assert_eq!(view.slot.value, "s1");
    assert_eq!(view.details.diagnosis, "Annual checkup");
    assert!(view.can_submit);

    api.accept_bookings();
    let view = service.submit(session).await.unwrap();
    assert_eq!(view.phase, BookingPhase::Submitted);
    assert!(view.alert.is_none());
}

#[tokio::test]
async fn test_second_submit_while_in_flight_is_rejected() {
    let api = stub();
    let gate = api.hold("booking");
    let service = Arc::new(BookingService::with_confirmation_delay(Arc::new(api.clone()), DELAY));
    let session = Uuid::new_v4();
    service.mount(session).await;
    fill(&service, session).await;

    let first = {
        let service = service.clone();
        tokio::spawn(async move { service.submit(session).await })
    };
    while service.view(session).await.unwrap().phase != BookingPhase::Submitting {
        tokio::task::yield_now().await;
    }

    assert_eq!(service.submit(session).await.unwrap_err(), BookingError::SubmissionInFlight);
    assert!(service.view(session).await.unwrap().submit.disabled);

    gate.notify_one();
    first.await.unwrap().unwrap();
    assert_eq!(api.bookings().len(), 1);
}

#[tokio::test]
async fn test_abandoned_submit_still_settles_the_form() {
    let api = stub().failing_bookings("gateway timeout");
    let gate = api.hold("booking");
    let service = Arc::new(BookingService::with_confirmation_delay(Arc::new(api.clone()), DELAY));
    let session = Uuid::new_v4();
    service.mount(session).await;
    fill(&service, session).await;

    let request = {
        let service = service.clone();
        tokio::spawn(async move { service.submit(session).await })
    };
    while !api.calls().iter().any(|c| c == "booking") {
        tokio::task::yield_now().await;
    }

    // The visitor disconnects while the POST is outstanding.
    request.abort();
    assert!(request.await.unwrap_err().is_cancelled());

    gate.notify_one();
    while service.view(session).await.unwrap().phase == BookingPhase::Submitting {
        tokio::task::yield_now().await;
    }

    let view = service.view(session).await.unwrap();
    assert_eq!(view.alert.as_deref(), Some("Failed to book appointment. Please try again."));
    assert!(!view.submit.disabled);

    let view = service.select_hospital(session, "h2").await.unwrap();
    assert_eq!(view.hospital.value, "h2");
    assert_eq!(view.doctor.value, "");
}

#[tokio::test]
async fn test_abandoned_submit_still_books_and_confirms() {
    let api = stub();
    let gate = api.hold("booking");
    let service = Arc::new(BookingService::with_confirmation_delay(Arc::new(api.clone()), DELAY));
    let session = Uuid::new_v4();
    service.mount(session).await;
    fill(&service, session).await;

    let request = {
        let service = service.clone();
        tokio::spawn(async move { service.submit(session).await })
    };
    while !api.calls().iter().any(|c| c == "booking") {
        tokio::task::yield_now().await;
    }
    request.abort();

    gate.notify_one();
    while service.view(session).await.unwrap().phase == BookingPhase::Submitting {
        tokio::task::yield_now().await;
    }

    assert_eq!(service.view(session).await.unwrap().phase, BookingPhase::Submitted);
    assert_eq!(api.bookings().len(), 1);

    let view = service.dismiss_confirmation(session).await.unwrap();
    assert!(view.confirmation.is_none());
    service.update_field(session, FormField::Name, "John Roe").await.unwrap();
}

#[tokio::test]
async fn test_slow_doctor_list_for_abandoned_hospital_is_dropped() {
    let api = stub();
    let gate = api.hold("doctors:h1");
    let service = Arc::new(BookingService::with_confirmation_delay(Arc::new(api), DELAY));
    let session = Uuid::new_v4();
    service.mount(session).await;

    let slow = {
        let service = service.clone();
        tokio::spawn(async move { service.select_hospital(session, "h1").await })
    };
    while service.view(session).await.unwrap().hospital.value != "h1" {
        tokio::task::yield_now().await;
    }

    let view = service.select_hospital(session, "h2").await.unwrap();
    assert_eq!(view.doctor.options[1].value, "d2");

    gate.notify_one();
    slow.await.unwrap().unwrap();

    let view = service.view(session).await.unwrap();
    assert_eq!(view.hospital.value, "h2");
    assert_eq!(view.doctor.options.len(), 2);
    assert_eq!(view.doctor.options[1].value, "d2");
}

#[tokio::test]
async fn test_slow_slots_for_abandoned_doctor_are_dropped() {
    let api = stub().with_hospital_doctors(
        "h1",
        vec![
            Fixtures::doctor("d1", "Dr. Heart", "Cardiology"),
            Fixtures::doctor("d2", "Dr. Brain", "Neurology"),
        ],
    );
    let gate = api.hold("slots:d1");
    let service = Arc::new(BookingService::with_confirmation_delay(Arc::new(api), DELAY));
    let session = Uuid::new_v4();
    service.mount(session).await;
    service.select_hospital(session, "h1").await.unwrap();

    let slow = {
        let service = service.clone();
        tokio::spawn(async move { service.select_doctor(session, "d1").await })
    };
    while service.view(session).await.unwrap().doctor.value != "d1" {
        tokio::task::yield_now().await;
    }

    service.select_doctor(session, "d2").await.unwrap();
    gate.notify_one();
    slow.await.unwrap().unwrap();

    let view = service.view(session).await.unwrap();
    assert_eq!(view.doctor.value, "d2");
    let slots: Vec<_> = view.slot.options.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(slots, ["", "s7"]);
}

#[tokio::test]
async fn test_full_flow_posts_exactly_one_booking() {
    let mock_server = MockServer::start().await;
    let config = TestConfig::with_mock_server(&mock_server.uri()).to_app_config();

    Mock::given(method("GET"))
        .and(path("/api/get-all-hospital"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([Fixtures::hospital_json("h1", "City General")])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/get-all-doctors-byhospital/h1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "doctors": [Fixtures::doctor_json("d1", "Dr. Heart", "Cardiology")] }]
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/get-all-slots/d1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "slots": [{
                "_id": "g1",
                "date": "2024-06-01",
                "doctorId": "d1",
                "slots": [{ "_id": "s1", "startTime": "09:00", "endTime": "09:30" }]
            }]
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/patients/add"))
        .and(body_json(json!({
            "name": "Jane Doe",
            "contactNumber": "555-0100",
            "diagnosis": "Annual checkup",
            "doctorId": "d1",
            "hospitalId": "h1",
            "slotId": "s1"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "msg": "Patient added" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = BookingService::new(Arc::new(HospitalApiClient::new(&config)), &config);
    let session = Uuid::new_v4();
    service.mount(session).await;
    fill(&service, session).await;

    let view = service.submit(session).await.unwrap();
    assert_eq!(view.phase, BookingPhase::Submitted);
}

#[tokio::test]
async fn test_routes_drive_the_workflow() {
    let api = stub();
    let service = Arc::new(BookingService::with_confirmation_delay(Arc::new(api.clone()), DELAY));
    let session = Uuid::new_v4();
    service.mount(session).await;

    let send = |method: &str, uri: String, body: Value| {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    };

    let app = booking_routes(service.clone());
    let response = app
        .clone()
        .oneshot(send("POST", format!("/sessions/{}/booking/hospital", session), json!({ "value": "h1" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(send("POST", format!("/sessions/{}/booking/slot", session), json!({ "value": "s1" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(send("POST", format!("/sessions/{}/booking/submit", session), json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(send("PATCH", format!("/sessions/{}/booking/details", session), json!({ "name": "Jane" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let view: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(view["details"]["name"], "Jane");
    assert_eq!(view["submit"]["disabled"], true);
    assert_eq!(view["phase"]["phase"], "doctorsLoaded");

    let view = service.update_field(session, FormField::Name, "  ").await.unwrap();
    assert!(view.missing.contains(&"name"));
    assert!(api.bookings().is_empty());
}

#[tokio::test]
async fn test_unknown_session_is_not_found() {
    let service = Arc::new(BookingService::with_confirmation_delay(Arc::new(stub()), DELAY));

    let response = booking_routes(service)
        .oneshot(
            Request::builder()
                .uri(format!("/sessions/{}/booking", Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
