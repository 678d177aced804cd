use std::sync::Arc;

use assert_matches::assert_matches;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use doctor_cell::router::doctor_routes;
use doctor_cell::DoctorDirectoryService;
use shared_api_client::HospitalApiClient;
use shared_models::LoadState;
use shared_utils::test_utils::{Fixtures, StubHospitalApi, TestConfig};

fn roster() -> Vec<shared_models::Doctor> {
    let specialties = ["Cardiology", "Neurology", "Pediatrics"];
    (1..=20)
        .map(|i| {
            Fixtures::doctor(
                &format!("d{}", i),
                &format!("Dr. {}", i),
                specialties[i % specialties.len()],
            )
        })
        .collect()
}

#[tokio::test]
async fn test_mount_fetches_all_doctors_from_api() {
    let mock_server = MockServer::start().await;
    let config = TestConfig::with_mock_server(&mock_server.uri()).to_app_config();

    Mock::given(method("GET"))
        .and(path("/api/getall-doctors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "msg": "Doctors fetched",
            "data": [
                Fixtures::doctor_json("d1", "Dr. Heart", "Cardiology"),
                Fixtures::doctor_json("d2", "Dr. Brain", "Neurology"),
                Fixtures::doctor_json("d3", "Dr. Pulse", "Cardiology")
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = DoctorDirectoryService::new(Arc::new(HospitalApiClient::new(&config)));
    let view = service.mount(Uuid::new_v4()).await;

    assert_eq!(view.state, LoadState::Ready);
    assert_eq!(view.total, 3);
    let labels: Vec<_> = view.filters.iter().map(|f| f.label.as_str()).collect();
    assert_eq!(labels, ["All", "Cardiology", "Neurology"]);
    assert!(view.filters[0].active);
}

#[tokio::test]
async fn test_api_outage_shows_error_state() {
    let mock_server = MockServer::start().await;
    let config = TestConfig::with_mock_server(&mock_server.uri()).to_app_config();

    Mock::given(method("GET"))
        .and(path("/api/getall-doctors"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let service = DoctorDirectoryService::new(Arc::new(HospitalApiClient::new(&config)));
    let view = service.mount(Uuid::new_v4()).await;

    assert_matches!(view.state, LoadState::Failed { .. });
    assert_eq!(view.filters.len(), 1);
    assert!(view.cards.is_empty());
}

#[tokio::test]
async fn test_filter_resets_reveal_count_and_matches_exactly() {
    let service = DoctorDirectoryService::new(Arc::new(StubHospitalApi::new().with_doctors(roster())));
    let session = Uuid::new_v4();

    let view = service.mount(session).await;
    assert_eq!(view.visible, 8);

    let view = service.load_more(session).await.unwrap();
    assert_eq!(view.visible, 16);

    let view = service.filter(session, Some("Neurology")).await.unwrap();
    assert_eq!(view.visible, 7);
    assert!(view.cards.iter().all(|c| c.body.specialization == "Neurology"));
    assert_eq!(view.filtered, roster().iter().filter(|d| d.specialization == "Neurology").count());
    assert!(view.filters.iter().any(|f| f.active && f.label == "Neurology"));

    let view = service.filter(session, None).await.unwrap();
    assert_eq!(view.filtered, 20);
    assert_eq!(view.visible, 8);
}

#[tokio::test]
async fn test_load_more_stops_at_filtered_length() {
    let service = DoctorDirectoryService::new(Arc::new(StubHospitalApi::new().with_doctors(roster())));
    let session = Uuid::new_v4();
    service.mount(session).await;

    let mut previous = 8;
    for _ in 0..4 {
        let view = service.load_more(session).await.unwrap();
        assert!(view.visible >= previous);
        assert!(view.visible <= view.filtered);
        previous = view.visible;
    }
    let view = service.view(session).await.unwrap();
    assert_eq!(view.visible, 20);
    assert!(view.load_more.is_none());
}

#[tokio::test]
async fn test_filter_route_accepts_json() {
    let service = Arc::new(DoctorDirectoryService::new(Arc::new(
        StubHospitalApi::new().with_doctors(roster()),
    )));
    let session = Uuid::new_v4();
    service.mount(session).await;

    let response = doctor_routes(service)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/sessions/{}/doctors/filter", session))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "specialty": "Pediatrics" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let view: Value = serde_json::from_slice(&body).unwrap();
    assert!(view["cards"]
        .as_array()
        .unwrap()
        .iter()
        .all(|card| card["body"]["specialization"] == "Pediatrics"));
}
