use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use content_cell::router::content_routes;
use content_cell::{about, footer, services, testimonials, ContentError, ContentService, PageEvent};
use shared_models::PORTRAIT_PLACEHOLDER;

#[tokio::test]
async fn test_navigation_follows_scroll_and_hash_events() {
    let service = ContentService::new();
    let session = Uuid::new_v4();
    let (nav, _) = service.mount(session, "").await;
    assert_eq!(nav.active_path, "#");
    assert!(!nav.scrolled);

    service.publish(session, PageEvent::Scroll { y: 240.0 }).await.unwrap();
    service
        .publish(session, PageEvent::HashChange { hash: "#doctors".to_string() })
        .await
        .unwrap();

    let nav = service.navigation(session).await.unwrap();
    assert!(nav.scrolled);
    assert_eq!(nav.active_path, "#doctors");
    let active: Vec<_> = nav.items.iter().filter(|i| i.active).map(|i| i.name).collect();
    assert_eq!(active, ["Doctors & Specialists"]);

    service.publish(session, PageEvent::Scroll { y: 4.0 }).await.unwrap();
    assert!(!service.navigation(session).await.unwrap().scrolled);
}

#[tokio::test]
async fn test_navigation_stops_reacting_after_unmount() {
    let service = ContentService::new();
    let session = Uuid::new_v4();
    service.mount(session, "#about").await;

    let bus = service.bus(session).await.unwrap();
    assert_eq!(bus.subscriber_count(), 2);

    assert!(service.unmount(session).await);
    assert_eq!(bus.subscriber_count(), 0);
    assert_eq!(bus.publish(PageEvent::Scroll { y: 100.0 }), 0);

    assert_eq!(
        service.navigation(session).await.unwrap_err(),
        ContentError::NotMounted(session)
    );
    assert!(!service.unmount(session).await);
}

#[tokio::test]
async fn test_pointer_burst_does_not_hide_navigation_changes() {
    let service = ContentService::new();
    let session = Uuid::new_v4();
    service.mount(session, "").await;

    service
        .publish(session, PageEvent::HashChange { hash: "#doctors".to_string() })
        .await
        .unwrap();
    service.publish(session, PageEvent::Scroll { y: 300.0 }).await.unwrap();
    for i in 0..100 {
        service
            .publish(
                session,
                PageEvent::MouseMove {
                    client_x: 960.0 + i as f64,
                    client_y: 540.0,
                    viewport_width: 1920.0,
                    viewport_height: 1080.0,
                },
            )
            .await
            .unwrap();
    }

    let nav = service.navigation(session).await.unwrap();
    assert_eq!(nav.active_path, "#doctors");
    assert!(nav.scrolled);

    let hero = service.hero(session).await.unwrap();
    assert_eq!(hero.parallax.x, (960.0 + 99.0) / 1920.0 - 0.5);
    assert_eq!(hero.parallax.y, 0.0);
}

#[tokio::test]
async fn test_sessions_do_not_share_events() {
    let service = ContentService::new();
    let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
    service.mount(a, "").await;
    service.mount(b, "").await;

    service.publish(a, PageEvent::Scroll { y: 500.0 }).await.unwrap();

    assert!(service.navigation(a).await.unwrap().scrolled);
    assert!(!service.navigation(b).await.unwrap().scrolled);
}

#[tokio::test]
async fn test_menu_toggle_and_link_close() {
    let service = ContentService::new();
    let session = Uuid::new_v4();
    service.mount(session, "").await;

    assert!(service.toggle_menu(session).await.unwrap().menu_open);
    assert!(!service.follow_link(session).await.unwrap().menu_open);
    assert!(service.toggle_menu(session).await.unwrap().menu_open);
    assert!(!service.toggle_menu(session).await.unwrap().menu_open);
}

#[tokio::test(start_paused = true)]
async fn test_hero_cycles_specialties_every_three_seconds() {
    let service = ContentService::new();
    let session = Uuid::new_v4();
    let (_, hero) = service.mount(session, "").await;
    assert_eq!(hero.active_card, 0);
    assert_eq!(hero.cards[0].name, "Cardiology");

    tokio::time::sleep(Duration::from_millis(3_100)).await;
    assert_eq!(service.hero(session).await.unwrap().active_card, 1);

    tokio::time::sleep(Duration::from_secs(12)).await;
    let hero = service.hero(session).await.unwrap();
    assert_eq!(hero.active_card, 0);
    assert!(hero.cards[0].active);
    assert_eq!(hero.cards.iter().filter(|c| c.active).count(), 1);
}

#[tokio::test]
async fn test_hero_parallax_tracks_pointer() {
    let service = ContentService::new();
    let session = Uuid::new_v4();
    service.mount(session, "").await;

    service
        .publish(
            session,
            PageEvent::MouseMove {
                client_x: 1440.0,
                client_y: 270.0,
                viewport_width: 1920.0,
                viewport_height: 1080.0,
            },
        )
        .await
        .unwrap();

    let hero = service.hero(session).await.unwrap();
    assert_eq!(hero.parallax.x, 0.25);
    assert_eq!(hero.parallax.y, -0.25);
    assert_eq!(hero.parallax.offset(20.0), (5.0, -5.0));
}

#[test]
fn test_static_sections_carry_page_copy() {
    let services = services();
    assert_eq!(services.services.len(), 8);
    assert_eq!(services.services[0].body.title, "Online Appointment");
    assert_eq!(services.services[7].body.title, "24/7 Support");

    let testimonials = testimonials();
    assert_eq!(testimonials.testimonials.len(), 4);
    for t in &testimonials.testimonials {
        assert!((1..=5).contains(&t.rating));
        assert_eq!(t.stars.iter().filter(|s| **s).count(), t.rating as usize);
        assert_eq!(t.image.fallback, PORTRAIT_PLACEHOLDER);
    }

    assert_eq!(about().anchor, "about");
    let footer = footer();
    assert_eq!(footer.email, "contact@medconnect.com");
    assert_eq!(footer.quick_links.len(), 5);
}

#[tokio::test]
async fn test_event_route_accepts_browser_events() {
    let service = Arc::new(ContentService::new());
    let session = Uuid::new_v4();
    service.mount(session, "").await;

    let response = content_routes(service.clone())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/sessions/{}/events", session))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "type": "hashChange", "hash": "#book" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::ACCEPTED);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["delivered"], 2);

    assert_eq!(service.navigation(session).await.unwrap().active_path, "#book");
}

#[tokio::test]
async fn test_unknown_session_navigation_is_not_found() {
    let response = content_routes(Arc::new(ContentService::new()))
        .oneshot(
            Request::builder()
                .uri(format!("/sessions/{}/navigation", Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
