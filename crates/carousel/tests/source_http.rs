//! PanelSource against a stub site API.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use carousel::{launch, CarouselError, PanelSource, WheelConfig, WheelView};
use chrono::Utc;
use serde_json::{json, Value};

type Slides = Arc<Mutex<Vec<Value>>>;

fn slide(id: i64, image_url: &str, active: bool) -> Value {
    json!({
        "id": id,
        "image_url": image_url,
        "active": active,
        "created_at": Utc::now(),
    })
}

async fn list_slides(State(slides): State<Slides>) -> Json<Vec<Value>> {
    Json(slides.lock().unwrap().clone())
}

async fn add_slide(State(slides): State<Slides>, Json(body): Json<Value>) -> Json<Value> {
    let mut slides = slides.lock().unwrap();
    let id = slides.len() as i64 + 1;
    let image_url = body["image_url"].as_str().unwrap_or_default().to_string();
    let created = slide(id, &image_url, true);
    slides.push(created.clone());
    Json(created)
}

async fn list_partners() -> Json<Value> {
    Json(json!([
        {"id": 1, "name": "Acme", "logo_url": "/logos/acme.svg", "created_at": Utc::now()},
        {"id": 2, "name": "Globex", "logo_url": "/logos/globex.svg", "created_at": Utc::now()},
    ]))
}

async fn spawn_server(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

async fn site_stub(slides: Vec<Value>) -> (SocketAddr, Slides) {
    let slides: Slides = Arc::new(Mutex::new(slides));
    let router = Router::new()
        .route("/api/slider", get(list_slides).post(add_slide))
        .route("/api/partners", get(list_partners))
        .with_state(Arc::clone(&slides));
    (spawn_server(router).await, slides)
}

fn source(addr: SocketAddr) -> PanelSource {
    PanelSource::new(format!("http://{addr}/"), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_load_filters_inactive_slides() {
    let (addr, _) = site_stub(vec![
        slide(1, "/img/1.jpg", true),
        slide(2, "/img/2.jpg", false),
        slide(3, "/img/3.jpg", true),
    ])
    .await;

    let panels = source(addr).load().await.unwrap();

    assert_eq!(panels.panel_count(), 2);
    assert_eq!(
        panels.image_urls().collect::<Vec<_>>(),
        vec!["/img/1.jpg", "/img/3.jpg"]
    );
    assert_eq!(
        panels.logo_urls().collect::<Vec<_>>(),
        vec!["/logos/acme.svg", "/logos/globex.svg"]
    );
}

#[tokio::test]
async fn test_add_slider_image() {
    let (addr, slides) = site_stub(vec![]).await;
    let source = source(addr);

    let created = source.add_slider_image("/img/new.jpg").await.unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.image_url, "/img/new.jpg");
    assert!(created.active);
    assert_eq!(slides.lock().unwrap().len(), 1);

    let fetched = source.fetch_slider().await.unwrap();
    assert_eq!(fetched, vec![created]);
}

#[tokio::test]
async fn test_add_slider_images_in_order() {
    let (addr, slides) = site_stub(vec![slide(1, "/img/existing.jpg", false)]).await;
    let source = source(addr);

    let added = source
        .add_slider_images(["/img/first.jpg", "/img/second.jpg"])
        .await
        .unwrap();

    let ids: Vec<i64> = added.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![2, 3]);
    assert_eq!(added[1].image_url, "/img/second.jpg");
    assert_eq!(slides.lock().unwrap().len(), 3);
}

#[tokio::test]
async fn test_add_slider_images_stops_at_first_failure() {
    let posts = Arc::new(Mutex::new(0usize));
    let router = Router::new()
        .route(
            "/api/slider",
            axum::routing::post(|State(posts): State<Arc<Mutex<usize>>>| async move {
                *posts.lock().unwrap() += 1;
                (StatusCode::BAD_REQUEST, Json(json!({ "error": "All fields are required" })))
            }),
        )
        .with_state(Arc::clone(&posts));
    let addr = spawn_server(router).await;

    let result = source(addr)
        .add_slider_images(["/img/first.jpg", "/img/second.jpg"])
        .await;

    assert!(matches!(result, Err(CarouselError::Status { status: 400, .. })));
    assert_eq!(*posts.lock().unwrap(), 1);
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let router = Router::new().route(
        "/api/slider",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let addr = spawn_server(router).await;

    match source(addr).fetch_slider().await {
        Err(CarouselError::Status { url, status }) => {
            assert!(url.ends_with("/api/slider"));
            assert_eq!(status, 500);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_site_is_http_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = source(addr).fetch_partners().await;
    assert!(matches!(result, Err(CarouselError::Http(_))));
}

#[tokio::test]
async fn test_empty_slider_does_not_mount_wheel() {
    let (addr, _) = site_stub(vec![slide(1, "/img/1.jpg", false)]).await;

    let panels = source(addr).load().await.unwrap();
    assert_eq!(panels.panel_count(), 0);

    let surface = |_: &WheelView| {};
    assert!(launch(panels.panel_count(), 800.0, WheelConfig::default(), surface).is_none());
}

#[tokio::test]
async fn test_loaded_panels_drive_wheel() {
    let (addr, _) = site_stub(vec![
        slide(1, "/img/1.jpg", true),
        slide(2, "/img/2.jpg", true),
        slide(3, "/img/3.jpg", true),
    ])
    .await;

    let panels = source(addr).load().await.unwrap();
    let surface = |_: &WheelView| {};
    let wheel = launch(panels.panel_count(), 900.0, WheelConfig::default(), surface).unwrap();

    let view = wheel.view();
    assert_eq!(view.panels.len(), 3);
    assert_eq!(view.panels[1].transform, "rotateX(120deg) translateZ(720px)");
    assert_eq!(view.active_index(), Some(0));

    wheel.shutdown().await;
}
