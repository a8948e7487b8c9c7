//! Integration tests against a mock prediction backend.

use std::collections::HashMap;
use std::time::Duration;

use axum::extract::Form;
use axum::routing::post;
use axum::{Json, Router};
use housing_schema::{FeatureSet, RawFeatures};
use remote_predictor::{RemoteConfig, RemoteError, RemotePredictor};

/// Serve a router on an ephemeral port and return its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn sample() -> FeatureSet {
    FeatureSet::from_raw(&RawFeatures::sample()).unwrap()
}

fn predictor(base_url: String) -> RemotePredictor {
    RemotePredictor::new(RemoteConfig {
        base_url,
        timeout: Duration::from_millis(500),
    })
}

#[tokio::test]
async fn test_parses_price_from_rendered_body() {
    let app = Router::new().route(
        "/predict",
        post(|| async { "<html><body><h2>Predicted House Price: 3,450.00</h2></body></html>" }),
    );
    let base = serve(app).await;

    let price = predictor(base).predict(&sample()).await.unwrap();
    assert_eq!(price, 3450.0);
}

#[tokio::test]
async fn test_sends_exact_wire_keys() {
    let app = Router::new().route(
        "/predict",
        post(|Form(fields): Form<HashMap<String, String>>| async move {
            for key in [
                "MedInc",
                "HouseAge",
                "AveRooms",
                "AveBedrms",
                "AveOccup",
                "Latitude",
                "Longitude",
            ] {
                assert!(fields.contains_key(key), "missing form key {key}");
            }
            assert_eq!(fields["MedInc"], "5.5");
            assert_eq!(fields["Longitude"], "-118.25");
            format!("Predicted House Price: {}", 2.5)
        }),
    );
    let base = serve(app).await;

    let price = predictor(base).predict(&sample()).await.unwrap();
    assert_eq!(price, 2.5);
}

#[tokio::test]
async fn test_server_error_is_status_failure() {
    let app = Router::new().route(
        "/predict",
        post(|| async { (axum::http::StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base = serve(app).await;

    match predictor(base).predict(&sample()).await {
        Err(RemoteError::Status(500)) => {}
        other => panic!("expected Status(500), got {other:?}"),
    }
}

#[tokio::test]
async fn test_unrecognizable_body_is_failure() {
    let app = Router::new().route("/predict", post(|| async { "<html>all good</html>" }));
    let base = serve(app).await;

    match predictor(base).predict(&sample()).await {
        Err(RemoteError::UnrecognizedBody) => {}
        other => panic!("expected UnrecognizedBody, got {other:?}"),
    }
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let app = Router::new().route(
        "/predict",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            "Predicted House Price: 1.0"
        }),
    );
    let base = serve(app).await;

    match predictor(base).predict(&sample()).await {
        Err(RemoteError::Timeout(500)) => {}
        other => panic!("expected Timeout(500), got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_failure() {
    // Bind and drop a listener so the port is free but nothing answers.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    match predictor(format!("http://{addr}")).predict(&sample()).await {
        Err(RemoteError::Transport(_)) => {}
        other => panic!("expected Transport, got {other:?}"),
    }
}

#[tokio::test]
async fn test_json_endpoint_round_trip() {
    let app = Router::new().route(
        "/predict_api",
        post(|Json(body): Json<serde_json::Value>| async move {
            let med_inc = body["MedInc"].as_f64().unwrap();
            Json(serde_json::json!({ "predicted_price": med_inc * 2.0 }))
        }),
    );
    let base = serve(app).await;

    let price = predictor(base).predict_api(&sample()).await.unwrap();
    assert_eq!(price, 11.0);
}

#[tokio::test]
async fn test_json_endpoint_error_payload() {
    let app = Router::new().route(
        "/predict_api",
        post(|| async {
            (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "model not loaded" })),
            )
        }),
    );
    let base = serve(app).await;

    match predictor(base).predict_api(&sample()).await {
        Err(RemoteError::Status(500)) => {}
        other => panic!("expected Status(500), got {other:?}"),
    }
}
