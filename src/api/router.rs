use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::{logging_middleware, metrics_middleware, security_headers_middleware};
use super::predict;
use super::state::AppState;
use crate::infrastructure::observability::{create_metrics_router, PrometheusMetrics};

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/predict", post(predict::predict))
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .with_state(state)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Create the application router, exposing Prometheus metrics when enabled
pub fn create_router_with_metrics(state: AppState, metrics: Option<PrometheusMetrics>) -> Router {
    let router = create_router(state);

    match metrics {
        Some(m) => router.merge(create_metrics_router(m)),
        None => router,
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::infrastructure::model::FileModelRepository;

    fn shipped_model_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("model/iris_classifier.json")
    }

    fn app_with_model(path: PathBuf) -> Router {
        create_router(AppState::new(Arc::new(FileModelRepository::new(path))))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn predict_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/predict")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_predict_setosa() {
        let app = app_with_model(shipped_model_path());

        let (status, body) = send(
            app,
            predict_request(json!({
                "sepal_length": 5.1,
                "sepal_width": 3.5,
                "petal_length": 1.4,
                "petal_width": 0.2
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"class_id": 0, "class_name": "Setosa"}));
    }

    #[tokio::test]
    async fn test_predict_virginica() {
        let app = app_with_model(shipped_model_path());

        let (status, body) = send(
            app,
            predict_request(json!({
                "sepal_length": 6.3,
                "sepal_width": 3.3,
                "petal_length": 6.0,
                "petal_width": 2.5
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"class_id": 2, "class_name": "Virginica"}));
    }

    #[tokio::test]
    async fn test_predict_rejects_missing_field() {
        let app = app_with_model(shipped_model_path());

        let (status, body) = send(
            app,
            predict_request(json!({"sepal_length": 5.1, "sepal_width": 3.5})),
        )
        .await;

        assert!(status.is_client_error());
        assert_eq!(body["error"]["type"], "invalid_request_error");
        assert_eq!(body["error"]["code"], "json_parse_error");
    }

    #[tokio::test]
    async fn test_predict_with_missing_model_is_server_error() {
        let app = app_with_model(PathBuf::from("/nonexistent/iris_classifier.json"));

        let (status, body) = send(
            app,
            predict_request(json!({
                "sepal_length": 5.1,
                "sepal_width": 3.5,
                "petal_length": 1.4,
                "petal_width": 0.2
            })),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["type"], "server_error");
    }

    #[tokio::test]
    async fn test_health_healthy() {
        let app = app_with_model(shipped_model_path());

        let (status, body) = send(app, get_request("/health")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "healthy"}));
    }

    #[tokio::test]
    async fn test_health_unhealthy_when_model_missing() {
        let app = app_with_model(PathBuf::from("/nonexistent/iris_classifier.json"));

        let (status, body) = send(app, get_request("/health")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "unhealthy");
        assert!(
            body["detail"]
                .as_str()
                .unwrap()
                .contains("/nonexistent/iris_classifier.json")
        );
    }

    #[tokio::test]
    async fn test_live() {
        let app = app_with_model(PathBuf::from("/nonexistent/iris_classifier.json"));

        let (status, _) = send(app, get_request("/live")).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_shared_repository_loads_once() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("iris_classifier.json");
        std::fs::copy(shipped_model_path(), &path).unwrap();

        let app = app_with_model(path.clone());

        let (status, _) = send(app.clone(), get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);

        std::fs::remove_file(&path).unwrap();

        let (status, body) = send(
            app,
            predict_request(json!({
                "sepal_length": 6.0,
                "sepal_width": 2.2,
                "petal_length": 4.0,
                "petal_width": 1.0
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"class_id": 1, "class_name": "Versicolor"}));
    }
}
