mod common;

use axum::{body::Body, http::{Request, StatusCode, header}};
use chrono::{Duration, Utc};
use shop_catalog_api::{app::build_app, services::auth_service::issue_token};
use tower::ServiceExt;
use uuid::Uuid;

use common::{SECRET, body_json, body_string, multipart_request, offline_state, product_multipart};

fn expired_token() -> String {
    issue_token(SECRET, Uuid::new_v4(), "admin", Utc::now() - Duration::days(8)).unwrap()
}

fn fresh_token() -> String {
    issue_token(SECRET, Uuid::new_v4(), "admin", Utc::now()).unwrap()
}

#[tokio::test]
async fn protected_routes_reject_missing_token() {
    let app = build_app(offline_state());
    let id = Uuid::new_v4();

    let requests = vec![
        Request::builder()
            .method("DELETE")
            .uri(format!("/api/admin/product/{id}"))
            .body(Body::empty())
            .unwrap(),
        Request::builder()
            .method("PUT")
            .uri(format!("/api/admin/product/{id}"))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"category":"rings"}"#))
            .unwrap(),
        multipart_request("/api/admin/product", None, product_multipart(Some("rings"), 1)),
    ];

    for request in requests {
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Unauthorized" })
        );
    }
}

#[tokio::test]
async fn token_older_than_seven_days_is_rejected_everywhere() {
    let app = build_app(offline_state());
    let token = expired_token();
    let id = Uuid::new_v4();

    let requests = vec![
        Request::builder()
            .method("DELETE")
            .uri(format!("/api/admin/product/{id}"))
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
        Request::builder()
            .method("PUT")
            .uri(format!("/api/admin/product/{id}"))
            .header(header::AUTHORIZATION, token.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"category":"rings"}"#))
            .unwrap(),
        multipart_request(
            "/api/admin/product",
            Some(&token),
            product_multipart(Some("rings"), 1),
        ),
    ];

    for request in requests {
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}

#[tokio::test]
async fn token_signed_with_another_secret_is_rejected() {
    let app = build_app(offline_state());
    let forged = issue_token("not-the-secret", Uuid::new_v4(), "admin", Utc::now()).unwrap();
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/admin/product/{}", Uuid::new_v4()))
                .header(header::AUTHORIZATION, format!("Bearer {forged}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn seven_images_are_rejected_before_anything_is_stored() {
    let state = offline_state();
    let upload_dir = state.config.upload_dir.clone();
    let app = build_app(state);

    let response = app
        .oneshot(multipart_request(
            "/api/admin/product",
            Some(&fresh_token()),
            product_multipart(Some("rings"), 7),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "error": "too many images (max 6)" })
    );
    assert!(!upload_dir.exists());
}

#[tokio::test]
async fn product_create_validates_category_then_images() {
    let app = build_app(offline_state());
    let token = fresh_token();

    let response = app
        .clone()
        .oneshot(multipart_request(
            "/api/admin/product",
            Some(&token),
            product_multipart(None, 2),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "category required");

    let response = app
        .oneshot(multipart_request(
            "/api/admin/product",
            Some(&token),
            product_multipart(Some("rings"), 0),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "images required");
}

#[tokio::test]
async fn public_queries_require_shop() {
    let app = build_app(offline_state());

    for uri in ["/api/products", "/api/analytics?range=30"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "shop missing");
    }
}

#[tokio::test]
async fn event_without_shop_or_type_is_rejected() {
    let app = build_app(offline_state());

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/event")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"type":"shop_view"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "shop_id required");

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/event")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(format!(r#"{{"shop_id":"{}"}}"#, Uuid::new_v4())))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "type required");
}

#[tokio::test]
async fn buy_with_malformed_id_is_plain_text_not_redirect() {
    let app = build_app(offline_state());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/buy/not-a-product")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().get(header::LOCATION).is_none());
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/plain"));
    assert_eq!(body_string(response).await, "Product not found");
}

#[tokio::test]
async fn unknown_api_route_is_json_404() {
    let app = build_app(offline_state());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/admin/signup")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("signup"));
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn assert_json_bad_request(response: axum::response::Response, mentions: &str) {
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("application/json"));
    let message = body_json(response).await["error"].as_str().unwrap().to_string();
    assert!(message.contains(mentions), "{message}");
    assert!(!message.contains("Failed to deserialize"), "{message}");
}

#[tokio::test]
async fn login_with_missing_password_is_a_json_bad_request() {
    let app = build_app(offline_state());
    let response = app
        .oneshot(post_json("/api/admin/login", r#"{"email":"a@example.com"}"#))
        .await
        .unwrap();
    assert_json_bad_request(response, "password").await;
}

#[tokio::test]
async fn event_with_malformed_shop_id_is_a_json_bad_request() {
    let app = build_app(offline_state());
    let response = app
        .oneshot(post_json(
            "/api/event",
            r#"{"shop_id":"not-a-uuid","type":"shop_view"}"#,
        ))
        .await
        .unwrap();
    assert_json_bad_request(response, "shop_id").await;
}

#[tokio::test]
async fn malformed_ids_in_query_and_path_are_json_bad_requests() {
    let app = build_app(offline_state());

    for uri in ["/api/products?shop=abc", "/api/analytics?shop=abc&range=7"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_json_bad_request(response, "UUID").await;
    }

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/product/abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_json_bad_request(response, "UUID").await;
}

#[tokio::test]
async fn non_json_body_is_a_json_bad_request() {
    let app = build_app(offline_state());
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/admin/login")
                .header(header::CONTENT_TYPE, "text/plain")
                .body(Body::from("email=a@example.com"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_json_bad_request(response, "Content-Type").await;
}
