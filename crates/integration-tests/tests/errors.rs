mod harness;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use faultline_config::Config;
use faultline_core::Fault;
use faultline_dispatch::{ErrorResponseBody, handler_fn};
use faultline_server::RouteTable;
use harness::server::TestServer;

async fn body_of(resp: reqwest::Response) -> ErrorResponseBody {
    let text = resp.text().await.unwrap();
    serde_json::from_str(&text).unwrap()
}

#[tokio::test]
async fn conflict_on_users_yields_a_full_conflict_body() {
    let routes = RouteTable::new().route(
        "/users",
        handler_fn(|_req| async { Err(Fault::Conflict("email already registered".to_owned())) }),
    );
    let server = TestServer::start(Config::default(), routes).await.unwrap();

    let resp = server.client().post(server.url("/users")).send().await.unwrap();

    assert_eq!(resp.status(), 409);
    assert_eq!(
        resp.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );

    let body = body_of(resp).await;
    assert_eq!(body.status, 409);
    assert_eq!(body.error, "Conflict");
    assert_eq!(body.message, "email already registered");
    assert_eq!(body.path, "/users");
    assert!(body.field_errors.is_empty());
}

#[tokio::test]
async fn permission_denied_on_admin_reports_yields_403() {
    let routes = RouteTable::new().route(
        "/admin/reports",
        handler_fn(|_req| async { Err(Fault::PermissionDenied) }),
    );
    let server = TestServer::start(Config::default(), routes).await.unwrap();

    let resp = server.client().get(server.url("/admin/reports")).send().await.unwrap();

    assert_eq!(resp.status(), 403);
    let body = body_of(resp).await;
    assert_eq!(body.error, "AccessDenied");
    assert_eq!(body.message, "access denied");
    assert_eq!(body.path, "/admin/reports");
}

#[tokio::test]
async fn missing_resource_yields_404_naming_the_identifier() {
    let routes = RouteTable::new().route(
        "/orders/{id}",
        handler_fn(|_req| async { Err(Fault::missing_resource("order 1234")) }),
    );
    let server = TestServer::start(Config::default(), routes).await.unwrap();

    let resp = server.client().get(server.url("/orders/1234")).send().await.unwrap();

    assert_eq!(resp.status(), 404);
    let body = body_of(resp).await;
    assert_eq!(body.error, "NotFound");
    assert!(body.message.contains("order 1234"));
    assert_eq!(body.path, "/orders/1234");
}

#[tokio::test]
async fn validation_failure_lists_every_field_error_in_order() {
    let routes = RouteTable::new().route(
        "/signup",
        handler_fn(|_req| async {
            Err(Fault::validation([
                ("email", "must not be empty"),
                ("password", "too short"),
                ("age", "must be positive"),
            ]))
        }),
    );
    let server = TestServer::start(Config::default(), routes).await.unwrap();

    let resp = server.client().post(server.url("/signup")).send().await.unwrap();

    assert_eq!(resp.status(), 400);
    let body = body_of(resp).await;
    assert_eq!(body.error, "InvalidRequest");
    assert_eq!(body.message, "validation failed");
    assert_eq!(body.field_errors.len(), 3);
    let fields: Vec<&str> = body.field_errors.iter().map(|f| f.field.as_str()).collect();
    assert_eq!(fields, ["email", "password", "age"]);
}

#[tokio::test]
async fn unrecognized_failure_yields_an_opaque_500() {
    let routes = RouteTable::new().route(
        "/flaky",
        handler_fn(|_req| async {
            Err(Fault::Other(anyhow::anyhow!(
                "connection refused: postgres://10.0.0.7:5432"
            )))
        }),
    );
    let server = TestServer::start(Config::default(), routes).await.unwrap();

    let resp = server.client().get(server.url("/flaky")).send().await.unwrap();

    assert_eq!(resp.status(), 500);
    let text = resp.text().await.unwrap();
    assert!(!text.contains("postgres"));
    let body: ErrorResponseBody = serde_json::from_str(&text).unwrap();
    assert_eq!(body.error, "Internal");
    assert_eq!(body.message, "an internal error occurred");
}

#[tokio::test]
async fn error_body_round_trips_through_serialization() {
    let routes = RouteTable::new().route(
        "/users",
        handler_fn(|_req| async { Err(Fault::Conflict("duplicate username".to_owned())) }),
    );
    let server = TestServer::start(Config::default(), routes).await.unwrap();

    let resp = server.client().post(server.url("/users")).send().await.unwrap();
    let body = body_of(resp).await;

    let reserialized = serde_json::to_string(&body).unwrap();
    let reparsed: ErrorResponseBody = serde_json::from_str(&reserialized).unwrap();
    assert_eq!(reparsed, body);
}

#[tokio::test]
async fn success_responses_pass_through_untouched() {
    let routes = RouteTable::new().route(
        "/widgets",
        handler_fn(|_req| async { Ok((StatusCode::CREATED, "widget-7").into_response()) }),
    );
    let server = TestServer::start(Config::default(), routes).await.unwrap();

    let resp = server.client().post(server.url("/widgets")).send().await.unwrap();

    assert_eq!(resp.status(), 201);
    assert_eq!(resp.text().await.unwrap(), "widget-7");
}
