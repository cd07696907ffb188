// tests/api_tests.rs
mod common;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use chrono::{Duration, Utc};
use common::*;
use orderdesk_server::web::configure_app_routes;
use serde_json::{json, Value};

macro_rules! test_app {
  ($state:expr) => {
    test::init_service(
      App::new()
        .app_data(web::Data::new($state))
        .configure(configure_app_routes),
    )
    .await
  };
}

fn seeded_orders() -> Value {
  json!([
    {"id": "MKS00000001", "status": "Pending", "createdAt": "2024-06-01T09:00:00Z", "updatedAt": "2024-06-01T09:00:00Z",
     "customerName": "Budi", "productType": "kaos", "totalPrice": 100000},
    {"id": "MKS00000002", "status": "Completed", "createdAt": "2024-06-03T09:00:00Z", "updatedAt": "2024-06-03T09:00:00Z",
     "customerName": "Sari", "productType": "jaket", "finalTotal": 250000},
    {"id": "MKS00000003", "status": "Pending", "createdAt": "2024-06-02T09:00:00Z", "updatedAt": "2024-06-02T09:00:00Z",
     "customerName": "Andi", "productType": "lusinan", "totalPrice": "50000"}
  ])
}

#[actix_web::test]
async fn test_health_is_public() {
  let app = test_app!(empty_state());
  let resp = test::call_service(&app, test::TestRequest::get().uri("/api/health").to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["status"], "OK");
  assert!(body["timestamp"].is_string());
}

#[actix_web::test]
async fn test_unknown_api_path_is_json_404() {
  let app = test_app!(empty_state());
  for uri in ["/api/nope", "/api/orders/a/b/c"] {
    let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{}", uri);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Endpoint not found");
  }
}

#[actix_web::test]
async fn test_unsupported_method_on_known_path_is_json_404() {
  let app = test_app!(empty_state());
  let requests = [
    test::TestRequest::patch().uri("/api/orders"),
    test::TestRequest::post().uri("/api/health"),
    test::TestRequest::get().uri("/api/login"),
    test::TestRequest::patch().uri("/api/orders/MKS00000001"),
    test::TestRequest::delete().uri("/api/orders/export/csv"),
  ];
  for req in requests {
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Endpoint not found");
  }
}

#[actix_web::test]
async fn test_submit_order_returns_pending_order_with_unique_id() {
  let app = test_app!(empty_state());
  let payload = json!({"customerName": "Rina", "productType": "kaos", "quantity": 3, "status": "Completed"});

  let mut ids = Vec::new();
  for _ in 0..3 {
    let req = test::TestRequest::post().uri("/api/orders").set_json(&payload).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["order"]["status"], "Pending");
    assert_eq!(body["order"]["customerName"], "Rina");
    assert_eq!(body["orderId"], body["order"]["id"]);
    ids.push(body["orderId"].as_str().unwrap().to_string());
  }
  ids.sort();
  ids.dedup();
  assert_eq!(ids.len(), 3);
}

#[actix_web::test]
async fn test_malformed_or_non_object_order_is_400() {
  let app = test_app!(empty_state());

  let req = test::TestRequest::post()
    .uri("/api/orders")
    .insert_header(("Content-Type", "application/json"))
    .set_payload("{\"customerName\": ")
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["success"], false);

  let req = test::TestRequest::post().uri("/api/orders").set_json(json!([1, 2])).to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_login_with_correct_password_returns_usable_token() {
  let app = test_app!(empty_state());
  let req = test::TestRequest::post()
    .uri("/api/login")
    .set_json(json!({"username": ADMIN_USERNAME, "password": ADMIN_PASSWORD}))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["success"], true);
  assert_eq!(body["user"]["username"], ADMIN_USERNAME);
  assert_eq!(body["user"]["role"], "admin");
  assert!(body["user"].get("password").is_none());
  let token = body["token"].as_str().unwrap().to_string();

  let req = test::TestRequest::get().uri("/api/orders").insert_header(bearer(&token)).to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_login_failures_do_not_reveal_which_part_was_wrong() {
  let app = test_app!(empty_state());

  for creds in [
    json!({"username": ADMIN_USERNAME, "password": "wrong"}),
    json!({"username": "ghost", "password": ADMIN_PASSWORD}),
  ] {
    let req = test::TestRequest::post().uri("/api/login").set_json(&creds).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid credentials");
  }

  let req = test::TestRequest::post().uri("/api/login").set_json(json!({"username": "admin"})).to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["error"], "Username and password required");
}

#[actix_web::test]
async fn test_protected_routes_need_a_valid_token() {
  let state = empty_state();
  let expired = state
    .tokens
    .issue_with_exp(ADMIN_USERNAME, "admin", Utc::now() - Duration::hours(3))
    .unwrap();
  let app = test_app!(state);

  let resp = test::call_service(&app, test::TestRequest::get().uri("/api/orders").to_request()).await;
  assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["error"], "Access token required");

  for token in ["garbage", expired.as_str()] {
    let req = test::TestRequest::get().uri("/api/dashboard").insert_header(bearer(token)).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid token");
  }
}

#[actix_web::test]
async fn test_listing_is_sorted_by_recency_and_filterable() {
  let state = state_with_orders(seeded_orders());
  let token = admin_token(&state);
  let app = test_app!(state);

  let req = test::TestRequest::get().uri("/api/orders").insert_header(bearer(&token)).to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  let ids: Vec<&str> = body["orders"].as_array().unwrap().iter().map(|o| o["id"].as_str().unwrap()).collect();
  assert_eq!(ids, ["MKS00000002", "MKS00000003", "MKS00000001"]);
  assert_eq!(body["pagination"]["total"], 3);
  assert_eq!(body["pagination"]["totalPages"], 1);

  let req = test::TestRequest::get()
    .uri("/api/orders?status=pending&search=andi")
    .insert_header(bearer(&token))
    .to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(body["orders"].as_array().unwrap().len(), 1);
  assert_eq!(body["orders"][0]["id"], "MKS00000003");

  let req = test::TestRequest::get()
    .uri("/api/orders?page=2&limit=2")
    .insert_header(bearer(&token))
    .to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(body["orders"][0]["id"], "MKS00000001");

  let req = test::TestRequest::get()
    .uri("/api/orders?page=first")
    .insert_header(bearer(&token))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_get_update_and_delete_single_order() {
  let state = state_with_orders(seeded_orders());
  let token = admin_token(&state);
  let app = test_app!(state);

  let req = test::TestRequest::get().uri("/api/orders/MKS00000001").insert_header(bearer(&token)).to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(body["order"]["customerName"], "Budi");

  let req = test::TestRequest::put()
    .uri("/api/orders/MKS00000001")
    .insert_header(bearer(&token))
    .set_json(json!({"status": "Completed"}))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["order"]["status"], "Completed");
  assert_ne!(body["order"]["updatedAt"], "2024-06-01T09:00:00Z");

  let req = test::TestRequest::put()
    .uri("/api/orders/MKS00000001")
    .insert_header(bearer(&token))
    .set_json(json!({"status": ""}))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

  let req = test::TestRequest::delete().uri("/api/orders/MKS00000001").insert_header(bearer(&token)).to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);

  let req = test::TestRequest::get().uri("/api/orders/MKS00000001").insert_header(bearer(&token)).to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["error"], "Order not found");
}

#[actix_web::test]
async fn test_update_or_delete_unknown_order_is_404() {
  let state = state_with_orders(seeded_orders());
  let token = admin_token(&state);
  let app = test_app!(state);

  let req = test::TestRequest::put()
    .uri("/api/orders/MKS99999999")
    .insert_header(bearer(&token))
    .set_json(json!({"status": "Completed"}))
    .to_request();
  assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

  let req = test::TestRequest::delete().uri("/api/orders/MKS99999999").insert_header(bearer(&token)).to_request();
  assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_dashboard_reports_counts_revenue_and_recent_orders() {
  let state = state_with_orders(seeded_orders());
  let token = admin_token(&state);
  let app = test_app!(state);

  let req = test::TestRequest::get().uri("/api/dashboard").insert_header(bearer(&token)).to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(body["stats"]["totalOrders"], 3);
  assert_eq!(body["stats"]["pendingOrders"], 2);
  assert_eq!(body["stats"]["completedOrders"], 1);
  assert_eq!(body["stats"]["totalRevenue"], 400000.0);
  assert_eq!(body["recentOrders"][0]["id"], "MKS00000002");
}

#[actix_web::test]
async fn test_export_csv_and_json_downloads() {
  let state = state_with_orders(seeded_orders());
  let token = admin_token(&state);
  let app = test_app!(state);

  let req = test::TestRequest::get().uri("/api/orders/export/csv").insert_header(bearer(&token)).to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap().to_string();
  assert!(content_type.starts_with("text/csv"));
  let disposition = resp.headers().get("content-disposition").unwrap().to_str().unwrap().to_string();
  assert!(disposition.contains("attachment"));
  assert!(disposition.contains("orders.csv"));
  let body = test::read_body(resp).await;
  let text = std::str::from_utf8(&body).unwrap();
  let lines: Vec<&str> = text.lines().collect();
  assert_eq!(lines.len(), 4);
  assert!(lines[0].starts_with("\"Order ID\",\"Customer Name\""));
  assert!(lines[1].starts_with("\"MKS00000002\",\"Sari\""));
  assert!(lines[1].contains("\"Jaket Custom\""));

  let req = test::TestRequest::get()
    .uri("/api/orders/export/JSON?status=Completed")
    .insert_header(bearer(&token))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body.as_array().unwrap().len(), 1);

  let req = test::TestRequest::get().uri("/api/orders/export/xml").insert_header(bearer(&token)).to_request();
  assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

  let req = test::TestRequest::get().uri("/api/orders/export/csv").to_request();
  assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);
}
