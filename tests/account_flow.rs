//! Integration tests for the address book and the buyer-to-seller
//! shop upgrade flow.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use shopwave_entity::address::CreateAddress;
use shopwave_entity::user::UserRole;

use common::TestApp;

#[tokio::test]
async fn test_addresses_require_session() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/account/addresses", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "AUTHENTICATION");
}

#[tokio::test]
async fn test_address_create_and_list() {
    let app = TestApp::new().await;
    app.create_test_user("Test Buyer", "test@example.com", "password123", UserRole::Buyer)
        .await;
    let token = app.sign_in("test@example.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/account/addresses",
            Some(json!({
                "label": "Home",
                "street": "123 Main St",
                "city": "Jakarta",
                "province": "DKI Jakarta",
                "postal_code": "12345",
                "is_default": true,
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.body["label"], "Home");
    assert_eq!(response.body["is_default"], true);

    let response = app
        .request("GET", "/api/account/addresses", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let addresses = response.body["addresses"].as_array().unwrap();
    assert_eq!(addresses.len(), 1);
    assert_eq!(addresses[0]["city"], "Jakarta");
}

#[tokio::test]
async fn test_new_default_replaces_previous() {
    let app = TestApp::new().await;
    app.create_test_user("Test Buyer", "test@example.com", "password123", UserRole::Buyer)
        .await;
    let token = app.sign_in("test@example.com", "password123").await;

    for (label, street) in [("Home", "123 Main St"), ("Office", "456 Market Ave")] {
        let response = app
            .request(
                "POST",
                "/api/account/addresses",
                Some(json!({
                    "label": label,
                    "street": street,
                    "city": "Jakarta",
                    "province": "DKI Jakarta",
                    "postal_code": "12345",
                    "is_default": true,
                })),
                Some(&token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let response = app
        .request("GET", "/api/account/addresses/default", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["address"]["label"], "Office");

    // The earlier default lost its flag.
    let response = app
        .request("GET", "/api/account/addresses", None, Some(&token))
        .await;
    let addresses = response.body["addresses"].as_array().unwrap();
    let home = addresses.iter().find(|a| a["label"] == "Home").unwrap();
    assert_eq!(home["is_default"], false);
}

#[tokio::test]
async fn test_default_address_is_null_when_unset() {
    let app = TestApp::new().await;
    app.create_test_user("Test Buyer", "test@example.com", "password123", UserRole::Buyer)
        .await;
    let token = app.sign_in("test@example.com", "password123").await;

    let response = app
        .request("GET", "/api/account/addresses/default", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["address"].is_null());
}

/// The full seeded-buyer scenario: sign in, browse as buyer, open a shop,
/// and come back as a seller on a rotated session.
#[tokio::test]
async fn test_buyer_to_seller_upgrade_scenario() {
    let app = TestApp::new().await;
    let buyer = app
        .create_test_user("Test Buyer", "test@example.com", "password123", UserRole::Buyer)
        .await;
    app.stores
        .addresses
        .create(&CreateAddress {
            user_id: buyer.id,
            label: "Home".to_string(),
            street: "123 Main St".to_string(),
            city: "Jakarta".to_string(),
            province: "DKI Jakarta".to_string(),
            postal_code: "12345".to_string(),
            is_default: true,
        })
        .await
        .expect("Failed to seed address");

    let buyer_token = app.sign_in("test@example.com", "password123").await;

    let me = app
        .request("GET", "/api/auth/me", None, Some(&buyer_token))
        .await;
    assert_eq!(me.body["user"]["role"], "BUYER");
    assert_eq!(me.body["user"]["addresses"][0]["label"], "Home");

    // Buyers are turned away from the seller area.
    let dashboard = app
        .request("GET", "/seller", None, Some(&buyer_token))
        .await;
    assert_eq!(dashboard.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(dashboard.location(), Some("/"));

    let upgrade = app
        .request(
            "POST",
            "/api/account/shop",
            Some(json!({
                "name": "Test Shop",
                "description": "Vintage finds and oddities",
            })),
            Some(&buyer_token),
        )
        .await;

    assert_eq!(upgrade.status, StatusCode::CREATED, "{:?}", upgrade.body);
    assert_eq!(upgrade.body["user"]["role"], "SELLER");
    assert_eq!(upgrade.body["shop"]["name"], "Test Shop");
    assert_eq!(upgrade.body["shop"]["slug"], "test-shop");

    // The session is rotated so the cookie carries the new role.
    let seller_token = upgrade
        .session_token()
        .expect("No rotated session cookie in upgrade response");
    assert_ne!(seller_token, buyer_token);

    let dashboard = app
        .request("GET", "/seller", None, Some(&seller_token))
        .await;
    assert_eq!(dashboard.status, StatusCode::OK);

    // The pre-upgrade token still carries BUYER claims; role changes only
    // reach the gate through reissued tokens.
    let stale = app
        .request("GET", "/seller", None, Some(&buyer_token))
        .await;
    assert_eq!(stale.status, StatusCode::TEMPORARY_REDIRECT);

    let second = app
        .request(
            "POST",
            "/api/account/shop",
            Some(json!({ "name": "Another Shop" })),
            Some(&seller_token),
        )
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);
}
