//! Storefront API: menu, accounts, quotes and checkout.

mod harness;

use axum::http::StatusCode;
use harness::app::TestApp;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

fn money(value: &Value) -> Decimal {
    value
        .as_str()
        .expect("money is a string")
        .parse()
        .expect("decimal")
}

fn delivery() -> Value {
    json!({
        "name": "Dana Scully",
        "email": "scully@area51.test",
        "phone": "555-0199",
        "address": "3170 W. 53 Rd. #35",
        "city": "Annapolis",
        "notes": "Leave at the door",
    })
}

#[tokio::test]
async fn menu_lists_active_categories_and_available_items() {
    let app = TestApp::new();
    let (_, items) = app
        .seed_menu(
            "Burgers",
            &[("Roswell Melt", dec!(12.50)), ("Grey Burger", dec!(11))],
        )
        .await;
    let token = app.admin_token().await;
    app.server
        .put("/api/menu-items")
        .authorization_bearer(&token)
        .json(&json!({ "id": items[1].id.to_string(), "is_available": false }))
        .await
        .assert_status_ok();

    let response = app.server.get("/api/menu").await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["categories"].as_array().unwrap().len(), 1);
    let names: Vec<&str> = body["menuItems"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Roswell Melt"]);

    let searched = app
        .server
        .get("/api/menu")
        .add_query_param("q", "grey")
        .await
        .json::<Value>();
    assert!(searched["menuItems"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn signup_validates_and_rejects_duplicates() {
    let app = TestApp::new();

    let mismatch = app
        .server
        .post("/api/account/signup")
        .json(&json!({
            "full_name": "Dana Scully",
            "email": "scully@area51.test",
            "password": "TrustNo1one",
            "confirm_password": "TrustNo2one",
        }))
        .await;
    mismatch.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(mismatch.json::<Value>()["error"], "Passwords do not match");

    let weak = app
        .server
        .post("/api/account/signup")
        .json(&json!({
            "full_name": "Dana Scully",
            "email": "scully@area51.test",
            "password": "password",
            "confirm_password": "password",
        }))
        .await;
    weak.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        weak.json::<Value>()["error"],
        "Password does not meet security requirements"
    );

    app.customer_token("Scully@Area51.test").await;
    let again = app
        .server
        .post("/api/account/signup")
        .json(&json!({
            "full_name": "Dana Scully",
            "email": "scully@area51.test",
            "password": "TrustNo1one",
            "confirm_password": "TrustNo1one",
        }))
        .await;
    again.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        again.json::<Value>()["error"],
        "An account with this email already exists"
    );
}

#[tokio::test]
async fn customer_login_round_trip() {
    let app = TestApp::new();
    app.customer_token("scully@area51.test").await;

    let ok = app
        .server
        .post("/api/account/login")
        .json(&json!({ "email": "scully@area51.test", "password": "TrustNo1one" }))
        .await;
    ok.assert_status_ok();
    let body = ok.json::<Value>();
    assert_eq!(body["customer"]["email"], "scully@area51.test");
    assert!(body["customer"].get("password_hash").is_none());

    app.server
        .post("/api/account/login")
        .json(&json!({ "email": "scully@area51.test", "password": "wrong" }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn quote_applies_coupon_and_delivery_fee() {
    let app = TestApp::new();
    let (_, items) = app.seed_menu("Sides", &[("Crop Circle Fries", dec!(4.50))]).await;

    let response = app
        .server
        .post("/api/checkout/quote")
        .json(&json!({
            "items": [{ "menu_item_id": items[0].id.to_string(), "quantity": 2 }],
            "coupon_code": " lunch ",
        }))
        .await;
    response.assert_status_ok();
    let quote = response.json::<Value>()["data"].clone();
    assert_eq!(money(&quote["subtotal"]), dec!(9));
    assert_eq!(money(&quote["discount_amount"]), dec!(0.90));
    assert_eq!(money(&quote["delivery_fee"]), dec!(5.99));
    assert_eq!(money(&quote["total"]), dec!(14.09));
    assert_eq!(quote["coupon_code"], "LUNCH");
}

#[tokio::test]
async fn quote_rejects_bad_carts() {
    let app = TestApp::new();
    let (_, items) = app.seed_menu("Sides", &[("Crop Circle Fries", dec!(4.50))]).await;

    let empty = app
        .server
        .post("/api/checkout/quote")
        .json(&json!({ "items": [] }))
        .await;
    empty.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(empty.json::<Value>()["error"], "Your cart is empty");

    let coupon = app
        .server
        .post("/api/checkout/quote")
        .json(&json!({
            "items": [{ "menu_item_id": items[0].id.to_string(), "quantity": 1 }],
            "coupon_code": "TRUSTNO1",
        }))
        .await;
    coupon.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(coupon.json::<Value>()["error"], "Invalid coupon code");

    let unknown = app
        .server
        .post("/api/checkout/quote")
        .json(&json!({ "items": [{ "menu_item_id": "ghost", "quantity": 1 }] }))
        .await;
    unknown.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn checkout_requires_a_customer_session() {
    let app = TestApp::new();
    let (_, items) = app.seed_menu("Mains", &[("Saucer Steak", dec!(24))]).await;

    app.server
        .post("/api/checkout")
        .json(&json!({
            "items": [{ "menu_item_id": items[0].id.to_string(), "quantity": 1 }],
            "delivery": delivery(),
        }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn checkout_prices_server_side_and_shows_in_history() {
    let app = TestApp::new();
    let token = app.customer_token("scully@area51.test").await;
    let (_, items) = app.seed_menu("Mains", &[("Saucer Steak", dec!(24))]).await;

    let placed = app
        .server
        .post("/api/checkout")
        .authorization_bearer(&token)
        .json(&json!({
            "items": [{
                "menu_item_id": items[0].id.to_string(),
                "quantity": 2,
                "special_instructions": "medium rare",
            }],
            "coupon_code": "FIRST20",
            "delivery": delivery(),
        }))
        .await;
    placed.assert_status(StatusCode::CREATED);
    let order = placed.json::<Value>()["data"].clone();
    assert_eq!(order["status"], "pending");
    assert_eq!(money(&order["subtotal"]), dec!(48));
    assert_eq!(money(&order["discount_amount"]), dec!(9.60));
    assert_eq!(money(&order["delivery_fee"]), dec!(0));
    assert_eq!(money(&order["total"]), dec!(38.40));
    assert_eq!(order["items"].as_array().unwrap().len(), 1);
    assert_eq!(order["items"][0]["quantity"], 2);

    let history = app
        .server
        .get("/api/account/orders")
        .authorization_bearer(&token)
        .await;
    history.assert_status_ok();
    let orders = history.json::<Value>()["data"].clone();
    assert_eq!(orders.as_array().unwrap().len(), 1);
    assert_eq!(orders[0]["id"], order["id"]);
}

#[tokio::test]
async fn oversized_quantities_are_rejected_before_pricing() {
    let app = TestApp::new();
    let token = app.customer_token("scully@area51.test").await;
    let (_, items) = app.seed_menu("Sides", &[("Gray Goo Dip", dec!(1))]).await;
    let id = items[0].id.to_string();

    let quote = app
        .server
        .post("/api/checkout/quote")
        .json(&json!({ "items": [{ "menu_item_id": id, "quantity": 3_000_000_000_i64 }] }))
        .await;
    quote.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        quote.json::<Value>()["error"],
        "quantity must be between 1 and 999, got 3000000000"
    );

    // Two lines for the same item merge past the cap.
    let merged = app
        .server
        .post("/api/checkout/quote")
        .json(&json!({ "items": [
            { "menu_item_id": id, "quantity": 600 },
            { "menu_item_id": id, "quantity": 600 },
        ] }))
        .await;
    merged.assert_status(StatusCode::BAD_REQUEST);

    let placed = app
        .server
        .post("/api/checkout")
        .authorization_bearer(&token)
        .json(&json!({
            "items": [{ "menu_item_id": id, "quantity": 3_000_000_000_i64 }],
            "delivery": delivery(),
        }))
        .await;
    placed.assert_status(StatusCode::BAD_REQUEST);

    let history = app
        .server
        .get("/api/account/orders")
        .authorization_bearer(&token)
        .await;
    assert!(history.json::<Value>()["data"].as_array().unwrap().is_empty());

    let at_cap = app
        .server
        .post("/api/checkout/quote")
        .json(&json!({ "items": [{ "menu_item_id": id, "quantity": 999 }] }))
        .await;
    at_cap.assert_status_ok();
    assert_eq!(money(&at_cap.json::<Value>()["data"]["subtotal"]), dec!(999));
}

#[tokio::test]
async fn checkout_rejects_incomplete_delivery_details() {
    let app = TestApp::new();
    let token = app.customer_token("scully@area51.test").await;
    let (_, items) = app.seed_menu("Mains", &[("Saucer Steak", dec!(24))]).await;

    let response = app
        .server
        .post("/api/checkout")
        .authorization_bearer(&token)
        .json(&json!({
            "items": [{ "menu_item_id": items[0].id.to_string(), "quantity": 1 }],
            "delivery": { "name": "Dana Scully" },
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"],
        "Please fill in all required fields"
    );
}

#[tokio::test]
async fn banners_and_offers_show_only_active_entries() {
    let app = TestApp::new();
    let admin = app.admin_token().await;

    let created = app
        .server
        .post("/api/banners")
        .authorization_bearer(&admin)
        .json(&json!({ "title": "Now open late", "image_url": "/media/banners/late.png" }))
        .await;
    created.assert_status(StatusCode::CREATED);
    let banner_id = created.json::<Value>()["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let visible = app.server.get("/api/storefront/banners").await.json::<Value>();
    assert_eq!(visible["data"].as_array().unwrap().len(), 1);

    app.server
        .post(&format!("/api/banners/{banner_id}/toggle"))
        .authorization_bearer(&admin)
        .await
        .assert_status_ok();
    let hidden = app.server.get("/api/storefront/banners").await.json::<Value>();
    assert!(hidden["data"].as_array().unwrap().is_empty());

    let offers = app.server.get("/api/storefront/offers").await;
    offers.assert_status_ok();
    assert!(offers.json::<Value>()["data"].as_array().unwrap().is_empty());
}
