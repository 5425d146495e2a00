use area51::adapter::inbound::http::router::{router, HttpOptions};
use area51::application::state::AppServices;
use area51::domain::category::Category;
use area51::domain::menu::MenuItem;
use area51::port::outbound::store::{CategoryStore, MenuItemStore};
use area51::testkit;
use axum::http::StatusCode;
use axum_test::TestServer;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use super::temp_db::TempDb;

pub const ADMIN_EMAIL: &str = "admin@area51.test";
pub const ADMIN_PASSWORD: &str = "kitchen-open";

/// The full HTTP stack over a scratch database.
pub struct TestApp {
    pub db: TempDb,
    pub services: AppServices,
    pub server: TestServer,
}

impl TestApp {
    pub fn new() -> Self {
        let db = TempDb::create();
        let services = db.services();
        let options = HttpOptions {
            media_root: db.config().storage.media_root.clone().into(),
            cors_origins: Vec::new(),
            max_upload_bytes: services.media.policy().max_bytes,
        };
        let server = TestServer::new(router(services.clone(), &options)).expect("build test server");
        Self {
            db,
            services,
            server,
        }
    }

    /// Provision the default admin and return a bearer token for it.
    pub async fn admin_token(&self) -> String {
        self.services
            .staff
            .ensure_admin(ADMIN_EMAIL, "Head Chef", ADMIN_PASSWORD)
            .await
            .expect("create admin");

        let response = self
            .server
            .post("/api/auth/login")
            .json(&json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }))
            .await;
        response.assert_status(StatusCode::OK);
        token_of(&response.json::<Value>())
    }

    /// Sign up a storefront customer and return its token.
    pub async fn customer_token(&self, email: &str) -> String {
        let response = self
            .server
            .post("/api/account/signup")
            .json(&json!({
                "full_name": "Dana Scully",
                "email": email,
                "password": "TrustNo1one",
                "confirm_password": "TrustNo1one",
            }))
            .await;
        response.assert_status(StatusCode::CREATED);
        token_of(&response.json::<Value>())
    }

    /// Insert a category with the given items directly through the stores.
    pub async fn seed_menu(&self, category: &str, items: &[(&str, Decimal)]) -> (Category, Vec<MenuItem>) {
        let db = self.db.pool().clone();
        let categories = area51::adapter::outbound::sqlite::catalog::SqliteCategoryStore::new(db.clone());
        let menu_items = area51::adapter::outbound::sqlite::catalog::SqliteMenuItemStore::new(db);

        let category = testkit::domain::category(category);
        categories.insert(&category).await.expect("insert category");

        let mut seeded = Vec::new();
        for (name, price) in items {
            let item = testkit::domain::menu_item(name, *price, &category);
            menu_items.insert(&item).await.expect("insert menu item");
            seeded.push(item);
        }
        (category, seeded)
    }
}

fn token_of(body: &Value) -> String {
    body["token"].as_str().expect("token in body").to_string()
}
