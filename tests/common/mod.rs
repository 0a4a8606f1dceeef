// tests/common/mod.rs
#![allow(dead_code)]

use std::sync::Arc;

use axum::{body::Body, Router};
use http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use product_inventory::models::product::{NewProduct, Product};
use product_inventory::store::{MemoryProductStore, ProductStore};
use product_inventory::{build_app, AppState};
use tower::ServiceExt;

pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

pub struct TestApp {
    pub app: Router,
    pub store: Arc<MemoryProductStore>,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(MemoryProductStore::new());
        let app = build_app(AppState::new(store.clone()));
        Self { app, store }
    }

    pub async fn seed(&self, name: &str, quantity: i32, unit_price: &str) -> Product {
        self.store
            .insert(&NewProduct {
                name: name.to_string(),
                description: String::new(),
                quantity,
                unit_price: unit_price.parse().unwrap(),
            })
            .await
            .unwrap()
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// POSTs an already url-encoded form body.
    pub async fn post_form(&self, uri: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        TestResponse {
            status,
            location,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }
}

pub fn widget_form(quantity: &str, unit_price: &str) -> String {
    format!("name=Widget&description=&quantity={quantity}&unit_price={unit_price}")
}
