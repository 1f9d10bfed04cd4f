//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use std::path::PathBuf;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde_json::{json, Value};
use tempfile::TempDir;
use trendy_store::config::{ApiConfig, Config};
use trendy_store::domain::{CategorySummary, Product};
use trendy_store::storage::MemoryTokenStorage;
use trendy_store::storefront::Storefront;

use mock_api::MockApi;

pub fn product(id: &str, price: i64) -> Product {
    Product {
        id: id.to_string(),
        title: format!("Product {}", id),
        price: Decimal::from(price),
        description: "Nice".to_string(),
        image: "Image".to_string(),
        category: CategorySummary {
            id: "c1".to_string(),
            name: "Clothes".to_string(),
            image: String::new(),
        },
        quantity: 5,
    }
}

/// Wire form of [`product`].
pub fn product_json(id: &str, price: i64) -> Value {
    json!({
        "_id": id,
        "title": format!("Product {}", id),
        "price": price,
        "description": "Nice",
        "image": "Image",
        "categoryId": { "_id": "c1", "name": "Clothes", "image": "" },
        "quantity": 5
    })
}

pub fn page_json(ids: &[&str], total: u64) -> String {
    let products: Vec<Value> = ids.iter().map(|id| product_json(id, 10)).collect();
    json!({ "products": products, "totalProduct": total }).to_string()
}

pub fn config_for(mock: &MockApi) -> Config {
    Config {
        api: ApiConfig {
            base_url: mock.base_url(),
            timeout_seconds: 5,
            connect_timeout_seconds: 2,
        },
        ..Config::default()
    }
}

/// Storefront against `mock` with an in-memory token slot.
pub fn storefront_for(mock: &MockApi) -> (Storefront, Arc<MemoryTokenStorage>) {
    let tokens = Arc::new(MemoryTokenStorage::new());
    let storefront =
        Storefront::new(config_for(mock), tokens.clone()).expect("storefront should build");
    (storefront, tokens)
}

/// Write `content` to a fresh `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
