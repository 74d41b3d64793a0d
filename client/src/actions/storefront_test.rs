use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::actions::test_support::{RecordingTransport, catalog};

fn page() -> serde_json::Value {
    json!({"items": [{"id": 1, "name": "Mug", "price": 3.0, "category_id": 4}], "total": 1, "page": 1, "pages": 1})
}

#[test]
fn forwards_category_filter_and_loads_stats() {
    let catalog = catalog(
        RecordingTransport::default()
            .respond(200, page())
            .respond(200, json!([{"category_id": 4, "category_name": "Kitchen", "product_count": 1}])),
    );
    let storefront = block_on(load_storefront(&catalog, Some(4))).unwrap();
    assert_eq!(storefront.products.len(), 1);
    assert_eq!(storefront.stats[0].category_name, "Kitchen");
    let paths: Vec<String> = catalog.transport().requests().into_iter().map(|r| r.path).collect();
    assert_eq!(paths, vec!["/api/v1/products/?page=1&page_size=100&category_id=4", "/api/v1/categories/stats/"]);
}

#[test]
fn failed_stats_leave_empty_navigation() {
    let catalog = catalog(RecordingTransport::default().respond(200, page()).respond(500, json!({})));
    let storefront = block_on(load_storefront(&catalog, None)).unwrap();
    assert_eq!(storefront.products.len(), 1);
    assert!(storefront.stats.is_empty());
}

#[test]
fn failed_products_fail_the_page() {
    let catalog = catalog(RecordingTransport::default().respond(503, json!({"detail": "down"})).respond(200, json!([])));
    assert!(block_on(load_storefront(&catalog, None)).is_err());
}
