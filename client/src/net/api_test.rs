use super::*;

// =============================================================
// Endpoint builders
// =============================================================

#[test]
fn list_products_request_uses_oversized_page() {
    let req = list_products_request(1, FULL_PAGE_SIZE, None);
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.path, "/api/v1/products/?page=1&page_size=100");
    assert!(req.body.is_none());
}

#[test]
fn list_products_request_appends_category_filter() {
    let req = list_products_request(1, 100, Some(4));
    assert_eq!(req.path, "/api/v1/products/?page=1&page_size=100&category_id=4");
}

#[test]
fn product_paths_split_public_and_admin() {
    assert_eq!(get_product_request(9).path, "/api/v1/products/9");
    assert_eq!(delete_product_request(9).path, "/api/v1/admin/products/9");
    assert_eq!(delete_product_request(9).method, Method::Delete);
}

#[test]
fn create_product_request_posts_json_payload() {
    let payload = ProductPayload {
        name: "Lamp".into(),
        description: String::new(),
        price: 12.5,
        image_url: String::new(),
        category_id: Some(3),
        in_stock: true,
    };
    let req = create_product_request(&payload).unwrap();
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.path, "/api/v1/admin/products/");
    let body = req.body.unwrap();
    assert!(body["price"].is_f64());
    assert_eq!(body["category_id"], serde_json::json!(3));
}

#[test]
fn update_product_request_puts_to_admin_path() {
    let payload = ProductPayload {
        name: "Lamp".into(),
        description: String::new(),
        price: 1.0,
        image_url: String::new(),
        category_id: None,
        in_stock: false,
    };
    let req = update_product_request(5, &payload).unwrap();
    assert_eq!(req.method, Method::Put);
    assert_eq!(req.path, "/api/v1/admin/products/5");
    assert!(req.body.unwrap()["category_id"].is_null());
}

#[test]
fn category_requests_target_collection_and_item() {
    assert_eq!(list_categories_request().path, "/api/v1/categories/");
    assert_eq!(category_stats_request().path, "/api/v1/categories/stats/");
    let payload = CategoryPayload { name: "Tools".into(), description: None };
    assert_eq!(create_category_request(&payload).unwrap().path, "/api/v1/categories/");
    let update = update_category_request(2, &payload).unwrap();
    assert_eq!(update.method, Method::Put);
    assert_eq!(update.path, "/api/v1/categories/2");
    assert_eq!(delete_category_request(2).method, Method::Delete);
}

// =============================================================
// Responses and errors
// =============================================================

#[test]
fn error_for_status_passes_success_through() {
    let resp = ApiResponse { status: 201, body: "{}".into() };
    assert!(resp.error_for_status().is_ok());
}

#[test]
fn error_for_status_extracts_detail() {
    let resp = ApiResponse { status: 400, body: r#"{"detail":"Name taken"}"#.into() };
    let err = resp.error_for_status().unwrap_err();
    assert_eq!(err, ApiError::Rejected { status: 400, detail: Some("Name taken".into()) });
}

#[test]
fn error_for_status_tolerates_non_json_body() {
    let resp = ApiResponse { status: 500, body: "Internal Server Error".into() };
    let err = resp.error_for_status().unwrap_err();
    assert_eq!(err, ApiError::Rejected { status: 500, detail: None });
}

#[test]
fn json_reports_decode_failure() {
    let resp = ApiResponse { status: 200, body: "not json".into() };
    let err = resp.json::<Vec<Category>>().unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn user_message_shows_detail_verbatim() {
    let err = ApiError::Rejected { status: 422, detail: Some("price must be positive".into()) };
    assert_eq!(err.user_message("Error creating product"), "Error creating product: price must be positive");
}

#[test]
fn user_message_falls_back_to_generic_text() {
    assert_eq!(ApiError::Transport("offline".into()).user_message("Error creating product"), "Error creating product");
    let bare = ApiError::Rejected { status: 500, detail: None };
    assert_eq!(bare.user_message("Error deleting product"), "Error deleting product");
}

#[test]
fn browser_transport_is_unavailable_natively() {
    let catalog = Catalog::browser();
    let err = futures::executor::block_on(catalog.list_categories()).unwrap_err();
    assert_eq!(err, ApiError::Unavailable);
}
