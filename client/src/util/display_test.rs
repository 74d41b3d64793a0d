use super::*;

fn product(category: Option<Category>) -> Product {
    Product {
        id: 3,
        name: "Kettle".into(),
        description: None,
        price: 1999.5,
        image_url: Some("  ".into()),
        category_id: category.as_ref().map(|c| c.id),
        in_stock: false,
        created_at: None,
        category,
    }
}

fn kitchen() -> Category {
    Category {
        id: 2,
        name: "Kitchen".into(),
        description: Some("Pots and pans".into()),
        created_at: Some("2024-03-01T10:00:00".into()),
    }
}

#[test]
fn product_row_without_category_uses_label() {
    let row = ProductRow::from_product(&product(None));
    assert_eq!(row.summary, "Price: 1999.50 ₽ | Category: No category");
    assert_eq!(row.stock, "❌ Out of stock");
}

#[test]
fn product_row_with_category_shows_name() {
    let row = ProductRow::from_product(&product(Some(kitchen())));
    assert!(row.summary.ends_with("Category: Kitchen"));
}

#[test]
fn blank_image_url_is_treated_as_missing() {
    assert_eq!(image_src(&product(None)), None);
}

#[test]
fn category_row_formats_date_and_description() {
    let row = CategoryRow::from_category(&kitchen());
    assert_eq!(row.description, "Pots and pans");
    assert_eq!(row.created, "Created: 2024-03-01");
}

#[test]
fn category_row_placeholders() {
    let category = Category { id: 1, name: "Misc".into(), description: Some(String::new()), created_at: None };
    let row = CategoryRow::from_category(&category);
    assert_eq!(row.description, NO_DESCRIPTION_LABEL);
    assert_eq!(row.created, "Created: unknown");
}

#[test]
fn stock_label_reflects_flag() {
    assert_eq!(stock_label(true), "✅ In stock");
}
