use super::*;

fn category(id: i64, name: &str) -> Category {
    Category { id, name: name.into(), description: None, created_at: None }
}

fn product(id: i64) -> Product {
    Product {
        id,
        name: format!("p{id}"),
        description: None,
        price: 1.0,
        image_url: None,
        category_id: None,
        in_stock: true,
        created_at: None,
        category: None,
    }
}

// =============================================================
// Tabs
// =============================================================

#[test]
fn default_tab_is_add_product() {
    let state = AdminState::default();
    assert!(state.is_active(AdminTab::AddProduct));
    assert_eq!(AdminTab::ALL.iter().filter(|t| state.is_active(**t)).count(), 1);
}

#[test]
fn activating_manage_tabs_requests_their_list() {
    let mut state = AdminState::default();
    assert_eq!(state.activate(AdminTab::ManageProducts), Some(ListKind::Products));
    assert_eq!(state.activate(AdminTab::ManageCategories), Some(ListKind::Categories));
    assert_eq!(state.activate(AdminTab::AddCategory), None);
}

#[test]
fn exactly_one_tab_is_active_after_each_switch() {
    let mut state = AdminState::default();
    for tab in AdminTab::ALL {
        state.activate(tab);
        let active: Vec<AdminTab> = AdminTab::ALL.into_iter().filter(|t| state.is_active(*t)).collect();
        assert_eq!(active, vec![tab]);
    }
}

#[test]
fn is_showing_matches_manage_tabs() {
    let mut state = AdminState::default();
    assert!(!state.is_showing(ListKind::Products));
    state.activate(AdminTab::ManageProducts);
    assert!(state.is_showing(ListKind::Products));
    assert!(!state.is_showing(ListKind::Categories));
}

#[test]
fn dom_ids_match_sections() {
    let ids: Vec<&str> = AdminTab::ALL.iter().map(|t| t.dom_id()).collect();
    assert_eq!(ids, vec!["add-product", "add-category", "manage-products", "manage-categories"]);
}

// =============================================================
// Load tickets
// =============================================================

#[test]
fn newest_products_response_wins() {
    let mut state = AdminState::default();
    let first = state.begin_load(ListKind::Products);
    let second = state.begin_load(ListKind::Products);
    assert!(state.apply_products(second, vec![product(2)]));
    assert!(!state.apply_products(first, vec![product(1)]));
    assert_eq!(state.products, vec![product(2)]);
}

#[test]
fn tickets_are_per_list() {
    let mut state = AdminState::default();
    let products = state.begin_load(ListKind::Products);
    let categories = state.begin_load(ListKind::Categories);
    assert!(state.apply_products(products, vec![]));
    assert!(state.apply_categories(categories, vec![]));
}

#[test]
fn applying_categories_refreshes_dropdown() {
    let mut state = AdminState::default();
    let ticket = state.begin_load(ListKind::Categories);
    state.apply_categories(ticket, vec![category(1, "Tools"), category(2, "Garden")]);
    let labels: Vec<&str> = state.category_options.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, vec!["Tools", "Garden"]);
    assert_eq!(state.category_options[0].value, "1");
}

#[test]
fn stale_categories_leave_dropdown_untouched() {
    let mut state = AdminState::default();
    let stale = state.begin_load(ListKind::Categories);
    let fresh = state.begin_load(ListKind::Categories);
    state.apply_categories(fresh, vec![category(1, "New")]);
    assert!(!state.apply_categories(stale, vec![category(1, "Old")]));
    assert_eq!(state.category_options[0].label, "New");
}
