use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::actions::test_support::{RecordingTransport, ScriptedDialogs, catalog};
use crate::net::api::Method;
use crate::state::admin::{AdminState, ListKind};

fn tools(name: &str) -> serde_json::Value {
    json!({"id": 2, "name": name, "description": "Hand tools", "created_at": "2024-01-05T09:00:00"})
}

#[test]
fn create_posts_to_collection() {
    let catalog = catalog(RecordingTransport::default().respond(201, tools("Tools")));
    let form = CategoryForm { name: "Tools".into(), description: String::new() };
    block_on(create_category(&catalog, &form)).unwrap();
    let requests = catalog.transport().requests();
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].path, "/api/v1/categories/");
    assert_eq!(requests[0].body, Some(json!({"name": "Tools", "description": ""})));
}

#[test]
fn create_sends_fields_as_typed() {
    let catalog = catalog(RecordingTransport::default().respond(201, json!({"message": "created"})));
    let form = CategoryForm { name: "  Tools ".into(), description: String::new() };
    block_on(create_category(&catalog, &form)).unwrap();
    let body = catalog.transport().requests()[0].body.clone();
    assert_eq!(body, Some(json!({"name": "  Tools ", "description": ""})));
}

#[test]
fn create_with_blank_name_sends_nothing() {
    let catalog = catalog(RecordingTransport::default());
    let form = CategoryForm::default();
    assert!(block_on(create_category(&catalog, &form)).is_err());
    assert!(catalog.transport().requests().is_empty());
}

#[test]
fn declined_delete_issues_zero_requests() {
    let catalog = catalog(RecordingTransport::default());
    let outcome = block_on(delete_category(&catalog, &ScriptedDialogs::confirming(false), 2)).unwrap();
    assert_eq!(outcome, Outcome::Cancelled);
    assert!(catalog.transport().requests().is_empty());
}

#[test]
fn confirmed_delete_targets_item() {
    let catalog = catalog(RecordingTransport::default().respond(200, json!({})));
    block_on(delete_category(&catalog, &ScriptedDialogs::confirming(true), 2)).unwrap();
    let requests = catalog.transport().requests();
    assert_eq!(requests[0].method, Method::Delete);
    assert_eq!(requests[0].path, "/api/v1/categories/2");
}

#[test]
fn edit_prompts_with_current_values() {
    let catalog = catalog(
        RecordingTransport::default()
            .respond(200, json!([tools("Tools")]))
            .respond(200, tools("Hardware")),
    );
    let dialogs = ScriptedDialogs::prompting(&[Some("Hardware"), Some("Nails and screws")]);
    let outcome = block_on(edit_category(&catalog, &dialogs, 2)).unwrap();
    assert_eq!(outcome, Outcome::Completed(()));

    let asked = dialogs.asked.borrow();
    assert_eq!(asked[0], (PROMPT_CATEGORY_NAME.to_owned(), Some("Tools".to_owned())));
    assert_eq!(asked[1], (PROMPT_CATEGORY_DESCRIPTION.to_owned(), Some("Hand tools".to_owned())));

    let put = &catalog.transport().requests()[1];
    assert_eq!(put.method, Method::Put);
    assert_eq!(put.path, "/api/v1/categories/2");
    assert_eq!(put.body, Some(json!({"name": "Hardware", "description": "Nails and screws"})));
}

#[test]
fn cancelled_name_prompt_aborts() {
    let catalog = catalog(RecordingTransport::default().respond(200, json!([tools("Tools")])));
    let dialogs = ScriptedDialogs::prompting(&[None]);
    let outcome = block_on(edit_category(&catalog, &dialogs, 2)).unwrap();
    assert_eq!(outcome, Outcome::Cancelled);
    assert_eq!(catalog.transport().requests().len(), 1);
    assert_eq!(dialogs.asked.borrow().len(), 1);
}

#[test]
fn cancelled_description_prompt_clears_description() {
    let catalog = catalog(
        RecordingTransport::default()
            .respond(200, json!([tools("Tools")]))
            .respond(200, tools("Tools")),
    );
    let dialogs = ScriptedDialogs::prompting(&[Some("Tools"), None]);
    block_on(edit_category(&catalog, &dialogs, 2)).unwrap();
    let put = &catalog.transport().requests()[1];
    assert_eq!(put.body, Some(json!({"name": "Tools", "description": null})));
}

#[test]
fn edit_of_missing_category_is_not_found() {
    let catalog = catalog(RecordingTransport::default().respond(200, json!([])));
    let dialogs = ScriptedDialogs::default();
    let err = block_on(edit_category(&catalog, &dialogs, 2)).unwrap_err();
    assert_eq!(err.user_message("Error updating category"), "Category not found");
    assert!(dialogs.asked.borrow().is_empty());
}

#[test]
fn update_is_reflected_in_list_and_dropdown() {
    let catalog = catalog(
        RecordingTransport::default()
            .respond(200, json!([tools("Tools")]))
            .respond(200, json!([tools("Tools")]))
            .respond(200, tools("Hardware"))
            .respond(200, json!([tools("Hardware")])),
    );
    let mut state = AdminState::default();
    let ticket = state.begin_load(ListKind::Categories);
    let categories = block_on(load_categories(&catalog)).unwrap();
    state.apply_categories(ticket, categories);
    assert_eq!(state.category_options[0].label, "Tools");

    let dialogs = ScriptedDialogs::prompting(&[Some("Hardware"), Some("Hand tools")]);
    block_on(edit_category(&catalog, &dialogs, 2)).unwrap();

    let ticket = state.begin_load(ListKind::Categories);
    let categories = block_on(load_categories(&catalog)).unwrap();
    assert!(state.apply_categories(ticket, categories));
    assert_eq!(state.categories[0].name, "Hardware");
    assert_eq!(state.category_options[0].label, "Hardware");
    assert_eq!(state.category_options[0].value, "2");
}
