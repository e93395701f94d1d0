//! Integration tests for locally created draft products.
//!
//! These tests run the add-product form end to end: validation messages,
//! draft synthesis with clock-derived ids, placement in the combined
//! catalog, and detail lookup before the server fetch settles.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use vitrine_core::{FetchState, Price, ProductId};
use vitrine_storefront::catalog::{CatalogClient, Product, Rating};
use vitrine_storefront::config::StorefrontConfig;
use vitrine_storefront::forms::{ProductForm, messages};
use vitrine_storefront::state::{AppState, DetailView};

fn empty_state() -> AppState {
    let config = StorefrontConfig {
        catalog_base_url: "http://localhost:9".to_string(),
        cache_ttl: Duration::from_secs(1),
        request_timeout: Duration::from_secs(1),
    };
    AppState::new(CatalogClient::new(&config).unwrap())
}

fn server_product(id: i64, title: &str) -> Product {
    Product {
        id: ProductId::new(id),
        title: title.to_string(),
        price: Price::from_cents(999),
        description: format!("{title} description"),
        category: "electronics".to_string(),
        image: "https://example.com/img.jpg".to_string(),
        rating: Rating::zero(),
    }
}

fn filled_form(title: &str) -> ProductForm {
    ProductForm {
        title: title.to_string(),
        price: "19.99".to_string(),
        description: "Hand made, small batch.".to_string(),
        category: "accessories".to_string(),
        image: "https://example.com/item.jpg".to_string(),
    }
}

// =============================================================================
// Submission
// =============================================================================

#[test]
fn test_submitted_draft_leads_the_catalog() {
    let mut state = empty_state();
    state.settle_products(FetchState::Ready(vec![server_product(1, "Wireless Mouse")]));

    *state.form_mut() = filled_form("Canvas Tote");
    let id = state.submit_product().unwrap();

    let titles: Vec<&str> = state
        .visible_products()
        .iter()
        .map(|p| p.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Canvas Tote", "Wireless Mouse"]);

    let draft = state.drafts().products().first().expect("draft stored");
    assert_eq!(draft.id, id);
    assert_eq!(draft.rating, Rating::zero());
    assert_eq!(draft.price.display(), "19.99");
}

#[test]
fn test_successive_drafts_stack_newest_first_with_increasing_ids() {
    let mut state = empty_state();

    *state.form_mut() = filled_form("First");
    let first = state.submit_product().unwrap();

    *state.form_mut() = filled_form("Second");
    let second = state.submit_product().unwrap();

    assert!(second > first);
    let titles: Vec<&str> = state
        .drafts()
        .products()
        .iter()
        .map(|p| p.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Second", "First"]);
}

#[test]
fn test_draft_ids_look_like_epoch_millis() {
    let mut state = empty_state();
    *state.form_mut() = filled_form("Canvas Tote");
    let id = state.submit_product().unwrap();

    // Well past 2020-01-01 in milliseconds
    assert!(id.as_i64() > 1_577_836_800_000);
}

#[test]
fn test_form_clears_after_success() {
    let mut state = empty_state();
    *state.form_mut() = filled_form("Canvas Tote");
    state.submit_product().unwrap();

    assert_eq!(state.form(), &ProductForm::new());
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_empty_form_reports_all_fields_and_keeps_state() {
    let mut state = empty_state();
    let errors = state.submit_product().unwrap_err();

    assert_eq!(errors.title, Some(messages::TITLE_REQUIRED));
    assert_eq!(errors.price, Some(messages::PRICE_NOT_A_NUMBER));
    assert_eq!(errors.description, Some(messages::DESCRIPTION_REQUIRED));
    assert_eq!(errors.category, Some(messages::CATEGORY_REQUIRED));
    assert_eq!(errors.image, Some(messages::IMAGE_URL_INVALID));
    assert!(state.drafts().is_empty());
}

#[test]
fn test_non_positive_price_message() {
    let mut state = empty_state();
    let mut form = filled_form("Canvas Tote");
    form.price = "-3".to_string();
    *state.form_mut() = form;

    let errors = state.submit_product().unwrap_err();
    assert_eq!(errors.price, Some(messages::PRICE_NOT_POSITIVE));
}

#[test]
fn test_invalid_form_keeps_entered_content() {
    let mut state = empty_state();
    let mut form = filled_form("Canvas Tote");
    form.image = "not a url".to_string();
    *state.form_mut() = form.clone();

    let errors = state.submit_product().unwrap_err();

    assert_eq!(errors.image, Some(messages::IMAGE_URL_INVALID));
    assert_eq!(state.form(), &form);
}

// =============================================================================
// Drafts in the Combined Catalog
// =============================================================================

#[test]
fn test_draft_detail_resolves_while_products_still_loading() {
    let mut state = empty_state();
    assert!(state.products().is_loading());

    *state.form_mut() = filled_form("Canvas Tote");
    let id = state.submit_product().unwrap();

    match state.product_detail(&id.to_string()) {
        DetailView::Found(found) => assert_eq!(found.title, "Canvas Tote"),
        other => panic!("expected Found, got {other:?}"),
    }
}

#[test]
fn test_draft_shadows_server_product_with_same_id() {
    let mut state = empty_state();
    *state.form_mut() = filled_form("Draft Tote");
    let id = state.submit_product().unwrap();

    // A server product that happens to reuse the draft id
    state.settle_products(FetchState::Ready(vec![server_product(
        id.as_i64(),
        "Server Tote",
    )]));

    match state.product_detail(&id.to_string()) {
        DetailView::Found(found) => assert_eq!(found.title, "Draft Tote"),
        other => panic!("expected Found, got {other:?}"),
    }
    // Both stay listed; ids are not deduplicated
    assert_eq!(state.catalog().len(), 2);
}

#[test]
fn test_drafts_participate_in_search() {
    let mut state = empty_state();
    state.settle_products(FetchState::Ready(vec![server_product(1, "Wireless Mouse")]));

    *state.form_mut() = filled_form("Canvas Tote");
    state.submit_product().unwrap();

    state.set_search("tote");
    let titles: Vec<&str> = state
        .visible_products()
        .iter()
        .map(|p| p.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Canvas Tote"]);
}

#[test]
fn test_drafts_survive_catalog_reload() {
    let mut state = empty_state();
    *state.form_mut() = filled_form("Canvas Tote");
    state.submit_product().unwrap();

    state.settle_products(FetchState::Failed("boom".to_string()));
    state.settle_products(FetchState::Ready(vec![server_product(1, "Wireless Mouse")]));

    assert_eq!(state.drafts().len(), 1);
    assert_eq!(state.catalog().len(), 2);
}
