//! Catalog inspection commands.
//!
//! # Usage
//!
//! ```bash
//! # List categories
//! vitrine categories
//!
//! # List products matching a search, with highlighted matches
//! vitrine products --search mouse
//! ```
//!
//! # Environment Variables
//!
//! - `CATALOG_BASE_URL` - Catalog service base URL (default: <https://fakestoreapi.com>)
//! - `CATALOG_TIMEOUT_SECS` - HTTP request timeout in seconds (default: 10)

use vitrine_core::FetchState;
use vitrine_storefront::catalog::CatalogClient;
use vitrine_storefront::config::StorefrontConfig;
use vitrine_storefront::error::Result;
use vitrine_storefront::state::{AppState, DetailView};
use vitrine_storefront::stores::CategoryFilter;
use vitrine_storefront::view::highlight;

/// Build an application state with the catalog loaded.
async fn load_state() -> Result<AppState> {
    let config = StorefrontConfig::from_env()?;
    let client = CatalogClient::new(&config)?;

    let mut state = AppState::new(client);
    state.load_catalog().await;
    Ok(state)
}

/// List catalog categories.
pub async fn categories() -> Result<()> {
    let state = load_state().await?;

    match state.categories() {
        FetchState::Ready(categories) => {
            tracing::info!("{} categories:", categories.len());
            for category in categories {
                tracing::info!("  {category}");
            }
        }
        FetchState::Failed(message) => tracing::warn!("Categories unavailable: {message}"),
        FetchState::Loading => tracing::warn!("Categories fetch did not settle"),
    }
    Ok(())
}

/// List products passing the given filters.
pub async fn products(search: &str, category: &str) -> Result<()> {
    let mut state = load_state().await?;
    state.set_search(search);
    state.set_category(CategoryFilter::parse(category));

    if let Some(message) = state.products().error() {
        tracing::warn!("Products unavailable: {message}");
        return Ok(());
    }

    let visible = state.visible_products();
    tracing::info!("{} products match", visible.len());
    for product in visible {
        tracing::info!(
            "  [{}] {} - ${} ({})",
            product.id,
            render_highlight(&product.title, search),
            product.price,
            product.category
        );
    }
    Ok(())
}

/// Show a single product by id.
pub async fn show(id: &str) -> Result<()> {
    let state = load_state().await?;

    match state.product_detail(id) {
        DetailView::Found(product) => {
            tracing::info!("{}", product.title);
            tracing::info!("  id:       {}", product.id);
            tracing::info!("  price:    ${}", product.price);
            tracing::info!("  category: {}", product.category);
            tracing::info!(
                "  rating:   {} ({} ratings)",
                product.rating.rate,
                product.rating.count
            );
            tracing::info!("  image:    {}", product.image);
            tracing::info!("  {}", product.description);
        }
        DetailView::NotFound => tracing::warn!("No product with id {id}"),
        DetailView::Failed(message) => tracing::warn!("Products unavailable: {message}"),
        DetailView::Loading => tracing::warn!("Products fetch did not settle"),
    }
    Ok(())
}

/// Wrap matched runs in brackets for terminal display.
fn render_highlight(title: &str, query: &str) -> String {
    highlight(title, query)
        .into_iter()
        .map(|fragment| {
            if fragment.matched {
                format!("[{}]", fragment.text)
            } else {
                fragment.text
            }
        })
        .collect()
}
