//! Application state and cross-store policy.
//!
//! [`AppState`] is created once at startup and handed to the rendering
//! layer by reference; there are no global singletons. Operations that
//! touch more than one store (cart notices, form submission, detail
//! lookup) live here, while single-store mutations delegate to the store
//! that owns the data.

use tracing::{info, instrument, warn};
use vitrine_core::{FetchState, ProductId};

use crate::catalog::{CatalogClient, Product};
use crate::error::AppError;
use crate::forms::{DraftIdGenerator, FormErrors, ProductForm};
use crate::stores::{
    CartStore, CategoryFilter, DraftStore, FilterState, PreferenceStore, QuantitySelection,
};
use crate::view::CatalogView;

/// Outcome of an add-to-cart request.
///
/// Neither case is an error: both leave the state consistent and carry the
/// product title for the notice the rendering layer shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartNotice {
    /// A new line was created
    Added { title: String },
    /// The product was already in the cart; nothing changed
    AlreadyInCart { title: String },
}

impl CartNotice {
    /// Notice text for display.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Added { title } => format!("\"{title}\" added to cart!"),
            Self::AlreadyInCart { title } => format!("\"{title}\" is already in the cart."),
        }
    }
}

/// What the product detail view should show for a route parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView<'a> {
    /// The products fetch has not settled and no draft matches yet
    Loading,
    /// The product, from drafts or the fetched list
    Found(&'a Product),
    /// No product has this id (or the parameter is not an id at all)
    NotFound,
    /// The products fetch failed; message for display
    Failed(&'a str),
}

// =============================================================================
// AppState
// =============================================================================

/// The complete client state: fetched catalog, stores, filter, and form.
///
/// All mutation goes through `&mut self` methods; reads hand out borrows
/// or cheap derived values.
pub struct AppState {
    client: CatalogClient,
    products: FetchState<Vec<Product>>,
    categories: FetchState<Vec<String>>,
    cart: CartStore,
    drafts: DraftStore,
    filter: FilterState,
    prefs: PreferenceStore,
    quantities: QuantitySelection,
    form: ProductForm,
    draft_ids: DraftIdGenerator,
}

impl AppState {
    /// Create the initial application state.
    ///
    /// Both catalog fetch states start at `Loading`; call
    /// [`Self::load_catalog`] to populate them.
    #[must_use]
    pub fn new(client: CatalogClient) -> Self {
        Self {
            client,
            products: FetchState::Loading,
            categories: FetchState::Loading,
            cart: CartStore::new(),
            drafts: DraftStore::new(),
            filter: FilterState::new(),
            prefs: PreferenceStore::new(),
            quantities: QuantitySelection::new(),
            form: ProductForm::new(),
            draft_ids: DraftIdGenerator::new(),
        }
    }

    // =========================================================================
    // Catalog Loading
    // =========================================================================

    /// Load (or reload) the catalog.
    ///
    /// The product and category fetches run concurrently and settle
    /// independently, so one failing does not disturb the other. Results
    /// within the cache TTL are served from cache.
    #[instrument(skip(self))]
    pub async fn load_catalog(&mut self) {
        self.products = FetchState::Loading;
        self.categories = FetchState::Loading;

        let (products, categories) =
            tokio::join!(self.client.products(), self.client.categories());

        self.settle_products(FetchState::from_result(products));
        self.settle_categories(FetchState::from_result(categories));
    }

    /// Apply a products fetch outcome.
    pub fn settle_products(&mut self, outcome: FetchState<Vec<Product>>) {
        match &outcome {
            FetchState::Ready(products) => info!(count = products.len(), "products fetch settled"),
            FetchState::Failed(message) => warn!(%message, "products fetch failed"),
            FetchState::Loading => {}
        }
        self.products = outcome;
    }

    /// Apply a categories fetch outcome.
    pub fn settle_categories(&mut self, outcome: FetchState<Vec<String>>) {
        match &outcome {
            FetchState::Ready(categories) => {
                info!(count = categories.len(), "categories fetch settled");
            }
            FetchState::Failed(message) => warn!(%message, "categories fetch failed"),
            FetchState::Loading => {}
        }
        self.categories = outcome;
    }

    /// The products fetch state.
    #[must_use]
    pub const fn products(&self) -> &FetchState<Vec<Product>> {
        &self.products
    }

    /// The categories fetch state.
    #[must_use]
    pub const fn categories(&self) -> &FetchState<Vec<String>> {
        &self.categories
    }

    // =========================================================================
    // Catalog View
    // =========================================================================

    /// View over the combined catalog (drafts first, then fetched).
    ///
    /// While the products fetch is unsettled the fetched side is empty, so
    /// the view covers drafts only.
    #[must_use]
    pub fn catalog(&self) -> CatalogView<'_> {
        let fetched = self.products.ready().map(Vec::as_slice).unwrap_or_default();
        CatalogView::new(self.drafts.products(), fetched)
    }

    /// Products passing the current filter, in combined order.
    #[must_use]
    pub fn visible_products(&self) -> Vec<&Product> {
        self.catalog().visible(&self.filter)
    }

    /// Resolve the product detail view for a route parameter.
    ///
    /// Drafts resolve even while the products fetch is unsettled. A
    /// parameter that is not an id at all can never be found and yields
    /// `NotFound` immediately.
    #[must_use]
    pub fn product_detail(&self, route_param: &str) -> DetailView<'_> {
        let Ok(id) = route_param.parse::<ProductId>() else {
            return DetailView::NotFound;
        };

        if let Some(product) = self.drafts.products().iter().find(|p| p.id == id) {
            return DetailView::Found(product);
        }

        match &self.products {
            FetchState::Loading => DetailView::Loading,
            FetchState::Ready(products) => products
                .iter()
                .find(|p| p.id == id)
                .map_or(DetailView::NotFound, DetailView::Found),
            FetchState::Failed(message) => DetailView::Failed(message),
        }
    }

    // =========================================================================
    // Cart Operations
    // =========================================================================

    /// Add a product to the cart by id, using the pending quantity
    /// selection for that product.
    ///
    /// If the product is already in the cart nothing changes and
    /// [`CartNotice::AlreadyInCart`] is returned. On a fresh add the
    /// product is snapshotted into the cart and the quantity selection
    /// resets to 1.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ProductNotFound`] if the id is not in the
    /// combined catalog.
    #[instrument(skip(self))]
    pub fn add_to_cart(&mut self, id: ProductId) -> Result<CartNotice, AppError> {
        let product = self
            .catalog()
            .find(id)
            .cloned()
            .ok_or(AppError::ProductNotFound(id))?;

        if self.cart.contains(id) {
            return Ok(CartNotice::AlreadyInCart {
                title: product.title,
            });
        }

        let quantity = self.quantities.get(id);
        let title = product.title.clone();
        self.cart.add(product, quantity);
        self.quantities.reset(id);
        info!(%id, quantity, "added product to cart");

        Ok(CartNotice::Added { title })
    }

    /// Remove a line from the cart. Unknown ids are a no-op.
    pub fn remove_from_cart(&mut self, id: ProductId) {
        self.cart.remove(id);
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// The cart.
    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Pending quantity selections for the product cards.
    #[must_use]
    pub const fn quantities(&self) -> &QuantitySelection {
        &self.quantities
    }

    /// Set the pending quantity for a product.
    pub fn set_quantity(&mut self, id: ProductId, quantity: u32) {
        self.quantities.set(id, quantity);
    }

    // =========================================================================
    // Draft Products
    // =========================================================================

    /// The add-product form as currently entered.
    #[must_use]
    pub const fn form(&self) -> &ProductForm {
        &self.form
    }

    /// Mutable access to the form for field edits.
    pub const fn form_mut(&mut self) -> &mut ProductForm {
        &mut self.form
    }

    /// Submit the add-product form.
    ///
    /// On success the draft is prepended to the catalog, the form is
    /// cleared, and the minted id is returned. On failure the form keeps
    /// its content for correction.
    ///
    /// # Errors
    ///
    /// Returns [`FormErrors`] listing every failing field.
    #[instrument(skip(self))]
    pub fn submit_product(&mut self) -> Result<ProductId, FormErrors> {
        let draft = self.form.validate()?;
        let id = self.draft_ids.next_id();
        let product = draft.into_product(id);
        info!(%id, title = %product.title, "draft product created");

        self.drafts.prepend(product);
        self.form.clear();

        Ok(id)
    }

    /// The draft store (newest first).
    #[must_use]
    pub const fn drafts(&self) -> &DraftStore {
        &self.drafts
    }

    // =========================================================================
    // Filter and Preferences
    // =========================================================================

    /// The current catalog filter.
    #[must_use]
    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Set the search query.
    pub fn set_search(&mut self, value: &str) {
        self.filter.set_search(value);
    }

    /// Set the category selection.
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.filter.set_category(category);
    }

    /// Clear search and category together.
    pub fn reset_filters(&mut self) {
        self.filter.reset();
    }

    /// UI preferences.
    #[must_use]
    pub const fn prefs(&self) -> &PreferenceStore {
        &self.prefs
    }

    /// Flip dark mode.
    pub const fn toggle_dark_mode(&mut self) {
        self.prefs.toggle_dark_mode();
    }

    /// Set dark mode to a specific value.
    pub const fn set_dark_mode(&mut self, value: bool) {
        self.prefs.set_dark_mode(value);
    }

    /// Flip cart panel visibility.
    pub const fn toggle_cart(&mut self) {
        self.prefs.toggle_cart();
    }
}
