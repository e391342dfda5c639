//! The dashboard controller: load, edit, and submit state over the catalog API.
//!
//! [`Dashboard`] is a headless admin console core. It owns the canonical
//! product list, the edit/submit lifecycle, and the durable category options;
//! a frontend renders from its accessors and forwards user events to its
//! methods. Nothing here does any drawing.
//!
//! # Refresh model
//!
//! The controller never merges a mutation result into its list. Every
//! successful create, update, or delete is followed by a full refetch, so the
//! displayed list always reflects a recent server read.
//!
//! Refreshes are split into two phases so an event loop can run them without
//! holding the controller across an await: [`Dashboard::begin_refresh`] hands
//! out a [`RefreshTicket`], [`Dashboard::apply_refresh`] settles it. Each
//! ticket carries a sequence number; a ticket older than the latest one
//! dispatched is discarded on arrival, so out-of-order responses can never
//! clobber newer data. [`Dashboard::refresh`] composes the two phases for
//! callers that just want to await the whole thing.

use uuid::Uuid;

use thiserror::Error;

use crate::core::product::{Product, ProductPayload};
use crate::dashboard::categories::CategoryStore;
use crate::dashboard::client::{ApiError, CatalogApi};
use crate::dashboard::projection::{self, ProductView};

/// The fixed message shown when the product list cannot be loaded.
pub const LOAD_ERROR_MESSAGE: &str =
    "Failed to load products. Please ensure the backend server is running.";

/// Lifecycle of the product list.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    /// No fetch has been dispatched yet.
    Idle,
    /// A fetch is in flight; any previous error is cleared.
    Loading,
    /// The latest fetch failed. The message is display-ready; the underlying
    /// cause goes to the log instead.
    Error(String),
    /// The latest fetch succeeded; this is the canonical list.
    Ready(Vec<Product>),
}

/// Editable form state for the create/update panel.
///
/// A detached copy: editing a form never touches the displayed list. The
/// default value is the blank create form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

impl ProductForm {
    /// Pre-populate the form from a stored product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price,
            category: product.category.clone(),
            in_stock: product.in_stock,
        }
    }

    /// The complete payload this form submits.
    pub fn to_payload(&self) -> ProductPayload {
        ProductPayload {
            name: Some(self.name.clone()),
            price: Some(self.price),
            category: Some(self.category.clone()),
            in_stock: Some(self.in_stock),
        }
    }
}

/// Proof that a refresh was dispatched; settled exactly once by
/// [`Dashboard::apply_refresh`].
///
/// Deliberately neither `Clone` nor `Copy`, so one response settles one
/// dispatch.
#[derive(Debug)]
pub struct RefreshTicket {
    seq: u64,
}

/// Errors surfaced to the frontend by controller actions.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// A submission is already in flight; the new one was not dispatched.
    #[error("a submission is already in flight")]
    SubmitInFlight,

    /// The API call failed; the message is the server's (or the transport's).
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Headless state controller for the catalog admin dashboard.
pub struct Dashboard<A: CatalogApi> {
    api: A,
    categories: CategoryStore,
    load: LoadState,
    editing: Option<Product>,
    submitting: bool,
    dispatched: u64,
}

impl<A: CatalogApi> Dashboard<A> {
    /// Create a controller in the [`LoadState::Idle`] state.
    ///
    /// The category store is injected so embedders decide where (or whether)
    /// it persists. Call [`Dashboard::refresh`] once for the initial load.
    pub fn new(api: A, categories: CategoryStore) -> Self {
        Self {
            api,
            categories,
            load: LoadState::Idle,
            editing: None,
            submitting: false,
            dispatched: 0,
        }
    }

    // ---- load --------------------------------------------------------

    /// Dispatch a refresh: the list enters [`LoadState::Loading`] and the
    /// returned ticket must be settled with [`Dashboard::apply_refresh`].
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.dispatched += 1;
        self.load = LoadState::Loading;
        RefreshTicket {
            seq: self.dispatched,
        }
    }

    /// Settle a dispatched refresh with its outcome.
    ///
    /// Returns `false` when the ticket is stale — a newer refresh was
    /// dispatched after this one — in which case the outcome is discarded
    /// and no state changes. Otherwise the list becomes `Ready` or `Error`.
    pub fn apply_refresh(
        &mut self,
        ticket: RefreshTicket,
        outcome: Result<Vec<Product>, ApiError>,
    ) -> bool {
        if ticket.seq != self.dispatched {
            return false;
        }

        self.load = match outcome {
            Ok(products) => LoadState::Ready(products),
            Err(err) => {
                tracing::error!(error = %err, "failed to fetch products");
                LoadState::Error(LOAD_ERROR_MESSAGE.to_string())
            }
        };
        true
    }

    /// Fetch the product list and settle the result in one call.
    pub async fn refresh(&mut self) {
        let ticket = self.begin_refresh();
        let outcome = self.api.fetch_products().await;
        self.apply_refresh(ticket, outcome);
    }

    // ---- edit lifecycle ----------------------------------------------

    /// Enter edit mode for a product in the current list.
    ///
    /// Returns the pre-populated form, or `None` when the id is not in the
    /// displayed list (it cannot be edited if it cannot be seen). The
    /// controller keeps its own copy of the record; mutating the returned
    /// form has no effect on the list.
    pub fn begin_edit(&mut self, id: Uuid) -> Option<ProductForm> {
        let LoadState::Ready(products) = &self.load else {
            return None;
        };
        let product = products.iter().find(|p| p.id == id)?.clone();

        let form = ProductForm::from_product(&product);
        self.editing = Some(product);
        Some(form)
    }

    /// Leave edit mode without submitting. Returns the blank create form.
    pub fn cancel_edit(&mut self) -> ProductForm {
        self.editing = None;
        ProductForm::default()
    }

    // ---- mutations ---------------------------------------------------

    /// Submit the form: create when not editing, update when editing.
    ///
    /// Re-entrant submissions are rejected with
    /// [`DashboardError::SubmitInFlight`]; the flag stays up through the
    /// refetch that follows a successful mutation. On failure the edit
    /// state is kept so the user can correct and resubmit; the list is not
    /// refetched.
    pub async fn submit(&mut self, form: &ProductForm) -> Result<(), DashboardError> {
        if self.submitting {
            return Err(DashboardError::SubmitInFlight);
        }
        self.submitting = true;

        let payload = form.to_payload();
        let result = match &self.editing {
            Some(editing) => self.api.update_product(editing.id, payload).await,
            None => self.api.create_product(payload).await,
        };

        let outcome = match result {
            Ok(_) => {
                self.editing = None;
                self.refresh().await;
                Ok(())
            }
            Err(err) => Err(DashboardError::Api(err)),
        };

        self.submitting = false;
        outcome
    }

    /// Delete a product and refetch the list.
    ///
    /// Destructive and unprompted — the frontend is expected to have asked
    /// the user for confirmation before calling this. On failure the list
    /// is left as it was.
    pub async fn delete_product(&mut self, id: Uuid) -> Result<(), DashboardError> {
        self.api.delete_product(id).await?;
        self.refresh().await;
        Ok(())
    }

    // ---- accessors ---------------------------------------------------

    /// Current list lifecycle state.
    pub fn state(&self) -> &LoadState {
        &self.load
    }

    /// The canonical product list; empty unless [`LoadState::Ready`].
    pub fn products(&self) -> &[Product] {
        match &self.load {
            LoadState::Ready(products) => products,
            _ => &[],
        }
    }

    /// The rows a frontend should render under the given view controls.
    pub fn visible(&self, view: &ProductView) -> Vec<&Product> {
        view.apply(self.products())
    }

    /// Options for the list's category filter control: `"All"` plus the
    /// categories present in the current list.
    pub fn filter_options(&self) -> Vec<String> {
        projection::category_options(self.products())
    }

    /// The product being edited, if any.
    pub fn editing(&self) -> Option<&Product> {
        self.editing.as_ref()
    }

    /// Whether a submission (including its follow-up refetch) is in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// The durable category options for the product form.
    pub fn categories(&self) -> &CategoryStore {
        &self.categories
    }

    /// Mutable access for adding categories from the form.
    pub fn categories_mut(&mut self) -> &mut CategoryStore {
        &mut self.categories
    }
}
