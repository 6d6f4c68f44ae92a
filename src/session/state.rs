use crate::api::OrderApi;
use crate::error::{OrderError, Result};
use crate::models::{init_extras, Extra, MenuItem, OrderPayload, RawMenuItem};
use crate::pricing::{self, format_value, CurrencyFormatter};

/// Load outcome for the screen.
#[derive(Debug, Clone)]
pub enum LoadState {
    Loading,
    Loaded(MenuItem),
    Failed(String),
}

/// Owns all working state for one order-customization session: the loaded
/// menu item, the extras ledger, the base item quantity, the favorite flag,
/// and the cached display total.
///
/// State lives only as long as the session; nothing is persisted.
pub struct OrderSession {
    load: LoadState,
    extras: Vec<Extra>,
    food_quantity: u32,
    favorite: bool,
    format: CurrencyFormatter,
    total: String,
}

impl OrderSession {
    /// Create an empty session in the loading state.
    pub fn new() -> Self {
        Self::with_formatter(format_value)
    }

    /// Create a session with a specific currency formatter.
    pub fn with_formatter(format: CurrencyFormatter) -> Self {
        let mut session = Self {
            load: LoadState::Loading,
            extras: Vec::new(),
            food_quantity: 1,
            favorite: false,
            format,
            total: String::new(),
        };
        session.refresh_total();
        session
    }

    /// Fetch a menu item and apply the outcome.
    pub fn load(&mut self, api: &dyn OrderApi, id: u64) {
        let result = api.fetch_menu_item(id);
        self.apply_load(result);
    }

    /// Apply a fetch outcome: normalize the item and initialize the extras
    /// ledger, or record the failure. Quantities in the wire payload are
    /// discarded; every extra starts at zero.
    pub fn apply_load(&mut self, result: Result<RawMenuItem>) {
        match result {
            Ok(raw) => {
                self.extras = init_extras(&raw.extras);
                self.load = LoadState::Loaded(MenuItem::from_raw(&raw, self.format));
            }
            Err(e) => {
                self.extras.clear();
                self.load = LoadState::Failed(e.to_string());
            }
        }
        self.refresh_total();
    }

    /// Add one unit of an extra. Unknown ids are a no-op.
    pub fn increment_extra(&mut self, id: u64) {
        if let Some(extra) = self.extras.iter_mut().find(|e| e.id == id) {
            extra.quantity += 1;
        }
        self.refresh_total();
    }

    /// Remove one unit of an extra. Unknown ids and zero quantities are
    /// no-ops.
    pub fn decrement_extra(&mut self, id: u64) {
        if let Some(extra) = self.extras.iter_mut().find(|e| e.id == id) {
            if extra.quantity > 0 {
                extra.quantity -= 1;
            }
        }
        self.refresh_total();
    }

    /// Increase the base item quantity. No upper bound.
    pub fn increment_food(&mut self) {
        self.food_quantity += 1;
        self.refresh_total();
    }

    /// Decrease the base item quantity, never below 1.
    pub fn decrement_food(&mut self) {
        if self.food_quantity > 1 {
            self.food_quantity -= 1;
        }
        self.refresh_total();
    }

    /// Flip the favorite flag. Does not affect pricing.
    pub fn toggle_favorite(&mut self) {
        self.favorite = !self.favorite;
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    /// The loaded menu item, if the fetch has resolved successfully.
    pub fn menu_item(&self) -> Option<&MenuItem> {
        match &self.load {
            LoadState::Loaded(item) => Some(item),
            _ => None,
        }
    }

    /// The extras ledger, in load order.
    pub fn extras(&self) -> &[Extra] {
        &self.extras
    }

    /// Current quantity of one extra by id.
    pub fn extra_quantity(&self, id: u64) -> Option<u32> {
        self.extras.iter().find(|e| e.id == id).map(|e| e.quantity)
    }

    pub fn food_quantity(&self) -> u32 {
        self.food_quantity
    }

    pub fn is_favorite(&self) -> bool {
        self.favorite
    }

    /// The formatted running total, kept current by every mutation.
    pub fn formatted_total(&self) -> &str {
        &self.total
    }

    /// Assemble the submission payload from current state.
    ///
    /// The `price` field is `base_price * food_quantity`; extras contribute
    /// their quantities as line items but not to this figure.
    pub fn build_payload(&self) -> Result<OrderPayload> {
        let item = self.menu_item().ok_or(OrderError::NotLoaded)?;

        Ok(OrderPayload {
            product_id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
            price: pricing::order_price(item.price, self.food_quantity),
            category: item.category,
            thumbnail_url: item.image_url.clone(),
            extras: self.extras.clone(),
        })
    }

    /// Submit the order once. Leaves all session state untouched whether
    /// the request succeeds or fails; retry is a fresh user action.
    pub fn finish_order(&self, api: &dyn OrderApi) -> Result<()> {
        let payload = self.build_payload()?;
        api.create_order(&payload)
    }

    /// Recompute the cached total from the three pricing inputs. An
    /// unresolved load contributes a zero base price.
    fn refresh_total(&mut self) {
        let base_price = self.menu_item().map(|item| item.price).unwrap_or(0.0);
        let total = pricing::cart_total(base_price, &self.extras, self.food_quantity);
        self.total = (self.format)(total);
    }
}

impl Default for OrderSession {
    fn default() -> Self {
        Self::new()
    }
}
