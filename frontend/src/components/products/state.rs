//! State for the products page.

use common::model::product::Product;
use common::requests::ProductPayload;
use common::sync::ListSync;

/// Raw form input for the add and edit modals. Amount and price stay
/// strings until submission; `parse` rejects anything the backend would
/// not accept as numbers.
#[derive(Default, Clone)]
pub struct ProductForm {
    pub name: String,
    pub amount: String,
    pub price: String,
    pub description: String,
}

impl ProductForm {
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            amount: product.amount.to_string(),
            price: product.price.to_string(),
            description: product.description.clone().unwrap_or_default(),
        }
    }

    /// Builds the request payload, or `None` when amount/price do not
    /// parse. An empty description is omitted rather than sent as `""`.
    pub fn parse(&self) -> Option<ProductPayload> {
        let amount = self.amount.trim().parse().ok()?;
        let price = self.price.trim().parse().ok()?;
        let description = match self.description.trim() {
            "" => None,
            text => Some(text.to_string()),
        };
        Some(ProductPayload {
            name: self.name.clone(),
            amount,
            price,
            description,
        })
    }
}

/// The products page: the unpaginated product collection, the favorites
/// filter, the add/edit modals, and the per-row delete indicator.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct ProductsPage {
    pub products: ListSync<Product>,
    /// Derived-view toggle; flipping it never touches the network.
    pub show_favorites: bool,

    pub show_add_modal: bool,
    pub add_form: ProductForm,
    pub add_status: Option<String>,
    pub adding: bool,

    pub show_edit_modal: bool,
    /// Id of the product being edited while the edit modal is open.
    pub edit_id: u64,
    pub edit_form: ProductForm,
    pub edit_status: Option<String>,
    pub editing: bool,

    /// Id of the product whose delete is in flight, for the row spinner.
    pub deleting_id: Option<u64>,

    /// Guard to run the first-render load exactly once.
    pub loaded: bool,
}

impl ProductsPage {
    pub fn new() -> Self {
        Self {
            products: ListSync::new(),
            show_favorites: false,
            show_add_modal: false,
            add_form: ProductForm::default(),
            add_status: None,
            adding: false,
            show_edit_modal: false,
            edit_id: 0,
            edit_form: ProductForm::default(),
            edit_status: None,
            editing: false,
            deleting_id: None,
            loaded: false,
        }
    }
}
