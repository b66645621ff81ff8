use yew::prelude::*;

use crate::app::Page;

#[derive(Properties, PartialEq, Clone)]
pub struct ProductsProps {
    /// Switches the app back to the members page.
    pub on_navigate: Callback<Page>,
}
