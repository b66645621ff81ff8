use yew::prelude::*;

use crate::app::Page;

#[derive(Properties, PartialEq, Clone)]
pub struct MembersProps {
    /// Switches the app to another page (products, member detail).
    pub on_navigate: Callback<Page>,
    /// Notifies the shell that a login succeeded so it can show the badge.
    pub on_login: Callback<()>,
}
