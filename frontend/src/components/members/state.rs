//! State for the members list page.

use common::model::color::Color;
use common::model::user::User;
use common::sync::ListSync;

/// Create-member form fields, kept as the raw input strings.
#[derive(Default, Clone)]
pub struct CreateForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: String,
}

/// Login form fields.
#[derive(Default, Clone)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// The members page: the paginated member collection plus the two modals.
///
/// `members` is the synchronization controller owning the collection,
/// pagination cursor, and loading/error state. `colors` is the decorative
/// palette fetched alongside each page; it only tints the cards.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct MembersPage {
    pub members: ListSync<User>,
    pub colors: Vec<Color>,

    pub show_create_modal: bool,
    pub create_form: CreateForm,
    pub create_status: Option<String>,
    pub creating: bool,

    pub show_login_modal: bool,
    pub login_form: LoginForm,
    pub login_status: Option<String>,
    pub logging_in: bool,

    /// Guard to run the first-render load exactly once.
    pub loaded: bool,
}

impl MembersPage {
    pub fn new() -> Self {
        Self {
            members: ListSync::new(),
            colors: Vec::new(),
            show_create_modal: false,
            create_form: CreateForm::default(),
            create_status: None,
            creating: false,
            show_login_modal: false,
            login_form: LoginForm::default(),
            login_status: None,
            logging_in: false,
            loaded: false,
        }
    }

    /// Card accent for the member at `index`, cycling through the palette.
    pub fn accent(&self, index: usize) -> &str {
        if self.colors.is_empty() {
            "#3b82f6"
        } else {
            &self.colors[index % self.colors.len()].color
        }
    }
}
