use common::model::color::Color;
use common::model::user::User;
use common::requests::LoginResponse;
use common::sync::LoadTicket;

use crate::api::RequestError;

/// Fields of the create-member form.
#[derive(Clone, Copy)]
pub enum CreateField {
    FirstName,
    LastName,
    Email,
    Age,
}

/// Fields of the login form.
#[derive(Clone, Copy)]
pub enum LoginField {
    Email,
    Password,
}

pub enum Msg {
    /// Start loading the given page (members plus the color palette).
    Load(u32),
    /// A load settled; the ticket identifies which one.
    LoadFinished(LoadTicket, Result<(Vec<User>, u32, Vec<Color>), RequestError>),
    SetPage(u32),

    OpenCreateModal,
    CloseCreateModal,
    UpdateCreateField(CreateField, String),
    SubmitCreate,
    CreateFinished(Result<(), RequestError>),
    /// Fired after the success delay: close and clear the create modal.
    DismissCreateModal,

    OpenLoginModal,
    CloseLoginModal,
    UpdateLoginField(LoginField, String),
    SubmitLogin,
    LoginFinished(Result<LoginResponse, RequestError>),
    DismissLoginModal,
}
