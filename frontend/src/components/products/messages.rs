use common::model::product::Product;
use common::sync::LoadTicket;

use crate::api::RequestError;

/// Fields shared by the add and edit forms.
#[derive(Clone, Copy)]
pub enum Field {
    Name,
    Amount,
    Price,
    Description,
}

pub enum Msg {
    Load,
    LoadFinished(LoadTicket, Result<Vec<Product>, RequestError>),
    ToggleFavoritesFilter,

    OpenAddModal,
    CloseAddModal,
    UpdateAddField(Field, String),
    SubmitAdd,
    AddFinished(Result<Product, RequestError>),
    DismissAddModal,

    OpenEditModal(Product),
    CloseEditModal,
    UpdateEditField(Field, String),
    SubmitEdit,
    EditFinished(Result<Product, RequestError>),
    DismissEditModal,

    Delete(u64),
    DeleteFinished(Result<(), RequestError>),

    ToggleFavorite(u64),
    FavoriteFinished(Result<(), RequestError>),
}
