//! Update function for the products page.
//!
//! The collection only changes through the `ListSync` controller. The
//! products backend is unpaginated, so every load targets page 1 and the
//! page count stays at 1; the controller still provides the ticket-based
//! stale-response guard and the re-fetch-after-write rule.
//!
//! Failure surfaces are operation-scoped: the modals keep their own inline
//! status text, while delete/favorite failures land in the controller's
//! action error shown next to the list. A failed mutation never discards
//! the loaded collection.

use gloo_console::error;
use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::sync::LoadTicket;

use super::messages::{Field, Msg};
use super::state::{ProductForm, ProductsPage};
use crate::api::shop;

/// Blocking message shown when the initial list load fails.
const LOAD_ERROR: &str = "Failed to load products.";

/// Status shown when amount or price does not parse as a number.
const INVALID_FORM: &str = "Enter a valid amount and price.";

/// How long a success message stays visible before the modal closes.
const MODAL_DISMISS_MS: u32 = 1000;

pub fn update(component: &mut ProductsPage, ctx: &Context<ProductsPage>, msg: Msg) -> bool {
    match msg {
        Msg::Load => {
            let ticket = component.products.begin_load(1);
            spawn_list_load(ctx, ticket);
            true
        }
        Msg::LoadFinished(ticket, result) => {
            let result = match result {
                Ok(items) => Ok((items, 1)),
                Err(err) => {
                    error!(err.to_string());
                    Err(LOAD_ERROR.to_string())
                }
            };
            component.products.finish_load(ticket, result)
        }
        Msg::ToggleFavoritesFilter => {
            // Pure derived view; the filtered list is recomputed in `view`.
            component.show_favorites = !component.show_favorites;
            true
        }

        Msg::OpenAddModal => {
            component.show_add_modal = true;
            true
        }
        Msg::CloseAddModal => {
            component.show_add_modal = false;
            true
        }
        Msg::UpdateAddField(field, value) => {
            set_field(&mut component.add_form, field, value);
            true
        }
        Msg::SubmitAdd => {
            if component.adding {
                return false;
            }
            let Some(payload) = component.add_form.parse() else {
                component.add_status = Some(INVALID_FORM.to_string());
                return true;
            };
            component.adding = true;
            component.add_status = None;
            component.products.mutation_begun();

            let link = ctx.link().clone();
            spawn_local(async move {
                let result = shop::add_product(&payload).await;
                link.send_message(Msg::AddFinished(result));
            });
            true
        }
        Msg::AddFinished(result) => {
            component.adding = false;
            match result {
                Ok(_created) => {
                    component.add_status = Some("Product added!".to_string());
                    refetch(component, ctx);
                    dismiss_later(ctx, Msg::DismissAddModal);
                }
                Err(err) => {
                    error!(err.to_string());
                    component.add_status = Some("Failed to add product.".to_string());
                }
            }
            true
        }
        Msg::DismissAddModal => {
            component.show_add_modal = false;
            component.add_form = ProductForm::default();
            component.add_status = None;
            true
        }

        Msg::OpenEditModal(product) => {
            component.edit_id = product.id;
            component.edit_form = ProductForm::from_product(&product);
            component.edit_status = None;
            component.show_edit_modal = true;
            true
        }
        Msg::CloseEditModal => {
            component.show_edit_modal = false;
            true
        }
        Msg::UpdateEditField(field, value) => {
            set_field(&mut component.edit_form, field, value);
            true
        }
        Msg::SubmitEdit => {
            if component.editing {
                return false;
            }
            let Some(payload) = component.edit_form.parse() else {
                component.edit_status = Some(INVALID_FORM.to_string());
                return true;
            };
            component.editing = true;
            component.edit_status = None;
            component.products.mutation_begun();

            let id = component.edit_id;
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = shop::update_product(id, &payload).await;
                link.send_message(Msg::EditFinished(result));
            });
            true
        }
        Msg::EditFinished(result) => {
            component.editing = false;
            match result {
                Ok(_updated) => {
                    component.edit_status = Some("Product updated!".to_string());
                    refetch(component, ctx);
                    dismiss_later(ctx, Msg::DismissEditModal);
                }
                Err(err) => {
                    error!(err.to_string());
                    component.edit_status = Some("Failed to update product.".to_string());
                }
            }
            true
        }
        Msg::DismissEditModal => {
            component.show_edit_modal = false;
            component.edit_status = None;
            true
        }

        Msg::Delete(id) => {
            if component.deleting_id.is_some() {
                return false;
            }
            component.deleting_id = Some(id);
            component.products.mutation_begun();

            let link = ctx.link().clone();
            spawn_local(async move {
                let result = shop::delete_product(id).await;
                link.send_message(Msg::DeleteFinished(result));
            });
            true
        }
        Msg::DeleteFinished(result) => {
            component.deleting_id = None;
            match result {
                Ok(()) => refetch(component, ctx),
                Err(err) => {
                    error!(err.to_string());
                    component
                        .products
                        .mutation_failed("Failed to delete product.");
                }
            }
            true
        }

        Msg::ToggleFavorite(id) => {
            component.products.mutation_begun();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = shop::favorite_product(id).await;
                link.send_message(Msg::FavoriteFinished(result));
            });
            true
        }
        Msg::FavoriteFinished(result) => {
            match result {
                Ok(()) => refetch(component, ctx),
                Err(err) => {
                    error!(err.to_string());
                    component
                        .products
                        .mutation_failed("Failed to favorite product.");
                }
            }
            true
        }
    }
}

fn set_field(form: &mut ProductForm, field: Field, value: String) {
    match field {
        Field::Name => form.name = value,
        Field::Amount => form.amount = value,
        Field::Price => form.price = value,
        Field::Description => form.description = value,
    }
}

/// Re-fetch-after-write: puts the controller back into `Loading` and
/// re-issues the list request.
fn refetch(component: &mut ProductsPage, ctx: &Context<ProductsPage>) {
    let ticket = component.products.mutation_succeeded();
    spawn_list_load(ctx, ticket);
}

/// Sends `msg` after the success-message delay.
fn dismiss_later(ctx: &Context<ProductsPage>, msg: Msg) {
    let link = ctx.link().clone();
    spawn_local(async move {
        TimeoutFuture::new(MODAL_DISMISS_MS).await;
        link.send_message(msg);
    });
}

fn spawn_list_load(ctx: &Context<ProductsPage>, ticket: LoadTicket) {
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = shop::list_products().await;
        link.send_message(Msg::LoadFinished(ticket, result));
    });
}
