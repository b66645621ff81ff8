//! Update function for the members page.
//!
//! Elm-style: receives the current state, the context, and a `Msg`, mutates
//! the state, and returns whether the view must re-render. All network work
//! happens in futures spawned here; their results come back as messages.
//!
//! The member collection itself only changes through the `ListSync`
//! controller: loads go through tickets so stale responses are dropped, and
//! a successful create re-fetches the current page instead of patching the
//! list locally.

use gloo_console::error;
use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::requests::{CreateUserRequest, LoginRequest};
use common::sync::LoadTicket;

use crate::api::{members as directory, session, RequestError};

use super::messages::{CreateField, LoginField, Msg};
use super::state::MembersPage;

/// Blocking message shown when the initial page load fails.
const LOAD_ERROR: &str = "Failed to load members.";

/// How long a success message stays visible before the modal closes.
const MODAL_DISMISS_MS: u32 = 1200;

pub fn update(component: &mut MembersPage, ctx: &Context<MembersPage>, msg: Msg) -> bool {
    match msg {
        Msg::Load(page) => {
            let ticket = component.members.begin_load(page);
            spawn_page_load(ctx, ticket);
            true
        }
        Msg::LoadFinished(ticket, result) => match result {
            Ok((users, total_pages, colors)) => {
                if component.members.finish_load(ticket, Ok((users, total_pages))) {
                    component.colors = colors;
                    true
                } else {
                    false
                }
            }
            Err(err) => {
                error!(err.to_string());
                component
                    .members
                    .finish_load(ticket, Err(LOAD_ERROR.to_string()))
            }
        },
        Msg::SetPage(page) => {
            if let Some(ticket) = component.members.request_page(page) {
                spawn_page_load(ctx, ticket);
                true
            } else {
                false
            }
        }

        Msg::OpenCreateModal => {
            component.show_create_modal = true;
            true
        }
        Msg::CloseCreateModal => {
            component.show_create_modal = false;
            true
        }
        Msg::UpdateCreateField(field, value) => {
            match field {
                CreateField::FirstName => component.create_form.first_name = value,
                CreateField::LastName => component.create_form.last_name = value,
                CreateField::Email => component.create_form.email = value,
                CreateField::Age => component.create_form.age = value,
            }
            true
        }
        Msg::SubmitCreate => {
            if component.creating {
                return false;
            }
            component.creating = true;
            component.create_status = None;
            component.members.mutation_begun();

            let payload = CreateUserRequest {
                name: component.create_form.first_name.clone(),
                surname: component.create_form.last_name.clone(),
                email: component.create_form.email.clone(),
                age: component.create_form.age.clone(),
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = directory::create_user(&payload).await;
                link.send_message(Msg::CreateFinished(result));
            });
            true
        }
        Msg::CreateFinished(result) => {
            component.creating = false;
            match result {
                Ok(()) => {
                    component.create_status = Some("Member created successfully!".to_string());
                    let ticket = component.members.mutation_succeeded();
                    spawn_page_load(ctx, ticket);
                    dismiss_later(ctx, Msg::DismissCreateModal);
                }
                Err(err) => {
                    error!(err.to_string());
                    component.create_status = Some("Failed to create member.".to_string());
                }
            }
            true
        }
        Msg::DismissCreateModal => {
            component.show_create_modal = false;
            component.create_form = Default::default();
            component.create_status = None;
            true
        }

        Msg::OpenLoginModal => {
            component.show_login_modal = true;
            true
        }
        Msg::CloseLoginModal => {
            component.show_login_modal = false;
            true
        }
        Msg::UpdateLoginField(field, value) => {
            match field {
                LoginField::Email => component.login_form.email = value,
                LoginField::Password => component.login_form.password = value,
            }
            true
        }
        Msg::SubmitLogin => {
            if component.logging_in {
                return false;
            }
            component.logging_in = true;
            component.login_status = None;

            let payload = LoginRequest {
                email: component.login_form.email.clone(),
                password: component.login_form.password.clone(),
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = directory::login(&payload).await;
                link.send_message(Msg::LoginFinished(result));
            });
            true
        }
        Msg::LoginFinished(result) => {
            component.logging_in = false;
            match result {
                Ok(response) => match response.token {
                    Some(token) => {
                        session::store_token(&token);
                        component.login_status = Some("Login successful!".to_string());
                        ctx.props().on_login.emit(());
                        dismiss_later(ctx, Msg::DismissLoginModal);
                    }
                    None => {
                        component.login_status =
                            Some(response.error.unwrap_or_else(|| "Login failed.".to_string()));
                    }
                },
                Err(err) => {
                    error!(err.to_string());
                    component.login_status = Some("Login failed.".to_string());
                }
            }
            true
        }
        Msg::DismissLoginModal => {
            component.show_login_modal = false;
            component.login_form = Default::default();
            component.login_status = None;
            true
        }
    }
}

/// Fetches the ticket's page of members plus the color palette in one task
/// and reports back through `Msg::LoadFinished`. Both requests must succeed;
/// either failure becomes the single blocking load error.
fn spawn_page_load(ctx: &Context<MembersPage>, ticket: LoadTicket) {
    let link = ctx.link().clone();
    spawn_local(async move {
        let result: Result<_, RequestError> = async {
            let users = directory::list_users(ticket.page()).await?;
            let colors = directory::fetch_colors().await?;
            Ok((users.data, users.total_pages, colors.data))
        }
        .await;
        link.send_message(Msg::LoadFinished(ticket, result));
    });
}

/// Sends `msg` after the success-message delay.
fn dismiss_later(ctx: &Context<MembersPage>, msg: Msg) {
    let link = ctx.link().clone();
    spawn_local(async move {
        TimeoutFuture::new(MODAL_DISMISS_MS).await;
        link.send_message(msg);
    });
}
