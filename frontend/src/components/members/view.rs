//! View rendering for the members page.
//!
//! Layout: header with the create/login/products actions, the member card
//! grid (skeleton placeholders while loading, one blocking message on a
//! failed load), Prev/Next pagination, and the two modals.

use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use common::sync::ListState;

use crate::app::Page;

use super::messages::{CreateField, LoginField, Msg};
use super::state::MembersPage;

pub fn view(component: &MembersPage, ctx: &Context<MembersPage>) -> Html {
    let link = ctx.link();

    html! {
        <div class="page members-page">
            { build_header(ctx) }
            { if component.show_create_modal { build_create_modal(component, link) } else { html! {} } }
            { if component.show_login_modal { build_login_modal(component, link) } else { html! {} } }
            <main>
                { build_member_grid(component, ctx) }
                { build_pagination(component, link) }
            </main>
        </div>
    }
}

fn build_header(ctx: &Context<MembersPage>) -> Html {
    let link = ctx.link();
    let on_navigate = ctx.props().on_navigate.clone();

    html! {
        <header class="page-header">
            <h1>{ "All Members" }</h1>
            <div class="header-actions">
                <button class="btn btn-primary" onclick={link.callback(|_| Msg::OpenCreateModal)}>
                    { "Create New Member" }
                </button>
                <button class="btn btn-green" onclick={link.callback(|_| Msg::OpenLoginModal)}>
                    { "Login" }
                </button>
                <button
                    class="btn btn-purple"
                    onclick={Callback::from(move |_| on_navigate.emit(Page::Products))}
                >
                    { "Products" }
                </button>
            </div>
        </header>
    }
}

fn build_member_grid(component: &MembersPage, ctx: &Context<MembersPage>) -> Html {
    match component.members.state() {
        ListState::Idle | ListState::Loading => html! {
            <div class="card-grid">
                { for (0..6).map(|i| html! { <div key={i} class="card skeleton-card" /> }) }
            </div>
        },
        ListState::Failed(message) => html! {
            <div class="load-error">{ message }</div>
        },
        ListState::Loaded { items, .. } if items.is_empty() => html! {
            <div class="empty-list">{ "No members found." }</div>
        },
        ListState::Loaded { items, .. } => html! {
            <div class="card-grid">
                {
                    for items.iter().enumerate().map(|(idx, user)| {
                        let accent = component.accent(idx).to_string();
                        let on_navigate = ctx.props().on_navigate.clone();
                        let id = user.id;
                        html! {
                            <div key={user.id} class="card member-card">
                                <img class="avatar" src={user.avatar.clone()} alt={user.first_name.clone()} />
                                <div class="member-name">{ user.full_name() }</div>
                                <button
                                    class="btn btn-outline"
                                    style={format!("border-color:{accent};")}
                                    onclick={Callback::from(move |_| on_navigate.emit(Page::MemberDetail(id)))}
                                >
                                    { "Review" }
                                </button>
                            </div>
                        }
                    })
                }
            </div>
        },
    }
}

fn build_pagination(component: &MembersPage, link: &Scope<MembersPage>) -> Html {
    let page = component.members.page();
    let total_pages = component.members.total_pages();

    html! {
        <div class="pagination">
            <button
                class="btn btn-primary"
                disabled={page == 1}
                onclick={link.callback(move |_| Msg::SetPage(page.saturating_sub(1)))}
            >
                { "Prev" }
            </button>
            <span class="page-indicator">{ format!("Page {page} of {total_pages}") }</span>
            <button
                class="btn btn-primary"
                disabled={page == total_pages}
                onclick={link.callback(move |_| Msg::SetPage(page + 1))}
            >
                { "Next" }
            </button>
        </div>
    }
}

fn build_create_modal(component: &MembersPage, link: &Scope<MembersPage>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitCreate
    });

    html! {
        <div class="modal-backdrop">
            <div class="modal">
                <button class="modal-close" onclick={link.callback(|_| Msg::CloseCreateModal)}>
                    { "\u{00d7}" }
                </button>
                <h2>{ "Create New Member" }</h2>
                <form {onsubmit}>
                    { text_input(link, "First Name", "text", component.create_form.first_name.clone(),
                        |value| Msg::UpdateCreateField(CreateField::FirstName, value)) }
                    { text_input(link, "Last Name", "text", component.create_form.last_name.clone(),
                        |value| Msg::UpdateCreateField(CreateField::LastName, value)) }
                    { text_input(link, "Email", "email", component.create_form.email.clone(),
                        |value| Msg::UpdateCreateField(CreateField::Email, value)) }
                    { text_input(link, "Age", "number", component.create_form.age.clone(),
                        |value| Msg::UpdateCreateField(CreateField::Age, value)) }
                    <button class="btn btn-primary" type="submit" disabled={component.creating}>
                        { if component.creating { "Creating..." } else { "Create" } }
                    </button>
                    { status_line(&component.create_status) }
                </form>
            </div>
        </div>
    }
}

fn build_login_modal(component: &MembersPage, link: &Scope<MembersPage>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitLogin
    });

    html! {
        <div class="modal-backdrop">
            <div class="modal">
                <button class="modal-close" onclick={link.callback(|_| Msg::CloseLoginModal)}>
                    { "\u{00d7}" }
                </button>
                <h2>{ "Login" }</h2>
                <form {onsubmit}>
                    { text_input(link, "Email", "email", component.login_form.email.clone(),
                        |value| Msg::UpdateLoginField(LoginField::Email, value)) }
                    { text_input(link, "Password", "password", component.login_form.password.clone(),
                        |value| Msg::UpdateLoginField(LoginField::Password, value)) }
                    <button class="btn btn-green" type="submit" disabled={component.logging_in}>
                        { if component.logging_in { "Logging in..." } else { "Login" } }
                    </button>
                    { status_line(&component.login_status) }
                </form>
            </div>
        </div>
    }
}

/// One controlled form input forwarding edits as messages.
fn text_input(
    link: &Scope<MembersPage>,
    placeholder: &'static str,
    kind: &'static str,
    value: String,
    to_msg: fn(String) -> Msg,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        to_msg(e.target_unchecked_into::<HtmlInputElement>().value())
    });

    html! {
        <input
            class="form-input"
            type={kind}
            placeholder={placeholder}
            value={value}
            {oninput}
            required=true
        />
    }
}

/// Inline status text below the submit button, if any.
fn status_line(status: &Option<String>) -> Html {
    match status {
        Some(text) => html! { <div class="form-status">{ text }</div> },
        None => html! {},
    }
}
