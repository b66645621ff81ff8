//! View rendering for the products page.
//!
//! Layout: header with the add/navigation actions and the favorites-only
//! toggle, the operation status line for delete/favorite failures, the
//! product card grid, the add/edit modals, and the chatbot widget at the
//! bottom.

use num_format::{Locale, ToFormattedString};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use common::model::product::{favorites, Product};
use common::sync::ListState;

use crate::app::Page;
use crate::components::chatbot::ChatbotWidget;

use super::messages::{Field, Msg};
use super::state::{ProductForm, ProductsPage};

pub fn view(component: &ProductsPage, ctx: &Context<ProductsPage>) -> Html {
    let link = ctx.link();

    html! {
        <div class="page products-page">
            { build_header(component, ctx) }
            {
                if component.show_add_modal {
                    build_product_modal(component, link, ModalKind::Add)
                } else {
                    html! {}
                }
            }
            {
                if component.show_edit_modal {
                    build_product_modal(component, link, ModalKind::Edit)
                } else {
                    html! {}
                }
            }
            <main>
                { action_error_line(component) }
                { build_product_grid(component, link) }
                <ChatbotWidget />
            </main>
        </div>
    }
}

fn build_header(component: &ProductsPage, ctx: &Context<ProductsPage>) -> Html {
    let link = ctx.link();
    let on_navigate = ctx.props().on_navigate.clone();
    let filter_label = if component.show_favorites {
        "Show All"
    } else {
        "Favorites Only"
    };

    html! {
        <header class="page-header">
            <h1>{ "Products" }</h1>
            <div class="header-actions">
                <button class="btn btn-outline" onclick={link.callback(|_| Msg::ToggleFavoritesFilter)}>
                    { filter_label }
                </button>
                <button class="btn btn-primary" onclick={link.callback(|_| Msg::OpenAddModal)}>
                    { "Add Product" }
                </button>
                <button
                    class="btn btn-purple"
                    onclick={Callback::from(move |_| on_navigate.emit(Page::Members))}
                >
                    { "Main Page" }
                </button>
            </div>
        </header>
    }
}

/// Inline status for the list-level actions (delete, favorite). The grid
/// below keeps showing the previously loaded collection.
fn action_error_line(component: &ProductsPage) -> Html {
    match component.products.action_error() {
        Some(message) => html! { <div class="action-error">{ message }</div> },
        None => html! {},
    }
}

fn build_product_grid(component: &ProductsPage, link: &Scope<ProductsPage>) -> Html {
    match component.products.state() {
        ListState::Idle | ListState::Loading => html! {
            <div class="card-grid">
                { for (0..4).map(|i| html! { <div key={i} class="card skeleton-card" /> }) }
            </div>
        },
        ListState::Failed(message) => html! {
            <div class="load-error">{ message }</div>
        },
        ListState::Loaded { items, .. } => {
            let shown: Vec<&Product> = if component.show_favorites {
                favorites(items)
            } else {
                items.iter().collect()
            };
            if shown.is_empty() {
                let text = if component.show_favorites {
                    "No favorite products yet."
                } else {
                    "No products found."
                };
                return html! { <div class="empty-list">{ text }</div> };
            }
            html! {
                <div class="card-grid">
                    { for shown.into_iter().map(|product| build_product_card(component, link, product)) }
                </div>
            }
        }
    }
}

fn build_product_card(
    component: &ProductsPage,
    link: &Scope<ProductsPage>,
    product: &Product,
) -> Html {
    let id = product.id;
    let deleting = component.deleting_id == Some(id);
    let star = if product.favorite { "\u{2605}" } else { "\u{2606}" };
    let edit_target = product.clone();

    html! {
        <div key={product.id} class="card product-card">
            <div class="product-row">
                <span class="product-name">{ &product.name }</span>
                <button
                    class={if product.favorite { "star-btn favorite" } else { "star-btn" }}
                    title="Toggle favorite"
                    onclick={link.callback(move |_| Msg::ToggleFavorite(id))}
                >
                    { star }
                </button>
            </div>
            {
                match &product.description {
                    Some(text) => html! { <p class="product-description">{ text }</p> },
                    None => html! {},
                }
            }
            <div class="product-meta">
                <span class="product-price">{ format!("${:.2}", product.price) }</span>
                <span class="product-amount">
                    { format!("{} in stock", u64::from(product.amount).to_formatted_string(&Locale::en)) }
                </span>
            </div>
            <div class="card-actions">
                <button
                    class="btn btn-outline"
                    onclick={link.callback(move |_| Msg::OpenEditModal(edit_target.clone()))}
                >
                    { "Edit" }
                </button>
                <button
                    class="btn btn-danger"
                    disabled={deleting}
                    onclick={link.callback(move |_| Msg::Delete(id))}
                >
                    { if deleting { "Deleting..." } else { "Delete" } }
                </button>
            </div>
        </div>
    }
}

#[derive(Clone, Copy)]
enum ModalKind {
    Add,
    Edit,
}

/// The add and edit modals share one layout; only the title, form source,
/// and messages differ.
fn build_product_modal(component: &ProductsPage, link: &Scope<ProductsPage>, kind: ModalKind) -> Html {
    let (title, form, status, busy) = match kind {
        ModalKind::Add => (
            "Add Product",
            &component.add_form,
            &component.add_status,
            component.adding,
        ),
        ModalKind::Edit => (
            "Edit Product",
            &component.edit_form,
            &component.edit_status,
            component.editing,
        ),
    };
    let submit_label = match kind {
        ModalKind::Add if busy => "Adding...",
        ModalKind::Add => "Add",
        ModalKind::Edit if busy => "Saving...",
        ModalKind::Edit => "Save",
    };
    let onsubmit = link.callback(move |e: SubmitEvent| {
        e.prevent_default();
        match kind {
            ModalKind::Add => Msg::SubmitAdd,
            ModalKind::Edit => Msg::SubmitEdit,
        }
    });
    let onclose = link.callback(move |_| match kind {
        ModalKind::Add => Msg::CloseAddModal,
        ModalKind::Edit => Msg::CloseEditModal,
    });
    let to_msg = move |field: Field, value: String| match kind {
        ModalKind::Add => Msg::UpdateAddField(field, value),
        ModalKind::Edit => Msg::UpdateEditField(field, value),
    };

    html! {
        <div class="modal-backdrop">
            <div class="modal">
                <button class="modal-close" onclick={onclose}>{ "\u{00d7}" }</button>
                <h2>{ title }</h2>
                <form {onsubmit}>
                    { form_input(link, "Name", "text", form.name.clone(), Field::Name, to_msg, true) }
                    { form_input(link, "Amount", "number", form.amount.clone(), Field::Amount, to_msg, true) }
                    { form_input(link, "Price", "number", form.price.clone(), Field::Price, to_msg, true) }
                    { description_input(link, form, to_msg) }
                    <button class="btn btn-primary" type="submit" disabled={busy}>
                        { submit_label }
                    </button>
                    {
                        match status {
                            Some(text) => html! { <div class="form-status">{ text }</div> },
                            None => html! {},
                        }
                    }
                </form>
            </div>
        </div>
    }
}

fn form_input(
    link: &Scope<ProductsPage>,
    placeholder: &'static str,
    kind: &'static str,
    value: String,
    field: Field,
    to_msg: impl Fn(Field, String) -> Msg + 'static,
    required: bool,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        to_msg(field, e.target_unchecked_into::<HtmlInputElement>().value())
    });

    html! {
        <input
            class="form-input"
            type={kind}
            placeholder={placeholder}
            value={value}
            {oninput}
            required={required}
        />
    }
}

fn description_input(
    link: &Scope<ProductsPage>,
    form: &ProductForm,
    to_msg: impl Fn(Field, String) -> Msg + 'static,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        to_msg(
            Field::Description,
            e.target_unchecked_into::<HtmlTextAreaElement>().value(),
        )
    });

    html! {
        <textarea
            class="form-input"
            placeholder="Description (optional)"
            value={form.description.clone()}
            {oninput}
        />
    }
}
