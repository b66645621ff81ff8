//! Member detail page: one directory record plus a palette accent.

use gloo_console::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use common::model::user::User;

use crate::api::{members as directory, RequestError};
use crate::app::Page;

enum DetailState {
    Loading,
    Loaded { user: User, accent: Option<String> },
    Failed(String),
}

pub enum Msg {
    Loaded(Box<Result<(User, Option<String>), RequestError>>),
}

#[derive(Properties, PartialEq, Clone)]
pub struct MemberDetailProps {
    pub user_id: u64,
    pub on_navigate: Callback<Page>,
}

pub struct MemberDetailPage {
    state: DetailState,
}

impl Component for MemberDetailPage {
    type Message = Msg;
    type Properties = MemberDetailProps;

    fn create(ctx: &Context<Self>) -> Self {
        let user_id = ctx.props().user_id;
        let link = ctx.link().clone();
        spawn_local(async move {
            let result = async {
                let detail = directory::fetch_user(user_id).await?;
                // The accent is decorative; a palette failure only drops it.
                let accent = match directory::fetch_colors().await {
                    Ok(palette) => palette.data.first().map(|c| c.color.clone()),
                    Err(err) => {
                        error!(err.to_string());
                        None
                    }
                };
                Ok((detail.data, accent))
            }
            .await;
            link.send_message(Msg::Loaded(Box::new(result)));
        });

        Self {
            state: DetailState::Loading,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(result) => {
                self.state = match *result {
                    Ok((user, accent)) => DetailState::Loaded { user, accent },
                    Err(err) => {
                        error!(err.to_string());
                        DetailState::Failed("Failed to load member.".to_string())
                    }
                };
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_navigate = ctx.props().on_navigate.clone();
        let back = Callback::from(move |_| on_navigate.emit(Page::Members));

        let body = match &self.state {
            DetailState::Loading => html! { <div class="card skeleton-card detail-card" /> },
            DetailState::Failed(message) => html! {
                <div class="card detail-card">
                    <div class="load-error">{ message }</div>
                    <button class="btn btn-primary" onclick={back.clone()}>{ "Back to Members" }</button>
                </div>
            },
            DetailState::Loaded { user, accent } => {
                let accent = accent.clone().unwrap_or_else(|| "#888888".to_string());
                html! {
                    <div class="card detail-card">
                        <img class="avatar avatar-large" src={user.avatar.clone()} alt={user.first_name.clone()} />
                        <div class="member-name">{ user.full_name() }</div>
                        <div class="member-email">{ user.email.clone() }</div>
                        <span class="accent-chip" style={format!("background:{accent};")}>{ accent.clone() }</span>
                        <button
                            class="btn"
                            style={format!("background:{accent};color:#fff;")}
                            onclick={back}
                        >
                            { "Back to Members" }
                        </button>
                    </div>
                }
            }
        };

        html! { <div class="page detail-page">{ body }</div> }
    }
}
