//! Application shell: a hand-rolled page switch plus the signed-in badge.
//!
//! There are only three views, so navigation is a plain enum passed down as
//! a callback rather than a router. The stored session token is read back
//! once here when the app mounts, so a reload keeps the signed-in state.

use yew::{html, Component, Context, Html};

use crate::api::session;
use crate::components::member_detail::MemberDetailPage;
use crate::components::members::MembersPage;
use crate::components::products::ProductsPage;

/// The view currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Members,
    MemberDetail(u64),
    Products,
}

pub enum Msg {
    Navigate(Page),
    LoggedIn,
}

pub struct App {
    page: Page,
    authenticated: bool,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            page: Page::Members,
            authenticated: session::load_token().is_some(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(page) => {
                if self.page == page {
                    false
                } else {
                    self.page = page;
                    true
                }
            }
            Msg::LoggedIn => {
                self.authenticated = true;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_navigate = link.callback(Msg::Navigate);

        html! {
            <div class="app-root">
                {
                    if self.authenticated {
                        html! { <div class="session-badge">{ "Signed in" }</div> }
                    } else {
                        html! {}
                    }
                }
                {
                    match self.page {
                        Page::Members => html! {
                            <MembersPage
                                on_navigate={on_navigate}
                                on_login={link.callback(|_| Msg::LoggedIn)}
                            />
                        },
                        Page::MemberDetail(id) => html! {
                            <MemberDetailPage user_id={id} on_navigate={on_navigate} />
                        },
                        Page::Products => html! {
                            <ProductsPage on_navigate={on_navigate} />
                        },
                    }
                }
            </div>
        }
    }
}
