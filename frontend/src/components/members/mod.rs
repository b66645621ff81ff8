//! Members list page: paginated directory listing with create and login
//! modals.
//!
//! The collection is owned by a `ListSync` controller; this module only
//! wires the Yew `Component` lifecycle to the `update`/`view` submodules
//! and kicks off the first load when the page mounts.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::MembersProps;
pub use state::MembersPage;

impl Component for MembersPage {
    type Message = Msg;
    type Properties = MembersProps;

    fn create(_ctx: &Context<Self>) -> Self {
        MembersPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::Load(1));
        }
    }
}
