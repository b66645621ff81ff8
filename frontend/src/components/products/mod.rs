//! Products page: unpaginated product catalog with add/edit/delete and
//! favorite actions, a favorites-only derived view, and the embedded
//! chatbot widget.
//!
//! Every mutation goes through the `ListSync` controller's
//! re-fetch-after-write rule; the list shown after a successful write is
//! always what the backend returned, never a local patch.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ProductsProps;
pub use state::ProductsPage;

impl Component for ProductsPage {
    type Message = Msg;
    type Properties = ProductsProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ProductsPage::new()
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
            ctx.link().send_message(Msg::Load);
        }
    }
}
