//! Chatbot widget embedded on the products page.
//!
//! The transcript lives in `common::chat::ChatSession`: the user entry is
//! appended optimistically before the request goes out, and every send
//! settles with exactly one bot entry (the reply or the fallback text).

use gloo_console::error;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use common::chat::{ChatSession, Sender};
use common::requests::ChatResponse;

use crate::api::{shop, RequestError};

pub enum Msg {
    UpdateInput(String),
    Send,
    Replied(Result<ChatResponse, RequestError>),
}

pub struct ChatbotWidget {
    session: ChatSession,
    input: String,
}

impl Component for ChatbotWidget {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            session: ChatSession::new(),
            input: String::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateInput(value) => {
                self.input = value;
                true
            }
            Msg::Send => match self.session.send(&self.input) {
                Some(message) => {
                    self.input.clear();
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let result = shop::chatbot_ask(message).await;
                        link.send_message(Msg::Replied(result));
                    });
                    true
                }
                None => false,
            },
            Msg::Replied(result) => {
                match result {
                    Ok(reply) => self.session.receive(Some(reply.response)),
                    Err(err) => {
                        error!(err.to_string());
                        self.session.receive(None);
                    }
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Send
        });
        let oninput = link.callback(|e: InputEvent| {
            Msg::UpdateInput(e.target_unchecked_into::<HtmlInputElement>().value())
        });

        html! {
            <div class="chatbot">
                <h2>{ "Product Assistant" }</h2>
                <div class="chat-history">
                    {
                        for self.session.entries().iter().enumerate().map(|(idx, entry)| {
                            let class = match entry.sender {
                                Sender::User => "chat-entry chat-user",
                                Sender::Bot => "chat-entry chat-bot",
                            };
                            html! { <div key={idx} class={class}>{ &entry.text }</div> }
                        })
                    }
                    {
                        if self.session.is_pending() {
                            html! { <div class="chat-entry chat-bot chat-pending">{ "..." }</div> }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <form class="chat-input-row" {onsubmit}>
                    <input
                        class="form-input"
                        placeholder="Ask about our products..."
                        value={self.input.clone()}
                        {oninput}
                        disabled={self.session.is_pending()}
                    />
                    <button
                        class="btn btn-primary"
                        type="submit"
                        disabled={self.session.is_pending()}
                    >
                        { "Send" }
                    </button>
                </form>
            </div>
        }
    }
}
