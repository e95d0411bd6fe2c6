//! Floating contact chat.
//!
//! A round launcher button in the corner; opening it shows a chat card
//! with an email + message form relayed through Formspree. The open and
//! submitted flags live in the parent page and arrive as props, so the
//! widget itself only owns the field values and the in-flight guard.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::Toast;
use crate::config;
use crate::storage::{echoed_message, BrowserStore, MessageStore};
use crate::submit::{self, SubmissionOutcome, SubmissionRequest};

/// How long the submitted view stays up before the panel closes itself.
const SUBMITTED_REVERT_MS: u32 = 3_000;

#[derive(Properties, PartialEq)]
pub struct ChatWidgetProps {
    pub open: bool,
    pub submitted: bool,
    pub on_open: Callback<()>,
    pub on_close: Callback<()>,
    /// Emitted once when the relay accepts the message.
    pub on_success: Callback<()>,
    /// Emitted after the fixed delay; closes the panel and clears the
    /// submitted flag together.
    pub on_revert: Callback<()>,
    pub on_toast: Callback<Toast>,
}

#[function_component(ChatWidget)]
pub fn chat_widget(props: &ChatWidgetProps) -> Html {
    let email = use_state(String::new);
    let message = use_state(String::new);
    let sending = use_state(|| false);

    let onsubmit = {
        let email = email.clone();
        let message = message.clone();
        let sending = sending.clone();
        let on_success = props.on_success.clone();
        let on_revert = props.on_revert.clone();
        let on_toast = props.on_toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // One submission at a time; clicks while a request is in
            // flight are dropped, not queued.
            if *sending {
                return;
            }
            let request = SubmissionRequest::chat((*email).clone(), (*message).clone());
            if let Err(err) = submit::validate(&request) {
                on_toast.emit(Toast::error("Hold on", &err.to_string()));
                return;
            }
            BrowserStore.save(request.message.as_deref().unwrap_or_default());
            sending.set(true);
            let sending = sending.clone();
            let on_success = on_success.clone();
            let on_revert = on_revert.clone();
            let on_toast = on_toast.clone();
            spawn_local(async move {
                match submit::send(&request).await {
                    SubmissionOutcome::Success => {
                        sending.set(false);
                        on_toast.emit(Toast::success(
                            "Message sent",
                            "We'll get back to you as soon as we can.",
                        ));
                        on_success.emit(());
                        TimeoutFuture::new(SUBMITTED_REVERT_MS).await;
                        on_revert.emit(());
                    }
                    SubmissionOutcome::Failure(err) => {
                        sending.set(false);
                        on_toast.emit(Toast::error("Message not sent", &err.to_string()));
                    }
                }
            });
        })
    };

    let open_chat = {
        let on_open = props.on_open.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(()))
    };
    let close_chat = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let greeting = || {
        html! {
            <div class="chat-row">
                <div class="chat-avatar">{"⚡"}</div>
                <div class="chat-bubble">{"Hi, how can I help you today?"}</div>
            </div>
        }
    };

    let card = if props.open {
        let inner = if props.submitted {
            html! {
                <>
                    { greeting() }
                    <div class="chat-row chat-row-visitor">
                        <div class="chat-bubble chat-bubble-visitor">
                            { echoed_message(&BrowserStore) }
                        </div>
                    </div>
                    <div class="chat-row">
                        <div class="chat-avatar">{"⚡"}</div>
                        <div class="chat-bubble">{"Message received! We'll get back to you ASAP"}</div>
                    </div>
                </>
            }
        } else {
            html! {
                <>
                    { greeting() }
                    <form onsubmit={onsubmit} class="chat-form">
                        <input
                            type="email"
                            name="email"
                            placeholder="Your email"
                            required=true
                            value={(*email).clone()}
                            onchange={
                                let email = email.clone();
                                move |e: Event| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    email.set(input.value());
                                }
                            }
                        />
                        <div class="chat-compose">
                            <textarea
                                name="message"
                                placeholder="Type your message..."
                                required=true
                                value={(*message).clone()}
                                onchange={
                                    let message = message.clone();
                                    move |e: Event| {
                                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                                        message.set(input.value());
                                    }
                                }
                            />
                            <button type="submit" class="chat-send" disabled={*sending}>
                                {"💬"}
                            </button>
                        </div>
                    </form>
                </>
            }
        };
        html! {
            <div class="chat-card">
                <div class="chat-header">
                    <div class="chat-avatar chat-avatar-large">{"⚡"}</div>
                    <div class="chat-identity">
                        <div class="chat-company">{ config::COMPANY_NAME }</div>
                        <div class="chat-contact">{ config::COMPANY_EMAIL }</div>
                    </div>
                    <button class="chat-close" onclick={close_chat} aria-label="Close chat">
                        {"×"}
                    </button>
                </div>
                <div class="chat-body">{ inner }</div>
            </div>
        }
    } else {
        html! {
            <button class="chat-launcher" onclick={open_chat} aria-label="Open chat">
                {"💬"}
            </button>
        }
    };

    html! {
        <div class="chat-widget">
            { card }
            <style>
                {r#"
                    .chat-widget {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        z-index: 50;
                    }
                    .chat-launcher {
                        width: 56px;
                        height: 56px;
                        border-radius: 50%;
                        border: none;
                        background: var(--primary);
                        color: #fff;
                        font-size: 1.4rem;
                        cursor: pointer;
                        box-shadow: 0 10px 24px rgba(0, 0, 0, 0.25);
                        transition: transform 0.2s ease;
                    }
                    .chat-launcher:hover {
                        transform: scale(1.1);
                    }
                    .chat-card {
                        width: 320px;
                        max-width: calc(100vw - 3rem);
                        background: #0b1120;
                        color: #fff;
                        border-radius: 16px;
                        border: 1px solid var(--border);
                        box-shadow: 0 16px 40px rgba(0, 0, 0, 0.35);
                        overflow: hidden;
                    }
                    .chat-header {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 1rem;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                    }
                    .chat-identity {
                        flex: 1;
                    }
                    .chat-company {
                        font-weight: 600;
                    }
                    .chat-contact {
                        font-size: 0.8rem;
                        color: #9ca3af;
                    }
                    .chat-close {
                        background: none;
                        border: none;
                        color: #9ca3af;
                        font-size: 1.2rem;
                        cursor: pointer;
                    }
                    .chat-close:hover {
                        color: #fff;
                    }
                    .chat-body {
                        padding: 1rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                    }
                    .chat-row {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.5rem;
                    }
                    .chat-row-visitor {
                        justify-content: flex-end;
                    }
                    .chat-avatar {
                        background: rgba(37, 99, 235, 0.15);
                        border-radius: 50%;
                        width: 28px;
                        height: 28px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 0.9rem;
                        flex-shrink: 0;
                    }
                    .chat-avatar-large {
                        width: 40px;
                        height: 40px;
                        font-size: 1.2rem;
                    }
                    .chat-bubble {
                        background: #1f2937;
                        border-radius: 16px;
                        border-top-left-radius: 4px;
                        padding: 0.6rem 0.85rem;
                        max-width: 80%;
                        font-size: 0.9rem;
                    }
                    .chat-bubble-visitor {
                        background: var(--primary);
                        border-radius: 16px;
                        border-top-right-radius: 4px;
                    }
                    .chat-form {
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                    }
                    .chat-form input,
                    .chat-form textarea {
                        background: #1f2937;
                        border: 1px solid #374151;
                        border-radius: 8px;
                        color: #fff;
                        padding: 0.6rem 0.75rem;
                        font-size: 0.9rem;
                        width: 100%;
                        box-sizing: border-box;
                        font-family: inherit;
                    }
                    .chat-form textarea {
                        min-height: 80px;
                        resize: vertical;
                    }
                    .chat-compose {
                        display: flex;
                        align-items: flex-end;
                        gap: 0.5rem;
                    }
                    .chat-send {
                        background: var(--primary);
                        border: none;
                        border-radius: 8px;
                        width: 40px;
                        height: 40px;
                        font-size: 1rem;
                        cursor: pointer;
                        flex-shrink: 0;
                    }
                    .chat-send:disabled {
                        opacity: 0.6;
                        cursor: default;
                    }
                "#}
            </style>
        </div>
    }
}
