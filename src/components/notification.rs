//! Transient toast shown once per submission outcome.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

const TOAST_DISMISS_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub body: String,
}

impl Toast {
    pub fn success(title: &str, body: &str) -> Self {
        Self {
            kind: ToastKind::Success,
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    pub fn error(title: &str, body: &str) -> Self {
        Self {
            kind: ToastKind::Error,
            title: title.to_string(),
            body: body.to_string(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub toast: Toast,
    pub on_close: Callback<()>,
}

#[function_component(ToastNotification)]
pub fn toast_notification(props: &ToastProps) -> Html {
    // Auto-dismiss; replacing the toast restarts the countdown.
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(TOAST_DISMISS_MS, move || on_close.emit(()));
                move || drop(timeout)
            },
            props.toast.clone(),
        );
    }

    let dismiss = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let kind_class = match props.toast.kind {
        ToastKind::Success => "toast-success",
        ToastKind::Error => "toast-error",
    };

    html! {
        <div class={classes!("toast", kind_class)} role="status">
            <div class="toast-text">
                <strong class="toast-title">{ &props.toast.title }</strong>
                <span class="toast-body">{ &props.toast.body }</span>
            </div>
            <button class="toast-close" onclick={dismiss} aria-label="Dismiss">{"×"}</button>
            <style>
                {r#"
                    .toast {
                        position: fixed;
                        bottom: 1.5rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        align-items: flex-start;
                        gap: 0.75rem;
                        max-width: 380px;
                        padding: 0.9rem 1.1rem;
                        border-radius: 12px;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.25);
                        color: #fff;
                        z-index: 100;
                        animation: toast-in 0.25s ease-out;
                    }
                    @keyframes toast-in {
                        from { transform: translate(-50%, 1rem); opacity: 0; }
                        to { transform: translate(-50%, 0); opacity: 1; }
                    }
                    .toast-success { background: #16a34a; }
                    .toast-error { background: #dc2626; }
                    .toast-text {
                        display: flex;
                        flex-direction: column;
                        gap: 0.2rem;
                    }
                    .toast-title { font-size: 0.95rem; }
                    .toast-body { font-size: 0.85rem; opacity: 0.9; }
                    .toast-close {
                        background: none;
                        border: none;
                        color: inherit;
                        font-size: 1.1rem;
                        cursor: pointer;
                        padding: 0;
                        line-height: 1;
                    }
                "#}
            </style>
        </div>
    }
}
