use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::chat_widget::ChatWidget;
use crate::components::notification::{Toast, ToastNotification};
use crate::components::tab_section::TabSection;
use crate::components::wavy_background::WavyBackground;
use crate::config;
use crate::submit::{self, SubmissionOutcome, SubmissionRequest};

/// The header is fixed, so in-page scrolling stops short of the target.
const HEADER_OFFSET_PX: f64 = 80.0;

fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(element) = document.get_element_by_id(id) else {
        return;
    };
    let top = element.get_bounding_client_rect().top()
        + window.page_y_offset().unwrap_or(0.0)
        - HEADER_OFFSET_PX;
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

fn document_root() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.document_element()
}

#[function_component(Home)]
pub fn home() -> Html {
    let dark_mode = use_state(|| false);
    let chat_open = use_state(|| false);
    let chat_submitted = use_state(|| false);
    let newsletter_email = use_state(String::new);
    let subscribing = use_state(|| false);
    let toast = use_state(|| None::<Toast>);

    // Adopt the OS color scheme once on mount.
    {
        let dark_mode = dark_mode.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    if let Ok(Some(media)) = window.match_media("(prefers-color-scheme: dark)") {
                        if media.matches() {
                            dark_mode.set(true);
                            if let Some(root) = document_root() {
                                let _ = root.class_list().add_1("dark");
                            }
                        }
                    }
                }
                || ()
            },
            (),
        );
    }

    let toggle_dark_mode = {
        let dark_mode = dark_mode.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(root) = document_root() {
                let _ = root.class_list().toggle("dark");
            }
            dark_mode.set(!*dark_mode);
        })
    };

    let on_toast = {
        let toast = toast.clone();
        Callback::from(move |t: Toast| toast.set(Some(t)))
    };

    let newsletter_submit = {
        let newsletter_email = newsletter_email.clone();
        let subscribing = subscribing.clone();
        let toast = toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *subscribing {
                return;
            }
            let request = SubmissionRequest::newsletter((*newsletter_email).clone());
            if let Err(err) = submit::validate(&request) {
                toast.set(Some(Toast::error("Hold on", &err.to_string())));
                return;
            }
            subscribing.set(true);
            let newsletter_email = newsletter_email.clone();
            let subscribing = subscribing.clone();
            let toast = toast.clone();
            spawn_local(async move {
                match submit::send(&request).await {
                    SubmissionOutcome::Success => {
                        toast.set(Some(Toast::success(
                            "Subscribed",
                            "Thanks! You'll hear from us soon.",
                        )));
                        newsletter_email.set(String::new());
                    }
                    SubmissionOutcome::Failure(err) => {
                        toast.set(Some(Toast::error("Subscription failed", &err.to_string())));
                    }
                }
                subscribing.set(false);
            });
        })
    };

    let on_chat_open = {
        let chat_open = chat_open.clone();
        Callback::from(move |_| chat_open.set(true))
    };
    let on_chat_close = {
        let chat_open = chat_open.clone();
        Callback::from(move |_| chat_open.set(false))
    };
    let on_chat_success = {
        let chat_submitted = chat_submitted.clone();
        Callback::from(move |_| chat_submitted.set(true))
    };
    let on_chat_revert = {
        let chat_open = chat_open.clone();
        let chat_submitted = chat_submitted.clone();
        Callback::from(move |_| {
            chat_open.set(false);
            chat_submitted.set(false);
        })
    };

    let nav_button = |label: &'static str, target: &'static str| {
        html! {
            <button
                class="nav-link"
                onclick={Callback::from(move |_: MouseEvent| scroll_to_section(target))}
            >
                { label }
            </button>
        }
    };

    html! {
        <div class="home-page">
            <header class="site-header">
                <div class="header-inner">
                    <a class="header-logo" href="#" aria-label={config::COMPANY_NAME}>
                        {"⚡"}
                    </a>
                    <div class="header-tabs">
                        <TabSection />
                    </div>
                    <nav class="header-nav">
                        { nav_button("Features", "features") }
                        { nav_button("Services", "services") }
                        { nav_button("Contact", "contact") }
                        <button
                            class="mode-toggle"
                            onclick={toggle_dark_mode}
                            aria-label="Toggle dark mode"
                        >
                            { if *dark_mode { "☀️" } else { "🌙" } }
                        </button>
                    </nav>
                </div>
            </header>

            <main class="site-main">
                <WavyBackground container_class={classes!("hero-waves")}>
                    <section class="hero">
                        <h1 class="gradient-heading">{ config::COMPANY_NAME }</h1>
                        <p class="hero-tagline">{ config::COMPANY_TAGLINE }</p>
                    </section>
                </WavyBackground>

                <section id="services" class="band band-soft">
                    <h2 class="gradient-heading">{"Our Core Services"}</h2>
                    <div class="card-grid card-grid-3">
                        <div class="card">
                            <div class="card-icon">{"🧠"}</div>
                            <h3>{"Customizable AI Assistant"}</h3>
                            <p>
                                {"Tailor your AI agent with memory (RAG), local or cloud-based, \
                                  keeping collective insights accessible within your team and \
                                  freeing them for strategic work."}
                            </p>
                        </div>
                        <div class="card">
                            <div class="card-icon">{"📄"}</div>
                            <h3>{"Document Extraction"}</h3>
                            <p>
                                {"Parse data from order forms, contracts, and other documents to \
                                  create a comprehensive, single source of truth for your \
                                  organization."}
                            </p>
                        </div>
                        <div class="card">
                            <div class="card-icon">{"🖼️"}</div>
                            <h3>{"Multimodal Ingestion"}</h3>
                            <p>
                                {"Digest your graphs, presentations, and video data to produce \
                                  insights on customer profiles, team progress, and competitor \
                                  research."}
                            </p>
                        </div>
                    </div>
                </section>

                <section id="features" class="band">
                    <h2 class="gradient-heading">{"Key Features"}</h2>
                    <div class="card-grid card-grid-2">
                        <div class="card">
                            <div class="card-icon">{"🔒"}</div>
                            <h3>{"Stay in Control"}</h3>
                            <p>
                                {"All AI features are 100% opt-in. You're in charge of when, \
                                  where, and how you use them, ensuring complete control over \
                                  your data and processes."}
                            </p>
                        </div>
                        <div class="card">
                            <div class="card-icon">{"🛡️"}</div>
                            <h3>{"Full Transparency"}</h3>
                            <p>
                                {"Our AI features are clearly marked within the product, so you \
                                  always know when you're using AI, maintaining trust and \
                                  clarity in your workflow."}
                            </p>
                        </div>
                    </div>
                </section>

                <section class="band band-soft">
                    <h2 class="gradient-heading">{"How FastRetrieve.AI Solves Your Problems"}</h2>
                    <div class="card-grid card-grid-2">
                        <div class="card">
                            <h3>{"Streamlined Workflows"}</h3>
                            <ul class="check-list">
                                <li>{"Automate repetitive tasks with AI agents"}</li>
                                <li>{"Reduce manual data entry and processing"}</li>
                                <li>{"Improve decision-making with AI-driven insights"}</li>
                            </ul>
                        </div>
                        <div class="card">
                            <h3>{"Enhanced Collaboration"}</h3>
                            <ul class="check-list">
                                <li>{"Centralize knowledge with AI-powered document extraction"}</li>
                                <li>{"Share insights across teams with multimodal ingestion"}</li>
                                <li>{"Maintain data integrity and security with opt-in AI features"}</li>
                            </ul>
                        </div>
                    </div>
                </section>

                <section id="contact" class="band">
                    <h2 class="gradient-heading">{"Ready to Transform Your Workflow?"}</h2>
                    <p class="band-subtitle">
                        {"Get in touch with us to learn how FastRetrieve.AI can revolutionize \
                          your industry-specific processes."}
                    </p>
                    <a
                        class="primary-button contact-button"
                        href={format!(
                            "mailto:{}?subject=Inquiry about {}",
                            config::COMPANY_EMAIL,
                            config::COMPANY_NAME
                        )}
                    >
                        {"Contact Us"}
                    </a>
                </section>

                <section class="band band-soft">
                    <div class="footer-columns">
                        <div class="company-blurb">
                            <div class="company-mark">
                                <div class="company-logo">{"⚡"}</div>
                                <div>
                                    <h3>{ config::COMPANY_NAME }</h3>
                                    <p class="company-motto">{"When knowledge flows, innovation grows."}</p>
                                </div>
                            </div>
                            <p class="company-location">{"📍 Based in "}{ config::COMPANY_LOCATION }</p>
                        </div>
                        <div class="newsletter">
                            <h3>{"Get the latest in your inbox"}</h3>
                            <form class="newsletter-form" onsubmit={newsletter_submit}>
                                <input
                                    type="email"
                                    name="email"
                                    placeholder="What's your work email?"
                                    required=true
                                    value={(*newsletter_email).clone()}
                                    onchange={
                                        let newsletter_email = newsletter_email.clone();
                                        move |e: Event| {
                                            let input: HtmlInputElement = e.target_unchecked_into();
                                            newsletter_email.set(input.value());
                                        }
                                    }
                                />
                                <button type="submit" class="primary-button" disabled={*subscribing}>
                                    { if *subscribing { "Subscribing..." } else { "Subscribe" } }
                                </button>
                            </form>
                            <p class="newsletter-disclaimer">
                                {"By subscribing, you agree to receive updates from FastRetrieve.AI."}
                            </p>
                        </div>
                    </div>
                </section>
            </main>

            <footer class="site-footer">
                <p>{"© 2025 FastRetrieve.AI. All rights reserved."}</p>
                <nav class="footer-links">
                    <a href="#">{"Terms of Service"}</a>
                    <a href="#">{"Privacy"}</a>
                </nav>
            </footer>

            <ChatWidget
                open={*chat_open}
                submitted={*chat_submitted}
                on_open={on_chat_open}
                on_close={on_chat_close}
                on_success={on_chat_success}
                on_revert={on_chat_revert}
                on_toast={on_toast.clone()}
            />

            {
                if let Some(current) = (*toast).clone() {
                    let toast = toast.clone();
                    html! {
                        <ToastNotification
                            toast={current}
                            on_close={Callback::from(move |_| toast.set(None))}
                        />
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                    .home-page {
                        display: flex;
                        flex-direction: column;
                        min-height: 100vh;
                    }
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 40;
                        background: var(--header-bg);
                        backdrop-filter: blur(8px);
                        border-bottom: 1px solid var(--border);
                    }
                    .header-inner {
                        display: flex;
                        align-items: center;
                        height: 64px;
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 0 1rem;
                        gap: 1rem;
                    }
                    .header-logo {
                        font-size: 1.4rem;
                        text-decoration: none;
                    }
                    .header-tabs {
                        flex: 1;
                        min-width: 0;
                    }
                    .header-nav {
                        display: flex;
                        align-items: center;
                        gap: 0.25rem;
                    }
                    .nav-link {
                        background: none;
                        border: none;
                        padding: 0.5rem 0.75rem;
                        font-size: 0.9rem;
                        font-weight: 500;
                        color: var(--muted);
                        cursor: pointer;
                        transition: color 0.2s ease, transform 0.2s ease;
                    }
                    .nav-link:hover {
                        color: var(--primary);
                        transform: scale(1.05);
                    }
                    .mode-toggle {
                        background: none;
                        border: none;
                        font-size: 1.1rem;
                        cursor: pointer;
                        padding: 0.4rem;
                        margin-left: 0.5rem;
                    }
                    @media (max-width: 640px) {
                        .header-nav {
                            display: none;
                        }
                    }
                    .site-main {
                        flex: 1;
                        padding-top: 64px;
                    }
                    .hero-waves {
                        min-height: 360px;
                    }
                    .hero {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        min-height: 360px;
                        padding: 3rem 1rem;
                    }
                    .hero h1 {
                        font-size: clamp(2.2rem, 6vw, 3.8rem);
                        margin: 0 0 0.75rem;
                        letter-spacing: -0.03em;
                    }
                    .hero-tagline {
                        font-size: clamp(1.1rem, 3vw, 1.5rem);
                        color: var(--muted);
                        margin: 0;
                        max-width: 700px;
                    }
                    .gradient-heading {
                        background: linear-gradient(90deg, var(--primary), var(--primary-faded));
                        -webkit-background-clip: text;
                        background-clip: text;
                        -webkit-text-fill-color: transparent;
                        color: transparent;
                    }
                    .band {
                        padding: 4rem 1rem;
                        max-width: 1100px;
                        margin: 0 auto;
                        text-align: center;
                        width: 100%;
                        box-sizing: border-box;
                    }
                    .band-soft {
                        background: var(--bg-soft);
                        max-width: none;
                    }
                    .band-soft > * {
                        max-width: 1100px;
                        margin-left: auto;
                        margin-right: auto;
                    }
                    .band h2 {
                        font-size: clamp(1.8rem, 4vw, 2.6rem);
                        margin: 0 0 2.5rem;
                    }
                    .band-subtitle {
                        color: var(--muted);
                        max-width: 600px;
                        margin: -1.5rem auto 2rem;
                        font-size: 1.1rem;
                    }
                    .card-grid {
                        display: grid;
                        gap: 1.5rem;
                        text-align: left;
                    }
                    .card-grid-3 {
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    }
                    .card-grid-2 {
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    }
                    .card {
                        background: var(--card-bg);
                        border: 1px solid var(--border);
                        border-radius: 14px;
                        padding: 1.5rem;
                        transition: transform 0.25s ease, box-shadow 0.25s ease;
                    }
                    .card:hover {
                        transform: translateY(-4px);
                        box-shadow: 0 12px 28px var(--primary-soft);
                    }
                    .card-icon {
                        font-size: 1.6rem;
                        margin-bottom: 0.75rem;
                    }
                    .card h3 {
                        margin: 0 0 0.75rem;
                        color: var(--text);
                    }
                    .card p {
                        margin: 0;
                        color: var(--muted);
                        line-height: 1.6;
                    }
                    .check-list {
                        list-style: none;
                        margin: 0;
                        padding: 0;
                        color: var(--muted);
                    }
                    .check-list li {
                        margin-bottom: 0.6rem;
                        padding-left: 1.6rem;
                        position: relative;
                        line-height: 1.5;
                    }
                    .check-list li::before {
                        content: '✓';
                        position: absolute;
                        left: 0;
                        color: var(--primary);
                        font-weight: 700;
                    }
                    .primary-button {
                        display: inline-block;
                        background: var(--primary);
                        color: #fff;
                        border: none;
                        border-radius: 8px;
                        padding: 0.7rem 1.5rem;
                        font-size: 0.95rem;
                        font-weight: 500;
                        cursor: pointer;
                        text-decoration: none;
                        box-shadow: 0 6px 16px var(--primary-soft);
                        transition: filter 0.2s ease;
                    }
                    .primary-button:hover {
                        filter: brightness(1.1);
                    }
                    .primary-button:disabled {
                        opacity: 0.6;
                        cursor: default;
                    }
                    .contact-button {
                        min-width: 200px;
                    }
                    .footer-columns {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 2.5rem;
                        text-align: left;
                    }
                    .company-mark {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }
                    .company-logo {
                        background: var(--primary-soft);
                        border-radius: 50%;
                        width: 48px;
                        height: 48px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.4rem;
                    }
                    .company-mark h3 {
                        margin: 0;
                        color: var(--primary);
                    }
                    .company-motto {
                        margin: 0.2rem 0 0;
                        font-size: 0.85rem;
                        color: var(--muted);
                    }
                    .company-location {
                        margin-top: 1rem;
                        font-size: 0.9rem;
                        color: var(--muted);
                    }
                    .newsletter h3 {
                        margin: 0 0 1rem;
                        color: var(--text);
                    }
                    .newsletter-form {
                        display: flex;
                        gap: 0.5rem;
                        flex-wrap: wrap;
                    }
                    .newsletter-form input {
                        flex: 1;
                        min-width: 200px;
                        padding: 0.65rem 0.85rem;
                        border: 1px solid var(--border);
                        border-radius: 8px;
                        background: var(--card-bg);
                        color: var(--text);
                        font-size: 0.9rem;
                    }
                    .newsletter-disclaimer {
                        margin-top: 0.75rem;
                        font-size: 0.75rem;
                        color: var(--muted);
                    }
                    .site-footer {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        gap: 0.5rem 1rem;
                        padding: 1.5rem 1rem;
                        border-top: 1px solid var(--border);
                        font-size: 0.8rem;
                        color: var(--muted);
                    }
                    .site-footer p {
                        margin: 0;
                    }
                    .footer-links {
                        margin-left: auto;
                        display: flex;
                        gap: 1.5rem;
                    }
                    .footer-links a {
                        color: var(--muted);
                        text-decoration: none;
                    }
                    .footer-links a:hover {
                        color: var(--primary);
                        text-decoration: underline;
                    }
                "#}
            </style>
        </div>
    }
}
