//! Audience tab strip shown in the page header.

use yew::prelude::*;

struct TabData {
    title: &'static str,
    items: &'static [&'static str],
}

const TABS: [TabData; 4] = [
    TabData {
        title: "For all needs",
        items: &[
            "Build, Assembly, and Test",
            "Intake-to-Pay",
            "Business process orchestration",
        ],
    },
    TabData {
        title: "For all teams",
        items: &["Finance", "IT and Security", "Legal", "HR", "Audit"],
    },
    TabData {
        title: "For all sizes",
        items: &["Startups", "Mid-market", "Enterprise"],
    },
    TabData {
        title: "For all industries",
        items: &["Multimedia", "Financial services", "Technology"],
    },
];

#[function_component(TabSection)]
pub fn tab_section() -> Html {
    // Clicking the active tab again closes its dropdown.
    let active_tab = use_state(|| None::<usize>);

    html! {
        <div class="tab-section">
            <div class="tab-strip">
                { for TABS.iter().enumerate().map(|(index, tab)| {
                    let is_active = *active_tab == Some(index);
                    let toggle = {
                        let active_tab = active_tab.clone();
                        Callback::from(move |_: MouseEvent| {
                            active_tab.set(if *active_tab == Some(index) {
                                None
                            } else {
                                Some(index)
                            });
                        })
                    };
                    html! {
                        <div class="tab-slot">
                            <button
                                class={classes!("tab-button", is_active.then_some("tab-active"))}
                                onclick={toggle}
                            >
                                { tab.title }
                            </button>
                            {
                                if is_active {
                                    html! {
                                        <div class="tab-dropdown">
                                            <h4>{ tab.title }</h4>
                                            <p class="tab-dropdown-intro">
                                                {"Explore how FastRetrieve.AI caters to various aspects of your business."}
                                            </p>
                                            <ul>
                                                { for tab.items.iter().map(|item| html! { <li>{ *item }</li> }) }
                                            </ul>
                                        </div>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    }
                }) }
            </div>
            <style>
                {r#"
                    .tab-section {
                        width: 100%;
                    }
                    .tab-strip {
                        display: flex;
                        justify-content: center;
                        gap: 1rem;
                    }
                    .tab-slot {
                        position: relative;
                    }
                    .tab-button {
                        background: none;
                        border: none;
                        padding: 0.5rem 0.75rem;
                        font-size: 0.9rem;
                        color: var(--muted);
                        cursor: pointer;
                        border-bottom: 2px solid transparent;
                        transition: color 0.2s ease;
                    }
                    .tab-button:hover {
                        color: var(--primary);
                    }
                    .tab-button.tab-active {
                        color: var(--primary);
                        font-weight: 500;
                        border-bottom-color: var(--primary);
                    }
                    .tab-dropdown {
                        position: absolute;
                        top: 100%;
                        left: 50%;
                        transform: translateX(-50%);
                        margin-top: 0.5rem;
                        width: 300px;
                        background: var(--card-bg);
                        border: 1px solid var(--border);
                        border-radius: 12px;
                        padding: 1rem 1.25rem;
                        box-shadow: 0 12px 28px rgba(0, 0, 0, 0.12);
                        z-index: 10;
                        text-align: left;
                    }
                    .tab-dropdown h4 {
                        margin: 0 0 0.25rem;
                        color: var(--text);
                    }
                    .tab-dropdown-intro {
                        margin: 0 0 0.5rem;
                        font-size: 0.85rem;
                        color: var(--muted);
                    }
                    .tab-dropdown ul {
                        margin: 0;
                        padding-left: 1.25rem;
                        color: var(--text);
                        font-size: 0.9rem;
                    }
                    .tab-dropdown li {
                        margin-bottom: 0.25rem;
                    }
                    @media (max-width: 640px) {
                        .tab-strip {
                            gap: 0.25rem;
                        }
                        .tab-button {
                            padding: 0.5rem 0.4rem;
                            font-size: 0.8rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
