use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h2 class="not-found-title">{"Page Not Found"}</h2>
            <p class="not-found-text">
                {"The page you're looking for doesn't exist or has been moved."}
            </p>
            <Link<Route> to={Route::Home} classes="not-found-home">
                {"Return Home"}
            </Link<Route>>
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 1rem;
                    }
                    .not-found-title {
                        font-size: clamp(2rem, 5vw, 3rem);
                        margin: 0 0 1rem;
                        background: linear-gradient(90deg, var(--primary), var(--primary-faded));
                        -webkit-background-clip: text;
                        background-clip: text;
                        -webkit-text-fill-color: transparent;
                        color: transparent;
                    }
                    .not-found-text {
                        color: var(--muted);
                        margin: 0 0 2rem;
                    }
                    .not-found-home {
                        background: var(--primary);
                        color: #fff;
                        padding: 0.75rem 1.5rem;
                        border-radius: 8px;
                        text-decoration: none;
                        box-shadow: 0 6px 16px var(--primary-soft);
                    }
                "#}
            </style>
        </div>
    }
}
