//! Full-screen loading splash. Purely presentational; the page component
//! owns the timer that unmounts it.

use yew::prelude::*;

/// How long the splash stays up after mount, in milliseconds.
pub const SPLASH_DURATION_MS: u32 = 1500;

#[function_component(LoadingSplash)]
pub fn loading_splash() -> Html {
    html! {
        <div class="loading-splash">
            <div class="splash-inner">
                <span class="splash-title">{"DevOne Studio"}</span>
                <div class="splash-track">
                    <div class="splash-fill"></div>
                </div>
                <div class="splash-greeting">{"Welcome"}</div>
            </div>
            <style>
                {r#"
                .loading-splash {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(135deg, #1e3a8a, #172554);
                    color: white;
                }
                .splash-inner {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .splash-title {
                    font-size: 2.5rem;
                    font-weight: 900;
                    margin-bottom: 1rem;
                    padding-bottom: 0.25rem;
                    border-bottom: 4px solid white;
                }
                .splash-track {
                    width: 12rem;
                    height: 4px;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.3);
                    overflow: hidden;
                }
                .splash-fill {
                    width: 60%;
                    height: 100%;
                    border-radius: 9999px;
                    background: white;
                    animation: splash-pulse 1.5s ease-in-out infinite;
                }
                .splash-greeting {
                    margin-top: 2rem;
                    font-size: 0.9rem;
                    font-weight: 300;
                }
                @keyframes splash-pulse {
                    0% { transform: translateX(-60%); }
                    50% { transform: translateX(70%); }
                    100% { transform: translateX(-60%); }
                }
                "#}
            </style>
        </div>
    }
}
