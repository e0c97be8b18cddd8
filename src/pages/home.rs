//! The single scrollable page: hero, one section per portfolio project,
//! pricing, contact. Owns all of the page chrome state (active section,
//! nav visibility, theme, card expansion, splash timer, scroll progress,
//! decorative background) and tears its listeners down on unmount.

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::background::{generate_patterns, BackgroundPattern, Pattern, PATTERN_COUNT};
use crate::components::nav::SideNav;
use crate::components::splash::{LoadingSplash, SPLASH_DURATION_MS};
use crate::content::{self, PortfolioItem, PricingTier, CONTACT_SECTION_ID, PRICING_SECTION_ID};
use crate::utils::reveal::RevealObserver;
use crate::utils::scroll::{self, SECTION_REFERENCE_LINE};
use crate::utils::theme;

/// At most one card open at a time; toggling the open card collapses it.
fn toggle_expanded(current: Option<&'static str>, id: &'static str) -> Option<&'static str> {
    if current == Some(id) {
        None
    } else {
        Some(id)
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let active_section = use_state(|| Option::<&'static str>::None);
    let nav_visible = use_state(|| false);
    let theme = use_state(theme::initial_theme);
    let expanded_card = use_state(|| Option::<&'static str>::None);
    let hovered_card = use_state(|| Option::<&'static str>::None);
    let is_loading = use_state(|| true);
    let scroll_progress = use_state(|| 0.0_f64);
    let patterns = use_state(Vec::<Pattern>::new);

    // Splash timer and background dots are page-owned initialization state,
    // set up once on mount. Dropping the timeout cancels it on unmount.
    {
        let is_loading = is_loading.clone();
        let patterns = patterns.clone();
        use_effect_with_deps(
            move |_| {
                patterns.set(generate_patterns(PATTERN_COUNT, js_sys::Math::random));
                let timeout = Timeout::new(SPLASH_DURATION_MS, move || {
                    is_loading.set(false);
                });
                move || drop(timeout)
            },
            (),
        );
    }

    // Reflect the theme onto the document element whenever it changes
    // (including the initial value loaded from storage / OS preference).
    {
        let current = *theme;
        use_effect_with_deps(
            move |theme| {
                theme::apply(*theme);
                || ()
            },
            current,
        );
    }

    // Scroll listener: active-section tracking plus the progress bar value.
    {
        let active_section = active_section.clone();
        let scroll_progress = scroll_progress.clone();
        use_effect_with_deps(
            move |_| {
                let section_ids = content::section_ids();
                let handler = move || {
                    let document = match web_sys::window().and_then(|w| w.document()) {
                        Some(document) => document,
                        None => return,
                    };
                    let rects = scroll::rendered_section_rects(&document, &section_ids);
                    if let Some(id) = scroll::active_section(rects, SECTION_REFERENCE_LINE) {
                        active_section.set(Some(id));
                    }
                    scroll_progress.set(scroll::document_scroll_percentage(&document));
                };

                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new(handler.clone());
                    window
                        .add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    // Initial pass so the nav highlights before any scrolling.
                    handler();
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    // One-shot reveal animation for everything tagged animate-on-scroll.
    {
        use_effect_with_deps(
            move |_| {
                let observer = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|doc| RevealObserver::observe_all(&doc));
                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    let toggle_nav = {
        let nav_visible = nav_visible.clone();
        Callback::from(move |_: MouseEvent| nav_visible.set(!*nav_visible))
    };

    let on_nav_select = {
        let nav_visible = nav_visible.clone();
        Callback::from(move |id: &'static str| {
            scroll::scroll_to_section(id);
            nav_visible.set(false);
        })
    };

    let on_jump = Callback::from(|id: &'static str| scroll::scroll_to_section(id));

    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = theme.toggled();
            theme.set(next);
            theme::persist(next);
        })
    };

    let on_card_toggle = {
        let expanded_card = expanded_card.clone();
        Callback::from(move |id: &'static str| {
            expanded_card.set(toggle_expanded(*expanded_card, id));
        })
    };

    let on_card_hover = {
        let hovered_card = hovered_card.clone();
        Callback::from(move |id: Option<&'static str>| hovered_card.set(id))
    };

    html! {
        <>
            if *is_loading {
                <LoadingSplash />
            }

            if !*is_loading {
                <BackgroundPattern patterns={(*patterns).clone()} />
            }

            <div class="scroll-progress-track">
                <div
                    class="scroll-progress-bar"
                    style={format!("width: {:.2}%;", *scroll_progress)}
                />
            </div>

            <div class="portfolio-page">
                <SideNav
                    visible={*nav_visible}
                    active_section={*active_section}
                    on_select={on_nav_select}
                />

                <button
                    class="nav-toggle"
                    onclick={toggle_nav}
                    aria-label={if *nav_visible { "Hide navigation" } else { "Show navigation" }}
                >
                    if *nav_visible {
                        <svg class="toggle-icon" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" d="M15 19l-7-7 7-7" />
                        </svg>
                    } else {
                        <svg class="toggle-icon" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" d="M4 6h16M4 12h16M4 18h16" />
                        </svg>
                    }
                </button>

                <button
                    class="theme-toggle"
                    onclick={toggle_theme}
                    aria-label={if theme.is_dark() { "Switch to light mode" } else { "Switch to dark mode" }}
                >
                    if theme.is_dark() {
                        <svg class="toggle-icon" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24">
                            <circle cx="12" cy="12" r="4" />
                            <path stroke-linecap="round" d="M12 2v2m0 16v2M4.9 4.9l1.4 1.4m11.4 11.4l1.4 1.4M2 12h2m16 0h2M4.9 19.1l1.4-1.4m11.4-11.4l1.4-1.4" />
                        </svg>
                    } else {
                        <svg class="toggle-icon" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" d="M21 12.8A9 9 0 1 1 11.2 3a7 7 0 0 0 9.8 9.8z" />
                        </svg>
                    }
                </button>

                <main class={classes!("page-main", if *nav_visible { "nav-open" } else { "" })}>
                    { hero_section(&on_jump) }

                    <div class="project-stack">
                        { for content::PORTFOLIO_ITEMS.iter().enumerate().map(|(index, item)| {
                            project_section(
                                index,
                                item,
                                *expanded_card == Some(item.id),
                                *hovered_card == Some(item.id),
                                &on_card_toggle,
                                &on_card_hover,
                                &on_jump,
                            )
                        }) }
                    </div>

                    { pricing_section(&on_jump) }
                    { contact_section() }
                </main>

                <style>{ PAGE_CSS }</style>
            </div>
        </>
    }
}

fn hero_section(on_jump: &Callback<&'static str>) -> Html {
    let first_project = content::PORTFOLIO_ITEMS[0].id;
    let onclick = {
        let on_jump = on_jump.clone();
        Callback::from(move |_: MouseEvent| on_jump.emit(first_project))
    };
    html! {
        <section class="hero">
            <div class="hero-content animate-on-scroll">
                <div class="hero-logo animate-float">{"D1"}</div>
                <h1>{"Nervous about outsourcing your web build?"}</h1>
                <div class="hero-lines">
                    <p class="hero-line-strong">
                        {"See the result before you pay"}
                        <span class="hero-accent">{" — 100% refund guarantee"}</span>
                    </p>
                    <p class="hero-line">{"A working website in your hands within 3 days"}</p>
                    <p class="hero-line-muted">
                        {"Test your business idea with a landing page first"}
                    </p>
                </div>
            </div>

            <button class="jump-button hero-jump" {onclick}>
                <span>{"View Samples"}</span>
                { chevron_down() }
            </button>

            <div class="hero-glow">
                <div class="glow-blob glow-left"></div>
                <div class="glow-blob glow-right"></div>
            </div>
        </section>
    }
}

#[allow(clippy::too_many_arguments)]
fn project_section(
    index: usize,
    item: &'static PortfolioItem,
    expanded: bool,
    hovered: bool,
    on_toggle: &Callback<&'static str>,
    on_hover: &Callback<Option<&'static str>>,
    on_jump: &Callback<&'static str>,
) -> Html {
    let card_class = classes!(
        "project-card",
        "animate-on-scroll",
        if expanded { "expanded" } else { "" },
        if !expanded && hovered { "lifted" } else { "" },
    );

    let onclick = {
        let on_toggle = on_toggle.clone();
        let id = item.id;
        Callback::from(move |_: MouseEvent| on_toggle.emit(id))
    };
    let onmouseenter = {
        let on_hover = on_hover.clone();
        let id = item.id;
        Callback::from(move |_: MouseEvent| on_hover.emit(Some(id)))
    };
    let onmouseleave = {
        let on_hover = on_hover.clone();
        Callback::from(move |_: MouseEvent| on_hover.emit(None))
    };
    // The outbound link must not toggle the card under it.
    let on_link_click = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_expand_click = {
        let on_toggle = on_toggle.clone();
        let id = item.id;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_toggle.emit(id);
        })
    };
    // Broken image: hide it and leave the placeholder gradient showing.
    let onerror = Callback::from(|e: Event| {
        let target: web_sys::HtmlImageElement = e.target_unchecked_into();
        let _ = target.style().set_property("display", "none");
    });

    let is_last = index == content::PORTFOLIO_ITEMS.len() - 1;
    let (jump_target, jump_label) = if is_last {
        (PRICING_SECTION_ID, "Service Pricing")
    } else {
        (content::PORTFOLIO_ITEMS[index + 1].id, "Next Project")
    };
    let jump = {
        let on_jump = on_jump.clone();
        Callback::from(move |_: MouseEvent| on_jump.emit(jump_target))
    };

    html! {
        <section key={item.id} id={item.id} class="project-section">
            <div
                class={card_class}
                style={format!("animation-delay: {}ms;", index * 150)}
                {onclick}
                {onmouseenter}
                {onmouseleave}
            >
                <div class="card-layout">
                    <div class="card-media">
                        <div class="media-placeholder"></div>
                        <img
                            class="card-image"
                            src={item.image_url}
                            alt={item.title}
                            loading="lazy"
                            {onerror}
                        />
                    </div>
                    <div class="card-body">
                        <h2>{ item.full_title }</h2>
                        <p class="card-description">{ item.description }</p>
                        if expanded {
                            <div class="card-detail">
                                <p>
                                    {"Built user-experience-first: responsive layouts and \
                                      tuned performance keep it smooth on every device."}
                                </p>
                                <ul>
                                    <li>{"User-centred UI/UX design"}</li>
                                    <li>{"Fast build and deployment"}</li>
                                    <li>{"Data visualisation and analytics"}</li>
                                </ul>
                            </div>
                        }
                        <div class="tag-row">
                            { for item.tags.iter().map(|tag| html! {
                                <span key={*tag} class="tag-chip">{ *tag }</span>
                            }) }
                        </div>
                        <div class="card-actions">
                            <a
                                href={item.link}
                                target="_blank"
                                rel="noopener noreferrer"
                                class="card-link"
                                onclick={on_link_click}
                            >
                                {"View Project"}
                                <svg class="link-icon" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24">
                                    <path stroke-linecap="round" stroke-linejoin="round" d="M10 6H6a2 2 0 00-2 2v10a2 2 0 002 2h10a2 2 0 002-2v-4M14 4h6m0 0v6m0-6L10 14" />
                                </svg>
                            </a>
                            <button class="expand-button" onclick={on_expand_click}>
                                { if expanded { "Collapse" } else { "Show More" } }
                            </button>
                        </div>
                    </div>
                </div>
            </div>

            <button class="jump-button section-jump" onclick={jump}>
                <span>{ jump_label }</span>
                { chevron_down() }
            </button>
        </section>
    }
}

fn pricing_section(on_jump: &Callback<&'static str>) -> Html {
    let jump = {
        let on_jump = on_jump.clone();
        Callback::from(move |_: MouseEvent| on_jump.emit(CONTACT_SECTION_ID))
    };
    html! {
        <section id={PRICING_SECTION_ID} class="pricing-section">
            <div class="pricing-inner">
                <div class="pricing-head animate-on-scroll">
                    <h2>{"Service Pricing"}</h2>
                    <p>
                        {"The right web solution for your stage of growth. Every \
                          package is adjusted to fit — nothing is off the shelf."}
                    </p>
                </div>

                <div class="tier-grid">
                    { for content::PRICING_TIERS.iter().map(tier_card) }
                </div>

                <div class="pricing-notes animate-on-scroll">
                    <p>{"Every package includes two free revision rounds"}</p>
                    <p class="pricing-footnote">
                        {"* Additional features and requests quoted separately"}
                    </p>
                </div>
            </div>

            <button class="jump-button section-jump" onclick={jump}>
                <span>{"Get in Touch"}</span>
                { chevron_down() }
            </button>
        </section>
    }
}

fn tier_card(tier: &'static PricingTier) -> Html {
    html! {
        <div
            key={tier.id}
            class={classes!(
                "tier-card",
                "animate-on-scroll",
                if tier.highlighted { "highlighted" } else { "" },
            )}
        >
            if tier.highlighted {
                <div class="tier-best">{"BEST"}</div>
            }
            <h3>{ tier.name }</h3>
            <div class="tier-price">
                if let Some(original) = tier.original_price {
                    <span class="tier-price-original">{ original }</span>
                }
                <span class="tier-price-current">{ tier.price }</span>
            </div>
            if let Some(note) = tier.price_note {
                <p class="tier-price-note">{ note }</p>
            }
            <div class="tier-badge-row">
                <span class="tier-badge">{ tier.badge }</span>
            </div>
            <ul class="tier-features">
                { for tier.features.iter().map(|feature| html! {
                    <li key={*feature}>
                        <svg class="check-icon" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" d="M5 13l4 4L19 7" />
                        </svg>
                        { *feature }
                    </li>
                }) }
            </ul>
            <div class="tier-footer">
                <p>{ tier.footnote }</p>
            </div>
        </div>
    }
}

fn contact_section() -> Html {
    html! {
        <footer id={CONTACT_SECTION_ID} class="contact-section">
            <div class="contact-inner">
                <div class="contact-head animate-on-scroll">
                    <h2>{"Need a website built?"}</h2>
                    <p>
                        {"From landing pages to data dashboards — launch a web \
                          service without hiring a developer."}
                    </p>
                </div>

                <div class="contact-grid">
                    { for content::CONTACT_CHANNELS.iter().map(|channel| html! {
                        <div key={channel.id} class="contact-card animate-on-scroll">
                            <div class="contact-icon-ring">
                                <svg class="contact-icon" fill="currentColor" viewBox="0 0 24 24">
                                    if channel.id == "contact-sms" {
                                        <path d="M20 2H4c-1.1 0-2 .9-2 2v18l4-4h14c1.1 0 2-.9 2-2V4c0-1.1-.9-2-2-2zm0 14H5.17L4 17.17V4h16v12zM7 9h2v2H7zm4 0h2v2h-2zm4 0h2v2h-2z" />
                                    } else {
                                        <path d="M20 4H4c-1.1 0-2 .9-2 2v12c0 1.1.9 2 2 2h16c1.1 0 2-.9 2-2V6c0-1.1-.9-2-2-2zm0 4l-8 5-8-5V6l8 5 8-5v2z" />
                                    }
                                </svg>
                            </div>
                            <h3>{ channel.heading }</h3>
                            <a href={channel.href} class="contact-link">{ channel.label }</a>
                            <p>{ channel.note }</p>
                        </div>
                    }) }
                </div>
            </div>
        </footer>
    }
}

fn chevron_down() -> Html {
    html! {
        <svg class="chevron-icon" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24">
            <path stroke-linecap="round" stroke-linejoin="round" d="M19 14l-7 7m0 0l-7-7m7 7V3" />
        </svg>
    }
}

const PAGE_CSS: &str = r#"
body {
    margin: 0;
    font-family: 'Segoe UI', -apple-system, BlinkMacSystemFont, sans-serif;
    color: #1f2937;
}
.dark-mode body {
    color: #e5e7eb;
}

.portfolio-page {
    min-height: 100vh;
    background: linear-gradient(135deg, #eff6ff, #ffffff 50%, #faf5ff);
    transition: background 0.3s ease;
}
.dark-mode .portfolio-page {
    background: linear-gradient(135deg, #111827, #1f2937 50%, #111827);
}

.scroll-progress-track {
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    height: 4px;
    z-index: 50;
    background: #e5e7eb;
}
.dark-mode .scroll-progress-track {
    background: #374151;
}
.scroll-progress-bar {
    height: 100%;
    background: linear-gradient(90deg, #3b82f6, #a855f7);
    transition: width 0.3s ease;
}

.side-nav {
    position: fixed;
    top: 0;
    left: 0;
    width: 16rem;
    height: 100vh;
    padding: 2rem 1.5rem;
    box-sizing: border-box;
    display: flex;
    flex-direction: column;
    background: rgba(255, 255, 255, 0.9);
    backdrop-filter: blur(8px);
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.12);
    transform: translateX(-100%);
    transition: transform 0.3s ease-in-out;
    z-index: 40;
}
.side-nav.visible {
    transform: translateX(0);
}
.dark-mode .side-nav {
    background: rgba(31, 41, 55, 0.92);
}
.nav-brand {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 1rem;
    margin-bottom: 2rem;
}
.nav-logo {
    width: 5rem;
    height: 5rem;
    display: flex;
    align-items: center;
    justify-content: center;
    border-radius: 50%;
    font-size: 1.8rem;
    font-weight: 900;
    color: white;
    background: linear-gradient(135deg, #1e40af, #172554);
}
.nav-brand h1 {
    font-size: 1.3rem;
    font-weight: 800;
    text-align: center;
    margin: 0;
}
.dark-mode .nav-brand h1 {
    color: #f3f4f6;
}
.nav-entries {
    list-style: none;
    margin: 0;
    padding: 0;
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
}
.nav-entry {
    width: 100%;
    display: flex;
    align-items: center;
    padding: 0.5rem 1rem;
    border: none;
    border-radius: 0.5rem;
    background: transparent;
    color: #374151;
    font-size: 0.95rem;
    text-align: left;
    cursor: pointer;
    transition: transform 0.3s ease, background 0.3s ease, color 0.3s ease;
}
.nav-entry:hover {
    background: #f3f4f6;
    transform: scale(1.05);
}
.nav-entry.active {
    color: #1e40af;
    font-weight: 600;
}
.dark-mode .nav-entry {
    color: #d1d5db;
}
.dark-mode .nav-entry:hover {
    background: #374151;
}
.dark-mode .nav-entry.active {
    color: #93c5fd;
}
.nav-dot {
    width: 0.5rem;
    height: 0.5rem;
    border-radius: 50%;
    margin-right: 0.5rem;
    background: #d1d5db;
}
.nav-entry.active .nav-dot {
    background: linear-gradient(90deg, #1e40af, #172554);
}
.nav-footer {
    margin-top: auto;
    padding-top: 1.5rem;
    border-top: 1px solid #e5e7eb;
    display: flex;
    flex-direction: column;
    gap: 1rem;
}
.dark-mode .nav-footer {
    border-top-color: #374151;
}
.nav-social {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    color: #4b5563;
    text-decoration: none;
    font-size: 0.85rem;
    font-weight: 300;
    transition: color 0.3s ease;
}
.nav-social:hover {
    color: #2563eb;
}
.dark-mode .nav-social {
    color: #9ca3af;
}
.nav-icon {
    width: 1.25rem;
    height: 1.25rem;
}

.nav-toggle,
.theme-toggle {
    position: fixed;
    top: 1rem;
    z-index: 60;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 0.5rem;
    border: none;
    border-radius: 50%;
    color: white;
    background: linear-gradient(90deg, #1e40af, #172554);
    box-shadow: 0 10px 20px rgba(0, 0, 0, 0.2);
    cursor: pointer;
    transition: transform 0.3s ease;
}
.nav-toggle {
    left: 1rem;
}
.theme-toggle {
    right: 1rem;
}
.nav-toggle:hover,
.theme-toggle:hover {
    transform: scale(1.1);
}
.nav-toggle:active,
.theme-toggle:active {
    transform: scale(0.95);
}
.toggle-icon {
    width: 1.5rem;
    height: 1.5rem;
}

.page-main {
    width: 100%;
    max-width: 64rem;
    margin: 0 auto;
    transition: margin 0.3s ease-in-out;
}
.page-main.nav-open {
    margin-left: 16rem;
}

.hero {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    padding: 0 2rem;
    position: relative;
    overflow: hidden;
}
.hero-content {
    text-align: center;
    z-index: 10;
    margin-bottom: 6rem;
}
.hero-logo {
    width: 10rem;
    height: 10rem;
    margin: 0 auto 2rem;
    display: flex;
    align-items: center;
    justify-content: center;
    border-radius: 50%;
    font-size: 3.5rem;
    font-weight: 900;
    color: white;
    background: linear-gradient(135deg, #1e40af, #172554);
}
.animate-float {
    animation: float 6s ease-in-out infinite;
}
.hero h1 {
    font-size: clamp(2.5rem, 6vw, 4.5rem);
    font-weight: 900;
    line-height: 1.15;
    letter-spacing: -0.02em;
    margin: 0 0 2rem;
    background: linear-gradient(90deg, #1e40af, #172554);
    -webkit-background-clip: text;
    background-clip: text;
    -webkit-text-fill-color: transparent;
}
.dark-mode .hero h1 {
    background: linear-gradient(90deg, #60a5fa, #3b82f6);
    -webkit-background-clip: text;
    background-clip: text;
}
.hero-lines {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
}
.hero-line-strong {
    font-size: 1.75rem;
    font-weight: 700;
    color: #1f2937;
    margin: 0;
}
.hero-accent {
    color: #2563eb;
}
.hero-line {
    font-size: 1.35rem;
    color: #374151;
    margin: 0;
}
.hero-line-muted {
    font-size: 1.35rem;
    font-weight: 600;
    color: #4b5563;
    margin: 0;
}
.dark-mode .hero-line-strong { color: #f3f4f6; }
.dark-mode .hero-line { color: #d1d5db; }
.dark-mode .hero-line-muted { color: #9ca3af; }
.hero-glow {
    position: absolute;
    inset: 0;
    z-index: -10;
}
.glow-blob {
    position: absolute;
    width: 16rem;
    height: 16rem;
    border-radius: 50%;
    filter: blur(64px);
}
.glow-left {
    top: 25%;
    left: 25%;
    background: rgba(30, 64, 175, 0.1);
    transform: translate(-50%, -50%);
}
.glow-right {
    bottom: 25%;
    right: 25%;
    background: rgba(30, 58, 138, 0.1);
    transform: translate(50%, 50%);
}

.project-stack {
    padding: 5rem 2rem;
    display: flex;
    flex-direction: column;
    gap: 10rem;
}
.project-section {
    min-height: 80vh;
    display: flex;
    flex-direction: column;
    justify-content: center;
    position: relative;
    padding-bottom: 8rem;
    scroll-margin-top: 5rem;
}
.project-card {
    width: 100%;
    max-width: 64rem;
    background: rgba(255, 255, 255, 0.8);
    backdrop-filter: blur(4px);
    border-radius: 0.75rem;
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.1);
    overflow: hidden;
    cursor: pointer;
    transition: transform 0.5s ease, box-shadow 0.5s ease;
}
.dark-mode .project-card {
    background: rgba(31, 41, 55, 0.85);
}
.project-card.lifted {
    transform: translateY(-0.5rem);
    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.15);
}
.project-card.expanded {
    transform: scale(1.05);
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
    z-index: 20;
}
.card-layout {
    display: flex;
    flex-direction: column;
}
@media (min-width: 768px) {
    .project-card:not(.expanded) .card-layout {
        flex-direction: row;
    }
    .project-card:not(.expanded) .card-media,
    .project-card:not(.expanded) .card-body {
        width: 50%;
    }
}
.card-media {
    position: relative;
    height: 16rem;
    overflow: hidden;
}
.project-card.expanded .card-media {
    height: 20rem;
}
.media-placeholder {
    position: absolute;
    inset: 0;
    background: linear-gradient(135deg, #e5e7eb, #d1d5db);
    animation: placeholder-pulse 2s ease-in-out infinite;
}
.dark-mode .media-placeholder {
    background: linear-gradient(135deg, #374151, #4b5563);
}
.card-image {
    position: absolute;
    inset: 0;
    width: 100%;
    height: 100%;
    object-fit: cover;
    transition: transform 0.7s ease;
}
.project-card:hover .card-image {
    transform: scale(1.1);
}
.card-body {
    padding: 2rem;
    box-sizing: border-box;
}
.card-body h2 {
    font-size: 1.75rem;
    font-weight: 700;
    margin: 0 0 1rem;
    padding-bottom: 0.5rem;
    background: linear-gradient(90deg, #1e40af, #172554);
    -webkit-background-clip: text;
    background-clip: text;
    -webkit-text-fill-color: transparent;
}
.dark-mode .card-body h2 {
    background: linear-gradient(90deg, #93c5fd, #60a5fa);
    -webkit-background-clip: text;
    background-clip: text;
}
.card-description {
    display: none;
    color: #4b5563;
    font-weight: 300;
    line-height: 1.7;
    margin: 0 0 1.5rem;
}
@media (min-width: 768px) {
    .card-description {
        display: block;
    }
}
.project-card.expanded .card-description {
    display: block;
}
.dark-mode .card-description {
    color: #d1d5db;
}
.card-detail {
    color: #4b5563;
    font-weight: 300;
    margin-bottom: 1.5rem;
    animation: fade-up 0.5s ease;
}
.dark-mode .card-detail {
    color: #d1d5db;
}
.card-detail ul {
    padding-left: 1.25rem;
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}
.tag-row {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
    margin-bottom: 1.5rem;
}
.tag-chip {
    padding: 0.25rem 0.75rem;
    border-radius: 9999px;
    font-size: 0.85rem;
    font-weight: 500;
    color: #1e3a8a;
    background: linear-gradient(90deg, #dbeafe, #bfdbfe);
    transition: transform 0.3s ease, box-shadow 0.3s ease;
}
.tag-chip:hover {
    transform: scale(1.05);
    box-shadow: 0 4px 10px rgba(0, 0, 0, 0.1);
}
.dark-mode .tag-chip {
    color: #bfdbfe;
    background: linear-gradient(90deg, #1e3a8a, #1e40af);
}
.card-actions {
    display: flex;
    gap: 0.75rem;
}
.card-link {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 1rem;
    border-radius: 0.5rem;
    color: white;
    font-weight: 500;
    text-decoration: none;
    background: linear-gradient(90deg, #1e40af, #172554);
    transition: transform 0.3s ease;
}
.card-link:hover {
    transform: scale(1.05);
}
.card-link:active {
    transform: scale(0.95);
}
.link-icon {
    width: 1rem;
    height: 1rem;
    transition: transform 0.3s ease;
}
.card-link:hover .link-icon {
    transform: translateX(4px);
}
.expand-button {
    display: inline-flex;
    align-items: center;
    padding: 0.5rem 1rem;
    border: 1px solid #d1d5db;
    border-radius: 0.5rem;
    background: transparent;
    color: #374151;
    font-weight: 500;
    cursor: pointer;
    transition: background 0.3s ease;
}
.expand-button:hover {
    background: #f3f4f6;
}
.dark-mode .expand-button {
    border-color: #4b5563;
    color: #d1d5db;
}
.dark-mode .expand-button:hover {
    background: #374151;
}

.jump-button {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.75rem 2rem;
    border: none;
    border-radius: 9999px;
    color: white;
    font-size: 1rem;
    white-space: nowrap;
    background: linear-gradient(90deg, #1e40af, #172554);
    box-shadow: 0 10px 20px rgba(0, 0, 0, 0.2);
    cursor: pointer;
    transition: background 0.3s ease;
}
.jump-button:hover {
    background: linear-gradient(90deg, #1e3a8a, #172554);
}
.chevron-icon {
    width: 1.25rem;
    height: 1.25rem;
    transition: transform 0.3s ease;
}
.jump-button:hover .chevron-icon {
    transform: translateY(4px);
}
.hero-jump {
    position: absolute;
    bottom: 4rem;
    left: 50%;
    transform: translateX(-50%);
}
.section-jump {
    position: absolute;
    bottom: 2rem;
    left: 50%;
    transform: translateX(-50%);
}

.pricing-section {
    position: relative;
    padding: 6rem 2rem;
    background: linear-gradient(180deg, rgba(255, 255, 255, 0), rgba(249, 250, 251, 0.8));
}
.dark-mode .pricing-section {
    background: linear-gradient(180deg, rgba(17, 24, 39, 0), rgba(17, 24, 39, 0.8));
}
.pricing-inner {
    max-width: 72rem;
    margin: 0 auto;
}
.pricing-head {
    text-align: center;
    margin-bottom: 4rem;
}
.pricing-head h2,
.contact-head h2 {
    font-size: 2.25rem;
    font-weight: 700;
    margin: 0 0 1rem;
    background: linear-gradient(90deg, #1e40af, #172554);
    -webkit-background-clip: text;
    background-clip: text;
    -webkit-text-fill-color: transparent;
}
.dark-mode .pricing-head h2,
.dark-mode .contact-head h2 {
    background: linear-gradient(90deg, #93c5fd, #60a5fa);
    -webkit-background-clip: text;
    background-clip: text;
}
.pricing-head p {
    max-width: 36rem;
    margin: 0 auto;
    color: #4b5563;
}
.dark-mode .pricing-head p {
    color: #9ca3af;
}
.tier-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 2rem;
    margin-bottom: 2rem;
}
@media (min-width: 768px) {
    .tier-grid { grid-template-columns: repeat(2, 1fr); }
}
@media (min-width: 1100px) {
    .tier-grid { grid-template-columns: repeat(4, 1fr); }
}
.tier-card {
    position: relative;
    display: flex;
    flex-direction: column;
    padding: 2rem;
    border-radius: 1rem;
    background: white;
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.1);
    transition: transform 0.3s ease;
}
.tier-card:hover {
    transform: scale(1.02);
}
.dark-mode .tier-card {
    background: #1f2937;
}
.tier-card.highlighted {
    color: white;
    background: linear-gradient(180deg, #1e3a8a, #172554);
}
.tier-best {
    position: absolute;
    top: 0;
    right: 0;
    padding: 0.25rem 0.75rem;
    border-radius: 0 1rem 0 0.5rem;
    font-size: 0.75rem;
    font-weight: 700;
    color: #1e3a8a;
    background: #facc15;
}
.tier-card h3 {
    font-size: 1.25rem;
    font-weight: 700;
    text-align: center;
    margin: 1rem 0;
}
.tier-price {
    display: flex;
    align-items: baseline;
    justify-content: center;
    gap: 0.5rem;
}
.tier-price-original {
    font-size: 1.1rem;
    color: #6b7280;
    text-decoration: line-through;
}
.tier-card.highlighted .tier-price-original {
    color: #cbd5e1;
}
.tier-price-current {
    font-size: 2rem;
    font-weight: 700;
    color: #1e40af;
}
.dark-mode .tier-price-current {
    color: #93c5fd;
}
.tier-card.highlighted .tier-price-current {
    color: white;
}
.tier-price-note {
    text-align: center;
    font-size: 0.85rem;
    color: #6b7280;
    margin: 0.5rem 0 0;
}
.tier-card.highlighted .tier-price-note {
    color: #d1d5db;
}
.tier-badge-row {
    text-align: center;
    margin: 0.75rem 0 1rem;
}
.tier-badge {
    display: inline-block;
    padding: 0.25rem 0.75rem;
    border-radius: 9999px;
    font-size: 0.75rem;
    color: #1e40af;
    background: #dbeafe;
}
.tier-card.highlighted .tier-badge {
    font-weight: 700;
    color: #1e3a8a;
    background: #facc15;
}
.tier-features {
    list-style: none;
    margin: 0;
    padding: 0;
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
    flex-grow: 1;
    color: #4b5563;
}
.dark-mode .tier-features {
    color: #d1d5db;
}
.tier-card.highlighted .tier-features {
    color: #e5e7eb;
}
.tier-features li {
    display: flex;
    align-items: center;
}
.check-icon {
    width: 1.25rem;
    height: 1.25rem;
    margin-right: 0.5rem;
    color: #1e40af;
    flex-shrink: 0;
}
.dark-mode .check-icon {
    color: #93c5fd;
}
.tier-card.highlighted .check-icon {
    color: #facc15;
}
.tier-footer {
    margin-top: 1.5rem;
    padding-top: 1.5rem;
    border-top: 1px solid #e5e7eb;
    text-align: center;
    font-size: 0.85rem;
    color: #6b7280;
}
.dark-mode .tier-footer {
    border-top-color: #374151;
    color: #9ca3af;
}
.tier-card.highlighted .tier-footer {
    border-top-color: #1e40af;
    color: #d1d5db;
}
.pricing-notes {
    text-align: center;
    color: #4b5563;
    margin-bottom: 4rem;
}
.dark-mode .pricing-notes {
    color: #9ca3af;
}
.pricing-footnote {
    font-size: 0.85rem;
    margin-top: 0.5rem;
}

.contact-section {
    padding: 6rem 1rem;
    background: linear-gradient(180deg, rgba(255, 255, 255, 0), rgba(249, 250, 251, 0.8));
}
.dark-mode .contact-section {
    background: linear-gradient(180deg, rgba(17, 24, 39, 0), rgba(17, 24, 39, 0.8));
}
.contact-inner {
    max-width: 56rem;
    margin: 0 auto;
}
.contact-head {
    text-align: center;
    margin-bottom: 4rem;
}
.contact-head p {
    font-size: 1.2rem;
    color: #4b5563;
    font-weight: 500;
    line-height: 1.7;
}
.dark-mode .contact-head p {
    color: #9ca3af;
}
.contact-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 2rem;
}
@media (min-width: 768px) {
    .contact-grid { grid-template-columns: repeat(2, 1fr); }
}
.contact-card {
    padding: 2rem;
    border-radius: 0.75rem;
    text-align: center;
    background: white;
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.1);
    transition: transform 0.3s ease;
}
.contact-card:hover {
    transform: scale(1.02);
}
.dark-mode .contact-card {
    background: #1f2937;
}
.contact-icon-ring {
    width: 4rem;
    height: 4rem;
    margin: 0 auto 1.5rem;
    display: flex;
    align-items: center;
    justify-content: center;
    border-radius: 50%;
    background: #eff6ff;
}
.dark-mode .contact-icon-ring {
    background: #1e3a8a;
}
.contact-icon {
    width: 2rem;
    height: 2rem;
    color: #3b82f6;
}
.contact-card h3 {
    font-size: 1.25rem;
    font-weight: 600;
    margin: 0 0 0.75rem;
}
.dark-mode .contact-card h3 {
    color: #f3f4f6;
}
.contact-link {
    display: block;
    font-size: 1.1rem;
    font-weight: 500;
    color: #3b82f6;
    text-decoration: none;
    margin-bottom: 0.75rem;
}
.contact-link:hover {
    color: #2563eb;
}
.contact-card p {
    color: #4b5563;
    margin: 0;
}
.dark-mode .contact-card p {
    color: #9ca3af;
}

.awaiting-reveal {
    opacity: 0;
    transform: translateY(20px);
}
.revealed {
    animation: fade-up 0.7s ease forwards;
}

@keyframes fade-up {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: translateY(0); }
}
@keyframes float {
    0% { transform: translateY(0px) rotate(0deg); }
    50% { transform: translateY(-20px) rotate(5deg); }
    100% { transform: translateY(0px) rotate(0deg); }
}
@keyframes placeholder-pulse {
    0%, 100% { opacity: 1; }
    50% { opacity: 0.6; }
}

@media (max-width: 767px) {
    .page-main.nav-open {
        margin-left: 0;
    }
    .hero-line-strong { font-size: 1.4rem; }
    .hero-line,
    .hero-line-muted { font-size: 1.1rem; }
    .project-stack { gap: 6rem; }
}
"#;

#[cfg(test)]
mod tests {
    use super::toggle_expanded;

    #[test]
    fn expanding_a_new_card_replaces_the_open_one() {
        assert_eq!(toggle_expanded(None, "a"), Some("a"));
        assert_eq!(toggle_expanded(Some("a"), "b"), Some("b"));
    }

    #[test]
    fn toggling_the_open_card_collapses_it() {
        assert_eq!(toggle_expanded(Some("a"), "a"), None);
    }

    #[test]
    fn click_sequence_never_leaves_two_cards_open() {
        let mut state = None;
        let expected = [Some("a"), Some("b"), Some("c"), Some("b"), None];
        for (id, want) in ["a", "b", "c", "b", "b"].into_iter().zip(expected) {
            state = toggle_expanded(state, id);
            assert_eq!(state, want);
        }
    }
}
