//! Sliding sidebar navigation. Entries mirror the page sections; the active
//! one carries the gradient dot. Selecting an entry is reported upward so
//! the page can scroll and close the panel.

use yew::prelude::*;

use crate::content::{self, CONTACT_SECTION_ID, PORTFOLIO_ITEMS, PRICING_SECTION_ID};

#[derive(Properties, PartialEq)]
pub struct SideNavProps {
    pub visible: bool,
    pub active_section: Option<&'static str>,
    pub on_select: Callback<&'static str>,
}

#[function_component(SideNav)]
pub fn side_nav(props: &SideNavProps) -> Html {
    let entries: Vec<(&'static str, &'static str)> = PORTFOLIO_ITEMS
        .iter()
        .map(|item| (item.id, item.title))
        .chain([
            (PRICING_SECTION_ID, "Service Pricing"),
            (CONTACT_SECTION_ID, "Contact"),
        ])
        .collect();

    html! {
        <nav class={classes!("side-nav", if props.visible { "visible" } else { "" })}>
            <div class="nav-brand">
                <div class="nav-logo">{"D1"}</div>
                <h1>{"DevOne Studio"}</h1>
            </div>
            <ul class="nav-entries">
                { for entries.iter().map(|(id, label)| {
                    let is_active = props.active_section == Some(*id);
                    let onclick = {
                        let on_select = props.on_select.clone();
                        let id = *id;
                        Callback::from(move |_: MouseEvent| on_select.emit(id))
                    };
                    html! {
                        <li key={*id}>
                            <button
                                class={classes!("nav-entry", if is_active { "active" } else { "" })}
                                {onclick}
                            >
                                <span class="nav-dot"></span>
                                { *label }
                            </button>
                        </li>
                    }
                }) }
            </ul>
            <div class="nav-footer">
                <a
                    href={content::GITHUB_URL}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="nav-social"
                >
                    <svg class="nav-icon" fill="currentColor" viewBox="0 0 24 24" aria-hidden="true">
                        <path d="M12 2C6.48 2 2 6.48 2 12c0 4.42 2.87 8.17 6.84 9.49.5.09.66-.22.66-.48v-1.7c-2.78.6-3.37-1.34-3.37-1.34-.45-1.16-1.11-1.47-1.11-1.47-.91-.62.07-.6.07-.6 1 .07 1.53 1.03 1.53 1.03.9 1.53 2.34 1.09 2.91.83.09-.65.35-1.09.63-1.34-2.22-.25-4.56-1.11-4.56-4.95 0-1.09.39-1.98 1.03-2.68-.1-.25-.45-1.27.1-2.65 0 0 .84-.27 2.75 1.03A9.56 9.56 0 0 1 12 6.85c.85 0 1.71.11 2.5.34 1.91-1.3 2.75-1.03 2.75-1.03.55 1.38.2 2.4.1 2.65.64.7 1.03 1.59 1.03 2.68 0 3.85-2.34 4.7-4.57 4.94.36.31.68.92.68 1.86v2.75c0 .27.16.58.67.48A10 10 0 0 0 22 12c0-5.52-4.48-10-10-10z"/>
                    </svg>
                    <span>{"GitHub"}</span>
                </a>
                <a href={content::CONTACT_CHANNELS[1].href} class="nav-social">
                    <svg class="nav-icon" fill="currentColor" viewBox="0 0 24 24" aria-hidden="true">
                        <path d="M20 4H4c-1.1 0-2 .9-2 2v12c0 1.1.9 2 2 2h16c1.1 0 2-.9 2-2V6c0-1.1-.9-2-2-2zm0 4l-8 5-8-5V6l8 5 8-5v2z"/>
                    </svg>
                    <span>{ content::CONTACT_CHANNELS[1].label }</span>
                </a>
            </div>
        </nav>
    }
}
