//! Light/dark theme state. The choice is persisted under one localStorage
//! key and reflected as a `dark-mode` class on the document element so the
//! page CSS can scope on it.

const STORAGE_KEY: &str = "dark_mode";
const DARK_CLASS: &str = "dark-mode";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    fn flag(self) -> &'static str {
        match self {
            Theme::Light => "false",
            Theme::Dark => "true",
        }
    }

    fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "true" => Some(Theme::Dark),
            "false" => Some(Theme::Light),
            _ => None,
        }
    }
}

/// Persisted choice first, then the OS preference, then light.
pub fn initial_theme() -> Theme {
    if let Some(stored) = stored_theme() {
        return stored;
    }
    if prefers_dark() {
        Theme::Dark
    } else {
        Theme::Light
    }
}

fn stored_theme() -> Option<Theme> {
    let flag = web_sys::window()?
        .local_storage()
        .ok()
        .flatten()?
        .get_item(STORAGE_KEY)
        .ok()
        .flatten()?;
    Theme::from_flag(&flag)
}

fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Reflect the theme onto the document element class list.
pub fn apply(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.document_element());
    if let Some(root) = root {
        let classes = root.class_list();
        let result = if theme.is_dark() {
            classes.add_1(DARK_CLASS)
        } else {
            classes.remove_1(DARK_CLASS)
        };
        if result.is_err() {
            log::warn!("failed to update document theme class");
        }
    }
}

/// Write the choice back so it survives the session.
pub fn persist(theme: Theme) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if storage.set_item(STORAGE_KEY, theme.flag()).is_err() {
                log::warn!("failed to persist theme preference");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_toggle_round_trips() {
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn flag_round_trips() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_flag(theme.flag()), Some(theme));
        }
        assert_eq!(Theme::from_flag("yes"), None);
        assert_eq!(Theme::from_flag(""), None);
    }

    #[test]
    fn dark_flag_matches_persisted_convention() {
        assert_eq!(Theme::Dark.flag(), "true");
        assert_eq!(Theme::Light.flag(), "false");
    }
}
