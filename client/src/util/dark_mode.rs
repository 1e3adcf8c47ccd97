//! Console theme preference.
//!
//! The sidebar toggle flips between light and dark. The choice is kept in
//! `localStorage` and mirrored onto `<html data-theme=..>`. Without a stored
//! choice the OS color-scheme preference decides. Server renders always use
//! the light theme; hydration applies the real one.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "console_dark_mode";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value for the `data-theme` attribute.
    #[must_use]
    pub fn attr(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Parse a stored preference. Unknown values are ignored.
    #[must_use]
    pub fn from_stored(raw: &str) -> Option<Self> {
        match raw {
            "true" | "dark" => Some(Self::Dark),
            "false" | "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[cfg(feature = "hydrate")]
    fn stored(self) -> &'static str {
        match self {
            Self::Light => "false",
            Self::Dark => "true",
        }
    }
}

/// Stored preference, else the OS preference.
pub fn read_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return Theme::Light;
        };
        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .and_then(|raw| Theme::from_stored(&raw));
        if let Some(theme) = stored {
            return theme;
        }
        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches());
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::Light
    }
}

pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(root) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = root.set_attribute("data-theme", theme.attr());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it and persist it.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, next.stored());
        }
    }
    next
}

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;
