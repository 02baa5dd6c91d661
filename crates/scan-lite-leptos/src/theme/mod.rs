//! Theme plugin - stylesheets, theme state and the component set built on it

mod components;

pub use components::{Button, Card, Icon, InputText, Message, Severity};

use crate::bootstrap::{AppContext, Plugin};
use crate::error::BootstrapError;
use leptos::prelude::*;
use web_sys::Document;

/// Element id of the theme stylesheet link
pub const THEME_LINK_ID: &str = "scan-lite-theme";
/// Element id of the icon stylesheet link
pub const ICONS_LINK_ID: &str = "scan-lite-icons";

/// Available themes
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    LaraLightBlue,
    LaraDarkBlue,
}

impl Theme {
    /// Directory name under the theme base path
    pub fn dir_name(&self) -> &'static str {
        match self {
            Theme::LaraLightBlue => "lara-light-blue",
            Theme::LaraDarkBlue => "lara-dark-blue",
        }
    }

    pub fn href(&self, base: &str) -> String {
        format!("{}/{}/theme.css", base.trim_end_matches('/'), self.dir_name())
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::LaraLightBlue => Theme::LaraDarkBlue,
            Theme::LaraDarkBlue => Theme::LaraLightBlue,
        }
    }

    /// Icon shown on the toggle button (the theme it switches to)
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::LaraLightBlue => "moon",
            Theme::LaraDarkBlue => "sun",
        }
    }

    pub(crate) fn from_query(value: &str) -> Option<Self> {
        match value {
            "light" | "lara-light-blue" => Some(Theme::LaraLightBlue),
            "dark" | "lara-dark-blue" => Some(Theme::LaraDarkBlue),
            _ => None,
        }
    }
}

/// Reactive theme state shared through context
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub theme: RwSignal<Theme>,
    base: StoredValue<String>,
}

impl ThemeState {
    pub fn new(theme: Theme, base: String) -> Self {
        Self {
            theme: RwSignal::new(theme),
            base: StoredValue::new(base),
        }
    }

    pub fn toggle(&self) {
        self.theme.update(|t| *t = t.toggled());
    }

    pub fn href(&self) -> String {
        let theme = self.theme.get();
        self.base.with_value(|base| theme.href(base))
    }
}

/// Hook to access theme state from context
pub fn use_theme() -> ThemeState {
    expect_context::<ThemeState>()
}

/// Installs the theme and icon stylesheets and provides [`ThemeState`]
#[derive(Clone, Debug)]
pub struct ThemePlugin {
    theme: Theme,
    theme_base: String,
    icons_href: String,
}

impl ThemePlugin {
    pub fn new(theme: Theme, theme_base: impl Into<String>, icons_href: impl Into<String>) -> Self {
        Self {
            theme,
            theme_base: theme_base.into(),
            icons_href: icons_href.into(),
        }
    }
}

impl Plugin for ThemePlugin {
    fn name(&self) -> &'static str {
        "theme"
    }

    fn install(&self, ctx: &mut AppContext) -> Result<(), BootstrapError> {
        ensure_stylesheet(ctx.document(), THEME_LINK_ID, &self.theme.href(&self.theme_base))?;
        ensure_stylesheet(ctx.document(), ICONS_LINK_ID, &self.icons_href)?;
        log::debug!("[Theme] Installed {}", self.theme.dir_name());
        Ok(())
    }

    fn wrap(&self, children: Children) -> AnyView {
        let state = ThemeState::new(self.theme, self.theme_base.clone());
        provide_context(state);

        // Swap the stylesheet whenever the theme changes
        Effect::new(move |_| {
            let href = state.href();
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                if let Err(e) = ensure_stylesheet(&document, THEME_LINK_ID, &href) {
                    log::warn!("[Theme] Could not switch stylesheet: {}", e);
                }
            }
        });

        children()
    }
}

/// Insert `<link rel="stylesheet" id=.. href=..>` into `<head>`, or point an
/// existing link with that id at `href`.
pub fn ensure_stylesheet(document: &Document, id: &str, href: &str) -> Result<(), BootstrapError> {
    if let Some(existing) = document.get_element_by_id(id) {
        if existing.get_attribute("href").as_deref() != Some(href) {
            existing
                .set_attribute("href", href)
                .map_err(BootstrapError::dom)?;
        }
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| BootstrapError::Dom("document has no <head>".to_string()))?;
    let link = document
        .create_element("link")
        .map_err(BootstrapError::dom)?;
    link.set_id(id);
    link.set_attribute("rel", "stylesheet")
        .map_err(BootstrapError::dom)?;
    link.set_attribute("href", href)
        .map_err(BootstrapError::dom)?;
    head.append_child(&link)
        .map_err(BootstrapError::dom)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_href() {
        assert_eq!(
            Theme::LaraLightBlue.href("/themes"),
            "/themes/lara-light-blue/theme.css"
        );
        assert_eq!(
            Theme::LaraDarkBlue.href("/assets/themes/"),
            "/assets/themes/lara-dark-blue/theme.css"
        );
    }

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Theme::LaraLightBlue.toggled(), Theme::LaraDarkBlue);
        assert_eq!(Theme::LaraLightBlue.toggled().toggled(), Theme::LaraLightBlue);
    }

    #[test]
    fn test_from_query() {
        assert_eq!(Theme::from_query("dark"), Some(Theme::LaraDarkBlue));
        assert_eq!(Theme::from_query("lara-light-blue"), Some(Theme::LaraLightBlue));
        assert_eq!(Theme::from_query(""), None);
    }
}
