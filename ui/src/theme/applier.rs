use crate::theme::document::DocumentSurface;
use crate::theme::registry;
use crate::theme::types::{Mode, Style, Theme, ThemeId};

pub const DARK_CLASS: &str = "dark";
pub const META_THEME_COLOR: &str = "theme-color";
pub const META_NAVBUTTON_COLOR: &str = "msapplication-navbutton-color";
pub const META_STATUS_BAR_STYLE: &str = "apple-mobile-web-app-status-bar-style";
const STATUS_BAR_STYLE: &str = "black-translucent";

/// Project a theme and style onto the surface.
///
/// Returns `false` without touching the surface when `key` names no theme.
/// Applying the same pair twice leaves the surface as after the first call.
pub fn apply(surface: &mut dyn DocumentSurface, key: &str, style: Style) -> bool {
    match registry::lookup_key(key) {
        Some(theme) => {
            write_theme(surface, theme, style);
            true
        }
        None => {
            log::debug!("Ignoring unknown theme key '{key}'");
            false
        }
    }
}

pub fn apply_theme(surface: &mut dyn DocumentSurface, id: ThemeId, style: Style) {
    write_theme(surface, registry::lookup(&id), style);
}

fn write_theme(surface: &mut dyn DocumentSurface, theme: &Theme, style: Style) {
    for (role, rgb) in theme.colors.iter() {
        surface.set_property(&role.css_variable(), &rgb.to_string());
    }

    match theme.mode() {
        Mode::Dark => surface.add_class(DARK_CLASS),
        Mode::Light => surface.remove_class(DARK_CLASS),
    }

    surface.set_attribute("data-mode", theme.mode().as_str());
    surface.set_attribute("data-accent", theme.accent().as_str());
    surface.set_attribute("data-style", style.as_str());

    for other in Style::ALL {
        surface.remove_class(&other.class_name());
    }
    surface.add_class(&style.class_name());

    let chrome = registry::browser_color(theme);
    surface.set_meta(META_THEME_COLOR, &chrome);
    surface.set_meta(META_NAVBUTTON_COLOR, &chrome);
    surface.set_meta(META_STATUS_BAR_STYLE, STATUS_BAR_STYLE);

    log::debug!("Applied theme {} with style {}", theme.key(), style);
}
