use crate::theme::applier;
use crate::theme::document::DocumentSurface;
use crate::theme::registry::{DEFAULT_STYLE, DEFAULT_THEME_ID};
use crate::theme::storage::{STYLE_KEY, THEME_KEY, ThemeStorage};
use crate::theme::types::{Accent, Mode, Style, ThemeId};
use crate::theme::validation::{StyleValidator, ThemeKeyValidator, ThemeValidationError};

/// Theme selection for one session. Replaced as a whole on every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    pub theme: ThemeId,
    pub style: Style,
    /// Set once persisted values have been read and applied.
    pub mounted: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME_ID,
            style: DEFAULT_STYLE,
            mounted: false,
        }
    }
}

/// Owns the session's theme state together with the storage it persists to
/// and the surface it renders onto. Construct one per session and pass it
/// by reference to whatever needs to read or change the theme.
pub struct ThemeManager<S, D> {
    state: SessionState,
    storage: S,
    surface: D,
    key_validator: ThemeKeyValidator,
    style_validator: StyleValidator,
}

impl<S: ThemeStorage, D: DocumentSurface> ThemeManager<S, D> {
    /// Defaults only. Nothing is read or applied until [`initialize`](Self::initialize).
    pub fn new(storage: S, surface: D) -> Self {
        Self {
            state: SessionState::default(),
            storage,
            surface,
            key_validator: ThemeKeyValidator,
            style_validator: StyleValidator,
        }
    }

    /// Restore the persisted theme and style, apply them and mark the session
    /// mounted. Later calls return the current state unchanged.
    pub fn initialize(&mut self) -> SessionState {
        if self.state.mounted {
            return self.state;
        }

        let theme = self.restore(THEME_KEY, DEFAULT_THEME_ID, |value| {
            self.key_validator.parse(value)
        });
        let style = self.restore(STYLE_KEY, DEFAULT_STYLE, |value| {
            self.style_validator.parse(value)
        });

        applier::apply_theme(&mut self.surface, theme, style);
        self.state = SessionState {
            theme,
            style,
            mounted: true,
        };

        log::info!("Theme session initialized with {theme} ({style})");
        self.state
    }

    fn restore<T>(
        &self,
        key: &str,
        fallback: T,
        parse: impl FnOnce(&str) -> Result<T, ThemeValidationError>,
    ) -> T {
        match self.storage.get(key) {
            Ok(Some(value)) => parse(&value).unwrap_or_else(|e| {
                log::warn!("Ignoring persisted {key} '{value}': {e}");
                fallback
            }),
            Ok(None) => {
                log::debug!("No persisted {key}, using default");
                fallback
            }
            Err(e) => {
                log::warn!("Could not read persisted {key}: {e}");
                fallback
            }
        }
    }

    fn persist(&mut self, key: &str, value: &str) {
        if let Err(e) = self.storage.set(key, value) {
            log::warn!("Could not persist {key}={value}: {e}");
        }
    }

    /// Switch to the theme named by `key`. Unknown keys change nothing.
    pub fn set_theme(&mut self, key: &str) -> bool {
        match self.key_validator.parse(key) {
            Ok(id) => {
                self.set_theme_id(id);
                true
            }
            Err(e) => {
                log::warn!("Rejected theme '{key}': {e}");
                false
            }
        }
    }

    pub fn set_theme_id(&mut self, id: ThemeId) {
        self.persist(THEME_KEY, &id.key());
        applier::apply_theme(&mut self.surface, id, self.state.style);
        self.state = SessionState {
            theme: id,
            ..self.state
        };
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.set_theme_id(self.state.theme.with_mode(mode));
    }

    pub fn set_accent(&mut self, accent: Accent) {
        self.set_theme_id(self.state.theme.with_accent(accent));
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.state.theme.mode.toggled());
    }

    pub fn set_style(&mut self, style: Style) {
        self.persist(STYLE_KEY, style.as_str());
        applier::apply_theme(&mut self.surface, self.state.theme, style);
        self.state = SessionState {
            style,
            ..self.state
        };
    }

    pub fn set_style_key(&mut self, value: &str) -> bool {
        match self.style_validator.parse(value) {
            Ok(style) => {
                self.set_style(style);
                true
            }
            Err(e) => {
                log::warn!("Rejected style '{value}': {e}");
                false
            }
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn current_theme(&self) -> String {
        self.state.theme.key()
    }

    pub fn theme_id(&self) -> ThemeId {
        self.state.theme
    }

    pub fn mode(&self) -> Mode {
        self.state.theme.mode
    }

    pub fn accent(&self) -> Accent {
        self.state.theme.accent
    }

    pub fn style(&self) -> Style {
        self.state.style
    }

    pub fn is_mounted(&self) -> bool {
        self.state.mounted
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Hand back the storage and surface, e.g. to start a new session on them.
    pub fn into_parts(self) -> (S, D) {
        (self.storage, self.surface)
    }
}
