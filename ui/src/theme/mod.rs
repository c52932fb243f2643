//! # Theme System Module
//!
//! Six palettes (dark or light, crossed with a purple, blue or green accent)
//! plus an orthogonal style variant, projected onto a document root as CSS
//! custom properties, classes, data attributes and browser chrome meta tags.
//!
//! ## Architecture
//!
//! - **[`registry`]** - Compiled-in palettes and the default selection
//! - **[`applier`]** - Writes a palette and style onto a [`DocumentSurface`]
//! - **[`ThemeManager`]** - Session state, restored once from storage and
//!   persisted on every change
//! - **[`storage`]** - Key-value persistence (in memory or a TOML file)
//! - **[`validation`]** - Checks for keys and styles read from storage or typed by the user
//!
//! ## Basic Usage
//!
//! ```no_run
//! use folio::theme::{Document, MemoryStorage, ThemeManager};
//!
//! let mut manager = ThemeManager::new(MemoryStorage::new(), Document::new());
//! manager.initialize();
//! manager.set_theme("light-green");
//! manager.toggle_mode();
//! println!("{}", manager.surface().to_css());
//! ```
//!
//! ## Error Handling and Fallbacks
//!
//! Nothing here fails loudly. Unknown or stale persisted values, and storage
//! that cannot be read at all, fall back to `dark-blue` with the `default`
//! style. Failed writes are logged and the in-memory state still changes.

pub mod applier;
pub mod document;
pub mod manager;
pub mod registry;
pub mod storage;
pub mod types;
pub mod validation;

pub use document::{Document, DocumentSurface};
pub use manager::{SessionState, ThemeManager};
pub use storage::{FileStorage, MemoryStorage, StorageError, ThemeStorage};
pub use types::{Accent, ColorRole, Mode, Rgb, Style, Theme, ThemeId};
