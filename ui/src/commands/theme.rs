use crate::cli::ThemeCommand;
use crate::error::AppResult;
use crate::theme::validation::ThemeKeyValidator;
use crate::theme::{Document, ThemeManager, ThemeStorage, registry};
use std::io::Write;

/// Run one `folio theme` subcommand against an initialized session.
pub fn run<S: ThemeStorage>(
    command: ThemeCommand,
    manager: &mut ThemeManager<S, Document>,
    out: &mut dyn Write,
) -> AppResult<()> {
    manager.initialize();

    match command {
        ThemeCommand::Show => {}
        ThemeCommand::List => return list(manager, out),
        ThemeCommand::Css => return css(manager.surface(), out),
        ThemeCommand::Set { key } => {
            let id = ThemeKeyValidator.parse(&key)?;
            manager.set_theme_id(id);
        }
        ThemeCommand::Mode { mode } => manager.set_mode(mode),
        ThemeCommand::Accent { accent } => manager.set_accent(accent),
        ThemeCommand::Style { style } => manager.set_style(style),
        ThemeCommand::Toggle => manager.toggle_mode(),
    }

    show(manager, out)
}

fn show<S: ThemeStorage>(manager: &ThemeManager<S, Document>, out: &mut dyn Write) -> AppResult<()> {
    writeln!(out, "theme:  {}", manager.current_theme())?;
    writeln!(out, "mode:   {}", manager.mode())?;
    writeln!(out, "accent: {}", manager.accent())?;
    writeln!(out, "style:  {}", manager.style())?;
    Ok(())
}

fn list<S: ThemeStorage>(manager: &ThemeManager<S, Document>, out: &mut dyn Write) -> AppResult<()> {
    let current = manager.theme_id();
    for theme in registry::all() {
        let marker = if theme.id == current { "*" } else { " " };
        writeln!(
            out,
            "{marker} {:<13} background {}  primary {}",
            theme.key(),
            theme.colors.background.hex(),
            theme.colors.primary.hex()
        )?;
    }
    Ok(())
}

fn css(document: &Document, out: &mut dyn Write) -> AppResult<()> {
    writeln!(out, "{}", document.html_open_tag())?;
    for tag in document.meta_tags() {
        writeln!(out, "{tag}")?;
    }
    write!(out, "{}", document.to_css())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::theme::{MemoryStorage, Mode};

    fn run_to_string(
        command: ThemeCommand,
        manager: &mut ThemeManager<MemoryStorage, Document>,
    ) -> AppResult<String> {
        let mut out = Vec::new();
        run(command, manager, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_show_defaults() {
        let mut manager = ThemeManager::new(MemoryStorage::new(), Document::new());
        let text = run_to_string(ThemeCommand::Show, &mut manager).unwrap();
        assert!(text.contains("theme:  dark-blue"));
        assert!(text.contains("style:  default"));
    }

    #[test]
    fn test_list_marks_current() {
        let mut manager = ThemeManager::new(MemoryStorage::new(), Document::new());
        let text = run_to_string(ThemeCommand::List, &mut manager).unwrap();
        assert_eq!(text.lines().count(), 6);
        assert!(text.contains("* dark-blue"));
        assert!(text.contains("  light-green"));
    }

    #[test]
    fn test_set_rejects_unknown_key() {
        let mut manager = ThemeManager::new(MemoryStorage::new(), Document::new());
        let err = run_to_string(
            ThemeCommand::Set {
                key: "dark-orange".to_string(),
            },
            &mut manager,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Theme(ref msg) if msg.contains("orange")));
        assert_eq!(manager.current_theme(), "dark-blue");
    }

    #[test]
    fn test_mode_then_css() {
        let mut manager = ThemeManager::new(MemoryStorage::new(), Document::new());
        run_to_string(ThemeCommand::Mode { mode: Mode::Light }, &mut manager).unwrap();

        let css = run_to_string(ThemeCommand::Css, &mut manager).unwrap();
        assert!(css.starts_with("<html class=\"style-default\""));
        assert!(css.contains("--background: 255 255 255;"));
        assert!(css.contains("<meta name=\"theme-color\" content=\"#ffffff\">"));
    }
}
