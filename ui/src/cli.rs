use crate::theme::{Accent, Mode, Style};
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Folio - theme, now playing and project tools for the portfolio site
#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(about = "Theme engine, Spotify now-playing proxy and project content for the portfolio site")]
#[command(version)]
pub struct Cli {
    /// Config file to use instead of the discovered config.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show or change the persisted theme
    #[command(subcommand)]
    Theme(ThemeCommand),
    /// Show what is playing on Spotify
    NowPlaying {
        /// Keep polling and print every change
        #[arg(short, long)]
        watch: bool,
        /// Open the song in the browser
        #[arg(short, long)]
        open: bool,
    },
    /// Serve the now-playing proxy route
    Serve {
        /// Address to listen on, overrides [server] bind
        #[arg(short, long)]
        bind: Option<SocketAddr>,
    },
    /// List projects, newest first
    Projects {
        /// Only featured projects
        #[arg(short, long)]
        featured: bool,
    },
    /// Print one project
    Project {
        /// Project slug, with or without .mdx
        slug: String,
    },
    /// Write the default config.toml to the config directory
    Init {
        /// Directory to write to instead of ~/.config/folio
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

#[derive(Debug, Subcommand)]
pub enum ThemeCommand {
    /// Print the current theme and style
    Show,
    /// List every theme
    List,
    /// Select a theme by key, e.g. dark-green
    Set {
        key: String,
    },
    /// Keep the accent, change the mode
    Mode {
        mode: Mode,
    },
    /// Keep the mode, change the accent
    Accent {
        accent: Accent,
    },
    /// Select the style variant
    Style {
        style: Style,
    },
    /// Switch between dark and light
    Toggle,
    /// Print the CSS variables, <html> tag and meta tags for the current theme
    Css,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_theme_subcommands() {
        let cli = Cli::try_parse_from(["folio", "theme", "mode", "light"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Theme(ThemeCommand::Mode { mode: Mode::Light })
        ));

        let cli = Cli::try_parse_from(["folio", "-v", "theme", "style", "pixelated"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Theme(ThemeCommand::Style {
                style: Style::Pixelated
            })
        ));

        assert!(Cli::try_parse_from(["folio", "theme", "accent", "orange"]).is_err());
    }

    #[test]
    fn test_parse_now_playing_flags() {
        let cli = Cli::try_parse_from(["folio", "now-playing", "--watch"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::NowPlaying {
                watch: true,
                open: false
            }
        ));
    }

    #[test]
    fn test_parse_serve_bind() {
        let cli = Cli::try_parse_from(["folio", "serve", "--bind", "0.0.0.0:8080"]).unwrap();
        match cli.command {
            Commands::Serve { bind } => {
                assert_eq!(bind, Some("0.0.0.0:8080".parse().unwrap()));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
