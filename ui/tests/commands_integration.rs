use folio::AppError;
use folio::cli::{Commands, ThemeCommand};
use folio::commands;
use folio::config::{AppConfig, ConfigLoadResult, load_config};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_config(dir: &Path) -> Box<AppConfig> {
    let projects = dir.join("projects");
    fs::create_dir_all(&projects).unwrap();
    fs::write(
        projects.join("folio.mdx"),
        "+++\ntitle = \"Folio\"\ndate = 2025-03-14\nfeatured = true\n+++\nThis site.\n",
    )
    .unwrap();

    let config_path = dir.join("config.toml");
    fs::write(
        &config_path,
        format!(
            "[theme]\nstate_file = '{}'\n\n[content]\nprojects_dir = '{}'\n",
            dir.join("state.toml").display(),
            projects.display()
        ),
    )
    .unwrap();

    match load_config(Some(&config_path)) {
        ConfigLoadResult::Success(config) => config,
        other => panic!("config did not load: {other:?}"),
    }
}

async fn run(command: Commands, config: &AppConfig) -> Result<String, AppError> {
    let mut out = Vec::new();
    commands::run(command, config, &mut out).await?;
    Ok(String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn theme_selection_is_written_to_the_state_file() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());

    let shown = run(
        Commands::Theme(ThemeCommand::Set {
            key: "light-green".to_string(),
        }),
        &config,
    )
    .await
    .unwrap();
    assert!(shown.contains("theme:  light-green"));

    let state = fs::read_to_string(dir.path().join("state.toml")).unwrap();
    assert!(state.contains("theme = \"light-green\""));

    let shown = run(Commands::Theme(ThemeCommand::Toggle), &config)
        .await
        .unwrap();
    assert!(shown.contains("theme:  dark-green"));
}

#[tokio::test]
async fn projects_are_listed_from_the_configured_dir() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());

    let listing = run(Commands::Projects { featured: true }, &config)
        .await
        .unwrap();
    assert!(listing.contains("2025-03-14 ★ folio"));

    let page = run(
        Commands::Project {
            slug: "folio".to_string(),
        },
        &config,
    )
    .await
    .unwrap();
    assert!(page.ends_with("This site.\n"));

    let missing = run(
        Commands::Project {
            slug: "gone".to_string(),
        },
        &config,
    )
    .await;
    assert!(matches!(missing, Err(AppError::Content(_))));
}

#[tokio::test]
async fn init_writes_default_config_once() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());
    let target = dir.path().join("fresh");

    let out = run(
        Commands::Init {
            dir: Some(target.clone()),
        },
        &config,
    )
    .await
    .unwrap();
    assert!(out.contains("config.toml"));

    let written = fs::read_to_string(target.join("config.toml")).unwrap();
    assert!(written.contains("[spotify]"));

    fs::write(target.join("config.toml"), "# mine\n").unwrap();
    run(Commands::Init { dir: Some(target.clone()) }, &config)
        .await
        .unwrap();
    assert_eq!(
        fs::read_to_string(target.join("config.toml")).unwrap(),
        "# mine\n"
    );
}
