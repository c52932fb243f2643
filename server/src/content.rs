//! Project pages: `.mdx` files with a TOML front-matter header.
//!
//! A project file looks like
//!
//! ```text
//! +++
//! title = "Folio"
//! description = "This site"
//! date = 2025-03-14
//! tags = ["rust", "web"]
//! featured = true
//! +++
//!
//! Body in MDX...
//! ```
//!
//! The body is returned verbatim; rendering it is the site's business.

use crate::common::ContentError;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const EXTENSION: &str = "mdx";
const DELIMITER: &str = "+++";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectMeta {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub tags: Vec<String>,
    pub image: Option<String>,
    pub github: Option<String>,
    pub demo: Option<String>,
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub meta: ProjectMeta,
    pub content: String,
}

#[derive(Debug, Deserialize)]
struct FrontMatter {
    title: String,
    #[serde(default)]
    description: String,
    date: toml::Value,
    #[serde(default)]
    tags: Vec<String>,
    image: Option<String>,
    github: Option<String>,
    demo: Option<String>,
    #[serde(default)]
    featured: bool,
}

/// Reads projects from a directory, `content/projects` by default.
#[derive(Debug, Clone)]
pub struct ProjectStore {
    dir: PathBuf,
}

impl ProjectStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Slugs of every `.mdx` file, sorted. A missing directory has none.
    pub fn slugs(&self) -> Result<Vec<String>, ContentError> {
        if !self.dir.exists() {
            log::debug!("Projects directory {} does not exist", self.dir.display());
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.dir).map_err(|source| ContentError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let mut slugs = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|source| ContentError::Io {
                    path: self.dir.clone(),
                    source,
                })?
                .path();

            if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some(EXTENSION) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    slugs.push(stem.to_string());
                }
            }
        }

        slugs.sort();
        Ok(slugs)
    }

    /// Load one project. The slug may carry the `.mdx` extension.
    pub fn by_slug(&self, slug: &str) -> Result<Project, ContentError> {
        let slug = slug.strip_suffix(".mdx").unwrap_or(slug);
        if slug.is_empty() || slug.contains(['/', '\\']) || slug.starts_with('.') {
            return Err(ContentError::NotFound {
                slug: slug.to_string(),
            });
        }

        let path = self.dir.join(format!("{slug}.{EXTENSION}"));
        if !path.is_file() {
            return Err(ContentError::NotFound {
                slug: slug.to_string(),
            });
        }

        let text = fs::read_to_string(&path).map_err(|source| ContentError::Io {
            path: path.clone(),
            source,
        })?;

        parse_project(slug, &path, &text)
    }

    /// Every project, newest first.
    pub fn all(&self) -> Result<Vec<Project>, ContentError> {
        let mut projects = self
            .slugs()?
            .iter()
            .map(|slug| self.by_slug(slug))
            .collect::<Result<Vec<_>, _>>()?;

        projects.sort_by(|a, b| b.meta.date.cmp(&a.meta.date));
        Ok(projects)
    }

    pub fn featured(&self) -> Result<Vec<Project>, ContentError> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|project| project.meta.featured)
            .collect())
    }
}

fn split_front_matter(text: &str) -> Option<(&str, &str)> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let rest = text.trim_start_matches(['\r', '\n']);
    let rest = rest.strip_prefix(DELIMITER)?;
    let rest = rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            let front = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Some((front, body));
        }
        offset += line.len();
    }
    None
}

fn parse_project(slug: &str, path: &Path, text: &str) -> Result<Project, ContentError> {
    let (front, body) = split_front_matter(text).ok_or_else(|| ContentError::MissingFrontMatter {
        path: path.to_path_buf(),
    })?;

    let matter: FrontMatter = toml::from_str(front).map_err(|e| ContentError::FrontMatter {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let raw_date = match &matter.date {
        toml::Value::String(value) => value.clone(),
        toml::Value::Datetime(value) => value.to_string(),
        other => other.to_string(),
    };
    let date = NaiveDate::parse_from_str(raw_date.trim(), "%Y-%m-%d").map_err(|_| {
        ContentError::InvalidDate {
            path: path.to_path_buf(),
            value: raw_date.clone(),
        }
    })?;

    Ok(Project {
        meta: ProjectMeta {
            slug: slug.to_string(),
            title: matter.title,
            description: matter.description,
            date,
            tags: matter.tags,
            image: matter.image,
            github: matter.github,
            demo: matter.demo,
            featured: matter.featured,
        },
        content: body.trim_start_matches(['\r', '\n']).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::*;

    #[test]
    fn test_split_front_matter() {
        let text = "+++\ntitle = \"A\"\n+++\n\n# Body\n";
        let (front, body) = assert_some!(split_front_matter(text));
        assert_eq!(front, "title = \"A\"\n");
        assert_eq!(body, "\n# Body\n");
    }

    #[test]
    fn test_split_requires_closing_delimiter() {
        assert_none!(split_front_matter("+++\ntitle = \"A\"\n# Body\n"));
        assert_none!(split_front_matter("# Just a body\n"));
    }

    #[test]
    fn test_quoted_and_bare_dates() {
        let path = Path::new("p.mdx");
        let bare = "+++\ntitle = \"A\"\ndate = 2024-02-29\n+++\nbody";
        let quoted = "+++\ntitle = \"A\"\ndate = \"2024-02-29\"\n+++\nbody";

        let expected = assert_some!(NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(assert_ok!(parse_project("a", path, bare)).meta.date, expected);
        assert_eq!(assert_ok!(parse_project("a", path, quoted)).meta.date, expected);
    }

    #[test]
    fn test_invalid_date_is_reported() {
        let text = "+++\ntitle = \"A\"\ndate = \"yesterday\"\n+++\n";
        assert_matches!(
            parse_project("a", Path::new("a.mdx"), text),
            Err(ContentError::InvalidDate { .. })
        );
    }

    #[test]
    fn test_path_like_slugs_are_not_found() {
        let store = ProjectStore::new("content/projects");
        assert_matches!(store.by_slug("../secret"), Err(ContentError::NotFound { .. }));
        assert_matches!(store.by_slug(""), Err(ContentError::NotFound { .. }));
    }
}
