use crate::error::AppResult;
use server::content::{Project, ProjectStore};
use std::io::Write;

pub fn list(store: &ProjectStore, featured_only: bool, out: &mut dyn Write) -> AppResult<()> {
    let projects = if featured_only {
        store.featured()?
    } else {
        store.all()?
    };

    if projects.is_empty() {
        writeln!(out, "No projects in {}", store.dir().display())?;
        return Ok(());
    }

    for project in &projects {
        let meta = &project.meta;
        let star = if meta.featured { "★" } else { " " };
        writeln!(out, "{} {star} {:<20} {}", meta.date, meta.slug, meta.title)?;
        if !meta.description.is_empty() {
            writeln!(out, "               {}", meta.description)?;
        }
    }
    Ok(())
}

pub fn show(store: &ProjectStore, slug: &str, out: &mut dyn Write) -> AppResult<()> {
    let project = store.by_slug(slug)?;
    write_project(&project, out)
}

fn write_project(project: &Project, out: &mut dyn Write) -> AppResult<()> {
    let meta = &project.meta;
    writeln!(out, "# {}", meta.title)?;
    writeln!(out)?;
    writeln!(out, "date:  {}", meta.date)?;
    if !meta.tags.is_empty() {
        writeln!(out, "tags:  {}", meta.tags.join(", "))?;
    }
    for (label, link) in [("repo", &meta.github), ("demo", &meta.demo), ("image", &meta.image)] {
        if let Some(link) = link {
            writeln!(out, "{label}:  {link}")?;
        }
    }
    writeln!(out)?;
    write!(out, "{}", project.content)?;
    Ok(())
}
