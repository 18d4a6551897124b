//! Create page use case

use crate::domain::nav::{add_nav_link, NavUpdate};
use crate::domain::{load_template, PAGE_TEMPLATE_NAME};
use crate::error::{BlogError, Result};
use crate::infrastructure::{FileSystemRepository, SiteRepository};
use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone)]
pub struct CreatePageOptions {
    pub name: String,
    pub title: String,
    pub description: String,
    /// Page lives one directory below the site root
    pub subdirectory: bool,
}

/// Result of linking a page from the header component
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavLinkOutcome {
    Added(PathBuf),
    AlreadyLinked,
}

/// Service for creating HTML pages and linking them in the site header
pub struct CreatePageService {
    repository: FileSystemRepository,
}

impl CreatePageService {
    pub fn new(repository: FileSystemRepository) -> Self {
        CreatePageService { repository }
    }

    pub fn create(&self, options: &CreatePageOptions) -> Result<PathBuf> {
        self.create_on(options, Local::now().date_naive())
    }

    /// Write `<name>.html` at the site root.
    pub fn create_on(&self, options: &CreatePageOptions, today: NaiveDate) -> Result<PathBuf> {
        let name = page_name(&options.name)?;
        let config = self.repository.load_config()?;

        let (component_path, js_path) = if options.subdirectory {
            (format!("../{}/", config.components_dir), "../js/")
        } else {
            (format!("{}/", config.components_dir), "js/")
        };
        let iso_date = today.format("%Y-%m-%d").to_string();

        let template = load_template(self.repository.root(), PAGE_TEMPLATE_NAME)?;
        let content = template.render(&[
            ("TITLE", options.title.as_str()),
            ("SITE_NAME", config.site_name.as_str()),
            ("DESCRIPTION", options.description.as_str()),
            ("ISO_DATE", iso_date.as_str()),
            ("COMPONENT_PATH", component_path.as_str()),
            ("JS_PATH", js_path),
        ]);

        let path = self
            .repository
            .write_file(Path::new(&format!("{}.html", name)), &content)?;
        info!(path = %path.display(), "created page");

        Ok(path)
    }

    /// Add a link to the page after the last link in the header's `<nav>`.
    pub fn link_in_header(&self, name: &str, title: &str) -> Result<NavLinkOutcome> {
        let name = page_name(name)?;
        let config = self.repository.load_config()?;
        let header = Path::new(&config.components_dir).join("header.html");

        if !self.repository.file_exists(&header) {
            return Err(BlogError::Page(format!(
                "Header file not found: {}",
                self.repository.root().join(&header).display()
            )));
        }

        let content = self.repository.read_file(&header)?;
        match add_nav_link(&content, name, title)? {
            NavUpdate::Added(updated) => {
                let path = self.repository.root().join(&header);
                self.repository.write_file_atomic(&path, &updated)?;
                info!(path = %path.display(), page = name, "linked page in header");
                Ok(NavLinkOutcome::Added(path))
            }
            NavUpdate::AlreadyLinked => Ok(NavLinkOutcome::AlreadyLinked),
        }
    }
}

fn page_name(input: &str) -> Result<&str> {
    let name = input.trim();
    let name = name.strip_suffix(".html").unwrap_or(name);
    if name.is_empty() {
        return Err(BlogError::MissingArgument("page name".to_string()));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn options(subdirectory: bool) -> CreatePageOptions {
        CreatePageOptions {
            name: "about".to_string(),
            title: "About".to_string(),
            description: "Who writes this blog.".to_string(),
            subdirectory,
        }
    }

    fn service(temp: &TempDir) -> CreatePageService {
        CreatePageService::new(FileSystemRepository::new(temp.path().to_path_buf()))
    }

    #[test]
    fn creates_page_at_site_root() {
        let temp = TempDir::new().unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 1, 17).unwrap();

        let path = service(&temp).create_on(&options(false), today).unwrap();

        assert_eq!(path, temp.path().join("about.html"));
        let html = fs::read_to_string(path).unwrap();
        assert!(html.contains("<title>About | My Blog</title>"));
        assert!(html.contains("<script src=\"js/include.js\"></script>"));
        assert!(html.contains("data-include=\"components/header.html\""));
        assert!(html.contains("Who writes this blog."));
        assert!(html.contains("created on 2025-01-17"));
    }

    #[test]
    fn subdirectory_pages_reach_up_for_components() {
        let temp = TempDir::new().unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 1, 17).unwrap();

        let path = service(&temp).create_on(&options(true), today).unwrap();

        let html = fs::read_to_string(path).unwrap();
        assert!(html.contains("<script src=\"../js/include.js\"></script>"));
        assert!(html.contains("data-include=\"../components/footer.html\""));
    }

    #[test]
    fn links_page_in_header() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("components")).unwrap();
        fs::write(
            temp.path().join("components/header.html"),
            "<nav>\n        <a href=\"index.html\">Home</a>\n</nav>\n",
        )
        .unwrap();

        let outcome = service(&temp).link_in_header("about", "About").unwrap();
        assert_eq!(
            outcome,
            NavLinkOutcome::Added(temp.path().join("components/header.html"))
        );
        assert!(fs::read_to_string(temp.path().join("components/header.html"))
            .unwrap()
            .contains("<a href=\"about.html\">About</a>"));

        let again = service(&temp).link_in_header("about.html", "About").unwrap();
        assert_eq!(again, NavLinkOutcome::AlreadyLinked);
    }

    #[test]
    fn missing_header_is_a_page_error() {
        let temp = TempDir::new().unwrap();
        let result = service(&temp).link_in_header("about", "About");
        assert!(matches!(result, Err(BlogError::Page(_))));
    }

    #[test]
    fn blank_page_name_is_rejected() {
        let temp = TempDir::new().unwrap();
        let result = service(&temp).create_on(
            &CreatePageOptions {
                name: " ".to_string(),
                ..options(false)
            },
            NaiveDate::from_ymd_opt(2025, 1, 17).unwrap(),
        );
        assert!(matches!(result, Err(BlogError::MissingArgument(_))));
    }
}
