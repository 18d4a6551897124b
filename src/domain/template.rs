//! Template system for post and page generation

use crate::error::{BlogError, Result};
use regex::{Captures, Regex};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

fn placeholder_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\{([A-Z_]+)\}").unwrap())
}

// Built-in template constants
const POST_TEMPLATE: &str = "---\ntitle: {TITLE}\ndate: {DATE}\n---\n\n# {TITLE}\n\nWrite your post content here...\n";
const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{TITLE} | {SITE_NAME}</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 800px;
            margin: 0 auto;
            padding: 2rem 1rem;
            background-color: #fafafa;
        }
        nav {
            display: flex;
            gap: 1rem;
            margin-top: 1rem;
        }
        nav a {
            text-decoration: none;
            color: #0366d6;
            font-weight: 500;
        }
        h2 {
            font-size: 1.8rem;
            margin: 1.5rem 0 1rem;
            border-bottom: 1px solid #eee;
            padding-bottom: 0.5rem;
        }
        footer {
            margin-top: 3rem;
            padding-top: 1rem;
            border-top: 1px solid #eee;
            color: #666;
            font-size: 0.9rem;
        }
    </style>
    <!-- Include the component loader script -->
    <script src="{JS_PATH}include.js"></script>
</head>
<body>
    <!-- Include the header component -->
    <div data-include="{COMPONENT_PATH}header.html"></div>

    <main>
        <h2>{TITLE}</h2>

        <section>
            <p>{DESCRIPTION}</p>

            <!-- Your content goes here -->
            <p>This is a new page created on {ISO_DATE}.</p>
            <p>Replace this placeholder content with your actual content.</p>
        </section>
    </main>

    <!-- Include the footer component -->
    <div data-include="{COMPONENT_PATH}footer.html"></div>
</body>
</html>
"#;

pub const POST_TEMPLATE_NAME: &str = "post.md";
pub const PAGE_TEMPLATE_NAME: &str = "page.html";

/// Template for post and page generation
#[derive(Debug)]
pub struct Template {
    content: String,
}

impl Template {
    /// Create template from built-in template name
    pub fn from_builtin(template_name: &str) -> Result<Self> {
        let content = match template_name {
            POST_TEMPLATE_NAME => POST_TEMPLATE,
            PAGE_TEMPLATE_NAME => PAGE_TEMPLATE,
            _ => {
                return Err(BlogError::Config(format!(
                    "Unknown template: {}",
                    template_name
                )))
            }
        };

        Ok(Template {
            content: content.to_string(),
        })
    }

    /// Create template from custom template file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            BlogError::Config(format!("Failed to read template file {}: {}", path.display(), e))
        })?;

        Ok(Template { content })
    }

    /// Substitute `{NAME}` placeholders in a single pass, so substituted
    /// values are never expanded again. Unknown placeholders are left as is.
    pub fn render(&self, vars: &[(&str, &str)]) -> String {
        placeholder_regex()
            .replace_all(&self.content, |captures: &Captures| {
                vars.iter()
                    .find(|(name, _)| *name == &captures[1])
                    .map(|(_, value)| value.to_string())
                    .unwrap_or_else(|| captures[0].to_string())
            })
            .into_owned()
    }
}

/// Load template from `.blogctl/templates/` or fall back to built-in
pub fn load_template(site_root: &Path, template_name: &str) -> Result<Template> {
    let custom_path = site_root
        .join(".blogctl")
        .join("templates")
        .join(template_name);

    if custom_path.exists() {
        Template::from_file(&custom_path)
    } else {
        Template::from_builtin(template_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_render_post_template() {
        let template = Template::from_builtin(POST_TEMPLATE_NAME).unwrap();
        let rendered = template.render(&[("TITLE", "Hello World"), ("DATE", "January 17, 2025")]);

        assert_eq!(
            rendered,
            "---\ntitle: Hello World\ndate: January 17, 2025\n---\n\n# Hello World\n\nWrite your post content here...\n"
        );
    }

    #[test]
    fn test_render_page_template() {
        let template = Template::from_builtin(PAGE_TEMPLATE_NAME).unwrap();
        let rendered = template.render(&[
            ("TITLE", "About"),
            ("SITE_NAME", "My Blog"),
            ("DESCRIPTION", "Who I am."),
            ("ISO_DATE", "2025-01-17"),
            ("JS_PATH", "../js/"),
            ("COMPONENT_PATH", "../components/"),
        ]);

        assert!(rendered.contains("<title>About | My Blog</title>"));
        assert!(rendered.contains("<script src=\"../js/include.js\"></script>"));
        assert!(rendered.contains("data-include=\"../components/header.html\""));
        assert!(rendered.contains("data-include=\"../components/footer.html\""));
        assert!(rendered.contains("<p>Who I am.</p>"));
        assert!(rendered.contains("created on 2025-01-17"));
        // CSS braces are not placeholders
        assert!(rendered.contains("body {"));
    }

    #[test]
    fn test_render_preserves_unknown_variables() {
        let template = Template {
            content: "{TITLE} {UNKNOWN}".to_string(),
        };
        let rendered = template.render(&[("TITLE", "Post")]);
        assert_eq!(rendered, "Post {UNKNOWN}");
    }

    #[test]
    fn test_render_does_not_expand_substituted_values() {
        let template = Template::from_builtin(POST_TEMPLATE_NAME).unwrap();
        let rendered = template.render(&[
            ("TITLE", "Notes on {DATE} and {SITE_NAME}"),
            ("DATE", "January 17, 2025"),
        ]);

        assert_eq!(
            rendered,
            "---\ntitle: Notes on {DATE} and {SITE_NAME}\ndate: January 17, 2025\n---\n\n# Notes on {DATE} and {SITE_NAME}\n\nWrite your post content here...\n"
        );
    }

    #[test]
    fn test_load_builtin_invalid() {
        let result = Template::from_builtin("invalid.md");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown template"));
    }

    #[test]
    fn test_load_custom_template() {
        let temp = TempDir::new().unwrap();
        let templates_dir = temp.path().join(".blogctl").join("templates");
        fs::create_dir_all(&templates_dir).unwrap();
        fs::write(templates_dir.join(POST_TEMPLATE_NAME), "---\ntitle: {TITLE}\n---\n").unwrap();

        let template = load_template(temp.path(), POST_TEMPLATE_NAME).unwrap();
        assert_eq!(template.render(&[("TITLE", "Custom")]), "---\ntitle: Custom\n---\n");
    }

    #[test]
    fn test_load_template_falls_back_to_builtin() {
        let temp = TempDir::new().unwrap();
        let template = load_template(temp.path(), POST_TEMPLATE_NAME).unwrap();
        assert!(template.content.contains("# {TITLE}"));
    }

    #[test]
    fn test_from_file_missing_file() {
        let result = Template::from_file(Path::new("/nonexistent/template.md"));
        assert!(result.is_err());
    }
}
