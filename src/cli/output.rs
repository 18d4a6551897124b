//! Output formatting utilities

use crate::application::{AddTagsReport, NavLinkOutcome};
use crate::infrastructure::Config;

/// Summary printed after adding tags.
pub fn format_tag_report(filename: &str, report: &AddTagsReport) -> String {
    if report.dry_run {
        return report.content.clone();
    }

    let mut output = if report.changed {
        format!("Updated tags for {}\n", filename)
    } else {
        format!("Tags already present in {}\n", filename)
    };
    output.push_str(&format!("Tags: {}\n", report.tags.join(", ")));
    output
}

/// Summary printed after linking a page in the header.
pub fn format_nav_outcome(title: &str, outcome: &NavLinkOutcome) -> String {
    match outcome {
        NavLinkOutcome::Added(_) => format!("Added link to '{}' in the header navigation.", title),
        NavLinkOutcome::AlreadyLinked => format!("Link to '{}' already exists in the header.", title),
    }
}

/// `key = value` lines for every config entry.
pub fn format_config(config: &Config) -> String {
    let created = config
        .created
        .map(|created| created.to_rfc3339())
        .unwrap_or_else(|| "(not initialized)".to_string());

    format!(
        "posts_dir = {}\nindex_file = {}\nsite_name = {}\ncomponents_dir = {}\ncreated = {}\n",
        config.posts_dir, config.index_file, config.site_name, config.components_dir, created
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TagNotation;
    use std::path::PathBuf;

    fn report(changed: bool, dry_run: bool) -> AddTagsReport {
        AddTagsReport {
            path: PathBuf::from("posts/hello.md"),
            requested: vec!["b".to_string()],
            tags: vec!["a".to_string(), "b".to_string()],
            notation: TagNotation::Inline,
            changed,
            dry_run,
            content: "---\ntags: [a, b]\n---\n".to_string(),
        }
    }

    #[test]
    fn test_format_tag_report() {
        assert_eq!(
            format_tag_report("hello.md", &report(true, false)),
            "Updated tags for hello.md\nTags: a, b\n"
        );
    }

    #[test]
    fn test_format_tag_report_unchanged() {
        assert_eq!(
            format_tag_report("hello.md", &report(false, false)),
            "Tags already present in hello.md\nTags: a, b\n"
        );
    }

    #[test]
    fn test_format_tag_report_dry_run_prints_content() {
        assert_eq!(
            format_tag_report("hello.md", &report(true, true)),
            "---\ntags: [a, b]\n---\n"
        );
    }

    #[test]
    fn test_format_nav_outcome() {
        let added = NavLinkOutcome::Added(PathBuf::from("components/header.html"));
        assert_eq!(
            format_nav_outcome("About", &added),
            "Added link to 'About' in the header navigation."
        );
        assert_eq!(
            format_nav_outcome("About", &NavLinkOutcome::AlreadyLinked),
            "Link to 'About' already exists in the header."
        );
    }

    #[test]
    fn test_format_config_defaults() {
        let output = format_config(&Config::default());
        assert!(output.contains("posts_dir = posts\n"));
        assert!(output.contains("created = (not initialized)\n"));
    }
}
