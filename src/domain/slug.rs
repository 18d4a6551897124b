//! Filenames derived from titles

use regex::Regex;
use std::sync::OnceLock;

fn separator_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap())
}

/// Lowercase the title and collapse every run of other characters into `-`.
/// Returns an empty string when nothing alphanumeric is left.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    separator_regex()
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Markdown filename for a post title.
pub fn post_filename(title: &str) -> Option<String> {
    let slug = slugify(title);
    if slug.is_empty() {
        None
    } else {
        Some(format!("{}.md", slug))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugifies_titles() {
        assert_eq!(slugify("My First Post"), "my-first-post");
        assert_eq!(slugify("  Rust & WebAssembly: 2025!  "), "rust-webassembly-2025");
        assert_eq!(slugify("already-slugged"), "already-slugged");
    }

    #[test]
    fn non_ascii_letters_become_separators() {
        assert_eq!(slugify("Café Déjà Vu"), "caf-d-j-vu");
    }

    #[test]
    fn post_filename_appends_extension() {
        assert_eq!(post_filename("Hello World").as_deref(), Some("hello-world.md"));
        assert_eq!(post_filename("!!!"), None);
    }
}
