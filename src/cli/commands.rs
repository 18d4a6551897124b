//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "blogctl")]
#[command(about = "Command-line tool for managing static blog content", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize blogctl configuration in a site directory
    Init {
        /// Site directory (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Commands for managing blog posts
    #[command(subcommand)]
    Post(PostCommands),

    /// Commands for managing static pages
    #[command(subcommand)]
    Page(PageCommands),
}

#[derive(Subcommand, Debug)]
pub enum PostCommands {
    /// Create a new blog post with the specified title
    Create {
        /// Post title (e.g., "My Post Title")
        title: Option<String>,

        /// Publish date as YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<String>,

        /// Overwrite an existing post with the same filename
        #[arg(short, long)]
        force: bool,
    },

    /// Add tags to an existing blog post
    AddTags {
        /// Post filename inside the posts directory (e.g., my-post.md)
        file: Option<String>,

        /// Comma-separated tags (e.g., "rust, cli")
        tags: Option<String>,

        /// Print the updated post instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Generate a JSON index of all blog posts
    GenerateIndex {
        /// Output file relative to the site root (default: configured index_file)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Include posts in nested directories
        #[arg(short, long)]
        recursive: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum PageCommands {
    /// Create a new HTML page with the site's header and footer components
    Create {
        /// Page name, written as <NAME>.html
        name: String,

        /// Page title
        #[arg(long, default_value = "New Page")]
        title: String,

        /// Brief description of the page content
        #[arg(long, default_value = "This is a new page.")]
        description: String,

        /// The page will live in a subdirectory (adjusts component paths)
        #[arg(long)]
        subdirectory: bool,

        /// Add a link to the page in the header navigation
        #[arg(long)]
        nav: bool,
    },
}
