use blogctl::application::{
    init::init, AddTagsOptions, AddTagsService, ConfigService, CreatePageOptions,
    CreatePageService, CreatePostOptions, CreatePostService, GenerateIndexService, IndexOptions,
};
use blogctl::cli::{
    format_config, format_nav_outcome, format_tag_report, Cli, Commands, PageCommands,
    PostCommands,
};
use blogctl::error::BlogError;
use blogctl::infrastructure::FileSystemRepository;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Log to stderr so command output on stdout stays clean
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "blogctl=debug" } else { "blogctl=warn" };
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), BlogError> {
    match cli.command {
        Some(Commands::Init { path }) => {
            let config_path = init(&path)?;
            println!("Initialized blogctl at {}", path.display());
            println!("Config: {}", config_path.display());
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let service = ConfigService::new(FileSystemRepository::discover()?);

            if list {
                print!("{}", format_config(&service.list()?));
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: blogctl config [--list | <key> [<value>]]");
                println!("Valid keys: posts_dir, index_file, site_name, components_dir, created");
            }
            Ok(())
        }
        Some(Commands::Post(command)) => run_post(command),
        Some(Commands::Page(command)) => run_page(command),
        None => {
            println!("blogctl - Command-line tool for managing static blog content");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn run_post(command: PostCommands) -> Result<(), BlogError> {
    let repo = FileSystemRepository::discover()?;

    match command {
        PostCommands::Create { title, date, force } => {
            let title = title.ok_or_else(|| BlogError::MissingArgument("post title".into()))?;
            let path = CreatePostService::new(repo).execute(CreatePostOptions { title, date, force })?;
            println!("Created new post: {}", path.display());
            println!("You can now edit this file to add your content.");
            Ok(())
        }
        PostCommands::AddTags {
            file,
            tags,
            dry_run,
        } => {
            let filename = file.ok_or_else(|| BlogError::MissingArgument("post filename".into()))?;
            let tags = tags.ok_or_else(|| BlogError::MissingArgument("tags".into()))?;

            let report = AddTagsService::new(repo).execute(AddTagsOptions {
                filename: filename.clone(),
                tags,
                dry_run,
            })?;
            print!("{}", format_tag_report(&filename, &report));
            Ok(())
        }
        PostCommands::GenerateIndex { output, recursive } => {
            let report =
                GenerateIndexService::new(repo).execute(IndexOptions { output, recursive })?;
            println!("Generated index with {} posts", report.entries.len());
            Ok(())
        }
    }
}

fn run_page(command: PageCommands) -> Result<(), BlogError> {
    let repo = FileSystemRepository::discover()?;

    match command {
        PageCommands::Create {
            name,
            title,
            description,
            subdirectory,
            nav,
        } => {
            let service = CreatePageService::new(repo);
            let options = CreatePageOptions {
                name,
                title,
                description,
                subdirectory,
            };

            let path = service.create(&options)?;
            println!("Created new page: {}", path.display());

            if nav {
                let outcome = service.link_in_header(&options.name, &options.title)?;
                println!("{}", format_nav_outcome(&options.title, &outcome));
            }
            Ok(())
        }
    }
}
