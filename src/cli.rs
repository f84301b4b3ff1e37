use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::path::PathBuf;

use crate::types::{Category, ResourceKind};

#[derive(Parser)]
#[command(name = "pressroom")]
#[command(about = "Manage blog posts and publications")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage blog posts
    #[command(visible_alias = "p")]
    Posts {
        #[command(subcommand)]
        action: PostAction,
    },

    /// Manage publications
    #[command(visible_alias = "pubs")]
    Publications {
        #[command(subcommand)]
        action: PublicationAction,
    },

    /// List the post categories
    Categories {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Open the interactive dashboard
    #[command(visible_alias = "b")]
    Browse {
        /// Resource to show first: posts or publications
        #[arg(value_parser = parse_resource)]
        resource: Option<ResourceKind>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for [possible values: bash, zsh, fish, powershell, elvish]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum PostAction {
    /// List one page of posts
    Ls {
        /// Only posts whose title contains this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Only posts in this category
        #[arg(short, long, value_parser = parse_category)]
        category: Option<Category>,

        /// Page to show (1-based)
        #[arg(long, default_value_t = 1, value_parser = parse_page)]
        page: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single post
    Show {
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a post
    Add {
        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long, value_parser = parse_category)]
        category: Option<Category>,

        #[arg(short, long)]
        description: Option<String>,

        /// Post body
        #[arg(long)]
        content: Option<String>,

        /// Cover image file
        #[arg(short, long)]
        image: Option<PathBuf>,

        /// Author name (default: the configured author)
        #[arg(short, long)]
        author: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit a post; omitted fields keep their current values
    Edit {
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long, value_parser = parse_category)]
        category: Option<Category>,

        #[arg(short, long)]
        description: Option<String>,

        #[arg(long)]
        content: Option<String>,

        /// Replacement cover image
        #[arg(short, long)]
        image: Option<PathBuf>,

        #[arg(short, long)]
        author: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a post
    #[command(visible_alias = "delete")]
    Rm {
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum PublicationAction {
    /// List one page of publications
    Ls {
        /// Only publications whose name contains this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Page to show (1-based)
        #[arg(long, default_value_t = 1, value_parser = parse_page)]
        page: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a publication
    Add {
        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        /// The publication's PDF
        #[arg(long)]
        pdf: Option<PathBuf>,

        /// Cover image file
        #[arg(short, long)]
        image: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit a publication; files are only replaced when given
    Edit {
        id: String,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        #[arg(long)]
        pdf: Option<PathBuf>,

        #[arg(short, long)]
        image: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a publication
    #[command(visible_alias = "delete")]
    Rm {
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Download a publication's PDF
    Download {
        id: String,

        /// Directory to save into (default: download.dir, then the user's downloads)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value
    Set {
        /// Configuration key (api.url, author, posts.page_size, publications.page_size,
        /// download.dir, toast.seconds, request.timeout)
        key: String,
        /// Value to set; an empty value clears optional keys
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// Execute the command, dispatching to the appropriate handler.
    pub async fn run(self) -> crate::error::Result<()> {
        use crate::commands::{
            PostArgs, PublicationArgs, cmd_browse, cmd_categories, cmd_config_get, cmd_config_set,
            cmd_config_show, cmd_posts_add, cmd_posts_edit, cmd_posts_ls, cmd_posts_rm,
            cmd_posts_show, cmd_publications_add, cmd_publications_download,
            cmd_publications_edit, cmd_publications_ls, cmd_publications_rm,
        };

        match self {
            Commands::Posts { action } => match action {
                PostAction::Ls {
                    search,
                    category,
                    page,
                    json,
                } => cmd_posts_ls(search, category, page, json).await,
                PostAction::Show { id, json } => cmd_posts_show(&id, json).await,
                PostAction::Add {
                    title,
                    category,
                    description,
                    content,
                    image,
                    author,
                    json,
                } => {
                    let args = PostArgs {
                        title,
                        category,
                        description,
                        content,
                        image,
                        author,
                    };
                    cmd_posts_add(args, json).await
                }
                PostAction::Edit {
                    id,
                    title,
                    category,
                    description,
                    content,
                    image,
                    author,
                    json,
                } => {
                    let args = PostArgs {
                        title,
                        category,
                        description,
                        content,
                        image,
                        author,
                    };
                    cmd_posts_edit(&id, args, json).await
                }
                PostAction::Rm { id, json } => cmd_posts_rm(&id, json).await,
            },

            Commands::Publications { action } => match action {
                PublicationAction::Ls { search, page, json } => {
                    cmd_publications_ls(search, page, json).await
                }
                PublicationAction::Add {
                    name,
                    description,
                    pdf,
                    image,
                    json,
                } => {
                    let args = PublicationArgs {
                        name,
                        description,
                        pdf,
                        image,
                    };
                    cmd_publications_add(args, json).await
                }
                PublicationAction::Edit {
                    id,
                    name,
                    description,
                    pdf,
                    image,
                    json,
                } => {
                    let args = PublicationArgs {
                        name,
                        description,
                        pdf,
                        image,
                    };
                    cmd_publications_edit(&id, args, json).await
                }
                PublicationAction::Rm { id, json } => cmd_publications_rm(&id, json).await,
                PublicationAction::Download { id, output, json } => {
                    cmd_publications_download(&id, output, json).await
                }
            },

            Commands::Categories { json } => cmd_categories(json),

            Commands::Browse { resource } => cmd_browse(resource).await,

            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(json),
                ConfigAction::Set { key, value, json } => cmd_config_set(&key, &value, json),
                ConfigAction::Get { key, json } => cmd_config_get(&key, json),
            },

            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

/// Generic validation helper for parsing values with a standard error message format.
fn parse_with_validation<T, F>(
    s: &str,
    parser: F,
    field_name: &str,
    valid_values: &[&str],
) -> Result<T, String>
where
    F: FnOnce(&str) -> Result<T, String>,
{
    parser(s).map_err(|_| {
        format!(
            "Invalid {}. Must be one of: {}",
            field_name,
            valid_values.join(", ")
        )
    })
}

fn parse_category(s: &str) -> Result<Category, String> {
    parse_with_validation(
        s,
        |v| v.parse().map_err(|_| String::new()),
        "category",
        &Category::names(),
    )
}

fn parse_resource(s: &str) -> Result<ResourceKind, String> {
    parse_with_validation(
        s,
        |v| v.parse().map_err(|_| String::new()),
        "resource",
        &["posts", "publications"],
    )
}

fn parse_page(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("Invalid page '{s}'. Must be a positive integer")),
    }
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "pressroom", &mut io::stdout());
}
