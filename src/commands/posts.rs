//! `posts` subcommands: list, show, add, edit and remove blog posts

use std::path::PathBuf;

use owo_colors::OwoColorize;
use serde_json::json;

use super::{CommandOutput, open_screen, overlay, read_upload};
use crate::config::Config;
use crate::display::{format_post_detail, format_post_page};
use crate::entity::Post;
use crate::error::{PressError, Result};
use crate::remote::{HttpStore, PostForm, RemoteStore};
use crate::types::{Category, ResourceKind};

/// Field values given on the command line for `add` and `edit`
#[derive(Debug, Clone, Default)]
pub struct PostArgs {
    pub title: Option<String>,
    pub category: Option<Category>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub image: Option<PathBuf>,
    pub author: Option<String>,
}

/// List one page of posts
pub async fn cmd_posts_ls(
    search: Option<String>,
    category: Option<Category>,
    page: usize,
    json: bool,
) -> Result<()> {
    let config = Config::load()?;
    let mut screen = open_screen::<Post>(&config, ResourceKind::Posts, json)?;
    screen.load().await?;

    if let Some(term) = search {
        screen.set_search(term);
    }
    screen.set_category(category);
    screen.set_page(page);

    let view = screen.view();
    let json_output = json!({
        "page": view.page,
        "page_count": view.page_count,
        "total": view.total,
        "items": view.items,
    });
    let text = format_post_page(&view);

    CommandOutput::new(json_output).with_text(text).print(json)
}

/// Show a single post
pub async fn cmd_posts_show(id: &str, json: bool) -> Result<()> {
    let config = Config::load()?;
    let store = HttpStore::<Post>::from_config(&config)?;
    let post = store.fetch(id).await?;
    let image_url = store.asset_url(&post.image);

    let mut json_output = serde_json::to_value(&post)?;
    json_output["imageUrl"] = json!(image_url);
    let text = format_post_detail(&post, &image_url);

    CommandOutput::new(json_output).with_text(text).print(json)
}

/// Create a post
pub async fn cmd_posts_add(args: PostArgs, json: bool) -> Result<()> {
    let config = Config::load()?;
    let form = PostForm {
        title: args.title.unwrap_or_default(),
        description: args.description.unwrap_or_default(),
        category: args.category,
        content: args.content.unwrap_or_default(),
        author: args
            .author
            .unwrap_or_else(|| config.author().to_string()),
        date: None,
        image: read_upload(args.image.as_deref()).await?,
    };

    let mut screen = open_screen::<Post>(&config, ResourceKind::Posts, json)?;
    screen.create(form).await?;

    let post = screen
        .state()
        .collection
        .first()
        .cloned()
        .ok_or_else(|| PressError::Other("server returned no post".to_string()))?;

    let text = format!("Created post {} {}", post.id.cyan(), post.title);
    CommandOutput::new(serde_json::to_value(&post)?)
        .with_text(text)
        .print(json)
}

/// Edit a post, starting from its current values
pub async fn cmd_posts_edit(id: &str, args: PostArgs, json: bool) -> Result<()> {
    let config = Config::load()?;
    let mut screen = open_screen::<Post>(&config, ResourceKind::Posts, json)?;
    screen.load().await?;

    let existing = screen.state().find(id).cloned().ok_or_else(|| PressError::NotFound {
        resource: "post".to_string(),
        id: id.to_string(),
    })?;

    let mut form = PostForm::from_post(&existing);
    overlay(&mut form.title, args.title);
    overlay(&mut form.description, args.description);
    overlay(&mut form.content, args.content);
    overlay(&mut form.author, args.author);
    if args.category.is_some() {
        form.category = args.category;
    }
    form.image = read_upload(args.image.as_deref()).await?;

    screen.update(id, form).await?;

    let post = screen.state().find(id).cloned().unwrap_or(existing);
    let text = format!("Updated post {} {}", post.id.cyan(), post.title);
    CommandOutput::new(serde_json::to_value(&post)?)
        .with_text(text)
        .print(json)
}

/// Delete a post
pub async fn cmd_posts_rm(id: &str, json: bool) -> Result<()> {
    let config = Config::load()?;
    let mut screen = open_screen::<Post>(&config, ResourceKind::Posts, json)?;
    screen.delete(id).await?;

    CommandOutput::new(json!({
        "action": "deleted",
        "resource": "post",
        "id": id,
    }))
    .with_text(format!("Deleted post {}", id.cyan()))
    .print(json)
}
