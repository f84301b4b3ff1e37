//! `publications` subcommands: list, add, edit, remove and download

use std::path::PathBuf;

use owo_colors::OwoColorize;
use serde_json::json;

use super::{CommandOutput, open_screen, overlay, read_upload};
use crate::config::Config;
use crate::display::format_publication_page;
use crate::entity::Publication;
use crate::error::{PressError, Result};
use crate::remote::PublicationForm;
use crate::types::ResourceKind;

/// Field values given on the command line for `add` and `edit`
#[derive(Debug, Clone, Default)]
pub struct PublicationArgs {
    pub name: Option<String>,
    pub description: Option<String>,
    pub pdf: Option<PathBuf>,
    pub image: Option<PathBuf>,
}

/// List one page of publications
pub async fn cmd_publications_ls(search: Option<String>, page: usize, json: bool) -> Result<()> {
    let config = Config::load()?;
    let mut screen = open_screen::<Publication>(&config, ResourceKind::Publications, json)?;
    screen.load().await?;

    if let Some(term) = search {
        screen.set_search(term);
    }
    screen.set_page(page);

    let view = screen.view();
    let json_output = json!({
        "page": view.page,
        "page_count": view.page_count,
        "total": view.total,
        "items": view.items,
    });
    let text = format_publication_page(&view);

    CommandOutput::new(json_output).with_text(text).print(json)
}

/// Create a publication from a PDF and a cover image
pub async fn cmd_publications_add(args: PublicationArgs, json: bool) -> Result<()> {
    let config = Config::load()?;
    let form = PublicationForm {
        name: args.name.unwrap_or_default(),
        description: args.description.unwrap_or_default(),
        pdf_file: read_upload(args.pdf.as_deref()).await?,
        image: read_upload(args.image.as_deref()).await?,
    };

    let mut screen = open_screen::<Publication>(&config, ResourceKind::Publications, json)?;
    screen.create(form).await?;

    let publication = screen
        .state()
        .collection
        .first()
        .cloned()
        .ok_or_else(|| PressError::Other("server returned no publication".to_string()))?;

    let text = format!(
        "Created publication {} {}",
        publication.id.cyan(),
        publication.name
    );
    CommandOutput::new(serde_json::to_value(&publication)?)
        .with_text(text)
        .print(json)
}

/// Edit a publication; files are only replaced when given
pub async fn cmd_publications_edit(id: &str, args: PublicationArgs, json: bool) -> Result<()> {
    let config = Config::load()?;
    let mut screen = open_screen::<Publication>(&config, ResourceKind::Publications, json)?;
    screen.load().await?;

    let existing = screen.state().find(id).cloned().ok_or_else(|| PressError::NotFound {
        resource: "publication".to_string(),
        id: id.to_string(),
    })?;

    let mut form = PublicationForm {
        name: existing.name.clone(),
        description: existing.description.clone(),
        pdf_file: read_upload(args.pdf.as_deref()).await?,
        image: read_upload(args.image.as_deref()).await?,
    };
    overlay(&mut form.name, args.name);
    overlay(&mut form.description, args.description);

    screen.update(id, form).await?;

    let publication = screen.state().find(id).cloned().unwrap_or(existing);
    let text = format!(
        "Updated publication {} {}",
        publication.id.cyan(),
        publication.name
    );
    CommandOutput::new(serde_json::to_value(&publication)?)
        .with_text(text)
        .print(json)
}

/// Delete a publication
pub async fn cmd_publications_rm(id: &str, json: bool) -> Result<()> {
    let config = Config::load()?;
    let mut screen = open_screen::<Publication>(&config, ResourceKind::Publications, json)?;
    screen.delete(id).await?;

    CommandOutput::new(json!({
        "action": "deleted",
        "resource": "publication",
        "id": id,
    }))
    .with_text(format!("Deleted publication {}", id.cyan()))
    .print(json)
}

/// Download a publication's PDF into `output` or the configured directory
pub async fn cmd_publications_download(
    id: &str,
    output: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let config = Config::load()?;
    let dir = output.unwrap_or_else(|| config.download_dir());
    let mut screen = open_screen::<Publication>(&config, ResourceKind::Publications, json)?;

    let path = screen
        .download(id, &dir)
        .await?
        .ok_or_else(|| PressError::Other("download cancelled".to_string()))?;

    CommandOutput::new(json!({
        "action": "downloaded",
        "id": id,
        "path": path.display().to_string(),
    }))
    .with_text(path.display().to_string())
    .print(json)
}
