//! `browse`: the interactive dashboard

use iocraft::prelude::*;

use crate::config::Config;
use crate::error::{PressError, Result};
use crate::tui::{BrowseServices, Dashboard};
use crate::types::ResourceKind;

/// Open the dashboard on `resource` (posts when omitted)
pub async fn cmd_browse(resource: Option<ResourceKind>) -> Result<()> {
    let config = Config::load()?;
    let services = BrowseServices::from_config(&config)?;

    let result = element!(Dashboard(
        resource: resource.unwrap_or_default(),
        services: Some(services.clone()),
    ))
    .fullscreen()
    .await;

    // Whatever is still in flight belongs to a screen that no longer exists
    services.cancel();
    result.map_err(|e| PressError::Other(format!("TUI error: {}", e)))
}
