use serde_json::json;

use super::CommandOutput;
use crate::error::Result;
use crate::types::Category;

/// List the post categories accepted by `--category`
pub fn cmd_categories(json: bool) -> Result<()> {
    let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
    CommandOutput::new(json!({ "categories": names }))
        .with_text(names.join("\n"))
        .print(json)
}
