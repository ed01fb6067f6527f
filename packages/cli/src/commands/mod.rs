pub mod add;
pub mod blocks;
pub mod new;
pub mod rename;
pub mod render;
pub mod tree;
pub mod validate;

pub use add::{add, AddArgs};
pub use blocks::{blocks, BlocksArgs};
pub use new::{new_template, NewArgs};
pub use rename::{rename, RenameArgs};
pub use render::{render, RenderArgs};
pub use tree::{tree, TreeArgs};
pub use validate::{validate, ValidateArgs};

use crate::config::Config;
use anyhow::{anyhow, bail, Context, Result};
use recruitify_common::BuilderNode;
use recruitify_editor::{
    BuilderContainer, CanvasEvent, CanvasOutcome, DragPayload, FileScratchStorage,
    FileTemplateStorage, TemplateStorage,
};
use std::path::Path;
use std::sync::Arc;

pub fn template_storage(config: &Config, cwd: &Path) -> FileTemplateStorage {
    FileTemplateStorage::new(config.templates_dir(cwd))
}

/// Attach the configured draft directory to `container`
pub fn with_drafts(container: BuilderContainer, config: &Config, cwd: &Path) -> BuilderContainer {
    let scratch = Arc::new(FileScratchStorage::new(config.drafts_dir(cwd)));
    container.with_autosave(scratch, config.autosave_debounce())
}

/// A bare document file, or a template id looked up in storage
pub async fn load_document(input: &str, config: &Config, cwd: &Path) -> Result<BuilderNode> {
    let path = cwd.join(input);
    if input.ends_with(".json") && path.is_file() {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        return BuilderNode::from_json(&content)
            .with_context(|| format!("Invalid document in {}", path.display()));
    }

    let record = template_storage(config, cwd)
        .load(input)
        .await?
        .ok_or_else(|| anyhow!("Template not found: {}", input))?;
    Ok(record.tree)
}

/// Drop a palette block at `index` under `parent` (the page root when
/// `None`) and return the new node's id
pub fn drop_block(
    container: &mut BuilderContainer,
    key: &str,
    parent: Option<&str>,
    index: Option<usize>,
) -> Result<String> {
    let parent_id = parent.unwrap_or_else(|| container.arena().root_id()).to_string();

    match container.handle(CanvasEvent::Drop {
        payload: DragPayload::NewBlock(key.to_string()),
        parent_id,
        index,
    }) {
        CanvasOutcome::Changed => container
            .selected_id()
            .map(str::to_string)
            .ok_or_else(|| anyhow!("Dropped block `{}` was not selected", key)),
        CanvasOutcome::Ignored(reason) => Err(anyhow::Error::new(reason)),
        CanvasOutcome::StateOnly => bail!("Dropping `{}` did not change the page", key),
    }
}
