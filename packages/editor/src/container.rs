//! # Builder Container
//!
//! Owns the authoritative page for one editing session and bridges it to
//! persistence.
//!
//! ## Lifecycle
//!
//! ```text
//! new / load ─► (restore draft) ─► edit ─► begin_save ─► storage ─► finish_save
//!                                   │                                  │
//!                                   └──► debounced draft ◄── removed ──┘
//! ```
//!
//! Edits bump a revision counter. The page is dirty while the revision
//! differs from the last saved one, so edits made while a save is in flight
//! keep the page dirty after that save lands.

use crate::arena::PageArena;
use crate::autosave::{parse_draft, DraftAutosave, DraftKey, ScratchStorage};
use crate::canvas::{Canvas, CanvasEvent, CanvasOutcome};
use crate::errors::EditorError;
use crate::inspector::{self, InspectorView};
use crate::storage::{TemplateRecord, TemplateStorage};
use recruitify_blocks::Registry;
use recruitify_common::tree::create_root;
use recruitify_common::{BuilderNode, Props, TreeResult, VNode};
use std::sync::Arc;
use std::time::Duration;

/// Storage call a save needs, handed out by [`BuilderContainer::begin_save`]
#[derive(Debug, Clone, PartialEq)]
pub enum SaveRequest {
    Create {
        agency_id: String,
        title: String,
        description: Option<String>,
        tree: BuilderNode,
    },
    Update {
        template_id: String,
        tree: BuilderNode,
    },
}

impl SaveRequest {
    pub fn tree(&self) -> &BuilderNode {
        match self {
            SaveRequest::Create { tree, .. } | SaveRequest::Update { tree, .. } => tree,
        }
    }

    /// Run the request against `storage`
    pub async fn send(&self, storage: &dyn TemplateStorage) -> Result<TemplateRecord, EditorError> {
        match self {
            SaveRequest::Create {
                agency_id,
                title,
                description,
                tree,
            } => {
                storage
                    .create(agency_id, title, description.as_deref(), tree)
                    .await
            }
            SaveRequest::Update { template_id, tree } => storage.update(template_id, tree).await,
        }
    }
}

#[derive(Debug)]
pub struct BuilderContainer {
    agency_id: String,
    template_id: Option<String>,
    arena: PageArena,
    canvas: Canvas,
    registry: Registry,
    revision: u64,
    saved_revision: u64,
    /// Revision captured by the in-flight save
    saving: Option<u64>,
    autosave: Option<DraftAutosave>,
}

impl BuilderContainer {
    /// Fresh root-only page for a template that has never been saved
    pub fn new(agency_id: impl Into<String>, registry: Registry) -> Self {
        Self::open(agency_id, None, create_root(), registry)
    }

    pub fn open(
        agency_id: impl Into<String>,
        template_id: Option<String>,
        tree: BuilderNode,
        registry: Registry,
    ) -> Self {
        Self {
            agency_id: agency_id.into(),
            template_id,
            arena: PageArena::from_tree(&tree),
            canvas: Canvas::new(),
            registry,
            revision: 0,
            saved_revision: 0,
            saving: None,
            autosave: None,
        }
    }

    #[tracing::instrument(skip(storage, registry))]
    pub async fn load(
        storage: &dyn TemplateStorage,
        template_id: &str,
        registry: Registry,
    ) -> Result<Self, EditorError> {
        let record = storage
            .load(template_id)
            .await?
            .ok_or_else(|| EditorError::TemplateNotFound(template_id.to_string()))?;
        tracing::info!(template_id, agency_id = %record.agency_id, "loaded template");
        Ok(Self::open(record.agency_id, Some(record.id), record.tree, registry))
    }

    /// Mirror edits into `storage` after `debounce` of quiet
    pub fn with_autosave(mut self, storage: Arc<dyn ScratchStorage>, debounce: Duration) -> Self {
        self.autosave = Some(DraftAutosave::new(self.draft_key(), storage, debounce));
        self
    }

    pub fn draft_key(&self) -> DraftKey {
        DraftKey::new(self.agency_id.clone(), self.template_id.clone())
    }

    /// Replace the page with the stored draft, if there is a readable one.
    /// An unreadable draft is discarded and the page is left as it was.
    pub fn restore_draft(&mut self) -> Result<bool, EditorError> {
        let Some(autosave) = self.autosave.as_mut() else {
            return Ok(false);
        };
        let Some(content) = autosave.load()? else {
            return Ok(false);
        };

        match parse_draft(&content) {
            Some(tree) => {
                self.arena = PageArena::from_tree(&tree);
                self.canvas.reset();
                self.revision += 1;
                tracing::info!(key = %autosave.key(), "restored draft");
                Ok(true)
            }
            None => {
                autosave.discard()?;
                Ok(false)
            }
        }
    }

    pub fn agency_id(&self) -> &str {
        &self.agency_id
    }

    pub fn template_id(&self) -> Option<&str> {
        self.template_id.as_deref()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn arena(&self) -> &PageArena {
        &self.arena
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn tree(&self) -> BuilderNode {
        self.arena.to_tree()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.canvas.selected_id()
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.revision != self.saved_revision
    }

    pub fn is_saving(&self) -> bool {
        self.saving.is_some()
    }

    pub fn has_pending_draft(&self) -> bool {
        self.autosave.as_ref().is_some_and(DraftAutosave::is_pending)
    }

    fn changed(&mut self) {
        self.revision += 1;
        if let Some(autosave) = self.autosave.as_mut() {
            if let Err(e) = autosave.schedule(&self.arena.to_tree()) {
                tracing::warn!(error = %e, "could not schedule draft");
            }
        }
    }

    pub fn handle(&mut self, event: CanvasEvent) -> CanvasOutcome {
        let outcome = self.canvas.handle(event, &mut self.arena, &self.registry);
        match &outcome {
            CanvasOutcome::Changed => self.changed(),
            CanvasOutcome::Ignored(reason) => tracing::debug!(%reason, "canvas event ignored"),
            CanvasOutcome::StateOnly => {}
        }
        outcome
    }

    pub fn render_canvas(&self) -> VNode {
        self.canvas.render(&self.arena.to_tree(), &self.registry)
    }

    pub fn inspector(&self) -> InspectorView {
        inspector::view(&self.arena, &self.registry, self.canvas.selected_id())
    }

    /// Merge `partial` into the props of `id`
    pub fn update_props(&mut self, id: &str, partial: Props) -> TreeResult<()> {
        inspector::update(&mut self.arena, id, partial)?;
        self.changed();
        Ok(())
    }

    pub fn delete_node(&mut self, id: &str) -> TreeResult<()> {
        let mut selected = self.canvas.selected_id().map(str::to_string);
        inspector::delete(&mut self.arena, &mut selected, id)?;
        if selected.is_none() {
            self.canvas.clear_selection();
        }
        self.changed();
        Ok(())
    }

    /// Swap in the tree of `template_id` (`None` for an unsaved page). Not
    /// an edit: the page is clean afterwards, any pending draft write is
    /// dropped and later drafts and saves target the new template.
    pub fn reload(&mut self, template_id: Option<String>, tree: BuilderNode) {
        self.template_id = template_id;
        self.arena = PageArena::from_tree(&tree);
        self.canvas.reset();
        self.saved_revision = self.revision;
        let key = self.draft_key();
        if let Some(autosave) = self.autosave.as_mut() {
            autosave.cancel();
            autosave.set_key(key);
        }
    }

    /// Snapshot the page for saving. `title` and `description` are used
    /// only when the template has never been saved.
    pub fn begin_save(&mut self, title: &str, description: Option<&str>) -> Result<SaveRequest, EditorError> {
        if self.saving.is_some() {
            return Err(EditorError::SaveInFlight);
        }
        self.saving = Some(self.revision);

        let tree = self.arena.to_tree();
        Ok(match &self.template_id {
            Some(template_id) => SaveRequest::Update {
                template_id: template_id.clone(),
                tree,
            },
            None => SaveRequest::Create {
                agency_id: self.agency_id.clone(),
                title: title.to_string(),
                description: description.map(str::to_string),
                tree,
            },
        })
    }

    /// Record how the in-flight save ended. A failure leaves the page and
    /// its dirty state alone and is handed back for the caller to surface.
    pub fn finish_save(&mut self, result: Result<TemplateRecord, EditorError>) -> Result<TemplateRecord, EditorError> {
        let revision = self.saving.take().ok_or(EditorError::NoSaveInFlight)?;

        let record = match result {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(error = %e, "save failed");
                return Err(e);
            }
        };

        let old_key = self.draft_key();
        self.template_id = Some(record.id.clone());
        self.saved_revision = revision;
        let clean = !self.has_unsaved_changes();
        let new_key = self.draft_key();

        let tree = self.arena.to_tree();

        if let Some(autosave) = self.autosave.as_mut() {
            // the template is stored; draft bookkeeping failures only get logged
            let cleanup = if old_key != new_key {
                // first save moves the draft out of the unsaved slot
                let discarded = autosave.discard();
                autosave.set_key(new_key);
                discarded.and_then(|()| if clean { Ok(()) } else { autosave.schedule(&tree) })
            } else if clean {
                autosave.discard()
            } else {
                Ok(())
            };
            if let Err(e) = cleanup {
                tracing::warn!(template_id = %record.id, error = %e, "draft cleanup failed after save");
            }
        }

        tracing::info!(template_id = %record.id, clean, "saved template");
        Ok(record)
    }

    /// Full save round-trip against `storage`
    pub async fn save(
        &mut self,
        storage: &dyn TemplateStorage,
        title: &str,
        description: Option<&str>,
    ) -> Result<TemplateRecord, EditorError> {
        let request = self.begin_save(title, description)?;
        let result = request.send(storage).await;
        self.finish_save(result)
    }

    pub async fn update_metadata(
        &self,
        storage: &dyn TemplateStorage,
        title: &str,
        description: Option<&str>,
    ) -> Result<TemplateRecord, EditorError> {
        let template_id = self.template_id.as_deref().ok_or(EditorError::NotSaved)?;
        storage.update_metadata(template_id, title, description).await
    }
}
