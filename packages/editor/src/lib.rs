//! # Recruitify Editor
//!
//! Editing engine for the page builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ blocks: Registry (palette, render, inspect) │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: BuilderContainer                    │
//! │  - PageArena (authoritative page)           │
//! │  - Canvas (selection, drag and drop)        │
//! │  - Inspector (field edits, delete)          │
//! │  - Draft autosave (debounced scratch write) │
//! │  - Save lifecycle over TemplateStorage      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler-html: stored tree → static HTML    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use recruitify_editor::{BuilderContainer, CanvasEvent, DragPayload, MemoryTemplateStorage};
//!
//! let storage = MemoryTemplateStorage::new();
//! let mut builder = BuilderContainer::new("agency-1", Registry::standard());
//!
//! let root = builder.tree().id;
//! builder.handle(CanvasEvent::Drop {
//!     payload: DragPayload::NewBlock("heading".into()),
//!     parent_id: root,
//!     index: None,
//! });
//!
//! let record = builder.save(&storage, "Careers", None).await?;
//! ```

mod arena;
mod autosave;
mod canvas;
mod container;
mod errors;
pub mod inspector;
mod storage;

pub use arena::PageArena;
pub use autosave::{
    parse_draft, DraftAutosave, DraftKey, FileScratchStorage, MemoryScratchStorage, ScratchStorage,
    DEFAULT_DEBOUNCE,
};
pub use canvas::{Canvas, CanvasEvent, CanvasOutcome, CanvasState, DragPayload, IgnoreReason};
pub use container::{BuilderContainer, SaveRequest};
pub use errors::EditorError;
pub use inspector::InspectorView;
pub use storage::{FileTemplateStorage, MemoryTemplateStorage, TemplateRecord, TemplateStorage};
