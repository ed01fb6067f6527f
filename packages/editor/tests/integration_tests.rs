//! Integration tests for the builder container

use async_trait::async_trait;
use recruitify_blocks::Registry;
use recruitify_common::tree::{create_root, find_node};
use recruitify_common::{props, BuilderNode, Props};
use recruitify_editor::{
    BuilderContainer, CanvasEvent, CanvasOutcome, DragPayload, DraftKey, EditorError, InspectorView,
    MemoryScratchStorage, MemoryTemplateStorage, ScratchStorage, TemplateRecord, TemplateStorage,
    DEFAULT_DEBOUNCE,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

fn drop_block(builder: &mut BuilderContainer, key: &str, parent_id: &str) -> CanvasOutcome {
    builder.handle(CanvasEvent::Drop {
        payload: DragPayload::NewBlock(key.to_string()),
        parent_id: parent_id.to_string(),
        index: None,
    })
}

fn root_id(builder: &BuilderContainer) -> String {
    builder.arena().root_id().to_string()
}

/// Storage whose writes always fail
struct OfflineStorage;

#[async_trait]
impl TemplateStorage for OfflineStorage {
    async fn load(&self, _id: &str) -> Result<Option<TemplateRecord>, EditorError> {
        Ok(None)
    }

    async fn create(
        &self,
        _agency_id: &str,
        _title: &str,
        _description: Option<&str>,
        _tree: &BuilderNode,
    ) -> Result<TemplateRecord, EditorError> {
        Err(EditorError::storage("network unreachable"))
    }

    async fn update(&self, _id: &str, _tree: &BuilderNode) -> Result<TemplateRecord, EditorError> {
        Err(EditorError::storage("network unreachable"))
    }

    async fn update_metadata(
        &self,
        _id: &str,
        _title: &str,
        _description: Option<&str>,
    ) -> Result<TemplateRecord, EditorError> {
        Err(EditorError::storage("network unreachable"))
    }
}

#[test]
fn test_new_heading_drop() {
    let mut builder = BuilderContainer::new("agency-1", Registry::standard());
    let root = root_id(&builder);

    let outcome = drop_block(&mut builder, "heading", &root);
    assert_eq!(outcome, CanvasOutcome::Changed);

    let tree = builder.tree();
    assert_eq!(tree.children().len(), 1);
    let heading = &tree.children()[0];
    assert_eq!(heading.node_type, "heading");
    assert_eq!(heading.props["text"], json!("Your headline"));

    // auto-selected, and the inspector shows it
    assert_eq!(builder.selected_id(), Some(heading.id.as_str()));
    assert!(matches!(builder.inspector(), InspectorView::Fields { ref node_type, .. } if node_type == "heading"));
}

#[test]
fn test_delete_selected_clears_selection() {
    let mut builder = BuilderContainer::new("agency-1", Registry::standard());
    let root = root_id(&builder);

    drop_block(&mut builder, "section", &root);
    let section = builder.selected_id().unwrap().to_string();
    drop_block(&mut builder, "text", &section);
    assert!(builder.selected_id().is_some());

    builder.delete_node(&section).unwrap();

    assert_eq!(builder.selected_id(), None);
    assert_eq!(builder.inspector(), InspectorView::NothingSelected);
    assert!(builder.tree().children().is_empty());
}

#[test]
fn test_inspector_edit_merges_props() {
    let mut builder = BuilderContainer::new("agency-1", Registry::standard());
    let root = root_id(&builder);
    drop_block(&mut builder, "button", &root);
    let id = builder.selected_id().unwrap().to_string();

    let InspectorView::Fields { fields, .. } = builder.inspector() else {
        panic!("expected fields");
    };
    let label = fields.iter().find(|f| f.key == "label").unwrap();
    builder.update_props(&id, label.patch(json!("Apply today"))).unwrap();

    let tree = builder.tree();
    let button = find_node(&tree, &id).unwrap();
    assert_eq!(button.props["label"], json!("Apply today"));
    assert!(button.props.contains_key("href"));
}

#[test]
fn test_reorder_by_drop_zone() {
    let tree = create_root().with_id("root").with_children(vec![
        BuilderNode::new("text", Props::new()).with_id("x"),
        BuilderNode::new("text", Props::new()).with_id("y"),
        BuilderNode::new("text", Props::new()).with_id("z"),
    ]);
    let mut builder = BuilderContainer::open("agency-1", None, tree, Registry::standard());

    builder.handle(CanvasEvent::DragStart { id: "x".into() });
    let outcome = builder.handle(CanvasEvent::Drop {
        payload: DragPayload::ExistingNode("x".into()),
        parent_id: "root".into(),
        index: Some(3),
    });

    assert!(outcome.is_changed());
    assert_eq!(builder.arena().children_of("root"), ["y", "z", "x"]);
    assert!(builder.has_unsaved_changes());
}

#[tokio::test]
async fn test_save_create_then_update() {
    let storage = MemoryTemplateStorage::new();
    let mut builder = BuilderContainer::new("agency-1", Registry::standard());
    let root = root_id(&builder);

    assert!(!builder.has_unsaved_changes());
    drop_block(&mut builder, "hero", &root);
    assert!(builder.has_unsaved_changes());

    let created = builder.save(&storage, "Careers", Some("Main site")).await.unwrap();
    assert!(!builder.has_unsaved_changes());
    assert_eq!(builder.template_id(), Some(created.id.as_str()));
    assert_eq!(created.title, "Careers");

    drop_block(&mut builder, "footer", &root);
    let updated = builder.save(&storage, "ignored", None).await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Careers");
    assert_eq!(updated.tree.children().len(), 2);
    assert_eq!(storage.len().await, 1);

    let reopened = BuilderContainer::load(&storage, &created.id, Registry::standard())
        .await
        .unwrap();
    assert_eq!(reopened.tree(), builder.tree());
    assert_eq!(reopened.agency_id(), "agency-1");
}

#[tokio::test]
async fn test_save_failure_keeps_page_dirty() {
    let mut builder = BuilderContainer::new("agency-1", Registry::standard());
    let root = root_id(&builder);
    drop_block(&mut builder, "stats", &root);
    let before = builder.tree();

    let result = builder.save(&OfflineStorage, "Careers", None).await;

    assert!(matches!(result, Err(EditorError::Storage(_))));
    assert_eq!(builder.tree(), before);
    assert!(builder.has_unsaved_changes());
    assert!(!builder.is_saving());

    // retry works once storage is back
    let storage = MemoryTemplateStorage::new();
    builder.save(&storage, "Careers", None).await.unwrap();
    assert!(!builder.has_unsaved_changes());
}

#[test]
fn test_second_save_while_in_flight_is_rejected() {
    let mut builder = BuilderContainer::new("agency-1", Registry::standard());

    let request = builder.begin_save("Careers", None).unwrap();
    assert_eq!(request.tree(), &builder.tree());
    assert!(matches!(
        builder.begin_save("Careers", None),
        Err(EditorError::SaveInFlight)
    ));
}

#[test]
fn test_edit_during_save_stays_dirty() {
    let mut builder = BuilderContainer::new("agency-1", Registry::standard());
    let root = root_id(&builder);
    drop_block(&mut builder, "text", &root);

    let request = builder.begin_save("Careers", None).unwrap();
    drop_block(&mut builder, "divider", &root);

    let record = TemplateRecord::new("agency-1", "Careers", None, request.tree().clone());
    builder.finish_save(Ok(record)).unwrap();

    assert!(builder.has_unsaved_changes());
    assert!(matches!(builder.finish_save(Err(EditorError::NotSaved)), Err(EditorError::NoSaveInFlight)));
}

#[test]
fn test_reload_is_not_an_edit() {
    let mut builder = BuilderContainer::new("agency-1", Registry::standard());
    let root = root_id(&builder);
    drop_block(&mut builder, "text", &root);
    assert!(builder.has_unsaved_changes());

    let stored = create_root().with_children(vec![BuilderNode::new("spacer", props! { "height" => 8 })]);
    builder.reload(None, stored.clone());

    assert!(!builder.has_unsaved_changes());
    assert_eq!(builder.tree(), stored);
    assert_eq!(builder.selected_id(), None);
}

#[tokio::test]
async fn test_reload_switches_template() {
    let storage = MemoryTemplateStorage::new();
    let first = storage.create("agency-1", "Careers", None, &create_root()).await.unwrap();
    let second_tree = create_root().with_children(vec![BuilderNode::new("divider", Props::new())]);
    let second = storage.create("agency-1", "Internships", None, &second_tree).await.unwrap();

    let mut builder = BuilderContainer::load(&storage, &first.id, Registry::standard())
        .await
        .unwrap();
    builder.reload(Some(second.id.clone()), second.tree.clone());
    assert_eq!(builder.template_id(), Some(second.id.as_str()));
    assert_eq!(builder.draft_key(), DraftKey::new("agency-1", Some(second.id.clone())));

    let root = root_id(&builder);
    drop_block(&mut builder, "text", &root);
    let record = builder.save(&storage, "ignored", None).await.unwrap();

    assert_eq!(record.id, second.id);
    assert_eq!(record.tree.children().len(), 2);
    let untouched = storage.load(&first.id).await.unwrap().unwrap();
    assert!(untouched.tree.children().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_teardown_cancels_pending_draft() {
    let drafts = Arc::new(MemoryScratchStorage::new());
    let mut builder = BuilderContainer::new("agency-1", Registry::standard())
        .with_autosave(drafts.clone(), DEFAULT_DEBOUNCE);
    let root = root_id(&builder);

    drop_block(&mut builder, "text", &root);
    assert!(builder.has_pending_draft());
    drop(builder);

    tokio::time::sleep(Duration::from_millis(1000)).await;
    assert_eq!(drafts.write_count(), 0);
}

/// Draft store that cannot delete
struct StickyScratch(MemoryScratchStorage);

impl ScratchStorage for StickyScratch {
    fn get(&self, key: &DraftKey) -> Result<Option<String>, EditorError> {
        self.0.get(key)
    }

    fn set(&self, key: &DraftKey, value: &str) -> Result<(), EditorError> {
        self.0.set(key, value)
    }

    fn remove(&self, _key: &DraftKey) -> Result<(), EditorError> {
        Err(EditorError::storage("read-only scratch"))
    }
}

#[tokio::test]
async fn test_draft_cleanup_failure_keeps_save() {
    let storage = MemoryTemplateStorage::new();
    let mut builder = BuilderContainer::new("agency-1", Registry::standard())
        .with_autosave(Arc::new(StickyScratch(MemoryScratchStorage::new())), DEFAULT_DEBOUNCE);
    let root = root_id(&builder);
    drop_block(&mut builder, "heading", &root);

    let record = builder.save(&storage, "Careers", None).await.unwrap();

    assert_eq!(builder.template_id(), Some(record.id.as_str()));
    assert!(!builder.has_unsaved_changes());
    assert!(!builder.is_saving());
    assert_eq!(storage.len().await, 1);
}

#[tokio::test]
async fn test_update_metadata_needs_saved_template() {
    let storage = MemoryTemplateStorage::new();
    let mut builder = BuilderContainer::new("agency-1", Registry::standard());

    assert!(matches!(
        builder.update_metadata(&storage, "Jobs", None).await,
        Err(EditorError::NotSaved)
    ));

    builder.save(&storage, "Careers", None).await.unwrap();
    let renamed = builder.update_metadata(&storage, "Jobs", Some("New copy")).await.unwrap();
    assert_eq!(renamed.title, "Jobs");
}

#[tokio::test]
async fn test_load_missing_template() {
    let storage = MemoryTemplateStorage::new();
    let result = BuilderContainer::load(&storage, "nope", Registry::standard()).await;
    assert!(matches!(result, Err(EditorError::TemplateNotFound(_))));
}

#[tokio::test(start_paused = true)]
async fn test_draft_debounce() {
    let drafts = Arc::new(MemoryScratchStorage::new());
    let mut builder = BuilderContainer::new("agency-1", Registry::standard())
        .with_autosave(drafts.clone(), DEFAULT_DEBOUNCE);
    let root = root_id(&builder);

    for _ in 0..5 {
        drop_block(&mut builder, "text", &root);
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    // 100ms since the last edit
    assert_eq!(drafts.write_count(), 0);

    tokio::time::sleep(Duration::from_millis(499)).await;
    assert_eq!(drafts.write_count(), 0);

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(drafts.write_count(), 1);

    let stored = drafts.get(&DraftKey::new("agency-1", None)).unwrap().unwrap();
    let draft = BuilderNode::from_json(&stored).unwrap();
    assert_eq!(draft, builder.tree());
    assert_eq!(draft.children().len(), 5);
}

#[tokio::test(start_paused = true)]
async fn test_draft_restored_then_removed_on_save() {
    let drafts = Arc::new(MemoryScratchStorage::new());
    let storage = MemoryTemplateStorage::new();

    let mut first = BuilderContainer::new("agency-1", Registry::standard())
        .with_autosave(drafts.clone(), DEFAULT_DEBOUNCE);
    let root = root_id(&first);
    drop_block(&mut first, "faq", &root);
    tokio::time::sleep(DEFAULT_DEBOUNCE * 2).await;
    let edited = first.tree();

    let mut second = BuilderContainer::new("agency-1", Registry::standard())
        .with_autosave(drafts.clone(), DEFAULT_DEBOUNCE);
    assert!(second.restore_draft().unwrap());
    assert_eq!(second.tree(), edited);
    assert!(second.has_unsaved_changes());

    second.save(&storage, "Careers", None).await.unwrap();
    assert_eq!(drafts.get(&DraftKey::new("agency-1", None)).unwrap(), None);
    assert!(!second.has_pending_draft());
}

#[test]
fn test_malformed_draft_is_discarded() {
    let drafts = Arc::new(MemoryScratchStorage::new());
    let key = DraftKey::new("agency-1", None);
    drafts.set(&key, "{\"id\": ").unwrap();

    let mut builder = BuilderContainer::new("agency-1", Registry::standard())
        .with_autosave(drafts.clone(), DEFAULT_DEBOUNCE);

    assert!(!builder.restore_draft().unwrap());
    assert_eq!(builder.tree().node_type, "root");
    assert!(builder.tree().children().is_empty());
    assert_eq!(drafts.get(&key).unwrap(), None);
}

#[test]
fn test_drafts_are_scoped_per_agency() {
    let drafts = Arc::new(MemoryScratchStorage::new());
    let mut acme = BuilderContainer::new("acme", Registry::standard())
        .with_autosave(drafts.clone(), DEFAULT_DEBOUNCE);
    let root = root_id(&acme);

    // no runtime here, so the draft is written straight away
    drop_block(&mut acme, "text", &root);

    let mut globex = BuilderContainer::new("globex", Registry::standard())
        .with_autosave(drafts.clone(), DEFAULT_DEBOUNCE);
    assert!(!globex.restore_draft().unwrap());
    assert_eq!(acme.draft_key(), DraftKey::new("acme", None));
}
