use anyhow::Result;
use dropzone::error::ServiceError;
use dropzone::models::{CollectionPatch, FileDraft, FilePatch, UploadStatus};
use dropzone::services::{CollectionService, FileService, Latency, UploadService};
use dropzone::store::MockStore;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

fn seeded() -> Result<Arc<MockStore>> {
    Ok(Arc::new(MockStore::seeded()?))
}

fn draft(name: &str) -> FileDraft {
    FileDraft {
        name: name.to_string(),
        size: 2048,
        mime_type: "text/plain".to_string(),
        tags: vec!["recent".to_string()],
        thumbnail: None,
    }
}

#[tokio::test(start_paused = true)]
async fn calls_wait_for_their_operation_delay() -> Result<()> {
    let files = FileService::files(seeded()?, Latency::simulated());

    let start = Instant::now();
    files.get_all().await;
    assert_eq!(start.elapsed(), Duration::from_millis(300));

    let start = Instant::now();
    files.create(draft("notes.txt")).await?;
    assert_eq!(start.elapsed(), Duration::from_millis(400));

    let collections = CollectionService::collections(seeded()?, Latency::scaled(0.5));
    let start = Instant::now();
    collections.get_all().await;
    assert_eq!(start.elapsed(), Duration::from_millis(125));
    Ok(())
}

#[tokio::test]
async fn unknown_id_is_not_found_and_changes_nothing() -> Result<()> {
    let store = seeded()?;
    let files = FileService::files(Arc::clone(&store), Latency::instant());
    let before = store.files.all();

    let err = files.get_by_id("missing").await.unwrap_err();
    assert_eq!(err, ServiceError::not_found("File", "missing"));
    assert_eq!(err.to_string(), "File not found");

    assert!(files.update("missing", FilePatch::default()).await.is_err());
    assert!(files.delete("missing").await.is_err());
    assert_eq!(store.files.all(), before);
    Ok(())
}

#[tokio::test]
async fn created_files_get_a_fresh_id_and_matching_timestamps() -> Result<()> {
    let store = seeded()?;
    let files = FileService::files(Arc::clone(&store), Latency::instant());
    let seed_ids: Vec<String> = store.files.all().into_iter().map(|f| f.id).collect();

    let created = files.create(draft("report.txt")).await?;
    assert!(!seed_ids.contains(&created.id));
    assert_eq!(created.upload_date, created.last_modified);
    assert_eq!(created.tags, vec!["recent"]);

    let fetched = files.get_by_id(&created.id).await?;
    assert_eq!(fetched, created);
    assert_eq!(files.get_all().await.len(), seed_ids.len() + 1);
    Ok(())
}

#[tokio::test]
async fn update_merges_and_advances_last_modified() -> Result<()> {
    let files = FileService::files(seeded()?, Latency::instant());
    let original = files.get_by_id("1").await?;

    let updated = files
        .update(
            "1",
            FilePatch {
                name: Some("renamed.pdf".to_string()),
                ..FilePatch::default()
            },
        )
        .await?;

    assert_eq!(updated.name, "renamed.pdf");
    assert_eq!(updated.size, original.size);
    assert_eq!(updated.upload_date, original.upload_date);
    assert!(updated.last_modified > original.last_modified);
    Ok(())
}

#[tokio::test]
async fn deleted_files_are_gone() -> Result<()> {
    let files = FileService::files(seeded()?, Latency::instant());
    let removed = files.delete("3").await?;
    assert_eq!(removed.id, "3");
    assert!(files.get_by_id("3").await.is_err());
    assert!(files.delete("3").await.is_err());
    Ok(())
}

#[tokio::test]
async fn uploads_and_collections_share_the_same_crud_shape() -> Result<()> {
    let store = seeded()?;
    let uploads = UploadService::uploads(Arc::clone(&store), Latency::instant());
    let collections = CollectionService::collections(Arc::clone(&store), Latency::instant());

    let failed = uploads.get_by_id("102").await?;
    assert_eq!(failed.status, UploadStatus::Error);

    let renamed = collections
        .update(
            "202",
            CollectionPatch {
                name: Some("Photos".to_string()),
                ..CollectionPatch::default()
            },
        )
        .await?;
    assert_eq!(renamed.name, "Photos");
    assert_eq!(renamed.files, vec!["2", "3", "5"]);

    let err = collections.get_by_id("999").await.unwrap_err();
    assert_eq!(err.to_string(), "Collection not found");
    Ok(())
}

#[tokio::test]
async fn reset_restores_the_seed() -> Result<()> {
    let store = seeded()?;
    let files = FileService::files(Arc::clone(&store), Latency::instant());
    let seed = store.files.all();

    files.delete("1").await?;
    files.create(draft("extra.txt")).await?;
    store.reset();

    assert_eq!(store.files.all(), seed);
    Ok(())
}
