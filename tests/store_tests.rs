use bytes::Bytes;
use photo_enhancer::store::{BlobStore, BlobStoreError, LocalStore};

#[tokio::test]
async fn test_local_store_put_get() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::new(dir.path()).unwrap();

    let data = Bytes::from("hello world");
    store.put("photo.png", data.clone()).await.unwrap();

    let retrieved = store.get("photo.png").await.unwrap();
    assert_eq!(retrieved, data);
}

#[tokio::test]
async fn test_local_store_exists() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::new(dir.path()).unwrap();

    assert!(!store.exists("missing.png").await.unwrap());

    store.put("present.png", Bytes::from("data")).await.unwrap();
    assert!(store.exists("present.png").await.unwrap());
}

#[tokio::test]
async fn test_local_store_get_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::new(dir.path()).unwrap();

    let result = store.get("missing.png").await;
    assert!(result.is_err());
    assert!(matches!(result.unwrap_err(), BlobStoreError::NotFound(_)));
}

#[tokio::test]
async fn test_local_store_overwrite_is_last_write_wins() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::new(dir.path()).unwrap();

    store.put("photo.png", Bytes::from("first")).await.unwrap();
    store.put("photo.png", Bytes::from("second")).await.unwrap();

    let data = store.get("photo.png").await.unwrap();
    assert_eq!(data, Bytes::from("second"));
}

#[tokio::test]
async fn test_local_store_creates_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("uploads");
    assert!(!nested.exists());

    let store = LocalStore::new(&nested).unwrap();
    assert!(nested.is_dir());

    store.put("a.png", Bytes::from("data")).await.unwrap();
    assert!(nested.join("a.png").is_file());
}
