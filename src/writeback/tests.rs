use super::*;
use crate::profile::{FieldEmbeddings, Profile};
use crate::store::{InMemoryProfileStore, ProfileStore};
use std::time::Duration;
use uuid::Uuid;

fn profile() -> Profile {
    Profile {
        id: Uuid::new_v4(),
        name: "Alice".to_string(),
        institution: None,
        degree: None,
        major: None,
        skills: "rust".to_string(),
        interests: String::new(),
        needs: String::new(),
        looking_for: String::new(),
        embeddings: FieldEmbeddings::default(),
    }
}

async fn wait_for<F: Fn() -> bool>(condition: F) {
    for _ in 0..100 {
        if condition() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("condition not reached within 1s");
}

#[tokio::test]
async fn test_persist_writes_through_worker() {
    let store = Arc::new(InMemoryProfileStore::new());
    let p = profile();
    let id = p.id;
    store.insert(p).unwrap();

    let (handle, worker) = spawn_writeback_worker(store.clone());
    handle.persist(
        id,
        FieldEmbeddings {
            skills: Some(vec![0.1, 0.2]),
            ..Default::default()
        },
    );

    {
        let store = store.clone();
        wait_for(move || {
            store
                .get(id)
                .map(|p| p.embeddings.skills.is_some())
                .unwrap_or(false)
        })
        .await;
    }

    drop(handle);
    worker.await.unwrap();
}

#[tokio::test]
async fn test_unknown_profile_does_not_kill_worker() {
    let store = Arc::new(InMemoryProfileStore::new());
    let p = profile();
    let id = p.id;
    store.insert(p).unwrap();

    let (handle, worker) = spawn_writeback_worker(store.clone());

    // First job targets a missing profile and fails inside the worker.
    handle.persist(Uuid::new_v4(), FieldEmbeddings::default());
    handle.persist(
        id,
        FieldEmbeddings {
            needs: Some(vec![1.0]),
            ..Default::default()
        },
    );

    {
        let store = store.clone();
        wait_for(move || {
            store
                .get(id)
                .map(|p| p.embeddings.needs.is_some())
                .unwrap_or(false)
        })
        .await;
    }

    drop(handle);
    worker.await.unwrap();
}

#[tokio::test]
async fn test_worker_exits_when_handles_dropped() {
    let store = Arc::new(InMemoryProfileStore::new());
    let (handle, worker) = spawn_writeback_worker(store);
    drop(handle);
    tokio::time::timeout(Duration::from_secs(1), worker)
        .await
        .expect("worker should exit")
        .unwrap();
}
