use super::*;
use crate::profile::{FieldEmbeddings, Profile, ProfileField};
use uuid::Uuid;

fn profile(name: &str) -> Profile {
    Profile {
        id: Uuid::new_v4(),
        name: name.to_string(),
        institution: None,
        degree: None,
        major: None,
        skills: "rust".to_string(),
        interests: "systems".to_string(),
        needs: "frontend".to_string(),
        looking_for: "designer".to_string(),
        embeddings: FieldEmbeddings::default(),
    }
}

#[test]
fn test_insert_and_get() {
    let store = InMemoryProfileStore::new();
    let p = profile("Alice");
    let id = p.id;

    store.insert(p).unwrap();
    let read = store.get(id).unwrap();
    assert_eq!(read.name, "Alice");
    assert!(!read.embeddings.has_any());
}

#[test]
fn test_insert_duplicate_rejected() {
    let store = InMemoryProfileStore::new();
    let p = profile("Alice");
    store.insert(p.clone()).unwrap();
    assert!(matches!(
        store.insert(p),
        Err(StoreError::AlreadyExists { .. })
    ));
}

#[test]
fn test_get_unknown_profile() {
    let store = InMemoryProfileStore::new();
    assert!(matches!(
        store.get(Uuid::new_v4()),
        Err(StoreError::NotFound { .. })
    ));
}

#[test]
fn test_candidates_exclude_subject() {
    let store = InMemoryProfileStore::new();
    let subject = profile("Alice");
    let subject_id = subject.id;
    store.insert(subject).unwrap();
    store.insert(profile("Bob")).unwrap();
    store.insert(profile("Carol")).unwrap();

    let candidates = store.candidates(subject_id).unwrap();
    assert_eq!(candidates.len(), 2);
    assert!(candidates.iter().all(|c| c.id != subject_id));
}

#[test]
fn test_write_embeddings_round_trip() {
    let store = InMemoryProfileStore::new();
    let p = profile("Alice");
    let id = p.id;
    store.insert(p).unwrap();
    assert!(store.embeddings_updated_at(id).is_none());

    let embeddings = FieldEmbeddings {
        skills: Some(vec![0.1, 0.2]),
        needs: Some(vec![0.3, 0.4]),
        ..Default::default()
    };
    store.write_embeddings(id, &embeddings).unwrap();

    let read = store.get(id).unwrap();
    assert_eq!(read.embeddings.skills, Some(vec![0.1, 0.2]));
    assert_eq!(read.embeddings.interests, None);
    assert_eq!(read.embeddings.needs, Some(vec![0.3, 0.4]));
    assert!(store.embeddings_updated_at(id).is_some());
}

#[test]
fn test_malformed_stored_embedding_decodes_to_absent() {
    let store = InMemoryProfileStore::new();
    let p = profile("Alice");
    let id = p.id;
    store.insert(p).unwrap();

    store
        .set_raw_embedding(id, ProfileField::Skills, Some("not json".to_string()))
        .unwrap();
    store
        .set_raw_embedding(id, ProfileField::Needs, Some("[0.5, 0.5]".to_string()))
        .unwrap();

    let read = store.get(id).unwrap();
    assert_eq!(read.embeddings.skills, None, "malformed payload is absent");
    assert_eq!(read.embeddings.needs, Some(vec![0.5, 0.5]));
}

#[test]
fn test_update_replaces_text_and_keeps_embeddings() {
    let store = InMemoryProfileStore::new();
    let p = profile("Alice");
    let id = p.id;
    store.insert(p).unwrap();
    store
        .write_embeddings(
            id,
            &FieldEmbeddings {
                skills: Some(vec![1.0]),
                ..Default::default()
            },
        )
        .unwrap();

    let updated = store
        .update(
            id,
            ProfileUpdate {
                skills: Some("rust, wasm".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.skills, "rust, wasm");
    // Stale embeddings survive until the background refresh lands.
    assert_eq!(updated.embeddings.skills, Some(vec![1.0]));
}
