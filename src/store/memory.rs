//! In-memory profile store.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;

#[cfg(any(test, feature = "mock"))]
use crate::profile::ProfileField;
use crate::profile::{FieldEmbeddings, Profile, ProfileId, decode_embedding, encode_embedding};

use super::error::StoreError;
use super::{EmbeddingWriter, ProfileStore, ProfileUpdate};

/// One stored record: profile text plus raw JSON embedding columns.
#[derive(Debug, Clone)]
struct StoredRecord {
    profile: Profile,
    skills_embedding: Option<String>,
    interests_embedding: Option<String>,
    needs_embedding: Option<String>,
    looking_for_embedding: Option<String>,
    embeddings_updated_at: Option<DateTime<Utc>>,
}

impl StoredRecord {
    fn decode(&self) -> Profile {
        let mut profile = self.profile.clone();
        profile.embeddings = FieldEmbeddings {
            skills: decode_embedding(self.skills_embedding.as_deref()),
            interests: decode_embedding(self.interests_embedding.as_deref()),
            needs: decode_embedding(self.needs_embedding.as_deref()),
            looking_for: decode_embedding(self.looking_for_embedding.as_deref()),
        };
        profile
    }
}

/// Thread-safe in-memory [`ProfileStore`] + [`EmbeddingWriter`].
#[derive(Default)]
pub struct InMemoryProfileStore {
    records: RwLock<HashMap<ProfileId, StoredRecord>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new profile, encoding any embeddings it carries.
    pub fn insert(&self, profile: Profile) -> Result<(), StoreError> {
        let mut records = self.records.write();
        if records.contains_key(&profile.id) {
            return Err(StoreError::AlreadyExists { id: profile.id });
        }

        let embeddings = profile.embeddings.clone();
        let record = StoredRecord {
            skills_embedding: embeddings.skills.as_deref().map(encode_embedding),
            interests_embedding: embeddings.interests.as_deref().map(encode_embedding),
            needs_embedding: embeddings.needs.as_deref().map(encode_embedding),
            looking_for_embedding: embeddings.looking_for.as_deref().map(encode_embedding),
            embeddings_updated_at: embeddings.has_any().then(Utc::now),
            profile,
        };
        records.insert(record.profile.id, record);
        Ok(())
    }

    /// Replaces the text fields of a profile and returns the updated view.
    pub fn update(&self, id: ProfileId, update: ProfileUpdate) -> Result<Profile, StoreError> {
        let mut records = self.records.write();
        let record = records.get_mut(&id).ok_or(StoreError::NotFound { id })?;

        let profile = &mut record.profile;
        if let Some(name) = update.name {
            profile.name = name;
        }
        if let Some(institution) = update.institution {
            profile.institution = Some(institution);
        }
        if let Some(degree) = update.degree {
            profile.degree = Some(degree);
        }
        if let Some(major) = update.major {
            profile.major = Some(major);
        }
        if let Some(skills) = update.skills {
            profile.skills = skills;
        }
        if let Some(interests) = update.interests {
            profile.interests = interests;
        }
        if let Some(needs) = update.needs {
            profile.needs = needs;
        }
        if let Some(looking_for) = update.looking_for {
            profile.looking_for = looking_for;
        }

        Ok(record.decode())
    }

    /// Number of stored profiles.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Returns `true` if no profiles are stored.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// When the profile's embeddings were last written.
    pub fn embeddings_updated_at(&self, id: ProfileId) -> Option<DateTime<Utc>> {
        self.records
            .read()
            .get(&id)
            .and_then(|record| record.embeddings_updated_at)
    }

    /// Overwrites one raw embedding column, bypassing encoding.
    ///
    /// Lets tests exercise the malformed-payload → absent decode path.
    #[cfg(any(test, feature = "mock"))]
    pub fn set_raw_embedding(
        &self,
        id: ProfileId,
        field: ProfileField,
        raw: Option<String>,
    ) -> Result<(), StoreError> {
        let mut records = self.records.write();
        let record = records.get_mut(&id).ok_or(StoreError::NotFound { id })?;
        match field {
            ProfileField::Skills => record.skills_embedding = raw,
            ProfileField::Interests => record.interests_embedding = raw,
            ProfileField::Needs => record.needs_embedding = raw,
            ProfileField::LookingFor => record.looking_for_embedding = raw,
        }
        Ok(())
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn get(&self, id: ProfileId) -> Result<Profile, StoreError> {
        self.records
            .read()
            .get(&id)
            .map(StoredRecord::decode)
            .ok_or(StoreError::NotFound { id })
    }

    fn candidates(&self, exclude: ProfileId) -> Result<Vec<Profile>, StoreError> {
        Ok(self
            .records
            .read()
            .values()
            .filter(|record| record.profile.id != exclude)
            .map(StoredRecord::decode)
            .collect())
    }
}

impl EmbeddingWriter for InMemoryProfileStore {
    fn write_embeddings(
        &self,
        id: ProfileId,
        embeddings: &FieldEmbeddings,
    ) -> Result<(), StoreError> {
        let mut records = self.records.write();
        let record = records.get_mut(&id).ok_or(StoreError::NotFound { id })?;

        record.skills_embedding = embeddings.skills.as_deref().map(encode_embedding);
        record.interests_embedding = embeddings.interests.as_deref().map(encode_embedding);
        record.needs_embedding = embeddings.needs.as_deref().map(encode_embedding);
        record.looking_for_embedding = embeddings.looking_for.as_deref().map(encode_embedding);
        record.embeddings_updated_at = Some(Utc::now());

        Ok(())
    }
}
