//! Profile data model.
//!
//! A [`Profile`] carries four free-text fields describing a person's skills,
//! interests, needs and the collaborator they are looking for, plus an
//! optional pre-computed embedding per field. Embeddings are stored by the
//! profile store as JSON-encoded float arrays; [`decode_embedding`] turns a
//! raw column into `Option<Vec<f32>>`, treating any parse failure as absent.

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque profile identifier.
pub type ProfileId = Uuid;

/// The four free-text fields scored by the matching engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Skills,
    Interests,
    Needs,
    LookingFor,
}

impl ProfileField {
    /// All four fields in canonical order.
    pub const ALL: [ProfileField; 4] = [
        ProfileField::Skills,
        ProfileField::Interests,
        ProfileField::Needs,
        ProfileField::LookingFor,
    ];

    /// Stable lower-case name (storage column prefix, log field).
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileField::Skills => "skills",
            ProfileField::Interests => "interests",
            ProfileField::Needs => "needs",
            ProfileField::LookingFor => "looking_for",
        }
    }
}

/// A collaborator profile as read from the profile store.
///
/// The matching engine only reads profiles; embedding writes go through the
/// caller-supplied writeback side effect, never through the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub interests: String,
    #[serde(default)]
    pub needs: String,
    #[serde(default)]
    pub looking_for: String,
    /// Pre-computed field embeddings; absent fields are embedded on demand.
    #[serde(skip)]
    pub embeddings: FieldEmbeddings,
}

impl Profile {
    /// Text of one scored field.
    pub fn field_text(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Skills => &self.skills,
            ProfileField::Interests => &self.interests,
            ProfileField::Needs => &self.needs,
            ProfileField::LookingFor => &self.looking_for,
        }
    }
}

/// One optional embedding per scored field.
///
/// Invariant: embeddings produced by different model versions are never
/// compared. Enforced at scoring time by excluding length-mismatched pairs
/// from the weighted average (the pair term is treated as absent, not zero).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldEmbeddings {
    pub skills: Option<Vec<f32>>,
    pub interests: Option<Vec<f32>>,
    pub needs: Option<Vec<f32>>,
    pub looking_for: Option<Vec<f32>>,
}

impl FieldEmbeddings {
    /// Returns the embedding for one field.
    pub fn field(&self, field: ProfileField) -> Option<&Vec<f32>> {
        match field {
            ProfileField::Skills => self.skills.as_ref(),
            ProfileField::Interests => self.interests.as_ref(),
            ProfileField::Needs => self.needs.as_ref(),
            ProfileField::LookingFor => self.looking_for.as_ref(),
        }
    }

    /// Returns `true` if at least one field has an embedding.
    pub fn has_any(&self) -> bool {
        self.skills.is_some()
            || self.interests.is_some()
            || self.needs.is_some()
            || self.looking_for.is_some()
    }

    /// Returns `true` if every field has an embedding.
    pub fn is_complete(&self) -> bool {
        self.skills.is_some()
            && self.interests.is_some()
            && self.needs.is_some()
            && self.looking_for.is_some()
    }
}

/// Decodes a raw JSON-encoded embedding column.
///
/// A missing column, empty string, or malformed payload all decode to absent;
/// a malformed stored embedding is never a hard error.
pub fn decode_embedding(raw: Option<&str>) -> Option<Vec<f32>> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    serde_json::from_str(raw).ok()
}

/// Encodes an embedding for storage as a JSON float array.
pub fn encode_embedding(embedding: &[f32]) -> String {
    serde_json::to_string(embedding).unwrap_or_else(|_| "[]".to_string())
}
