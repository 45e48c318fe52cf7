//! Shared fixtures for integration tests.

use tandem::{FieldEmbeddings, Profile};
use uuid::Uuid;

pub fn profile(name: &str, skills: &str, interests: &str, needs: &str, looking_for: &str) -> Profile {
    Profile {
        id: Uuid::new_v4(),
        name: name.to_string(),
        institution: None,
        degree: None,
        major: None,
        skills: skills.to_string(),
        interests: interests.to_string(),
        needs: needs.to_string(),
        looking_for: looking_for.to_string(),
        embeddings: FieldEmbeddings::default(),
    }
}

/// Subject with a unit skills embedding along the x axis.
pub fn subject_with_unit_skills() -> Profile {
    let mut subject = profile("Subject", "skills text", "", "", "");
    subject.embeddings.skills = Some(vec![1.0, 0.0, 0.0]);
    subject
}

/// Candidate whose needs embedding has the given cosine against the
/// subject's [1, 0, 0] skills embedding.
pub fn candidate_with_cosine(name: &str, cosine: f32) -> Profile {
    let mut candidate = profile(name, "", "", "needs text", "");
    let angle = cosine.clamp(-1.0, 1.0).acos();
    candidate.embeddings.needs = Some(vec![angle.cos(), angle.sin(), 0.0]);
    candidate
}
