//! Structured prompt construction for the deep-analysis call.

use crate::profile::Profile;

/// System instruction framing the model as a matching analyst.
pub const SYSTEM_PROMPT: &str = "You are an expert analyst for academic and professional \
collaboration matching. Evaluate how well two people match as collaborators and provide \
concrete suggestions. Reply with a JSON object only.";

/// Marker rendered for any missing field.
///
/// Fields are never silently omitted: a stable prompt shape keeps the
/// model's structured output stable.
pub const NOT_PROVIDED: &str = "not provided";

/// Builds the user message comparing two profiles.
pub fn build_match_prompt(subject: &Profile, candidate: &Profile, prior_score: f32) -> String {
    format!(
        "Analyze the match and collaboration potential of these two people:\n\n\
         {}\n\n\
         {}\n\n\
         **Semantic similarity (prior stage)**: {:.1}%\n\n\
         Return a JSON object (no markdown fences) with exactly these fields:\n\
         {{\n\
           \"match_score\": 0.85,\n\
           \"reasons\": [\"specific reason naming the matching skills, interests or needs\"],\n\
           \"collaboration_suggestions\": [\"practical way they could work together\"],\n\
           \"potential_projects\": [\"concrete joint project idea\"]\n\
         }}\n\n\
         Notes:\n\
         1. match_score is between 0 and 1 and weighs skill complementarity, interest \
         overlap and cross-disciplinary potential.\n\
         2. reasons must point at concrete fields, not generalities.\n\
         3. If the match is weak, say where the gap is and suggest improvements.",
        render_profile("Person A", subject),
        render_profile("Person B", candidate),
        prior_score * 100.0
    )
}

fn render_profile(label: &str, profile: &Profile) -> String {
    format!(
        "**{label}: {name}**\n\
         - Institution: {institution}\n\
         - Degree: {degree}\n\
         - Field of study: {major}\n\
         - Skills: {skills}\n\
         - Interests: {interests}\n\
         - Needs: {needs}\n\
         - Looking for: {looking_for}",
        name = profile.name,
        institution = opt_or_marker(profile.institution.as_deref()),
        degree = opt_or_marker(profile.degree.as_deref()),
        major = opt_or_marker(profile.major.as_deref()),
        skills = text_or_marker(&profile.skills),
        interests = text_or_marker(&profile.interests),
        needs = text_or_marker(&profile.needs),
        looking_for = text_or_marker(&profile.looking_for),
    )
}

fn opt_or_marker(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => NOT_PROVIDED,
    }
}

fn text_or_marker(value: &str) -> &str {
    if value.trim().is_empty() {
        NOT_PROVIDED
    } else {
        value
    }
}
