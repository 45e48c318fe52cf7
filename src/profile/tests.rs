use super::*;

fn profile() -> Profile {
    Profile {
        id: Uuid::new_v4(),
        name: "Test".to_string(),
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
fn test_decode_valid_embedding() {
    let decoded = decode_embedding(Some("[0.1, 0.2, 0.3]"));
    assert_eq!(decoded, Some(vec![0.1, 0.2, 0.3]));
}

#[test]
fn test_decode_missing_column() {
    assert_eq!(decode_embedding(None), None);
}

#[test]
fn test_decode_empty_string() {
    assert_eq!(decode_embedding(Some("")), None);
    assert_eq!(decode_embedding(Some("   ")), None);
}

#[test]
fn test_decode_malformed_payload_is_absent() {
    assert_eq!(decode_embedding(Some("not json")), None);
    assert_eq!(decode_embedding(Some("{\"a\": 1}")), None);
    assert_eq!(decode_embedding(Some("[0.1, \"x\"]")), None);
}

#[test]
fn test_encode_decode_round_trip() {
    let original = vec![0.25f32, -1.0, 3.5];
    let decoded = decode_embedding(Some(&encode_embedding(&original)));
    assert_eq!(decoded, Some(original));
}

#[test]
fn test_field_text_accessor() {
    let p = profile();
    assert_eq!(p.field_text(ProfileField::Skills), "rust");
    assert_eq!(p.field_text(ProfileField::Interests), "systems");
    assert_eq!(p.field_text(ProfileField::Needs), "frontend");
    assert_eq!(p.field_text(ProfileField::LookingFor), "designer");
}

#[test]
fn test_has_any_and_is_complete() {
    let mut e = FieldEmbeddings::default();
    assert!(!e.has_any());
    assert!(!e.is_complete());

    e.interests = Some(vec![1.0]);
    assert!(e.has_any());
    assert!(!e.is_complete());

    e.skills = Some(vec![1.0]);
    e.needs = Some(vec![1.0]);
    e.looking_for = Some(vec![1.0]);
    assert!(e.is_complete());
}

#[test]
fn test_field_accessor_matches_struct_fields() {
    let e = FieldEmbeddings {
        skills: Some(vec![1.0]),
        interests: None,
        needs: Some(vec![2.0]),
        looking_for: None,
    };
    assert_eq!(e.field(ProfileField::Skills), Some(&vec![1.0]));
    assert_eq!(e.field(ProfileField::Interests), None);
    assert_eq!(e.field(ProfileField::Needs), Some(&vec![2.0]));
    assert_eq!(e.field(ProfileField::LookingFor), None);
}
