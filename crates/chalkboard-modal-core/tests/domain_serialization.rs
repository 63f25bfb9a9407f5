use chalkboard_modal_core::{BindingPair, ElementId};

#[test]
fn element_id_serializes_as_bare_string() {
    let id = ElementId::new("teacherModal");
    let json = serde_json::to_string(&id).expect("serialize id");
    assert_eq!(json, "\"teacherModal\"");
}

#[test]
fn binding_pair_roundtrips_through_json() {
    let pair = BindingPair::new("studentModal", "addStudent");
    let json = serde_json::to_string(&pair).expect("serialize pair");
    assert!(json.contains("studentModal"));
    assert!(json.contains("addStudent"));

    let back: BindingPair = serde_json::from_str(&json).expect("deserialize pair");
    assert_eq!(back, pair);
}
