use chalkboard_modal_adapters::ModalWiringConfig;

#[test]
fn default_config_wires_the_four_admin_dialogs() {
    let config = ModalWiringConfig::default();
    assert_eq!(config.close_control_class, "close");

    let pairs: Vec<(&str, &str)> = config
        .pairs
        .iter()
        .map(|pair| (pair.modal.as_str(), pair.trigger.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("teacherModal", "addTeacher"),
            ("studentModal", "addStudent"),
            ("subjectsModal", "addSubjects"),
            ("classModal", "addGroup"),
        ]
    );
}

#[test]
fn config_roundtrips_through_json() {
    let config = ModalWiringConfig::default();
    let json = serde_json::to_string(&config).expect("serialize config");
    let back: ModalWiringConfig = serde_json::from_str(&json).expect("deserialize config");
    assert_eq!(back, config);
}
