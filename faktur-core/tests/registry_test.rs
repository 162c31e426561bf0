use faktur_core::{available_templates, TemplateId};

#[test]
fn unknown_template_id_falls_back_to_default() {
    assert_eq!(
        TemplateId::parse_or_default("NOT_A_REAL_ID"),
        TemplateId::default()
    );
    assert_eq!(
        TemplateId::parse_or_default("modern_blue"), // case-sensitive
        TemplateId::default()
    );
}

#[test]
fn catalog_metadata_is_complete() {
    let catalog = available_templates();
    assert_eq!(catalog.len(), 4);
    for info in catalog {
        assert!(!info.name.is_empty());
        assert!(!info.description.is_empty());
        assert!(!info.features.is_empty());
        assert_eq!(TemplateId::parse_or_default(info.id.as_str()), info.id);
    }
}

#[test]
fn catalog_descriptions_are_indonesian() {
    let catalog = available_templates();
    assert_eq!(
        catalog[0].description,
        "Template modern dengan aksen biru yang profesional dan clean"
    );
    assert_eq!(
        catalog[2].description,
        "Template profesional dengan tema gelap dan aksen merah"
    );
    assert!(catalog[1].features.contains(&"Desain minimalis"));
    assert!(catalog[3].features.contains(&"Rainbow colors"));
}

#[test]
fn catalog_serializes_for_a_picker_endpoint() {
    let json = serde_json::to_value(available_templates()).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries[0]["id"], "MODERN_BLUE");
    assert_eq!(entries[0]["name"], "Modern Blue");
    assert_eq!(entries[3]["id"], "CREATIVE_COLORFUL");
    assert!(entries[1]["features"].as_array().unwrap().len() >= 1);
}
