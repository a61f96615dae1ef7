use landing_kit::components::sections::{SectionConfig, SectionsRenderer, render_sections};
use landing_kit::view::{RenderOnce, View};
use pretty_assertions::assert_eq;

fn page() -> Vec<SectionConfig> {
    serde_json::from_str(
        r#"[
            {"type": "hero", "content": {"title": "Welcome"}},
            {"type": "bogus", "content": {}},
            {"type": "stats-grid", "content": {"stats": [{"label": "Users", "value": 100}]}}
        ]"#,
    )
    .expect("valid section list")
}

#[test]
fn renders_one_slot_per_section_in_order() {
    let rendered = render_sections(&page());

    assert_eq!(rendered.len(), 3);
    assert_eq!(
        rendered.iter().map(|s| s.key).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );

    let hero = &rendered[0].view;
    let title = hero.find_by_tag("h1").expect("hero title");
    assert_eq!(title.text_content(), "Welcome");

    assert_eq!(rendered[1].view, View::Empty);

    let stats = &rendered[2].view;
    let cards = stats.find_all_by_class("stat-card");
    assert_eq!(cards.len(), 1);
    let value = stats.find_by_class("stat-card-value").expect("value");
    assert_eq!(value.text_content(), "100");
    let label = stats.find_by_class("stat-card-label").expect("label");
    assert_eq!(label.text_content(), "Users");
}

#[test]
fn unknown_section_is_kept_as_explicit_variant() {
    let sections = page();
    assert!(matches!(&sections[1], SectionConfig::Unknown { kind } if kind == "bogus"));
    assert!(!sections[1].is_known());
}

#[test]
fn empty_list_renders_nothing() {
    assert!(render_sections(&[]).is_empty());
    assert!(SectionsRenderer::new(Vec::new()).render().is_empty());
}

#[test]
fn identical_sections_render_independently() {
    let hero: SectionConfig =
        serde_json::from_str(r#"{"type": "hero", "content": {"title": "Again"}}"#)
            .expect("valid hero");
    let rendered = render_sections(&[hero.clone(), hero]);

    assert_eq!(rendered.len(), 2);
    assert_eq!(rendered[0].view, rendered[1].view);
    assert_ne!(rendered[0].key, rendered[1].key);
}

#[test]
fn html_output_contains_every_known_section() {
    let html = SectionsRenderer::new(page()).render().to_html();
    assert!(html.contains("Welcome"));
    assert!(html.contains("Users"));
    assert!(!html.contains("bogus"));
}
