mod common;

use common::fixtures::portfolio_sections;
use folio::{
    ActiveLinkConfig, ActiveSectionTracker, SectionBounds, SectionId, link_is_active,
    resolve_active,
};

fn active_at(sections: &[SectionBounds], scroll_y: f64) -> Option<String> {
    resolve_active(sections, scroll_y, &ActiveLinkConfig::default()).map(|id| id.to_string())
}

#[test]
fn test_near_top_highlights_first_section() {
    common::init_logging();
    let sections = portfolio_sections();
    for scroll_y in [0.0, 42.0, 99.9] {
        assert_eq!(active_at(&sections, scroll_y).as_deref(), Some("about"));
    }
}

#[test]
fn test_lookahead_selects_section_about_to_enter() {
    let sections = vec![
        SectionBounds::new("a", 0.0),
        SectionBounds::new("b", 500.0),
        SectionBounds::new("c", 1200.0),
    ];
    assert_eq!(active_at(&sections, 550.0).as_deref(), Some("b"));
    // 1200 - 150 lookahead
    assert_eq!(active_at(&sections, 1049.0).as_deref(), Some("b"));
    assert_eq!(active_at(&sections, 1050.0).as_deref(), Some("c"));
}

#[test]
fn test_resolution_is_deterministic() {
    let sections = portfolio_sections();
    let mut scroll_y = 0.0;
    while scroll_y < 3000.0 {
        let first = active_at(&sections, scroll_y);
        let second = active_at(&sections, scroll_y);
        assert_eq!(first, second, "scroll {}", scroll_y);
        scroll_y += 37.5;
    }
}

#[test]
fn test_active_section_never_moves_backwards_while_scrolling_down() {
    let sections = portfolio_sections();
    let order: Vec<&str> = sections.iter().map(|s| s.id.as_str()).collect();
    let mut last_index = 0;
    for step in 0..120 {
        let scroll_y = f64::from(step) * 25.0;
        let active = active_at(&sections, scroll_y).expect("sections present");
        let index = order
            .iter()
            .position(|id| *id == active)
            .expect("known section");
        assert!(index >= last_index, "moved back at scroll {}", scroll_y);
        last_index = index;
    }
    assert_eq!(order[last_index], "contact");
}

#[test]
fn test_custom_thresholds_apply() {
    let config = ActiveLinkConfig {
        lookahead: 0.0,
        top_threshold: 0.0,
        ..ActiveLinkConfig::default()
    };
    let sections = vec![
        SectionBounds::new("intro", 200.0),
        SectionBounds::new("work", 800.0),
    ];
    assert_eq!(resolve_active(&sections, 100.0, &config), None);
    assert_eq!(
        resolve_active(&sections, 799.0, &config).map(SectionId::as_str),
        Some("intro")
    );
}

#[test]
fn test_tracker_reports_only_changes() {
    common::init_logging();
    let sections = portfolio_sections();
    let mut tracker = ActiveSectionTracker::new(ActiveLinkConfig::default());

    assert!(tracker.update(&sections, 0.0));
    assert!(!tracker.update(&sections, 50.0));
    assert!(tracker.update(&sections, 400.0));
    assert_eq!(tracker.current().map(SectionId::as_str), Some("experience"));
    assert!(!tracker.update(&sections, 700.0));
    assert_eq!(tracker.active_class(), "active");
}

#[test]
fn test_exactly_one_link_matches_current_section() {
    let sections = portfolio_sections();
    let links = ["#about", "#experience", "#projects", "#skills", "#contact"];
    let current = SectionId::new("projects");

    let active: Vec<&str> = links
        .iter()
        .copied()
        .filter(|href| link_is_active(Some(href), Some(&current)))
        .collect();
    assert_eq!(active, vec!["#projects"]);
    assert_eq!(sections.len(), links.len());

    assert!(!links.iter().any(|href| link_is_active(Some(href), None)));
    assert!(link_is_active(Some("#"), None));
    assert!(!link_is_active(None, Some(&current)));
}
