use sakuhinshu_core::{
    nearest_section, passes_visibility_gate, select_active, SectionMetrics, ViewportMetrics,
};

fn viewport(scroll_y: f64, height: f64) -> ViewportMetrics {
    ViewportMetrics { scroll_y, height }
}

fn section(top: f64, height: f64) -> Option<SectionMetrics> {
    Some(SectionMetrics { top, height })
}

#[test]
fn picks_section_centered_in_viewport() {
    // Viewport center sits at 400; the middle section's center is exactly
    // there, the others are a full section away.
    let sections = vec![
        section(-400.0, 800.0),
        section(0.0, 800.0),
        section(800.0, 800.0),
    ];
    assert_eq!(nearest_section(viewport(1000.0, 800.0), &sections), Some(1));
}

#[test]
fn equidistant_tie_keeps_earlier_section() {
    // Centers at 200 and 600, both 200px from the viewport center at 400.
    let sections = vec![section(100.0, 200.0), section(500.0, 200.0)];
    assert_eq!(nearest_section(viewport(0.0, 800.0), &sections), Some(0));
}

#[test]
fn section_below_tolerance_zone_is_never_selected() {
    // The compact section at 950 is nearest by raw center distance (600 vs
    // 2499) but starts past viewport height + 100, so the tall in-view
    // section wins.
    let sections = vec![section(950.0, 100.0), section(899.0, 4000.0)];
    assert_eq!(nearest_section(viewport(0.0, 800.0), &sections), Some(1));
}

#[test]
fn section_above_tolerance_zone_is_never_selected() {
    // The first section's bottom sits 110px above the viewport, past the
    // margin, even though its center is nearest by raw distance.
    let sections = vec![section(-600.0, 490.0), section(850.0, 3000.0)];
    assert_eq!(nearest_section(viewport(600.0, 800.0), &sections), Some(1));
}

#[test]
fn unmeasurable_sections_are_skipped() {
    let sections = vec![None, section(100.0, 400.0), None];
    assert_eq!(nearest_section(viewport(0.0, 800.0), &sections), Some(1));
}

#[test]
fn no_candidates_falls_back_to_first() {
    let sections = vec![section(5000.0, 100.0), section(6000.0, 100.0)];
    assert_eq!(nearest_section(viewport(0.0, 800.0), &sections), None);
    assert_eq!(select_active(viewport(0.0, 800.0), &sections), 0);
}

#[test]
fn all_unmeasurable_falls_back_to_first() {
    let sections = vec![None, None];
    assert_eq!(select_active(viewport(0.0, 800.0), &sections), 0);
}

#[test]
fn gate_margin_is_one_hundred_pixels() {
    let vp = viewport(0.0, 800.0);
    // Bottom edge just inside / outside the top margin.
    assert!(passes_visibility_gate(
        SectionMetrics {
            top: -199.0,
            height: 100.0
        },
        vp
    ));
    assert!(!passes_visibility_gate(
        SectionMetrics {
            top: -300.0,
            height: 200.0
        },
        vp
    ));
    // Top edge just inside / outside the bottom margin.
    assert!(passes_visibility_gate(
        SectionMetrics {
            top: 899.0,
            height: 50.0
        },
        vp
    ));
    assert!(!passes_visibility_gate(
        SectionMetrics {
            top: 900.0,
            height: 50.0
        },
        vp
    ));
}

#[test]
fn recomputation_is_pure() {
    let sections = vec![section(0.0, 400.0), section(400.0, 400.0)];
    let vp = viewport(120.0, 800.0);
    let first = nearest_section(vp, &sections);
    assert_eq!(nearest_section(vp, &sections), first);
}
