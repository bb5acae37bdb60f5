/// Extra margin, in CSS pixels, a section may sit outside the viewport and
/// still count as a candidate. Tolerates fast scroll jumps that skip frames.
pub const VISIBILITY_MARGIN: f64 = 100.0;

/// Current viewport state, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportMetrics {
    pub scroll_y: f64,
    pub height: f64,
}

/// One section's bounding box, relative to the viewport (as reported by
/// `getBoundingClientRect`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionMetrics {
    pub top: f64,
    pub height: f64,
}

impl SectionMetrics {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Whether a section overlaps the viewport within [`VISIBILITY_MARGIN`].
pub fn passes_visibility_gate(section: SectionMetrics, viewport: ViewportMetrics) -> bool {
    section.bottom() > -VISIBILITY_MARGIN && section.top < viewport.height + VISIBILITY_MARGIN
}

/// Index of the gated section whose vertical center is closest to the
/// viewport center. `None` entries (unmeasurable sections) are skipped.
/// Exact distance ties keep the earlier section.
pub fn nearest_section(
    viewport: ViewportMetrics,
    sections: &[Option<SectionMetrics>],
) -> Option<usize> {
    let viewport_center = viewport.scroll_y + viewport.height / 2.0;
    let mut best: Option<(usize, f64)> = None;
    for (index, metrics) in sections.iter().enumerate() {
        let Some(metrics) = metrics else {
            continue;
        };
        if !passes_visibility_gate(*metrics, viewport) {
            continue;
        }
        let element_center = viewport.scroll_y + metrics.top + metrics.height / 2.0;
        let distance = (viewport_center - element_center).abs();
        match &best {
            Some((_, best_distance)) if distance >= *best_distance => {}
            _ => {
                best = Some((index, distance));
            }
        }
    }
    best.map(|(index, _)| index)
}

/// [`nearest_section`] with the first configured section as the fallback
/// when nothing passes the gate.
pub fn select_active(viewport: ViewportMetrics, sections: &[Option<SectionMetrics>]) -> usize {
    nearest_section(viewport, sections).unwrap_or(0)
}
