pub mod carousel;
pub mod scroll;
pub mod sections;

pub use carousel::{circular_offset, CarouselClick, CarouselState};
pub use scroll::{animates_on_entrance, direction_step, ScrollDirection, DIRECTION_JITTER_PX};
pub use sections::{
    nearest_section, passes_visibility_gate, select_active, SectionMetrics, ViewportMetrics,
    VISIBILITY_MARGIN,
};
