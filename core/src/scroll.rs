/// Scroll deltas smaller than this are treated as jitter and keep the
/// previous direction.
pub const DIRECTION_JITTER_PX: f64 = 8.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Folds one scroll sample into a direction reading.
///
/// Returns `None` (unknown) at the top of the page so entrance animations
/// replay after a jump back to the start.
pub fn direction_step(
    previous: Option<ScrollDirection>,
    last_y: f64,
    new_y: f64,
) -> Option<ScrollDirection> {
    if new_y <= 0.0 {
        return None;
    }
    let delta = new_y - last_y;
    if delta.abs() < DIRECTION_JITTER_PX {
        return previous;
    }
    Some(if delta > 0.0 {
        ScrollDirection::Down
    } else {
        ScrollDirection::Up
    })
}

/// Whether entrance animations should play for the current reading.
/// Sections animate while scrolling down or before any reading exists;
/// scrolling back up keeps them static.
pub fn animates_on_entrance(direction: Option<ScrollDirection>) -> bool {
    !matches!(direction, Some(ScrollDirection::Up))
}
