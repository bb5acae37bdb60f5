use sakuhinshu_core::{circular_offset, CarouselClick, CarouselState};

#[test]
fn center_item_has_zero_offset() {
    for len in 1..=10 {
        for center in 0..len {
            assert_eq!(circular_offset(center, center, len), 0);
        }
    }
}

#[test]
fn single_item_is_always_centered() {
    assert_eq!(circular_offset(0, 0, 1), 0);
}

#[test]
fn even_length_tie_stays_positive() {
    assert_eq!(circular_offset(0, 0, 6), 0);
    assert_eq!(circular_offset(1, 0, 6), 1);
    assert_eq!(circular_offset(2, 0, 6), 2);
    assert_eq!(circular_offset(3, 0, 6), 3);
    assert_eq!(circular_offset(4, 0, 6), -2);
    assert_eq!(circular_offset(5, 0, 6), -1);
}

#[test]
fn odd_length_spread_is_symmetric() {
    assert_eq!(circular_offset(0, 2, 5), -2);
    assert_eq!(circular_offset(1, 2, 5), -1);
    assert_eq!(circular_offset(2, 2, 5), 0);
    assert_eq!(circular_offset(3, 2, 5), 1);
    assert_eq!(circular_offset(4, 2, 5), 2);
}

#[test]
fn offsets_stay_in_wrap_range() {
    for len in 1..=12usize {
        let low = -((len / 2) as i32);
        let high = ((len - 1) / 2) as i32;
        for center in 0..len {
            for index in 0..len {
                let offset = circular_offset(index, center, len);
                assert!(
                    offset >= low && offset <= high,
                    "offset {offset} out of [{low}, {high}] for index {index}, center {center}, len {len}"
                );
            }
        }
    }
}

#[test]
fn offsets_are_unique_per_center() {
    let len = 7;
    for center in 0..len {
        let mut seen = Vec::new();
        for index in 0..len {
            let offset = circular_offset(index, center, len);
            assert!(!seen.contains(&offset));
            seen.push(offset);
        }
    }
}

#[test]
fn click_on_center_zooms_without_moving() {
    let mut state = CarouselState::new(5, 2);
    assert_eq!(state.click(2), CarouselClick::Zoom(2));
    assert_eq!(state.center(), 2);
}

#[test]
fn click_on_side_item_recenters() {
    let mut state = CarouselState::new(6, 1);
    assert_eq!(state.click(4), CarouselClick::Recenter(4));
    assert_eq!(state.center(), 4);
    assert_eq!(state.offset_of(4), 0);
}

#[test]
fn rapid_repeat_clicks_are_last_click_wins() {
    let mut state = CarouselState::new(6, 0);
    state.click(3);
    state.click(5);
    state.click(5);
    assert_eq!(state.center(), 5);
    assert_eq!(state.click(5), CarouselClick::Zoom(5));
}

#[test]
fn new_clamps_center_into_range() {
    let state = CarouselState::new(3, 9);
    assert_eq!(state.center(), 2);
    assert_eq!(state.item_count(), 3);
}
