use crate::carousel::{CarouselState, SwipeDirection, SwipeTracker, SWIPE_THRESHOLD};

#[test]
fn prev_at_first_item_wraps_to_last() {
    let mut carousel = CarouselState::new(4);
    assert_eq!(carousel.current_index(), 0);
    carousel.prev();
    assert_eq!(carousel.current_index(), 3);
}

#[test]
fn next_at_last_item_wraps_to_first() {
    let mut carousel = CarouselState::new(4);
    carousel.jump(3);
    carousel.next();
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn index_stays_in_range_across_arbitrary_transition_sequences() {
    let total = 5;
    let mut carousel = CarouselState::new(total);
    // Deterministic mixed sequence, long enough to wrap both ways
    // several times.
    for step in 0..1000 {
        match step % 7 {
            0 | 3 | 5 => carousel.next(),
            1 | 4 => carousel.prev(),
            2 => carousel.jump(step % total),
            _ => carousel.prev(),
        }
        assert!(carousel.current_index() < total);
    }
}

#[test]
fn jump_sets_index_exactly_regardless_of_prior_value() {
    let mut carousel = CarouselState::new(6);
    carousel.next();
    carousel.next();
    carousel.jump(5);
    assert_eq!(carousel.current_index(), 5);
    carousel.jump(0);
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn exactly_one_item_is_active_after_any_transition() {
    let total = 4;
    let mut carousel = CarouselState::new(total);
    for _ in 0..10 {
        carousel.next();
        let active: Vec<usize> = (0..total).filter(|&i| carousel.is_active(i)).collect();
        assert_eq!(active, vec![carousel.current_index()]);
    }
}

#[test]
fn track_offset_follows_current_index() {
    let mut carousel = CarouselState::new(3);
    assert_eq!(carousel.track_offset_percent(), 0.0);
    carousel.next();
    assert_eq!(carousel.track_offset_percent(), -100.0);
    carousel.jump(2);
    assert_eq!(carousel.track_offset_percent(), -200.0);
}

#[test]
fn single_item_carousel_ignores_all_transitions() {
    let mut carousel = CarouselState::new(1);
    assert!(!carousel.is_enabled());
    carousel.next();
    carousel.prev();
    carousel.jump(0);
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn empty_carousel_ignores_all_transitions() {
    let mut carousel = CarouselState::new(0);
    assert!(!carousel.is_enabled());
    carousel.next();
    carousel.prev();
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn swipe_at_or_below_threshold_is_not_a_gesture() {
    let mut swipe = SwipeTracker::default();
    swipe.begin(200.0);
    assert_eq!(swipe.finish(200.0 - SWIPE_THRESHOLD), None);
    swipe.begin(200.0);
    assert_eq!(swipe.finish(200.0 + SWIPE_THRESHOLD), None);
}

#[test]
fn leftward_swipe_past_threshold_advances_exactly_once() {
    let mut carousel = CarouselState::new(3);
    let mut swipe = SwipeTracker::default();
    swipe.begin(300.0);
    let direction = swipe.finish(300.0 - SWIPE_THRESHOLD - 1.0);
    assert_eq!(direction, Some(SwipeDirection::Left));
    direction.expect("direction").apply(&mut carousel);
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn rightward_swipe_past_threshold_goes_back_exactly_once() {
    let mut carousel = CarouselState::new(3);
    let mut swipe = SwipeTracker::default();
    swipe.begin(100.0);
    let direction = swipe.finish(100.0 + SWIPE_THRESHOLD + 1.0);
    assert_eq!(direction, Some(SwipeDirection::Right));
    direction.expect("direction").apply(&mut carousel);
    assert_eq!(carousel.current_index(), 2);
}
