//! Single-active-item carousel state and swipe gesture detection.

use tracing::trace;

/// Minimum horizontal distance, in logical pixels, for a touch or drag
/// gesture to register as a carousel-navigation intent.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Rotation state for a fixed list of carousel items.
///
/// Owns a single index into `[0, total_items)`. Exactly one item (and
/// its position indicator) is active at any time, and both correspond
/// to [`current_index`](Self::current_index). `total_items` is fixed at
/// construction.
///
/// A carousel over one item or none disables itself: every transition
/// is a no-op, even when invoked programmatically through controls that
/// happen to be bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    current_index: usize,
    total_items: usize,
}

impl CarouselState {
    pub fn new(total_items: usize) -> Self {
        Self {
            current_index: 0,
            total_items,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.total_items > 1
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Whether the item (and indicator) at `index` carries the active
    /// marking.
    pub fn is_active(&self, index: usize) -> bool {
        index == self.current_index
    }

    /// Step backwards, wrapping from the first item to the last.
    pub fn prev(&mut self) {
        if !self.is_enabled() {
            return;
        }
        self.current_index = (self.current_index + self.total_items - 1) % self.total_items;
        trace!(index = self.current_index, "carousel prev");
    }

    /// Step forwards, wrapping from the last item to the first.
    pub fn next(&mut self) {
        if !self.is_enabled() {
            return;
        }
        self.current_index = (self.current_index + 1) % self.total_items;
        trace!(index = self.current_index, "carousel next");
    }

    /// Jump straight to `index` (indicator click). Bounds are the
    /// indicator-count == item-count invariant; not revalidated here.
    pub fn jump(&mut self, index: usize) {
        if !self.is_enabled() {
            return;
        }
        self.current_index = index;
        trace!(index, "carousel jump");
    }

    /// Horizontal translation of the visual track, as a percentage of
    /// the viewport width (`-current_index * 100`).
    pub fn track_offset_percent(&self) -> f32 {
        -(self.current_index as f32) * 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Leftward swipe (start right of end): advance to the next item.
    Left,
    /// Rightward swipe: go back to the previous item.
    Right,
}

/// Two transient horizontal coordinates, overwritten on each gesture
/// and discarded once a direction has been resolved.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start_x: f32,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f32) {
        self.start_x = x;
    }

    /// Resolve the gesture ending at `x`. Distances at or below
    /// [`SWIPE_THRESHOLD`] are not a navigation intent.
    pub fn finish(&mut self, x: f32) -> Option<SwipeDirection> {
        let diff = self.start_x - x;
        if diff.abs() <= SWIPE_THRESHOLD {
            return None;
        }
        if diff > 0.0 {
            Some(SwipeDirection::Left)
        } else {
            Some(SwipeDirection::Right)
        }
    }
}

impl SwipeDirection {
    /// Apply the resolved gesture to a carousel: leftward advances,
    /// rightward goes back.
    pub fn apply(self, state: &mut CarouselState) {
        match self {
            SwipeDirection::Left => state.next(),
            SwipeDirection::Right => state.prev(),
        }
    }
}
