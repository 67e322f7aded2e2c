use crate::event::{MotionEvent, MotionVector};

/// Turns absolute pointer positions into frame to frame deltas.
///
/// Tracking follows one pointer id. When that pointer disappears or the
/// number of contacts changes, tracking restarts at the current position and
/// the delta for that event is zero.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    cold_start: bool,
    tracked_pointer_id: i32,
    pointer_count: usize,
    last_x: f32,
    last_y: f32,
}

impl Default for PointerTracker {
    fn default() -> PointerTracker {
        PointerTracker {
            cold_start: true,
            tracked_pointer_id: 0,
            pointer_count: 0,
            last_x: 0.0,
            last_y: 0.0,
        }
    }
}

impl PointerTracker {
    pub fn new() -> PointerTracker {
        PointerTracker::default()
    }

    fn start_tracking(&mut self, event: &MotionEvent) {
        self.cold_start = false;
        self.tracked_pointer_id = event.pointers.first().map_or(0, |pointer| pointer.id);
        self.pointer_count = event.pointer_count();
        self.last_x = event.x();
        self.last_y = event.y();
    }

    /// Drops the reference point; the next tracked event yields a zero delta.
    pub fn cancel_tracking(&mut self) {
        self.cold_start = true;
    }

    pub fn is_tracking(&self) -> bool {
        !self.cold_start
    }

    /// Writes the motion since the previous event into `vector` and returns
    /// the index of the tracked pointer within `event`.
    pub fn track_event(&mut self, event: &MotionEvent, vector: &mut MotionVector) -> usize {
        let index = match event.find_pointer_index(self.tracked_pointer_id) {
            Some(index) if !self.cold_start && self.pointer_count == event.pointer_count() => {
                index
            }
            _ => {
                self.start_tracking(event);
                0
            }
        };
        let (x, y) = event
            .pointers
            .get(index)
            .map_or((self.last_x, self.last_y), |pointer| (pointer.x, pointer.y));
        vector.set(x - self.last_x, y - self.last_y);
        self.last_x = x;
        self.last_y = y;
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Action, DeviceId, Source};

    fn event(pointers: &[(i32, f32, f32)]) -> MotionEvent {
        pointers.iter().fold(
            MotionEvent::new(DeviceId(1), Source::TOUCHPAD, Action::Move),
            |event, &(id, x, y)| event.with_pointer(id, x, y),
        )
    }

    #[test]
    fn test_first_event_is_zero() {
        let mut tracker = PointerTracker::new();
        let mut vector = MotionVector::new(9.0, 9.0);
        tracker.track_event(&event(&[(0, 100.0, 50.0)]), &mut vector);
        assert_eq!(vector, MotionVector::ZERO);
        assert!(tracker.is_tracking());
    }

    #[test]
    fn test_delta_between_events() {
        let mut tracker = PointerTracker::new();
        let mut vector = MotionVector::default();
        tracker.track_event(&event(&[(0, 100.0, 50.0)]), &mut vector);
        tracker.track_event(&event(&[(0, 103.0, 54.0)]), &mut vector);
        assert_eq!(vector, MotionVector::new(3.0, 4.0));
        tracker.track_event(&event(&[(0, 101.0, 54.0)]), &mut vector);
        assert_eq!(vector, MotionVector::new(-2.0, 0.0));
    }

    #[test]
    fn test_cancel_restarts_baseline() {
        let mut tracker = PointerTracker::new();
        let mut vector = MotionVector::default();
        tracker.track_event(&event(&[(0, 10.0, 10.0)]), &mut vector);
        tracker.cancel_tracking();
        tracker.track_event(&event(&[(0, 400.0, 300.0)]), &mut vector);
        assert_eq!(vector, MotionVector::ZERO);
    }

    #[test]
    fn test_pointer_count_change_restarts() {
        let mut tracker = PointerTracker::new();
        let mut vector = MotionVector::default();
        tracker.track_event(&event(&[(0, 10.0, 10.0)]), &mut vector);
        tracker.track_event(&event(&[(0, 12.0, 10.0), (1, 80.0, 80.0)]), &mut vector);
        assert_eq!(vector, MotionVector::ZERO);
        let index = tracker.track_event(&event(&[(0, 12.0, 15.0), (1, 80.0, 85.0)]), &mut vector);
        assert_eq!(index, 0);
        assert_eq!(vector, MotionVector::new(0.0, 5.0));
    }

    #[test]
    fn test_follows_tracked_pointer_id() {
        let mut tracker = PointerTracker::new();
        let mut vector = MotionVector::default();
        tracker.track_event(&event(&[(4, 10.0, 10.0), (5, 50.0, 50.0)]), &mut vector);
        // Same contacts, reported in a different order.
        let index = tracker.track_event(&event(&[(5, 51.0, 50.0), (4, 11.0, 12.0)]), &mut vector);
        assert_eq!(index, 1);
        assert_eq!(vector, MotionVector::new(1.0, 2.0));
    }

    #[test]
    fn test_lost_pointer_restarts() {
        let mut tracker = PointerTracker::new();
        let mut vector = MotionVector::default();
        tracker.track_event(&event(&[(4, 10.0, 10.0)]), &mut vector);
        tracker.track_event(&event(&[(7, 90.0, 90.0)]), &mut vector);
        assert_eq!(vector, MotionVector::ZERO);
    }
}
