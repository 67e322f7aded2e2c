use crate::bridge::EventBridge;
use crate::event::MotionVector;
use tracing::trace;

/// Converts continuous two finger motion into scroll steps.
///
/// Motion is divided by the threshold; once a whole step accumulates on
/// either axis the full value is sent and the fractional remainder carries
/// over to the next gesture frame.
#[derive(Debug, Clone)]
pub struct Scroller {
    threshold: f32,
    overshoot_h: f32,
    overshoot_v: f32,
}

impl Scroller {
    /// `threshold` must be positive, see [`CaptureConfig::validate`].
    ///
    /// [`CaptureConfig::validate`]: crate::CaptureConfig::validate
    pub fn new(threshold: f32) -> Scroller {
        Scroller {
            threshold,
            overshoot_h: 0.0,
            overshoot_v: 0.0,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn overshoot(&self) -> (f32, f32) {
        (self.overshoot_h, self.overshoot_v)
    }

    pub fn perform_scroll(&mut self, vector: MotionVector, bridge: &mut impl EventBridge) {
        let h_scroll = vector.x / self.threshold + self.overshoot_h;
        let v_scroll = vector.y / self.threshold + self.overshoot_v;
        let h_steps = h_scroll.trunc();
        let v_steps = v_scroll.trunc();
        if h_steps != 0.0 || v_steps != 0.0 {
            trace!(h_scroll, v_scroll, "scroll step");
            bridge.send_scroll(h_scroll as f64, v_scroll as f64);
        }
        self.overshoot_h = h_scroll - h_steps;
        self.overshoot_v = v_scroll - v_steps;
    }

    pub fn reset_scroll_overshoot(&mut self) {
        self.overshoot_h = 0.0;
        self.overshoot_v = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::{BridgeEvent, ChannelBridge};

    fn scrolls(receiver: &crate::BridgeReceiver) -> Vec<(f64, f64)> {
        receiver
            .try_iter()
            .filter_map(|event| match event {
                BridgeEvent::Scroll {
                    horizontal,
                    vertical,
                } => Some((horizontal, vertical)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_dead_zone_accumulates() {
        let (mut bridge, receiver) = ChannelBridge::new();
        let mut scroller = Scroller::new(4.0);
        scroller.perform_scroll(MotionVector::new(0.0, 2.0), &mut bridge);
        assert!(scrolls(&receiver).is_empty());
        assert_eq!(scroller.overshoot(), (0.0, 0.5));

        scroller.perform_scroll(MotionVector::new(0.0, 3.0), &mut bridge);
        assert_eq!(scrolls(&receiver), vec![(0.0, 1.25)]);
        assert_eq!(scroller.overshoot(), (0.0, 0.25));
    }

    #[test]
    fn test_negative_direction_keeps_sign() {
        let (mut bridge, receiver) = ChannelBridge::new();
        let mut scroller = Scroller::new(1.0);
        scroller.perform_scroll(MotionVector::new(-2.5, 0.0), &mut bridge);
        assert_eq!(scrolls(&receiver), vec![(-2.5, 0.0)]);
        assert_eq!(scroller.overshoot(), (-0.5, 0.0));
    }

    #[test]
    fn test_reset_discards_remainder() {
        let (mut bridge, receiver) = ChannelBridge::new();
        let mut scroller = Scroller::new(2.0);
        scroller.perform_scroll(MotionVector::new(1.0, 1.0), &mut bridge);
        scroller.reset_scroll_overshoot();
        scroller.perform_scroll(MotionVector::new(1.0, 1.0), &mut bridge);
        assert!(scrolls(&receiver).is_empty());
    }
}
