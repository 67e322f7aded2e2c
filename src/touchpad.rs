use crate::bridge::{CursorPosition, EventBridge};
use crate::config::positive;
use crate::error::Result;
use crate::event::MotionVector;
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use tracing::debug;

/// On-screen pointer widget driven while the game does not grab the cursor.
pub trait Touchpad {
    /// Whether the widget is currently shown.
    fn display_state(&self) -> bool;

    fn enable(&mut self, enabled: bool);

    fn apply_motion_vector(&mut self, vector: MotionVector);
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialize", serde(default, deny_unknown_fields))]
pub struct TouchpadConfig {
    /// Display size in pixels; the pointer is clamped to it.
    pub width: f32,
    pub height: f32,
    pub mouse_speed: f32,
    /// Display pixels to game window pixels.
    pub scale_factor: f32,
}

impl Default for TouchpadConfig {
    fn default() -> TouchpadConfig {
        TouchpadConfig {
            width: 1920.0,
            height: 1080.0,
            mouse_speed: 1.0,
            scale_factor: 1.0,
        }
    }
}

impl TouchpadConfig {
    pub fn validate(&self) -> Result<()> {
        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("mouse_speed", self.mouse_speed)?;
        positive("scale_factor", self.scale_factor)?;
        Ok(())
    }
}

/// Software touchpad that keeps its own pointer and reports it to a bridge.
#[derive(Debug, Clone)]
pub struct VirtualTouchpad<B> {
    bridge: B,
    config: TouchpadConfig,
    displayed: bool,
    x: f32,
    y: f32,
}

impl<B: EventBridge> VirtualTouchpad<B> {
    pub fn new(bridge: B, config: TouchpadConfig) -> Result<VirtualTouchpad<B>> {
        config.validate()?;
        Ok(VirtualTouchpad {
            bridge,
            x: config.width / 2.0,
            y: config.height / 2.0,
            config,
            displayed: false,
        })
    }

    /// Pointer position in display pixels.
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    /// Stores the scaled pointer as the bridge cursor and sends it, so
    /// grabbed motion continues from where the touchpad left off.
    fn update_mouse_position(&mut self) {
        let scale = self.config.scale_factor as f64;
        let position = CursorPosition::new(self.x as f64 * scale, self.y as f64 * scale);
        self.bridge.set_cursor(position);
        self.bridge.send_cursor_pos(position);
    }
}

impl<B: EventBridge> Touchpad for VirtualTouchpad<B> {
    fn display_state(&self) -> bool {
        self.displayed
    }

    fn enable(&mut self, enabled: bool) {
        debug!(enabled, "touchpad display state");
        self.displayed = enabled;
        if enabled {
            self.x = self.config.width / 2.0;
            self.y = self.config.height / 2.0;
            self.update_mouse_position();
        }
    }

    fn apply_motion_vector(&mut self, vector: MotionVector) {
        let speed = self.config.mouse_speed;
        self.x = (self.x + vector.x * speed).clamp(0.0, self.config.width);
        self.y = (self.y + vector.y * speed).clamp(0.0, self.config.height);
        self.update_mouse_position();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::{BridgeEvent, ChannelBridge};

    fn touchpad(config: TouchpadConfig) -> (VirtualTouchpad<ChannelBridge>, crate::BridgeReceiver) {
        let (bridge, receiver) = ChannelBridge::new();
        (VirtualTouchpad::new(bridge, config).unwrap(), receiver)
    }

    #[test]
    fn test_enable_centres_pointer() {
        let (mut pad, receiver) = touchpad(TouchpadConfig {
            width: 200.0,
            height: 100.0,
            scale_factor: 0.5,
            ..TouchpadConfig::default()
        });
        assert!(!pad.display_state());
        pad.enable(true);
        assert!(pad.display_state());
        assert_eq!(pad.position(), (100.0, 50.0));
        assert_eq!(
            receiver.try_recv(),
            Ok(BridgeEvent::CursorPos { x: 50.0, y: 25.0 })
        );
    }

    #[test]
    fn test_motion_is_clamped() {
        let (mut pad, receiver) = touchpad(TouchpadConfig {
            width: 200.0,
            height: 100.0,
            mouse_speed: 2.0,
            ..TouchpadConfig::default()
        });
        pad.apply_motion_vector(MotionVector::new(10.0, -5.0));
        assert_eq!(pad.position(), (120.0, 40.0));
        pad.apply_motion_vector(MotionVector::new(500.0, -500.0));
        assert_eq!(pad.position(), (200.0, 0.0));
        let events: Vec<_> = receiver.try_iter().collect();
        assert_eq!(
            events.last(),
            Some(&BridgeEvent::CursorPos { x: 200.0, y: 0.0 })
        );
    }

    #[test]
    fn test_motion_updates_bridge_cursor() {
        let (mut pad, receiver) = touchpad(TouchpadConfig {
            scale_factor: 0.5,
            ..TouchpadConfig::default()
        });
        pad.enable(true);
        assert_eq!(receiver.cursor(), CursorPosition::new(480.0, 270.0));

        pad.apply_motion_vector(MotionVector::new(10.0, -20.0));
        assert_eq!(pad.bridge().cursor(), CursorPosition::new(485.0, 260.0));
        assert_eq!(receiver.cursor(), CursorPosition::new(485.0, 260.0));
    }

    #[test]
    fn test_invalid_config() {
        let (bridge, _receiver) = ChannelBridge::new();
        let config = TouchpadConfig {
            mouse_speed: 0.0,
            ..TouchpadConfig::default()
        };
        assert!(VirtualTouchpad::new(bridge, config).is_err());
    }
}
