//! Normalization of captured pointer events.
//!
//! A [`CaptureSession`] turns each [`MotionEvent`] into a motion vector,
//! routes it to the touchpad widget, the scroll accumulator or the grabbed
//! cursor, and then maps the event's action onto button and scroll events.
//!
//! The session is single threaded; the platform delivers events one at a
//! time and each call completes its cursor update before the next.

use crate::bridge::EventBridge;
use crate::config::CaptureConfig;
use crate::device::{DeviceCapabilities, InputDeviceQuery};
use crate::error::Result;
use crate::event::{Action, Axis, DeviceId, MotionEvent, MotionVector};
use crate::scroller::Scroller;
use crate::touchpad::Touchpad;
use crate::tracker::PointerTracker;
use tracing::{debug, trace};

#[derive(Debug, Clone)]
pub struct CaptureSession {
    config: CaptureConfig,
    mouse_prescale: f32,
    device: Option<DeviceId>,
    capabilities: DeviceCapabilities,
    vector: MotionVector,
    tracker: PointerTracker,
    scroller: Scroller,
}

impl CaptureSession {
    /// Fails if `config` does not pass [`CaptureConfig::validate`].
    pub fn new(config: CaptureConfig) -> Result<CaptureSession> {
        config.validate()?;
        Ok(CaptureSession {
            mouse_prescale: config.mouse_prescale(),
            scroller: Scroller::new(config.scroll_threshold),
            config,
            device: None,
            capabilities: DeviceCapabilities::default(),
            vector: MotionVector::ZERO,
            tracker: PointerTracker::new(),
        })
    }

    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    /// Device seen by the previous event, `None` before the first one.
    pub fn device(&self) -> Option<DeviceId> {
        self.device
    }

    pub fn capabilities(&self) -> DeviceCapabilities {
        self.capabilities
    }

    /// Vector computed for the last event, after scaling.
    pub fn vector(&self) -> MotionVector {
        self.vector
    }

    pub fn tracker(&self) -> &PointerTracker {
        &self.tracker
    }

    pub fn scroller(&self) -> &Scroller {
        &self.scroller
    }

    /// Re-derives device capabilities if `device` differs from the cached
    /// one. Returns whether it did.
    pub fn refresh_device(&mut self, device: DeviceId, devices: &dyn InputDeviceQuery) -> bool {
        if self.device == Some(device) {
            return false;
        }
        self.tracker.cancel_tracking();
        self.capabilities = DeviceCapabilities::probe(devices, device);
        debug!(
            ?device,
            previous = ?self.device,
            relative_axis = self.capabilities.relative_axis,
            "input device changed"
        );
        self.device = Some(device);
        true
    }

    fn derive_vector(&mut self, event: &MotionEvent) {
        if event.source.is_trackball_class() {
            if self.capabilities.relative_axis {
                self.vector.set(
                    event.axis_value(Axis::RelativeX),
                    event.axis_value(Axis::RelativeY),
                );
            } else {
                // Absolute coordinates stand in for a delta on these devices.
                self.vector.set(event.x(), event.y());
            }
        } else {
            self.tracker.track_event(event, &mut self.vector);
        }
    }

    fn route_vector(
        &mut self,
        event: &MotionEvent,
        touchpad: &mut impl Touchpad,
        bridge: &mut impl EventBridge,
    ) {
        if !bridge.is_grabbing() {
            if !touchpad.display_state() {
                touchpad.enable(true);
            }
            self.vector.scale(self.mouse_prescale);
            if event.pointer_count() < 2 {
                trace!(vector = ?self.vector, "touchpad motion");
                touchpad.apply_motion_vector(self.vector);
                self.scroller.reset_scroll_overshoot();
            } else {
                trace!(vector = ?self.vector, "multi-touch scroll");
                self.scroller.perform_scroll(self.vector, bridge);
            }
        } else {
            let sensitivity = self.config.sensitivity as f64;
            let mut cursor = bridge.cursor();
            cursor.x += self.vector.x as f64 * sensitivity;
            cursor.y += self.vector.y as f64 * sensitivity;
            bridge.set_cursor(cursor);
            // Sent even for a zero delta, the grabbed window expects a
            // position on every event.
            bridge.send_cursor_pos(cursor);
        }
    }

    /// Processes one captured pointer event. Returns whether it was consumed.
    pub fn handle(
        &mut self,
        event: &MotionEvent,
        devices: &dyn InputDeviceQuery,
        touchpad: &mut impl Touchpad,
        bridge: &mut impl EventBridge,
    ) -> bool {
        self.refresh_device(event.device_id, devices);
        self.derive_vector(event);
        self.route_vector(event, touchpad, bridge);

        match event.action_masked() {
            Some(Action::Move) => true,
            Some(Action::ButtonPress) => bridge.send_mouse_button(event.action_button, true),
            Some(Action::ButtonRelease) => bridge.send_mouse_button(event.action_button, false),
            Some(Action::Scroll) => {
                bridge.send_scroll(
                    event.axis_value(Axis::HScroll) as f64,
                    event.axis_value(Axis::VScroll) as f64,
                );
                true
            }
            Some(Action::Up) => {
                self.tracker.cancel_tracking();
                true
            }
            _ => false,
        }
    }
}
