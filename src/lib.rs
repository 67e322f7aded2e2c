//! Pointer capture for touch devices acting as a mouse.
//!
//! This crate takes the events a platform delivers while a view holds pointer
//! capture (relative deltas from captured mice and trackballs, absolute
//! coordinates from touchpads, scroll axes and button changes) and turns them
//! into mouse-style events for a game window: an absolute cursor position,
//! scroll deltas and button codes.
//!
//! ```no_run
//! use pointer_capture::{
//!     Action, CaptureConfig, ChannelBridge, DeviceId, DeviceInfo, DeviceRegistry, HostView,
//!     MotionEvent, PointerCapture, Source, TouchpadConfig, VirtualTouchpad,
//! };
//!
//! # struct View;
//! # impl HostView for View {
//! #     fn has_window_focus(&self) -> bool { true }
//! #     fn request_focus(&mut self) {}
//! #     fn request_pointer_capture(&mut self) {}
//! #     fn register_capture_listeners(&mut self) {}
//! #     fn unregister_capture_listeners(&mut self) {}
//! # }
//! # fn main() -> pointer_capture::Result<()> {
//! let (mut bridge, receiver) = ChannelBridge::new();
//! let touchpad = VirtualTouchpad::new(bridge.clone(), TouchpadConfig::default())?;
//! let mut capture = PointerCapture::attach(View, touchpad, CaptureConfig::new(2.0, 1.0)?)?;
//! capture.handle_automatic_capture();
//!
//! let mut devices = DeviceRegistry::new();
//! devices.insert(DeviceId(7), DeviceInfo::new("touchpad"));
//!
//! let event = MotionEvent::new(DeviceId(7), Source::TOUCHPAD, Action::Move)
//!     .with_pointer(0, 100.0, 50.0);
//! assert!(capture.on_captured_pointer(&event, &devices, &mut bridge));
//!
//! for event in receiver.try_iter() {
//!     println!("{:?}", event);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The pieces the platform provides are traits: [`HostView`],
//! [`InputDeviceQuery`], [`Touchpad`] and [`EventBridge`]. [`DeviceRegistry`],
//! [`VirtualTouchpad`] and [`ChannelBridge`] implement the last three.

mod bridge;
mod button;
mod capture;
mod config;
mod device;
mod error;
mod event;
mod scroller;
mod session;
mod touchpad;
mod tracker;

pub use crate::bridge::{BridgeEvent, BridgeReceiver, ChannelBridge, CursorPosition, EventBridge};
pub use crate::button::{BUTTON_PRIMARY, BUTTON_SECONDARY, BUTTON_TERTIARY, MouseButton};
pub use crate::capture::{HostView, PointerCapture};
pub use crate::config::{CaptureConfig, TOUCHPAD_SCROLL_THRESHOLD, dp_to_px};
pub use crate::device::{
    DeviceCapabilities, DeviceInfo, DeviceRegistry, InputDeviceQuery, MotionRange,
};
pub use crate::error::{BridgeError, CaptureError, Result};
pub use crate::event::{
    ACTION_MASK, Action, Axis, DeviceId, MotionEvent, MotionVector, Pointer, Source,
};
pub use crate::scroller::Scroller;
pub use crate::session::CaptureSession;
pub use crate::touchpad::{Touchpad, TouchpadConfig, VirtualTouchpad};
pub use crate::tracker::PointerTracker;
