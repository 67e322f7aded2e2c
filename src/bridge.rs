//! Downstream side of the capture pipeline.
//!
//! [`EventBridge`] is what the normalizer talks to. [`ChannelBridge`] is a
//! ready made implementation that ships every event to the game thread over a
//! `crossbeam_channel`, while the game thread owns the grab flag through
//! [`BridgeReceiver`].

use crate::button::MouseButton;
use crate::error::BridgeError;
use crossbeam_channel::{Receiver, RecvError, Sender, TryIter, TryRecvError, unbounded};
use parking_lot::Mutex;
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::warn;

/// Absolute cursor position in window coordinates.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct CursorPosition {
    pub x: f64,
    pub y: f64,
}

impl CursorPosition {
    pub fn new(x: f64, y: f64) -> CursorPosition {
        CursorPosition { x, y }
    }
}

/// Events as seen by the game window.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum BridgeEvent {
    CursorPos { x: f64, y: f64 },
    Scroll { horizontal: f64, vertical: f64 },
    MouseButton { button: MouseButton, pressed: bool },
}

/// Sink for mouse-style events.
pub trait EventBridge {
    /// Whether the game currently owns the cursor.
    fn is_grabbing(&self) -> bool;

    fn cursor(&self) -> CursorPosition;

    fn set_cursor(&mut self, position: CursorPosition);

    fn send_cursor_pos(&mut self, position: CursorPosition);

    fn send_scroll(&mut self, horizontal: f64, vertical: f64);

    /// Forwards an Android action button. Returns `false` when the button has
    /// no mouse equivalent and nothing was sent.
    fn send_mouse_button(&mut self, action_button: u32, pressed: bool) -> bool;
}

#[derive(Debug, Default)]
struct Shared {
    grabbing: AtomicBool,
    cursor: Mutex<CursorPosition>,
}

/// Capture-side handle. Clones share cursor and grab state.
#[derive(Debug, Clone)]
pub struct ChannelBridge {
    shared: Arc<Shared>,
    sender: Sender<BridgeEvent>,
}

/// Game-side handle.
#[derive(Debug)]
pub struct BridgeReceiver {
    shared: Arc<Shared>,
    receiver: Receiver<BridgeEvent>,
}

impl ChannelBridge {
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> (ChannelBridge, BridgeReceiver) {
        let (sender, receiver) = unbounded();
        let shared = Arc::new(Shared::default());
        (
            ChannelBridge {
                shared: shared.clone(),
                sender,
            },
            BridgeReceiver { shared, receiver },
        )
    }

    pub fn try_send(&self, event: BridgeEvent) -> Result<(), BridgeError> {
        self.sender.send(event).map_err(|_| BridgeError::Disconnected)
    }

    fn send(&self, event: BridgeEvent) {
        if let Err(error) = self.try_send(event) {
            warn!(?event, %error, "dropping bridge event");
        }
    }
}

impl EventBridge for ChannelBridge {
    fn is_grabbing(&self) -> bool {
        self.shared.grabbing.load(Ordering::SeqCst)
    }

    fn cursor(&self) -> CursorPosition {
        *self.shared.cursor.lock()
    }

    fn set_cursor(&mut self, position: CursorPosition) {
        *self.shared.cursor.lock() = position;
    }

    fn send_cursor_pos(&mut self, position: CursorPosition) {
        self.send(BridgeEvent::CursorPos {
            x: position.x,
            y: position.y,
        });
    }

    fn send_scroll(&mut self, horizontal: f64, vertical: f64) {
        self.send(BridgeEvent::Scroll {
            horizontal,
            vertical,
        });
    }

    fn send_mouse_button(&mut self, action_button: u32, pressed: bool) -> bool {
        match MouseButton::from_action_button(action_button) {
            Some(button) => {
                self.send(BridgeEvent::MouseButton { button, pressed });
                true
            }
            None => {
                warn!(action_button, "unmapped mouse button");
                false
            }
        }
    }
}

impl BridgeReceiver {
    pub fn set_grabbing(&self, grabbing: bool) {
        self.shared.grabbing.store(grabbing, Ordering::SeqCst);
    }

    pub fn is_grabbing(&self) -> bool {
        self.shared.grabbing.load(Ordering::SeqCst)
    }

    /// Last position stored by the capture side.
    pub fn cursor(&self) -> CursorPosition {
        *self.shared.cursor.lock()
    }

    /// Blocks until an event arrives or every [`ChannelBridge`] is dropped.
    pub fn recv(&self) -> Result<BridgeEvent, RecvError> {
        self.receiver.recv()
    }

    pub fn try_recv(&self) -> Result<BridgeEvent, TryRecvError> {
        self.receiver.try_recv()
    }

    pub fn try_iter(&self) -> TryIter<'_, BridgeEvent> {
        self.receiver.try_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::{BUTTON_PRIMARY, BUTTON_TERTIARY};

    #[test]
    fn test_events_reach_receiver_in_order() {
        let (mut bridge, receiver) = ChannelBridge::new();
        bridge.send_cursor_pos(CursorPosition::new(1.0, 2.0));
        bridge.send_scroll(0.0, -1.5);
        assert!(bridge.send_mouse_button(BUTTON_TERTIARY, true));

        let events: Vec<_> = receiver.try_iter().collect();
        assert_eq!(
            events,
            vec![
                BridgeEvent::CursorPos { x: 1.0, y: 2.0 },
                BridgeEvent::Scroll {
                    horizontal: 0.0,
                    vertical: -1.5
                },
                BridgeEvent::MouseButton {
                    button: MouseButton::Middle,
                    pressed: true
                },
            ]
        );
    }

    #[test]
    fn test_unmapped_button_is_not_sent() {
        let (mut bridge, receiver) = ChannelBridge::new();
        assert!(!bridge.send_mouse_button(1 << 4, false));
        assert_eq!(receiver.try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn test_clones_share_state() {
        let (mut bridge, receiver) = ChannelBridge::new();
        let other = bridge.clone();
        receiver.set_grabbing(true);
        assert!(bridge.is_grabbing() && other.is_grabbing());

        bridge.set_cursor(CursorPosition::new(5.0, 6.0));
        assert_eq!(other.cursor(), CursorPosition::new(5.0, 6.0));
        assert_eq!(receiver.cursor(), CursorPosition::new(5.0, 6.0));
    }

    #[test]
    fn test_disconnected_receiver() {
        let (mut bridge, receiver) = ChannelBridge::new();
        drop(receiver);
        assert_eq!(
            bridge.try_send(BridgeEvent::CursorPos { x: 0.0, y: 0.0 }),
            Err(BridgeError::Disconnected)
        );
        // Still reports the mapping result, the event is only logged and dropped.
        assert!(bridge.send_mouse_button(BUTTON_PRIMARY, true));
    }
}
