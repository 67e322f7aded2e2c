//! Feeds bridge events into a tokio channel so an async game loop can consume them.
//!
//! Usage:
//!   cargo run --example tokio_channel

use pointer_capture::{
    Action, BridgeEvent, CaptureConfig, CaptureSession, ChannelBridge, DeviceId, DeviceInfo,
    DeviceRegistry, MotionEvent, MotionVector, Source, Touchpad,
};
use std::thread;
use tokio::sync::mpsc;

/// Touchpad that is never shown; motion only matters while grabbed here.
struct Hidden;

impl Touchpad for Hidden {
    fn display_state(&self) -> bool {
        true
    }

    fn enable(&mut self, _enabled: bool) {}

    fn apply_motion_vector(&mut self, _vector: MotionVector) {}
}

#[tokio::main]
async fn main() {
    let (mut bridge, receiver) = ChannelBridge::new();
    receiver.set_grabbing(true);
    let (schan, mut rchan) = mpsc::unbounded_channel::<BridgeEvent>();

    // Capture thread, standing in for the platform's input callback thread.
    let _capture = thread::spawn(move || {
        let mut devices = DeviceRegistry::new();
        devices.insert(DeviceId(1), DeviceInfo::new("touchscreen"));
        let mut session = match CaptureSession::new(CaptureConfig::default()) {
            Ok(session) => session,
            Err(error) => {
                eprintln!("Invalid config: {}", error);
                return;
            }
        };
        let mut touchpad = Hidden;
        for step in 0..10 {
            let offset = step as f32 * 5.0;
            let event = MotionEvent::new(DeviceId(1), Source::TOUCHPAD, Action::Move)
                .with_pointer(0, 100.0 + offset, 100.0 - offset);
            session.handle(&event, &devices, &mut touchpad, &mut bridge);
        }
    });

    // Forwarder: blocking crossbeam receive on a plain thread.
    let _forward = thread::spawn(move || {
        while let Ok(event) = receiver.recv() {
            if schan.send(event).is_err() {
                break;
            }
        }
    });

    while let Some(event) = rchan.recv().await {
        println!("Received {:?}", event);
    }
}
