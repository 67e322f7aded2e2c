//! Replays a short scripted capture session and prints what the game sees.
//!
//! Usage:
//!   RUST_LOG=trace cargo run --example replay

use pointer_capture::{
    Action, Axis, BUTTON_PRIMARY, BridgeEvent, CaptureConfig, ChannelBridge, DeviceId, DeviceInfo,
    DeviceRegistry, HostView, MotionEvent, MotionRange, PointerCapture, Source, TouchpadConfig,
    VirtualTouchpad,
};

struct ScriptedView {
    focused: bool,
}

impl HostView for ScriptedView {
    fn has_window_focus(&self) -> bool {
        self.focused
    }

    fn request_focus(&mut self) {
        println!("[VIEW] focus requested");
        self.focused = true;
    }

    fn request_pointer_capture(&mut self) {
        println!("[VIEW] pointer capture requested");
    }

    fn register_capture_listeners(&mut self) {
        println!("[VIEW] listeners registered");
    }

    fn unregister_capture_listeners(&mut self) {
        println!("[VIEW] listeners removed");
    }
}

fn main() -> pointer_capture::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let touchscreen = DeviceId(4);
    let mouse = DeviceId(9);
    let mut devices = DeviceRegistry::new();
    devices.insert(touchscreen, DeviceInfo::new("touchscreen"));
    devices.insert(
        mouse,
        DeviceInfo::new("bluetooth mouse")
            .with_axis(Axis::RelativeX, MotionRange::new(-1.0, 1.0))
            .with_axis(Axis::RelativeY, MotionRange::new(-1.0, 1.0)),
    );

    let (mut bridge, receiver) = ChannelBridge::new();
    let touchpad = VirtualTouchpad::new(bridge.clone(), TouchpadConfig::default())?;
    let mut capture = PointerCapture::attach(
        ScriptedView { focused: false },
        touchpad,
        CaptureConfig::new(2.0, 1.5)?,
    )?;
    capture.handle_automatic_capture();
    capture.on_window_focus_changed(true);

    let script = vec![
        MotionEvent::new(touchscreen, Source::TOUCHPAD, Action::Move).with_pointer(0, 100.0, 50.0),
        MotionEvent::new(touchscreen, Source::TOUCHPAD, Action::Move).with_pointer(0, 103.0, 54.0),
        MotionEvent::new(touchscreen, Source::TOUCHPAD, Action::Move)
            .with_pointer(0, 103.0, 54.0)
            .with_pointer(1, 200.0, 54.0),
        MotionEvent::new(touchscreen, Source::TOUCHPAD, Action::Move)
            .with_pointer(0, 103.0, 60.0)
            .with_pointer(1, 200.0, 60.0),
        MotionEvent::new(touchscreen, Source::TOUCHPAD, Action::Up).with_pointer(0, 103.0, 60.0),
    ];
    for event in &script {
        capture.on_captured_pointer(event, &devices, &mut bridge);
    }

    receiver.set_grabbing(true);
    if let Some(info) = devices.get(mouse) {
        println!("[VIEW] game grabbed the cursor, following {}", info.name);
    }
    let grabbed = vec![
        MotionEvent::new(mouse, Source::MOUSE_RELATIVE, Action::Move)
            .with_axis(Axis::RelativeX, 3.0)
            .with_axis(Axis::RelativeY, -1.0),
        MotionEvent::new(mouse, Source::MOUSE_RELATIVE, Action::ButtonPress)
            .with_action_button(BUTTON_PRIMARY),
        MotionEvent::new(mouse, Source::MOUSE_RELATIVE, Action::Scroll)
            .with_axis(Axis::VScroll, -1.0),
    ];
    for event in &grabbed {
        capture.on_captured_pointer(event, &devices, &mut bridge);
    }
    capture.detach();

    for event in receiver.try_iter() {
        match event {
            BridgeEvent::CursorPos { x, y } => println!("[GAME] cursor x={:.1}, y={:.1}", x, y),
            BridgeEvent::Scroll {
                horizontal,
                vertical,
            } => println!("[GAME] scroll h={:.2}, v={:.2}", horizontal, vertical),
            BridgeEvent::MouseButton { button, pressed } => {
                println!("[GAME] button {} pressed={}", button, pressed)
            }
        }
    }
    Ok(())
}
