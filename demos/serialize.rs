//! Reads a capture config from JSON and records bridge events as JSON lines.
//!
//! Usage:
//!   cargo run --example serialize --features serialize

use pointer_capture::{BUTTON_SECONDARY, CaptureConfig, ChannelBridge, CursorPosition, EventBridge};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config: CaptureConfig =
        serde_json::from_str(r#"{"display_density": 2.625, "sensitivity": 0.8}"#)?;
    config.validate()?;
    println!("{}", serde_json::to_string_pretty(&config)?);

    let (mut bridge, receiver) = ChannelBridge::new();
    bridge.send_cursor_pos(CursorPosition::new(320.0, 240.0));
    bridge.send_scroll(0.0, 1.0);
    bridge.send_mouse_button(BUTTON_SECONDARY, true);
    drop(bridge);

    while let Ok(event) = receiver.recv() {
        println!("{}", serde_json::to_string(&event)?);
    }
    Ok(())
}
