use crate::bridge::EventBridge;
use crate::config::CaptureConfig;
use crate::device::InputDeviceQuery;
use crate::error::Result;
use crate::event::MotionEvent;
use crate::session::CaptureSession;
use crate::touchpad::Touchpad;
use tracing::debug;

/// The view that receives captured pointer events.
pub trait HostView {
    fn has_window_focus(&self) -> bool;

    fn request_focus(&mut self);

    fn request_pointer_capture(&mut self);

    /// Starts delivering captured-pointer and window-focus callbacks.
    fn register_capture_listeners(&mut self);

    fn unregister_capture_listeners(&mut self);
}

/// A capture session bound to a host view and a touchpad widget.
///
/// Attaching registers the listeners, [`PointerCapture::detach`] removes them
/// and hands the collaborators back.
#[derive(Debug)]
pub struct PointerCapture<H: HostView, T: Touchpad> {
    host: H,
    touchpad: T,
    session: CaptureSession,
}

impl<H: HostView, T: Touchpad> PointerCapture<H, T> {
    /// Listeners are only registered once `config` has been validated.
    pub fn attach(
        mut host: H,
        touchpad: T,
        config: CaptureConfig,
    ) -> Result<PointerCapture<H, T>> {
        let session = CaptureSession::new(config)?;
        host.register_capture_listeners();
        debug!("pointer capture attached");
        Ok(PointerCapture {
            host,
            touchpad,
            session,
        })
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn touchpad(&self) -> &T {
        &self.touchpad
    }

    pub fn session(&self) -> &CaptureSession {
        &self.session
    }

    /// Requests capture, or focus first if the window does not have it yet.
    /// Capture is requested again once focus arrives.
    pub fn handle_automatic_capture(&mut self) {
        if !self.host.has_window_focus() {
            debug!("requesting focus before pointer capture");
            self.host.request_focus();
        } else {
            self.host.request_pointer_capture();
        }
    }

    pub fn on_window_focus_changed(&mut self, has_focus: bool) {
        if has_focus && self.session.config().pointer_capture_supported {
            debug!("focus gained, requesting pointer capture");
            self.host.request_pointer_capture();
        }
    }

    pub fn on_captured_pointer(
        &mut self,
        event: &MotionEvent,
        devices: &dyn InputDeviceQuery,
        bridge: &mut impl EventBridge,
    ) -> bool {
        self.session.handle(event, devices, &mut self.touchpad, bridge)
    }

    pub fn detach(mut self) -> (H, T) {
        self.host.unregister_capture_listeners();
        debug!("pointer capture detached");
        (self.host, self.touchpad)
    }
}
