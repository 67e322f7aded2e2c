use bitflags::bitflags;
use enum_map::{Enum, EnumMap};
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, FromRepr};

/// Mask applied to the raw action to strip the pointer index bits.
pub const ACTION_MASK: u32 = 0xff;

/// Identifier of the input device that produced an event.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct DeviceId(pub i32);

/// Masked action of a [`MotionEvent`].
///
/// Values match Android's `MotionEvent.ACTION_*` constants.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, EnumIter, FromRepr)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[repr(u32)]
pub enum Action {
    Down = 0,
    Up = 1,
    Move = 2,
    Cancel = 3,
    Outside = 4,
    PointerDown = 5,
    PointerUp = 6,
    HoverMove = 7,
    Scroll = 8,
    HoverEnter = 9,
    HoverExit = 10,
    ButtonPress = 11,
    ButtonRelease = 12,
}

impl Action {
    /// Decodes a raw action, ignoring the pointer index bits.
    /// Returns `None` for codes this crate does not know about.
    pub fn from_raw(raw: u32) -> Option<Action> {
        Action::from_repr(raw & ACTION_MASK)
    }
}

/// Motion axes read by the capture session.
///
/// Discriminants are Android's `MotionEvent.AXIS_*` codes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, Enum, EnumIter, FromRepr)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[repr(u32)]
pub enum Axis {
    X = 0,
    Y = 1,
    VScroll = 9,
    HScroll = 10,
    RelativeX = 27,
    RelativeY = 28,
}

impl Axis {
    pub fn code(self) -> u32 {
        self as u32
    }
}

bitflags! {
    /// Source bits of an event, laid out like `InputDevice.SOURCE_*`.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct Source: u32 {
        const CLASS_BUTTON = 0x0000_0001;
        const CLASS_POINTER = 0x0000_0002;
        const CLASS_TRACKBALL = 0x0000_0004;
        const CLASS_POSITION = 0x0000_0008;
        const CLASS_JOYSTICK = 0x0000_0010;

        const MOUSE = 0x0000_2000 | Self::CLASS_POINTER.bits();
        const MOUSE_RELATIVE = 0x0002_0000 | Self::CLASS_TRACKBALL.bits();
        const TOUCHSCREEN = 0x0000_1000 | Self::CLASS_POINTER.bits();
        const TOUCHPAD = 0x0010_0000 | Self::CLASS_POSITION.bits();
        const TRACKBALL = 0x0001_0000 | Self::CLASS_TRACKBALL.bits();

        const _ = !0;
    }
}

impl Source {
    /// Whether the source reports relative motion (trackballs and captured mice).
    pub fn is_trackball_class(self) -> bool {
        self.intersects(Source::CLASS_TRACKBALL)
    }
}

/// One contact point of a [`MotionEvent`].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Pointer {
    pub id: i32,
    pub x: f32,
    pub y: f32,
}

/// A captured pointer event as delivered by the platform.
///
/// The event is immutable once built; the capture session only reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionEvent {
    pub device_id: DeviceId,
    pub source: Source,
    /// Raw action, possibly carrying a pointer index in the upper bits.
    pub action: u32,
    /// Button bits that changed for `ButtonPress`/`ButtonRelease`.
    pub action_button: u32,
    pub pointers: Vec<Pointer>,
    /// Axis values of the first pointer.
    pub axes: EnumMap<Axis, f32>,
}

impl MotionEvent {
    pub fn new(device_id: DeviceId, source: Source, action: Action) -> MotionEvent {
        MotionEvent {
            device_id,
            source,
            action: action as u32,
            action_button: 0,
            pointers: Vec::new(),
            axes: EnumMap::default(),
        }
    }

    /// Adds a contact point. The first pointer also defines the `X`/`Y` axes.
    pub fn with_pointer(mut self, id: i32, x: f32, y: f32) -> MotionEvent {
        if self.pointers.is_empty() {
            self.axes[Axis::X] = x;
            self.axes[Axis::Y] = y;
        }
        self.pointers.push(Pointer { id, x, y });
        self
    }

    pub fn with_axis(mut self, axis: Axis, value: f32) -> MotionEvent {
        self.axes[axis] = value;
        self
    }

    pub fn with_action_button(mut self, action_button: u32) -> MotionEvent {
        self.action_button = action_button;
        self
    }

    pub fn action_masked(&self) -> Option<Action> {
        Action::from_raw(self.action)
    }

    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    pub fn find_pointer_index(&self, id: i32) -> Option<usize> {
        self.pointers.iter().position(|pointer| pointer.id == id)
    }

    /// Absolute x of the first pointer, 0 when there is none.
    pub fn x(&self) -> f32 {
        self.pointers.first().map_or(0.0, |pointer| pointer.x)
    }

    /// Absolute y of the first pointer, 0 when there is none.
    pub fn y(&self) -> f32 {
        self.pointers.first().map_or(0.0, |pointer| pointer.y)
    }

    pub fn axis_value(&self, axis: Axis) -> f32 {
        self.axes[axis]
    }
}

/// Two component motion, in device units until it is scaled.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct MotionVector {
    pub x: f32,
    pub y: f32,
}

impl MotionVector {
    pub const ZERO: MotionVector = MotionVector { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> MotionVector {
        MotionVector { x, y }
    }

    pub fn set(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn scale(&mut self, factor: f32) {
        self.x *= factor;
        self.y *= factor;
    }
}
