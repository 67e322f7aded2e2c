use crate::event::{Axis, DeviceId};
use enum_map::EnumMap;
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Range reported by a device for one of its axes.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct MotionRange {
    pub min: f32,
    pub max: f32,
}

impl MotionRange {
    pub fn new(min: f32, max: f32) -> MotionRange {
        MotionRange { min, max }
    }
}

/// Answers capability questions about input devices.
pub trait InputDeviceQuery {
    /// `None` if the device is unknown or lacks the axis.
    fn motion_range(&self, device: DeviceId, axis: Axis) -> Option<MotionRange>;

    fn has_motion_range(&self, device: DeviceId, axis: Axis) -> bool {
        self.motion_range(device, axis).is_some()
    }
}

/// Capabilities derived when a new device is first seen.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct DeviceCapabilities {
    pub relative_axis: bool,
}

impl DeviceCapabilities {
    /// Relative motion needs both relative axes.
    pub fn probe(devices: &dyn InputDeviceQuery, device: DeviceId) -> DeviceCapabilities {
        let relative_x = devices.has_motion_range(device, Axis::RelativeX);
        let relative_y = devices.has_motion_range(device, Axis::RelativeY);
        DeviceCapabilities {
            relative_axis: relative_x && relative_y,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct DeviceInfo {
    pub name: String,
    pub axes: EnumMap<Axis, Option<MotionRange>>,
}

impl DeviceInfo {
    pub fn new(name: impl Into<String>) -> DeviceInfo {
        DeviceInfo {
            name: name.into(),
            axes: EnumMap::default(),
        }
    }

    pub fn with_axis(mut self, axis: Axis, range: MotionRange) -> DeviceInfo {
        self.axes[axis] = Some(range);
        self
    }
}

/// In-memory device table, filled by whoever enumerates the platform devices.
#[derive(Debug, Clone, Default)]
pub struct DeviceRegistry {
    devices: HashMap<DeviceId, DeviceInfo>,
}

impl DeviceRegistry {
    pub fn new() -> DeviceRegistry {
        DeviceRegistry::default()
    }

    /// Returns the previous entry for `id`, if any.
    pub fn insert(&mut self, id: DeviceId, info: DeviceInfo) -> Option<DeviceInfo> {
        self.devices.insert(id, info)
    }

    pub fn remove(&mut self, id: DeviceId) -> Option<DeviceInfo> {
        self.devices.remove(&id)
    }

    pub fn get(&self, id: DeviceId) -> Option<&DeviceInfo> {
        self.devices.get(&id)
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

impl InputDeviceQuery for DeviceRegistry {
    fn motion_range(&self, device: DeviceId, axis: Axis) -> Option<MotionRange> {
        self.devices.get(&device).and_then(|info| info.axes[axis])
    }
}
