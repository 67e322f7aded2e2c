#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, FromRepr};

/// `MotionEvent.BUTTON_PRIMARY`
pub const BUTTON_PRIMARY: u32 = 1 << 0;
/// `MotionEvent.BUTTON_SECONDARY`
pub const BUTTON_SECONDARY: u32 = 1 << 1;
/// `MotionEvent.BUTTON_TERTIARY`
pub const BUTTON_TERTIARY: u32 = 1 << 2;

/// Mouse buttons understood by the game window, with GLFW's button codes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumIter, FromRepr)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[repr(i32)]
pub enum MouseButton {
    Left = 0,
    Right = 1,
    Middle = 2,
}

impl MouseButton {
    /// Maps an Android action button to its GLFW counterpart.
    pub fn from_action_button(action_button: u32) -> Option<MouseButton> {
        match action_button {
            BUTTON_PRIMARY => Some(MouseButton::Left),
            BUTTON_SECONDARY => Some(MouseButton::Right),
            BUTTON_TERTIARY => Some(MouseButton::Middle),
            _ => None,
        }
    }

    pub fn glfw_code(self) -> i32 {
        self as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_action_button_mapping() {
        assert_eq!(
            MouseButton::from_action_button(BUTTON_PRIMARY),
            Some(MouseButton::Left)
        );
        assert_eq!(
            MouseButton::from_action_button(BUTTON_SECONDARY),
            Some(MouseButton::Right)
        );
        assert_eq!(
            MouseButton::from_action_button(BUTTON_TERTIARY),
            Some(MouseButton::Middle)
        );
        // BUTTON_BACK and chords are not forwarded
        assert_eq!(MouseButton::from_action_button(1 << 3), None);
        assert_eq!(
            MouseButton::from_action_button(BUTTON_PRIMARY | BUTTON_SECONDARY),
            None
        );
    }

    #[test]
    fn test_glfw_codes_round_trip() {
        for button in MouseButton::iter() {
            assert_eq!(MouseButton::from_repr(button.glfw_code()), Some(button));
        }
    }
}
