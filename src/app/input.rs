//! Keyboard commands understood by the demo.
//!
//! | Key     | Command            |
//! |---------|--------------------|
//! | `Space` | toggle animations  |
//! | `T`     | cycle AA mode      |
//!
//! Mouse look and WASD movement belong to the host camera controller.

/// A user command that changes demo state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    ToggleAnimations,
    CycleMode,
}

impl Command {
    /// Maps a pressed character key to a command.
    #[must_use]
    pub fn from_char(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            ' ' => Some(Self::ToggleAnimations),
            't' => Some(Self::CycleMode),
            _ => None,
        }
    }

    /// Maps a winit key press to a command. Releases and repeats are ignored.
    #[cfg(feature = "winit")]
    #[must_use]
    pub fn from_key_event(event: &winit::event::KeyEvent) -> Option<Self> {
        use winit::keyboard::{KeyCode, PhysicalKey};

        if event.state != winit::event::ElementState::Pressed || event.repeat {
            return None;
        }
        match event.physical_key {
            PhysicalKey::Code(KeyCode::Space) => Some(Self::ToggleAnimations),
            PhysicalKey::Code(KeyCode::KeyT) => Some(Self::CycleMode),
            _ => None,
        }
    }
}
