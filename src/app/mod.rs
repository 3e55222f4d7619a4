//! Demo application state.
//!
//! Glue between user commands and the [`Reconstructor`]: cycling the AA
//! mode, pausing animations, and the informative window title.

pub mod animation;
pub mod input;

pub use animation::AnimationClock;
pub use input::Command;

use crate::renderer::Reconstructor;
use crate::resources::AaMode;

/// Title suffix describing the active mode, e.g. `"Current AA Mode: TSS"`.
#[must_use]
pub fn mode_title(mode: AaMode) -> String {
    format!("Current AA Mode: {}", mode.label())
}

/// User-facing state of the demo.
#[derive(Debug, Clone, Default)]
pub struct DemoState {
    pub clock: AnimationClock,
}

impl DemoState {
    #[must_use]
    pub fn new(animations: bool) -> Self {
        Self {
            clock: AnimationClock::new(animations),
        }
    }

    /// Applies a command. Returns `true` if the mode changed.
    pub fn handle<T>(&mut self, command: Command, renderer: &mut Reconstructor<T>) -> bool {
        match command {
            Command::ToggleAnimations => {
                let enabled = self.clock.toggle();
                log::info!("Animations {}", if enabled { "enabled" } else { "paused" });
                false
            }
            Command::CycleMode => {
                renderer.next_mode();
                true
            }
        }
    }
}
