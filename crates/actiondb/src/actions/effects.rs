//! Side-effect backend used when an action runs
//!
//! Actions never touch the OS directly; they ask an [`Effects`]
//! implementation to spawn a process or synthesize input. The input
//! capture layer supplies a real implementation, tests supply a recording one.

use log::warn;
use std::io;
use std::process::Command;

use super::{ButtonInfo, Modifiers, SendKey};

/// Executes the side effects requested by actions
pub trait Effects {
    /// Start `command` through a shell without waiting for it
    fn spawn_shell(&mut self, command: &str) -> io::Result<()>;

    /// Synthesize a key press (and release)
    fn send_key(&mut self, key: &SendKey) -> bool;

    /// Synthesize a pointer button click
    fn press_button(&mut self, button: &ButtonInfo) -> bool;

    /// Enter scroll mode with the given modifiers held
    fn scroll(&mut self, mods: Modifiers) -> bool;
}

/// Effects backed by the host OS
///
/// Only shell commands are available here; key, button and scroll
/// synthesis belongs to the input layer and reports `false`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEffects;

impl SystemEffects {
    pub const SHELL: &'static str = "/bin/sh";
}

impl Effects for SystemEffects {
    fn spawn_shell(&mut self, command: &str) -> io::Result<()> {
        let mut child = Command::new(Self::SHELL).arg("-c").arg(command).spawn()?;
        // Reap in the background so finished commands don't linger as zombies
        std::thread::spawn(move || {
            let _ = child.wait();
        });
        Ok(())
    }

    fn send_key(&mut self, key: &SendKey) -> bool {
        warn!("No input backend available to send {}", key.label());
        false
    }

    fn press_button(&mut self, button: &ButtonInfo) -> bool {
        warn!("No input backend available to press {}", button.label());
        false
    }

    fn scroll(&mut self, mods: Modifiers) -> bool {
        warn!("No input backend available to scroll ({}Scroll)", mods.label());
        false
    }
}
