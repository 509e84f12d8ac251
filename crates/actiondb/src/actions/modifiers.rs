//! Modifier key sets and pointer button descriptions

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Modifier keys that are held while a [`ModAction`](super::Action) runs.
    #[derive(Serialize, Deserialize)]
    #[serde(transparent)]
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u32 {
        const SHIFT   = 0b0001;
        const CONTROL = 0b0010;
        const ALT     = 0b0100;
        const SUPER   = 0b1000;
    }
}

impl Modifiers {
    /// Human-readable prefix such as `Shift+Ctrl+`; empty when no modifier is set
    pub fn label(&self) -> String {
        let mut out = String::new();
        for (flag, name) in [
            (Modifiers::SHIFT, "Shift"),
            (Modifiers::CONTROL, "Ctrl"),
            (Modifiers::ALT, "Alt"),
            (Modifiers::SUPER, "Super"),
        ] {
            if self.contains(flag) {
                out.push_str(name);
                out.push('+');
            }
        }
        out
    }
}

/// A pointer button together with the modifiers pressed alongside it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ButtonInfo {
    pub button: u32,
    pub state: Modifiers,
}

impl ButtonInfo {
    pub fn new(button: u32, state: Modifiers) -> Self {
        Self { button, state }
    }

    /// Display text, e.g. `Ctrl+Button 2`
    pub fn label(&self) -> String {
        format!("{}Button {}", self.state.label(), self.button)
    }
}
