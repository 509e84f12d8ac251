//! The closed set of actions a recognized stroke can trigger

use log::error;
use serde::{Deserialize, Serialize};

use super::{ButtonInfo, Effects, Modifiers};

/// Run a shell command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub cmd: String,
}

/// Synthesize a key event with modifiers held
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendKey {
    pub mods: Modifiers,
    /// Keysym of the key to send
    pub key: u32,
    /// Hardware keycode the keysym was captured from
    pub code: u32,
    /// Send through the test extension instead of a regular event
    pub xtest: bool,
}

impl SendKey {
    /// Display text, e.g. `Ctrl+T`
    ///
    /// Latin-1 keysyms coincide with their code points and are shown as the
    /// character; anything else is shown in hex.
    pub fn label(&self) -> String {
        let key = match char::from_u32(self.key) {
            Some(c) if self.key < 0x100 && c.is_ascii_graphic() => c.to_ascii_uppercase().to_string(),
            Some(c) if self.key < 0x100 && !c.is_control() && c != ' ' => c.to_string(),
            _ if self.key == 0x20 => "Space".to_string(),
            _ => format!("0x{:x}", self.key),
        };
        format!("{}{}", self.mods.label(), key)
    }
}

/// Scroll while the modifiers are held
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scroll {
    pub mods: Modifiers,
}

/// Recognize the stroke but deliberately do nothing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ignore {
    pub mods: Modifiers,
}

/// Synthesize a pointer button click
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub mods: Modifiers,
    pub button: u32,
}

impl Button {
    pub fn button_info(&self) -> ButtonInfo {
        ButtonInfo::new(self.button, self.mods)
    }

    pub fn label(&self) -> String {
        self.button_info().label()
    }
}

/// An action bound to a stroke
///
/// Every variant except [`Action::Command`] carries a modifier set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    Command(Command),
    SendKey(SendKey),
    Scroll(Scroll),
    Ignore(Ignore),
    Button(Button),
}

impl Action {
    pub fn command(cmd: impl Into<String>) -> Self {
        Action::Command(Command { cmd: cmd.into() })
    }

    pub fn send_key(mods: Modifiers, key: u32, code: u32, xtest: bool) -> Self {
        Action::SendKey(SendKey {
            mods,
            key,
            code,
            xtest,
        })
    }

    pub fn scroll(mods: Modifiers) -> Self {
        Action::Scroll(Scroll { mods })
    }

    pub fn ignore(mods: Modifiers) -> Self {
        Action::Ignore(Ignore { mods })
    }

    pub fn button(mods: Modifiers, button: u32) -> Self {
        Action::Button(Button { mods, button })
    }

    /// Execute the action.
    ///
    /// Returns whether execution was attempted, not whether it succeeded:
    /// a spawned command that later fails still counts. An empty command is
    /// a placeholder and returns `false` without spawning anything.
    pub fn run(&self, fx: &mut dyn Effects) -> bool {
        match self {
            Action::Command(c) => {
                if c.cmd.is_empty() {
                    return false;
                }
                if let Err(e) = fx.spawn_shell(&c.cmd) {
                    error!("Can't execute command {}: {}", c.cmd, e);
                }
                true
            }
            Action::SendKey(k) => fx.send_key(k),
            Action::Scroll(s) => fx.scroll(s.mods),
            Action::Ignore(_) => true,
            Action::Button(b) => fx.press_button(&b.button_info()),
        }
    }

    /// Short human-readable description of what the action does
    pub fn describe(&self) -> String {
        match self {
            Action::Command(c) => c.cmd.clone(),
            Action::SendKey(k) => k.label(),
            Action::Scroll(s) => format!("{}Scroll", s.mods.label()),
            Action::Ignore(i) => format!("{}Ignore", i.mods.label()),
            Action::Button(b) => b.label(),
        }
    }

    /// Variant name
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Command(_) => "Command",
            Action::SendKey(_) => "Key",
            Action::Scroll(_) => "Scroll",
            Action::Ignore(_) => "Ignore",
            Action::Button(_) => "Button",
        }
    }

    /// Modifier set for the modifier-carrying variants, `None` for commands
    pub fn modifiers(&self) -> Option<Modifiers> {
        match self {
            Action::Command(_) => None,
            Action::SendKey(k) => Some(k.mods),
            Action::Scroll(s) => Some(s.mods),
            Action::Ignore(i) => Some(i.mods),
            Action::Button(b) => Some(b.mods),
        }
    }
}
