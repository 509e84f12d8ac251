//! Action model
//!
//! Defines what can happen when a stroke is recognized and the
//! side-effect backend actions run against.

mod action;
mod effects;
mod modifiers;

pub use action::{Action, Button, Command, Ignore, Scroll, SendKey};
pub use effects::{Effects, SystemEffects};
pub use modifiers::{ButtonInfo, Modifiers};
