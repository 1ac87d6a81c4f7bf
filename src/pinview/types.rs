//! Messages and handler types of the PIN view.

use bubbletea_rs::Msg;

use super::model::Model;

/// Sent through the command returned by `update` when a keystroke fills the
/// last slot. Carries the complete code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinFullMsg(pub String);

impl From<PinFullMsg> for Msg {
    fn from(msg: PinFullMsg) -> Self {
        Box::new(msg) as Msg
    }
}

/// Called with the complete code when the entered length reaches the slot
/// count. The view is passed back so the handler can restyle it, e.g. change
/// the border color; such changes show on the next paint.
pub type PinFullHandler = Box<dyn FnMut(&mut Model, &str) + Send>;

/// Called with the new text after every edit.
pub type TextChangedHandler = Box<dyn FnMut(&mut Model, &str) + Send>;
