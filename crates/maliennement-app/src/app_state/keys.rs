//! Keys and buttons the window handles itself.
//!
//! These only reach winit while no webview has focus (during the splash,
//! for instance). Inside the content page the bridge script forwards the
//! same keys over IPC.

use winit::keyboard::{Key, ModifiersState, NamedKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ShellCommand {
    Back,
    Refresh,
}

pub(super) fn command_for_key(key: &Key, modifiers: ModifiersState) -> Option<ShellCommand> {
    match key {
        Key::Named(NamedKey::BrowserBack) => Some(ShellCommand::Back),
        Key::Named(NamedKey::ArrowLeft) if modifiers.alt_key() => Some(ShellCommand::Back),
        Key::Named(NamedKey::F5 | NamedKey::BrowserRefresh) => Some(ShellCommand::Refresh),
        Key::Character(c)
            if (modifiers.control_key() || modifiers.super_key())
                && c.as_str().eq_ignore_ascii_case("r") =>
        {
            Some(ShellCommand::Refresh)
        }
        _ => None,
    }
}
