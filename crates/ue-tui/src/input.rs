//! Key translation: raw terminal bytes to editor commands.
//!
//! One read from the terminal is one key. Control bytes and a small set of
//! ANSI cursor-key sequences map to commands; anything else is typed text,
//! decoded from UTF-8 with a fresh decoder per key.

use ue_core::codec::decode_slice;
use ue_core::Command;

const ESC: u8 = 0x1B;
const BACKSPACE: u8 = 0x7F;

const fn ctrl(key: u8) -> u8 {
    key & 0x1F
}

const CTRL_A: u8 = ctrl(b'a');
const CTRL_B: u8 = ctrl(b'b');
const CTRL_C: u8 = ctrl(b'c');
const CTRL_D: u8 = ctrl(b'd');
const CTRL_E: u8 = ctrl(b'e');
const CTRL_F: u8 = ctrl(b'f');
const CTRL_G: u8 = ctrl(b'g');
const CTRL_H: u8 = ctrl(b'h');
const CTRL_I: u8 = ctrl(b'i');
const CTRL_J: u8 = ctrl(b'j');
const CTRL_K: u8 = ctrl(b'k');
const CTRL_L: u8 = ctrl(b'l');
const CTRL_N: u8 = ctrl(b'n');
const CTRL_O: u8 = ctrl(b'o');
const CTRL_P: u8 = ctrl(b'p');
const CTRL_Q: u8 = ctrl(b'q');
const CTRL_R: u8 = ctrl(b'r');
const CTRL_S: u8 = ctrl(b's');
const CTRL_T: u8 = ctrl(b't');
const CTRL_U: u8 = ctrl(b'u');
const CTRL_V: u8 = ctrl(b'v');
const CTRL_W: u8 = ctrl(b'w');
const CTRL_X: u8 = ctrl(b'x');
const CTRL_Y: u8 = ctrl(b'y');
const CTRL_Z: u8 = ctrl(b'z');

/// Translates one key into a command.
///
/// Returns `None` for keys that do nothing: unknown escape sequences, the
/// unused control keys and input that decodes to no characters.
pub fn translate(key: &[u8]) -> Option<Command> {
    let first = *key.first()?;
    if first == ESC {
        return translate_escape(key);
    }

    let command = match first {
        CTRL_L => Command::MoveRight,
        CTRL_H => Command::MoveLeft,
        CTRL_K => Command::MoveUp,
        CTRL_J => Command::MoveDown,
        CTRL_A => Command::LineHome,
        CTRL_E => Command::LineEnd,
        CTRL_P => Command::PageUp,
        CTRL_N => Command::PageDown,
        CTRL_D => Command::DeleteChar,
        BACKSPACE => Command::Backspace,
        CTRL_Y => Command::DeleteLine,
        CTRL_I => Command::Tab,
        CTRL_B => Command::Mark,
        CTRL_U => Command::Unmark,
        CTRL_C => Command::Copy,
        CTRL_X => Command::Cut,
        CTRL_V => Command::Paste,
        CTRL_Z => Command::Undo,
        CTRL_S => Command::Save,
        CTRL_Q => Command::Quit,
        CTRL_F | CTRL_G | CTRL_O | CTRL_R | CTRL_T | CTRL_W => return None,
        _ => {
            let text = decode_slice(key);
            if text.is_empty() {
                return None;
            }
            Command::InsertText(text)
        }
    };
    Some(command)
}

/// Maps `ESC [ x` cursor-key sequences by their third byte.
fn translate_escape(key: &[u8]) -> Option<Command> {
    let command = match key.get(2)? {
        b'A' => Command::MoveUp,
        b'B' => Command::MoveDown,
        b'C' => Command::MoveRight,
        b'D' => Command::MoveLeft,
        b'5' => Command::PageUp,
        b'6' => Command::PageDown,
        b'H' => Command::LineHome,
        b'F' => Command::LineEnd,
        b'3' => Command::DeleteChar,
        _ => {
            tracing::trace!(?key, "ignored escape sequence");
            return None;
        }
    };
    Some(command)
}
