//! Terminal front end for the µe editor.
//!
//! Reads keys from a raw-mode terminal, feeds the translated commands to an
//! [`Editor`] and paints every frame with ANSI sequences.

pub mod input;
pub mod paint;
pub mod term;

use std::io::{self, Write};

use anyhow::{Context, Result};
use ue_core::Editor;

pub use input::translate;
pub use paint::paint;
pub use term::Terminal;

/// Screen size used when the terminal does not report one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackSize {
    pub width: u16,
    pub height: u16,
}

impl Default for FallbackSize {
    fn default() -> Self {
        Self {
            width: 80,
            height: 25,
        }
    }
}

/// Runs the editor on the controlling terminal until it asks to quit.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, read or written.
pub fn run(editor: &mut Editor, fallback: FallbackSize) -> Result<()> {
    let mut terminal = Terminal::enter().context("failed to set up the terminal")?;
    let mut stdout = io::stdout();

    tracing::info!("editor loop started");
    loop {
        let (width, height) = terminal
            .size()
            .unwrap_or((fallback.width, fallback.height));
        let running = step(
            editor,
            &mut stdout,
            usize::from(width),
            usize::from(height),
            || terminal.read_key(),
        )?;
        if !running {
            break;
        }
    }
    tracing::info!("editor loop finished");
    Ok(())
}

/// One iteration of the main loop: resize, paint, read a key and execute it.
///
/// Returns false once the editor asks to quit.
///
/// # Errors
///
/// Returns an error if painting or reading the key fails.
pub fn step<W, F>(
    editor: &mut Editor,
    out: &mut W,
    width: usize,
    height: usize,
    read_key: F,
) -> Result<bool>
where
    W: Write,
    F: FnOnce() -> Result<Vec<u8>>,
{
    editor.set_viewport(width, height);
    let frame = editor.render();
    paint(out, &frame).context("failed to paint the screen")?;

    let key = read_key()?;
    match translate(&key) {
        Some(command) => {
            tracing::trace!(?command, "key");
            Ok(editor.handle_command(command))
        }
        None => Ok(true),
    }
}
