//! Raw terminal access over termios.
//!
//! [`Terminal::enter`] switches stdin to raw mode and the screen to the
//! alternate buffer; dropping the [`Terminal`] undoes both.

use std::io::{self, Write};
use std::os::unix::io::AsRawFd;

use anyhow::{bail, Result};

use crate::paint::{ENTER_SCREEN, LEAVE_SCREEN};

/// Bytes arriving within this window after the first one belong to the same key.
const DRAIN_TIMEOUT_MS: libc::c_int = 10;

/// Raw-mode terminal session.
pub struct Terminal {
    fd: libc::c_int,
    original: libc::termios,
}

impl Terminal {
    /// Enters raw mode and the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns an error if stdin is not a terminal or its attributes cannot
    /// be changed.
    pub fn enter() -> Result<Self> {
        let fd = io::stdin().as_raw_fd();
        if unsafe { libc::isatty(fd) } == 0 {
            bail!("stdin is not a terminal");
        }

        let mut original: libc::termios = unsafe { std::mem::zeroed() };
        if unsafe { libc::tcgetattr(fd, &mut original) } != 0 {
            return Err(io::Error::last_os_error().into());
        }

        let mut raw = original;
        raw.c_iflag &= !(libc::IGNBRK
            | libc::BRKINT
            | libc::PARMRK
            | libc::ISTRIP
            | libc::INLCR
            | libc::IGNCR
            | libc::ICRNL
            | libc::IXON);
        raw.c_oflag &= !libc::OPOST;
        raw.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);
        raw.c_cflag &= !(libc::CSIZE | libc::PARENB);
        raw.c_cflag |= libc::CS8;
        raw.c_cc[libc::VMIN] = 1;
        raw.c_cc[libc::VTIME] = 0;
        if unsafe { libc::tcsetattr(fd, libc::TCSANOW, &raw) } != 0 {
            return Err(io::Error::last_os_error().into());
        }

        let terminal = Self { fd, original };
        let mut stdout = io::stdout();
        stdout.write_all(ENTER_SCREEN)?;
        stdout.flush()?;

        tracing::debug!("entered raw mode");
        Ok(terminal)
    }

    /// Returns the window size as `(columns, rows)`, if the terminal reports one.
    pub fn size(&self) -> Option<(u16, u16)> {
        let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
        if unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut ws) } == -1 {
            return None;
        }
        if ws.ws_col == 0 || ws.ws_row == 0 {
            return None;
        }
        Some((ws.ws_col, ws.ws_row))
    }

    /// Reads one key: blocks for the first byte, then collects whatever
    /// else arrives within a few milliseconds.
    ///
    /// # Errors
    ///
    /// Returns an error if stdin is closed or a read fails.
    pub fn read_key(&mut self) -> Result<Vec<u8>> {
        let mut key = Vec::new();
        let mut chunk = [0u8; 256];

        let n = self.read_chunk(&mut chunk)?;
        if n == 0 {
            bail!("stdin closed");
        }
        key.extend_from_slice(&chunk[..n]);

        while self.poll_readable(DRAIN_TIMEOUT_MS)? {
            let n = self.read_chunk(&mut chunk)?;
            if n == 0 {
                break;
            }
            key.extend_from_slice(&chunk[..n]);
        }

        Ok(key)
    }

    fn read_chunk(&self, chunk: &mut [u8]) -> io::Result<usize> {
        loop {
            let n = unsafe {
                libc::read(self.fd, chunk.as_mut_ptr().cast::<libc::c_void>(), chunk.len())
            };
            if n >= 0 {
                return Ok(n as usize);
            }
            let err = io::Error::last_os_error();
            if err.kind() != io::ErrorKind::Interrupted {
                return Err(err);
            }
        }
    }

    fn poll_readable(&self, timeout_ms: libc::c_int) -> io::Result<bool> {
        let mut pfd = libc::pollfd {
            fd: self.fd,
            events: libc::POLLIN,
            revents: 0,
        };
        match unsafe { libc::poll(&mut pfd, 1, timeout_ms) } {
            -1 => {
                let err = io::Error::last_os_error();
                if err.kind() == io::ErrorKind::Interrupted {
                    Ok(false)
                } else {
                    Err(err)
                }
            }
            0 => Ok(false),
            _ => Ok(pfd.revents & libc::POLLIN != 0),
        }
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = stdout.write_all(LEAVE_SCREEN);
        let _ = stdout.flush();
        unsafe {
            let _ = libc::tcsetattr(self.fd, libc::TCSANOW, &self.original);
        }
        tracing::debug!("left raw mode");
    }
}
