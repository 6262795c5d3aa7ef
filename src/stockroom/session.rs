//! The interactive loop: render, read one line, dispatch, repeat.
//!
//! Generic over the input and output channels so the whole loop runs in tests
//! against in-memory buffers. I/O failures on either channel are the only
//! errors that leave this function; a line that is not valid UTF-8 is an
//! invalid entry like any other.

use crate::error::{Result, StockError};
use crate::menu::{CmdMessage, MenuHandler};
use crate::render;
use crate::store::StorageBackend;
use std::io::{BufRead, Write};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Colorize messages.
    pub color: bool,
}

/// Runs the menu against `store` until the user exits or `input` is
/// exhausted. The backend must already be connected; see
/// [`Connection`](crate::store::Connection).
pub fn run<B, R, W>(
    store: &mut B,
    mut input: R,
    mut output: W,
    options: SessionOptions,
) -> Result<()>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    let mut menu = MenuHandler::new(store);
    let mut cycles = 0usize;

    while !menu.is_finished() {
        let screen = menu.screen();
        write_messages(&mut output, &screen.messages, options)?;
        output.write_all(screen.body.as_bytes())?;

        let outcome = if menu.reads_input() {
            output.write_all(render::PROMPT.as_bytes())?;
            output.flush()?;

            let mut buf = Vec::new();
            if input.read_until(b'\n', &mut buf)? == 0 {
                output.write_all(b"\n")?;
                debug!(state = %menu.state(), "input closed");
                break;
            }
            match String::from_utf8(buf) {
                Ok(line) => menu.step(Some(line.as_str())),
                Err(_) => menu.reject(StockError::Parse("entry is not valid UTF-8".into())),
            }
        } else {
            menu.step(None)
        };

        write_messages(&mut output, &outcome.messages, options)?;
        cycles += 1;
    }

    output.flush()?;
    info!(cycles, "session finished");
    Ok(())
}

fn write_messages<W: Write>(
    output: &mut W,
    messages: &[CmdMessage],
    options: SessionOptions,
) -> Result<()> {
    if !messages.is_empty() {
        output.write_all(render::messages(messages, options.color).as_bytes())?;
    }
    Ok(())
}
