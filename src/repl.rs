//! Interactive read-evaluate-print loop.
//!
//! Reads one command per line and prints one reply per line until the user
//! types `close`/`exit` or the input ends. The loop works on any
//! `BufRead`/`Write` pair; `main` wires it to stdin and stdout.

use crate::assistant::Assistant;
use crate::book::Clock;
use std::io::{self, BufRead, Write};
use tracing::info;

pub const WELCOME: &str = "Welcome to the assistant bot!";

/// Run the assistant against `input` until an exit command or end of input.
///
/// Lines that are not valid UTF-8 are decoded lossily rather than rejected.
///
/// # Errors
///
/// Only I/O failures on `input` or `output` are returned.
pub fn run<C, R, W>(
    assistant: &mut Assistant<C>,
    prompt: &str,
    mut input: R,
    output: &mut W,
) -> io::Result<()>
where
    C: Clock,
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", WELCOME)?;

    let mut buf = Vec::new();
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            // Leave the terminal on a fresh line after the dangling prompt.
            writeln!(output)?;
            info!("Input closed");
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        let outcome = assistant.handle(&line);
        writeln!(output, "{}", outcome.message())?;

        if outcome.is_exit() {
            info!("Exit requested");
            break;
        }
    }

    output.flush()
}
