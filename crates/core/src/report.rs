// T9 Wiperite - Firmware Bring-up Probe
// Copyright (C) 2026 T9 Wiperite contributors
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use crate::{ArgumentList, BringupResult};
use std::io::Write;
use tracing::{debug, trace};

pub const GREETING: &str = "hello from firmware";
pub const READY_LINE: &str = "ready to debug";

/// Writes the bring-up report for `args` and flushes `out`.
///
/// Produces the greeting with the argument count, one ` arg[i] = value` line
/// per argument, then [`READY_LINE`]. Argument bytes are written untouched.
/// Returns the number of lines written, which is always `args.len() + 2`.
pub fn write_report<W: Write>(out: &mut W, args: &ArgumentList) -> BringupResult<usize> {
    writeln!(out, "{}; argc={}", GREETING, args.len())?;

    for (index, arg) in args.iter() {
        trace!("arg[{}] = {:?}", index, arg);
        write!(out, " arg[{}] = ", index)?;
        out.write_all(arg.as_encoded_bytes())?;
        out.write_all(b"\n")?;
    }

    // Breakpoint anchor for bring-up sessions.
    writeln!(out, "{}", READY_LINE)?;
    out.flush()?;

    let lines = args.len() + 2;
    debug!("Bring-up report written ({} lines)", lines);
    Ok(lines)
}
