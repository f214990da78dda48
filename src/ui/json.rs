//! NDJSON event output for `--json`.

use std::io::{self, Write};

use serde::Serialize;

/// Write one event as a single JSON line.
pub fn write_event(out: &mut impl Write, event: &impl Serialize) -> io::Result<()> {
    serde_json::to_writer(&mut *out, event).map_err(io::Error::other)?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Write one event to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}
