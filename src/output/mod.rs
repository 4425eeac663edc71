//! Output formatting and writing

pub mod envelope;

pub use envelope::{success, ErrorBody, ErrorEnvelope, HelpEnvelope, SuccessEnvelope};

use std::io::Write;

use serde::Serialize;

use crate::errors::Result;

/// Write `value` as pretty-printed JSON followed by a newline
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
