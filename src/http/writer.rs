//! Response serialization
//!
//! One response goes out per request, fully buffered: the wire form is
//! assembled in memory and pushed with a single write_all, so responses on
//! a shared connection never interleave.

use super::{Response, Result};
use std::io::Write;

/// Serialize a response onto the stream and flush it
pub fn write_response<W: Write>(stream: &mut W, response: &Response) -> Result<()> {
    stream.write_all(&response.to_wire())?;
    stream.flush()?;
    Ok(())
}
