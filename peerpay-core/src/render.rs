//! Line-oriented feed rendering
//!
//! Display boundary only: the feed's ordering and content are bookkept by
//! [`crate::User`], this just writes the entries out.

use std::io::{self, Write};

/// Write each feed entry as one line, in order
pub fn render_feed<W: Write>(out: &mut W, feed: &[String]) -> io::Result<()> {
    for entry in feed {
        writeln!(out, "{}", entry)?;
    }
    Ok(())
}
