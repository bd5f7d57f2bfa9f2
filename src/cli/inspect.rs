//! `inspect` command: print what an image looks like to the decoder.

use std::path::Path;

use anyhow::Result;

use crate::image::inspect::inspect_image;
use crate::log;

/// Print mode, format and probe pixels of `source`. Writes nothing to disk.
pub fn run_inspect(source: &Path) -> Result<()> {
    let report = inspect_image(source)?;

    log!("inspect"; "{}", source.display());
    for line in report.lines() {
        log!("inspect"; "{line}");
    }
    Ok(())
}
