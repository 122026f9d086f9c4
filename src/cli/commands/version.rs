//! version command - Print full version

use anyhow::Result;

use crate::ui::output;
use crate::version::full_version;

/// Print the full version string. Unaffected by `--verbose` and `--debug`.
pub fn version() -> Result<()> {
    output::print(full_version());
    Ok(())
}
