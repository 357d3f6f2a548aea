//! Config command implementation.

use crate::error::Result;
use grove_engine::LayoutEngine;

/// Print the engine configuration in effect as TOML.
pub fn execute_config(engine: &LayoutEngine) -> Result<()> {
    print!("{}", engine.config().to_toml_string()?);
    Ok(())
}
