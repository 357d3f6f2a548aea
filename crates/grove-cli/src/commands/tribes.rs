//! Tribes command implementation.

use crate::cli::TribesArgs;
use crate::error::{CliError, Result};
use crate::input::{is_stdin, load_contacts, load_tags, resolve_now};
use crate::output::Formatter;
use grove_engine::LayoutEngine;

/// Execute the tribes command.
pub fn execute_tribes(
    args: TribesArgs,
    engine: &LayoutEngine,
    formatter: &Formatter,
) -> Result<()> {
    if is_stdin(&args.input) && is_stdin(&args.tags) {
        return Err(CliError::InvalidInput(
            "Contacts and tags cannot both be read from stdin".to_string(),
        ));
    }

    let contacts = load_contacts(&args.input)?;
    let tags = load_tags(&args.tags)?;
    let now = resolve_now(args.now.as_deref())?;

    let tribes = engine.aggregate_tribes(&contacts, &tags, now);
    println!("{}", formatter.format_tribes(&tribes)?);

    Ok(())
}
