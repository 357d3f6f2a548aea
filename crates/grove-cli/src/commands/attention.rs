//! Attention command implementation.

use crate::cli::AttentionArgs;
use crate::error::{CliError, Result};
use crate::input::{load_contacts, resolve_now};
use crate::output::Formatter;
use grove_engine::LayoutEngine;

/// Execute the attention command.
pub fn execute_attention(
    args: AttentionArgs,
    engine: &LayoutEngine,
    formatter: &Formatter,
) -> Result<()> {
    if args.limit == Some(0) {
        return Err(CliError::InvalidInput("Limit must be at least 1".to_string()));
    }

    let contacts = load_contacts(&args.input)?;
    let now = resolve_now(args.now.as_deref())?;

    let mut items = engine.needs_attention(&contacts, now);
    if let Some(limit) = args.limit {
        items.truncate(limit);
    }
    println!("{}", formatter.format_attention(&items)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_zero_limit_rejected() {
        let args = AttentionArgs {
            input: "contacts.json".into(),
            now: None,
            limit: Some(0),
        };
        let formatter = Formatter::new(OutputFormat::Table, false);
        let result = execute_attention(args, &LayoutEngine::default(), &formatter);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
