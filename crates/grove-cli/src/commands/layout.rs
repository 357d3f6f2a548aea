//! Layout command implementation.

use crate::cli::LayoutArgs;
use crate::error::Result;
use crate::input::{load_contacts, resolve_now};
use crate::output::Formatter;
use grove_engine::{LayoutEngine, LayoutStats};

/// Execute the layout command.
pub fn execute_layout(
    args: LayoutArgs,
    engine: &LayoutEngine,
    formatter: &Formatter,
) -> Result<()> {
    let contacts = load_contacts(&args.input)?;
    let now = resolve_now(args.now.as_deref())?;

    let layout = engine.compute_layout(&contacts, args.mode.into(), now);
    println!("{}", formatter.format_layout(&layout)?);

    if args.stats {
        let stats = LayoutStats::from_layout(&layout);
        println!("{}", formatter.format_stats(&stats)?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ModeArg;
    use crate::config::OutputFormat;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_layout_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"[{{"id": "1", "category": "family"}}]"#).unwrap();

        let args = LayoutArgs {
            input: file.path().to_path_buf(),
            mode: ModeArg::Tree,
            now: Some("2024-06-01".to_string()),
            stats: true,
        };
        let formatter = Formatter::new(OutputFormat::Json, false);
        assert!(execute_layout(args, &LayoutEngine::default(), &formatter).is_ok());
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let args = LayoutArgs {
            input: "/nonexistent/contacts.json".into(),
            mode: ModeArg::Garden,
            now: None,
            stats: false,
        };
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert!(execute_layout(args, &LayoutEngine::default(), &formatter).is_err());
    }
}
