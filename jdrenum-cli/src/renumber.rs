use anyhow::{Context, Result};
use jdrenum_core::{renumber_operation, OutputFormat, OutputFormatter, RenumberConfig};

/// Run the renumbering and print its report. Returns the number of folders
/// that could not be renamed.
pub fn handle_renumber(
    config: &RenumberConfig,
    output: OutputFormat,
    use_color: bool,
) -> Result<usize> {
    let result = renumber_operation(config).with_context(|| {
        format!(
            "Failed to rename '{}' folders in {}",
            config.source_prefix,
            config.root.display()
        )
    })?;

    match output {
        OutputFormat::Json => println!("{}", result.format_json()),
        format => print!("{}", result.format(format, use_color)),
    }

    Ok(result.failed())
}
