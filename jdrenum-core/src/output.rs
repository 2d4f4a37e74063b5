use crate::apply::RenameOutcome;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use nu_ansi_term::Color as AnsiColor;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Summary,
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "summary" => Ok(Self::Summary),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

/// Result of a renumber operation
#[derive(Debug, Serialize)]
pub struct RenumberResult {
    pub source_prefix: String,
    /// The prefix names were written with (the source prefix when none was given)
    pub target_prefix: String,
    pub start: u64,
    pub digits: usize,
    pub root: PathBuf,
    pub dry_run: bool,
    pub matched: usize,
    pub outcomes: Vec<RenameOutcome>,
}

impl RenumberResult {
    pub fn renamed(&self) -> usize {
        self.count(|o| matches!(o, RenameOutcome::Renamed { .. }))
    }

    pub fn would_rename(&self) -> usize {
        self.count(|o| matches!(o, RenameOutcome::WouldRename { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, RenameOutcome::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(RenameOutcome::is_failure)
    }

    fn count(&self, predicate: impl Fn(&RenameOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| predicate(*o)).count()
    }

    /// One-line totals for the whole batch.
    pub fn totals_line(&self) -> String {
        if self.matched == 0 {
            return format!(
                "No folders with prefix '{}' found in {}",
                self.source_prefix,
                self.root.display()
            );
        }

        if self.dry_run {
            return format!(
                "Dry run: {} would be renamed, {} skipped",
                self.would_rename(),
                self.skipped()
            );
        }

        let failed = self.failed();
        if failed > 0 {
            format!(
                "Completed with {} failure(s): {} renamed, {} skipped",
                failed,
                self.renamed(),
                self.skipped()
            )
        } else {
            format!("Renamed {} folder(s), {} skipped", self.renamed(), self.skipped())
        }
    }
}

/// Plain text line for a single outcome
pub fn status_line(outcome: &RenameOutcome, use_color: bool) -> String {
    let paint = |color: AnsiColor, text: &str| {
        if use_color {
            color.paint(text).to_string()
        } else {
            text.to_string()
        }
    };

    match outcome {
        RenameOutcome::Skipped { path } => format!(
            "{} {} (already has correct name)",
            paint(AnsiColor::DarkGray, "Skipping"),
            path.display()
        ),
        RenameOutcome::WouldRename { from, to } => format!(
            "{} {} -> {}",
            paint(AnsiColor::Yellow, "Would rename:"),
            from.display(),
            to.display()
        ),
        RenameOutcome::Renamed { from, to } => format!(
            "{} {} -> {}",
            paint(AnsiColor::Green, "Renaming:"),
            from.display(),
            to.display()
        ),
        RenameOutcome::Failed { from, error, .. } => format!(
            "{} {}: {}",
            paint(AnsiColor::Red, "Error renaming"),
            from.display(),
            error
        ),
    }
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat, use_color: bool) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Table => self.format_table(use_color),
            OutputFormat::Summary => self.format_summary(use_color),
        }
    }
    fn format_json(&self) -> String;
    fn format_table(&self, use_color: bool) -> String;
    fn format_summary(&self, use_color: bool) -> String;
}

impl OutputFormatter for RenumberResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": self.failed() == 0,
            "operation": "renumber",
            "source_prefix": self.source_prefix,
            "target_prefix": self.target_prefix,
            "start": self.start,
            "digits": self.digits,
            "root": self.root.to_string_lossy(),
            "dry_run": self.dry_run,
            "summary": {
                "matched": self.matched,
                "renamed": self.renamed(),
                "would_rename": self.would_rename(),
                "skipped": self.skipped(),
                "failed": self.failed(),
            },
            "outcomes": self.outcomes,
        }))
        .unwrap_or_default()
    }

    fn format_table(&self, use_color: bool) -> String {
        if self.outcomes.is_empty() {
            return format!("{}\n", self.totals_line());
        }

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Disabled);
        if use_color {
            table.enforce_styling();
            table.set_header(vec![
                Cell::new("From").fg(Color::Cyan),
                Cell::new("To").fg(Color::Cyan),
                Cell::new("Status").fg(Color::Cyan),
            ]);
        } else {
            table.set_header(vec!["From", "To", "Status"]);
        }

        for outcome in &self.outcomes {
            let (from, to, status, color) = match outcome {
                RenameOutcome::Skipped { path } => (path, path, "skipped", Color::DarkGrey),
                RenameOutcome::WouldRename { from, to } => {
                    (from, to, "would rename", Color::Yellow)
                },
                RenameOutcome::Renamed { from, to } => (from, to, "renamed", Color::Green),
                RenameOutcome::Failed { from, to, .. } => (from, to, "failed", Color::Red),
            };
            let from = relative_to(from, &self.root);
            let to = relative_to(to, &self.root);
            if use_color {
                table.add_row(vec![
                    Cell::new(from),
                    Cell::new(to),
                    Cell::new(status).fg(color),
                ]);
            } else {
                table.add_row(vec![from, to, status.to_string()]);
            }
        }

        let mut output = format!("{table}\n");
        for outcome in self.outcomes.iter().filter(|o| o.is_failure()) {
            writeln!(output, "{}", status_line(outcome, use_color)).unwrap();
        }
        writeln!(output, "{}", self.totals_line()).unwrap();
        output
    }

    fn format_summary(&self, use_color: bool) -> String {
        let mut output = String::new();
        for outcome in &self.outcomes {
            writeln!(output, "{}", status_line(outcome, use_color)).unwrap();
        }
        writeln!(output, "{}", self.totals_line()).unwrap();
        output
    }
}

/// Show paths below the root without the root itself
fn relative_to(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .map_or_else(|_| path.display().to_string(), |p| p.display().to_string())
}
