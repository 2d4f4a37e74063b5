#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod apply;
pub mod config;
pub mod error;
pub mod name;
pub mod operations;
pub mod output;
pub mod plan;
pub mod scanner;

pub use apply::{apply_renames, RenameOutcome};
pub use config::{Config, DefaultsConfig, RenumberConfig, DEFAULT_DIGITS};
pub use error::RenumberError;
pub use name::{format_name, parse_name, ParsedName};
pub use operations::renumber_operation;
pub use output::{status_line, OutputFormat, OutputFormatter, RenumberResult};
pub use plan::{check_capacity, max_decimal, plan_renames, PlannedRename};
pub use scanner::{discover, MatchedFolder};
