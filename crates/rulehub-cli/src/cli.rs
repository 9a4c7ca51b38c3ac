//! Command-line argument definitions.

use clap::Parser;

/// RuleHub — rule evaluation demo driver
///
/// Without a selector every demo group runs in catalog order, pausing
/// for Enter between groups. With a selector only that group runs.
#[derive(Debug, Parser)]
#[command(name = "rulehub-demo", version, about, long_about = None)]
pub struct Cli {
    /// Demo group to run (omit to run all groups)
    pub selector: Option<String>,

    /// Surplus tokens; accepted and ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub rest: Vec<String>,
}
