//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

use theraplan_core::domain::{LocationId, LocationScope, MedicationId, PatientId};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "theraplan",
    bin_name = "theraplan",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Therapy calendars, medication demand and stock shortages",
    long_about = "Theraplan expands therapy records into dosing calendars, \
                  projects the medication a patient still needs against ward \
                  and main-store stock, and schedules SMS reminders.",
    after_help = "EXAMPLES:\n\
        \x20 theraplan plan 7\n\
        \x20 theraplan shortages 7 --as-of 2024-01-04\n\
        \x20 theraplan stock 1 --location WARD-A\n\
        \x20 theraplan remind 7 --actor nurse.kim --today 2024-01-04\n\
        \x20 theraplan --snapshot ward.toml low-stock",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the dosing calendar of every therapy of a patient.
    #[command(
        visible_alias = "p",
        about = "Show a patient's therapy plans",
        after_help = "EXAMPLES:\n\
            \x20 theraplan plan 7\n\
            \x20 theraplan plan 7 --output-format json"
    )]
    Plan(PatientArgs),

    /// Print the available quantity of a medication.
    #[command(
        about = "Show available stock of a medication",
        after_help = "EXAMPLES:\n\
            \x20 theraplan stock 1\n\
            \x20 theraplan stock 1 --location WARD-A"
    )]
    Stock(StockArgs),

    /// Print the remaining demand per medication of a patient.
    #[command(
        about = "Project remaining medication demand",
        after_help = "EXAMPLES:\n\
            \x20 theraplan demand 7\n\
            \x20 theraplan demand 7 --as-of 2024-01-07"
    )]
    Demand(ProjectionArgs),

    /// Print the medications a patient's therapies would run out of.
    #[command(
        visible_alias = "short",
        about = "List projected medication shortages",
        after_help = "EXAMPLES:\n\
            \x20 theraplan shortages 7\n\
            \x20 theraplan shortages 7 --as-of 2024-01-01"
    )]
    Shortages(ProjectionArgs),

    /// Print the medications below their reorder threshold.
    #[command(
        name = "low-stock",
        about = "List medications below their minimum quantity",
        after_help = "EXAMPLES:\n\
            \x20 theraplan low-stock\n\
            \x20 theraplan low-stock --location WARD-B"
    )]
    LowStock(LowStockArgs),

    /// Re-derive and replace the pending SMS reminders of a patient.
    #[command(
        about = "Schedule therapy reminders",
        after_help = "EXAMPLES:\n\
            \x20 theraplan remind 7 --actor nurse.kim\n\
            \x20 theraplan remind 7 --actor nurse.kim --today 2024-01-04"
    )]
    Remind(RemindArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 theraplan completions bash > ~/.local/share/bash-completion/completions/theraplan\n\
            \x20 theraplan completions zsh  > ~/.zfunc/_theraplan\n\
            \x20 theraplan completions fish > ~/.config/fish/completions/theraplan.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Theraplan configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 theraplan config get scheduling.reminder_hour\n\
            \x20 theraplan config list\n\
            \x20 theraplan config path"
    )]
    Config(ConfigCommands),
}

// ── plan ──────────────────────────────────────────────────────────────────────

/// Arguments naming a single patient.
#[derive(Debug, Args)]
pub struct PatientArgs {
    #[arg(value_name = "PATIENT", help = "Patient id")]
    pub patient: PatientId,
}

// ── stock / low-stock ─────────────────────────────────────────────────────────

/// Arguments for `theraplan stock`.
#[derive(Debug, Args)]
pub struct StockArgs {
    #[arg(value_name = "MEDICATION", help = "Medication code")]
    pub medication: MedicationId,

    /// Restrict the location part of the figure to one location.
    #[arg(
        short = 'l',
        long = "location",
        value_name = "LOCATION",
        help = "Only count stock held at this location"
    )]
    pub location: Option<String>,
}

impl StockArgs {
    pub fn scope(&self) -> LocationScope {
        scope_of(self.location.as_deref())
    }
}

/// Arguments for `theraplan low-stock`.
#[derive(Debug, Args)]
pub struct LowStockArgs {
    #[arg(
        short = 'l',
        long = "location",
        value_name = "LOCATION",
        help = "Only count stock held at this location"
    )]
    pub location: Option<String>,
}

impl LowStockArgs {
    pub fn scope(&self) -> LocationScope {
        scope_of(self.location.as_deref())
    }
}

fn scope_of(location: Option<&str>) -> LocationScope {
    LocationScope::from(location.map(LocationId::from))
}

// ── demand / shortages ────────────────────────────────────────────────────────

/// Arguments for `theraplan demand` and `theraplan shortages`.
#[derive(Debug, Args)]
pub struct ProjectionArgs {
    #[arg(value_name = "PATIENT", help = "Patient id")]
    pub patient: PatientId,

    /// Count doses from the start of this day on (default: today).
    #[arg(
        long = "as-of",
        value_name = "DATE",
        help = "Projection date, YYYY-MM-DD (default: today)"
    )]
    pub as_of: Option<NaiveDate>,
}

// ── remind ────────────────────────────────────────────────────────────────────

/// Arguments for `theraplan remind`.
#[derive(Debug, Args)]
pub struct RemindArgs {
    #[arg(value_name = "PATIENT", help = "Patient id")]
    pub patient: PatientId,

    /// User recorded as the author of every reminder.
    #[arg(
        short = 'a',
        long = "actor",
        value_name = "USER",
        env = "THERAPLAN_ACTOR",
        help = "User scheduling the reminders"
    )]
    pub actor: String,

    /// Only dates strictly after this day get a reminder (default: today).
    #[arg(
        long = "today",
        value_name = "DATE",
        help = "Reference day, YYYY-MM-DD (default: today)"
    )]
    pub today: Option<NaiveDate>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `theraplan completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `theraplan config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `scheduling.reminder_hour`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_plan_command() {
        let cli = Cli::parse_from(["theraplan", "plan", "7"]);
        match cli.command {
            Commands::Plan(args) => assert_eq!(args.patient, PatientId::new(7)),
            other => panic!("expected Plan, got {other:?}"),
        }
    }

    #[test]
    fn parse_dates() {
        let cli = Cli::parse_from(["theraplan", "shortages", "7", "--as-of", "2024-01-04"]);
        match cli.command {
            Commands::Shortages(args) => {
                assert_eq!(args.as_of, NaiveDate::from_ymd_opt(2024, 1, 4));
            }
            other => panic!("expected Shortages, got {other:?}"),
        }
    }

    #[test]
    fn malformed_date_is_rejected() {
        let result = Cli::try_parse_from(["theraplan", "demand", "7", "--as-of", "04/01/2024"]);
        assert!(result.is_err());
    }

    #[test]
    fn non_numeric_patient_is_rejected() {
        assert!(Cli::try_parse_from(["theraplan", "plan", "jane"]).is_err());
    }

    #[test]
    fn location_flag_selects_single_scope() {
        let cli = Cli::parse_from(["theraplan", "stock", "1", "-l", "WARD-A"]);
        match cli.command {
            Commands::Stock(args) => {
                assert_eq!(args.scope(), LocationScope::Single(LocationId::new("WARD-A")));
            }
            other => panic!("expected Stock, got {other:?}"),
        }

        let cli = Cli::parse_from(["theraplan", "low-stock"]);
        match cli.command {
            Commands::LowStock(args) => assert_eq!(args.scope(), LocationScope::All),
            other => panic!("expected LowStock, got {other:?}"),
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["theraplan", "--quiet", "--verbose", "low-stock"]);
        assert!(result.is_err());
    }
}
