//! Command-line grammar of the `cubease` binary.
//!
//! [`Cli`] is the parsed form of the command line.  Curve arguments are
//! kept as raw strings here and resolved against a
//! [`Catalog`](crate::catalog::Catalog) when the command runs, so parsing
//! never depends on configuration.
//!
//! ```text
//! cubease list
//! cubease table <curve> [steps]
//! cubease eval <curve> <x> [<from> <to>]
//! cubease solve <curve> <x>
//! cubease sample <curve> <t>
//! ```
//!
//! `<curve>` is a preset name (e.g. `EaseInOutBack`), a curve from the
//! config file, or four comma-separated numbers `"x1,y1,x2,y2"`.

use crate::bezier::EaseError;
use crate::catalog::{Catalog, ResolveError};
use crate::config::TableConfig;
use crate::traits::CurveCatalog;
use clap::{Parser, Subcommand};
use std::fmt::Write as _;

/// Closed-form cubic Bézier easing curves.
#[derive(Parser, Debug)]
#[command(name = "cubease", version)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

/// Every action the binary can perform.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List every known curve with its coefficients.
    List,

    /// Print x and eased y over [0, 1].
    Table {
        /// Preset name, config curve, or "x1,y1,x2,y2".
        #[arg(allow_hyphen_values = true)]
        curve: String,
        /// Number of intervals (rows minus one); defaults to the config value.
        #[arg(allow_hyphen_values = true)]
        steps: Option<usize>,
    },

    /// Eased value at x, or the interpolation between <from> and <to>.
    Eval {
        /// Preset name, config curve, or "x1,y1,x2,y2".
        #[arg(allow_hyphen_values = true)]
        curve: String,
        /// Normalized time in [0, 1].
        #[arg(allow_hyphen_values = true)]
        x: f64,
        /// Value at x = 0.
        #[arg(allow_hyphen_values = true, requires = "to")]
        from: Option<f64>,
        /// Value at x = 1.
        #[arg(allow_hyphen_values = true, requires = "from")]
        to: Option<f64>,
    },

    /// Curve parameter t where x(t) = x.
    Solve {
        /// Preset name, config curve, or "x1,y1,x2,y2".
        #[arg(allow_hyphen_values = true)]
        curve: String,
        /// Normalized time in [0, 1].
        #[arg(allow_hyphen_values = true)]
        x: f64,
    },

    /// x(t) and y(t).
    Sample {
        /// Preset name, config curve, or "x1,y1,x2,y2".
        #[arg(allow_hyphen_values = true)]
        curve: String,
        /// Curve parameter in [0, 1].
        #[arg(allow_hyphen_values = true)]
        t: f64,
    },
}

/// Errors from running a [`Command`].
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    Ease(#[from] EaseError),
    #[error(transparent)]
    Fmt(#[from] std::fmt::Error),
}

impl Command {
    /// Run the command against `catalog` and return the text to print.
    pub fn execute(&self, catalog: &Catalog, table: &TableConfig) -> Result<String, CommandError> {
        let mut out = String::new();
        match self {
            Command::List => {
                for name in catalog.names() {
                    if let Some(curve) = catalog.lookup(&name) {
                        writeln!(out, "{:<16} {}", name, curve)?;
                    }
                }
            }
            Command::Table { curve, steps } => {
                let c = catalog.resolve(curve)?;
                let prec = table.precision;
                for (x, y) in c.table(steps.unwrap_or(table.steps))? {
                    writeln!(out, "{:.prec$}\t{:.prec$}", x, y, prec = prec)?;
                }
            }
            Command::Eval { curve, x, from, to } => {
                let c = catalog.resolve(curve)?;
                let v = match (from, to) {
                    (Some(from), Some(to)) => c.lerp(*from, *to, *x)?,
                    _ => c.evaluate(*x)?,
                };
                writeln!(out, "{}", v)?;
            }
            Command::Solve { curve, x } => {
                let t = catalog.resolve(curve)?.solve_t(*x)?;
                writeln!(out, "{}", t)?;
            }
            Command::Sample { curve, t } => {
                let c = catalog.resolve(curve)?;
                writeln!(out, "{}\t{}", c.sample_x(*t)?, c.sample_y(*t)?)?;
            }
        }
        Ok(out)
    }
}
