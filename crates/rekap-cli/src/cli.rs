use clap::{Parser, Subcommand};

/// Extended help shown after `rekap run --help`. Describes the expected
/// export layouts and the workflow around the merged DB file.
pub const RUN_AFTER_HELP: &str = "\
How the recap works:
  Rekap reads two CSV exports with one header row each:
    --daily  today's order export from the marketplaces
    --db     the accumulated database up to the previous day

  The daily export must carry these columns:
  Tanggal, Kota/Kabupaten, No. Telepon, Nama toko, Status MP, Platform,
  SKU Induk, Jumlah Produk di Pesan, Jumlah, No. Pesanan

  The DB must carry Tanggal and normalized Telepon columns; every other DB
  column must also exist in the daily export after cleaning.

What one run does:
  1. Drops internal-store and Pending rows.
  2. Normalizes phone numbers to the 628 dialing form and platform labels
     to the canonical channel names.
  3. Classifies each order as new (NC) or returning (RO) against the DB.
  4. Prints the per-day KPI recap for the KPI sheet.
  5. Writes the merged database as `DB - <date>.csv` unless --no-export.

Make sure today's rows are not already in the DB before running; a stale
pair is reported as a warning, not an error.
";

#[derive(Debug, Parser)]
#[command(
    name = "rekap",
    version,
    about = "daily sales recap pipeline",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Reconcile the daily export against the DB and print the KPI recap
    #[command(after_long_help = RUN_AFTER_HELP)]
    Run {
        /// Path to today's daily export CSV
        #[arg(long)]
        daily: String,
        /// Path to the accumulated DB CSV up to the previous day
        #[arg(long)]
        db: String,
        /// Directory the merged DB file is written to (default: current directory)
        #[arg(long = "out-dir")]
        out_dir: Option<String>,
        /// Compute the recap without writing the merged DB file
        #[arg(long = "no-export")]
        no_export: bool,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Verify that the DB predates the daily export
    Check {
        /// Path to today's daily export CSV
        #[arg(long)]
        daily: String,
        /// Path to the accumulated DB CSV up to the previous day
        #[arg(long)]
        db: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}

#[cfg(test)]
mod tests {
    use super::{Commands, parse_from};

    #[test]
    fn parse_run_with_paths_and_flags() {
        let parsed = parse_from([
            "rekap",
            "run",
            "--daily",
            "daily.csv",
            "--db",
            "db.csv",
            "--out-dir",
            "/tmp",
            "--no-export",
        ]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            match cli.command {
                Commands::Run {
                    daily,
                    db,
                    out_dir,
                    no_export,
                    json,
                } => {
                    assert_eq!(daily, "daily.csv");
                    assert_eq!(db, "db.csv");
                    assert_eq!(out_dir.as_deref(), Some("/tmp"));
                    assert!(no_export);
                    assert!(!json);
                }
                Commands::Check { .. } => panic!("expected run"),
            }
        }
    }

    #[test]
    fn run_requires_both_paths() {
        assert!(parse_from(["rekap", "run", "--daily", "daily.csv"]).is_err());
        assert!(parse_from(["rekap", "run"]).is_err());
    }

    #[test]
    fn parse_check_command() {
        let parsed = parse_from(["rekap", "check", "--daily", "d.csv", "--db", "db.csv", "--json"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert!(matches!(cli.command, Commands::Check { json: true, .. }));
        }
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(parse_from(["rekap", "upload"]).is_err());
    }
}
