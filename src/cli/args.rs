//! CLI argument definitions

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "surfacegen")]
#[command(
    about = "Generate SVG assets and hydrate the profile README from local data and GitHub telemetry",
    version
)]
pub(crate) struct Cli {
    /// Render everything and print a README preview without writing any file
    #[arg(long)]
    pub(crate) dry_run: bool,

    /// Show per-step detail and an asset summary table
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from(["surfacegen", "--dry-run", "-v"]).unwrap();
        assert!(cli.dry_run);
        assert!(cli.verbose);

        let cli = Cli::try_parse_from(["surfacegen"]).unwrap();
        assert!(!cli.dry_run);
        assert!(!cli.verbose);
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["surfacegen", "--offline"]).is_err());
    }
}
