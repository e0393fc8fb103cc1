//! CLI argument parsing with clap.

use std::path::PathBuf;

use clap::Parser;

/// Photo-booth frame generator - renders decorative PNG frames with photo slots.
#[derive(Parser, Debug)]
#[command(name = "framegen", version, about)]
pub struct Cli {
    /// Directory to write frames into (must already exist).
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Only generate the named frame; may be repeated.
    #[arg(long, value_name = "NAME")]
    pub only: Vec<String>,

    /// List the frame catalogue and exit.
    #[arg(long)]
    pub list: bool,

    /// Also write a JSON manifest of slot positions.
    #[arg(long)]
    pub manifest: bool,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Log level implied by the verbosity flag.
    #[must_use]
    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let cli = Cli::parse_from(["framegen"]);
        assert!(cli.output_dir.is_none());
        assert!(cli.only.is_empty());
        assert!(!cli.list);
        assert!(!cli.manifest);
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
        assert_eq!(cli.log_level(), log::LevelFilter::Warn);
    }

    #[test]
    fn all_options() {
        let cli = Cli::parse_from([
            "framegen",
            "-o",
            "out",
            "--only",
            "classic_4cut",
            "--only",
            "modern_6cut",
            "--manifest",
            "--config",
            "frames.toml",
            "-v",
        ]);
        assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
        assert_eq!(cli.only, ["classic_4cut", "modern_6cut"]);
        assert!(cli.manifest);
        assert_eq!(cli.config.as_deref(), Some("frames.toml"));
        assert!(cli.verbose);
        assert_eq!(cli.log_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn list_flag() {
        let cli = Cli::parse_from(["framegen", "--list"]);
        assert!(cli.list);
    }

    #[test]
    fn unexpected_positional_rejected() {
        assert!(Cli::try_parse_from(["framegen", "extra"]).is_err());
    }
}
