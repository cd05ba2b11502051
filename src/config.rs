use std::path::PathBuf;

use regex::Regex;

use crate::cli::Cli;
use crate::error::{Result, VidcatError};
use crate::ordering::OrderingSpec;
use crate::output::OutputFormat;

/// Everything a run needs, resolved once from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub src_dir: PathBuf,
    pub pattern: Option<Regex>,
    pub ordering: OrderingSpec,
    pub output: OutputFormat,
    pub concat: Option<ConcatSettings>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcatSettings {
    pub tool: PathBuf,
    pub out_dir: PathBuf,
    pub destination: PathBuf,
    pub dry_run: bool,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        cli.validate().map_err(VidcatError::InvalidArg)?;

        let pattern = if cli.match_pattern.is_empty() {
            None
        } else {
            Some(Regex::new(&cli.match_pattern)?)
        };
        let ordering = OrderingSpec::parse(&cli.order_by, &cli.order)?;
        let output: OutputFormat = cli.output.parse()?;

        let concat = (!cli.list_only).then(|| ConcatSettings {
            tool: cli.tool.clone(),
            out_dir: cli.out_dir.clone(),
            destination: cli.out_dir.join(&cli.out_file),
            dry_run: cli.dry_run,
        });

        Ok(Self {
            src_dir: cli.src_dir.clone(),
            pattern,
            ordering,
            output,
            concat,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use super::Config;
    use crate::cli::Cli;
    use crate::error::VidcatError;
    use crate::ordering::{OrderDirection, OrderKey};
    use crate::output::OutputFormat;

    fn config(args: &[&str]) -> Result<Config, VidcatError> {
        let cli = Cli::try_parse_from(std::iter::once("vidcat").chain(args.iter().copied()))
            .expect("parse");
        Config::from_cli(&cli)
    }

    #[test]
    fn defaults_resolve() {
        let cfg = config(&[]).unwrap();
        assert!(cfg.pattern.is_none());
        assert_eq!(cfg.ordering.key, OrderKey::Name);
        assert_eq!(cfg.ordering.direction, OrderDirection::Ascending);
        assert_eq!(cfg.output, OutputFormat::Text);
        let concat = cfg.concat.unwrap();
        assert_eq!(concat.destination, PathBuf::from("out").join("concat.mp4"));
        assert_eq!(concat.tool, PathBuf::from("MP4Box"));
        assert!(!concat.dry_run);
    }

    #[test]
    fn list_only_has_no_concat_settings() {
        let cfg = config(&["--list-only"]).unwrap();
        assert!(cfg.concat.is_none());
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let err = config(&["--match-pattern", "(unclosed"]).unwrap_err();
        assert!(matches!(err, VidcatError::InvalidPattern(_)));
    }

    #[test]
    fn unknown_ordering_values_are_reported() {
        let err = config(&["--order-by", "size"]).unwrap_err();
        assert!(matches!(err, VidcatError::UnknownOrderKey(_)));

        let err = config(&["--order", "sideways"]).unwrap_err();
        assert!(matches!(err, VidcatError::UnknownOrderDirection(_)));
    }

    #[test]
    fn unknown_output_format_is_reported() {
        let err = config(&["--output", "yaml"]).unwrap_err();
        assert!(matches!(err, VidcatError::InvalidArg(_)));
    }
}
