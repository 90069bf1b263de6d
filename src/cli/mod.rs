use crate::constants;
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;

const AFTER_HELP: &str = "Example: diarium2dayone diarium-json/diarium-json.json dayone_import.json

This will create a Day One JSON file that you can manually zip for import.
Media folders are looked up in ./diarium-json/media when that directory exists.";

/// Convert a Diarium JSON export to Day One JSON format with media support
#[derive(Parser, Debug)]
#[clap(name = constants::APP_NAME, about = constants::APP_DESCRIPTION)]
#[clap(author, version, long_about = None, after_help = AFTER_HELP)]
pub struct CliArgs {
    /// Diarium JSON export to read
    #[clap(value_name = "DIARIUM_JSON")]
    pub input: PathBuf,

    /// Day One JSON file to write
    #[clap(value_name = "OUTPUT_JSON")]
    pub output: PathBuf,
}

impl CliArgs {
    /// Parse command-line arguments
    ///
    /// On misuse the usage error is followed by the example invocation and the
    /// import note, and the process exits with clap's error code.
    pub fn parse() -> Self {
        match CliArgs::try_parse_from(std::env::args()) {
            Ok(args) => args,
            Err(e) => {
                if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                    e.exit();
                }
                eprintln!("{}", usage_error_message(&e));
                std::process::exit(e.exit_code());
            }
        }
    }
}

/// Renders a parse error with the example invocation appended.
fn usage_error_message(error: &clap::Error) -> String {
    format!("{}\n{}", error.render(), AFTER_HELP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_positional_args() {
        let args = CliArgs::parse_from(vec!["diarium2dayone", "diarium.json", "dayone.json"]);
        assert_eq!(args.input, PathBuf::from("diarium.json"));
        assert_eq!(args.output, PathBuf::from("dayone.json"));
    }

    #[test]
    fn test_no_args_is_an_error() {
        let result = CliArgs::try_parse_from(vec!["diarium2dayone"]);
        assert_eq!(
            result.unwrap_err().kind(),
            ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn test_one_arg_is_an_error() {
        let result = CliArgs::try_parse_from(vec!["diarium2dayone", "diarium.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_usage_error_includes_example_and_note() {
        let error = CliArgs::try_parse_from(vec!["diarium2dayone", "diarium.json"]).unwrap_err();

        let message = usage_error_message(&error);

        assert!(message.contains("Usage"));
        assert!(message.contains("Example: diarium2dayone"));
        assert!(message.contains("manually zip for import"));
    }

    #[test]
    fn test_three_args_is_an_error() {
        let result =
            CliArgs::try_parse_from(vec!["diarium2dayone", "a.json", "b.json", "c.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_flag_is_an_error() {
        let result =
            CliArgs::try_parse_from(vec!["diarium2dayone", "--media", "x", "a.json", "b.json"]);
        assert!(result.is_err());
    }
}
