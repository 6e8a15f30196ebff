//! Command-line argument parsing and processing.
//!
//! This module handles parsing of command-line arguments and provides a clean
//! interface for the main application logic. It supports the standard help,
//! version, and debug flags while gracefully handling unknown options.

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Run the normal render pipeline with these settings
    Run {
        debug_enabled: bool,
        config_dir: Option<String>,
        times_file: Option<String>,
        output: Option<String>,
        emit_times: bool,
    },
    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to unknown arguments and exit
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// # Arguments
    /// * `args` - Iterator over command-line arguments (typically from
    ///   std::env::args().skip(1))
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut debug_enabled = false;
        let mut config_dir: Option<String> = None;
        let mut times_file: Option<String> = None;
        let mut output: Option<String> = None;
        let mut emit_times = false;

        let mut iter = args.into_iter();
        while let Some(arg) = iter.next() {
            match arg.as_ref() {
                "--help" | "-h" => return ParsedArgs { action: CliAction::ShowHelp },
                "--version" | "-V" => return ParsedArgs { action: CliAction::ShowVersion },
                "--debug" | "-d" => debug_enabled = true,
                "--emit-times" => emit_times = true,
                "--config" | "-c" => match iter.next() {
                    Some(dir) => config_dir = Some(dir.as_ref().to_string()),
                    None => return ParsedArgs { action: CliAction::ShowHelpDueToError },
                },
                "--times-file" | "-t" => match iter.next() {
                    Some(path) => times_file = Some(path.as_ref().to_string()),
                    None => return ParsedArgs { action: CliAction::ShowHelpDueToError },
                },
                "--output" | "-o" => match iter.next() {
                    Some(path) => output = Some(path.as_ref().to_string()),
                    None => return ParsedArgs { action: CliAction::ShowHelpDueToError },
                },
                _ => return ParsedArgs { action: CliAction::ShowHelpDueToError },
            }
        }

        ParsedArgs {
            action: CliAction::Run {
                debug_enabled,
                config_dir,
                times_file,
                output,
                emit_times,
            },
        }
    }

    /// Display help information for the application.
    pub fn display_help() {
        let version = env!("CARGO_PKG_VERSION");
        println!("sundialr v{version} - sun-clock infographic renderer");
        println!();
        println!("Usage: sundialr [OPTIONS]");
        println!();
        println!("Options:");
        println!("  -t, --times-file <PATH>  Sun/moon times record to render (JSON)");
        println!("  -o, --output <PATH>      Destination for the rendered JPEG");
        println!("  -c, --config <DIR>       Use configuration from a custom directory");
        println!("      --emit-times         Write the record back with derived twilight fields");
        println!("  -d, --debug              Enable detailed debug output");
        println!("  -h, --help               Display this help message");
        println!("  -V, --version            Display version information");
    }

    /// Display version information for the application.
    pub fn display_version() {
        let version = env!("CARGO_PKG_VERSION");
        println!("sundialr v{version}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_runs_with_defaults() {
        let parsed = ParsedArgs::parse(Vec::<String>::new());
        assert_eq!(
            parsed.action,
            CliAction::Run {
                debug_enabled: false,
                config_dir: None,
                times_file: None,
                output: None,
                emit_times: false,
            }
        );
    }

    #[test]
    fn parses_paths_and_flags() {
        let parsed = ParsedArgs::parse([
            "--debug",
            "--times-file",
            "suntimes.json",
            "--output",
            "/tmp/dial.jpg",
            "--emit-times",
        ]);
        assert_eq!(
            parsed.action,
            CliAction::Run {
                debug_enabled: true,
                config_dir: None,
                times_file: Some("suntimes.json".to_string()),
                output: Some("/tmp/dial.jpg".to_string()),
                emit_times: true,
            }
        );
    }

    #[test]
    fn help_and_version_short_circuit() {
        assert_eq!(ParsedArgs::parse(["--help"]).action, CliAction::ShowHelp);
        assert_eq!(
            ParsedArgs::parse(["--times-file", "x.json", "-V"]).action,
            CliAction::ShowVersion
        );
    }

    #[test]
    fn unknown_flags_show_help_with_error() {
        assert_eq!(
            ParsedArgs::parse(["--frobnicate"]).action,
            CliAction::ShowHelpDueToError
        );
    }

    #[test]
    fn missing_flag_values_show_help_with_error() {
        assert_eq!(
            ParsedArgs::parse(["--times-file"]).action,
            CliAction::ShowHelpDueToError
        );
        assert_eq!(
            ParsedArgs::parse(["--output"]).action,
            CliAction::ShowHelpDueToError
        );
    }
}
