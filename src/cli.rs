//! Command-line surface of the dispatcher.
//!
//! Only `-v/--version` and `-h/--help` belong to us, and they are honored
//! anywhere on the command line up to a literal `--`, including inside a
//! short cluster that starts with one of them (`-vx`). Every other token,
//! including `--version=1` and options we have never heard of, is left for
//! superplate. When neither flag is present the whole argument list is
//! forwarded verbatim.

use clap::{CommandFactory, Parser};
use std::ffi::{OsStr, OsString};

#[derive(Parser, Debug)]
#[command(
    name = "create-refine-app",
    override_usage = "create-refine-app <command> [options]",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    #[arg(short = 'v', long, help = "Output the current version.")]
    pub version: bool,

    #[arg(short = 'h', long, help = "Output usage information.")]
    pub help: bool,
}

/// What a single run of the dispatcher should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Version,
    /// Run superplate with these user arguments (before the project flag).
    Delegate(Vec<OsString>),
}

impl Cli {
    pub fn into_invocation(self, args: Vec<OsString>) -> Invocation {
        if self.version {
            Invocation::Version
        } else if self.help {
            Invocation::Help
        } else {
            Invocation::Delegate(args)
        }
    }
}

/// Parse a full argument list, `argv[0]` included.
///
/// An invocation without any user arguments shows the help screen rather
/// than starting superplate with nothing but the project flag.
pub fn parse<I, T>(args: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let bin = args.next().unwrap_or_else(|| OsString::from("create-refine-app"));
    let user_args: Vec<OsString> = args.collect();
    if user_args.is_empty() {
        return Ok(Invocation::Help);
    }

    let builtin = builtin_flags(&user_args);
    let cli = Cli::try_parse_from(std::iter::once(bin).chain(builtin))?;
    Ok(cli.into_invocation(user_args))
}

/// Our own flags among `args`, each once and in short form.
fn builtin_flags(args: &[OsString]) -> Vec<OsString> {
    let mut flags = Vec::new();
    for arg in args.iter().map(OsString::as_os_str) {
        if arg == OsStr::new("--") {
            break;
        }
        let Some(arg) = arg.to_str() else {
            continue;
        };
        match arg {
            "--version" => flags.push('v'),
            "--help" => flags.push('h'),
            _ if arg.starts_with('-') && !arg.starts_with("--") => {
                // `-hvx` is `-h -v -x`; the expansion stops at the first
                // letter that is not ours, which goes to superplate.
                for c in arg[1..].chars() {
                    match c {
                        'v' | 'h' => flags.push(c),
                        _ => break,
                    }
                }
            }
            _ => {}
        }
    }
    flags.sort_unstable();
    flags.dedup();
    flags
        .into_iter()
        .map(|c| OsString::from(format!("-{c}")))
        .collect()
}

/// The help screen, as printed for `--help` and for a bare invocation.
pub fn render_help() -> String {
    Cli::command().render_help().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delegated(args: &[&str]) -> Invocation {
        Invocation::Delegate(args.iter().map(OsString::from).collect())
    }

    #[test]
    fn test_no_arguments_is_help() {
        assert_eq!(parse(["create-refine-app"]).unwrap(), Invocation::Help);
        assert_eq!(parse(Vec::<OsString>::new()).unwrap(), Invocation::Help);
    }

    #[test]
    fn test_version_flags() {
        assert_eq!(parse(["create-refine-app", "-v"]).unwrap(), Invocation::Version);
        assert_eq!(
            parse(["create-refine-app", "--version"]).unwrap(),
            Invocation::Version
        );
    }

    #[test]
    fn test_help_flags() {
        assert_eq!(parse(["create-refine-app", "-h"]).unwrap(), Invocation::Help);
        assert_eq!(parse(["create-refine-app", "--help"]).unwrap(), Invocation::Help);
    }

    #[test]
    fn test_version_wins_over_help() {
        assert_eq!(
            parse(["create-refine-app", "--help", "--version"]).unwrap(),
            Invocation::Version
        );
        assert_eq!(parse(["create-refine-app", "-hv"]).unwrap(), Invocation::Version);
    }

    #[test]
    fn test_positional_arguments_are_delegated() {
        assert_eq!(
            parse(["create-refine-app", "my-app"]).unwrap(),
            delegated(&["my-app"])
        );
    }

    #[test]
    fn test_unknown_options_are_delegated_in_order() {
        assert_eq!(
            parse(["create-refine-app", "foo", "--bar=baz"]).unwrap(),
            delegated(&["foo", "--bar=baz"])
        );
        assert_eq!(
            parse(["create-refine-app", "--lang=ts", "my-app", "-p", "x"]).unwrap(),
            delegated(&["--lang=ts", "my-app", "-p", "x"])
        );
    }

    #[test]
    fn test_builtin_flags_recognized_anywhere() {
        assert_eq!(
            parse(["create-refine-app", "my-app", "--version"]).unwrap(),
            Invocation::Version
        );
        assert_eq!(
            parse(["create-refine-app", "--lang=ts", "--help"]).unwrap(),
            Invocation::Help
        );
        assert_eq!(parse(["create-refine-app", "-x", "-v"]).unwrap(), Invocation::Version);
    }

    #[test]
    fn test_short_cluster_starting_with_builtin_flag() {
        assert_eq!(parse(["create-refine-app", "-vx"]).unwrap(), Invocation::Version);
        assert_eq!(parse(["create-refine-app", "-hx"]).unwrap(), Invocation::Help);
        assert_eq!(
            parse(["create-refine-app", "-xv"]).unwrap(),
            delegated(&["-xv"])
        );
    }

    #[test]
    fn test_builtin_flags_after_double_dash_are_forwarded() {
        assert_eq!(
            parse(["create-refine-app", "my-app", "--", "--help", "-v"]).unwrap(),
            delegated(&["my-app", "--", "--help", "-v"])
        );
    }

    #[test]
    fn test_builtin_flags_with_values_are_forwarded() {
        assert_eq!(
            parse(["create-refine-app", "--help=foo"]).unwrap(),
            delegated(&["--help=foo"])
        );
        assert_eq!(
            parse(["create-refine-app", "my-app", "--version=1"]).unwrap(),
            delegated(&["my-app", "--version=1"])
        );
    }

    #[test]
    fn test_help_screen_lists_builtin_flags() {
        let help = render_help();
        assert!(help.starts_with("Usage: create-refine-app <command> [options]"), "{help}");
        assert!(help.contains("-v, --version"), "{help}");
        assert!(help.contains("Output the current version."), "{help}");
        assert!(help.contains("-h, --help"), "{help}");
        assert!(help.contains("Output usage information."), "{help}");
    }
}
