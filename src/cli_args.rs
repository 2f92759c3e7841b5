use std::ffi::OsString;

use clap::Parser;

/// Performs one arithmetic operation, remembering the answer for next time.
///
/// Run `calc help` for usage instructions.
#[derive(Parser)]
#[command(
    version,
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct CliArgs {
    /// `help`, `clear`, `ans`, or `<num1> <operator> <num2>`.
    #[arg(num_args = 0.., allow_hyphen_values = true)]
    args: Vec<OsString>,
}

impl CliArgs {
    pub fn from_env() -> Option<Self> {
        CliArgs::from_raw(std::env::args_os().collect())
    }

    /// Parses a raw argument list, including the program name.
    ///
    /// Returns `None` unless every argument after the program name ended up
    /// as a positional. clap drops a `--` separator, which would otherwise
    /// turn `calc -- 5 + 3` into a valid computation.
    pub fn from_raw(raw: Vec<OsString>) -> Option<Self> {
        let args = CliArgs::try_parse_from(&raw).ok()?;
        if args.args.len() + 1 != raw.len() {
            return None;
        }
        Some(args)
    }

    /// The positional arguments as text. Anything that isn't valid UTF-8
    /// is converted lossily, so it still gets reported as a bad operand.
    pub fn positionals(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }
}
