//! Command-line argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{parse_mode, Config};
use crate::fs::CasingPolicy;

/// Guard-checked file operations.
#[derive(Parser, Debug)]
#[command(
    name = "fsutil",
    version,
    about = "Create, copy, rename and remove files with sanitized names",
    long_about = "Create, copy, rename and remove files and directories.\n\n\
                  Every path is sanitized and every precondition checked before \
                  the filesystem is touched."
)]
pub struct Args {
    /// Path to configuration file.
    #[arg(short, long, env = "FSUTIL_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Default casing policy for new names.
    #[arg(short, long, value_enum, global = true)]
    pub policy: Option<PolicyArg>,

    /// Mode for directories created along the way (octal, e.g. 755).
    #[arg(long = "dir-mode", global = true, value_parser = mode_arg)]
    pub dir_mode: Option<u32>,

    /// Only print errors.
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available operations.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a sanitized directory path.
    SanitizePath { input: String },

    /// Print a sanitized filename.
    SanitizeName { input: String },

    /// Create a directory and any missing parents.
    Mkdir {
        path: String,
        /// Directory mode (octal); defaults to the configured mode.
        #[arg(short, long, value_parser = mode_arg)]
        mode: Option<u32>,
    },

    /// Create an empty file.
    Touch { dir: String, name: String },

    /// Create COUNT empty files named NAME, NAME_1, NAME_2, ...
    Sequence {
        dir: String,
        name: String,
        #[arg(allow_negative_numbers = true)]
        count: i64,
    },

    /// Copy a file into a directory without overwriting.
    Copy { origin: String, destination: String },

    /// Copy every file of a directory into another.
    CopyAll { origin: String, destination: String },

    /// Overwrite a file's content with another file's content.
    CopyContent { source: String, destination: String },

    /// Remove an empty directory.
    Rmdir { path: String },

    /// Remove a file.
    Rm { path: String },

    /// Remove every file of a directory, then the directory.
    RmAll { path: String },

    /// Rename a file or directory.
    Rename { old: String, new: String },

    /// Rename every entry of a directory to NAME_1, NAME_2, ...
    RenameAll { dir: String, name: String },
}

/// CLI casing policy argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PolicyArg {
    /// Keep casing, strip whitespace.
    None,
    /// Lower-case.
    Lower,
    /// Upper-case.
    Upper,
    /// camelCase.
    Camel,
    /// PascalCase with lower-case extension.
    Pascal,
    /// Lower-case with today's date appended.
    Date,
}

/// Parse an octal mode argument.
fn mode_arg(input: &str) -> std::result::Result<u32, String> {
    parse_mode(input).map_err(|e| e.to_string())
}

impl From<PolicyArg> for CasingPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::None => CasingPolicy::None,
            PolicyArg::Lower => CasingPolicy::Lower,
            PolicyArg::Upper => CasingPolicy::Upper,
            PolicyArg::Camel => CasingPolicy::Camel,
            PolicyArg::Pascal => CasingPolicy::Pascal,
            PolicyArg::Date => CasingPolicy::Date,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(policy) = self.policy {
            config.defaults.policy = policy.into();
        }

        if let Some(mode) = self.dir_mode {
            config.defaults.dir_mode = mode;
        }

        if self.debug {
            config.logging.level = "debug".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sequence_command() {
        let args = Args::parse_from(["fsutil", "--policy", "camel", "sequence", "out", "my file.txt", "3"]);
        assert!(matches!(args.policy, Some(PolicyArg::Camel)));
        match args.command {
            Command::Sequence { dir, name, count } => {
                assert_eq!(dir, "out");
                assert_eq!(name, "my file.txt");
                assert_eq!(count, 3);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_negative_count_is_accepted_by_parser() {
        let args = Args::parse_from(["fsutil", "sequence", "out", "a.txt", "-2"]);
        assert!(matches!(args.command, Command::Sequence { count: -2, .. }));
    }

    #[test]
    fn test_merge_into_config() {
        let args = Args::parse_from(["fsutil", "--dir-mode", "750", "--debug", "rm", "x.txt", "-p", "upper"]);
        let mut config = Config::default();
        args.merge_into_config(&mut config);

        assert_eq!(config.defaults.dir_mode, 0o750);
        assert_eq!(config.defaults.policy, CasingPolicy::Upper);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_bad_mode_is_rejected_by_parser() {
        assert!(Args::try_parse_from(["fsutil", "--dir-mode", "9", "rmdir", "x"]).is_err());
        assert!(Args::try_parse_from(["fsutil", "mkdir", "x", "--mode", "0o99"]).is_err());

        let args = Args::try_parse_from(["fsutil", "mkdir", "x", "--mode", "0o700"]).unwrap();
        assert!(matches!(args.command, Command::Mkdir { mode: Some(0o700), .. }));
    }
}
