//! fsutil - CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use fsutil::{
    cli::{Args, Command},
    config::{validate_config, Config},
    error::{exit_codes, Error, Result},
    fs::CasingPolicy,
    ops::FileOps,
    output::{print_error, print_info, print_paths},
    report::TracingSink,
};

/// What a finished command has to show.
enum Done {
    /// Plain value for stdout, printed even in quiet mode.
    Value(String),
    /// Paths touched by the command.
    Paths(&'static str, Vec<PathBuf>),
    /// A status line.
    Status(String),
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(exit_code_for(&e) as u8)
        }
    }
}

fn exit_code_for(e: &Error) -> i32 {
    match e {
        Error::Config(_) | Error::ConfigValidation { .. } | Error::TomlParse(_) => {
            exit_codes::CONFIG_ERROR
        }
        Error::BatchFailed { .. } => exit_codes::BATCH_PARTIAL_FAILURE,
        Error::OperationFailed { .. } | Error::Io(_) => exit_codes::OPERATION_FAILED,
        e if e.is_precondition() => exit_codes::PRECONDITION_FAILED,
        _ => exit_codes::UNEXPECTED_ERROR,
    }
}

/// Returns the exit code. Operation errors have already gone through the sink
/// and are echoed to stderr here; only setup errors come back as `Err`.
fn run() -> Result<i32> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration and merge CLI overrides
    let mut config = Config::resolve(args.config.as_deref())?;
    args.merge_into_config(&mut config);
    validate_config(&config)?;

    // Set up logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let ops = FileOps::from_config(&config, TracingSink);
    let policy = config.defaults.policy;

    match execute(&ops, args.command, policy) {
        Ok(done) => {
            show(done, args.quiet);
            Ok(exit_codes::SUCCESS)
        }
        Err(e) => {
            print_error(&e.to_string());
            Ok(exit_code_for(&e))
        }
    }
}

fn execute(ops: &FileOps, command: Command, policy: CasingPolicy) -> Result<Done> {
    let done = match command {
        Command::SanitizePath { input } => Done::Value(ops.sanitize_path(&input)),
        Command::SanitizeName { input } => Done::Value(ops.sanitize_filename(&input, policy)?),
        Command::Mkdir { path, mode } => {
            Done::Paths("Created", vec![ops.create_directory(&path, mode)?])
        }
        Command::Touch { dir, name } => {
            Done::Paths("Created", vec![ops.create_file(&dir, &name, policy)?])
        }
        Command::Sequence { dir, name, count } => {
            Done::Paths("Created", ops.create_sequence(&dir, &name, policy, count)?)
        }
        Command::Copy {
            origin,
            destination,
        } => Done::Paths("Copied to", vec![ops.copy_file(&origin, &destination)?]),
        Command::CopyAll {
            origin,
            destination,
        } => {
            let copied = ops.copy_all_files(&origin, &destination)?;
            Done::Status(format!("Copied {} files into {}", copied, destination))
        }
        Command::CopyContent {
            source,
            destination,
        } => {
            let bytes = ops.copy_file_content(&source, &destination)?;
            Done::Status(format!("Wrote {} bytes into {}", bytes, destination))
        }
        Command::Rmdir { path } => Done::Paths("Removed", vec![ops.remove_directory(&path)?]),
        Command::Rm { path } => Done::Paths("Removed", vec![ops.remove_file(&path)?]),
        Command::RmAll { path } => {
            let removed = ops.remove_all_and_directory(&path)?;
            Done::Status(format!("Removed {} files and {}", removed, path))
        }
        Command::Rename { old, new } => {
            Done::Paths("Renamed to", vec![ops.rename(&old, &new, policy)?])
        }
        Command::RenameAll { dir, name } => {
            Done::Paths("Renamed to", ops.rename_all_sequential(&dir, &name, policy)?)
        }
    };

    Ok(done)
}

fn show(done: Done, quiet: bool) {
    match done {
        Done::Value(value) => println!("{}", value),
        Done::Paths(verb, paths) if !quiet => print_paths(verb, &paths),
        Done::Status(message) if !quiet => print_info(&message),
        _ => {}
    }
}
