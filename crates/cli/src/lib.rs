#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the `adsec` command-line front-end. It reads an encoded
//! security descriptor, ACL or ACE from a file or standard input, decodes it
//! with the [`security`] crate and prints either a line-oriented text summary
//! or JSON.
//!
//! # Design
//!
//! [`run`] accepts an iterator of arguments together with handles for standard
//! output and error and returns the process exit code, so the binary's `main`
//! stays a one-liner and tests can drive the whole front-end in-process.
//! Arguments are parsed with a [`clap`](https://docs.rs/clap/) builder command.
//! `-v` flags feed [`logging::VerbosityConfig`]; `RUST_LOG` overrides it.
//!
//! # Exit codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | [`EXIT_OK`] | The input decoded successfully. |
//! | [`EXIT_USAGE`] | The command line was invalid. |
//! | [`EXIT_IO`] | The input could not be read or the output could not be written. |
//! | [`EXIT_DECODE`] | The input is not valid base64 or not a valid structure. |
//!
//! # Examples
//!
//! ```
//! use cli::run;
//!
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = run(["adsec", "--version"], &mut stdout, &mut stderr);
//!
//! assert_eq!(exit_code, 0);
//! assert!(!stdout.is_empty());
//! assert!(stderr.is_empty());
//! ```

mod command;
mod error;
mod render;

#[cfg(test)]
mod tests;

use std::ffi::OsString;
use std::fs;
use std::io::{self, Read, Write};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use clap::error::ErrorKind;
use logging::VerbosityConfig;
use security::{Ace, Acl, SecurityDescriptor};

use command::{ParsedArgs, StructureKind, parse_args};
use error::CliError;

/// The input decoded successfully.
pub const EXIT_OK: i32 = 0;

/// The command line was invalid.
pub const EXIT_USAGE: i32 = 1;

/// Reading the input or writing the output failed.
pub const EXIT_IO: i32 = 2;

/// The input was not a valid encoded structure.
pub const EXIT_DECODE: i32 = 3;

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Runs the CLI, reading `-` from the process's standard input.
///
/// Returns the exit code the process should terminate with.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    run_with_input(arguments, &mut io::stdin().lock(), stdout, stderr)
}

/// Runs the CLI with an explicit reader standing in for standard input.
pub fn run_with_input<I, S, In, Out, Err>(
    arguments: I,
    stdin: &mut In,
    stdout: &mut Out,
    stderr: &mut Err,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    In: Read,
    Out: Write,
    Err: Write,
{
    let parsed = match parse_args(arguments) {
        Ok(parsed) => parsed,
        Err(error) => return report_parse_error(&error, stdout, stderr),
    };

    // A subscriber may already be installed when run more than once in-process.
    let _ = logging::init_tracing(VerbosityConfig::from_verbose_level(parsed.verbose));

    match execute(&parsed, stdin, stdout) {
        Ok(()) => EXIT_OK,
        Err(error) => {
            let _ = writeln!(stderr, "{}: {error}", command::PROGRAM_NAME);
            error.exit_code()
        }
    }
}

/// Converts a status returned by [`run`] into a process exit code.
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(clamped as u8)
}

fn report_parse_error<Out: Write, Err: Write>(
    error: &clap::Error,
    stdout: &mut Out,
    stderr: &mut Err,
) -> i32 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = write!(stdout, "{error}");
            EXIT_OK
        }
        _ => {
            let _ = write!(stderr, "{error}");
            EXIT_USAGE
        }
    }
}

fn execute<In: Read, Out: Write>(
    parsed: &ParsedArgs,
    stdin: &mut In,
    stdout: &mut Out,
) -> Result<(), CliError> {
    let raw = read_input(parsed, stdin)?;
    let bytes = if parsed.base64 {
        decode_base64(&raw)?
    } else {
        raw
    };

    match parsed.kind {
        StructureKind::Descriptor => {
            let sd = SecurityDescriptor::decode_with_options(&bytes, parsed.options)?;
            if parsed.json {
                write_json(stdout, &sd)
            } else {
                render::write_descriptor(stdout, &sd).map_err(CliError::from)
            }
        }
        StructureKind::Acl => {
            let acl = Acl::decode_with_options(&bytes, parsed.options)?;
            if parsed.json {
                write_json(stdout, &acl)
            } else {
                render::write_acl(stdout, "acl", &acl).map_err(CliError::from)
            }
        }
        StructureKind::Ace => {
            let ace = Ace::decode_with_options(&bytes, parsed.options)?;
            if parsed.json {
                write_json(stdout, &ace)
            } else {
                render::write_ace(stdout, 0, &ace).map_err(CliError::from)
            }
        }
    }
}

fn read_input<In: Read>(parsed: &ParsedArgs, stdin: &mut In) -> Result<Vec<u8>, CliError> {
    let result = if parsed.reads_stdin() {
        let mut buffer = Vec::new();
        stdin.read_to_end(&mut buffer).map(|_| buffer)
    } else {
        fs::read(&parsed.input)
    };
    result.map_err(|source| CliError::Read {
        path: parsed.input.clone(),
        source,
    })
}

/// Decodes base64 text, ignoring any ASCII whitespace such as LDIF line folds.
fn decode_base64(text: &[u8]) -> Result<Vec<u8>, CliError> {
    let compact: Vec<u8> = text
        .iter()
        .copied()
        .filter(|byte| !byte.is_ascii_whitespace())
        .collect();
    Ok(STANDARD.decode(compact)?)
}

fn write_json<Out: Write, T: serde::Serialize>(stdout: &mut Out, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
