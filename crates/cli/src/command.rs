//! Argument parsing.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, value_parser};
use security::{DecodeOptions, SizePolicy};

/// Program name used when the argument list is empty.
pub(crate) const PROGRAM_NAME: &str = "adsec";

/// Input path that selects standard input.
pub(crate) const STDIN_PATH: &str = "-";

/// Which structure the input bytes hold.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum StructureKind {
    /// A self-relative security descriptor.
    #[default]
    Descriptor,
    /// A bare ACL.
    Acl,
    /// A single ACE.
    Ace,
}

impl StructureKind {
    fn from_flag(value: &str) -> Self {
        match value {
            "acl" => Self::Acl,
            "ace" => Self::Ace,
            _ => Self::Descriptor,
        }
    }
}

/// Parsed command line.
#[derive(Clone, Debug)]
pub(crate) struct ParsedArgs {
    pub(crate) input: PathBuf,
    pub(crate) kind: StructureKind,
    pub(crate) base64: bool,
    pub(crate) json: bool,
    pub(crate) options: DecodeOptions,
    pub(crate) verbose: u8,
}

impl ParsedArgs {
    pub(crate) fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == STDIN_PATH
    }
}

/// Builds the `clap` command used for parsing.
pub(crate) fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Decode an Active Directory security descriptor, ACL or ACE")
        .arg(
            Arg::new("input")
                .value_name("INPUT")
                .help("File holding the encoded structure, or '-' for standard input.")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("kind")
                .long("kind")
                .short('k')
                .value_name("KIND")
                .help("Structure held by INPUT.")
                .value_parser(["sd", "acl", "ace"])
                .default_value("sd")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("base64")
                .long("base64")
                .help("Treat INPUT as base64 text, as found in LDIF exports.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the decoded structure as JSON.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Reject ACEs whose declared size disagrees with their content.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("check-acl-size")
                .long("check-acl-size")
                .help("Reject ACLs whose entries run past the declared ACL size.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase diagnostic output on standard error (repeatable).")
                .action(ArgAction::Count),
        )
}

/// Parses command-line arguments into a [`ParsedArgs`] structure.
pub(crate) fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();
    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    let input = matches
        .remove_one::<PathBuf>("input")
        .unwrap_or_else(|| PathBuf::from(STDIN_PATH));
    let kind = matches
        .get_one::<String>("kind")
        .map_or_else(StructureKind::default, |value| StructureKind::from_flag(value));

    let size_policy = if matches.get_flag("strict") {
        SizePolicy::Strict
    } else {
        SizePolicy::Trust
    };
    let options = DecodeOptions::new()
        .with_size_policy(size_policy)
        .with_acl_size_check(matches.get_flag("check-acl-size"));

    Ok(ParsedArgs {
        input,
        kind,
        base64: matches.get_flag("base64"),
        json: matches.get_flag("json"),
        options,
        verbose: matches.get_count("verbose"),
    })
}
