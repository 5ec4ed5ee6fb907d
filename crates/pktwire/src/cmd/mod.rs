use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::exit::{io_error, CliError, CliResult, USAGE};
use crate::output::OutputFormat;

pub mod frame;
pub mod inspect;
pub mod strip;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Frame a payload: prepend packet-ID and size header.
    Frame(FrameArgs),
    /// Strip the size header from a framed packet.
    Strip(StripArgs),
    /// Decode and summarize a packet.
    Inspect(InspectArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Frame(args) => frame::run(args, format),
        Command::Strip(args) => strip::run(args, format),
        Command::Inspect(args) => inspect::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct FrameArgs {
    /// Packet identifier (0-65535).
    pub packet_id: u16,
    /// Payload as a hex string.
    #[arg(long, value_name = "HEX", conflicts_with_all = ["data", "file"])]
    pub hex: Option<String>,
    /// Payload as UTF-8 text.
    #[arg(long, value_name = "TEXT", conflicts_with = "file")]
    pub data: Option<String>,
    /// Read the payload from a file.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
    /// Emit the body without the size header.
    #[arg(long)]
    pub unframed: bool,
    /// Write raw bytes to a file instead of hex to stdout.
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct StripArgs {
    /// Framed packet as a hex string.
    #[arg(long, value_name = "HEX", conflicts_with = "file")]
    pub hex: Option<String>,
    /// Read the framed packet from a file.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
    /// Write raw bytes to a file instead of hex to stdout.
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Packet as a hex string.
    #[arg(long, value_name = "HEX", conflicts_with = "file")]
    pub hex: Option<String>,
    /// Read the packet from a file.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
    /// Treat the input as an unframed body (size header already stripped).
    #[arg(long)]
    pub unframed: bool,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show build details.
    #[arg(long)]
    pub extended: bool,
}

/// Resolve `--hex`/`--file` input bytes shared by strip and inspect.
pub(crate) fn resolve_input(hex: Option<&str>, file: Option<&PathBuf>) -> CliResult<Vec<u8>> {
    if let Some(hex) = hex {
        return parse_hex(hex);
    }
    if let Some(path) = file {
        return std::fs::read(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err));
    }
    Err(CliError::new(USAGE, "one of --hex or --file is required"))
}

pub(crate) fn parse_hex(input: &str) -> CliResult<Vec<u8>> {
    let compact: String = input.split_whitespace().collect();
    hex::decode(&compact).map_err(|err| CliError::new(USAGE, format!("invalid hex input: {err}")))
}
