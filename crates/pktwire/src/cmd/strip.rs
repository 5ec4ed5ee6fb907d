use bytes::BytesMut;
use pktwire_codec::{split_body, LEN_HEADER_SIZE};

use crate::cmd::{frame::emit, resolve_input, StripArgs};
use crate::exit::{CliError, CliResult, DATA_INVALID, SUCCESS};
use crate::output::OutputFormat;

pub fn run(args: StripArgs, format: OutputFormat) -> CliResult<i32> {
    let input = resolve_input(args.hex.as_deref(), args.file.as_ref())?;
    let total = input.len();

    let mut wire = BytesMut::from(input.as_slice());
    let body = split_body(&mut wire).ok_or_else(|| {
        CliError::new(
            DATA_INVALID,
            format!("truncated packet: {total} bytes do not hold a complete header and body"),
        )
    })?;

    if !wire.is_empty() {
        return Err(CliError::new(
            DATA_INVALID,
            format!(
                "{} trailing bytes after the {}-byte packet",
                wire.len(),
                LEN_HEADER_SIZE + body.len()
            ),
        ));
    }

    emit(&body, args.out.as_deref(), format)?;
    Ok(SUCCESS)
}
