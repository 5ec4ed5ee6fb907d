use bytes::BytesMut;
use pktwire_codec::{split_body, PacketReader, LEN_HEADER_SIZE, PACKET_ID_SIZE};

use crate::cmd::{resolve_input, InspectArgs};
use crate::exit::{codec_error, CliError, CliResult, DATA_INVALID, SUCCESS};
use crate::output::{payload_preview, print_packet, OutputFormat, PacketSummary};

pub fn run(args: InspectArgs, format: OutputFormat) -> CliResult<i32> {
    let input = resolve_input(args.hex.as_deref(), args.file.as_ref())?;

    let (body, declared_len) = if args.unframed {
        (bytes::Bytes::from(input), None)
    } else {
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
        let declared = body.len();
        (body, Some(declared))
    };

    let body_len = body.len();
    let mut reader = PacketReader::new(body.clone());
    let packet_id = reader
        .read_u16()
        .map_err(|err| codec_error("packet too short for a packet-ID", err))?;

    let payload = &body[PACKET_ID_SIZE..];
    let summary = PacketSummary {
        packet_id,
        declared_len,
        body_len,
        payload_len: payload.len(),
        payload: payload_preview(payload),
    };
    print_packet(&summary, payload, format);

    Ok(SUCCESS)
}
