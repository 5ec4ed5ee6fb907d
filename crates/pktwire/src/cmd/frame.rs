use pktwire_codec::{PacketWriter, MAX_BODY_SIZE, PACKET_ID_SIZE};

use crate::cmd::{parse_hex, FrameArgs};
use crate::exit::{io_error, CliError, CliResult, DATA_INVALID, SUCCESS};
use crate::output::{print_raw, OutputFormat};

pub fn run(args: FrameArgs, format: OutputFormat) -> CliResult<i32> {
    let payload = resolve_payload(&args)?;

    // The codec itself never validates outgoing size; the diagnostic
    // surface does, so a wrapped header can't sneak past unnoticed.
    if PACKET_ID_SIZE + payload.len() > MAX_BODY_SIZE {
        return Err(CliError::new(
            DATA_INVALID,
            format!(
                "body would be {} bytes; the size header caps at {MAX_BODY_SIZE}",
                PACKET_ID_SIZE + payload.len()
            ),
        ));
    }

    let mut writer = PacketWriter::new(args.packet_id);
    writer.write_bytes(&payload);

    let bytes = if args.unframed {
        writer.to_bytes()
    } else {
        writer.to_framed_bytes()
    };
    tracing::debug!(
        packet_id = args.packet_id,
        payload_len = payload.len(),
        framed = !args.unframed,
        "encoded packet"
    );

    emit(&bytes, args.out.as_deref(), format)?;
    Ok(SUCCESS)
}

fn resolve_payload(args: &FrameArgs) -> CliResult<Vec<u8>> {
    if let Some(hex) = &args.hex {
        return parse_hex(hex);
    }
    if let Some(data) = &args.data {
        return Ok(data.as_bytes().to_vec());
    }
    if let Some(path) = &args.file {
        return std::fs::read(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err));
    }
    Ok(Vec::new())
}

pub(crate) fn emit(bytes: &[u8], out: Option<&std::path::Path>, format: OutputFormat) -> CliResult<()> {
    if let Some(path) = out {
        return std::fs::write(path, bytes)
            .map_err(|err| io_error(&format!("failed writing {}", path.display()), err));
    }
    match format {
        OutputFormat::Raw => print_raw(bytes),
        _ => println!("{}", hex::encode(bytes)),
    }
    Ok(())
}
