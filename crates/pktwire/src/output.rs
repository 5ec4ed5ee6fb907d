use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

/// One decoded packet, as far as the codec can see without a schema.
#[derive(Serialize)]
pub struct PacketSummary {
    pub packet_id: u16,
    /// Size-header value, when the input carried one.
    pub declared_len: Option<usize>,
    /// Actual body length (packet-ID + payload).
    pub body_len: usize,
    pub payload_len: usize,
    pub payload: String,
}

pub fn print_packet(summary: &PacketSummary, raw_payload: &[u8], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(summary).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["PACKET-ID", "DECLARED", "BODY", "PAYLOAD"])
                .add_row(vec![
                    summary.packet_id.to_string(),
                    summary
                        .declared_len
                        .map_or_else(|| "-".to_string(), |len| len.to_string()),
                    summary.body_len.to_string(),
                    summary.payload.clone(),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "packet_id={} declared={} body={} payload={}",
                summary.packet_id,
                summary
                    .declared_len
                    .map_or_else(|| "-".to_string(), |len| len.to_string()),
                summary.body_len,
                summary.payload
            );
        }
        OutputFormat::Raw => {
            print_raw(raw_payload);
        }
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

pub fn payload_preview(payload: &[u8]) -> String {
    match std::str::from_utf8(payload) {
        Ok(text) if text.chars().all(|c| !c.is_control() || c.is_whitespace()) => text.to_string(),
        _ => format!("0x{}", hex::encode(payload)),
    }
}
