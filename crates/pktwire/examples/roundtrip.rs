//! Encode a packet, frame it, then play the receiving side: strip the
//! size header and read the fields back in writer order.

use bytes::BytesMut;
use pktwire::codec::{split_body, PacketReader, PacketWriter};

fn main() {
    let mut writer = PacketWriter::new(10001);
    writer.write_string("Hello");
    writer.write_u32(12345);
    writer.write_bool(true);

    // What a transport would put on the stream.
    let mut wire = BytesMut::from(writer.to_framed_bytes().as_ref());
    println!("wire: {:02X?}", wire.as_ref());

    // Receiving side: delimit, then decode in the agreed order.
    let body = split_body(&mut wire).expect("complete packet");
    let mut reader = PacketReader::new(body);

    let packet_id = reader.read_u16().expect("packet id");
    let greeting = reader.read_string().expect("greeting");
    let number = reader.read_u32().expect("number");
    let flag = reader.read_bool().expect("flag");

    println!("packet_id={packet_id} greeting={greeting:?} number={number} flag={flag}");
    assert!(reader.is_complete());
}
