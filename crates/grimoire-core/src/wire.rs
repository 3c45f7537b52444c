//! Length-prefixed packet framing for the game client.
//!
//! Every client packet shares one frame: `0xAA 0x55` magic, a u16-LE length
//! counting bytes from just after the length field up to (not including) the
//! trailing footer, a u16-LE opcode, the payload, and a `0x55 0xAA` footer.

/// Leading magic of every client packet.
pub const PACKET_MAGIC: [u8; 2] = [0xAA, 0x55];

/// Trailing footer of every client packet.
pub const PACKET_FOOTER: [u8; 2] = [0x55, 0xAA];

/// Builds one framed packet. Payload bytes are appended sequentially; the
/// length field is computed when the frame is finished.
#[derive(Debug)]
pub struct PacketWriter {
    opcode: u16,
    body: Vec<u8>,
}

impl PacketWriter {
    pub fn new(opcode: u16) -> Self {
        Self {
            opcode,
            body: Vec::new(),
        }
    }

    pub fn write_u8(&mut self, value: u8) {
        self.body.push(value);
    }

    pub fn write_u16_le(&mut self, value: u16) {
        self.body.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_u32_le(&mut self, value: u32) {
        self.body.extend_from_slice(&value.to_le_bytes());
    }

    /// Append `count` zero bytes.
    pub fn write_zeros(&mut self, count: usize) {
        self.body.resize(self.body.len() + count, 0);
    }

    /// Close the frame: magic, length, opcode, body, footer.
    ///
    /// The length counts the opcode and body, not the footer.
    pub fn finish(self) -> Vec<u8> {
        let mut packet = Vec::with_capacity(self.body.len() + 8);
        packet.extend_from_slice(&PACKET_MAGIC);
        packet.extend_from_slice(&((2 + self.body.len()) as u16).to_le_bytes());
        packet.extend_from_slice(&self.opcode.to_le_bytes());
        packet.extend_from_slice(&self.body);
        packet.extend_from_slice(&PACKET_FOOTER);
        packet
    }
}
