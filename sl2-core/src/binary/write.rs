use byteorder::{ByteOrder, LittleEndian};

/// Пишет i16 (LE) по абсолютному смещению в буфере.
pub fn write_i16_at(
    buf: &mut [u8],
    off: usize,
    val: i16,
) {
    LittleEndian::write_i16(&mut buf[off..off + 2], val);
}

/// Пишет i32 (LE) по абсолютному смещению в буфере.
pub fn write_i32_at(
    buf: &mut [u8],
    off: usize,
    val: i32,
) {
    LittleEndian::write_i32(&mut buf[off..off + 4], val);
}

/// Пишет u16 (LE) по абсолютному смещению в буфере.
pub fn write_u16_at(
    buf: &mut [u8],
    off: usize,
    val: u16,
) {
    LittleEndian::write_u16(&mut buf[off..off + 2], val);
}

/// Пишет f32 (LE) по абсолютному смещению в буфере.
pub fn write_f32_at(
    buf: &mut [u8],
    off: usize,
    val: f32,
) {
    LittleEndian::write_f32(&mut buf[off..off + 4], val);
}
