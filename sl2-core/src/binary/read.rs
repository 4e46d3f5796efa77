use byteorder::{ByteOrder, LittleEndian};

/// Читает i16 (LE) по абсолютному смещению в буфере.
pub fn read_i16_at(
    buf: &[u8],
    off: usize,
) -> i16 {
    LittleEndian::read_i16(&buf[off..off + 2])
}

/// Читает i32 (LE) по абсолютному смещению в буфере.
pub fn read_i32_at(
    buf: &[u8],
    off: usize,
) -> i32 {
    LittleEndian::read_i32(&buf[off..off + 4])
}

/// Читает u16 (LE) по абсолютному смещению в буфере.
pub fn read_u16_at(
    buf: &[u8],
    off: usize,
) -> u16 {
    LittleEndian::read_u16(&buf[off..off + 2])
}

/// Читает f32 (LE) по абсолютному смещению в буфере.
pub fn read_f32_at(
    buf: &[u8],
    off: usize,
) -> f32 {
    LittleEndian::read_f32(&buf[off..off + 4])
}

/// Читает i8 по абсолютному смещению в буфере.
pub fn read_i8_at(
    buf: &[u8],
    off: usize,
) -> i8 {
    buf[off] as i8
}

// Последовательные чтения: позиция поля в группе — это база группы плюс
// суммарная ширина предшествующих полей, без независимых смещений.

/// Читает f32 (LE) по курсору и сдвигает курсор.
pub fn read_f32_next(
    buf: &[u8],
    off: &mut usize,
) -> f32 {
    let v = read_f32_at(buf, *off);
    *off += 4;
    v
}

/// Читает i32 (LE) по курсору и сдвигает курсор.
pub fn read_i32_next(
    buf: &[u8],
    off: &mut usize,
) -> i32 {
    let v = read_i32_at(buf, *off);
    *off += 4;
    v
}

/// Читает u16 (LE) по курсору и сдвигает курсор.
pub fn read_u16_next(
    buf: &[u8],
    off: &mut usize,
) -> u16 {
    let v = read_u16_at(buf, *off);
    *off += 2;
    v
}
