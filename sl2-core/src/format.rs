//! Спецификация бинарного формата SL2
//!
//! Файл: фиксированный 8-байтовый заголовок, затем последовательность
//! пакетов «фиксированная часть 144 байта + переменный хвост». Все
//! многобайтовые числа хранятся в порядке little-endian.

use sl2_types::{FileHeader, Sl2Error, Sl2Result, SonarRecord, ValidityFlags};

use crate::binary::{
    read_f32_at, read_f32_next, read_i8_at, read_i16_at, read_i32_at, read_i32_next,
    read_u16_next, write_f32_at, write_i16_at, write_i32_at, write_u16_at,
};

/// Размер фиксированного заголовка файла (8 байт)
pub const SL2_HEADER_SIZE: usize = 8;

/// Единственный валидный тег формата
pub const SL2_FORMAT_TAG: i16 = 2;

/// Валидные теги размера блока
pub const SL2_BLOCK_SIZES: [i16; 2] = [1970, 3200];

/// Абсолютное смещение тега формата в заголовке
pub const FORMAT_TAG_OFFSET: usize = 0;

/// Абсолютное смещение тега размера блока в заголовке
pub const BLOCK_SIZE_OFFSET: usize = 4;

/// Абсолютное смещение первого пакета
pub const FIRST_RECORD_OFFSET: usize = 8;

/// Размер фиксированной части пакета (144 байта).
///
/// Смещение следующего пакета = начало + 144 + packet_size.
pub const SL2_RECORD_FIXED_SIZE: usize = 144;

// Смещения полей относительно начала пакета
pub const CHANNEL_OFFSET: usize = 32;
pub const PACKET_SIZE_OFFSET: usize = 34;
pub const FRAME_INDEX_OFFSET: usize = 36;
/// База группы границ диапазона: upperLimit, сразу за ним lowerLimit
pub const LIMITS_OFFSET: usize = 40;
pub const FREQ_OFFSET: usize = 53;
/// База группы глубин: waterDepth, сразу за ним keelDepth
pub const DEPTH_OFFSET: usize = 64;
/// База навигационной группы: девять полей подряд, без зазоров
pub const NAV_GROUP_OFFSET: usize = 100;
pub const TIME_OFFSET_OFFSET: usize = 140;

/// Сериализация / десериализация заголовка SL2.
pub trait FileHeaderExt: Sized {
    fn serialize(&self) -> [u8; SL2_HEADER_SIZE];
    fn deserialize(buf: &[u8; SL2_HEADER_SIZE]) -> Sl2Result<Self>;
}

impl FileHeaderExt for FileHeader {
    fn serialize(&self) -> [u8; SL2_HEADER_SIZE] {
        let mut buf = [0u8; SL2_HEADER_SIZE];

        write_i16_at(&mut buf, FORMAT_TAG_OFFSET, self.format);
        write_i16_at(&mut buf, BLOCK_SIZE_OFFSET, self.block_size);
        buf
    }

    /// Валидирует оба тега; при успехе первый пакет начинается со
    /// смещения [`FIRST_RECORD_OFFSET`].
    fn deserialize(buf: &[u8; SL2_HEADER_SIZE]) -> Sl2Result<Self> {
        let format = read_i16_at(buf, FORMAT_TAG_OFFSET);

        if format != SL2_FORMAT_TAG {
            return Err(Sl2Error::InvalidFormatTag { found: format });
        }

        let block_size = read_i16_at(buf, BLOCK_SIZE_OFFSET);

        if !SL2_BLOCK_SIZES.contains(&block_size) {
            return Err(Sl2Error::InvalidBlockSize { found: block_size });
        }

        Ok(FileHeader { format, block_size })
    }
}

/// Сериализация / десериализация фиксированной части пакета.
pub trait SonarRecordExt: Sized {
    fn serialize(&self) -> [u8; SL2_RECORD_FIXED_SIZE];
    fn deserialize(buf: &[u8; SL2_RECORD_FIXED_SIZE]) -> Self;
}

impl SonarRecordExt for SonarRecord {
    fn serialize(&self) -> [u8; SL2_RECORD_FIXED_SIZE] {
        let mut buf = [0u8; SL2_RECORD_FIXED_SIZE];

        write_i16_at(&mut buf, CHANNEL_OFFSET, self.channel);
        write_i16_at(&mut buf, PACKET_SIZE_OFFSET, self.packet_size);
        write_i16_at(&mut buf, FRAME_INDEX_OFFSET, self.frame_index);
        write_f32_at(&mut buf, LIMITS_OFFSET, self.upper_limit);
        write_f32_at(&mut buf, LIMITS_OFFSET + 4, self.lower_limit);
        buf[FREQ_OFFSET] = self.freq as u8;
        write_f32_at(&mut buf, DEPTH_OFFSET, self.water_depth);
        write_f32_at(&mut buf, DEPTH_OFFSET + 4, self.keel_depth);

        let mut off = NAV_GROUP_OFFSET;
        write_f32_at(&mut buf, off, self.speed_gps);
        off += 4;
        write_f32_at(&mut buf, off, self.temperature);
        off += 4;
        write_i32_at(&mut buf, off, self.lng_enc);
        off += 4;
        write_i32_at(&mut buf, off, self.lat_enc);
        off += 4;
        write_f32_at(&mut buf, off, self.speed_water);
        off += 4;
        write_f32_at(&mut buf, off, self.track);
        off += 4;
        write_f32_at(&mut buf, off, self.altitude);
        off += 4;
        write_f32_at(&mut buf, off, self.heading);
        off += 4;
        write_u16_at(&mut buf, off, self.flags.bits());

        write_i32_at(&mut buf, TIME_OFFSET_OFFSET, self.time_offset);
        buf
    }

    /// Разбор фиксированной части пакета.
    ///
    /// Полевой валидации нет: NaN/Inf и неизвестные биты флагов
    /// пропускаются как есть.
    fn deserialize(buf: &[u8; SL2_RECORD_FIXED_SIZE]) -> Self {
        // Навигационная группа читается строго последовательно от базы:
        // смещение каждого поля — база + ширина предыдущих (100..132)
        let mut off = NAV_GROUP_OFFSET;
        let speed_gps = read_f32_next(buf, &mut off);
        let temperature = read_f32_next(buf, &mut off);
        let lng_enc = read_i32_next(buf, &mut off);
        let lat_enc = read_i32_next(buf, &mut off);
        let speed_water = read_f32_next(buf, &mut off);
        let track = read_f32_next(buf, &mut off);
        let altitude = read_f32_next(buf, &mut off);
        let heading = read_f32_next(buf, &mut off);
        let flags = ValidityFlags::from_bits(read_u16_next(buf, &mut off));

        SonarRecord {
            channel: read_i16_at(buf, CHANNEL_OFFSET),
            packet_size: read_i16_at(buf, PACKET_SIZE_OFFSET),
            frame_index: read_i16_at(buf, FRAME_INDEX_OFFSET),
            upper_limit: read_f32_at(buf, LIMITS_OFFSET),
            lower_limit: read_f32_at(buf, LIMITS_OFFSET + 4),
            freq: read_i8_at(buf, FREQ_OFFSET),
            water_depth: read_f32_at(buf, DEPTH_OFFSET),
            keel_depth: read_f32_at(buf, DEPTH_OFFSET + 4),
            speed_gps,
            temperature,
            lng_enc,
            lat_enc,
            speed_water,
            track,
            altitude,
            heading,
            flags,
            time_offset: read_i32_at(buf, TIME_OFFSET_OFFSET),
        }
    }
}
