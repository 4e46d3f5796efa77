//! Пример: запись синтетического SL2-файла через Sl2Writer
//!
//! Демонстрирует:
//! - создание заголовка и Sl2Writer
//! - генерацию синтетической траектории (прямая линия на северо-восток)
//! - прямую проекцию Меркатора для кодирования координат

use std::fs::File;

use sl2_core::{Sl2Writer, POLAR_EARTH_RADIUS, SL2_FORMAT_TAG};
use sl2_types::{FileHeader, SonarRecord, ValidityFlags};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_path = "sl2-core/test_output.sl2";

    let file = File::create(output_path)?;
    let mut writer = Sl2Writer::new(file, FileHeader::new(SL2_FORMAT_TAG, 3200))?;

    // --- Синтетическая траектория: старт у Осло-фьорда, курс на СВ ---
    let lat0 = 59.9_f64.to_radians();
    let lon0 = 10.7_f64.to_radians();
    let num_records = 100;
    let payload_len: i16 = 256;

    for i in 0..num_records {
        let lat = lat0 + (i as f64) * 1e-6;
        let lon = lon0 + (i as f64) * 2e-6;

        // Прямая сферическая проекция Меркатора (обратная к декодеру)
        let northing = POLAR_EARTH_RADIUS * (std::f64::consts::FRAC_PI_4 + lat / 2.0).tan().ln();
        let easting = POLAR_EARTH_RADIUS * lon;

        let record = SonarRecord {
            channel: 0,
            packet_size: payload_len,
            frame_index: i as i16,
            upper_limit: 0.0,
            lower_limit: 19.6,
            freq: 8,
            water_depth: 12.0 + (i as f32 * 0.1).sin(),
            keel_depth: 12.4 + (i as f32 * 0.1).sin(),
            speed_gps: 4.2,
            temperature: 16.5,
            lng_enc: easting.round() as i32,
            lat_enc: northing.round() as i32,
            speed_water: 4.0,
            track: 0.78,
            altitude: 2.0,
            heading: 0.8,
            flags: ValidityFlags::from_bits(0b1100_0000_0110_1011),
            time_offset: i * 200,
        };

        writer.write_record(&record, &vec![0u8; payload_len as usize])?;
    }

    let total = writer.record_count();
    writer.finish()?;

    println!("✓ Записано: {output_path}");
    println!("  Records : {total}");

    Ok(())
}
