use std::fs;
use std::io::Cursor;

use sl2_core::{
    serialization::{read_all_records, Sl2Reader, Sl2Writer},
    FileHeaderExt, OutputRow, SonarRecordExt, CSV_HEADER, SL2_FORMAT_TAG, SL2_HEADER_SIZE,
    SL2_RECORD_FIXED_SIZE,
};
use sl2_types::{FileHeader, SonarRecord, ValidityFlags};
use tempfile::NamedTempFile;

// ===========================================================================
// Helpers — детерминированные тест-данные
// ===========================================================================

fn deterministic_header() -> FileHeader {
    FileHeader::new(SL2_FORMAT_TAG, 3200)
}

/// Детерминированная запись с узнаваемыми значениями полей.
fn deterministic_record(
    frame_index: i16,
    packet_size: i16,
) -> SonarRecord {
    SonarRecord {
        channel: 0,
        packet_size,
        frame_index,
        upper_limit: 0.0,
        lower_limit: 29.2,
        freq: 8,
        water_depth: 4.8,
        keel_depth: 5.3,
        speed_gps: 3.1,
        temperature: 17.5,
        lng_enc: 738_865,
        lat_enc: 8_389_123,
        speed_water: 2.9,
        track: 0.5,
        altitude: 94.0,
        heading: 0.75,
        flags: ValidityFlags::from_bits(0b1000_0000_0110_1011),
        time_offset: 1_000 * i32::from(frame_index),
    }
}

/// Строит минимальный валидный файл: заголовок + 2 записи (Test Vector #1).
fn build_test_vector_1() -> Vec<u8> {
    let mut raw = Vec::new();
    raw.extend_from_slice(&deterministic_header().serialize());

    for i in 0..2i16 {
        let rec = deterministic_record(i, 64);
        raw.extend_from_slice(&rec.serialize());
        raw.extend_from_slice(&vec![i as u8; 64]);
    }
    raw
}

/// Строит файл, где хвост последней записи выходит за EOF (Test Vector #2).
fn build_test_vector_2() -> Vec<u8> {
    let mut raw = Vec::new();
    raw.extend_from_slice(&deterministic_header().serialize());
    raw.extend_from_slice(&deterministic_record(0, 32).serialize());
    raw.extend_from_slice(&[0u8; 32]);

    // Запись 2: заявлено 600 байт хвоста, в файле только 10
    raw.extend_from_slice(&deterministic_record(1, 600).serialize());
    raw.extend_from_slice(&[0u8; 10]);
    raw
}

// ===========================================================================
// Test Vector #1 — минимальный валидный файл
// ===========================================================================

#[test]
fn test_vector_1_byte_layout() {
    let bytes = build_test_vector_1();

    // Заголовок: format = 2 @0, blockSize = 3200 @4, оба LE
    assert_eq!(&bytes[0..2], &2i16.to_le_bytes(), "format tag");
    assert_eq!(&bytes[4..6], &3200i16.to_le_bytes(), "block size tag");

    // Первая запись начинается со смещения 8
    let base = SL2_HEADER_SIZE;
    assert_eq!(&bytes[base + 36..base + 38], &0i16.to_le_bytes(), "frameIndex");
    assert_eq!(&bytes[base + 34..base + 36], &64i16.to_le_bytes(), "packetSize");
    assert_eq!(
        &bytes[base + 108..base + 112],
        &738_865i32.to_le_bytes(),
        "lngEnc"
    );
    assert_eq!(
        &bytes[base + 112..base + 116],
        &8_389_123i32.to_le_bytes(),
        "latEnc"
    );

    // Вторая запись: смещение = 8 + 144 + 64
    let base2 = base + SL2_RECORD_FIXED_SIZE + 64;
    assert_eq!(
        &bytes[base2 + 36..base2 + 38],
        &1i16.to_le_bytes(),
        "frameIndex записи 2"
    );

    assert_eq!(bytes.len(), 8 + 2 * (144 + 64));
}

#[test]
fn test_vector_1_decodes_in_order() {
    let mut reader = Sl2Reader::new(Cursor::new(build_test_vector_1())).unwrap();
    let records = read_all_records(&mut reader).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].frame_index, 0);
    assert_eq!(records[1].frame_index, 1);
    assert_eq!(records[0].time_offset, 0);
    assert_eq!(records[1].time_offset, 1_000);

    for r in &records {
        assert_eq!(r.lng_enc, 738_865);
        assert_eq!(r.lat_enc, 8_389_123);
        assert!(r.flags.track_valid());
        assert!(r.flags.position_valid());
        assert!(!r.flags.altitude_valid());
        assert!(r.flags.heading_valid());
    }
}

#[test]
fn test_vector_1_rows_have_projected_coordinates() {
    let mut reader = Sl2Reader::new(Cursor::new(build_test_vector_1())).unwrap();
    let records = read_all_records(&mut reader).unwrap();
    let rows: Vec<OutputRow> = records.iter().map(OutputRow::from_record).collect();

    for row in &rows {
        // 738865 м восточнее / 8389123 м севернее нулевой точки проекции
        assert!((row.coord.lon - 6.659_67).abs() < 1e-3, "{}", row.coord.lon);
        assert!((row.coord.lat - 60.078_7).abs() < 1e-2, "{}", row.coord.lat);
    }

    let line = rows[0].to_string();
    assert_eq!(line.split(',').count(), CSV_HEADER.split(',').count());
}

// ===========================================================================
// Test Vector #2 — усечённый хвост последней записи
// ===========================================================================

#[test]
fn test_vector_2_truncated_tail() {
    let mut reader = Sl2Reader::new(Cursor::new(build_test_vector_2())).unwrap();
    let records = read_all_records(&mut reader).unwrap();

    // Обе записи прочитаны полностью (усечён только недекодируемый
    // хвост), частичных строк нет, ошибки нет
    assert_eq!(records.len(), 2);
    assert!(reader.stats().truncated_payload);
}

// ===========================================================================
// Ошибки заголовка
// ===========================================================================

#[test]
fn test_invalid_headers_fail_before_any_record() {
    for (format, block_size) in [(0i16, 3200i16), (1, 3200), (2, 0), (2, 1971), (-2, 1970)] {
        let mut raw = FileHeader::new(format, block_size).serialize().to_vec();

        // За невалидным заголовком лежит валидная запись — она не
        // должна быть прочитана
        raw.extend_from_slice(&deterministic_record(0, 0).serialize());

        let result = Sl2Reader::new(Cursor::new(raw));
        assert!(
            result.is_err(),
            "header ({format}, {block_size}) must be rejected"
        );
    }
}

// ===========================================================================
// Раунд-трип через файловую систему
// ===========================================================================

#[test]
fn test_on_disk_round_trip() {
    let tmp = NamedTempFile::new().unwrap();
    let n_records = 10i16;

    {
        let file = fs::File::create(tmp.path()).unwrap();
        let mut writer = Sl2Writer::new(file, deterministic_header()).unwrap();

        for i in 0..n_records {
            let rec = deterministic_record(i, 128);
            writer.write_record(&rec, &vec![0x5A; 128]).unwrap();
        }

        assert_eq!(writer.record_count(), n_records as u64);
        writer.finish().unwrap();
    }

    let file = fs::File::open(tmp.path()).unwrap();
    let mut reader = Sl2Reader::new(file).unwrap();
    let records = read_all_records(&mut reader).unwrap();

    assert_eq!(records.len(), n_records as usize);

    // frame_index строго в порядке файла
    for (i, r) in records.iter().enumerate() {
        assert_eq!(r.frame_index, i as i16);
    }

    assert_eq!(
        reader.stats().bytes_processed,
        n_records as u64 * (144 + 128)
    );
}
