//! Пример: чтение SL2-файла через Sl2Reader
//!
//! Демонстрирует:
//! - открытие файла и валидацию заголовка через Sl2Reader
//! - итерацию записей с обратной проекцией координат
//! - итоговую статистику чтения

use std::fs::File;

use sl2_core::{read_all_records, OutputRow, Sl2Reader};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input_path = "sl2-core/test_output.sl2";

    // --- Sl2Reader валидирует заголовок при открытии ---
    let file = File::open(input_path)?;
    let mut reader = match Sl2Reader::new(file) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("✗ Header validation failed: {e}");
            return Err(Box::new(e));
        }
    };

    let h = reader.header();
    println!("✓ Header validated");
    println!("  Format tag : {}", h.format);
    println!("  Block size : {}", h.block_size);

    // --- Читаем все записи ---
    let records = read_all_records(&mut reader)?;

    println!("\n✓ Read complete");
    println!("  Records ok      : {}", reader.stats().records_ok);
    println!("  Bytes processed : {}", reader.stats().bytes_processed);

    if reader.stats().truncated_payload {
        println!("  ⚠ last payload truncated");
    }

    // --- Показываем первые 3 записи ---
    println!("\nFirst records:");
    for (i, record) in records.iter().take(3).enumerate() {
        let row = OutputRow::from_record(record);
        println!(
            "  [{i}] lat={:.6} lon={:.6} depth={}m frame={}",
            row.coord.lat, row.coord.lon, record.water_depth, record.frame_index
        );
    }

    Ok(())
}
