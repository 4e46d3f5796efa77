use std::{
    fs::File,
    io::{BufWriter, Write},
};

use log::{debug, info, warn};
use sl2_core::{row::OutputRow, serialization::Sl2Reader, CSV_HEADER};

use crate::{ConvertConfig, ConvertResult};

/// Итог одной сессии конвертации.
#[derive(Debug, Default, Clone)]
pub struct ConvertSummary {
    /// Строк CSV записано (без строки заголовка).
    pub rows: u64,
    /// Байт входного файла обработано после заголовка.
    pub bytes_processed: u64,
    /// Хвост последней записи был усечён.
    pub truncated_payload: bool,
    /// Чтение остановлено на отрицательном packet_size.
    pub stopped_on_bad_size: bool,
}

/// Конвертирует один .sl2 файл в CSV.
///
/// Строго однопроходный последовательный конвейер: заголовок читается
/// один раз, затем записи декодируются и выводятся в порядке файла.
pub fn run(config: &ConvertConfig) -> ConvertResult<ConvertSummary> {
    info!("Input file : {:?}", config.input_path);
    info!("Output file: {:?}", config.output_path);

    let input = File::open(&config.input_path)?;
    let mut reader = Sl2Reader::new(input)?;

    debug!(
        "Header ok: format={}, blockSize={}",
        reader.header().format,
        reader.header().block_size
    );

    let output = File::create(&config.output_path)?;
    let mut csv = BufWriter::new(output);

    writeln!(csv, "{CSV_HEADER}")?;

    let mut rows: u64 = 0;

    while let Some(result) = reader.next_record() {
        let record = result?;
        let row = OutputRow::from_record(&record);

        writeln!(csv, "{row}")?;
        rows += 1;

        if config.progress_every > 0 && rows % config.progress_every == 0 {
            info!("{rows} records converted...");
        }
    }

    csv.flush()?;

    let stats = reader.stats();

    if stats.truncated_payload {
        warn!("Input ended inside the last record's sonar payload");
    }

    if stats.stopped_on_bad_size {
        warn!("Stopped on a negative packet size; trailing data ignored");
    }

    Ok(ConvertSummary {
        rows,
        bytes_processed: stats.bytes_processed,
        truncated_payload: stats.truncated_payload,
        stopped_on_bad_size: stats.stopped_on_bad_size,
    })
}
