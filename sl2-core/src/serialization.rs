use std::io::{self, BufReader, BufWriter, Read, Write};

use sl2_types::{FileHeader, Sl2Result, SonarRecord};

use crate::format::{FileHeaderExt, SonarRecordExt, SL2_HEADER_SIZE, SL2_RECORD_FIXED_SIZE};

/// Потоковый писатель SL2 файлов.
///
/// Используется для синтетических логов и тестовых фикстур: сам формат
/// порождается устройством, но писатель позволяет собирать
/// детерминированные файлы байт в байт.
pub struct Sl2Writer<W: Write> {
    writer: BufWriter<W>,
    record_count: u64,
}

/// Потоковый читатель SL2 файлов.
///
/// Валидирует заголовок при открытии, затем отдаёт записи строго в
/// порядке файла. Чтение только вперёд: позиция каждого поля — это
/// абсолютное смещение внутри фиксированной части пакета, переменный
/// хвост пропускается без декодирования.
pub struct Sl2Reader<R: Read> {
    reader: BufReader<R>,
    header: FileHeader,
    stats: ReadStats,
    done: bool,
}

/// Статистика, накопленная [`Sl2Reader`] в процессе чтения.
#[derive(Debug, Default, Clone)]
pub struct ReadStats {
    /// Полностью прочитанных записей.
    pub records_ok: u64,
    /// Обработано байт после заголовка (фиксированные части + хвосты).
    pub bytes_processed: u64,
    /// Заявленный хвост последней записи вышел за конец файла.
    pub truncated_payload: bool,
    /// Чтение остановлено из-за отрицательного packet_size.
    pub stopped_on_bad_size: bool,
}

impl<W: Write> Sl2Writer<W> {
    /// Создаёт писатель, немедленно записывая 8-байтовый заголовок.
    pub fn new(
        inner: W,
        header: FileHeader,
    ) -> Sl2Result<Self> {
        let mut writer = BufWriter::new(inner);

        writer.write_all(&header.serialize())?;

        Ok(Self {
            writer,
            record_count: 0,
        })
    }

    /// Записывает одну запись: фиксированную часть и переменный хвост.
    ///
    /// `record.packet_size` должен совпадать с длиной `payload` — иначе
    /// смещение следующего пакета у читателя разойдётся с данными.
    pub fn write_record(
        &mut self,
        record: &SonarRecord,
        payload: &[u8],
    ) -> Sl2Result<()> {
        debug_assert_eq!(record.packet_size as usize, payload.len());

        self.writer.write_all(&record.serialize())?;
        self.writer.write_all(payload)?;
        self.record_count += 1;

        Ok(())
    }

    /// Завершает запись, сбрасывая буфер.
    pub fn finish(mut self) -> Sl2Result<()> {
        self.writer.flush()?;

        Ok(())
    }

    /// Количество записанных записей.
    pub fn record_count(&self) -> u64 {
        self.record_count
    }
}

impl<R: Read> Sl2Reader<R> {
    /// Создаёт читатель, читая и валидируя заголовок из `inner`.
    ///
    /// Ошибка валидации фатальна: декодирование не начинается.
    pub fn new(inner: R) -> Sl2Result<Self> {
        let mut reader = BufReader::new(inner);
        let mut hdr_buf = [0u8; SL2_HEADER_SIZE];

        reader.read_exact(&mut hdr_buf)?;

        let header = FileHeader::deserialize(&hdr_buf)?;

        Ok(Self {
            reader,
            header,
            stats: ReadStats::default(),
            done: false,
        })
    }

    /// Возвращает следующую запись или `None` на конце потока.
    ///
    /// Исчерпание источника посреди фиксированной части — не ошибка, а
    /// штатное завершение цикла; частично прочитанная запись не
    /// отдаётся никогда.
    pub fn next_record(&mut self) -> Option<Sl2Result<SonarRecord>> {
        if self.done {
            return None;
        }

        let mut buf = [0u8; SL2_RECORD_FIXED_SIZE];

        if let Err(e) = self.reader.read_exact(&mut buf) {
            self.done = true;

            if e.kind() == io::ErrorKind::UnexpectedEof {
                return None;
            }

            return Some(Err(e.into()));
        }

        let record = SonarRecord::deserialize(&buf);

        self.stats.records_ok += 1;
        self.stats.bytes_processed += SL2_RECORD_FIXED_SIZE as u64;

        if record.packet_size < 0 {
            // Отрицательная длина хвоста — повреждение; дальше границы
            // пакетов не восстановить, завершаем цикл
            self.stats.stopped_on_bad_size = true;
            self.done = true;

            return Some(Ok(record));
        }

        // Хвост интенсивностей сонара пропускается без декодирования
        let payload_len = record.packet_size as u64;

        match io::copy(&mut (&mut self.reader).take(payload_len), &mut io::sink()) {
            Ok(skipped) => {
                self.stats.bytes_processed += skipped;

                if skipped < payload_len {
                    self.stats.truncated_payload = true;
                    self.done = true;
                }
            }
            Err(e) => {
                self.done = true;

                return Some(Err(e.into()));
            }
        }

        Some(Ok(record))
    }

    /// Прочитанный и проверенный заголовок файла.
    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    /// Накопленная статистика чтения.
    pub fn stats(&self) -> &ReadStats {
        &self.stats
    }
}

impl<R: Read> Iterator for Sl2Reader<R> {
    type Item = Sl2Result<SonarRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record()
    }
}

/// Convenience: читает все записи из файла, собирая их в вектор.
pub fn read_all_records<R: Read>(reader: &mut Sl2Reader<R>) -> Sl2Result<Vec<SonarRecord>> {
    let mut records = Vec::new();

    while let Some(result) = reader.next_record() {
        records.push(result?);
    }

    Ok(records)
}
