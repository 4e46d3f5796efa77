use std::path::PathBuf;

/// Полная конфигурация сессии конвертации.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Путь к входному .sl2 файлу
    pub input_path: PathBuf,
    /// Путь к выходному .csv файлу
    pub output_path: PathBuf,
    /// Интервал прогресса: строка лога каждые N записей (0 = без прогресса)
    pub progress_every: u64,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("sonar.sl2"),
            output_path: PathBuf::from("sonar.csv"),
            progress_every: 10_000,
        }
    }
}
