/// Заголовок SL2 файла (фиксированный размер 8 байт)
///
/// Оба тега — little-endian i16. Заголовок читается один раз
/// в начале декодирования и далее неизменен.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    /// Тег формата (валидное значение: 2)
    pub format: i16,
    /// Тег размера блока (валидные значения: 1970, 3200)
    pub block_size: i16,
}

impl FileHeader {
    pub fn new(
        format: i16,
        block_size: i16,
    ) -> Self {
        Self { format, block_size }
    }
}
