use thiserror::Error;

pub type ConvertResult<T> = std::result::Result<T, ConvertError>;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// Ошибка формата SL2 (включая провал валидации заголовка)
    #[error("SL2 error: {0}")]
    Sl2(#[from] sl2_types::Sl2Error),

    /// Ошибка чтения/записи файлов
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    /// `true`, если причина — невалидный заголовок входного файла.
    pub fn is_header_error(&self) -> bool {
        matches!(self, ConvertError::Sl2(e) if e.is_header_error())
    }
}
