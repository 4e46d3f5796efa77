use thiserror::Error;

/// Результат для операций SL2
pub type Sl2Result<T> = std::result::Result<T, Sl2Error>;

/// Типы ошибок формата SL2.
#[derive(Debug, Error)]
pub enum Sl2Error {
    /// Неправильный тег формата в заголовке файла (ожидается 2)
    #[error("Invalid format tag: found {found}, expected 2")]
    InvalidFormatTag { found: i16 },

    /// Некорректный тег размера блока (ожидается 1970 или 3200)
    #[error("Invalid block size tag: found {found}, expected 1970 or 3200")]
    InvalidBlockSize { found: i16 },

    /// Ошибки ввода/вывода (автоконвертируются из std::io::Error)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Sl2Error {
    /// `true`, если ошибка означает провал валидации заголовка файла.
    pub fn is_header_error(&self) -> bool {
        matches!(
            self,
            Sl2Error::InvalidFormatTag { .. } | Sl2Error::InvalidBlockSize { .. }
        )
    }
}
