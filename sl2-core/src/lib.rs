//! Библиотека формата SL2
//!
//! Эталонная реализация декодера бинарных сонарных логов SL2
//! (эхолоты Lowrance): валидация заголовка, разбор пакетов по
//! фиксированным смещениям полей и обратная проекция координат.
//!
//! # Быстрый старт
//!
//! ```no_run
//! use std::fs::File;
//!
//! use sl2_core::serialization::Sl2Reader;
//! use sl2_core::row::OutputRow;
//!
//! let file = File::open("sonar.sl2")?;
//! let mut reader = Sl2Reader::new(file)?;
//!
//! while let Some(record) = reader.next_record() {
//!     let row = OutputRow::from_record(&record?);
//!     println!("{} {}", row.coord.lat, row.coord.lon);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod binary;
pub mod format;
pub mod projection;
pub mod row;
pub mod serialization;

pub use binary::*;
pub use format::*;
pub use projection::*;
pub use row::*;
pub use serialization::*;

/// Версия библиотеки.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
