//! Табличный контракт вывода
//!
//! Одна строка CSV на каждый декодированный пакет, 22 колонки в
//! фиксированном порядке. Числа с плавающей точкой печатаются с 17
//! значащими цифрами (стиль `%.17g`), булевы флаги — как 0/1.

use std::fmt;

use sl2_types::{GeoCoordinate, SonarRecord};

use crate::projection::decode_position;

/// Строка заголовка CSV (22 колонки).
pub const CSV_HEADER: &str = "lat,long,waterDepth,speedGps,temperature,altitude,heading,\
channel,frameIndex,upperLimit,lowerLimit,freq,keelDepth,speedWater,track,\
trackValid,waterSpeedValid,positionValid,waterTempValid,speedValid,altitudeValid,headingValid";

/// Полный набор декодированных и производных полей одного пакета.
///
/// Неизменяема после построения; единица передачи потребителю.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutputRow {
    pub record: SonarRecord,
    pub coord: GeoCoordinate,
}

impl OutputRow {
    /// Строит строку вывода, применяя обратную проекцию координат.
    pub fn from_record(record: &SonarRecord) -> Self {
        Self {
            record: *record,
            coord: decode_position(record.lng_enc, record.lat_enc),
        }
    }
}

impl fmt::Display for OutputRow {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let r = &self.record;
        let fl = &r.flags;

        write!(
            f,
            "{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{}",
            fmt_g17(self.coord.lat),
            fmt_g17(self.coord.lon),
            fmt_g17(r.water_depth as f64),
            fmt_g17(r.speed_gps as f64),
            fmt_g17(r.temperature as f64),
            fmt_g17(r.altitude as f64),
            fmt_g17(r.heading as f64),
            r.channel,
            r.frame_index,
            fmt_g17(r.upper_limit as f64),
            fmt_g17(r.lower_limit as f64),
            r.freq,
            fmt_g17(r.keel_depth as f64),
            fmt_g17(r.speed_water as f64),
            fmt_g17(r.track as f64),
            u8::from(fl.track_valid()),
            u8::from(fl.water_speed_valid()),
            u8::from(fl.position_valid()),
            u8::from(fl.water_temp_valid()),
            u8::from(fl.speed_valid()),
            u8::from(fl.altitude_valid()),
            u8::from(fl.heading_valid()),
        )
    }
}

/// Форматирует f64 с 17 значащими цифрами в стиле `%.17g`.
///
/// Для десятичного порядка в [-4, 17) — фиксированная запись, иначе
/// экспоненциальная; хвостовые нули отбрасываются.
pub fn fmt_g17(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v < 0.0 { "-inf" } else { "inf" }.to_string();
    }

    // Сначала экспоненциальная запись с 16 знаками после точки: из неё
    // берём порядок уже после округления (округление может его сдвинуть)
    let sci = format!("{:.16e}", v);
    let (mantissa, exp) = sci.split_once('e').expect("exponential format");
    let exp: i32 = exp.parse().expect("exponent is an integer");

    if !(-4..17).contains(&exp) {
        let m = mantissa.trim_end_matches('0').trim_end_matches('.');
        format!("{m}e{exp:+03}")
    } else {
        // 17 значащих цифр в фиксированной записи: 16 - порядок знаков
        // после точки
        let decimals = (16 - exp).max(0) as usize;
        let fixed = format!("{:.*}", decimals, v);

        if fixed.contains('.') {
            fixed
                .trim_end_matches('0')
                .trim_end_matches('.')
                .to_string()
        } else {
            fixed
        }
    }
}
