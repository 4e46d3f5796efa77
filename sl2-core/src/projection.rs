//! Обратная проекция координат устройства
//!
//! Эхолот хранит позицию как пару целых easting/northing в собственной
//! сферической проекции Меркатора, отсчитанной от полярного радиуса
//! Земли. Преобразование в градусы — чистая функция, тотальная на всём
//! диапазоне i32 (R — ненулевая константа, exp/atan определены всюду).

use std::f64::consts::PI;

use sl2_types::GeoCoordinate;

/// Полярный радиус Земли (м) — константа проекции устройства
pub const POLAR_EARTH_RADIUS: f64 = 6_356_752.3142;

/// Долгота в градусах из easting (`lng_enc`).
pub fn longitude_deg(easting: i32) -> f64 {
    easting as f64 / POLAR_EARTH_RADIUS * (180.0 / PI)
}

/// Широта в градусах из northing (`lat_enc`).
pub fn latitude_deg(northing: i32) -> f64 {
    ((northing as f64 / POLAR_EARTH_RADIUS).exp().atan() * 2.0 - PI / 2.0) * (180.0 / PI)
}

/// Переводит сырую пару координат записи в широту/долготу.
pub fn decode_position(
    lng_enc: i32,
    lat_enc: i32,
) -> GeoCoordinate {
    GeoCoordinate::new(latitude_deg(lat_enc), longitude_deg(lng_enc))
}
