use crate::ValidityFlags;

/// Одна запись сонара/GPS (фиксированная часть пакета, 144 байта).
///
/// Каждое поле читается по фиксированному смещению относительно начала
/// пакета. За фиксированной частью следует переменный хвост интенсивностей
/// сонара длиной `packet_size` байт; он не декодируется, только
/// пропускается при чтении.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SonarRecord {
    /// Канал сонара
    pub channel: i16,
    /// Длина переменного хвоста пакета (байты). Используется только для
    /// вычисления смещения следующего пакета.
    pub packet_size: i16,
    /// Порядковый номер кадра
    pub frame_index: i16,
    /// Верхняя граница диапазона (м)
    pub upper_limit: f32,
    /// Нижняя граница диапазона (м)
    pub lower_limit: f32,
    /// Частота излучателя (код)
    pub freq: i8,
    /// Глубина под датчиком (м)
    pub water_depth: f32,
    /// Глубина под килем (м)
    pub keel_depth: f32,
    /// Скорость по GPS (узлы)
    pub speed_gps: f32,
    /// Температура воды (°C)
    pub temperature: f32,
    /// Долгота в проекции устройства (easting, метры)
    pub lng_enc: i32,
    /// Широта в проекции устройства (northing, метры)
    pub lat_enc: i32,
    /// Скорость относительно воды (узлы)
    pub speed_water: f32,
    /// Курс движения (радианы)
    pub track: f32,
    /// Высота над уровнем моря (м)
    pub altitude: f32,
    /// Магнитный курс (радианы)
    pub heading: f32,
    /// Флаги валидности
    pub flags: ValidityFlags,
    /// Смещение времени от старта лога (мс)
    pub time_offset: i32,
}

impl Default for SonarRecord {
    fn default() -> Self {
        Self {
            channel: 0,
            packet_size: 0,
            frame_index: 0,
            upper_limit: 0.0,
            lower_limit: 0.0,
            freq: 0,
            water_depth: 0.0,
            keel_depth: 0.0,
            speed_gps: 0.0,
            temperature: 0.0,
            lng_enc: 0,
            lat_enc: 0,
            speed_water: 0.0,
            track: 0.0,
            altitude: 0.0,
            heading: 0.0,
            flags: ValidityFlags::default(),
            time_offset: 0,
        }
    }
}
