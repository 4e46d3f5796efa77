/// Бит trackValid
pub const TRACK_VALID_BIT: u16 = 0;
/// Бит waterSpeedValid
pub const WATER_SPEED_VALID_BIT: u16 = 1;
/// Бит positionValid
pub const POSITION_VALID_BIT: u16 = 3;
/// Бит waterTempValid
pub const WATER_TEMP_VALID_BIT: u16 = 5;
/// Бит speedValid
pub const SPEED_VALID_BIT: u16 = 6;
/// Бит altitudeValid
pub const ALTITUDE_VALID_BIT: u16 = 14;
/// Бит headingValid
pub const HEADING_VALID_BIT: u16 = 15;

/// 16-битное слово флагов валидности записи.
///
/// Флаги — рекомендательные: декодер не обнуляет поля по ним, а лишь
/// передаёт их потребителю вместе с сырыми значениями. Биты 2, 4, 7–13
/// устройством не документированы и не интерпретируются; сырое слово
/// сохраняется целиком.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidityFlags {
    bits: u16,
}

impl ValidityFlags {
    pub fn from_bits(bits: u16) -> Self {
        Self { bits }
    }

    /// Сырое 16-битное слово (включая неинтерпретируемые биты).
    pub fn bits(&self) -> u16 {
        self.bits
    }

    fn test(
        &self,
        bit: u16,
    ) -> bool {
        self.bits & (1 << bit) != 0
    }

    /// Достоверен ли курс (track)
    pub fn track_valid(&self) -> bool {
        self.test(TRACK_VALID_BIT)
    }

    /// Достоверна ли скорость относительно воды
    pub fn water_speed_valid(&self) -> bool {
        self.test(WATER_SPEED_VALID_BIT)
    }

    /// Достоверна ли позиция GPS
    pub fn position_valid(&self) -> bool {
        self.test(POSITION_VALID_BIT)
    }

    /// Достоверна ли температура воды
    pub fn water_temp_valid(&self) -> bool {
        self.test(WATER_TEMP_VALID_BIT)
    }

    /// Достоверна ли скорость GPS
    pub fn speed_valid(&self) -> bool {
        self.test(SPEED_VALID_BIT)
    }

    /// Достоверна ли высота
    pub fn altitude_valid(&self) -> bool {
        self.test(ALTITUDE_VALID_BIT)
    }

    /// Достоверен ли магнитный курс (heading)
    pub fn heading_valid(&self) -> bool {
        self.test(HEADING_VALID_BIT)
    }
}
