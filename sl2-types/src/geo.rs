/// Географическая координата в градусах.
///
/// В файле не хранится — вычисляется для каждой записи из `lng_enc` /
/// `lat_enc` обратной сферической проекцией Меркатора.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoCoordinate {
    /// Широта, градусы (положительная — север)
    pub lat: f64,
    /// Долгота, градусы (положительная — восток)
    pub lon: f64,
}

impl GeoCoordinate {
    pub fn new(
        lat: f64,
        lon: f64,
    ) -> Self {
        Self { lat, lon }
    }
}
