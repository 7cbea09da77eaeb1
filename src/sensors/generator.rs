use std::ops::RangeInclusive;

use rand::Rng;

use crate::db::models::NewReading;

/// Degrees Celsius.
pub const TEMPERATURE_RANGE: RangeInclusive<f64> = 20.0..=30.0;
/// Relative humidity percentage.
pub const HUMIDITY_RANGE: RangeInclusive<f64> = 40.0..=60.0;

/// One synthetic reading stamped with the current UTC time.
pub fn generate() -> NewReading {
    generate_with(&mut rand::thread_rng())
}

/// Like [`generate`], drawing from `rng`.
///
/// Temperature and humidity are independent uniform draws over their closed
/// ranges, each rounded to 2 decimal places.
pub fn generate_with<R: Rng>(rng: &mut R) -> NewReading {
    let temperature = round2(rng.gen_range(TEMPERATURE_RANGE));
    let humidity = round2(rng.gen_range(HUMIDITY_RANGE));
    NewReading::now(temperature, humidity)
}

/// Round to 2 decimal places, ties away from zero.
pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
