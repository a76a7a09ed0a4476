//! Length-unit conversions.
//!
//! All core types store feet. Host UIs that collect meters or inches convert
//! at the boundary with these constants.

/// Inches per meter.
pub const METERS_TO_INCHES: f32 = 39.3701;

/// Feet per meter.
pub const METERS_TO_FEET: f32 = 3.28084;

/// Inches per foot.
pub const FEET_TO_INCHES: f32 = 12.0;

/// Convert meters to feet.
pub fn meters_to_feet(meters: f32) -> f32 {
    meters * METERS_TO_FEET
}

/// Convert inches to feet.
pub fn inches_to_feet(inches: f32) -> f32 {
    inches / FEET_TO_INCHES
}
