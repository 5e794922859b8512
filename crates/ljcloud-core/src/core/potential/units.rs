/// Electronvolts per joule.
pub const JOULES_TO_ELECTRONVOLTS: f64 = 6.24150907446076e18;

/// Converts an energy from joules to electronvolts.
#[inline]
pub fn to_electronvolts(energy_joules: f64) -> f64 {
    energy_joules * JOULES_TO_ELECTRONVOLTS
}
