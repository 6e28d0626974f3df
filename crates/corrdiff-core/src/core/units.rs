//! Unit conversions and equipartition reference values.
//!
//! Internal units: Å for distance, fs for time, Å/fs for velocity.

/// Molar gas constant in J/(mol·K).
pub const GAS_CONSTANT: f64 = 8.314;
pub const JOULES_PER_KCAL: f64 = 4184.0;
/// 1 Å²/fs = 1e-16 cm² / 1e-15 s.
pub const ANGSTROM2_PER_FS_TO_CM2_PER_S: f64 = 0.1;
/// 1 m/s = 1e-5 Å/fs, squared.
const M2_PER_S2_TO_ANGSTROM2_PER_FS2: f64 = 1e-10;

pub const REFERENCE_TEMPERATURE: f64 = 298.15; // K
pub const REFERENCE_FORCE_CONSTANT: f64 = 10.0; // kcal/(mol·Å²)
pub const REFERENCE_MOLAR_MASS: f64 = 18.01; // g/mol

#[inline]
pub fn diffusion_to_cm2_per_s(d_angstrom2_per_fs: f64) -> f64 {
    d_angstrom2_per_fs * ANGSTROM2_PER_FS_TO_CM2_PER_S
}

/// Analytical variances of a harmonically restrained coordinate at thermal equilibrium.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquipartitionVariances {
    /// `RT / k` in Å².
    pub position: f64,
    /// `RT / M` in (Å/fs)².
    pub velocity: f64,
}

/// Equipartition variances for a restraint of `force_constant` kcal/(mol·Å²) acting
/// on a coordinate of molar mass `molar_mass` g/mol at `temperature` K.
pub fn equipartition_variances(
    temperature: f64,
    force_constant: f64,
    molar_mass: f64,
) -> EquipartitionVariances {
    let rt = GAS_CONSTANT * temperature;
    EquipartitionVariances {
        position: rt / (force_constant * JOULES_PER_KCAL),
        velocity: rt / (molar_mass / 1000.0) * M2_PER_S2_TO_ANGSTROM2_PER_FS2,
    }
}

/// Equipartition variances of the reference system: a water-sized coordinate
/// restrained by 10 kcal/(mol·Å²) at 298.15 K.
pub fn reference_variances() -> EquipartitionVariances {
    equipartition_variances(
        REFERENCE_TEMPERATURE,
        REFERENCE_FORCE_CONSTANT,
        REFERENCE_MOLAR_MASS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relative_eq(a: f64, b: f64) -> bool {
        ((a - b) / b).abs() < 1e-12
    }

    #[test]
    fn reference_position_variance_matches_rt_over_k() {
        let v = reference_variances();
        assert!(relative_eq(v.position, 8.314 * 298.15 / 41840.0));
    }

    #[test]
    fn reference_velocity_variance_is_in_angstrom_per_fs() {
        let v = reference_variances();
        assert!(relative_eq(v.velocity, 8.314 * 298.15 / 0.01801 * 1e-10));
    }

    #[test]
    fn diffusion_conversion_to_cgs() {
        assert!(relative_eq(diffusion_to_cm2_per_s(2.5), 0.25));
    }
}
