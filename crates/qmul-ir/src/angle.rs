//! Recognition of angles of the form ±π/2^k.
//!
//! QFT circuits only use these angles, so drawers and emitters print them as
//! exact fractions instead of truncated decimals.

use std::f64::consts::PI;

const TOLERANCE: f64 = 1e-10;
const MAX_EXPONENT: u32 = 62;

/// An angle `sign · π / 2^exponent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PiFraction {
    pub negative: bool,
    /// `k` in `π/2^k`.
    pub exponent: u32,
}

impl PiFraction {
    /// Match `theta` against `±π/2^k` for `k` in `0..=62`.
    ///
    /// The match is relative to the candidate, so tiny angles are only
    /// recognised when they really are a power-of-two fraction of π.
    pub fn from_radians(theta: f64) -> Option<Self> {
        if !theta.is_finite() || theta == 0.0 {
            return None;
        }
        let ratio = PI / theta.abs();
        let exponent = ratio.log2().round();
        if !(0.0..=f64::from(MAX_EXPONENT)).contains(&exponent) {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let exponent = exponent as u32;
        let expected = PI / 2f64.powi(exponent as i32);
        if (theta.abs() - expected).abs() > TOLERANCE * expected {
            return None;
        }
        Some(Self {
            negative: theta < 0.0,
            exponent,
        })
    }

    /// The denominator `2^exponent`.
    pub fn denominator(&self) -> u64 {
        1u64 << self.exponent
    }

    /// Render with the given symbol for π, e.g. `π/4` or `-pi/8`.
    pub fn render(&self, pi: &str) -> String {
        let sign = if self.negative { "-" } else { "" };
        if self.exponent == 0 {
            format!("{sign}{pi}")
        } else {
            format!("{sign}{pi}/{}", self.denominator())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognizes_powers_of_two() {
        let f = PiFraction::from_radians(PI / 8.0).unwrap();
        assert_eq!(f.exponent, 3);
        assert!(!f.negative);
        assert_eq!(f.render("π"), "π/8");

        let f = PiFraction::from_radians(-PI).unwrap();
        assert_eq!(f.render("pi"), "-pi");
    }

    #[test]
    fn test_rejects_other_angles() {
        assert!(PiFraction::from_radians(0.0).is_none());
        assert!(PiFraction::from_radians(PI / 3.0).is_none());
        assert!(PiFraction::from_radians(2.0 * PI).is_none());
        assert!(PiFraction::from_radians(f64::NAN).is_none());
    }

    #[test]
    fn test_tiny_angles_need_relative_match() {
        assert!(PiFraction::from_radians(1.5e-11).is_none());
        assert!(PiFraction::from_radians(-3e-12).is_none());

        let f = PiFraction::from_radians(PI / 2f64.powi(40)).unwrap();
        assert_eq!(f.exponent, 40);
        let f = PiFraction::from_radians(-PI / 2f64.powi(62)).unwrap();
        assert_eq!(f.render("pi"), "-pi/4611686018427387904");
    }
}
