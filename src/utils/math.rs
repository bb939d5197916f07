//! # Game Mathematics
//!
//! Randomized scaling helpers shared by combat strategies and room behaviors.

use rand::rngs::StdRng;
use rand::Rng;

/// Draws a multiplier uniformly from `[min, max)`.
///
/// # Examples
///
/// ```
/// use labyrinth::utils::math::roll_factor;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let factor = roll_factor(&mut rng, 0.8, 1.2);
/// assert!((0.8..1.2).contains(&factor));
/// ```
pub fn roll_factor(rng: &mut StdRng, min: f64, max: f64) -> f64 {
    min + rng.gen::<f64>() * (max - min)
}

/// Multiplies an integer stat by a factor, truncating toward zero.
pub fn scale(base: i32, factor: f64) -> i32 {
    (f64::from(base) * factor) as i32
}

/// Returns true with the given probability.
///
/// Probabilities outside `[0, 1]` are clamped.
pub fn chance(rng: &mut StdRng, probability: f64) -> bool {
    rng.gen_bool(probability.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_roll_factor_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let factor = roll_factor(&mut rng, 0.5, 2.0);
            assert!((0.5..2.0).contains(&factor), "factor {factor} out of range");
        }
    }

    #[test]
    fn test_scale_truncates() {
        assert_eq!(scale(10, 1.5), 15);
        assert_eq!(scale(7, 0.9), 6);
        assert_eq!(scale(3, 0.3), 0);
        assert_eq!(scale(0, 2.0), 0);
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!((0..100).all(|_| chance(&mut rng, 1.0)));
        assert!((0..100).all(|_| !chance(&mut rng, 0.0)));
        assert!(chance(&mut rng, 3.0));
    }
}
