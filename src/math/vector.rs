use rand::Rng;

use crate::error::{PerceptronError, Result};

/// Dot product of two equal-length vectors.
pub fn dot(a: &[f64], b: &[f64]) -> Result<f64> {
    check_dims(a.len(), b.len())?;
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x * y).sum())
}

/// In-place `target += factor * x` over the whole vector.
///
/// `factor` is `+learn_rate` for a false negative and `-learn_rate` for a
/// false positive, so one routine covers both directions of the update.
pub fn add_scaled(target: &mut [f64], x: &[f64], factor: f64) -> Result<()> {
    check_dims(target.len(), x.len())?;
    for (t, v) in target.iter_mut().zip(x.iter()) {
        *t += factor * v;
    }
    Ok(())
}

/// Draws `len` values uniformly from `[0, 1)`.
pub fn random_uniform<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<f64> {
    (0..len).map(|_| rng.gen::<f64>()).collect()
}

fn check_dims(expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(PerceptronError::DimensionMismatch { expected, found });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn dot_of_pairs() {
        assert_eq!(dot(&[1.0, 2.0], &[3.0, 4.0]).unwrap(), 11.0);
        assert_eq!(dot(&[], &[]).unwrap(), 0.0);
    }

    #[test]
    fn dot_rejects_mismatched_lengths() {
        let err = dot(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            PerceptronError::DimensionMismatch { expected: 3, found: 2 }
        ));
    }

    #[test]
    fn add_scaled_moves_every_component() {
        let mut w = vec![0.5, -0.5, 1.0];
        add_scaled(&mut w, &[1.0, 2.0, -4.0], -0.25).unwrap();
        assert_eq!(w, vec![0.25, -1.0, 2.0]);
    }

    #[test]
    fn add_scaled_leaves_target_untouched_on_mismatch() {
        let mut w = vec![1.0, 1.0];
        assert!(add_scaled(&mut w, &[1.0], 1.0).is_err());
        assert_eq!(w, vec![1.0, 1.0]);
    }

    #[test]
    fn random_uniform_is_seeded_and_in_range() {
        let a = random_uniform(16, &mut StdRng::seed_from_u64(7));
        let b = random_uniform(16, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert!(a.iter().all(|v| (0.0..1.0).contains(v)));
    }
}
