//! # Merge Modes
//!
//! Deterministic merging is cached; dropout merging is not.

use core::fmt;

use rand::RngCore;

use crate::errors::{WSResult, WordsnipError};

/// A validated BPE-dropout probability in ``[0, 1)``.
///
/// Each eligible merge candidate is independently dropped with this
/// probability on every merge iteration. A rate of 0 disables dropout.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct DropoutRate(f64);

impl DropoutRate {
    /// No dropout.
    pub const ZERO: Self = Self(0.0);

    /// Validate a dropout probability.
    ///
    /// ## Returns
    /// The rate, or [`WordsnipError::InvalidDropout`] if `p` is not finite
    /// or outside ``[0, 1)``.
    pub fn new(p: f64) -> WSResult<Self> {
        if p.is_finite() && (0.0..1.0).contains(&p) {
            Ok(Self(p))
        } else {
            Err(WordsnipError::InvalidDropout(p))
        }
    }

    /// The drop probability.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Is dropout disabled?
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// The probability of keeping a merge candidate.
    pub fn keep_probability(&self) -> f64 {
        1.0 - self.0
    }
}

impl TryFrom<f64> for DropoutRate {
    type Error = WordsnipError;

    fn try_from(p: f64) -> WSResult<Self> {
        Self::new(p)
    }
}

/// Selects between the cached-deterministic and dropout-stochastic paths.
pub enum MergeMode<'r> {
    /// Always apply the best merge; results are cached.
    Deterministic,

    /// Randomly skip merge candidates; results are never cached.
    Dropout {
        /// The drop probability; never zero.
        rate: DropoutRate,

        /// The random source for the keep/drop draws.
        rng: &'r mut dyn RngCore,
    },
}

impl<'r> MergeMode<'r> {
    /// Build a dropout mode; a zero rate yields [`MergeMode::Deterministic`].
    pub fn dropout(
        rate: DropoutRate,
        rng: &'r mut dyn RngCore,
    ) -> Self {
        if rate.is_zero() {
            MergeMode::Deterministic
        } else {
            MergeMode::Dropout { rate, rng }
        }
    }

    /// Is this the deterministic mode?
    pub fn is_deterministic(&self) -> bool {
        matches!(self, MergeMode::Deterministic)
    }
}

impl fmt::Debug for MergeMode<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            MergeMode::Deterministic => f.write_str("Deterministic"),
            MergeMode::Dropout { rate, .. } => f
                .debug_struct("Dropout")
                .field("rate", &rate.value())
                .finish_non_exhaustive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_dropout_rate() {
        assert_eq!(DropoutRate::new(0.0).unwrap(), DropoutRate::ZERO);
        assert!(DropoutRate::ZERO.is_zero());

        let rate = DropoutRate::new(0.25).unwrap();
        assert_eq!(rate.value(), 0.25);
        assert_eq!(rate.keep_probability(), 0.75);

        for p in [1.0, -0.1, 2.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                DropoutRate::try_from(p),
                Err(WordsnipError::InvalidDropout(_))
            ));
        }
    }

    #[test]
    fn test_zero_dropout_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(MergeMode::dropout(DropoutRate::ZERO, &mut rng).is_deterministic());

        let mode = MergeMode::dropout(DropoutRate::new(0.5).unwrap(), &mut rng);
        assert!(!mode.is_deterministic());
        assert_eq!(format!("{mode:?}"), "Dropout { rate: 0.5, .. }");
    }
}
