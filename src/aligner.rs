//! Memoizing aligner object and the one-call convenience function.
//!
//! [`Aligner`] owns a sequence pair and its penalties, and runs each phase
//! at most once: [`Aligner::solve`] fills the matrices, [`Aligner::align`]
//! additionally runs the traceback. The read-only accessors
//! [`Aligner::score`] and [`Aligner::alignment`] report [`AlignError::NotSolved`]
//! until the corresponding phase has run; the lifecycle is carried by the
//! presence of the data, not by a flag.

use std::fmt;

use crate::alignment::Alignment;
use crate::error::AlignError;
use crate::penalties::Penalties;
use crate::solver::Solved;

/// Compute the optimal alignment of `s` and `t` in one call.
///
/// ```
/// use gotoh_align::{align, Penalties};
///
/// let alignment = align(b"GATTACA", b"GATTACA", Penalties::default());
/// assert_eq!(alignment.score(), 0);
/// ```
pub fn align(s: &[u8], t: &[u8], penalties: Penalties) -> Alignment {
    Solved::compute(s, t, penalties).traceback()
}

/// Stateful aligner for a fixed sequence pair.
///
/// Comparison is byte-exact: `b'A'` and `b'a'` are a mismatch.
///
/// ```
/// use gotoh_align::{AlignError, Aligner, Penalties};
///
/// let mut aligner = Aligner::new(b"AGGCT", b"AGCA", Penalties::new(1, 1, 1).unwrap());
/// assert_eq!(aligner.score(), Err(AlignError::NotSolved));
///
/// aligner.solve();
/// assert_eq!(aligner.score(), Ok(2));
///
/// let alignment = aligner.align();
/// assert_eq!(alignment.aligned_t(), b"A-GCA");
/// ```
pub struct Aligner {
    s: Vec<u8>,
    t: Vec<u8>,
    penalties: Penalties,
    solved: Option<Solved>,
    best: Option<Alignment>,
}

impl Aligner {
    /// Create an aligner over copies of `s` and `t`. Nothing is computed
    /// until [`Aligner::solve`] or [`Aligner::align`] is called.
    pub fn new(s: &[u8], t: &[u8], penalties: Penalties) -> Self {
        Self {
            s: s.to_vec(),
            t: t.to_vec(),
            penalties,
            solved: None,
            best: None,
        }
    }

    /// Fill the score matrices, or return the previously filled ones.
    pub fn solve(&mut self) -> &Solved {
        if self.solved.is_none() {
            self.solved = Some(Solved::compute(&self.s, &self.t, self.penalties));
        }
        self.solved.as_ref().unwrap()
    }

    /// Fill and trace back, memoizing both; repeated calls return the same
    /// alignment without recomputing.
    pub fn align(&mut self) -> &Alignment {
        if self.best.is_none() {
            let solved = self.solve();
            let alignment = solved.traceback();
            self.best = Some(alignment);
        }
        self.best.as_ref().unwrap()
    }

    /// Optimal score, if [`Aligner::solve`] has run.
    pub fn score(&self) -> Result<u32, AlignError> {
        self.solved
            .as_ref()
            .map(Solved::score)
            .ok_or(AlignError::NotSolved)
    }

    /// The reconstructed alignment, if [`Aligner::align`] has run.
    pub fn alignment(&self) -> Result<&Alignment, AlignError> {
        self.best.as_ref().ok_or(AlignError::NotSolved)
    }

    /// Penalties this aligner was configured with.
    pub fn penalties(&self) -> Penalties {
        self.penalties
    }
}

impl fmt::Display for Aligner {
    /// Prints the alignment once computed, nothing before.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.best {
            Some(alignment) => alignment.fmt(f),
            None => Ok(()),
        }
    }
}
