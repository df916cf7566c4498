//! Traceback: reconstruct the optimal alignment from filled matrices.
//!
//! Starting at the cheapest corner state, follow the pointer recorded in
//! each cell. An `M` step consumes a byte from both sequences, `Ix` consumes
//! from `s` against a gap, `Iy` from `t` against a gap. Each step decreases
//! `i + j` by exactly one, and every pointer chain bottoms out at `(0, 0)`
//! in `M`, so the walk terminates. Columns come out end-to-start and are
//! reversed before returning.

use crate::alignment::{Alignment, GAP};
use crate::matrices::State;
use crate::solver::Solved;

impl Solved {
    /// Walk the recorded pointers from the corner back to the origin and
    /// materialize the aligned rows. The matrices are read-only here; the
    /// returned [`Alignment`] is an independent value.
    pub fn traceback(&self) -> Alignment {
        let n = self.s.len();
        let m = self.t.len();

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("traceback", rows = n, cols = m);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let (mut state, score) = self.corner();
        let mut rev_s = Vec::with_capacity(n + m);
        let mut rev_t = Vec::with_capacity(n + m);
        let mut i = n;
        let mut j = m;

        loop {
            match state {
                State::M => {
                    if i == 0 && j == 0 {
                        break;
                    }
                    rev_s.push(self.s[i - 1]);
                    rev_t.push(self.t[j - 1]);
                    state = self.m_dp.from[i][j];
                    i -= 1;
                    j -= 1;
                }
                State::Ix => {
                    debug_assert!(i > 0);
                    rev_s.push(self.s[i - 1]);
                    rev_t.push(GAP);
                    state = self.ix_dp.from[i][j];
                    i -= 1;
                }
                State::Iy => {
                    debug_assert!(j > 0);
                    rev_s.push(GAP);
                    rev_t.push(self.t[j - 1]);
                    state = self.iy_dp.from[i][j];
                    j -= 1;
                }
            }
        }

        rev_s.reverse();
        rev_t.reverse();
        Alignment::new(rev_s, rev_t, score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::penalties::Penalties;

    fn p(mismatch: u32, open: u32, extend: u32) -> Penalties {
        Penalties::new(mismatch, open, extend).unwrap()
    }

    #[test]
    fn empty_inputs_yield_empty_alignment() {
        let alignment = Solved::compute(b"", b"", p(1, 2, 1)).traceback();
        assert!(alignment.is_empty());
        assert_eq!(alignment.score(), 0);
    }

    #[test]
    fn identical_inputs_align_without_gaps() {
        let alignment = Solved::compute(b"HELLO", b"HELLO", p(1, 2, 1)).traceback();
        assert_eq!(alignment.aligned_s(), b"HELLO");
        assert_eq!(alignment.aligned_t(), b"HELLO");
        assert_eq!(alignment.score(), 0);
    }

    #[test]
    fn empty_against_nonempty_is_all_gaps() {
        let alignment = Solved::compute(b"", b"ABC", p(1, 2, 1)).traceback();
        assert_eq!(alignment.aligned_s(), b"---");
        assert_eq!(alignment.aligned_t(), b"ABC");
        assert_eq!(alignment.score(), 4);
    }

    #[test]
    fn single_overhang_opens_one_gap() {
        // "AB" vs "B": drop the leading A for one gap-open.
        let alignment = Solved::compute(b"AB", b"B", p(1, 2, 1)).traceback();
        assert_eq!(alignment.aligned_s(), b"AB");
        assert_eq!(alignment.aligned_t(), b"-B");
        assert_eq!(alignment.score(), 2);
    }

    #[test]
    fn worked_example_reconstruction() {
        // Deterministic output under the M > Ix > Iy tie-break.
        let alignment = Solved::compute(b"AGGCT", b"AGCA", p(1, 1, 1)).traceback();
        assert_eq!(alignment.aligned_s(), b"AGGCT");
        assert_eq!(alignment.aligned_t(), b"A-GCA");
        assert_eq!(alignment.score(), 2);
    }
}
