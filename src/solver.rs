//! The recurrence fill.
//!
//! [`Solved::compute`] populates the three matrices row by row; every cell
//! depends only on its up, left, and diagonal neighbors, so a single
//! row-major pass suffices. The result is immutable: the traceback reads it
//! without touching anything.

use crate::matrices::{argmin3, Matrices, State, StateMatrix};
use crate::penalties::Penalties;

/// Filled score matrices for one sequence pair.
///
/// Produced by [`Solved::compute`]; query the optimal score with
/// [`Solved::score`] or reconstruct the full alignment with
/// [`Solved::traceback`].
pub struct Solved {
    pub(crate) s: Vec<u8>,
    pub(crate) t: Vec<u8>,
    penalties: Penalties,
    pub(crate) m_dp: StateMatrix,
    pub(crate) ix_dp: StateMatrix,
    pub(crate) iy_dp: StateMatrix,
}

impl Solved {
    /// Fill the matrices for `s` vs `t` under `penalties`.
    pub fn compute(s: &[u8], t: &[u8], penalties: Penalties) -> Self {
        let n = s.len();
        let m = t.len();

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("fill_matrices", rows = n, cols = m);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let Matrices {
            mut m_dp,
            mut ix_dp,
            mut iy_dp,
        } = Matrices::with_base_cases(n, m, penalties);

        for i in 1..=n {
            for j in 1..=m {
                let subst = if s[i - 1] == t[j - 1] {
                    0
                } else {
                    penalties.mismatch()
                };

                // M: best diagonal predecessor plus the substitution cost.
                let (from, diag) = argmin3(
                    m_dp.cost[i - 1][j - 1],
                    ix_dp.cost[i - 1][j - 1],
                    iy_dp.cost[i - 1][j - 1],
                );
                m_dp.cost[i][j] = diag.saturating_add(subst);
                m_dp.from[i][j] = from;

                // Ix: open a gap in t from M, or extend one already open.
                let open = m_dp.cost[i - 1][j].saturating_add(penalties.gap_open());
                let extend = ix_dp.cost[i - 1][j].saturating_add(penalties.gap_extend());
                if open <= extend {
                    ix_dp.cost[i][j] = open;
                    ix_dp.from[i][j] = State::M;
                } else {
                    ix_dp.cost[i][j] = extend;
                    ix_dp.from[i][j] = State::Ix;
                }

                // Iy: same, horizontally.
                let open = m_dp.cost[i][j - 1].saturating_add(penalties.gap_open());
                let extend = iy_dp.cost[i][j - 1].saturating_add(penalties.gap_extend());
                if open <= extend {
                    iy_dp.cost[i][j] = open;
                    iy_dp.from[i][j] = State::M;
                } else {
                    iy_dp.cost[i][j] = extend;
                    iy_dp.from[i][j] = State::Iy;
                }
            }
        }

        Self {
            s: s.to_vec(),
            t: t.to_vec(),
            penalties,
            m_dp,
            ix_dp,
            iy_dp,
        }
    }

    /// Optimal alignment cost: the cheapest of the three corner states.
    pub fn score(&self) -> u32 {
        self.corner().1
    }

    /// Penalties the matrices were filled under.
    pub fn penalties(&self) -> Penalties {
        self.penalties
    }

    /// First input sequence.
    pub fn s(&self) -> &[u8] {
        &self.s
    }

    /// Second input sequence.
    pub fn t(&self) -> &[u8] {
        &self.t
    }

    /// Corner state attaining the global minimum, `M` over `Ix` over `Iy`
    /// on ties. This is where the traceback starts.
    pub(crate) fn corner(&self) -> (State, u32) {
        let n = self.s.len();
        let m = self.t.len();
        argmin3(
            self.m_dp.cost[n][m],
            self.ix_dp.cost[n][m],
            self.iy_dp.cost[n][m],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrices::INF;

    fn p111() -> Penalties {
        Penalties::new(1, 1, 1).unwrap()
    }

    #[test]
    fn empty_pair_scores_zero_in_match_state() {
        let solved = Solved::compute(b"", b"", p111());
        assert_eq!(solved.corner(), (State::M, 0));
    }

    #[test]
    fn single_pair_cells() {
        // "A" vs "A": the only finite interior cell is a free match.
        let solved = Solved::compute(b"A", b"A", p111());
        assert_eq!(solved.m_dp.cost[1][1], 0);
        assert_eq!(solved.m_dp.from[1][1], State::M);
        assert_eq!(solved.ix_dp.cost[1][1], INF);
        assert_eq!(solved.iy_dp.cost[1][1], INF);
        assert_eq!(solved.score(), 0);
    }

    #[test]
    fn one_sided_input_ends_in_gap_state() {
        let solved = Solved::compute(b"", b"ABC", Penalties::new(1, 2, 1).unwrap());
        // gap_open + 2 * gap_extend across row 0
        assert_eq!(solved.corner(), (State::Iy, 4));

        let solved = Solved::compute(b"AB", b"", Penalties::new(1, 2, 1).unwrap());
        assert_eq!(solved.corner(), (State::Ix, 3));
    }

    #[test]
    fn worked_example_scores() {
        // Hand-checked fill for "AGGCT" vs "AGCA", all penalties 1.
        let solved = Solved::compute(b"AGGCT", b"AGCA", p111());
        assert_eq!(solved.m_dp.cost[1][1], 0);
        assert_eq!(solved.m_dp.cost[2][2], 0);
        assert_eq!(solved.ix_dp.cost[2][1], 1);
        assert_eq!(solved.m_dp.cost[3][2], 1);
        assert_eq!(solved.m_dp.cost[5][4], 2);
        assert_eq!(solved.corner(), (State::M, 2));
    }

    #[test]
    fn gap_opening_preferred_over_extension_on_equal_cost() {
        // With gap_open == gap_extend both Ix candidates can tie; the
        // recorded pointer must then come from M.
        let solved = Solved::compute(b"AAA", b"A", p111());
        // Ix[3][1]: open from M[2][1]=1 and extend from Ix[2][1]=1 both
        // cost 2.
        assert_eq!(solved.ix_dp.cost[3][1], 2);
        assert_eq!(solved.ix_dp.from[3][1], State::M);
    }
}
