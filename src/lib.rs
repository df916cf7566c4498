//! Global pairwise sequence alignment with affine gap costs.
//!
//! This crate computes the optimal global alignment of two byte sequences
//! under a cost-minimizing scoring model: aligning two unequal bytes costs a
//! flat mismatch penalty, and a gap of length k costs
//! `gap_open + (k - 1) * gap_extend`. Making extension cheaper than opening
//! favors one long contiguous gap over several short ones.
//!
//! ## Core idea
//! 1. Fill three `(n+1) x (m+1)` score matrices (Gotoh's three-state form of
//!    the Needleman–Wunsch recurrence): `M` for alignments ending in a
//!    match/mismatch column, `Ix` for alignments ending with a gap in `t`,
//!    and `Iy` for alignments ending with a gap in `s`. Each cell records
//!    which predecessor state produced its minimum.
//! 2. Walk the recorded pointers back from the cheapest corner state to
//!    `(0, 0)`, emitting aligned columns in reverse.
//!
//! Ties are broken by a fixed precedence (`M`, then `Ix`, then `Iy`), so
//! the reconstructed alignment is deterministic and reproducible.
//!
//! ## Quick start
//! ```
//! use gotoh_align::{align, Penalties};
//!
//! let penalties = Penalties::new(1, 1, 1).unwrap();
//! let alignment = align(b"AGGCT", b"AGCA", penalties);
//! assert_eq!(alignment.score(), 2);
//! assert_eq!(alignment.aligned_s(), b"AGGCT");
//! assert_eq!(alignment.aligned_t(), b"A-GCA");
//! ```
//!
//! ## Two-phase use
//! The fill and the traceback are separate phases: [`Solved::compute`]
//! produces the matrices, [`Solved::score`] reads the optimal score without
//! materializing an alignment, and [`Solved::traceback`] reconstructs the
//! aligned rows. [`Aligner`] wraps both phases behind a memoizing object for
//! callers that want a construct-then-query surface.
//!
//! Runtime is O(n·m) time and space; each alignment call owns its own matrix
//! storage, so concurrent calls on different inputs need no coordination.

pub mod aligner;
pub mod alignment;
pub mod error;
pub mod penalties;
pub mod solver;

mod matrices;
mod traceback;

pub use crate::aligner::{align, Aligner};
pub use crate::alignment::{Alignment, GAP};
pub use crate::error::AlignError;
pub use crate::penalties::Penalties;
pub use crate::solver::Solved;
