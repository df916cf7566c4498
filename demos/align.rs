//! Example: align two sequences and print the result.
//!
//! Run with:
//! `cargo run --example align`

use gotoh_align::{Aligner, Penalties};

fn main() {
    let s = b"CACATATTATTCACT";
    let t = b"CAGATTATTTCAT";

    let mut aligner = Aligner::new(s, t, Penalties::default());
    let alignment = aligner.align().clone();

    println!("{alignment}");
    println!("score: {}", alignment.score());
    println!("columns: {}", alignment.len());
}
