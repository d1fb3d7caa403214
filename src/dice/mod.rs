//! The LRC die.
//!
//! Six equally likely faces: one Left, one Right, one Center and three
//! dots. Every draw goes through an injected `RandomSource`.

mod die;

pub use die::{Die, Outcome};
