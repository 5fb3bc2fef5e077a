#![allow(clippy::must_use_candidate)]

mod fault;
mod kind;

pub use fault::{Fault, Violation};
pub use kind::ErrorKind;
