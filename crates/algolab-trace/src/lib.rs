//! Call tracing for recursive algorithms.
//!
//! [`Tracer`] records call entries and exits as indented text, one `|  `
//! per nesting level; [`permutations`] is the demonstration workload, with
//! [`permutations_traced`] reporting every recursive call to a tracer.

pub mod permutations;
pub mod tracer;

pub use permutations::{permutations, permutations_traced};
pub use tracer::Tracer;
