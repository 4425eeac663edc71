//! Invocation context

mod environment;

pub use environment::Environment;
