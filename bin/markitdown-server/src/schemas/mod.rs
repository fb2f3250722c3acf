//! Request and response bodies.

pub mod convert;
pub mod meta;
