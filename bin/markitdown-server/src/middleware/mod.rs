//! HTTP middleware stack.

pub mod cors;
pub mod panic;
pub mod trace;
