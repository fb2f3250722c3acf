//! Request-independent logic used by the route handlers.

pub mod convert;
