//! Database fixtures inserted by tests after the context is built.

pub mod application;
