//! Derive macros shared by the date, weekday and range types.

pub use derive_more::Display;
