//!
//! The performance tester utils.
//!

pub mod timer;
