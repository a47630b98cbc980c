//! Wire types shared with the stock REST backend.

pub mod domain;
pub mod shared;
pub mod system;
