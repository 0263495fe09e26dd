//! Bond instruments.

mod fixed;

pub use fixed::FixedBond;
