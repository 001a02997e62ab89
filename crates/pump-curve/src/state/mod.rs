pub mod bonding_curve;

pub use bonding_curve::*;
