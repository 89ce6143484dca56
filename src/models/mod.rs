pub mod cluster;
pub mod common;
pub mod pairwise;
pub mod point;
