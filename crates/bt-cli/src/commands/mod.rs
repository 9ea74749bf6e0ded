pub mod check;
pub mod roll;
pub mod stats;
