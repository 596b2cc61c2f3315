pub mod format;
pub mod math;
