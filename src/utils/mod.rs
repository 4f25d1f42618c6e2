pub mod logging;
pub mod math;
