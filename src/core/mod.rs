//! Calculation services, the session store and the shared helpers they rely on.

pub mod errors;
pub mod math;
pub mod services;
pub mod store;
pub mod time;
pub mod utils;
