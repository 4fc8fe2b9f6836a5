mod browse;
mod collections;

pub use browse::browse;
pub use collections::run_collection;
