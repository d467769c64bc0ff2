mod types;

pub use types::Problem;
