mod types;

pub use types::ApiKey;
