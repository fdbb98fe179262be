pub mod chlorophyll;
pub mod logger;
