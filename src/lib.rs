// Library interface for testing

// Declare all modules
pub mod config;
pub mod constants;
pub mod db;
pub mod lookup;
pub mod model;
pub mod queries;
pub mod schema;
pub mod serve;
pub mod store;
