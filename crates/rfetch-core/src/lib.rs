pub mod config;
pub mod logging;

// Pipeline stages, in execution order.
pub mod url_model;
pub mod output;
pub mod fetch;
