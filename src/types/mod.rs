pub mod config;
pub mod context;
pub mod figure;
pub mod mode;
pub mod registry;
