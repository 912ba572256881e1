pub mod analysis;
pub mod config;
pub mod dataset;
pub mod dates;
pub mod eda;
pub mod environment;
pub mod logging;
pub mod report;
pub mod text;
