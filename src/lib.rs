pub mod block;
pub mod error;
pub mod format;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod report;
pub mod settings;
pub mod tables;
