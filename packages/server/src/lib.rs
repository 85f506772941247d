// Social Media Automation Agent - API Core
//
// Turns news article links into social posts: scrape, summarize, compose,
// publish, and record the outcome in a spreadsheet.
//
// Workflows are organized per-domain in domains/*/workflows/

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
