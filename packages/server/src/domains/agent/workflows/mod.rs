pub mod review;
pub mod run_agent;

pub use review::{generate_draft, publish_draft};
pub use run_agent::{plan, run_agent, Step};
