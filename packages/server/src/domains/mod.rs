// Business domains
pub mod agent;
