// HTTP routes
pub mod agent;
pub mod health;
pub mod review;

pub use agent::*;
pub use health::*;
pub use review::*;
