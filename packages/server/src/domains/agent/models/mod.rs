pub mod network;
pub mod publish_status;
pub mod state;

pub use network::Network;
pub use publish_status::PublishStatus;
pub use state::{non_empty, StateUpdate, WorkflowState};
