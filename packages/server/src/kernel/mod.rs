//! Kernel module - server infrastructure and dependencies.

pub mod ai;
pub mod conversation_store;
pub mod deps;
pub mod firecrawl_client;
pub mod publishers;
pub mod sheets;
pub mod test_dependencies;
pub mod traits;

pub use ai::OpenAIAdapter;
pub use conversation_store::ConversationStore;
pub use deps::ServerDeps;
pub use firecrawl_client::FirecrawlClient;
pub use publishers::{LinkedInPublisher, XPublisher};
pub use sheets::GoogleSheetsAdapter;
pub use test_dependencies::TestDependencies;
pub use traits::*;
