//! Agent activities - one per chain step.

pub mod compose;
pub mod publish;
pub mod scrape;
pub mod sheet;
pub mod summarize;

pub use compose::compose_post;
pub use publish::post_content;
pub use scrape::scrape_article;
pub use sheet::{add_url_to_sheet, fetch_link, update_sheet};
pub use summarize::summarize_article;
