pub mod client;
pub mod error;
pub mod extract;
pub mod record;
pub mod session;

pub use client::RomeClient;
pub use error::ScraperError;
pub use extract::extract_product_record;
pub use record::{FetchKey, ProductRecord};
