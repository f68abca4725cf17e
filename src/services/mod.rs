pub mod fetcher;
pub mod page;

pub use fetcher::{FetchResponse, Fetcher};
pub use page::Page;
