pub mod args;
pub mod cache;
pub mod client;
pub mod markup;
pub mod models;
pub mod output;
pub mod render;
pub mod stats;
pub mod utils;
pub mod view;

pub use args::Args;
pub use cache::ChartCache;
pub use client::{ApiClient, ClientError};
pub use models::{ChartEntry, SearchResult};
pub use stats::ArtistCount;
pub use view::{ViewState, ViewTree};
