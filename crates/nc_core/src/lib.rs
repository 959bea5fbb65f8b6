pub mod config;
pub mod error;
pub mod models;
pub mod types;

pub use config::Config;
pub use error::Error;
pub use models::{NewsSource, TextGenerator, WebSearch};
pub use types::{GenerationParams, NewsArticle, SearchHit};

pub type Result<T> = std::result::Result<T, Error>;
