pub mod news;
pub mod web;

pub use news::NewsClient;
pub use web::SearchClient;

pub mod prelude {
    pub use super::news::NewsClient;
    pub use super::web::SearchClient;
    pub use nc_core::{Error, NewsArticle, NewsSource, Result, SearchHit, WebSearch};
}
