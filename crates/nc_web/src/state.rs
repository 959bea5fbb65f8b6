use std::sync::Arc;

use nc_core::{NewsSource, TextGenerator, WebSearch};

pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
    pub news: Arc<dyn NewsSource>,
    pub search: Arc<dyn WebSearch>,
}
