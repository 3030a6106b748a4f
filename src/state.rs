use crate::config::Config;
use crate::models::CheckinState;
use crate::storage::LocalStore;
use crate::view::{HtmlView, Layout};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub store: LocalStore,
    pub goal: u64,
    pub layout: Layout,
    pub data: Arc<Mutex<CheckinState>>,
}

impl AppState {
    pub fn new(config: &Config, data: CheckinState) -> Self {
        Self {
            store: LocalStore::new(config.data_path.clone()),
            goal: config.goal,
            layout: config.layout,
            data: Arc::new(Mutex::new(data)),
        }
    }

    pub fn view(&self) -> HtmlView {
        HtmlView::new(self.layout)
    }
}
