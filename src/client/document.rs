//! The page document the client writes its title to.

use std::sync::RwLock;

/// Document-level side effects available to the client.
pub trait Document: Send + Sync {
    fn set_title(&self, title: &str);

    fn title(&self) -> String;
}

/// In-memory document for headless use and tests.
#[derive(Debug, Default)]
pub struct HeadlessDocument {
    title: RwLock<String>,
}

impl HeadlessDocument {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Document for HeadlessDocument {
    fn set_title(&self, title: &str) {
        let mut current = self.title.write().unwrap_or_else(|e| e.into_inner());
        *current = title.to_string();
    }

    fn title(&self) -> String {
        self.title.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}
