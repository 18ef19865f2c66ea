use crate::config::StockroomConfig;
use crate::model::Product;
use std::path::PathBuf;

pub mod add;
pub mod categories;
pub mod config;
pub mod delete;
pub mod get;
pub mod helpers;
pub mod list;
pub mod search;
pub mod update;

/// Filesystem locations the commands may need besides the store itself.
#[derive(Debug, Clone)]
pub struct StockroomPaths {
    pub config_dir: PathBuf,
    pub data_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_products: Vec<Product>,
    pub listed_products: Vec<Product>,
    pub categories: Vec<String>,
    pub config: Option<StockroomConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_products(mut self, products: Vec<Product>) -> Self {
        self.affected_products = products;
        self
    }

    pub fn with_listed_products(mut self, products: Vec<Product>) -> Self {
        self.listed_products = products;
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_config(mut self, config: StockroomConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn warnings(&self) -> impl Iterator<Item = &CmdMessage> {
        self.messages
            .iter()
            .filter(|m| m.level == MessageLevel::Warning)
    }
}
