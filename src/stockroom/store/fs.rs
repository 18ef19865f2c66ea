use super::DataStore;
use crate::error::{Result, StockroomError};
use crate::model::Product;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "products.json";

const INDENT: &[u8] = b"    ";

/// Stores the catalog as a single pretty-printed JSON array.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(StockroomError::Io)?;
            }
        }
        Ok(())
    }
}

/// Serializes products with 4-space indentation. serde_json leaves non-ASCII text
/// unescaped, so names like "Café" are written as-is.
pub fn to_document(products: &[Product]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    products
        .serialize(&mut serializer)
        .map_err(StockroomError::Serialization)?;
    buf.push(b'\n');
    String::from_utf8(buf).map_err(|e| StockroomError::Store(e.to_string()))
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Product>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no data file yet, starting empty");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(StockroomError::Io)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let products: Vec<Product> =
            serde_json::from_str(&content).map_err(StockroomError::Serialization)?;
        tracing::debug!(path = %self.path.display(), count = products.len(), "loaded products");
        Ok(products)
    }

    fn save(&mut self, products: &[Product]) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = to_document(products)?;
        fs::write(&self.path, content).map_err(StockroomError::Io)?;
        tracing::debug!(path = %self.path.display(), count = products.len(), "saved products");
        Ok(())
    }
}
