//! # Catalog Source
//!
//! The read-only menu collaborator. The core never owns the catalog; it is
//! fetched once per (re)load and the selection cart is keyed against it in
//! fetch order.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use dhaba_core::CatalogItem;

/// Catalog fetch failures. Startup-fatal for the terminal, but never
/// reachable mid-transaction: the catalog is fetched before the first cart
/// exists.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("menu read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("menu parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("menu item {id} has a negative price")]
    NegativePrice { id: String },
}

/// Where menus come from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Ordered list of sellable items; may be empty.
    async fn fetch(&self) -> Result<Vec<CatalogItem>, CatalogError>;
}

/// JSON menu file: an array of `{id, name, unit_price_paise}` objects.
///
/// Prices are integer paise in the file as well; floats never enter the
/// pipeline, not even at the fixture boundary.
pub struct MenuFile {
    path: PathBuf,
}

impl MenuFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        MenuFile { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for MenuFile {
    async fn fetch(&self) -> Result<Vec<CatalogItem>, CatalogError> {
        debug!(path = %self.path.display(), "loading menu");

        let raw = tokio::fs::read_to_string(&self.path).await?;
        let items: Vec<CatalogItem> = serde_json::from_str(&raw)?;

        if let Some(bad) = items.iter().find(|item| item.unit_price_paise < 0) {
            return Err(CatalogError::NegativePrice { id: bad.id.clone() });
        }

        Ok(items)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_menu(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("dhaba-{}-{}.json", name, std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn test_fetch_preserves_file_order() {
        let path = temp_menu(
            "order",
            r#"[
                {"id": "p2", "name": "Lassi", "unit_price_paise": 5000},
                {"id": "p1", "name": "Samosa", "unit_price_paise": 2000}
            ]"#,
        );

        let items = MenuFile::new(&path).fetch().await.unwrap();
        std::fs::remove_file(&path).unwrap();

        let ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["p2", "p1"]);
    }

    #[tokio::test]
    async fn test_empty_menu_is_valid() {
        let path = temp_menu("empty", "[]");
        let items = MenuFile::new(&path).fetch().await.unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_negative_price_is_rejected() {
        let path = temp_menu(
            "negative",
            r#"[{"id": "p1", "name": "Oops", "unit_price_paise": -1}]"#,
        );
        let err = MenuFile::new(&path).fetch().await.unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(err, CatalogError::NegativePrice { id } if id == "p1"));
    }

    #[tokio::test]
    async fn test_missing_file_surfaces_io_error() {
        let err = MenuFile::new("/nonexistent/menu.json").fetch().await.unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
