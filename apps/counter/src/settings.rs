//! # Settings Source
//!
//! The tax-and-identity collaborator. Fetched per commit so the bill always
//! carries the current GST rate; a fetch failure degrades to the defaults
//! (zero GST, fallback identity) and never blocks billing.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use dhaba_core::{TaxProfile, TaxRate};

/// Settings fetch failures. Non-fatal by policy: the commit controller maps
/// any of these to `TaxProfile::default()` with a warning.
#[derive(Debug, Error)]
pub enum ConfigFetchError {
    #[error("settings read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("gst percentage {0} outside 0-100")]
    GstOutOfRange(f64),
}

/// Where tax/identity settings come from.
#[async_trait]
pub trait SettingsSource: Send + Sync {
    async fn fetch(&self) -> Result<TaxProfile, ConfigFetchError>;
}

/// On-disk shape of the settings file. All fields optional; GST is a
/// decimal percentage exactly as the back office stores it.
#[derive(Debug, Deserialize)]
struct SettingsDoc {
    business_name: Option<String>,
    address: Option<String>,
    phone_number: Option<String>,
    gst_percentage: Option<f64>,
}

/// JSON settings file implementation.
pub struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SettingsFile { path: path.into() }
    }
}

#[async_trait]
impl SettingsSource for SettingsFile {
    async fn fetch(&self) -> Result<TaxProfile, ConfigFetchError> {
        debug!(path = %self.path.display(), "loading settings");

        let raw = tokio::fs::read_to_string(&self.path).await?;
        let doc: SettingsDoc = serde_json::from_str(&raw)?;

        let gst = match doc.gst_percentage {
            None => TaxRate::zero(),
            Some(pct) if !(0.0..=100.0).contains(&pct) => {
                return Err(ConfigFetchError::GstOutOfRange(pct))
            }
            Some(pct) => TaxRate::from_percentage(pct),
        };

        Ok(TaxProfile {
            business_name: doc.business_name,
            address: doc.address,
            phone_number: doc.phone_number,
            gst,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
