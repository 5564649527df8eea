use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use indexmap::IndexMap;
use thiserror::Error;

use stockbook_ledger::StockLedger;

/// Stock file path used when the caller does not pick one.
pub const DEFAULT_STOCK_FILE: &str = "inventory.json";

/// Stock file operation error.
///
/// These are **infrastructure errors** (decoding, I/O) as opposed to domain
/// errors (validation, missing entries). A missing file on read is not an
/// error at all; see [`read`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file exists but does not hold a valid stock document.
    #[error("failed to decode stock document: {0}")]
    Decode(String),

    /// The ledger could not be serialized.
    #[error("failed to encode stock document: {0}")]
    Encode(String),

    /// Any I/O failure other than the file being absent on read.
    #[error("stock file io error: {0}")]
    Io(std::io::Error),
}

/// Read the stock file at `path`.
///
/// A missing file is a cold start, not an error: the result is `Ok(None)`.
/// Contents that are not a JSON object of name-to-count entries, or that
/// contain an entry violating the ledger rules (blank name, zero count, or a
/// negative count rejected by the unsigned value type), fail with
/// [`StoreError::Decode`]; the whole document is discarded, never partially
/// recovered.
pub fn read(path: impl AsRef<Path>) -> Result<Option<StockLedger>, StoreError> {
    let contents = match fs::read_to_string(path.as_ref()) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(StoreError::Io(err)),
    };

    let raw: IndexMap<String, u64> =
        serde_json::from_str(&contents).map_err(|e| StoreError::Decode(e.to_string()))?;

    let ledger = StockLedger::from_entries(raw).map_err(|e| StoreError::Decode(e.to_string()))?;

    Ok(Some(ledger))
}

/// Serialize `ledger` to `path`, overwriting any existing file.
///
/// The document is a pretty-printed JSON object whose field order is the
/// ledger's insertion order.
pub fn write(path: impl AsRef<Path>, ledger: &StockLedger) -> Result<(), StoreError> {
    let json =
        serde_json::to_string_pretty(ledger).map_err(|e| StoreError::Encode(e.to_string()))?;
    fs::write(path.as_ref(), json).map_err(StoreError::Io)
}

/// Load the ledger from `path`, recovering from every failure.
///
/// A present, valid file yields its ledger. A missing file yields an empty
/// ledger (cold start). A file that cannot be read or decoded also yields an
/// empty ledger; the failure is only logged.
pub fn load(path: impl AsRef<Path>) -> StockLedger {
    let path = path.as_ref();
    match read(path) {
        Ok(Some(ledger)) => {
            tracing::info!("loaded {} items from '{}'", ledger.len(), path.display());
            ledger
        }
        Ok(None) => {
            tracing::warn!(
                "stock file '{}' not found, starting with empty stock",
                path.display()
            );
            StockLedger::new()
        }
        Err(err @ StoreError::Decode(_)) => {
            tracing::error!(
                "failed to decode stock file '{}', starting with empty stock: {err}",
                path.display()
            );
            StockLedger::new()
        }
        Err(err) => {
            tracing::error!(
                "failed to read stock file '{}', starting with empty stock: {err}",
                path.display()
            );
            StockLedger::new()
        }
    }
}

/// Persist `ledger` to `path`, logging instead of failing.
///
/// The in-memory ledger is unaffected by the outcome.
pub fn save(ledger: &StockLedger, path: impl AsRef<Path>) {
    let path = path.as_ref();
    match write(path, ledger) {
        Ok(()) => tracing::info!("saved {} items to '{}'", ledger.len(), path.display()),
        Err(err) => tracing::error!("failed to save stock file '{}': {err}", path.display()),
    }
}
