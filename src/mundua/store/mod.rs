//! # Storage Layer
//!
//! The persisted store is deliberately simple: a single slot holding the
//! JSON-serialized full country collection. Every mutation replaces the
//! whole collection; there are no partial writes and no per-record files.
//! The [`CountryStore`] trait wraps that slot behind a load-all/save-all
//! repository so callers never touch the raw serialized form.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, `countries.json` in the data
//!   directory
//! - [`memory::InMemoryStore`]: in-memory slot for testing, including a way
//!   to inject corrupt content
//!
//! A parse failure on load surfaces as `MunduaError::Serialization`; the
//! bootstrap loader reacts by clearing the slot and falling back to the
//! seed fetch.

use crate::error::Result;
use crate::model::Country;

pub mod fs;
pub mod memory;

/// Abstract interface for the country collection slot.
pub trait CountryStore {
    /// Read the full saved collection. `Ok(None)` when nothing has been
    /// saved yet; `Err(Serialization)` when the slot content is unparsable.
    fn load_all(&self) -> Result<Option<Vec<Country>>>;

    /// Replace the saved collection wholesale.
    fn save_all(&mut self, countries: &[Country]) -> Result<()>;

    /// Remove the saved collection entirely.
    fn clear(&mut self) -> Result<()>;
}
