use crate::error::{MunduaError, Result};
use crate::model::Country;
use crate::store::CountryStore;

/// Mirror the in-memory collection to the store. An empty collection is
/// never written; that would overwrite a not-yet-loaded store with nothing.
pub fn commit<S: CountryStore>(store: &mut S, countries: &[Country]) -> Result<()> {
    if countries.is_empty() {
        return Ok(());
    }
    store.save_all(countries)
}

/// Exact-name lookup; `name` is the record identity.
pub fn position(countries: &[Country], name: &str) -> Result<usize> {
    countries
        .iter()
        .position(|c| c.name == name)
        .ok_or_else(|| MunduaError::CountryNotFound(name.to_string()))
}
