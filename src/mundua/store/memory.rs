use super::CountryStore;
use crate::error::{MunduaError, Result};
use crate::model::Country;

/// In-memory slot for testing. Holds the serialized form, like the real
/// store, so corrupt content can be injected.
#[derive(Default)]
pub struct InMemoryStore {
    slot: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store whose slot already holds `raw`, parsable or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Some(raw.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}

impl CountryStore for InMemoryStore {
    fn load_all(&self) -> Result<Option<Vec<Country>>> {
        match &self.slot {
            None => Ok(None),
            Some(raw) => {
                let countries = serde_json::from_str(raw).map_err(MunduaError::Serialization)?;
                Ok(Some(countries))
            }
        }
    }

    fn save_all(&mut self, countries: &[Country]) -> Result<()> {
        self.slot = Some(serde_json::to_string(countries).map_err(MunduaError::Serialization)?);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.slot = None;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Status;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        countries: Vec<Country>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                countries: Vec::new(),
            }
        }

        pub fn with_country(mut self, name: &str) -> Self {
            self.countries.push(Country::new(name));
            self.save();
            self
        }

        pub fn with_visited(mut self, name: &str, date: Option<&str>) -> Self {
            let mut country = Country::new(name);
            country.status = Status::Visited;
            country.date = date.map(|d| d.parse().unwrap());
            self.countries.push(country);
            self.save();
            self
        }

        pub fn with_planned(mut self, name: &str) -> Self {
            let mut country = Country::new(name);
            country.status = Status::Planned;
            self.countries.push(country);
            self.save();
            self
        }

        pub fn with_photos(mut self, name: &str, photos: &[&str]) -> Self {
            let mut country = Country::new(name);
            country.status = Status::Visited;
            country.photos = photos.iter().map(|p| p.to_string()).collect();
            self.countries.push(country);
            self.save();
            self
        }

        fn save(&mut self) {
            self.store.save_all(&self.countries).unwrap();
        }
    }
}
