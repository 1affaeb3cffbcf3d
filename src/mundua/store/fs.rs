use super::CountryStore;
use crate::error::{MunduaError, Result};
use crate::model::Country;
use std::fs;
use std::path::PathBuf;

const STORE_FILENAME: &str = "countries.json";

/// File-backed store: the whole collection lives in one `countries.json`
/// under the data directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn store_path(&self) -> PathBuf {
        self.root.join(STORE_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(MunduaError::Io)?;
        }
        Ok(())
    }
}

impl CountryStore for FileStore {
    fn load_all(&self) -> Result<Option<Vec<Country>>> {
        let path = self.store_path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(MunduaError::Io)?;
        let countries = serde_json::from_str(&content).map_err(MunduaError::Serialization)?;
        Ok(Some(countries))
    }

    fn save_all(&mut self, countries: &[Country]) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(countries).map_err(MunduaError::Serialization)?;
        fs::write(self.store_path(), content).map_err(MunduaError::Io)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        let path = self.store_path();
        if path.exists() {
            fs::remove_file(path).map_err(MunduaError::Io)?;
        }
        Ok(())
    }
}
