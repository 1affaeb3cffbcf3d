//! # Bootstrap Seed
//!
//! When the store holds no collection yet, the initial country list comes
//! from a seed source: either a local JSON file or an HTTP(S) URL. The seed
//! is a JSON array of partial records; serde defaults on [`Country`] fill in
//! the missing fields (notably an empty `photos` list).

use std::fs;
use std::path::Path;

use crate::error::{MunduaError, Result};
use crate::model::Country;

/// Load seed records from `source`. An existing local path is read as a
/// file; anything else is treated as a URL and fetched.
pub fn load(source: &str) -> Result<Vec<Country>> {
    let path = Path::new(source);
    if path.exists() {
        let content = fs::read_to_string(path).map_err(MunduaError::Io)?;
        return serde_json::from_str(&content).map_err(MunduaError::Serialization);
    }
    fetch(source)
}

fn fetch(url: &str) -> Result<Vec<Country>> {
    let response =
        reqwest::blocking::get(url).map_err(|e| MunduaError::Fetch(e.to_string()))?;
    if !response.status().is_success() {
        return Err(MunduaError::Fetch(format!(
            "HTTP status {}",
            response.status()
        )));
    }
    response
        .json::<Vec<Country>>()
        .map_err(|e| MunduaError::Fetch(e.to_string()))
}
