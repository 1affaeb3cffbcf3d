//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: the single
//! entry point for all mundua operations, regardless of the UI driving it.
//!
//! Every operation first runs the bootstrap loader (the original loads the
//! collection when the list view mounts, before any edit is possible), then
//! dispatches to the matching command. Loader diagnostics are prepended to
//! the command's messages so the caller sees the whole story.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//! - Does no business logic, no I/O formatting, no presentation
//!
//! ## Generic Over CountryStore
//!
//! `MunduaApi<S: CountryStore>` is generic over the storage backend:
//! - Production: `MunduaApi<FileStore>`
//! - Testing: `MunduaApi<InMemoryStore>`

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::commands;
use crate::commands::load::LoadOutcome;
use crate::config::MunduaConfig;
use crate::error::Result;
use crate::model::Status;
use crate::photo::PhotoOptions;
use crate::seed;
use crate::store::CountryStore;

pub struct MunduaApi<S: CountryStore> {
    store: S,
    config: MunduaConfig,
    data_dir: PathBuf,
}

impl<S: CountryStore> MunduaApi<S> {
    pub fn new(store: S, config: MunduaConfig, data_dir: PathBuf) -> Self {
        Self {
            store,
            config,
            data_dir,
        }
    }

    fn load(&mut self) -> Result<LoadOutcome> {
        let source = self.config.seed_source.clone();
        commands::load::run(&mut self.store, move || seed::load(&source))
    }

    pub fn list_countries(&mut self, query: Option<&str>) -> Result<CmdResult> {
        let outcome = self.load()?;
        let result = commands::list::run(outcome.countries, query)?;
        Ok(result.prepend_messages(outcome.messages))
    }

    pub fn set_status(&mut self, name: &str, status: Status) -> Result<CmdResult> {
        let outcome = self.load()?;
        let result = commands::status::run(&mut self.store, outcome.countries, name, status)?;
        Ok(result.prepend_messages(outcome.messages))
    }

    pub fn set_date(&mut self, name: &str, date: NaiveDate) -> Result<CmdResult> {
        let outcome = self.load()?;
        let result = commands::date::run(&mut self.store, outcome.countries, name, date)?;
        Ok(result.prepend_messages(outcome.messages))
    }

    pub fn add_photo(&mut self, name: &str, file: &Path) -> Result<CmdResult> {
        let outcome = self.load()?;
        let opts = PhotoOptions {
            max_width: self.config.photo_width,
            quality: self.config.photo_quality,
        };
        let result = commands::photo::run(
            &mut self.store,
            outcome.countries,
            name,
            file,
            &opts,
            self.config.photo_limit,
        )?;
        Ok(result.prepend_messages(outcome.messages))
    }

    pub fn view_photos(&mut self, name: &str) -> Result<CmdResult> {
        let outcome = self.load()?;
        let result = commands::view::run(outcome.countries, name)?;
        Ok(result.prepend_messages(outcome.messages))
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn init(&self) -> Result<CmdResult> {
        commands::init::run(&self.data_dir)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
