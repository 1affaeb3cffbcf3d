use crate::config::MunduaConfig;
use crate::model::Country;

pub mod config;
pub mod date;
pub mod helpers;
pub mod init;
pub mod list;
pub mod load;
pub mod photo;
pub mod status;
pub mod view;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_countries: Vec<Country>,
    pub listed_countries: Vec<Country>,
    pub config: Option<MunduaConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_countries(mut self, countries: Vec<Country>) -> Self {
        self.affected_countries = countries;
        self
    }

    pub fn with_listed_countries(mut self, countries: Vec<Country>) -> Self {
        self.listed_countries = countries;
        self
    }

    pub fn with_config(mut self, config: MunduaConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Put earlier messages (e.g. from the bootstrap loader) ahead of the
    /// command's own.
    pub fn prepend_messages(mut self, mut earlier: Vec<CmdMessage>) -> Self {
        earlier.extend(self.messages);
        self.messages = earlier;
        self
    }
}
