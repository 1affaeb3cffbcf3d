use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use std::fs;
use std::path::Path;

pub fn run(data_dir: &Path) -> Result<CmdResult> {
    fs::create_dir_all(data_dir)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized mundua store at {}",
        data_dir.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_the_data_directory() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("data");
        run(&target).unwrap();
        assert!(target.is_dir());
    }
}
