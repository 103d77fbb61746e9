//! Preparation of the data directory and database file before the store is opened.

use std::fs;
use std::io;
use std::path::Path;

/// Create the data directory if it is missing.
pub fn prepare_data_dir(dir: &Path) -> io::Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    tracing::warn!("CustomCommands data folder does not exist, creating {:?}", dir);
    fs::create_dir_all(dir)
}

/// Create an empty database file if none exists yet.
pub fn prepare_database_file(db_path: &Path) -> io::Result<()> {
    if db_path.exists() {
        return Ok(());
    }
    tracing::warn!(
        "CustomCommands database does not exist, creating a new one: {}",
        db_path.display()
    );
    fs::File::create(db_path)?;
    Ok(())
}
