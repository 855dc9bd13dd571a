use crate::commands::{CatalogPaths, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::fs_backend::FsBackend;
use std::fs;

/// Create the data directory and an empty collection. An existing collection
/// is left alone.
pub fn run(paths: &CatalogPaths) -> Result<CmdResult> {
    fs::create_dir_all(&paths.data_dir)?;
    let created = FsBackend::new(&paths.products_file).initialize()?;

    let mut result = CmdResult::default();
    if created {
        result.add_message(CmdMessage::success(format!(
            "Initialized catalog at {}",
            paths.products_file.display()
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Catalog already exists at {}",
            paths.products_file.display()
        )));
    }
    Ok(result)
}
