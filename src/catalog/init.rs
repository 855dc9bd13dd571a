use crate::api::CatalogApi;
use crate::commands::CatalogPaths;
use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::repository::Repository;
use crate::service::Service;
use crate::store::fs::FileStore;
use crate::store::fs_backend::FsBackend;
use crate::store::serialized::SerializedStore;
use crate::store::JsonStore;
use directories::{BaseDirs, ProjectDirs};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the per-project data directory.
pub const DATA_DIR_NAME: &str = ".catalog";

/// The full production stack: file store, mutations serialized within the
/// process.
pub type DefaultService = Service<Repository<SerializedStore<FileStore>>>;

pub struct CatalogContext {
    pub api: CatalogApi<DefaultService>,
    pub config: CatalogConfig,
}

/// Walk up from `cwd` looking for a directory that contains `.catalog`.
/// Stops at the home directory or the filesystem root.
pub fn find_catalog_root(cwd: &Path) -> Option<PathBuf> {
    let home_dir = BaseDirs::new().map(|bd| bd.home_dir().to_path_buf());
    let mut current = cwd.to_path_buf();

    loop {
        if current.join(DATA_DIR_NAME).is_dir() {
            return Some(current);
        }

        if let Some(ref home) = home_dir {
            if &current == home {
                return None;
            }
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => return None,
        }
    }
}

/// Pick the data directory: explicit override, then the nearest `.catalog`,
/// then the per-user data directory.
pub fn resolve_data_dir(cwd: &Path, data_override: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = data_override {
        return Ok(if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            cwd.join(dir)
        });
    }

    if let Some(root) = find_catalog_root(cwd) {
        return Ok(root.join(DATA_DIR_NAME));
    }

    ProjectDirs::from("com", "catalog", "catalog")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| CatalogError::Config("Could not determine data directory".to_string()))
}

pub fn initialize(cwd: &Path, data_override: Option<&Path>) -> Result<CatalogContext> {
    let data_dir = resolve_data_dir(cwd, data_override)?;
    let config = CatalogConfig::load(&data_dir)?;
    let products_file = config.products_path(&data_dir);
    debug!(
        data_dir = %data_dir.display(),
        products_file = %products_file.display(),
        id_policy = %config.id_policy,
        "resolved catalog location"
    );

    let backend = FsBackend::new(&products_file).with_pretty(config.pretty);
    let store = JsonStore::with_backend(backend).with_id_policy(config.id_policy);
    let service = Service::new(Repository::new(SerializedStore::new(store)));

    let paths = CatalogPaths {
        data_dir,
        products_file,
    };
    let api = CatalogApi::new(service, paths);

    Ok(CatalogContext { api, config })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::IdPolicy;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_catalog_root_in_cwd() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir(root.join(DATA_DIR_NAME)).unwrap();

        assert_eq!(find_catalog_root(root), Some(root.to_path_buf()));
    }

    #[test]
    fn test_find_catalog_root_deep_nested() {
        let temp = TempDir::new().unwrap();
        let grandparent = temp.path();
        let child = grandparent.join("parent").join("child");
        fs::create_dir_all(&child).unwrap();
        fs::create_dir(grandparent.join(DATA_DIR_NAME)).unwrap();

        assert_eq!(find_catalog_root(&child), Some(grandparent.to_path_buf()));
    }

    #[test]
    fn test_find_catalog_root_prefers_nearest() {
        let temp = TempDir::new().unwrap();
        let parent = temp.path();
        let child = parent.join("child");
        fs::create_dir_all(child.join(DATA_DIR_NAME)).unwrap();
        fs::create_dir(parent.join(DATA_DIR_NAME)).unwrap();

        assert_eq!(find_catalog_root(&child), Some(child.clone()));
    }

    #[test]
    fn test_find_catalog_root_ignores_plain_file() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("a");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join(DATA_DIR_NAME), "not a dir").unwrap();

        assert_eq!(find_catalog_root(&root), None);
    }

    #[test]
    fn test_override_wins() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(DATA_DIR_NAME)).unwrap();

        let resolved = resolve_data_dir(temp.path(), Some(Path::new("elsewhere"))).unwrap();
        assert_eq!(resolved, temp.path().join("elsewhere"));
    }

    #[test]
    fn test_project_dir_used_when_present() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(DATA_DIR_NAME)).unwrap();

        let resolved = resolve_data_dir(temp.path(), None).unwrap();
        assert_eq!(resolved, temp.path().join(DATA_DIR_NAME));
    }

    #[test]
    fn test_initialize_applies_config() {
        let temp = TempDir::new().unwrap();
        let data = temp.path().join("data");
        let config = CatalogConfig {
            products_file: "stock.json".into(),
            id_policy: IdPolicy::MaxPlusOne,
            pretty: true,
        };
        config.save(&data).unwrap();

        let ctx = initialize(temp.path(), Some(data.as_path())).unwrap();
        assert_eq!(ctx.config, config);
        assert_eq!(ctx.api.paths().products_file, data.join("stock.json"));

        let store = ctx.api.service().repository().storage().inner();
        assert_eq!(store.id_policy(), IdPolicy::MaxPlusOne);
        assert!(store.backend().is_pretty());
    }
}
