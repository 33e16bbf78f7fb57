use crate::{Manifest, Registry};
use color_eyre::eyre;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Collects provisioning manifests from a backend directory
///
/// Function directories live under `<backend>/function/<Name>/`. Not every
/// checked-in directory is provisioned; only those carrying a manifest are
/// picked up.
#[derive(Debug, Default)]
pub struct Scanner {
    /// All found manifests, in directory name order
    pub manifests: Vec<Manifest>,
}

impl Scanner {
    /// Init new Scanner
    ///
    /// And optionally scan the requested backend dir
    pub fn new(path: Option<&PathBuf>) -> eyre::Result<Self> {
        let mut scanner: Scanner = Default::default();

        if let Some(path) = path {
            scanner.walk_dir(path)?;
        }

        Ok(scanner)
    }

    pub fn walk_dir(&mut self, path: &PathBuf) -> eyre::Result<()> {
        for entry in WalkDir::new(path.join("function"))
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.file_type().is_dir() // only function directories
                    && e.path().join(Manifest::FILE_NAME).is_file() // only provisioned ones
            })
        {
            self.manifests.push(Manifest::from_path(entry.path())?);
        }

        Ok(())
    }

    /// Build the registry out of all found manifests
    pub fn registry(&self) -> eyre::Result<Registry> {
        let mut registry = Registry::new();

        for manifest in &self.manifests {
            registry.insert_function(&manifest.name, manifest.attributes())?;
        }

        Ok(registry)
    }
}
