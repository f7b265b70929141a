use sbom_verify::prelude::*;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// ArtifactStore wrapper around the real filesystem reader that logs every opened name
#[derive(Default, Clone)]
pub struct MockArtifactStore {
    inner: Arc<FileSystemReader>,
    pub reads: Arc<Mutex<Vec<String>>>,
}

impl MockArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read_names(&self) -> Vec<String> {
        self.reads.lock().unwrap().clone()
    }
}

impl ArtifactStore for MockArtifactStore {
    fn open_artifact(&self, root: &Path, name: &str) -> Result<ArtifactReader> {
        self.reads.lock().unwrap().push(name.to_string());
        self.inner.open_artifact(root, name)
    }
}
