use anyhow::{Context, Result};
use std::path::PathBuf;

/// Flat on-disk store for synthesized audio.
///
/// Files accumulate indefinitely; there is no index, cleanup, or rotation.
/// Random filenames make collisions a non-concern, and a same-named file
/// would simply be overwritten.
pub struct AudioStorage {
    dir: PathBuf,
    public_prefix: String,
}

impl AudioStorage {
    /// `dir` is created (with parents) on first write. `public_prefix` is
    /// the URL path under which `dir` is statically served.
    pub fn new(dir: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            public_prefix: public_prefix.into(),
        }
    }

    /// Write `audio` to `<dir>/<filename>` and return its public URL path.
    pub async fn store(&self, filename: &str, audio: &[u8]) -> Result<String> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("creating audio directory {}", self.dir.display()))?;

        let path = self.dir.join(filename);
        tokio::fs::write(&path, audio)
            .await
            .with_context(|| format!("writing audio file {}", path.display()))?;

        tracing::debug!(path = %path.display(), size = audio.len(), "Audio file written");

        Ok(format!("{}/{}", self.public_prefix, filename))
    }
}
