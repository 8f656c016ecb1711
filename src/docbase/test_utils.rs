use crate::editor::{CaptureEngine, EditorPreference};
use crate::logging::Logger;
use std::fs;
use tempfile::TempDir;

/// A shell script standing in for the user's editor, plus a private scratch
/// directory so tests can check that nothing is left behind.
pub struct StubEditor {
    // Both directories must outlive the engine.
    pub scratch: TempDir,
    pub scripts: TempDir,
}

impl Default for StubEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl StubEditor {
    pub fn new() -> Self {
        Self {
            scratch: tempfile::tempdir().expect("failed to create scratch dir"),
            scripts: tempfile::tempdir().expect("failed to create scripts dir"),
        }
    }

    /// `script` runs under `sh` with the scratch file as `$1`.
    pub fn engine(&self, script: &str) -> CaptureEngine {
        let path = self.scripts.path().join("editor.sh");
        fs::write(&path, script).expect("failed to write stub editor");
        let command = format!("sh {}", path.display());
        self.engine_with(EditorPreference::from_command(command))
    }

    /// An engine using `preference` and this fixture's scratch directory.
    pub fn engine_with(&self, preference: EditorPreference) -> CaptureEngine {
        let engine = CaptureEngine::new(preference, Logger::discard());
        engine.with_temp_dir(Some(self.scratch.path().to_path_buf()))
    }

    pub fn scratch_is_empty(&self) -> bool {
        fs::read_dir(self.scratch.path())
            .map(|mut entries| entries.next().is_none())
            .unwrap_or(false)
    }
}
