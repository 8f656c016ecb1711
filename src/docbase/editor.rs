//! # Editor Capture
//!
//! Lets the user write a post body in their own text editor:
//!
//! 1. Resolve the editor command from an [`EditorPreference`].
//! 2. Stage the seed content in a fresh scratch file.
//! 3. Run the editor in the foreground on the controlling terminal and wait for it.
//! 4. Read the file back and remove it.
//!
//! The scratch file is held as a [`TempPath`], so it is deleted on every exit path,
//! including launch failures and panics. The read-back goes through the path, not
//! the original handle, because many editors save by writing a new file and
//! renaming it over the old one.
//!
//! A non-zero editor exit does not discard the content. The user may have saved
//! before quitting with an error code, so the bytes are returned together with an
//! [`CaptureError::EditorExitedWithError`] observation and the caller decides.

use crate::logging::Logger;
use crate::model::PostId;
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use tempfile::TempPath;
use thiserror::Error;

/// Environment variables consulted, in order, after the profile's editor.
pub const EDITOR_ENV_VARS: [&str; 3] = ["DOCBASE_EDITOR", "VISUAL", "EDITOR"];

/// Editor used when nothing else is configured.
pub const FALLBACK_EDITOR: &str = "vi";

/// Overrides the directory scratch files are created in.
pub const TEMP_DIR_ENV: &str = "DOCBASE_TEMP_DIR";

const SCRATCH_SUFFIX: &str = ".md";
const SCRATCH_RAND_LEN: usize = 8;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("no editor configured; set $EDITOR or the profile's Editor")]
    NoEditorConfigured,

    #[error("editor '{program}' not found")]
    EditorNotFound { program: String },

    #[error("failed to launch editor '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("failed while waiting for editor '{program}': {source}")]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("editor exited with {}", describe_exit(.code))]
    EditorExitedWithError { code: Option<i32> },

    #[error("failed to {action} scratch file {}: {source}", .path.display())]
    Scratch {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

/// Ordered editor candidates plus an optional last resort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorPreference {
    candidates: Vec<String>,
    fallback: Option<String>,
}

impl EditorPreference {
    pub fn new(candidates: Vec<String>, fallback: Option<String>) -> Self {
        Self {
            candidates,
            fallback,
        }
    }

    /// A preference that always uses `command`.
    pub fn from_command(command: impl Into<String>) -> Self {
        Self::new(vec![command.into()], None)
    }

    /// Profile editor first, then `$DOCBASE_EDITOR`, `$VISUAL`, `$EDITOR`,
    /// then [`FALLBACK_EDITOR`].
    pub fn from_env(configured: Option<&str>) -> Self {
        Self::from_lookup(configured, |name| env::var(name).ok())
    }

    /// Same order as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup<F>(configured: Option<&str>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut candidates: Vec<String> = configured.map(str::to_string).into_iter().collect();
        candidates.extend(EDITOR_ENV_VARS.iter().filter_map(|name| lookup(name)));
        Self::new(candidates, Some(FALLBACK_EDITOR.to_string()))
    }

    /// Picks the first usable candidate. Blank entries are skipped.
    pub fn resolve(&self) -> Result<EditorCommand, CaptureError> {
        self.candidates
            .iter()
            .chain(self.fallback.iter())
            .find_map(|c| EditorCommand::parse(c))
            .ok_or(CaptureError::NoEditorConfigured)
    }
}

/// A resolved editor: program plus leading arguments, e.g. `code --wait`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl EditorCommand {
    /// Splits a command line on whitespace. Returns `None` for blank input.
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let program = parts.next()?.to_string();
        Some(Self {
            program,
            args: parts.map(str::to_string).collect(),
        })
    }

    fn command(&self, file: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).arg(file);
        cmd
    }
}

/// How the scratch file is named.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScratchName {
    /// Editing an existing post: `<0000001234>.<random>.md`.
    Post(PostId),
    /// A brand-new post: `<random>.md`.
    Fresh,
}

impl ScratchName {
    fn prefix(&self) -> String {
        match self {
            ScratchName::Post(id) => format!("{}.", id.padded()),
            ScratchName::Fresh => String::new(),
        }
    }
}

/// Bytes read back from the scratch file, plus a non-fatal editor failure.
#[derive(Debug)]
pub struct CaptureResult {
    pub content: Vec<u8>,
    pub editor_error: Option<CaptureError>,
}

pub struct CaptureEngine {
    preference: EditorPreference,
    temp_dir: Option<PathBuf>,
    logger: Logger,
}

impl CaptureEngine {
    pub fn new(preference: EditorPreference, logger: Logger) -> Self {
        Self {
            preference,
            temp_dir: None,
            logger,
        }
    }

    /// Directory for scratch files. `None` means the platform temp dir.
    pub fn with_temp_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.temp_dir = dir;
        self
    }

    /// Takes the directory from `$DOCBASE_TEMP_DIR` when it is set and non-empty.
    pub fn with_temp_dir_from_env(self) -> Self {
        let dir = env::var_os(TEMP_DIR_ENV)
            .filter(|d| !d.is_empty())
            .map(PathBuf::from);
        self.with_temp_dir(dir)
    }

    /// Runs the full capture: seed, edit, read back, clean up.
    ///
    /// Blocks until the editor exits. There is no timeout.
    pub fn capture(
        &self,
        seed: Option<&[u8]>,
        name: ScratchName,
    ) -> Result<CaptureResult, CaptureError> {
        let editor = self.preference.resolve()?;
        let scratch = self.create_scratch(seed, name)?;

        let status = self.run_editor(&editor, &scratch)?;
        let editor_error = (!status.success()).then(|| CaptureError::EditorExitedWithError {
            code: status.code(),
        });
        if let Some(err) = &editor_error {
            self.logger.debug(format_args!("{}", err));
        }

        let content = fs::read(&scratch).map_err(|source| CaptureError::Scratch {
            action: "read",
            path: scratch.to_path_buf(),
            source,
        })?;
        self.logger.debug(format_args!(
            "read {} bytes back from {}",
            content.len(),
            scratch.display()
        ));

        self.release(scratch);
        Ok(CaptureResult {
            content,
            editor_error,
        })
    }

    fn scratch_dir(&self) -> PathBuf {
        self.temp_dir.clone().unwrap_or_else(env::temp_dir)
    }

    fn create_scratch(
        &self,
        seed: Option<&[u8]>,
        name: ScratchName,
    ) -> Result<TempPath, CaptureError> {
        let dir = self.scratch_dir();
        let prefix = name.prefix();
        let mut file = tempfile::Builder::new()
            .prefix(&prefix)
            .suffix(SCRATCH_SUFFIX)
            .rand_bytes(SCRATCH_RAND_LEN)
            .tempfile_in(&dir)
            .map_err(|source| CaptureError::Scratch {
                action: "create",
                path: dir.clone(),
                source,
            })?;

        let seed = seed.unwrap_or_default();
        file.write_all(seed)
            .and_then(|()| file.flush())
            .map_err(|source| CaptureError::Scratch {
                action: "write",
                path: file.path().to_path_buf(),
                source,
            })?;
        self.logger.debug(format_args!(
            "wrote {} bytes of seed content to {}",
            seed.len(),
            file.path().display()
        ));

        // Close our handle before the editor opens the file.
        Ok(file.into_temp_path())
    }

    fn run_editor(&self, editor: &EditorCommand, file: &Path) -> Result<ExitStatus, CaptureError> {
        self.logger.debug(format_args!(
            "launching editor {:?} {:?} on {}",
            editor.program,
            editor.args,
            file.display()
        ));
        let mut child = editor
            .command(file)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| {
                if source.kind() == io::ErrorKind::NotFound {
                    CaptureError::EditorNotFound {
                        program: editor.program.clone(),
                    }
                } else {
                    CaptureError::Launch {
                        program: editor.program.clone(),
                        source,
                    }
                }
            })?;

        child.wait().map_err(|source| CaptureError::Wait {
            program: editor.program.clone(),
            source,
        })
    }

    /// Removal failures are logged and otherwise ignored.
    fn release(&self, scratch: TempPath) {
        let path = scratch.to_path_buf();
        if let Err(err) = scratch.close() {
            self.logger.warn(format_args!(
                "failed to remove scratch file {}: {}",
                path.display(),
                err
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    fn engine_in(dir: &TempDir, preference: EditorPreference) -> CaptureEngine {
        let engine = CaptureEngine::new(preference, Logger::discard());
        engine.with_temp_dir(Some(dir.path().into()))
    }

    #[test]
    fn profile_editor_wins() {
        let env = env_of(&[("EDITOR", "nano")]);
        let pref = EditorPreference::from_lookup(Some("nvim"), env);
        assert_eq!(pref.resolve().unwrap().program, "nvim");
    }

    #[test]
    fn env_vars_are_consulted_in_order() {
        let env = env_of(&[("EDITOR", "nano"), ("VISUAL", "emacs")]);
        let pref = EditorPreference::from_lookup(None, env);
        assert_eq!(pref.resolve().unwrap().program, "emacs");

        let env = env_of(&[("EDITOR", "nano"), ("DOCBASE_EDITOR", "micro")]);
        let pref = EditorPreference::from_lookup(None, env);
        assert_eq!(pref.resolve().unwrap().program, "micro");
    }

    #[test]
    fn blank_candidates_are_skipped() {
        let env = env_of(&[("VISUAL", ""), ("EDITOR", "ed")]);
        let pref = EditorPreference::from_lookup(Some("  "), env);
        assert_eq!(pref.resolve().unwrap().program, "ed");
    }

    #[test]
    fn falls_back_to_default_editor() {
        let pref = EditorPreference::from_lookup(None, env_of(&[]));
        assert_eq!(pref.resolve().unwrap().program, FALLBACK_EDITOR);
    }

    #[test]
    fn no_candidates_and_no_fallback_fails() {
        let pref = EditorPreference::new(vec![String::new()], None);
        assert!(matches!(
            pref.resolve(),
            Err(CaptureError::NoEditorConfigured)
        ));
    }

    #[test]
    fn editor_command_keeps_arguments() {
        let cmd = EditorCommand::parse("code --wait  --new-window").unwrap();
        assert_eq!(cmd.program, "code");
        assert_eq!(cmd.args, vec!["--wait", "--new-window"]);
        assert_eq!(EditorCommand::parse("   "), None);
    }

    #[test]
    fn scratch_names_do_not_collide() {
        let dir = TempDir::new().unwrap();
        let engine = engine_in(&dir, EditorPreference::from_command("true"));

        let seven = ScratchName::Post(PostId(7));
        let a = engine.create_scratch(None, seven).unwrap();
        let b = engine.create_scratch(None, seven).unwrap();
        let c = engine
            .create_scratch(None, ScratchName::Post(PostId(8)))
            .unwrap();
        assert_ne!(a.to_path_buf(), b.to_path_buf());
        assert_ne!(a.to_path_buf(), c.to_path_buf());

        let name = a.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("0000000007."), "{name}");
        assert!(name.ends_with(".md"), "{name}");
    }

    #[test]
    fn fresh_scratch_is_seeded_and_removed_on_drop() {
        let dir = TempDir::new().unwrap();
        let engine = engine_in(&dir, EditorPreference::from_command("true"));

        let scratch = engine
            .create_scratch(Some(b"seed"), ScratchName::Fresh)
            .unwrap();
        let name = scratch.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.ends_with(".md"));
        assert!(!name.starts_with(".tmp"));
        assert_eq!(fs::read(&scratch).unwrap(), b"seed");

        let path = scratch.to_path_buf();
        drop(scratch);
        assert!(!path.exists());
    }

    #[test]
    fn no_editor_configured_creates_nothing() {
        let dir = TempDir::new().unwrap();
        let engine = engine_in(&dir, EditorPreference::new(vec![], None));

        let err = engine.capture(Some(b"x"), ScratchName::Fresh).unwrap_err();
        assert!(matches!(err, CaptureError::NoEditorConfigured));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[cfg(unix)]
    mod with_stub_editor {
        use super::*;
        use crate::test_utils::StubEditor;

        #[test]
        fn untouched_file_returns_seed() {
            let fx = StubEditor::new();
            let engine = fx.engine("exit 0\n");
            let seeds: [&[u8]; 4] = [b"", b"hello", b"multi\nline\r\nbody\n", &[0xff, 0x00]];
            for seed in seeds {
                let got = engine.capture(Some(seed), ScratchName::Fresh).unwrap();
                assert_eq!(got.content, seed);
                assert!(got.editor_error.is_none());
                assert!(fx.scratch_is_empty());
            }
        }

        #[test]
        fn missing_seed_gives_empty_file() {
            let fx = StubEditor::new();
            let got = fx
                .engine("exit 0\n")
                .capture(None, ScratchName::Fresh)
                .unwrap();
            assert!(got.content.is_empty());
        }

        #[test]
        fn overwritten_content_is_returned() {
            let fx = StubEditor::new();
            let engine = fx.engine("printf 'brand new' > \"$1\"\n");
            let got = engine
                .capture(Some(b"old body"), ScratchName::Post(PostId(42)))
                .unwrap();
            assert_eq!(got.content, b"brand new");
            assert!(got.editor_error.is_none());
            assert!(fx.scratch_is_empty());
        }

        #[test]
        fn non_zero_exit_still_returns_content() {
            let fx = StubEditor::new();
            let engine = fx.engine("printf 'saved anyway' > \"$1\"\nexit 3\n");
            let got = engine
                .capture(Some(b"old"), ScratchName::Post(PostId(42)))
                .unwrap();
            assert_eq!(got.content, b"saved anyway");
            assert!(matches!(
                got.editor_error,
                Some(CaptureError::EditorExitedWithError { code: Some(3) })
            ));
            assert!(fx.scratch_is_empty());
        }

        #[test]
        fn killed_editor_has_no_exit_code() {
            let fx = StubEditor::new();
            let engine = fx.engine("printf 'partial' > \"$1\"\nkill -KILL $$\n");
            let got = engine.capture(Some(b"old"), ScratchName::Fresh).unwrap();
            assert_eq!(got.content, b"partial");
            assert!(matches!(
                got.editor_error,
                Some(CaptureError::EditorExitedWithError { code: None })
            ));
            let err = got.editor_error.unwrap();
            assert!(err.to_string().contains("terminated by signal"), "{err}");
            assert!(fx.scratch_is_empty());
        }

        #[test]
        fn editor_replacing_the_file_is_handled() {
            let fx = StubEditor::new();
            let engine = fx.engine("rm \"$1\"\nprintf 'replaced' > \"$1\"\n");
            let got = engine.capture(Some(b"old"), ScratchName::Fresh).unwrap();
            assert_eq!(got.content, b"replaced");
            assert!(fx.scratch_is_empty());
        }

        #[test]
        fn editor_deleting_the_file_is_a_read_error() {
            let fx = StubEditor::new();
            let engine = fx.engine("rm \"$1\"\n");
            let err = engine
                .capture(Some(b"old"), ScratchName::Fresh)
                .unwrap_err();
            assert!(matches!(err, CaptureError::Scratch { action: "read", .. }));
            assert!(fx.scratch_is_empty());
        }

        #[test]
        fn editor_receives_named_scratch_file() {
            let fx = StubEditor::new();
            let record = fx.scripts.path().join("seen");
            let engine = fx.engine(&format!(
                "basename \"$1\" > '{}'\ncat \"$1\" >> '{}'\n",
                record.display(),
                record.display()
            ));
            engine
                .capture(Some(b"seeded"), ScratchName::Post(PostId(1234)))
                .unwrap();

            let seen = fs::read_to_string(&record).unwrap();
            let mut lines = seen.lines();
            let name = lines.next().unwrap();
            assert!(name.starts_with("0000001234."), "{name}");
            assert!(name.ends_with(".md"), "{name}");
            assert_eq!(lines.next(), Some("seeded"));
            assert!(!fx.scratch.path().join(name).exists());
        }

        #[test]
        fn missing_program_is_reported_distinctly() {
            let fx = StubEditor::new();
            let missing = "definitely-not-an-editor-7f3a";
            let engine = fx.engine_with(EditorPreference::from_command(missing));

            let err = engine.capture(Some(b"x"), ScratchName::Fresh).unwrap_err();
            match err {
                CaptureError::EditorNotFound { program } => assert_eq!(program, missing),
                other => panic!("unexpected error: {other:?}"),
            }
            assert!(fx.scratch_is_empty());
        }

        #[test]
        fn unlaunchable_program_is_a_launch_error() {
            let fx = StubEditor::new();
            let program = fx.scripts.path().join("not-executable");
            fs::write(&program, "#!/bin/sh\nexit 0\n").unwrap();
            let pref = EditorPreference::from_command(program.display().to_string());
            let engine = fx.engine_with(pref);

            let err = engine.capture(Some(b"x"), ScratchName::Fresh).unwrap_err();
            assert!(matches!(err, CaptureError::Launch { .. }), "{err:?}");
            assert!(fx.scratch_is_empty());
        }
    }
}
