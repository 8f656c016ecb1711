use super::{BodySource, CmdMessage, CmdResult};
use crate::editor::{CaptureEngine, ScratchName};
use crate::error::{DocbaseError, Result};
use std::fs;
use std::io;

const INVALID_UTF8_WARNING: &str = "edited content is not valid UTF-8; invalid bytes were replaced";

/// Produces the body text for a create or update.
///
/// Editor output is never thrown away: when the editor exits with an error, or
/// saves bytes that are not UTF-8, the text is still used and a warning is
/// added to `result`.
pub fn resolve_body(
    source: &BodySource,
    engine: &CaptureEngine,
    seed: Option<&str>,
    name: ScratchName,
    result: &mut CmdResult,
) -> Result<String> {
    match source {
        BodySource::Inline(body) => Ok(body.clone()),
        BodySource::File(path) => fs::read_to_string(path).map_err(|e| {
            DocbaseError::Io(io::Error::new(
                e.kind(),
                format!("can't open {:?}: {}", path.display().to_string(), e),
            ))
        }),
        BodySource::Editor => {
            let captured = engine.capture(seed.map(str::as_bytes), name)?;
            if let Some(err) = &captured.editor_error {
                result.add_message(CmdMessage::warning(format!(
                    "{}; using the content saved so far",
                    err
                )));
            }
            match String::from_utf8(captured.content) {
                Ok(body) => Ok(body),
                Err(err) => {
                    result.add_message(CmdMessage::warning(INVALID_UTF8_WARNING));
                    Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
                }
            }
        }
    }
}
