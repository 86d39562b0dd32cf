//! File sinks and sources for synthesized and recorded audio.

use std::path::{Path, PathBuf};

use crate::error::{Result, VoiceError};

/// Extension of synthesized Ogg/Opus files.
pub const VOICE_FILE_EXTENSION: &str = "oga";

/// `<dir>/<file_id>.oga`
pub fn voice_file_path(dir: &Path, file_id: &str) -> Result<PathBuf> {
    if file_id.is_empty()
        || file_id == "."
        || file_id == ".."
        || file_id.contains(['/', '\\'])
    {
        return Err(VoiceError::InvalidArgument(format!(
            "Invalid voice file id: '{file_id}'"
        )));
    }
    Ok(dir.join(format!("{file_id}.{VOICE_FILE_EXTENSION}")))
}

/// Create (or truncate) the voice file. The directory must already exist.
pub async fn create_voice_file(dir: &Path, file_id: &str) -> Result<(PathBuf, tokio::fs::File)> {
    let path = voice_file_path(dir, file_id)?;
    let file = tokio::fs::File::create(&path).await?;
    Ok((path, file))
}

/// Open a recorded audio file for recognition.
pub async fn open_audio(path: &Path) -> Result<tokio::fs::File> {
    Ok(tokio::fs::File::open(path).await?)
}
