//! Timestamped export files.

use crate::{descriptions_text, images_archive, report_html, script_text};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use storyboard_core::Scene;
use storyboard_error::{ExportError, ExportErrorKind, StoryboardResult};
use tracing::{info, instrument};

/// The four downloadable bundles.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ExportKind {
    /// Zip of every rendered image
    Images,
    /// Numbered script segments
    Script,
    /// Localized and English prompts
    Descriptions,
    /// HTML report
    Report,
}

impl ExportKind {
    /// File name for this bundle at `timestamp` (milliseconds since the epoch).
    pub fn file_name(&self, timestamp: i64) -> String {
        match self {
            ExportKind::Images => format!("storyboard_images_{}.zip", timestamp),
            ExportKind::Script => format!("script_{}.txt", timestamp),
            ExportKind::Descriptions => format!("descriptions_{}.txt", timestamp),
            ExportKind::Report => format!("storyboard_report_{}.html", timestamp),
        }
    }
}

/// A frozen scene list plus the timestamp its files are named after.
///
/// # Example
///
/// ```rust,ignore
/// use storyboard_export::{ExportBundle, ExportKind};
///
/// let bundle = ExportBundle::new(orchestrator.scenes());
/// let written = bundle.write_to_dir("out", &[ExportKind::Images, ExportKind::Report]).await?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportBundle {
    scenes: Vec<Scene>,
    timestamp: i64,
}

impl ExportBundle {
    /// Bundle named after the current time.
    pub fn new(scenes: Vec<Scene>) -> Self {
        Self::with_timestamp(scenes, chrono::Utc::now().timestamp_millis())
    }

    /// Bundle named after an explicit timestamp.
    pub fn with_timestamp(scenes: Vec<Scene>, timestamp: i64) -> Self {
        Self { scenes, timestamp }
    }

    /// Timestamp used in file names.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Scenes being exported.
    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    /// File name of one bundle.
    pub fn file_name(&self, kind: ExportKind) -> String {
        kind.file_name(self.timestamp)
    }

    /// File contents of one bundle.
    ///
    /// # Errors
    ///
    /// Only the image archive can fail.
    pub fn render(&self, kind: ExportKind) -> StoryboardResult<Vec<u8>> {
        Ok(match kind {
            ExportKind::Images => images_archive(&self.scenes)?,
            ExportKind::Script => script_text(&self.scenes).into_bytes(),
            ExportKind::Descriptions => descriptions_text(&self.scenes).into_bytes(),
            ExportKind::Report => report_html(&self.scenes).into_bytes(),
        })
    }

    /// Write the requested bundles into `dir`, creating it if needed.
    ///
    /// Returns the written paths in request order.
    ///
    /// # Errors
    ///
    /// Returns an export error if a bundle cannot be built or written.
    #[instrument(skip(self, dir), fields(dir = %dir.as_ref().display(), timestamp = self.timestamp))]
    pub async fn write_to_dir(
        &self,
        dir: impl AsRef<Path>,
        kinds: &[ExportKind],
    ) -> StoryboardResult<Vec<PathBuf>> {
        let dir = dir.as_ref();
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| write_error(dir, e))?;

        let mut written = Vec::with_capacity(kinds.len());
        for kind in kinds {
            let path = dir.join(self.file_name(*kind));
            let bytes = self.render(*kind)?;
            tokio::fs::write(&path, bytes)
                .await
                .map_err(|e| write_error(&path, e))?;
            info!(kind = %kind, path = %path.display(), "Export written");
            written.push(path);
        }
        Ok(written)
    }
}

fn write_error(path: &Path, e: std::io::Error) -> ExportError {
    ExportError::new(ExportErrorKind::Write {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
