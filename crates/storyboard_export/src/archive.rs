//! Image archive export.

use std::io::{Cursor, Write};
use storyboard_core::{ImagePayload, Scene};
use storyboard_error::{ExportError, ExportErrorKind, StoryboardResult};
use tracing::{debug, instrument};
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

/// Archive path of the image of the scene at list position `index` (0-based).
///
/// ```
/// use storyboard_core::ImagePayload;
/// use storyboard_export::image_entry_name;
///
/// let jpeg = ImagePayload::from_bytes("image/jpeg", b"jpg").unwrap();
/// assert_eq!(image_entry_name(0, &jpeg), "images/scene_01.jpg");
/// ```
pub fn image_entry_name(index: usize, image: &ImagePayload) -> String {
    format!("images/scene_{:02}.{}", index + 1, image.extension())
}

fn archive_error(e: impl std::fmt::Display) -> ExportError {
    ExportError::new(ExportErrorKind::Archive(e.to_string()))
}

/// Zip every rendered image. Scenes without an image are skipped but keep
/// their number, so entry names always match list positions.
///
/// # Errors
///
/// Returns an export error if an image cannot be decoded or the archive cannot
/// be written.
#[instrument(skip(scenes), fields(scene_count = scenes.len()))]
pub fn images_archive(scenes: &[Scene]) -> StoryboardResult<Vec<u8>> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    // images are already compressed
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    let mut entries = 0usize;
    for (index, scene) in scenes.iter().enumerate() {
        let Some(image) = scene.image() else {
            continue;
        };
        let bytes = image.decode().map_err(|e| {
            ExportError::new(ExportErrorKind::ImageData {
                scene: index + 1,
                message: e.to_string(),
            })
        })?;
        writer
            .start_file(image_entry_name(index, image), options)
            .map_err(archive_error)?;
        writer.write_all(&bytes).map_err(archive_error)?;
        entries += 1;
    }

    let cursor = writer.finish().map_err(archive_error)?;
    debug!(entries, "Image archive built");
    Ok(cursor.into_inner())
}
