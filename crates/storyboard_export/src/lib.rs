//! Downloadable bundles of a finished storyboard.
//!
//! Every export is a read-only view of an ordered scene list:
//!
//! - [`images_archive`]: zip of `images/scene_NN.<ext>`, one entry per rendered scene
//! - [`script_text`]: the script split into numbered scenes
//! - [`descriptions_text`]: localized and English directing notes per scene
//! - [`report_html`]: a self-contained page with every image, script and prompt
//!
//! [`ExportBundle`] names the files after one timestamp and writes them to disk.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod archive;
mod bundle;
mod report;
mod text;

pub use archive::{image_entry_name, images_archive};
pub use bundle::{ExportBundle, ExportKind};
pub use report::report_html;
pub use text::{descriptions_text, script_text};
