//! Trait definitions for the external services a storyboard run depends on.
//!
//! The pipeline only ever talks to an [`Analyzer`] and an [`Imager`]. Concrete
//! backends live in `storyboard_models`; tests supply scripted mocks.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{Analyzer, Imager};
