//! Generation pipeline for storyboard runs.
//!
//! A run goes through three stages:
//!
//! 1. **Analysis**: one [`Analyzer`](storyboard_interface::Analyzer) call turns the
//!    script into scene records plus a shared style guide and character profile.
//! 2. **Planning**: [`ScenePlan::materialize`] truncates the records to the target
//!    count and creates one pending [`Scene`](storyboard_core::Scene) per record.
//! 3. **Rendering**: [`GenerationOrchestrator`] walks the scenes strictly in order,
//!    one [`Imager`](storyboard_interface::Imager) call at a time, pausing between
//!    requests and checking for cancellation at every scene boundary.
//!
//! Scenes live in a [`SceneBoard`], an id-keyed arena whose only mutation is a
//! single-slot replace. The main pass and per-scene regeneration therefore never
//! touch each other's slots.
//!
//! Observers subscribe to [`BoardEvent`]s or take a [`RunSnapshot`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod board;
mod events;
mod orchestrator;
mod plan;
mod state;

pub use board::SceneBoard;
pub use events::BoardEvent;
pub use orchestrator::{EVENT_CAPACITY, GenerationOrchestrator};
pub use plan::ScenePlan;
pub use state::{RunPhase, RunSnapshot, RunSummary};
