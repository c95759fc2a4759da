//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use storyboard::ExportKind;

/// Storyboard - turn a narration script into a rendered storyboard
#[derive(Parser, Debug)]
#[command(name = "storyboard")]
#[command(about = "Turn a narration script into a rendered storyboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a script and render every scene
    Generate(GenerateArgs),

    /// Print the target scene count for a script without calling any service
    Estimate {
        /// Script source
        #[command(flatten)]
        script: ScriptArgs,

        /// Scene density: essential, standard or detailed
        #[arg(long, default_value = "standard")]
        detail: String,

        /// Manual scene count (0 derives it from the density)
        #[arg(long, default_value_t = 0)]
        scenes: u32,
    },

    /// List style presets and directing tags
    Presets,
}

/// Where the script comes from.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct ScriptArgs {
    /// Read the script from a file
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Pass the script inline
    #[arg(long)]
    pub text: Option<String>,
}

/// Options of the `generate` command.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Script source
    #[command(flatten)]
    pub script: ScriptArgs,

    /// Style preset id (see `storyboard presets`)
    #[arg(long)]
    pub preset: Option<String>,

    /// Free-text style; overrides the preset
    #[arg(long)]
    pub custom_style: Option<String>,

    /// Aspect ratio: 9:16, 16:9, 3:4, 4:3 or 1:1
    #[arg(long, default_value = "9:16")]
    pub aspect_ratio: String,

    /// Scene density: essential, standard or detailed
    #[arg(long, default_value = "standard")]
    pub detail: String,

    /// Manual scene count (0 derives it from the density)
    #[arg(long, default_value_t = 0)]
    pub scenes: u32,

    /// Main character description
    #[arg(long)]
    pub character: Option<String>,

    /// Style reference image
    #[arg(long)]
    pub style_image: Option<PathBuf>,

    /// Character reference image
    #[arg(long)]
    pub character_image: Option<PathBuf>,

    /// Informational mode without human protagonists
    #[arg(long)]
    pub non_humanoid: bool,

    /// Visual emphasis: auto, character or script
    #[arg(long, default_value = "auto")]
    pub focus: String,

    /// Free-text directing instructions applied to every scene
    #[arg(long)]
    pub instructions: Option<String>,

    /// Directing tag to add (repeatable, see `storyboard presets`)
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Settings file (defaults to the layered storyboard.toml lookup)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Rate limit tier (defaults to the provider's default tier)
    #[arg(long)]
    pub tier: Option<String>,

    /// Output directory for exports
    #[arg(long, default_value = "storyboard_out")]
    pub out: PathBuf,

    /// Bundles to write, comma separated: images, script, descriptions, report
    #[arg(long, value_delimiter = ',', default_value = "images,script,descriptions,report")]
    pub export: Vec<ExportKind>,

    /// Retry every failed scene once after the main pass
    #[arg(long)]
    pub regenerate_failed: bool,
}
