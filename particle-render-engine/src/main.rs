use clap::Parser;

mod engine;

use engine::core::app_setup::create_app;
use engine::core::app_state::ViewerOptions;

/// Animated particle-cloud viewer for glTF models.
#[derive(Parser, Debug)]
#[command(name = "particle-render-engine")]
struct Cli {
    /// Enable the debug overlay: orbit camera, FPS readout, axis gizmo.
    #[arg(long)]
    debug: bool,

    /// Override the model path from the scene manifest.
    #[arg(long)]
    model: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    create_app(ViewerOptions {
        debug: cli.debug,
        model_override: cli.model,
    })
    .run();
}
