//! Headless trace replay tool.
//!
//! Feeds a recorded pointer trace through the ink engine and prints the
//! surviving path primitives, one per line. Useful for debugging capture and
//! erase behavior without a rendering backend.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use inkboard::Config;
use inkboard::draw::VectorSurface;
use inkboard::input::{EditingMode, InkState, PointerEvent};
use inkboard::ui::AlwaysConfirm;
use inkboard::util::SurfaceRect;

#[derive(Parser, Debug)]
#[command(name = "inkboard")]
#[command(version, about = "Replay a pointer trace through the ink capture/erase engine")]
struct Cli {
    /// Pointer trace to replay (JSON array of event records)
    trace: PathBuf,

    /// Initial editing mode (drag, draw, or erase)
    #[arg(long, short = 'm', value_name = "MODE")]
    mode: Option<String>,

    /// Alternate configuration file
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,
}

/// One record of a pointer trace.
///
/// Pointer-carrying records flatten the event fields, so a record looks like
/// `{"event": "down", "client_x": 10.0, "client_y": 10.0, "buttons": 1}`.
#[derive(Debug, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
enum TraceRecord {
    Down {
        #[serde(flatten)]
        pointer: PointerEvent,
    },
    Move {
        #[serde(flatten)]
        pointer: PointerEvent,
    },
    Up,
    Leave,
    Enter {
        #[serde(flatten)]
        pointer: PointerEvent,
    },
    Mode {
        mode: String,
    },
    Clear,
}

fn parse_mode(name: &str) -> Result<EditingMode> {
    EditingMode::from_name(name).ok_or_else(|| {
        anyhow::anyhow!("unknown editing mode '{name}' (expected drag, draw, or erase)")
    })
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let mut state = InkState::with_config(VectorSurface::new(), &config);
    if let Some(name) = &cli.mode {
        state.switch_mode(parse_mode(name)?);
    }

    let raw = fs::read_to_string(&cli.trace)
        .with_context(|| format!("Failed to read trace file {}", cli.trace.display()))?;
    let records: Vec<TraceRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse trace file {}", cli.trace.display()))?;

    // Traces carry surface-local coordinates already.
    let rect = SurfaceRect::at_origin(0.0, 0.0);
    let mut confirm = AlwaysConfirm;

    log::info!("replaying {} trace record(s)", records.len());
    for record in records {
        match record {
            TraceRecord::Down { pointer } => state.on_pointer_down(&pointer, &rect),
            TraceRecord::Move { pointer } => state.on_pointer_move(&pointer, &rect),
            TraceRecord::Up => state.on_pointer_up(),
            TraceRecord::Leave => state.on_pointer_leave(),
            TraceRecord::Enter { pointer } => state.on_pointer_enter(&pointer, &rect),
            TraceRecord::Mode { mode } => state.switch_mode(parse_mode(&mode)?),
            TraceRecord::Clear => state.clear_canvas_with_confirm(&mut confirm),
        }
    }

    for primitive in state.surface.paths() {
        println!("{} {}", primitive.fill().to_css(), primitive.data());
    }

    Ok(())
}
