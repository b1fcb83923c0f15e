//! Timeline command - windowed browsing by date

use crate::{
    FotoreelError,
    cli::{StepArgs, TimelineCommands},
    commands::present,
    config::FotoreelConfig,
    models::load_buckets,
    output,
    timeline::{SessionSettings, TimelineSession, ViewportSignal},
};
use std::path::Path;

type Result<T> = std::result::Result<T, FotoreelError>;

/// Execute a timeline subcommand
///
/// # Errors
/// Returns an error if the payload cannot be loaded, a jump targets an
/// unknown date, or the start item is not in the payload.
pub fn execute(command: &TimelineCommands, config: &FotoreelConfig, quiet: bool) -> Result<()> {
    match command {
        TimelineCommands::Window {
            payload,
            jump,
            extend_top,
            extend_bottom,
            viewport_height,
        } => show_window(
            payload,
            &WindowRequest {
                jump: jump.as_deref(),
                extend_top: extend_top.unwrap_or(0),
                extend_bottom: extend_bottom.unwrap_or(0),
                viewport_height: *viewport_height,
            },
            config,
            quiet,
        ),
        TimelineCommands::Present { payload, steps } => present_timeline(payload, steps, config, quiet),
    }
}

/// Signals to replay against a fresh session
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowRequest<'a> {
    pub jump: Option<&'a str>,
    pub extend_top: usize,
    pub extend_bottom: usize,
    pub viewport_height: u32,
}

/// Replay `request` against a session and return it
///
/// # Errors
/// Returns an error if the jump target is not a known date.
pub fn replay(session: &mut TimelineSession, request: &WindowRequest<'_>, section_height: u32) -> Result<()> {
    if let Some(date) = request.jump {
        session.handle(ViewportSignal::JumpTo(date.to_string()))?;
    }
    for _ in 0..request.extend_top {
        session.handle(ViewportSignal::ScrolledNearTop)?;
    }
    for _ in 0..request.extend_bottom {
        session.handle(ViewportSignal::ScrolledNearBottom)?;
    }
    session.preload(request.viewport_height, section_height);
    Ok(())
}

fn show_window(payload: &Path, request: &WindowRequest<'_>, config: &FotoreelConfig, quiet: bool) -> Result<()> {
    let buckets = load_buckets(payload)?;
    let mut session = TimelineSession::new(buckets, SessionSettings::from(config))?;
    replay(&mut session, request, config.section_height_px)?;

    let window = session.window();
    if window.index().is_empty() {
        if !quiet {
            println!("No dates in payload.");
        }
        return Ok(());
    }

    if !quiet {
        println!("{}", output::window_status(window.range(), window.index().len()));
    }
    for section in session.sections() {
        println!("{}", output::day_section(&section, quiet));
    }
    Ok(())
}

fn present_timeline(payload: &Path, steps: &StepArgs, config: &FotoreelConfig, quiet: bool) -> Result<()> {
    let buckets = load_buckets(payload)?;
    let session = TimelineSession::new(buckets, SessionSettings::from(config))?;
    let sequence = session.open_presentation(steps.start)?;

    present::step_through(sequence, steps, quiet);
    Ok(())
}
