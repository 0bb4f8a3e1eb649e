pub mod app;
mod components;
mod event;
mod tui;
mod ui;

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use app::App;
use crossterm::event::{Event as CrosstermEvent, EventStream};
use event::Event;
use futures_util::StreamExt;
use log::{error, info};
use scai::config::AppConfig;
use scai::logging;
use scai::particles::FrameScheduler;
use tui::Tui;
use ui::render;

#[tokio::main]
async fn main() -> Result<()> {
    let workspace_root = env::current_dir().context("cannot determine the working directory")?;
    let config = AppConfig::load(&workspace_root)?;
    logging::init(&config.logging, &workspace_root)?;
    info!("scai starting in {}", workspace_root.display());

    let mut tui = tui::init()?;
    let result = run(&mut tui, workspace_root, config).await;
    tui::restore()?;
    if let Err(err) = &result {
        error!("scai stopped with an error: {err:#}");
    }
    result
}

async fn run(tui: &mut Tui, workspace_root: PathBuf, config: AppConfig) -> Result<()> {
    let mut app = App::new(workspace_root, config, tui.size()?)?;
    let mut scheduler = FrameScheduler::new(app.config.field.frame_interval(), app.render_loop());
    let mut stream = EventStream::new();
    let mut needs_redraw = true;

    while !app.should_quit {
        if needs_redraw {
            tui.draw(|frame| render(frame, &mut app))?;
        }

        let event = tokio::select! {
            slot = scheduler.next_frame() => match slot {
                Some(now) => Event::Frame(now),
                // The render loop was cancelled.
                None => break,
            },
            maybe_event = stream.next() => {
                match maybe_event {
                    Some(Ok(CrosstermEvent::Key(key))) => Event::Key(key),
                    Some(Ok(CrosstermEvent::Mouse(mouse))) => Event::Mouse(mouse),
                    Some(Ok(CrosstermEvent::Resize(width, height))) => Event::Resize(width, height),
                    Some(Ok(_)) => continue,
                    Some(Err(err)) => {
                        error!("terminal event stream failed: {err}");
                        break;
                    }
                    None => break,
                }
            }
        };

        // Pointer moves only touch state; redraws stay on the frame cadence.
        needs_redraw = match event {
            Event::Frame(now) => app.on_frame(now),
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => {
                app.handle_mouse(mouse);
                false
            }
            Event::Resize(width, height) => {
                app.resize(width, height);
                true
            }
        };
    }

    app.quit();
    info!("scai shutting down");
    Ok(())
}
