//! Terminal UI for kerbside that lets users look up bin schedules and view
//! collection outlooks.

mod app;
mod input;
mod ui;

use std::{io, sync::Arc, time::Duration as StdDuration};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use kerbside_core::{plugin::RegionRegistry, service::KerbsideService};
use kerbside_provider_sydney as sydney;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::input::Action;

#[tokio::main]
async fn main() -> Result<()> {
    // Directory + service setup
    let plugins = vec![sydney::plugin()];
    let registry = Arc::new(RegionRegistry::new(plugins));
    let service = Arc::new(KerbsideService::new(registry));

    // App state
    let app = App::new(service);

    // Terminal init
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run event loop
    let res = run(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

async fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        // Draw current UI
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Poll for input (non-blocking, small timeout to keep CPU low)
        if event::poll(StdDuration::from_millis(100))?
            && let CEvent::Key(key) = event::read()?
        {
            let action = input::handle_key_event(key, &mut app);

            match action {
                Action::Quit => break,
                Action::None => {}
                Action::SearchSchedules => {
                    // Needs a region & non-empty query
                    let fragment = app.search_input.trim().to_owned();
                    if fragment.is_empty() {
                        app.error_message =
                            Some("Type part of a street address, then press Enter".into());
                        continue;
                    }

                    let Some(region) = app.selected_region.clone() else {
                        app.error_message = Some("Select a region first".into());
                        continue;
                    };

                    app.is_loading = true;
                    app.error_message = None;
                    terminal.draw(|frame| ui::draw(frame, &app))?;

                    let res = app.service.search_bins(region, &fragment).await;

                    app.is_loading = false;
                    match res {
                        Ok(bins) => {
                            app.search_results = bins;
                            app.result_list_index = 0;
                            app.outlook = None;
                        }
                        Err(err) => {
                            app.error_message = Some(format!("Search failed: {err}"));
                        }
                    }
                }
                Action::LoadOutlookForSelection => {
                    let Some(region) = app.selected_region.clone() else {
                        app.error_message = Some("Select a region first".into());
                        continue;
                    };

                    let Some(suburb) = app.select_current_result() else {
                        app.error_message =
                            Some("No schedule selected (search and pick one first)".into());
                        continue;
                    };

                    app.is_loading = true;
                    app.error_message = None;
                    terminal.draw(|frame| ui::draw(frame, &app))?;

                    let res = app
                        .service
                        .outlook_for_suburb(region, &suburb, App::now(), App::HORIZON_WEEKS)
                        .await;

                    app.is_loading = false;
                    match res {
                        Ok(outlook) => {
                            app.outlook = Some(outlook);
                        }
                        Err(err) => {
                            app.outlook = None;
                            app.error_message = Some(format!("Failed to load outlook: {err}"));
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
