//! The terminal event loop.

use colgrid_term::{Event, Terminal, convert_event};
use crossterm::event::EventStream;
use futures::StreamExt;
use log::{debug, info, trace};

use crate::app::App;
use crate::error::DemoError;

/// Run until the app asks to quit or the input stream closes.
pub async fn run(mut app: App) -> Result<(), DemoError> {
    let mut terminal = Terminal::new()?;
    let mut events = EventStream::new();
    let (mut width, mut height) = terminal.size();

    draw(&mut terminal, &mut app, width, height)?;
    info!("Event loop started");

    while let Some(event) = events.next().await {
        let Some(event) = convert_event(event?) else {
            continue;
        };
        trace!("Event: {:?}", event);

        if let Event::Resize {
            width: w,
            height: h,
        } = event
        {
            width = w;
            height = h;
            terminal.resize(w, h)?;
        }

        let redraw = app.handle(event);
        if app.should_quit() {
            debug!("Quit requested");
            break;
        }
        if redraw {
            draw(&mut terminal, &mut app, width, height)?;
        }
    }

    info!("Event loop stopped");
    Ok(())
}

fn draw(terminal: &mut Terminal, app: &mut App, width: u16, height: u16) -> Result<(), DemoError> {
    let buf = app.frame(width, height);
    terminal.draw(&buf)?;
    Ok(())
}
