use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use kartu_kata::{build_selector, logger, ui, App, AppConfig, Flow, QuestionResponse};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{self, UnboundedReceiver};

const TICK_RATE: Duration = Duration::from_millis(50);

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    logger::init(&config.log_file)?;
    tracing::info!(strategy = ?config.strategy, "starting kartu kata");

    let selector = build_selector(&config)?;
    let (tx, rx) = mpsc::unbounded_channel();
    let app = App::new(selector, tx);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, app, rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "event loop failed");
    }
    tracing::info!("exiting");
    result?;
    Ok(())
}

async fn run(
    terminal: &mut Tui,
    mut app: App,
    mut rx: UnboundedReceiver<QuestionResponse>,
) -> io::Result<()> {
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(TICK_RATE);

    loop {
        terminal.draw(|f| ui::draw(f, &app, Instant::now()))?;
        let animating = app.needs_tick(Instant::now());

        tokio::select! {
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    if app.handle_key(key, Instant::now()) == Flow::Quit {
                        break;
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e),
                None => break,
            },
            Some(response) = rx.recv() => app.apply_response(response),
            _ = ticker.tick(), if animating => {}
        }
    }

    Ok(())
}
