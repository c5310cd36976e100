use std::io::IsTerminal;
use std::sync::Mutex;

use cointrack::CointrackError;
use cointrack::config::{AppConfig, fetch_config};
use cointrack::fetcher::HttpFetcher;
use cointrack::poller::{PollState, Poller};
use cointrack::tui::event::{spawn_event_reader, spawn_tick_timer, update};
use cointrack::tui::{App, Message, render, restore_terminal, setup_terminal};
use tokio::sync::mpsc;
use tracing::{info, warn};

/// UI refresh rate for the spinner and the "updated Ns ago" label.
const UI_TICK_MS: u64 = 250;

#[tokio::main]
async fn main() -> Result<(), CointrackError> {
    let app_config = fetch_config()?;

    let plain = std::env::args().any(|arg| arg == "--plain") || !std::io::stdout().is_terminal();

    if plain {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .init();
        run_plain(app_config).await
    } else {
        // The dashboard owns stdout, so logs go to a file.
        let file = std::fs::File::create(&app_config.log_file).map_err(|e| {
            CointrackError::Io(format!(
                "failed to open log file {}: {e}",
                app_config.log_file.display()
            ))
        })?;
        tracing_subscriber::fmt()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
        run_dashboard(app_config).await
    }
}

/// Logs every published state until Ctrl-C.
async fn run_plain(app_config: AppConfig) -> Result<(), CointrackError> {
    let (tx, mut rx) = mpsc::unbounded_channel::<PollState>();
    let fetcher = HttpFetcher::new(app_config.endpoint.clone());
    let mut poller = Poller::start(&app_config.poll, fetcher, move |state: PollState| {
        let _ = tx.send(state);
    });

    loop {
        tokio::select! {
            state = rx.recv() => match state {
                Some(PollState::Loading) => info!("Loading"),
                Some(PollState::Ready(snapshot)) => {
                    for record in snapshot.iter() {
                        info!(
                            rank = %record.rank,
                            price = %cointrack::format::price_label(record.price_usd.as_deref()),
                            change = %cointrack::format::change_label(
                                record.change_percent_24hr.as_deref()
                            ),
                            "{}",
                            record.name
                        );
                    }
                }
                Some(PollState::Failed(reason)) => warn!("{reason}"),
                None => break,
            },
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    poller.stop();
    Ok(())
}

/// Runs the terminal dashboard until the user quits.
async fn run_dashboard(app_config: AppConfig) -> Result<(), CointrackError> {
    let mut terminal = setup_terminal()?;

    let (tx, mut rx) = mpsc::unbounded_channel::<Message>();
    spawn_event_reader(tx.clone());
    spawn_tick_timer(tx.clone(), UI_TICK_MS);

    let fetcher = HttpFetcher::new(app_config.endpoint.clone());
    let poll_tx = tx.clone();
    let mut poller = Poller::start(&app_config.poll, fetcher, move |state: PollState| {
        let _ = poll_tx.send(Message::Poll(state));
    });
    drop(tx);

    let mut app = App::new(&app_config.poll);
    info!(endpoint = %app_config.endpoint, "Dashboard started");

    let result = loop {
        if let Err(e) = terminal.draw(|frame| render(frame, &app)) {
            break Err(CointrackError::Io(format!("failed to draw frame: {e}")));
        }

        match rx.recv().await {
            Some(message) => update(&mut app, message),
            None => break Ok(()),
        }

        if app.should_quit {
            break Ok(());
        }
    };

    // Stop before restoring so no state lands after teardown.
    poller.stop();
    restore_terminal(&mut terminal)?;
    result
}
