mod config;
mod debug;
mod interactive;
mod monitor;
mod nav;
mod session;
mod types;
mod ui;

use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use chrono::Local;
use clap::Parser;
use crossterm::event::{self, Event};
use reqwest::Url;
use tokio::sync::mpsc;

use config::{Cli, reset_config};
use debug::{debug_log, init_debug};
use interactive::run_interactive_mode;
use monitor::MonitorEvent;
use session::SessionClient;
use types::{App, NetEvent, StatusReport};

fn display_startup_info(url: &str, authenticated: bool, interval_secs: u64) {
    eprintln!("🚀 Starting sessionwatch...");
    eprintln!("🌐 Application: {}", url);
    eprintln!(
        "🔑 Session: {}",
        if authenticated {
            "cookie configured"
        } else {
            "no cookie (status checks disabled)"
        }
    );
    eprintln!(
        "⏱️  Checking session status every {} seconds... (Press 'q' to quit)",
        interval_secs
    );
    eprintln!();
    eprintln!("🎯 Tip: Press 'e' to extend the session, 'p' to preview another page path");
    eprintln!();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_debug(cli.debug);

    // Handle reset flag first
    if cli.reset {
        match reset_config() {
            Ok(true) => {
                println!("✅ Saved configuration has been reset.");
                println!("   Next time you run the program, you'll see the full setup again.");
            }
            Ok(false) => {
                println!("ℹ️  No saved configuration found to reset.");
            }
            Err(e) => {
                eprintln!("❌ Error resetting configuration: {}", e);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    // Resolve configuration: flags win, otherwise saved config or the
    // interactive setup
    let (url, cookie, path) = if let Some(url) = cli.url.clone() {
        (
            url,
            cli.cookie.clone().unwrap_or_default(),
            cli.path.clone().unwrap_or_else(|| "/".to_string()),
        )
    } else {
        match run_interactive_mode()? {
            Some(setup) => (
                setup.url,
                cli.cookie.clone().unwrap_or(setup.cookie),
                cli.path.clone().unwrap_or(setup.path),
            ),
            None => {
                // User cancelled or quit
                return Ok(());
            }
        }
    };

    let base = Url::parse(&url).context("invalid application URL")?;
    let authenticated = !cookie.is_empty();
    let client = if authenticated {
        Some(SessionClient::new(&base, cookie)?)
    } else {
        None
    };

    // One-shot JSON status report
    if cli.json {
        let Some(client) = &client else {
            bail!("--json needs a session cookie (use --cookie)");
        };
        let status = client.fetch_status().await?;
        let report = StatusReport {
            base_url: url.clone(),
            expiring: status.expiring,
            remaining_minutes: status.remaining_minutes,
            checked_at: Local::now(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    display_startup_info(&url, authenticated, cli.interval);

    // Small delay to let user read the information
    std::thread::sleep(Duration::from_millis(1500));

    let poll_interval = Duration::from_secs(cli.interval.max(1));
    let (tx, mut rx) = mpsc::channel::<NetEvent>(16);

    // Spawn the status poller; without a cookie there is nothing to poll
    if let Some(poll_client) = client.clone() {
        let poll_tx = tx.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(poll_interval);
            loop {
                ticker.tick().await;
                let result = poll_client.fetch_status().await;
                if poll_tx.send(NetEvent::Status(result)).await.is_err() {
                    // Receiver gone; stop polling
                    break;
                }
            }
        });
    }

    let mut app = App::new(url, authenticated, poll_interval, path);
    let mut terminal = ui::setup_terminal()?;

    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();

    loop {
        // --- Draw UI ---
        ui::render_ui(&app, &mut terminal)?;

        // --- Input Handling ---
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(event) => {
                    if event.kind == crossterm::event::KeyEventKind::Press {
                        // Any keypress counts as user activity before it does
                        // anything else
                        app.dispatch(MonitorEvent::UserActivity);
                        if ui::input::handle_key_event(&mut app, event.code) {
                            break; // Exit condition
                        }
                    }
                }
                Event::Mouse(_) => {
                    // Clicks, wheel scrolling, and movement all count as
                    // activity
                    app.dispatch(MonitorEvent::UserActivity);
                }
                _ => {}
            }
        }

        // --- Tick-based updates ---
        if last_tick.elapsed() >= tick_rate {
            // Drain pending network results
            while let Ok(net_event) = rx.try_recv() {
                match net_event {
                    NetEvent::Status(Ok(status)) => {
                        app.checks_run += 1;
                        app.last_check = Some(Local::now());
                        app.last_check_instant = Some(Instant::now());
                        app.dispatch(MonitorEvent::StatusChecked(status));
                    }
                    NetEvent::Status(Err(e)) => {
                        app.checks_run += 1;
                        app.check_failures += 1;
                        app.last_check = Some(Local::now());
                        app.last_check_instant = Some(Instant::now());
                        debug_log(&format!("Session status check failed: {}", e));
                        app.dispatch(MonitorEvent::StatusCheckFailed);
                    }
                    NetEvent::Extend(Ok(())) => {
                        app.extend_in_flight = false;
                        app.dispatch(MonitorEvent::ExtendSucceeded);
                    }
                    NetEvent::Extend(Err(e)) => {
                        app.extend_in_flight = false;
                        debug_log(&format!("Failed to extend session: {}", e));
                        app.dispatch(MonitorEvent::ExtendFailed);
                    }
                }
            }

            // Launch a requested extend call
            if app.extend_requested && !app.extend_in_flight {
                app.extend_requested = false;
                if let Some(extend_client) = client.clone() {
                    app.extend_in_flight = true;
                    let extend_tx = tx.clone();
                    tokio::spawn(async move {
                        let _ = extend_tx
                            .send(NetEvent::Extend(extend_client.extend().await))
                            .await;
                    });
                }
            }

            // The warning modal hides itself after its deadline
            if app.warning_timed_out() {
                app.dispatch(MonitorEvent::WarningTimedOut);
            }

            // Drop toasts whose display time is over
            app.prune_toasts();

            last_tick = Instant::now();
        }
    }

    ui::restore_terminal(&mut terminal)?;
    Ok(())
}
