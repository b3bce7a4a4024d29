use crate::{AppError, AppResult, ConsoleCommand, display};

use std::{io::BufRead, panic::Location, time::Duration};

use drowse_guard_core::{MonitorCommand, MonitorStatus, TelemetryStore};
use error_location::ErrorLocation;
use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, instrument, warn};

const HELP_TEXT: &str = "\
Commands:
  start   begin monitoring
  stop    end monitoring
  status  print the current status and the plotted series
  reset   clear the plotted series
  help    print this help
  quit    exit";

/// Console front end.
///
/// Forwards typed commands to the monitor over its command channel and
/// prints status updates as they arrive on the watch channel. Dropping the
/// app (on quit) closes the command channel, which shuts the monitor down.
pub struct App {
    pub(crate) monitor_tx: mpsc::Sender<MonitorCommand>,
    pub(crate) status_rx: watch::Receiver<MonitorStatus>,
    pub(crate) store: TelemetryStore,
}

impl App {
    /// Run the console loop until quit or the monitor goes away.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!("Drowse-Guard console ready; type 'help' for commands");

        // Stdin forwarding via single persistent blocking task.
        //
        // stdin reads block, so a spawn_blocking task bridges them to the
        // async loop over an mpsc channel.
        //
        // Shutdown: when line_rx is dropped (main loop breaks), the next
        // blocking_send() fails, breaking the blocking loop.
        let (line_tx, mut line_rx) = mpsc::channel::<String>(32);
        let stdin_handle = tokio::task::spawn_blocking(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                match line {
                    Ok(line) => {
                        if line_tx.blocking_send(line).is_err() {
                            break;
                        }
                    }
                    Err(_) => break,
                }
            }
        });

        loop {
            tokio::select! {
                Some(line) = line_rx.recv() => {
                    match self.handle_line(&line).await {
                        Ok(true) => {}
                        Ok(false) => break,
                        Err(e) => {
                            error!(error = ?e, "Command handling failed");
                            break;
                        }
                    }
                }

                changed = self.status_rx.changed() => {
                    match changed {
                        Ok(()) => {
                            let status = self.status_rx.borrow_and_update().clone();
                            println!("{}", display::status_line(&status));
                        }
                        Err(_) => {
                            info!("Monitor status channel closed");
                            break;
                        }
                    }
                }

                else => break,
            }
        }

        drop(line_rx);

        // Best-effort join: the blocking task stays stuck in a stdin read
        // until the next line arrives. Use a timeout to avoid hanging; the
        // task is cleaned up on process exit regardless.
        match tokio::time::timeout(Duration::from_secs(1), stdin_handle).await {
            Ok(Ok(())) => debug!("Stdin forwarder stopped cleanly"),
            Ok(Err(e)) => warn!(error = ?e, "Stdin forwarder task panicked"),
            Err(_) => debug!(
                "Stdin forwarder did not stop within timeout, \
                 will be cleaned up on exit"
            ),
        }

        info!("Console loop finished");

        Ok(())
    }

    /// Handle one input line. Returns `false` when the user quits.
    async fn handle_line(&mut self, line: &str) -> AppResult<bool> {
        let Some(command) = ConsoleCommand::parse(line) else {
            if !line.trim().is_empty() {
                println!("Unrecognized command: {} (try 'help')", line.trim());
            }
            return Ok(true);
        };

        match command {
            ConsoleCommand::Start => self.forward(MonitorCommand::Start).await?,
            ConsoleCommand::Stop => self.forward(MonitorCommand::Stop).await?,
            ConsoleCommand::Status => {
                println!("{}", display::status_line(&self.status_rx.borrow().clone()));
                println!("{}", display::render_series(&self.store.snapshot()));
            }
            ConsoleCommand::Reset => {
                self.store.reset();
                println!("Telemetry series cleared");
            }
            ConsoleCommand::Help => println!("{}", HELP_TEXT),
            ConsoleCommand::Quit => {
                info!("Quit requested");
                return Ok(false);
            }
        }

        Ok(true)
    }

    async fn forward(&self, command: MonitorCommand) -> AppResult<()> {
        self.monitor_tx
            .send(command)
            .await
            .map_err(|e| AppError::ChannelSendFailed {
                message: format!("Failed to send monitor command: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
