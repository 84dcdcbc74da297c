use std::io::BufRead;
use std::thread::JoinHandle;

use kanal::{AsyncSender, Sender};
use lingo_types::AppEvent;

use crate::cli::{ShellCommand, ShellLine};

/// Read shell commands from stdin on a dedicated thread.
/// The thread is detached so a pending read never holds up process exit.
pub fn spawn_shell_io(
    ui_to_app_tx: AsyncSender<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> std::io::Result<JoinHandle<()>> {
    let requests = ui_to_app_tx.to_sync();
    let notices = app_to_ui_tx.to_sync();

    std::thread::Builder::new()
        .name("lingo-shell".into())
        .spawn(move || {
            tracing::info!("Shell ready, type `help` for commands or `quit` to leave");
            shell_io(std::io::stdin().lock(), &requests, &notices);
        })
}

/// Forward each parsed line as a request; EOF or `quit` ends with `Shutdown`
pub fn shell_io(input: impl BufRead, requests: &Sender<AppEvent>, notices: &Sender<AppEvent>) {
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::error!("Failed to read from stdin: {e}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let event = match ShellLine::parse_line(&line) {
            Ok(ShellLine {
                command: ShellCommand::Quit,
            }) => break,
            Ok(ShellLine {
                command: ShellCommand::Request(request),
            }) => request.into_event(),
            Err(e) => {
                // Covers `help` too, clap reports it as an error kind
                let text = e.render().to_string();
                if let Err(e) = notices.send(AppEvent::Notice(text.trim_end().to_string())) {
                    tracing::error!("Failed to send shell notice: {e}");
                }
                continue;
            }
        };

        if let Err(e) = requests.send(event) {
            tracing::warn!("Event loop is gone, shell stops: {e}");
            return;
        }
    }

    tracing::info!("Shell input closed");
    let _ = requests.send(AppEvent::Shutdown);
}
