use std::sync::Arc;

use anyhow::Context;
use kanal::{AsyncReceiver, AsyncSender};
use lingo_types::AppEvent;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::events::progress::forward_progress;
use crate::io::spawn_shell_io;
use crate::state::AppState;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::bounded_async(256), // acquisition status bursts
            ui_to_app: kanal::bounded_async(64),  // typed commands
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(&self) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.ui_to_app.1.clone(),
            self.channels.app_to_ui.0.clone(),
        ));

        // UI loop, cancels everything once the event loop is done
        tasks.spawn(ui_loop(
            self.channels.app_to_ui.1.clone(),
            self.cancel_token.clone(),
        ));

        tasks
    }

    /// Interactive mode: stdin reader plus live progress updates
    pub fn spawn_shell(&self, tasks: &mut JoinSet<anyhow::Result<()>>) -> anyhow::Result<()> {
        spawn_shell_io(
            self.channels.ui_to_app.0.clone(),
            self.channels.app_to_ui.0.clone(),
        )
        .context("failed to spawn shell reader")?;

        tasks.spawn(forward_progress(
            self.state.clone(),
            self.channels.app_to_ui.0.clone(),
            self.cancel_token.child_token(),
        ));

        Ok(())
    }

    pub async fn submit(&self, event: AppEvent) -> anyhow::Result<()> {
        self.channels
            .ui_to_app
            .0
            .send(event)
            .await
            .context("event loop is not running")
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
