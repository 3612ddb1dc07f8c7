//! Shared generation console service and its scripted progress driver.
//!
//! [`GenerationConsole`] owns the single [`Console`] of this process behind
//! a `RwLock`. Starting a run checks the start guard and begins the run under
//! one write lock, then spawns a task that waits one stage delay at a time
//! through the injected [`Scheduler`] and applies each advance. Every state
//! change is published on the [`EventBus`].
//!
//! A run cannot be cancelled: once started it always reaches 100%.

use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use uuid::Uuid;
use vidgen_core::request::RequestPatch;
use vidgen_core::{Console, ConsoleSnapshot, CoreError};
use vidgen_events::{ConsoleEvent, EventBus};

use crate::config::SimulatorConfig;
use crate::scheduler::Scheduler;

/// The generation console shared by every client of this process.
pub struct GenerationConsole {
    console: RwLock<Console>,
    scheduler: Arc<dyn Scheduler>,
    event_bus: Arc<EventBus>,
    config: SimulatorConfig,
}

/// A run that has been started.
#[derive(Debug)]
pub struct RunHandle {
    pub run_id: Uuid,
    /// Console state right after the start (progress at 0%).
    pub snapshot: ConsoleSnapshot,
    task: JoinHandle<()>,
}

impl RunHandle {
    /// Wait for the run to reach 100%.
    pub async fn wait(self) -> Result<(), CoreError> {
        self.task
            .await
            .map_err(|e| CoreError::Internal(format!("Progress task failed: {e}")))
    }
}

impl GenerationConsole {
    pub fn new(
        config: SimulatorConfig,
        scheduler: Arc<dyn Scheduler>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            console: RwLock::new(Console::new()),
            scheduler,
            event_bus,
            config,
        }
    }

    pub async fn snapshot(&self) -> ConsoleSnapshot {
        self.console.read().await.snapshot()
    }

    /// Apply a partial update to the request and return the new state.
    ///
    /// A non-empty patch publishes `request.updated` so every client sees
    /// the new parameters.
    pub async fn update_request(&self, patch: RequestPatch) -> ConsoleSnapshot {
        let mut console = self.console.write().await;
        if patch.is_empty() {
            tracing::debug!("Empty request patch, nothing to apply");
        } else {
            console.apply_patch(patch);
            tracing::debug!(
                model = %console.request().model,
                style = %console.request().style,
                length_minutes = console.request().length.minutes(),
                "Generation request updated",
            );
            self.event_bus.publish(ConsoleEvent::request_updated(
                console.request(),
                console.can_start(),
            ));
        }
        console.snapshot()
    }

    pub async fn show_result(&self) -> Result<ConsoleSnapshot, CoreError> {
        let mut console = self.console.write().await;
        console.show_result()?;
        self.event_bus.publish(ConsoleEvent::result_visibility(true));
        Ok(console.snapshot())
    }

    pub async fn hide_result(&self) -> ConsoleSnapshot {
        let mut console = self.console.write().await;
        console.hide_result();
        self.event_bus.publish(ConsoleEvent::result_visibility(false));
        console.snapshot()
    }

    /// Start a new run and spawn its progress driver.
    ///
    /// Fails with [`CoreError::Conflict`] while another run is active and
    /// with [`CoreError::Validation`] when the prompt is blank. A failed
    /// start changes nothing and publishes nothing.
    pub async fn start(self: &Arc<Self>) -> Result<RunHandle, CoreError> {
        let run_id = Uuid::new_v4();

        let snapshot = {
            let mut console = self.console.write().await;
            console.start()?;
            self.event_bus
                .publish(ConsoleEvent::started(run_id, console.request()));
            console.snapshot()
        };

        tracing::info!(
            %run_id,
            model = %snapshot.request.model,
            style = %snapshot.request.style,
            length_minutes = snapshot.request.length.minutes(),
            "Generation run started",
        );

        let task = tokio::spawn(Arc::clone(self).drive(run_id));

        Ok(RunHandle {
            run_id,
            snapshot,
            task,
        })
    }

    /// Advance the run one stage per delay until it completes.
    ///
    /// Each delay starts only after the previous advance has been applied.
    async fn drive(self: Arc<Self>, run_id: Uuid) {
        loop {
            self.scheduler.delay(self.config.stage_delay).await;

            let mut console = self.console.write().await;
            let Some(step) = console.advance() else {
                tracing::warn!(%run_id, "Progress driver found no active run");
                return;
            };
            self.event_bus.publish(ConsoleEvent::advanced(run_id, &step));

            if let Some(summary) = &step.summary {
                tracing::info!(
                    %run_id,
                    duration = %summary.duration,
                    model = %summary.model,
                    "Generation run complete",
                );
                return;
            }

            tracing::debug!(
                %run_id,
                progress_percent = step.progress_percent,
                stage = step.stage.message,
                "Generation run advanced",
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
