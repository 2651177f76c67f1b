//! Background task driving the inactivity sweep.

use std::{sync::Arc, time::Duration};

use tokio::{
    task::JoinHandle,
    time::{Instant, MissedTickBehavior},
};

use crate::usecase::SweepInactiveParticipantsUseCase;

/// Spawn a task that runs one sweep every `period`.
///
/// The first sweep runs one full period after spawning. A failed sweep is
/// logged and the next tick proceeds independently. The task runs until
/// the returned handle is aborted.
///
/// # Panics
///
/// The spawned task panics if `period` is zero.
pub fn spawn_sweeper(
    usecase: Arc<SweepInactiveParticipantsUseCase>,
    period: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            if let Err(e) = usecase.execute().await {
                tracing::error!(error = %e, "Inactivity sweep failed");
            }
        }
    })
}
