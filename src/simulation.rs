//! Single-flight simulated operations
//!
//! Every mocked domain action follows the same contract: the instance moves
//! to `Pending` immediately, sleeps a fixed latency in place of real I/O,
//! resolves its canned result, and returns to `Idle`. While an instance is
//! `Pending` a second invocation is rejected, mirroring the disabled trigger
//! in the front end. The phase is restored on drop, so an abandoned caller
//! cannot wedge the instance.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use thiserror::Error;

/// Phase of a simulated operation instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpPhase {
    Idle,
    Pending,
}

/// Rejection returned when an instance is invoked while already in flight.
#[derive(Debug, Error)]
#[error("{operation} is already in flight")]
pub struct OpBusy {
    pub operation: &'static str,
}

/// One mocked asynchronous operation instance.
pub struct SimulatedOp {
    name: &'static str,
    phase: Mutex<OpPhase>,
}

impl SimulatedOp {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            phase: Mutex::new(OpPhase::Idle),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn phase(&self) -> OpPhase {
        *self.phase.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin(&self) -> Result<PhaseGuard<'_>, OpBusy> {
        let mut phase = self.phase.lock().unwrap_or_else(PoisonError::into_inner);
        if *phase == OpPhase::Pending {
            return Err(OpBusy {
                operation: self.name,
            });
        }
        *phase = OpPhase::Pending;
        Ok(PhaseGuard { phase: &self.phase })
    }

    /// Run one invocation: `Idle -> Pending -> Idle`, resolving `produce`
    /// after `latency`. There is no cancellation or failure path; the only
    /// rejection is invoking while `Pending`.
    pub async fn run<T>(
        &self,
        latency: Duration,
        produce: impl FnOnce() -> T,
    ) -> Result<T, OpBusy> {
        let guard = self.begin()?;
        tracing::debug!(operation = self.name, ?latency, "simulated operation started");
        tokio::time::sleep(latency).await;
        let result = produce();
        drop(guard);
        tracing::debug!(operation = self.name, "simulated operation resolved");
        Ok(result)
    }
}

/// Restores the phase to `Idle` when the invocation ends, including when the
/// caller's future is dropped mid-sleep.
struct PhaseGuard<'a> {
    phase: &'a Mutex<OpPhase>,
}

impl Drop for PhaseGuard<'_> {
    fn drop(&mut self) {
        *self.phase.lock().unwrap_or_else(PoisonError::into_inner) = OpPhase::Idle;
    }
}
