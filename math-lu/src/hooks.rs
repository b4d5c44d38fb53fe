//! Optional instrumentation at the factorization phase boundaries

use std::time::{Duration, Instant};

/// The two passes of the factorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Pivot selection and column swaps for every pivot index
    Pivoting,
    /// Normalization and reduction for every pivot index but the last
    Elimination,
}

impl Phase {
    /// Human-readable name used in reports
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Pivoting => "Pivoting",
            Phase::Elimination => "Column wise gauss elimination",
        }
    }
}

/// Callbacks invoked when a phase starts and when it finishes successfully
///
/// Both methods default to doing nothing. A phase that aborts on a singular
/// pivot gets a start notification but no finish notification.
pub trait PhaseHooks {
    fn phase_started(&mut self, _phase: Phase) {}

    fn phase_finished(&mut self, _phase: Phase) {}
}

/// No instrumentation
impl PhaseHooks for () {}

/// Wall-clock timer for both phases
#[derive(Debug, Default, Clone)]
pub struct PhaseTimer {
    started: Option<(Phase, Instant)>,
    /// Duration of the pivoting pass, if it ran to completion
    pub pivoting: Option<Duration>,
    /// Duration of the elimination pass, if it ran to completion
    pub elimination: Option<Duration>,
}

impl PhaseTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded duration for `phase`
    pub fn duration(&self, phase: Phase) -> Option<Duration> {
        match phase {
            Phase::Pivoting => self.pivoting,
            Phase::Elimination => self.elimination,
        }
    }
}

impl PhaseHooks for PhaseTimer {
    fn phase_started(&mut self, phase: Phase) {
        self.started = Some((phase, Instant::now()));
    }

    fn phase_finished(&mut self, phase: Phase) {
        if let Some((started_phase, start)) = self.started.take() {
            if started_phase == phase {
                let elapsed = start.elapsed();
                match phase {
                    Phase::Pivoting => self.pivoting = Some(elapsed),
                    Phase::Elimination => self.elimination = Some(elapsed),
                }
            }
        }
    }
}
