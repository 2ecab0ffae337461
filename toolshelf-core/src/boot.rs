//! Start-up sequence: splash loader, fade, then the one and only render.

use std::time::Duration;

/// Timings of the start-up sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootSchedule {
    /// From page ready until the loader starts fading.
    pub fade_delay: Duration,
    /// From the start of the fade until the app is revealed.
    pub reveal_delay: Duration,
    /// CSS transition applied to the loader while it fades.
    pub fade_transition: &'static str,
}

impl Default for BootSchedule {
    fn default() -> Self {
        Self {
            fade_delay: Duration::from_millis(1500),
            reveal_delay: Duration::from_millis(500),
            fade_transition: "opacity 0.5s ease",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootStage {
    Loading,
    FadingOut,
    Ready,
}

/// What the host has to do on each timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootStep {
    /// Start the loader's opacity transition.
    FadeLoader,
    /// Hide the loader, show the app and render the catalog.
    RevealAndRender,
}

#[derive(Debug, Clone)]
pub struct BootSequencer {
    schedule: BootSchedule,
    stage: BootStage,
}

impl BootSequencer {
    pub fn new(schedule: BootSchedule) -> Self {
        Self {
            schedule,
            stage: BootStage::Loading,
        }
    }

    pub fn stage(&self) -> BootStage {
        self.stage
    }

    pub fn schedule(&self) -> &BootSchedule {
        &self.schedule
    }

    /// Delay before the next step, or `None` once booted.
    pub fn next_delay(&self) -> Option<Duration> {
        match self.stage {
            BootStage::Loading => Some(self.schedule.fade_delay),
            BootStage::FadingOut => Some(self.schedule.reveal_delay),
            BootStage::Ready => None,
        }
    }

    /// Move to the next stage and return the step to perform.
    pub fn advance(&mut self) -> Option<BootStep> {
        let (next, step) = match self.stage {
            BootStage::Loading => (BootStage::FadingOut, BootStep::FadeLoader),
            BootStage::FadingOut => (BootStage::Ready, BootStep::RevealAndRender),
            BootStage::Ready => return None,
        };
        tracing::debug!(from = ?self.stage, to = ?next, "Boot stage change");
        self.stage = next;
        Some(step)
    }
}

impl Default for BootSequencer {
    fn default() -> Self {
        Self::new(BootSchedule::default())
    }
}
