use super::state::Phase;
use crate::catalog::EntryId;

/// Enablement of one entry's play / pause / stop controls.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ControlState {
    pub play: bool,
    pub pause: bool,
    pub stop: bool,
}

impl ControlState {
    pub const STOPPED: Self = Self {
        play: true,
        pause: false,
        stop: false,
    };
    pub const PLAYING: Self = Self {
        play: false,
        pause: true,
        stop: true,
    };
    pub const PAUSED: Self = Self {
        play: true,
        pause: true,
        stop: true,
    };

    pub fn for_phase(phase: &Phase) -> Self {
        match phase {
            Phase::Stopped => Self::STOPPED,
            Phase::Playing(_) => Self::PLAYING,
            Phase::Paused(_) => Self::PAUSED,
        }
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::STOPPED
    }
}

/// Controls `entry` should show given the global phase. Only the active
/// entry leaves the stopped layout.
pub fn controls_for(phase: &Phase, entry: &EntryId) -> ControlState {
    match phase.active() {
        Some(active) if active == entry => ControlState::for_phase(phase),
        _ => ControlState::STOPPED,
    }
}
