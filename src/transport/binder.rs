use super::controls::{ControlState, controls_for};
use super::state::Phase;
use crate::catalog::{CatalogEntry, EntryId};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// View side of the transport: renders entries and mirrors control state.
/// Never touches the channel.
pub trait UiBinder {
    type Card;

    fn render_entry(&self, entry: &CatalogEntry, controls: ControlState) -> Self::Card;
    fn update_controls(&mut self, entry: &EntryId, controls: ControlState);
    fn update_all_controls(&mut self, controls: ControlState);
    /// Empty text clears the label.
    fn set_now_playing_label(&mut self, text: &str);
    fn show_transient_notice(&mut self, message: &str, severity: Severity);
}

/// Push the full control state: reset every entry to the stopped layout,
/// then give the active entry the layout for its phase.
pub fn broadcast<U: UiBinder + ?Sized>(ui: &mut U, phase: &Phase) {
    ui.update_all_controls(ControlState::STOPPED);
    if let Some(active) = phase.active() {
        ui.update_controls(active, controls_for(phase, active));
    }
}
