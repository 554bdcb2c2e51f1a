use tracing::trace;

use super::binder::{UiBinder, broadcast};
use super::channel::PlaybackChannel;
use super::machine::{Effect, TransportEvent, transition};
use super::state::TransportState;

/// Owns the transport state and the playback channel. The UI is passed in
/// per dispatch and only ever receives effects.
pub struct TransportController<C: PlaybackChannel> {
    state: TransportState,
    channel: C,
}

impl<C: PlaybackChannel> TransportController<C> {
    pub fn new(channel: C) -> Self {
        Self {
            state: TransportState::default(),
            channel,
        }
    }

    pub fn state(&self) -> &TransportState {
        &self.state
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// Run one event to completion: compute the transition, commit the new
    /// state, then apply its effects in order.
    pub fn dispatch<U: UiBinder + ?Sized>(&mut self, event: TransportEvent, ui: &mut U) {
        trace!(?event, "transport event");
        let next = transition(&self.state, event);
        self.state = next.state;
        for effect in next.effects {
            self.apply(effect, ui);
        }
    }

    fn apply<U: UiBinder + ?Sized>(&mut self, effect: Effect, ui: &mut U) {
        match effect {
            Effect::SetSource(locator) => self.channel.set_source(&locator),
            Effect::RequestPlay(request) => self.channel.play(request),
            Effect::Pause => self.channel.pause(),
            Effect::SeekToStart => self.channel.seek_to_start(),
            Effect::SetLabel(text) => ui.set_now_playing_label(&text),
            Effect::Notify { message, severity } => ui.show_transient_notice(&message, severity),
            Effect::BroadcastControls => broadcast(ui, &self.state.phase),
        }
    }
}
