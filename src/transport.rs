//! Single-channel playback transport.
//!
//! At most one catalog entry owns the playback channel at a time. Transport
//! state is an explicitly owned value; every input is a [`TransportEvent`]
//! fed through [`transition`], which returns the next state plus the
//! [`Effect`]s the [`TransportController`] applies to the channel and the UI.

mod binder;
mod channel;
mod controller;
mod controls;
mod machine;
mod state;

pub use binder::*;
pub use channel::*;
pub use controller::*;
pub use controls::*;
pub use machine::*;
pub use state::*;
