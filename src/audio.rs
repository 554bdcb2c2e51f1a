//! Audio output: a dedicated thread owning the rodio stream and one sink.
//!
//! `AudioPlayer` is the handle the transport drives. Commands travel over an
//! mpsc channel; play results and end-of-media come back as
//! [`crate::transport::ChannelEvent`]s.

mod media;
mod player;
mod sink;
mod thread;
mod types;

pub use player::AudioPlayer;
pub use types::*;
