//! Building `rodio` sinks from in-memory media.

use std::io::Cursor;
use std::sync::Arc;

use rodio::{Decoder, OutputStream, Sink};

use crate::transport::ChannelError;

/// Create a paused `Sink` playing `bytes` from the start.
pub(super) fn create_sink(
    stream: &OutputStream,
    locator: &str,
    bytes: &Arc<[u8]>,
) -> Result<Sink, ChannelError> {
    let source = Decoder::new(Cursor::new(bytes.clone())).map_err(|e| ChannelError::Decode {
        locator: locator.to_string(),
        reason: e.to_string(),
    })?;

    let sink = Sink::connect_new(stream.mixer());
    sink.append(source);
    sink.pause();
    Ok(sink)
}
