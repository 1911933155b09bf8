use super::encoding::AudioEncoding;
use crate::error::SinkResult;

/// Trait for output devices that terminate a raw PCM stream
///
/// Implementations receive byte chunks as they arrive and persist or play
/// them. `terminate` is the last call a caller makes.
pub trait AudioSink: Send {
    fn sampling_rate(&self) -> u32;

    fn audio_encoding(&self) -> AudioEncoding;

    /// Accept one chunk of little-endian 16-bit samples.
    ///
    /// Returns once the chunk has been handed to the device.
    fn consume_nonblocking(&mut self, chunk: &[u8]) -> SinkResult<()>;

    /// Frames the device has accepted so far, padding included.
    fn frames_written(&self) -> u64;

    /// Finalize and close the device
    fn terminate(&mut self) -> SinkResult<()>;
}
