pub mod blocks;
pub mod encoding;
pub mod format;
pub mod sink;
pub mod wav_sink;

pub use blocks::{block_count, decode_samples, padded_blocks};
pub use encoding::AudioEncoding;
pub use format::{AudioFormat, DEFAULT_SAMPLING_RATE};
pub use sink::AudioSink;
pub use wav_sink::WavSink;
