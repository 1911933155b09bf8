//! Streams raw 16-bit PCM into mono WAV files using fixed one-second blocks.

pub mod audio;
pub mod config;
pub mod error;
pub mod services;

pub use audio::{AudioEncoding, AudioFormat, AudioSink, WavSink};
pub use error::{SinkError, SinkResult};
