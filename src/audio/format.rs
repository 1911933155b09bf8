// NOTE: Sinks in this crate only write 16-bit signed integer PCM, mono.
// Channel count and sample width are fixed; only the sample rate varies.

use hound::{SampleFormat, WavSpec};

/// Sample rate used when the caller does not pick one.
pub const DEFAULT_SAMPLING_RATE: u32 = 44_100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioFormat {
    pub sample_rate: u32,
    pub channels: u16,
}

impl AudioFormat {
    pub const BITS_PER_SAMPLE: u16 = 16;
    pub const SAMPLE_WIDTH: usize = 2;

    pub fn mono(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            channels: 1,
        }
    }

    /// Samples per written block: one second of audio.
    pub fn block_size(&self) -> usize {
        self.sample_rate as usize
    }

    /// Bytes in one block of raw input.
    pub fn block_bytes(&self) -> usize {
        self.block_size() * Self::SAMPLE_WIDTH
    }

    pub fn wav_spec(&self) -> WavSpec {
        WavSpec {
            channels: self.channels,
            sample_rate: self.sample_rate,
            bits_per_sample: Self::BITS_PER_SAMPLE,
            sample_format: SampleFormat::Int,
        }
    }
}

impl Default for AudioFormat {
    fn default() -> Self {
        Self::mono(DEFAULT_SAMPLING_RATE)
    }
}
