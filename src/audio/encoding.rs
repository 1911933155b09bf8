use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sample encoding declared by the producer of a stream.
///
/// Only `Linear16` is interpreted; sinks accept other values but still write
/// 16-bit linear PCM.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum AudioEncoding {
    #[default]
    Linear16,
    Mulaw,
}

impl AudioEncoding {
    pub fn is_linear16(self) -> bool {
        self == AudioEncoding::Linear16
    }
}

impl fmt::Display for AudioEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioEncoding::Linear16 => f.write_str("linear16"),
            AudioEncoding::Mulaw => f.write_str("mulaw"),
        }
    }
}
