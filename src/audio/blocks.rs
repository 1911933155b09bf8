//! Fixed-size block framing for raw 16-bit PCM.

use std::borrow::Cow;

/// Decode little-endian bytes into 16-bit samples.
///
/// A trailing odd byte does not form a sample and is ignored.
pub fn decode_samples(bytes: &[u8]) -> Vec<i16> {
    bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}

/// Split `samples` into consecutive blocks of exactly `block_size` samples.
///
/// Full blocks are borrowed. A short final block is copied into a zeroed
/// buffer of full length. Panics if `block_size` is zero.
pub fn padded_blocks(
    samples: &[i16],
    block_size: usize,
) -> impl Iterator<Item = Cow<'_, [i16]>> + '_ {
    samples.chunks(block_size).map(move |group| {
        if group.len() == block_size {
            Cow::Borrowed(group)
        } else {
            let mut block = vec![0i16; block_size];
            block[..group.len()].copy_from_slice(group);
            Cow::Owned(block)
        }
    })
}

/// Number of blocks `padded_blocks` yields for `samples` samples.
pub fn block_count(samples: usize, block_size: usize) -> usize {
    samples.div_ceil(block_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_little_endian() {
        let bytes = [0x01, 0x00, 0xff, 0xff, 0x00, 0x80, 0xff, 0x7f];
        assert_eq!(decode_samples(&bytes), vec![1, -1, i16::MIN, i16::MAX]);
    }

    #[test]
    fn test_decode_drops_trailing_byte() {
        assert_eq!(decode_samples(&[0x02, 0x00, 0x07]), vec![2]);
        assert!(decode_samples(&[0x07]).is_empty());
        assert!(decode_samples(&[]).is_empty());
    }

    #[test]
    fn test_exact_block_is_borrowed() {
        let samples = [1, 2, 3, 4];
        let blocks: Vec<_> = padded_blocks(&samples, 4).collect();
        assert_eq!(blocks.len(), 1);
        assert!(matches!(blocks[0], Cow::Borrowed(_)));
        assert_eq!(&*blocks[0], &[1, 2, 3, 4]);
    }

    #[test]
    fn test_short_tail_is_zero_padded() {
        let samples = [1, 2, 3, 4, 5];
        let blocks: Vec<_> = padded_blocks(&samples, 4).collect();
        assert_eq!(blocks.len(), 2);
        assert_eq!(&*blocks[0], &[1, 2, 3, 4]);
        assert_eq!(&*blocks[1], &[5, 0, 0, 0]);
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert_eq!(padded_blocks(&[], 4).count(), 0);
        assert_eq!(block_count(0, 4), 0);
    }

    #[test]
    fn test_block_count() {
        assert_eq!(block_count(1, 4), 1);
        assert_eq!(block_count(4, 4), 1);
        assert_eq!(block_count(5, 4), 2);
        assert_eq!(block_count(12, 4), 3);
    }
}
