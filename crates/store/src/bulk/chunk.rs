//! Fixed-size contiguous chunking.

/// Splits an ordered sequence into contiguous chunks of at most `size` items.
///
/// The returned iterator is lazy and single-pass. Concatenating all yielded
/// chunks in order reproduces the input exactly; every chunk except possibly
/// the last has exactly `size` items.
///
/// An empty input still yields exactly one empty chunk. Callers must treat an
/// empty chunk as a no-op, not an error; the bulk engine relies on this.
///
/// # Panics
///
/// Panics if `size` is zero, like [`slice::chunks`].
pub fn chunks<I>(items: I, size: usize) -> Chunks<I::IntoIter>
where
    I: IntoIterator,
{
    assert!(size != 0, "chunk size must be non-zero");
    Chunks {
        source: items.into_iter(),
        size,
        yielded_any: false,
        exhausted: false,
    }
}

/// Iterator returned by [`chunks`].
pub struct Chunks<I: Iterator> {
    source: I,
    size: usize,
    yielded_any: bool,
    exhausted: bool,
}

impl<I: Iterator> Iterator for Chunks<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let mut chunk = Vec::with_capacity(self.size);
        while chunk.len() < self.size {
            match self.source.next() {
                Some(item) => chunk.push(item),
                None => {
                    self.exhausted = true;
                    break;
                }
            }
        }

        if chunk.is_empty() && self.yielded_any {
            return None;
        }

        self.yielded_any = true;
        Some(chunk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concatenation_reproduces_input() {
        let input: Vec<u32> = (0..23).collect();
        let rebuilt: Vec<u32> = chunks(input.clone(), 5).flatten().collect();
        assert_eq!(rebuilt, input);
    }

    #[test]
    fn test_chunk_sizes() {
        let batches: Vec<Vec<u32>> = chunks((0..7).collect::<Vec<_>>(), 3).collect();
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0], vec![0, 1, 2]);
        assert_eq!(batches[1], vec![3, 4, 5]);
        assert_eq!(batches[2], vec![6]);
    }

    #[test]
    fn test_evenly_divisible_has_no_trailing_empty_chunk() {
        let batches: Vec<Vec<u32>> = chunks((0..6).collect::<Vec<_>>(), 3).collect();
        assert_eq!(batches.len(), 2);
        assert!(batches.iter().all(|batch| batch.len() == 3));
    }

    #[test]
    fn test_empty_input_yields_one_empty_chunk() {
        let batches: Vec<Vec<u32>> = chunks(Vec::new(), 4).collect();
        assert_eq!(batches, vec![Vec::<u32>::new()]);
    }

    #[test]
    fn test_size_one() {
        let batches: Vec<Vec<u32>> = chunks(vec![9, 8], 1).collect();
        assert_eq!(batches, vec![vec![9], vec![8]]);
    }

    #[test]
    fn test_size_larger_than_input() {
        let batches: Vec<Vec<u32>> = chunks(vec![1, 2], 100).collect();
        assert_eq!(batches, vec![vec![1, 2]]);
    }

    #[test]
    fn test_is_lazy() {
        // Chunks are pulled from the source one at a time; taking the first
        // chunk must not consume the rest.
        let mut pulled = 0;
        let counting = (0..10).inspect(|_| pulled += 1);
        let mut iter = chunks(counting, 3);
        let first = iter.next().unwrap();
        assert_eq!(first, vec![0, 1, 2]);
        drop(iter);
        assert_eq!(pulled, 3);
    }

    #[test]
    #[should_panic(expected = "chunk size must be non-zero")]
    fn test_zero_size_panics() {
        let _ = chunks(vec![1], 0);
    }
}
