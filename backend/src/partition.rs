use rand::prelude::SliceRandom;

/// Shuffles the candidate exponents, then splits them into exactly
/// `workers` contiguous chunks. Every chunk gets len/workers elements and
/// the last one absorbs the remainder.
///
/// Lucas-Lehmer cost grows with the exponent, so splitting the sorted list
/// would hand the largest, slowest exponents to a single worker and make it
/// the critical path. A fresh shuffle per run gives every chunk roughly the
/// same expected cost without measuring anything.
pub fn shuffle_and_chunk(mut candidates: Vec<u32>, workers: usize) -> Vec<Vec<u32>> {
    candidates.shuffle(&mut rand::thread_rng());
    split(candidates, workers)
}

fn split(candidates: Vec<u32>, workers: usize) -> Vec<Vec<u32>> {
    let chunk_size = candidates.len() / workers;
    let mut chunks = Vec::with_capacity(workers);
    let mut rest = candidates;

    for _ in 1..workers {
        let tail = rest.split_off(chunk_size);
        chunks.push(rest);
        rest = tail;
    }
    chunks.push(rest);
    chunks
}

#[cfg(test)]
mod tests {
    use super::shuffle_and_chunk;

    #[test]
    fn produces_exactly_one_chunk_per_worker() {
        let chunks = shuffle_and_chunk((1..=50).collect(), 7);
        assert_eq!(chunks.len(), 7);
    }

    #[test]
    fn chunks_are_a_permutation_of_the_input() {
        let candidates: Vec<u32> = (1..=37).collect();
        let mut flattened: Vec<u32> = shuffle_and_chunk(candidates.clone(), 4)
            .into_iter()
            .flatten()
            .collect();
        flattened.sort_unstable();
        assert_eq!(flattened, candidates);
    }

    #[test]
    fn last_chunk_absorbs_the_remainder() {
        // 23 elements over 4 workers: 5, 5, 5 and 5 + 3.
        let chunks = shuffle_and_chunk((1..=23).collect(), 4);
        assert_eq!(chunks[0].len(), 5);
        assert_eq!(chunks[1].len(), 5);
        assert_eq!(chunks[2].len(), 5);
        assert_eq!(chunks[3].len(), 8);
    }

    #[test]
    fn single_worker_gets_everything() {
        let chunks = shuffle_and_chunk((1..=9).collect(), 1);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].len(), 9);
    }

    #[test]
    fn more_workers_than_candidates_leaves_empty_chunks() {
        let chunks = shuffle_and_chunk(vec![3, 5, 7], 5);
        assert_eq!(chunks.len(), 5);
        assert_eq!(chunks.iter().map(Vec::len).sum::<usize>(), 3);
        // Size formula still holds: 3/5 == 0 per chunk, last takes 3 mod 5.
        assert_eq!(chunks[4].len(), 3);
    }
}
