//! Parallelization helpers for pixel loops
//!
//! Threshold-dispatched wrappers over rayon. The fold helper collects block
//! partials in chunk order before merging, so floating-point accumulation
//! yields the same result for any thread count.

use rayon::prelude::*;

use super::PARALLEL_THRESHOLD;

/// Pixels per parallel work block. Interleaved sample count per block is
/// `BLOCK_PIXELS * chunk_size`.
const BLOCK_PIXELS: usize = 4096;

/// Fold/reduce over fixed-size chunks with automatic threshold-based
/// dispatch.
///
/// Above the threshold the data is split into contiguous blocks, each block
/// folded independently, and the block partials merged sequentially in block
/// order. Block boundaries and merge order depend only on the data length,
/// never on thread scheduling, so floating-point reductions are reproducible
/// across runs and thread counts.
///
/// # Arguments
/// * `data` - The slice to process
/// * `chunk_size` - Size of each chunk (e.g., 3 for RGB pixels)
/// * `init` - Function that creates a new accumulator
/// * `fold_fn` - Function that folds a chunk into the accumulator
/// * `merge_fn` - Function that combines two accumulators
pub(crate) fn parallel_fold_chunks<T, A, I, F, R>(
    data: &[T],
    chunk_size: usize,
    init: I,
    fold_fn: F,
    merge_fn: R,
) -> A
where
    T: Sync,
    A: Send,
    I: Fn() -> A + Sync + Send,
    F: Fn(A, &[T]) -> A + Sync + Send,
    R: Fn(A, A) -> A,
{
    let num_elements = data.len() / chunk_size;

    if num_elements >= PARALLEL_THRESHOLD {
        let block = BLOCK_PIXELS * chunk_size;
        let partials: Vec<A> = data
            .par_chunks(block)
            .map(|block_data| {
                let mut acc = init();
                for chunk in block_data.chunks_exact(chunk_size) {
                    acc = fold_fn(acc, chunk);
                }
                acc
            })
            .collect();

        partials
            .into_iter()
            .fold(init(), |acc, partial| merge_fn(acc, partial))
    } else {
        let mut acc = init();
        for chunk in data.chunks_exact(chunk_size) {
            acc = fold_fn(acc, chunk);
        }
        acc
    }
}

/// Parallel for-each over mutable chunks with automatic threshold-based
/// dispatch.
///
/// The function is element-local, so parallel and sequential execution
/// produce the same result.
pub(crate) fn parallel_for_each_chunk_mut<T, F>(data: &mut [T], chunk_size: usize, f: F)
where
    T: Send + Sync,
    F: Fn(&mut [T]) + Sync,
{
    let num_elements = data.len() / chunk_size;

    if num_elements >= PARALLEL_THRESHOLD {
        data.par_chunks_exact_mut(chunk_size).for_each(&f);
    } else {
        for chunk in data.chunks_exact_mut(chunk_size) {
            f(chunk);
        }
    }
}
