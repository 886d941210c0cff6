//! Parallel utilities with feature-gated implementations
//!
//! Each helper runs on rayon when the `parallel` feature is enabled and
//! falls back to a plain sequential loop otherwise.

/// Check if parallel processing is available
#[cfg(feature = "parallel")]
pub fn is_parallel_available() -> bool {
    true
}

/// Check if parallel processing is available
#[cfg(not(feature = "parallel"))]
pub fn is_parallel_available() -> bool {
    false
}

/// Number of worker threads kernels will use
#[cfg(feature = "parallel")]
pub fn num_threads() -> usize {
    rayon::current_num_threads()
}

/// Number of worker threads kernels will use
#[cfg(not(feature = "parallel"))]
pub fn num_threads() -> usize {
    1
}

/// Size the global pool. `0` keeps the rayon default (`RAYON_NUM_THREADS` or one per core).
#[cfg(feature = "parallel")]
pub fn configure_threads(threads: usize) -> crate::Result<()> {
    if threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .map_err(|e| crate::KernelError::ThreadPool(e.to_string()))?;
    }
    Ok(())
}

/// Size the global pool (no-op without the `parallel` feature)
#[cfg(not(feature = "parallel"))]
pub fn configure_threads(threads: usize) -> crate::Result<()> {
    if threads > 1 {
        log::warn!("built without the parallel feature, ignoring {threads} threads");
    }
    Ok(())
}

/// Parallel map with index
#[cfg(feature = "parallel")]
pub fn parallel_map_indexed<U, F>(count: usize, f: F) -> Vec<U>
where
    U: Send,
    F: Fn(usize) -> U + Sync + Send,
{
    use rayon::prelude::*;
    (0..count).into_par_iter().map(f).collect()
}

/// Sequential map with index (fallback)
#[cfg(not(feature = "parallel"))]
pub fn parallel_map_indexed<U, F>(count: usize, f: F) -> Vec<U>
where
    F: Fn(usize) -> U,
{
    (0..count).map(f).collect()
}

/// Apply `f(row, row_slice)` to each `row_len`-long chunk of `data`, in parallel
#[cfg(feature = "parallel")]
pub fn parallel_rows_mut<F>(data: &mut [f64], row_len: usize, f: F)
where
    F: Fn(usize, &mut [f64]) + Sync + Send,
{
    use rayon::prelude::*;
    data.par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(i, row)| f(i, row));
}

/// Sequential row iteration (fallback)
#[cfg(not(feature = "parallel"))]
pub fn parallel_rows_mut<F>(data: &mut [f64], row_len: usize, f: F)
where
    F: Fn(usize, &mut [f64]),
{
    data.chunks_mut(row_len)
        .enumerate()
        .for_each(|(i, row)| f(i, row));
}

/// Parallel sum of `f(i)` for `i` in `0..count`
#[cfg(feature = "parallel")]
pub fn parallel_sum<F>(count: u64, f: F) -> f64
where
    F: Fn(u64) -> f64 + Sync + Send,
{
    use rayon::prelude::*;
    (0..count).into_par_iter().map(f).sum()
}

/// Sequential sum (fallback)
#[cfg(not(feature = "parallel"))]
pub fn parallel_sum<F>(count: u64, f: F) -> f64
where
    F: Fn(u64) -> f64,
{
    (0..count).map(f).sum()
}
