pub mod game;

// ============================================================================
// Profiling Macros
// ============================================================================

/// Log on every 100th [`FlowTick`](crate::game::tiles::FlowTick) when the
/// `perf_stats` feature is enabled.
///
/// ```ignore
/// profile_log!(tick, "Flow tick {}: total capacity {}", tick.0, grid.total_capacity());
/// ```
///
/// Without `perf_stats` this expands to nothing and the arguments (such as
/// `grid.total_capacity()`) are never evaluated.
#[macro_export]
#[cfg(feature = "perf_stats")]
macro_rules! profile_log {
    ($tick:expr, $($arg:tt)*) => {
        if $tick.0 % 100 == 0 {
            bevy::prelude::info!($($arg)*);
        }
    };
}

#[macro_export]
#[cfg(not(feature = "perf_stats"))]
macro_rules! profile_log {
    ($tick:expr, $($arg:tt)*) => {};
}
