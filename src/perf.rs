//! Performance monitoring utilities.
//!
//! Provides scoped timing instrumentation for the hot interaction paths
//! (hit testing, drag updates, snapshot rasterization).
//!
//! ## Features
//!
//! - **Scoped timers**: RAII-style timing for code blocks
//! - **Aggregated statistics**: Per-operation timing samples
//! - **Conditional compilation**: Zero-cost when profiling disabled
//!
//! ## Usage
//!
//! Enable profiling with the `profiling` feature flag:
//! ```toml
//! [dependencies]
//! moodboard = { features = ["profiling"] }
//! ```
//!
//! Use the profiling macros for zero-cost instrumentation:
//! ```ignore
//! use moodboard::{profile_function, profile_scope};
//!
//! fn expensive_operation() {
//!     profile_function!();  // Times entire function
//!
//!     {
//!         profile_scope!("inner_work");  // Times just this block
//!         // ... work ...
//!     }
//! }
//! ```

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;
use tracing::warn;
#[cfg(feature = "profiling")]
use tracing::trace;

// ============================================================================
// Constants
// ============================================================================

/// Default warning threshold for untimed interactive work
pub const INTERACTIVE_BUDGET_MS: f64 = 16.67;

/// Number of samples to keep for operation statistics
const STATS_SAMPLE_COUNT: usize = 100;

/// Global flag to enable/disable profiling at runtime
static PROFILING_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

/// Global counter for unique timer IDs
static TIMER_COUNTER: AtomicU64 = AtomicU64::new(0);

// ============================================================================
// Profiling Macros (zero-cost when disabled)
// ============================================================================

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
///
/// # Example
/// ```ignore
/// use moodboard::profile_scope;
///
/// fn rasterize_items() {
///     profile_scope!("rasterize_items");
///     // ... painting code ...
/// }
/// ```
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name; // Suppress unused variable warning
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

/// Profile the current function. Zero-cost when profiling is disabled.
///
/// # Example
/// ```ignore
/// use moodboard::profile_function;
///
/// fn handle_pointer_down() {
///     profile_function!();
///     // ... event handling code ...
/// }
/// ```
#[macro_export]
macro_rules! profile_function {
    () => {
        $crate::profile_scope!(concat!(module_path!(), "::", $crate::function_name!()));
    };
}

/// Helper macro to get function name (requires nightly or workaround)
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        // Strip the trailing "::f" from the function name
        &name[..name.len() - 3]
    }};
}

// Re-export macros at crate root
pub use profile_function;
pub use profile_scope;

// ============================================================================
// Runtime Profiling Control
// ============================================================================

/// Enable or disable profiling at runtime.
/// Note: This only affects code compiled with the `profiling` feature.
pub fn set_profiling_enabled(enabled: bool) {
    PROFILING_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Check if profiling is currently enabled.
#[inline]
pub fn is_profiling_enabled() -> bool {
    PROFILING_ENABLED.load(Ordering::Relaxed)
}

// ============================================================================
// Operation Statistics
// ============================================================================

/// Statistics for a specific operation type.
#[derive(Debug, Clone)]
pub struct OperationStats {
    /// Recent timing samples in milliseconds
    samples: VecDeque<f64>,
    /// Total invocation count
    count: u64,
    /// Minimum observed time
    min_ms: f64,
    /// Maximum observed time
    max_ms: f64,
    /// Running sum for average calculation
    sum_ms: f64,
}

impl Default for OperationStats {
    fn default() -> Self {
        Self {
            samples: VecDeque::with_capacity(STATS_SAMPLE_COUNT),
            count: 0,
            min_ms: f64::MAX,
            max_ms: 0.0,
            sum_ms: 0.0,
        }
    }
}

impl OperationStats {
    /// Record a new timing sample.
    pub fn record(&mut self, ms: f64) {
        if self.samples.len() >= STATS_SAMPLE_COUNT {
            if let Some(old) = self.samples.pop_front() {
                self.sum_ms -= old;
            }
        }
        self.samples.push_back(ms);
        self.sum_ms += ms;
        self.count += 1;
        self.min_ms = self.min_ms.min(ms);
        self.max_ms = self.max_ms.max(ms);
    }

    /// Get the average time over recent samples.
    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            0.0
        } else {
            self.sum_ms / self.samples.len() as f64
        }
    }

    /// Get the maximum observed time.
    pub fn max_ms(&self) -> f64 {
        self.max_ms
    }

    /// Get the total invocation count.
    pub fn count(&self) -> u64 {
        self.count
    }
}

// ============================================================================
// Scoped Timer
// ============================================================================

/// A scoped timer that logs duration on drop.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
    #[allow(dead_code)]
    timer_id: u64,
    #[cfg(feature = "profiling")]
    depth: usize,
}

// Thread-local depth tracking for hierarchical profiling
#[cfg(feature = "profiling")]
thread_local! {
    static CURRENT_DEPTH: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

impl ScopedTimer {
    /// Create a new scoped timer with a warning threshold.
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        let timer_id = TIMER_COUNTER.fetch_add(1, Ordering::Relaxed);

        #[cfg(feature = "profiling")]
        let depth = CURRENT_DEPTH.with(|d| {
            let current = d.get();
            d.set(current + 1);
            current
        });

        Self {
            name,
            start: Instant::now(),
            threshold_ms,
            timer_id,
            #[cfg(feature = "profiling")]
            depth,
        }
    }

    /// Create a timer with the default threshold (16ms).
    pub fn with_default_threshold(name: &'static str) -> Self {
        Self::new(name, INTERACTIVE_BUDGET_MS)
    }

    /// Create a timer for profiling (lower threshold, 1ms).
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 1.0)
    }

    /// Get elapsed time without stopping the timer.
    #[allow(dead_code)]
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    /// Get the timer's name.
    #[allow(dead_code)]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;

        #[cfg(feature = "profiling")]
        {
            // Decrement depth
            CURRENT_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));

            if elapsed_ms > self.threshold_ms {
                let indent = "  ".repeat(self.depth);
                trace!("{}[PERF] {}: {:.2}ms", indent, self.name, elapsed_ms);
            }
        }

        #[cfg(not(feature = "profiling"))]
        {
            if elapsed_ms > self.threshold_ms {
                warn!(
                    operation = self.name,
                    elapsed_ms = format!("{:.2}", elapsed_ms),
                    threshold_ms = format!("{:.2}", self.threshold_ms),
                    "Slow operation"
                );
            }
        }
    }
}

// ============================================================================
// Timing Utilities
// ============================================================================

/// Measure execution time of a closure and return both the result and elapsed time.
///
/// # Example
/// ```ignore
/// let (result, elapsed_ms) = measure(|| expensive_computation());
/// println!("Computed {} in {:.2}ms", result, elapsed_ms);
/// ```
#[inline]
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    (result, elapsed_ms)
}

/// Measure execution time and log if it exceeds the threshold.
///
/// # Example
/// ```ignore
/// let result = measure_and_log("rasterize", 5.0, || rasterize_all_items());
/// ```
#[inline]
pub fn measure_and_log<T, F: FnOnce() -> T>(name: &str, threshold_ms: f64, f: F) -> T {
    let (result, elapsed_ms) = measure(f);
    if elapsed_ms > threshold_ms {
        warn!(
            operation = name,
            elapsed_ms = format!("{:.2}", elapsed_ms),
            threshold_ms = format!("{:.2}", threshold_ms),
            "Slow operation"
        );
    }
    result
}
