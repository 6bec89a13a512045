//! Benchmark profiles for the Toroid engine.
//!
//! - [`reference_profile`]: 128x128 soup (16K cells)
//! - [`stress_profile`]: 512x512 soup (~262K cells)
//! - [`engine_matrix`]: the execution modes compared in `advance_ops`

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use toroid_engine::EngineConfig;
use toroid_space::Grid;
use toroid_test_utils::random_soup;

/// Soup density used by every profile.
pub const DENSITY: f64 = 0.3;

/// A 128x128 random soup.
pub fn reference_profile(seed: u64) -> Grid {
    random_soup(128, 128, DENSITY, seed)
}

/// A 512x512 random soup.
pub fn stress_profile(seed: u64) -> Grid {
    random_soup(512, 512, DENSITY, seed)
}

/// Labelled configurations: sequential, parallel by row, parallel by
/// quarter-row, and parallel one cell per unit.
pub fn engine_matrix(width: usize) -> Vec<(&'static str, EngineConfig)> {
    vec![
        ("sequential", EngineConfig::sequential()),
        ("parallel_rows", EngineConfig::default()),
        (
            "parallel_quarter_rows",
            EngineConfig::default().with_run_len((width / 4).max(1)),
        ),
        ("parallel_cells", EngineConfig::default().with_run_len(1)),
    ]
}
