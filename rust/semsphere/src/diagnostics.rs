//! Optional plot diagnostics through the `log` facade.
//!
//! Nothing here is called unless `SphereConfig::diagnostics` is set. In the
//! browser the `debug_logs` feature routes records to the JS console.

use crate::plot::{PlotStats, WordAnalysis};

#[cfg(feature = "debug_logs")]
pub fn init_logger() {
    use log::LevelFilter;
    use wasm_bindgen_console_logger::DEFAULT_LOGGER;
    if log::set_logger(&DEFAULT_LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }
}

#[cfg(not(feature = "debug_logs"))]
pub fn init_logger() {}

/// Gate for diagnostic output, copied from the config at the start of a pass
#[derive(Debug, Clone, Copy)]
pub struct Diagnostics {
    enabled: bool,
}

impl Diagnostics {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn word_placed(&self, analysis: &WordAnalysis) {
        if !self.enabled {
            return;
        }
        log::debug!(
            "[SemSphere] '{}' level={} dims={:?} pos=({:.3}, {:.3}, {:.3}) jitter={}",
            analysis.word,
            analysis.abstraction_level.as_u8(),
            analysis.dimensions,
            analysis.position[0],
            analysis.position[1],
            analysis.position[2],
            analysis.collision_index,
        );
    }

    pub fn token_dropped(&self, sentence_index: usize, token: &str) {
        if self.enabled {
            log::debug!("[SemSphere] sentence {} dropped '{}'", sentence_index, token);
        }
    }

    pub fn plot_finished(&self, stats: &PlotStats) {
        if self.enabled {
            log::info!(
                "[SemSphere] plotted {} sentences: {} words ({} occurrences), {} collisions, {} dropped, {}us",
                stats.sentence_count,
                stats.distinct_words,
                stats.total_occurrences,
                stats.collisions,
                stats.dropped_tokens,
                stats.elapsed_us,
            );
        }
    }
}
