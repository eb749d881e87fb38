//! Batch generation over a range of grid sizes.
//!
//! A [`BatchPlan`] enumerates every `(size_x, size_y)` pair in an
//! inclusive range, orders the pairs by area, and generates one instance
//! per pair named `<domain>_inst_mdp__<n>`. Instances share no state;
//! instance `n` draws from its own generator seeded with `base_seed ^ n`.

use crate::output::{emit_instance, OutputError};
use rddlgen_core::{Cell, GenError};
use rddlgen_domains::params::{far_corner_targets, near_corner_burning};
use rddlgen_domains::{
    seeded_rng, Domain, Navigation, NavigationConfig, Wildfire, WildfireConfig,
};
use rddlgen_space::Connectivity;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info};

/// Which domain a batch generates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchDomain {
    /// Navigation: sizes 5..=20, horizon 100, discount 0.95.
    Navigation,
    /// Wildfire: sizes 3..=12, 8-connected, corner-region targets and fires.
    Wildfire,
}

impl BatchDomain {
    /// Short name used as the instance name prefix.
    pub fn short_name(self) -> &'static str {
        match self {
            Self::Navigation => "navigation",
            Self::Wildfire => "wildfire",
        }
    }

    /// Size range used when none is given.
    pub fn default_sizes(self) -> RangeInclusive<u32> {
        match self {
            Self::Navigation => 5..=20,
            Self::Wildfire => 3..=12,
        }
    }

    /// The generator for one batch entry of the given size.
    pub fn domain_for(self, size_x: u32, size_y: u32) -> Box<dyn Domain> {
        match self {
            Self::Navigation => Box::new(Navigation::new(NavigationConfig {
                size_x,
                size_y,
                ..NavigationConfig::default()
            })),
            Self::Wildfire => Box::new(Wildfire::new(WildfireConfig {
                size_x,
                size_y,
                targets: literals(far_corner_targets(size_x, size_y)),
                initial_burning: literals(near_corner_burning(size_x, size_y)),
                connectivity: Connectivity::Eight,
                ..WildfireConfig::default()
            })),
        }
    }
}

/// Plain position literals for `cells`, or `None` to keep the defaults.
fn literals(cells: Vec<Cell>) -> Option<Vec<String>> {
    if cells.is_empty() {
        return None;
    }
    Some(
        cells
            .into_iter()
            .map(|c| format!("x{},y{}", c.x + 1, c.y + 1))
            .collect(),
    )
}

/// What a batch does when one instance fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failure and return it.
    #[default]
    Abort,
    /// Log the failure, record it in the report and keep going.
    Continue,
}

/// Errors from a batch run.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The size range itself is invalid.
    #[error(transparent)]
    Plan(#[from] GenError),
    /// One instance failed under [`FailurePolicy::Abort`].
    #[error("instance `{name}` failed: {source}")]
    Instance {
        /// Name of the failing instance.
        name: String,
        /// What went wrong.
        #[source]
        source: OutputError,
    },
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Files written, in generation order.
    pub written: Vec<PathBuf>,
    /// `(instance name, error message)` for instances that failed under
    /// [`FailurePolicy::Continue`].
    pub failures: Vec<(String, String)>,
}

/// Batch instance name: `<domain>_inst_mdp__<n>`.
pub fn instance_name(short_name: &str, n: usize) -> String {
    format!("{short_name}_inst_mdp__{n}")
}

/// Every `(size_x, size_y)` pair in `sizes × sizes`, ordered by area.
///
/// The sort is stable, so equal areas keep x-major enumeration order
/// (`(2,3)` before `(3,2)`).
pub fn plan_sizes(sizes: RangeInclusive<u32>) -> Vec<(u32, u32)> {
    let mut pairs: Vec<(u32, u32)> = sizes
        .clone()
        .flat_map(|x| sizes.clone().map(move |y| (x, y)))
        .collect();
    pairs.sort_by_key(|&(x, y)| u64::from(x) * u64::from(y));
    pairs
}

/// A batch of instances for one domain.
#[derive(Clone, Debug)]
pub struct BatchPlan {
    /// Domain to generate.
    pub domain: BatchDomain,
    /// Inclusive size range applied to both axes.
    pub sizes: RangeInclusive<u32>,
    /// Base seed; instance `n` uses `base_seed ^ n`.
    pub base_seed: u64,
    /// Behaviour on failure.
    pub policy: FailurePolicy,
}

impl BatchPlan {
    /// A plan over the domain's default size range.
    pub fn new(domain: BatchDomain, base_seed: u64) -> Self {
        Self {
            domain,
            sizes: domain.default_sizes(),
            base_seed,
            policy: FailurePolicy::default(),
        }
    }

    /// Check the size range.
    ///
    /// # Errors
    ///
    /// [`GenError::InvalidArgument`] if the range starts at zero or is empty.
    pub fn validate(&self) -> Result<(), GenError> {
        if *self.sizes.start() == 0 {
            return Err(GenError::invalid("min_size", "must be at least 1"));
        }
        if self.sizes.is_empty() {
            return Err(GenError::invalid(
                "max_size",
                format!(
                    "must not be below min_size ({} > {})",
                    self.sizes.start(),
                    self.sizes.end()
                ),
            ));
        }
        Ok(())
    }

    /// Instance names with their sizes, in generation order.
    pub fn entries(&self) -> Vec<(String, u32, u32)> {
        plan_sizes(self.sizes.clone())
            .into_iter()
            .enumerate()
            .map(|(n, (x, y))| (instance_name(self.domain.short_name(), n), x, y))
            .collect()
    }

    /// Generate every instance into `dir`.
    ///
    /// # Errors
    ///
    /// [`BatchError::Plan`] for an invalid range, before anything is
    /// written. Under [`FailurePolicy::Abort`], [`BatchError::Instance`]
    /// for the first failing instance; earlier files stay on disk.
    pub fn run(&self, dir: &Path) -> Result<BatchReport, BatchError> {
        self.validate()?;
        let entries = self.entries();
        info!(
            domain = self.domain.short_name(),
            count = entries.len(),
            dir = %dir.display(),
            "starting batch"
        );

        let mut report = BatchReport::default();
        for (n, (name, size_x, size_y)) in entries.into_iter().enumerate() {
            let domain = self.domain.domain_for(size_x, size_y);
            let mut rng = seeded_rng(self.base_seed ^ n as u64);
            match emit_instance(domain.as_ref(), &name, dir, &mut rng) {
                Ok(path) => report.written.push(path),
                Err(source) => match self.policy {
                    FailurePolicy::Abort => return Err(BatchError::Instance { name, source }),
                    FailurePolicy::Continue => {
                        error!(instance = %name, size_x, size_y, error = %source, "instance failed");
                        report.failures.push((name, source.to_string()));
                    }
                },
            }
        }

        info!(
            written = report.written.len(),
            failed = report.failures.len(),
            "batch finished"
        );
        Ok(report)
    }
}
