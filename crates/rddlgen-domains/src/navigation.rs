//! Navigation domain: a robot crossing a grid with a left-to-right
//! obstacle gradient.
//!
//! Topology is a NORTH/SOUTH chain over the Y axis and an EAST/WEST chain
//! over the X axis. The robot starts at `(x<N>, y1)` and the goal is
//! `(x<N>, y<M>)`; every cell on an interior row gets an obstacle
//! probability `P(x,y)`.

use crate::domain::{Domain, GeneratedInstance};
use crate::obfuscate::{obfuscate, ObfuscationMapping, ObfuscationMode};
use crate::params;
use rand::RngCore;
use rddlgen_core::{
    check_planning, check_sizes, Document, Fact, InstanceDescriptor, ObjectType, Result,
};
use rddlgen_space::{axis_chain, Grid};
use tracing::debug;

/// Domain identifier of the navigation domain.
pub const DOMAIN_NAME: &str = "navigation_mdp";

/// Navigation allows a single non-default action per step.
pub const MAX_NONDEF_ACTIONS: u32 = 1;

/// Configuration for [`Navigation`].
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationConfig {
    /// Number of X positions. Default: 5.
    pub size_x: u32,
    /// Number of Y positions. Default: 5.
    pub size_y: u32,
    /// Obfuscation mode. Default: normal.
    pub mode: ObfuscationMode,
    /// Planning horizon. Default: 100.
    pub horizon: u32,
    /// Discount factor. Default: 0.95.
    pub discount: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            size_x: 5,
            size_y: 5,
            mode: ObfuscationMode::Normal,
            horizon: 100,
            discount: 0.95,
        }
    }
}

impl NavigationConfig {
    /// Check every option.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::InvalidArgument`](rddlgen_core::GenError::InvalidArgument) if:
    /// - `size_x` or `size_y` is zero
    /// - `horizon` is zero
    /// - `discount` is NaN or outside `[0, 1]`
    pub fn validate(&self) -> Result<()> {
        check_sizes(self.size_x, self.size_y)?;
        check_planning(self.horizon, self.discount, MAX_NONDEF_ACTIONS)
    }

    fn descriptor(&self, instance_name: &str) -> InstanceDescriptor {
        InstanceDescriptor {
            name: instance_name.to_string(),
            domain: DOMAIN_NAME.to_string(),
            horizon: self.horizon,
            discount: self.discount,
            max_nondef_actions: MAX_NONDEF_ACTIONS,
        }
    }
}

/// Navigation instance generator.
#[derive(Clone, Debug, Default)]
pub struct Navigation {
    config: NavigationConfig,
}

impl Navigation {
    /// Wrap a configuration. Validation happens in [`Domain::generate`].
    pub fn new(config: NavigationConfig) -> Self {
        Self { config }
    }

    /// The configuration.
    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    /// Build the canonical document: plain names, canonical order.
    fn canonical(
        &self,
        grid: &Grid,
        descriptor: InstanceDescriptor,
        rng: &mut dyn RngCore,
    ) -> Document {
        let mut doc = Document::new(descriptor);
        doc.objects.push(ObjectType::new(
            "xpos",
            grid.x().names().map(String::from).collect(),
        ));
        doc.objects.push(ObjectType::new(
            "ypos",
            grid.y().names().map(String::from).collect(),
        ));

        for step in axis_chain(grid.size_x(), grid.size_y()) {
            let axis = if step.direction.is_vertical() {
                grid.y()
            } else {
                grid.x()
            };
            doc.push_fact(Fact::new(
                step.direction.predicate(),
                [&axis[step.from], &axis[step.to]],
            ));
        }

        let (x_last, y_last) = (grid.size_x() - 1, grid.size_y() - 1);
        doc.push_fact(Fact::new("MIN-XPOS", [&grid.x()[0]]));
        doc.push_fact(Fact::new("MAX-XPOS", [&grid.x()[x_last]]));
        doc.push_fact(Fact::new("MIN-YPOS", [&grid.y()[0]]));
        doc.push_fact(Fact::new("MAX-YPOS", [&grid.y()[y_last]]));

        let (gx, gy) = grid.names(params::navigation_goal(grid));
        doc.push_fact(Fact::new("GOAL", [gx, gy]));

        for (cell, p) in params::obstacle_probabilities(grid, rng) {
            let (x, y) = grid.names(cell);
            doc.push_fact(Fact::valued("P", [x, y], p));
        }

        let (sx, sy) = grid.names(params::navigation_start(grid));
        doc.init_state.push(Fact::new("robot-at", [sx, sy]));
        doc
    }
}

impl Domain for Navigation {
    fn domain_name(&self) -> &'static str {
        DOMAIN_NAME
    }

    fn short_name(&self) -> &'static str {
        "navigation"
    }

    fn validate(&self) -> Result<()> {
        self.config.validate()
    }

    fn generate(&self, instance_name: &str, rng: &mut dyn RngCore) -> Result<GeneratedInstance> {
        self.config.validate()?;
        let descriptor = self.config.descriptor(instance_name);
        descriptor.validate()?;
        let grid = Grid::plain(self.config.size_x, self.config.size_y)?;
        let mapping = match self.config.mode {
            ObfuscationMode::Normal => None,
            ObfuscationMode::Obfuscate => Some(ObfuscationMapping::for_grid(&grid)?),
        };

        let mut document = self.canonical(&grid, descriptor, rng);
        if let Some(mapping) = &mapping {
            obfuscate(&mut document, mapping, rng);
        }
        debug!(
            instance = instance_name,
            size_x = grid.size_x(),
            size_y = grid.size_y(),
            mode = %self.config.mode,
            facts = document.non_fluents.len(),
            "generated navigation instance"
        );
        Ok(GeneratedInstance { document, mapping })
    }
}
