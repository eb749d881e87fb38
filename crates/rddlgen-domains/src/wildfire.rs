//! Wildfire domain: fire spreading over a grid towards target cells.
//!
//! Topology is full cell adjacency (`NEIGHBOR(x1,y1,x2,y2)` in both
//! directions) under a [`Connectivity`] policy, minus any requested
//! omissions. Targets are static facts; initially burning cells are the
//! only dynamic facts.

use crate::domain::{Domain, GeneratedInstance};
use crate::obfuscate::{obfuscate, ObfuscationMapping, ObfuscationMode};
use crate::params;
use indexmap::IndexSet;
use rand::RngCore;
use rddlgen_core::{
    check_planning, check_sizes, Cell, Document, Fact, InstanceDescriptor, ObjectType, Result,
};
use rddlgen_space::{apply_omissions, neighbours, parse_omission, Connectivity, Grid, Omission};
use tracing::debug;

/// Domain identifier of the wildfire domain.
pub const DOMAIN_NAME: &str = "wildfire_mdp";

/// Configuration for [`Wildfire`].
///
/// Position literals use the plain names (`x1`, `y3`) whatever the
/// obfuscation mode.
#[derive(Clone, Debug, PartialEq)]
pub struct WildfireConfig {
    /// Number of X positions. Default: 4.
    pub size_x: u32,
    /// Number of Y positions. Default: 4.
    pub size_y: u32,
    /// Target positions such as `x2,y2`. `None` = the centre cell.
    pub targets: Option<Vec<String>>,
    /// Initially burning positions. `None` = the `(x1, y<M>)` corner.
    pub initial_burning: Option<Vec<String>>,
    /// Directed relations to drop, such as `x1,y3->x1,y2`. Default: none.
    pub omitted_neighbors: Vec<String>,
    /// Adjacency policy. Default: 8-connected.
    pub connectivity: Connectivity,
    /// Maximum simultaneous non-default actions. Default: 1.
    pub max_nondef_actions: u32,
    /// Planning horizon. Default: 40.
    pub horizon: u32,
    /// Discount factor. Default: 1.0.
    pub discount: f64,
    /// Obfuscation mode. Default: normal.
    pub mode: ObfuscationMode,
}

impl Default for WildfireConfig {
    fn default() -> Self {
        Self {
            size_x: 4,
            size_y: 4,
            targets: None,
            initial_burning: None,
            omitted_neighbors: Vec::new(),
            connectivity: Connectivity::Eight,
            max_nondef_actions: 1,
            horizon: 40,
            discount: 1.0,
            mode: ObfuscationMode::Normal,
        }
    }
}

/// A fully validated configuration: every literal resolved to cells.
#[derive(Clone, Debug)]
struct WildfirePlan {
    grid: Grid,
    targets: Vec<Cell>,
    initial_burning: Vec<Cell>,
    omissions: Vec<Omission>,
}

impl WildfireConfig {
    /// Check every option and literal without generating anything.
    ///
    /// # Errors
    ///
    /// - [`GenError::InvalidArgument`](rddlgen_core::GenError::InvalidArgument)
    ///   for a zero size, horizon or action budget, a discount outside
    ///   `[0, 1]`, or an explicitly empty target or burning list.
    /// - [`GenError::Format`](rddlgen_core::GenError::Format) for a position
    ///   literal that does not name an in-bounds cell.
    /// - [`GenError::UnknownRelationOmission`](rddlgen_core::GenError::UnknownRelationOmission)
    ///   for an omission without the `from->to` shape.
    pub fn validate(&self) -> Result<()> {
        self.resolve().map(|_| ())
    }

    fn resolve(&self) -> Result<WildfirePlan> {
        check_sizes(self.size_x, self.size_y)?;
        check_planning(self.horizon, self.discount, self.max_nondef_actions)?;
        let grid = Grid::plain(self.size_x, self.size_y)?;
        let targets = params::resolve_cells(&grid, "targets", self.targets.as_deref(), |g| {
            vec![params::default_target(g)]
        })?;
        let initial_burning = params::resolve_cells(
            &grid,
            "initial_burning",
            self.initial_burning.as_deref(),
            |g| vec![params::default_initial_burning(g)],
        )?;
        let omissions = self
            .omitted_neighbors
            .iter()
            .map(|literal| parse_omission(&grid, literal))
            .collect::<Result<Vec<_>>>()?;
        Ok(WildfirePlan {
            grid,
            targets: dedup_in_order(targets),
            initial_burning: dedup_in_order(initial_burning),
            omissions,
        })
    }

    fn descriptor(&self, instance_name: &str) -> InstanceDescriptor {
        InstanceDescriptor {
            name: instance_name.to_string(),
            domain: DOMAIN_NAME.to_string(),
            horizon: self.horizon,
            discount: self.discount,
            max_nondef_actions: self.max_nondef_actions,
        }
    }
}

fn dedup_in_order(cells: Vec<Cell>) -> Vec<Cell> {
    cells.into_iter().collect::<IndexSet<_>>().into_iter().collect()
}

/// Wildfire instance generator.
#[derive(Clone, Debug, Default)]
pub struct Wildfire {
    config: WildfireConfig,
}

impl Wildfire {
    /// Wrap a configuration. Validation happens in [`Domain::generate`].
    pub fn new(config: WildfireConfig) -> Self {
        Self { config }
    }

    /// The configuration.
    pub fn config(&self) -> &WildfireConfig {
        &self.config
    }

    fn canonical(&self, plan: &WildfirePlan, descriptor: InstanceDescriptor) -> Document {
        let grid = &plan.grid;
        let mut doc = Document::new(descriptor);
        doc.objects.push(ObjectType::new(
            "x_pos",
            grid.x().names().map(String::from).collect(),
        ));
        doc.objects.push(ObjectType::new(
            "y_pos",
            grid.y().names().map(String::from).collect(),
        ));

        let all = neighbours(grid.size_x(), grid.size_y(), self.config.connectivity);
        let outcome = apply_omissions(all, &plan.omissions);
        for relation in &outcome.kept {
            let (x1, y1) = grid.names(relation.from);
            let (x2, y2) = grid.names(relation.to);
            doc.push_fact(Fact::new("NEIGHBOR", [x1, y1, x2, y2]));
        }
        if !plan.omissions.is_empty() {
            doc.push_comment("Omitted neighbors:");
            for omission in &plan.omissions {
                doc.push_comment(omission.literal.clone());
            }
        }

        for &cell in &plan.targets {
            let (x, y) = grid.names(cell);
            doc.push_fact(Fact::new("TARGET", [x, y]));
        }
        for &cell in &plan.initial_burning {
            let (x, y) = grid.names(cell);
            doc.init_state.push(Fact::new("burning", [x, y]));
        }

        debug!(
            relations = outcome.kept.len(),
            removed = outcome.removed,
            unmatched = outcome.unmatched.len(),
            connectivity = %self.config.connectivity,
            "built wildfire topology"
        );
        doc
    }
}

impl Domain for Wildfire {
    fn domain_name(&self) -> &'static str {
        DOMAIN_NAME
    }

    fn short_name(&self) -> &'static str {
        "wildfire"
    }

    fn validate(&self) -> Result<()> {
        self.config.validate()
    }

    fn generate(&self, instance_name: &str, rng: &mut dyn RngCore) -> Result<GeneratedInstance> {
        let plan = self.config.resolve()?;
        let descriptor = self.config.descriptor(instance_name);
        descriptor.validate()?;
        let mapping = match self.config.mode {
            ObfuscationMode::Normal => None,
            ObfuscationMode::Obfuscate => Some(ObfuscationMapping::for_grid(&plan.grid)?),
        };

        let mut document = self.canonical(&plan, descriptor);
        if let Some(mapping) = &mapping {
            obfuscate(&mut document, mapping, rng);
        }
        debug!(
            instance = instance_name,
            size_x = plan.grid.size_x(),
            size_y = plan.grid.size_y(),
            targets = plan.targets.len(),
            burning = plan.initial_burning.len(),
            mode = %self.config.mode,
            "generated wildfire instance"
        );
        Ok(GeneratedInstance { document, mapping })
    }
}
