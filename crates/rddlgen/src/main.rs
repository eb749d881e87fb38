//! `rddlgen` command line: one instance per invocation, or a whole batch.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::Rng;
use rddlgen::{
    emit_instance, seeded_rng, BatchDomain, BatchPlan, Connectivity, Domain, FailurePolicy,
    Navigation, NavigationConfig, ObfuscationMode, Wildfire, WildfireConfig,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rddlgen", version, about = "Generate RDDL grid planning instances")]
struct Cli {
    /// Seed for all random draws. A fresh seed is chosen and logged if absent.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate one navigation instance.
    Navigation(NavigationArgs),
    /// Generate one wildfire instance.
    Wildfire(WildfireArgs),
    /// Generate every instance size in a range.
    Batch(BatchArgs),
}

#[derive(Args, Debug)]
struct NavigationArgs {
    /// Directory for the `.rddl` file; created if absent.
    output_dir: PathBuf,
    /// Instance name; the file is `<instance_name>.rddl`.
    instance_name: String,
    /// Number of X positions.
    size_x: u32,
    /// Number of Y positions.
    size_y: u32,
    /// `normal` or `obfuscate`.
    #[arg(default_value = "normal")]
    mode: ObfuscationMode,
    /// Planning horizon.
    #[arg(default_value_t = 100)]
    horizon: u32,
    /// Discount factor in [0, 1].
    #[arg(default_value_t = 0.95)]
    discount: f64,
}

#[derive(Args, Debug)]
struct WildfireArgs {
    /// Instance name; the file is `<instance_name>.rddl`.
    #[arg(long, alias = "instance_name")]
    instance_name: String,
    /// Number of X positions.
    #[arg(long, alias = "x_size")]
    x_size: u32,
    /// Number of Y positions.
    #[arg(long, alias = "y_size")]
    y_size: u32,
    /// Directory for the `.rddl` file; created if absent.
    #[arg(long, alias = "output_dir", default_value = ".")]
    output_dir: PathBuf,
    /// Target positions such as `x2,y2`. Default: the centre cell.
    #[arg(long, num_args = 1..)]
    targets: Option<Vec<String>>,
    /// Initially burning positions. Default: the `(x1, y<max>)` corner.
    #[arg(long, alias = "initial_burning", num_args = 1..)]
    initial_burning: Option<Vec<String>>,
    /// Directed neighbour relations to drop, such as `x1,y3->x1,y2`.
    #[arg(long, alias = "omit_neighbors", num_args = 1..)]
    omit_neighbors: Vec<String>,
    /// `4connected` or `8connected`.
    #[arg(long, default_value = "8connected")]
    connectivity: Connectivity,
    /// Maximum simultaneous non-default actions.
    #[arg(long, alias = "max_actions", default_value_t = 1)]
    max_actions: u32,
    /// Planning horizon.
    #[arg(long, default_value_t = 40)]
    horizon: u32,
    /// Discount factor in [0, 1].
    #[arg(long, default_value_t = 1.0)]
    discount: f64,
    /// `normal` or `obfuscate`.
    #[arg(long, default_value = "normal")]
    mode: ObfuscationMode,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DomainArg {
    Navigation,
    Wildfire,
}

impl From<DomainArg> for BatchDomain {
    fn from(d: DomainArg) -> Self {
        match d {
            DomainArg::Navigation => BatchDomain::Navigation,
            DomainArg::Wildfire => BatchDomain::Wildfire,
        }
    }
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// Domain to generate.
    #[arg(value_enum)]
    domain: DomainArg,
    /// Directory for the `.rddl` files; created if absent.
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
    /// Smallest axis size. Defaults to the domain's range.
    #[arg(long)]
    min_size: Option<u32>,
    /// Largest axis size. Defaults to the domain's range.
    #[arg(long)]
    max_size: Option<u32>,
    /// Log failed instances and keep going instead of stopping.
    #[arg(long)]
    keep_going: bool,
}

fn init_tracing(verbose: bool, json: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?
    };
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.json)?;

    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    info!(seed, "using seed");

    match cli.command {
        Command::Navigation(args) => {
            let nav = Navigation::new(NavigationConfig {
                size_x: args.size_x,
                size_y: args.size_y,
                mode: args.mode,
                horizon: args.horizon,
                discount: args.discount,
            });
            generate_one(&nav, &args.instance_name, args.output_dir, seed)
        }
        Command::Wildfire(args) => {
            let fire = Wildfire::new(WildfireConfig {
                size_x: args.x_size,
                size_y: args.y_size,
                targets: args.targets,
                initial_burning: args.initial_burning,
                omitted_neighbors: args.omit_neighbors,
                connectivity: args.connectivity,
                max_nondef_actions: args.max_actions,
                horizon: args.horizon,
                discount: args.discount,
                mode: args.mode,
            });
            generate_one(&fire, &args.instance_name, args.output_dir, seed)
        }
        Command::Batch(args) => {
            let domain = BatchDomain::from(args.domain);
            let defaults = domain.default_sizes();
            let plan = BatchPlan {
                sizes: args.min_size.unwrap_or(*defaults.start())
                    ..=args.max_size.unwrap_or(*defaults.end()),
                policy: if args.keep_going {
                    FailurePolicy::Continue
                } else {
                    FailurePolicy::Abort
                },
                ..BatchPlan::new(domain, seed)
            };
            let report = plan
                .run(&args.output_dir)
                .with_context(|| format!("batch into {} failed", args.output_dir.display()))?;
            if !report.failures.is_empty() {
                anyhow::bail!("{} instance(s) failed", report.failures.len());
            }
            Ok(())
        }
    }
}

fn generate_one(domain: &dyn Domain, name: &str, dir: PathBuf, seed: u64) -> Result<()> {
    let mut rng = seeded_rng(seed);
    emit_instance(domain, name, &dir, &mut rng)
        .with_context(|| format!("generating {} instance `{name}`", domain.short_name()))?;
    Ok(())
}
