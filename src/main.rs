// Command-line driver: render a pattern to STL, or search for its minimum grid.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use life_sculpt::automaton::{steps, Pattern, SeedParams};
use life_sculpt::search::minimum_pattern_size;
use life_sculpt::stl::save_stl;
use life_sculpt::surface::{naive_cubes, synthesize, SynthesisConfig};

#[derive(Debug, Parser)]
#[command(name = "life-sculpt", about = "Printable sculptures from Game of Life histories")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evolve a pattern and write its surface as binary STL
    Render(RenderArgs),
    /// Find the smallest square grid each step count can run on
    MinSize(MinSizeArgs),
}

#[derive(Debug, Args)]
struct SeedArgs {
    /// glider, methuselah, r-pentomino, cross or random
    #[arg(long)]
    pattern: Pattern,

    /// Half-length of the cross bars (default: min(width, height) / 2 - 1)
    #[arg(long)]
    bar_length: Option<usize>,

    /// Fraction of live interior cells for the random pattern
    #[arg(long, default_value_t = 0.5)]
    density: f64,

    /// Seed for the random pattern (default: OS entropy)
    #[arg(long)]
    seed: Option<u64>,
}

impl SeedArgs {
    fn params(&self) -> SeedParams {
        SeedParams {
            bar_length: self.bar_length,
            density: self.density,
            seed: self.seed,
        }
    }
}

#[derive(Debug, Args)]
struct RenderArgs {
    #[command(flatten)]
    seed: SeedArgs,

    #[arg(long)]
    width: usize,

    #[arg(long)]
    height: usize,

    /// Number of generations after the seed
    #[arg(long)]
    steps: usize,

    /// Log a warning whenever a live cell touches the grid border
    #[arg(long)]
    warn_on_perimeter: bool,

    /// Emit a full cube per voxel instead of the culled, supported surface
    #[arg(long)]
    naive: bool,

    /// With --naive, add corner posts on the first layer
    #[arg(long, requires = "naive")]
    perimeter_posts: bool,

    /// Classify voxels on a single thread
    #[arg(long)]
    sequential: bool,

    #[arg(long, short)]
    output: PathBuf,
}

#[derive(Debug, Args)]
struct MinSizeArgs {
    #[command(flatten)]
    seed: SeedArgs,

    /// Step counts to search for
    #[arg(long, num_args = 1.., required = true)]
    steps: Vec<usize>,

    /// Largest size to try
    #[arg(long, default_value_t = 4096)]
    limit: usize,
}

fn render(args: &RenderArgs) -> Result<()> {
    let pattern = args.seed.pattern;
    let seed = pattern
        .seed(args.width, args.height, &args.seed.params())
        .with_context(|| format!("cannot seed {pattern}"))?;

    let history = steps(&seed, args.steps, args.warn_on_perimeter);
    info!(
        %pattern,
        generations = history.len(),
        population = history.total_population(),
        "evolved"
    );

    let mesh = if args.naive {
        naive_cubes(&history, args.perimeter_posts)
    } else {
        let mut config = SynthesisConfig::default();
        if args.sequential {
            config = config.sequential();
        }
        let synthesis = synthesize(&history, &config);
        info!(
            wedges = synthesis.wedges,
            floaters = synthesis.floaters.len(),
            "surface synthesized"
        );
        synthesis.mesh
    };

    save_stl(&args.output, &mesh)
        .with_context(|| format!("cannot write {}", args.output.display()))?;
    info!(path = %args.output.display(), triangles = mesh.len(), "saved");
    Ok(())
}

fn min_size(args: &MinSizeArgs) -> Result<()> {
    let pattern = args.seed.pattern;
    let params = args.seed.params();

    for &generations in &args.steps {
        match minimum_pattern_size(pattern, generations, &params, args.limit) {
            Some(size) => println!("{pattern}: {generations} steps -> {size}x{size}"),
            None => println!("{pattern}: {generations} steps -> none up to {}", args.limit),
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("life_sculpt=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Command::Render(args) => render(args),
        Command::MinSize(args) => min_size(args),
    }
}
