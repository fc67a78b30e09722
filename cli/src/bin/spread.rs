#[macro_use]
extern crate log;

use anyhow::{Context, Result};
use clap::{App, AppSettings, Arg};
use graphprep_cli::settings::Settings;
use graphprep_cli::{init_logging, with_common_args};
use graphprep_core::diffusion::{load_weighted_graph, DiffusionModel};
use graphprep_core::NodeID;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::path::PathBuf;

fn main() -> Result<()> {
    let matches = with_common_args(
        App::new("spread")
            .version(env!("CARGO_PKG_VERSION"))
            .setting(AppSettings::AllowNegativeNumbers)
            .author(env!("CARGO_PKG_AUTHORS"))
            .about("Estimates the expected number of nodes reached from a seed set on an annotated graph.")
            .after_help(
                "MODELS:\n    ic    independent cascade\n    lt    linear threshold",
            ),
    )
    .arg(
        Arg::with_name("seed")
            .short("s")
            .long("seed")
            .help("Seed for the random number generator")
            .takes_value(true),
    )
    .arg(
        Arg::with_name("simulations")
            .short("n")
            .long("simulations")
            .help("Number of Monte-Carlo runs")
            .takes_value(true),
    )
    .arg(
        Arg::with_name("GRAPH")
            .help("annotated edge list with one \"source target weight\" triple per line")
            .required(true)
            .index(1),
    )
    .arg(
        Arg::with_name("MODEL")
            .help("diffusion model, see MODELS")
            .required(true)
            .index(2),
    )
    .arg(
        Arg::with_name("SEEDS")
            .help("identifiers of the initially active nodes")
            .required(true)
            .multiple(true)
            .index(3),
    )
    .get_matches();

    let settings = Settings::from_matches(&matches).context("Could not load settings")?;
    init_logging(settings.logging.debug);

    let graph_path = PathBuf::from(
        matches
            .value_of_os("GRAPH")
            .ok_or_else(|| anyhow::anyhow!("No graph file given"))?,
    );
    let model: DiffusionModel = matches.value_of("MODEL").unwrap_or_default().parse()?;
    let seeds = matches
        .values_of("SEEDS")
        .into_iter()
        .flatten()
        .map(|s| {
            s.trim()
                .parse::<NodeID>()
                .with_context(|| format!("Invalid seed node {:?}", s))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut rng = match settings.random.seed {
        Some(seed) => {
            debug!("Using random seed {}", seed);
            SmallRng::seed_from_u64(seed)
        }
        None => SmallRng::from_entropy(),
    };

    let graph = load_weighted_graph(&graph_path)
        .with_context(|| format!("Could not load graph {}", graph_path.display()))?;
    info!(
        "Running {} {} simulations from {} seed nodes",
        settings.simulation.runs,
        model,
        seeds.len()
    );
    let spread = graph.estimate_spread(model, &seeds, settings.simulation.runs, &mut rng)?;
    println!("{:.4}", spread);
    Ok(())
}
