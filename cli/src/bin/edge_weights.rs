#[macro_use]
extern crate log;

use anyhow::{Context, Result};
use clap::{App, AppSettings, Arg};
use graphprep_cli::settings::Settings;
use graphprep_cli::{init_logging, with_common_args};
use graphprep_core::weights::{annotate_file, PropagationModel};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::path::PathBuf;

fn main() -> Result<()> {
    let matches = with_common_args(
        App::new("edge_weights")
            .version(env!("CARGO_PKG_VERSION"))
            .setting(AppSettings::AllowNegativeNumbers)
            .author(env!("CARGO_PKG_AUTHORS"))
            .about("Annotates the edges of a graph with propagation probabilities.")
            .after_help(
                "MODELS:\n    0    constant IC, needs the probability <p1>\n    1    weighted cascade\n    2    tri-valency IC, picks one of <p1> <p2> ... per edge\n    3    uniform LT\n    4    random LT",
            ),
    )
    .arg(
        Arg::with_name("seed")
            .short("s")
            .long("seed")
            .help("Seed for the random models")
            .takes_value(true),
    )
    .arg(
        Arg::with_name("GRAPH")
            .help("edge list with one \"source target\" pair per line")
            .required(true)
            .index(1),
    )
    .arg(
        Arg::with_name("MODEL")
            .help("propagation model, see MODELS")
            .required(true)
            .index(2),
    )
    .arg(
        Arg::with_name("PARAMS")
            .help("probabilities used by the model")
            .multiple(true)
            .index(3),
    )
    .get_matches();

    let settings = Settings::from_matches(&matches).context("Could not load settings")?;
    init_logging(settings.logging.debug);

    let graph = PathBuf::from(
        matches
            .value_of_os("GRAPH")
            .ok_or_else(|| anyhow::anyhow!("No graph file given"))?,
    );
    let model_arg = matches.value_of("MODEL").unwrap_or_default();
    let model_id = model_arg
        .trim()
        .parse::<i64>()
        .with_context(|| format!("Invalid model {:?}", model_arg))?;
    let params = matches
        .values_of("PARAMS")
        .map(|values| {
            values
                .map(|p| {
                    p.trim()
                        .parse::<f64>()
                        .with_context(|| format!("Invalid probability {:?}", p))
                })
                .collect::<Result<Vec<_>>>()
        })
        .transpose()?
        .unwrap_or_default();

    let model = match PropagationModel::from_args(model_id, &params)? {
        Some(model) => model,
        None => {
            warn!(
                "Unknown model {}, expected a value from 0 to 4. No output is written.",
                model_id
            );
            return Ok(());
        }
    };

    let mut rng = match settings.random.seed {
        Some(seed) => {
            debug!("Using random seed {}", seed);
            SmallRng::seed_from_u64(seed)
        }
        None => SmallRng::from_entropy(),
    };

    annotate_file(&graph, &settings.output.directory, &model, &mut rng)
        .with_context(|| format!("Could not annotate graph {}", graph.display()))?;
    Ok(())
}
