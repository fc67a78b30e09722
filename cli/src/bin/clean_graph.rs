#[macro_use]
extern crate log;

use anyhow::{Context, Result};
use clap::{App, AppSettings, Arg};
use graphprep_cli::settings::Settings;
use graphprep_cli::{init_logging, parse_directed_flag, with_common_args};
use graphprep_core::relabel::clean_graph_file;
use std::path::PathBuf;

fn main() -> Result<()> {
    let matches = with_common_args(
        App::new("clean_graph")
            .version(env!("CARGO_PKG_VERSION"))
            .setting(AppSettings::AllowNegativeNumbers)
            .author(env!("CARGO_PKG_AUTHORS"))
            .about("Renumbers the nodes of an edge list from 0 to n - 1 and removes repeated edges."),
    )
    .arg(
        Arg::with_name("GRAPH")
            .help("edge list with one \"source target\" pair per line")
            .required(true)
            .index(1),
    )
    .arg(
        Arg::with_name("DIRECTED")
            .help("1 if the graph is directed, undirected otherwise")
            .index(2),
    )
    .get_matches();

    let settings = Settings::from_matches(&matches).context("Could not load settings")?;
    init_logging(settings.logging.debug);

    let graph = PathBuf::from(
        matches
            .value_of_os("GRAPH")
            .ok_or_else(|| anyhow::anyhow!("No graph file given"))?,
    );
    let directed = parse_directed_flag(matches.value_of("DIRECTED"));
    debug!(
        "Cleaning {} graph {}",
        if directed { "directed" } else { "undirected" },
        graph.display()
    );

    let stdout = std::io::stdout();
    let (output, summary) =
        clean_graph_file(&graph, &settings.output.directory, directed, stdout.lock())
            .with_context(|| format!("Could not clean graph {}", graph.display()))?;
    debug!("Cleaned graph written to {}", output.display());

    eprintln!("{}", summary);
    Ok(())
}
