use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

// 导入库模块
use graphkit::config::{Config, RelaxerKind};
use graphkit::graph::{GraphDocument, NamedGraph};
use graphkit::services::algorithm::{
    ConnectedComponents, CyclicCandidatePolicy, Dijkstra, RankedShortestPath, SearchOutcome,
};
use graphkit::utils::{logging, to_dot};

#[derive(Parser)]
#[clap(version = "0.1.0", author = "GraphKit Contributors")]
struct Cli {
    /// Configuration file (TOML)
    #[clap(short, long, global = true)]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the K best loopless paths between two vertices
    Paths {
        #[clap(short, long)]
        graph: PathBuf,
        #[clap(long)]
        from: String,
        #[clap(long)]
        to: String,
        /// Number of paths, overrides search.path_count
        #[clap(short = 'k', long)]
        count: Option<usize>,
        /// Distance semantics, overrides search.relaxer
        #[clap(long, value_enum)]
        relaxer: Option<RelaxerKind>,
        /// Keep expanding cyclic candidates instead of discarding them
        #[clap(long)]
        expand_cyclic: bool,
        /// Print the graph as DOT with the found paths highlighted
        #[clap(long)]
        dot: bool,
    },
    /// Print the single shortest path between two vertices
    Shortest {
        #[clap(short, long)]
        graph: PathBuf,
        #[clap(long)]
        from: String,
        #[clap(long)]
        to: String,
    },
    /// List the weakly connected components
    Components {
        #[clap(short, long)]
        graph: PathBuf,
    },
    /// Print the graph as DOT
    Dot {
        #[clap(short, long)]
        graph: PathBuf,
    },
}

fn load_graph(path: &Path) -> Result<NamedGraph> {
    let named = GraphDocument::load(path)?.into_graph()?;
    log::info!(
        "已加载图 {}: {} 个顶点, {} 条边",
        path.display(),
        named.graph.vertices().count(),
        named.graph.edge_ids().count()
    );
    Ok(named)
}

fn print_dot(named: &NamedGraph, highlight: &[graphkit::graph::EdgeId]) {
    let dot = to_dot(
        &named.graph,
        |v| named.vertex_name(v).to_string(),
        |e| named.weight(e).to_string(),
        highlight,
    );
    print!("{}", dot);
}

#[allow(clippy::too_many_arguments)]
fn run_paths(
    config: &Config,
    graph: &Path,
    from: &str,
    to: &str,
    count: Option<usize>,
    relaxer: Option<RelaxerKind>,
    expand_cyclic: bool,
    dot: bool,
) -> Result<()> {
    let named = load_graph(graph)?;
    let root = named.require_vertex(from)?;
    let target = named.require_vertex(to)?;

    let policy = if expand_cyclic {
        CyclicCandidatePolicy::Expand
    } else {
        config.search.cyclic_policy
    };

    let mut search = RankedShortestPath::builder()
        .graph(&named.graph)
        .edge_weight(|e| named.weight(e))
        .relaxer(relaxer.unwrap_or(config.search.relaxer).build())
        .path_count(count.unwrap_or(config.search.path_count))
        .cyclic_policy(policy)
        .build()?;
    let outcome = search.compute_between(root, target)?;

    if dot {
        let highlight: Vec<_> = search
            .computed_paths()
            .iter()
            .flat_map(|path| path.edges().iter().copied())
            .collect();
        print_dot(&named, &highlight);
        return Ok(());
    }

    for (rank, path) in search.computed_paths().iter().enumerate() {
        println!(
            "{:>3}. {:<12} {}",
            rank + 1,
            path.weight(),
            named.format_path(path.start(), path.edges())
        );
    }

    match outcome {
        SearchOutcome::Unreachable => println!("{} 无法到达 {}", from, to),
        _ => println!(
            "找到 {} 条路径 ({})",
            search.computed_path_count(),
            outcome
        ),
    }
    log::debug!("搜索统计: {:?}", search.stats());
    Ok(())
}

fn run(cli: Cli, config: &Config) -> Result<()> {
    match cli.command {
        Command::Paths {
            graph,
            from,
            to,
            count,
            relaxer,
            expand_cyclic,
            dot,
        } => run_paths(config, &graph, &from, &to, count, relaxer, expand_cyclic, dot)?,
        Command::Shortest { graph, from, to } => {
            let named = load_graph(&graph)?;
            let root = named.require_vertex(&from)?;
            let target = named.require_vertex(&to)?;
            let relaxer = config.search.relaxer.build();

            match Dijkstra::shortest_path(&named.graph, root, target, |e| named.weight(e), &*relaxer)? {
                Some((edges, weight)) => {
                    println!("{} {}", weight, named.format_path(root, &edges));
                }
                None => bail!("{} 无法到达 {}", from, to),
            }
        }
        Command::Components { graph } => {
            let named = load_graph(&graph)?;
            for (index, component) in ConnectedComponents::weakly_connected(&named.graph)
                .iter()
                .enumerate()
            {
                let names: Vec<&str> = component.iter().map(|&v| named.vertex_name(v)).collect();
                println!("{}: {}", index, names.join(", "));
            }
        }
        Command::Dot { graph } => {
            let named = load_graph(&graph)?;
            print_dot(&named, &[]);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    logging::init(&config.log)?;

    let result = run(cli, &config);
    if let Err(err) = &result {
        log::error!("{:#}", err);
    }

    logging::shutdown();
    result
}
