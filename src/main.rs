use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cograph_core::{
    analyze_centrality_named,
    centrality::CentralityKind,
    find_max_clique, find_triads,
    persistence, AnalysisPipeline, CoauthorGraph, CographConfig, EdgeTable, GraphBuilder,
    GraphMetrics, GraphPruner, MergePolicy, TriadStrategy,
};

#[derive(Parser, Debug)]
#[command(name = "cograph", about = "Co-authorship graph analytics CLI")]
struct Cli {
    #[command(flatten)]
    graph: GraphArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command: where the edges come from and how the
/// graph is pruned before analysis.
#[derive(Args, Debug)]
struct GraphArgs {
    /// Edge CSV file(s) with Source,Target,Weight,Journal columns
    #[arg(long, required = true, num_args = 1..)]
    edges: Vec<PathBuf>,
    /// Path to config file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Drop edges lighter than this
    #[arg(long)]
    min_edge_weight: Option<f64>,
    /// Drop nodes with fewer incident edges than this
    #[arg(long)]
    min_degree: Option<u32>,
    /// Duplicate-pair policy: 'last' or 'sum'
    #[arg(long)]
    merge_policy: Option<MergePolicy>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print graph statistics before and after pruning.
    Stats,

    /// List triangles whose summed edge weight meets a threshold.
    Triads {
        /// Minimum summed weight of the three edges
        #[arg(long)]
        min_weight: Option<f64>,
        /// Number of triads to print
        #[arg(long, default_value_t = 20)]
        top: usize,
        /// Candidate generation: 'exhaustive' or 'neighbor'
        #[arg(long)]
        strategy: Option<TriadStrategy>,
    },

    /// Print the largest clique.
    Clique,

    /// Rank authors by a centrality metric.
    Centrality {
        /// degree, betweenness, closeness or eigenvector
        #[arg(long, default_value = "degree")]
        kind: String,
        /// Keep authors scoring at least this fraction of the maximum
        #[arg(long, default_value_t = 0.0)]
        fraction: f64,
        /// Number of authors to print
        #[arg(long, default_value_t = 20)]
        top: usize,
    },

    /// List authors whose edges span more than one journal.
    Bridges,

    /// Run the full analysis and save a JSON report.
    Analyze {
        /// Output path for the report
        #[arg(long)]
        out: PathBuf,
        /// Centrality metrics to include (default: all)
        #[arg(long, value_delimiter = ',')]
        kinds: Vec<String>,
    },

    /// Write the pruned graph as an edge CSV.
    Export {
        /// Output path for the CSV
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli.graph)?;

    match cli.command {
        Commands::Stats => cmd_stats(&cli.graph, &config)?,
        Commands::Triads {
            min_weight,
            top,
            strategy,
        } => {
            let mut config = config;
            if let Some(w) = min_weight {
                config.min_triad_weight = w;
            }
            if let Some(s) = strategy {
                config.triad_strategy = s;
            }
            config.validate()?;
            cmd_triads(&cli.graph, &config, top)?;
        }
        Commands::Clique => cmd_clique(&cli.graph, &config)?,
        Commands::Centrality {
            kind,
            fraction,
            top,
        } => cmd_centrality(&cli.graph, &config, &kind, fraction, top)?,
        Commands::Bridges => cmd_bridges(&cli.graph, &config)?,
        Commands::Analyze { out, kinds } => cmd_analyze(&cli.graph, &config, &out, &kinds)?,
        Commands::Export { out } => cmd_export(&cli.graph, &config, &out)?,
    }

    Ok(())
}

fn load_config(args: &GraphArgs) -> anyhow::Result<CographConfig> {
    let mut config = match &args.config {
        Some(path) => CographConfig::from_json_file(path)?,
        None => CographConfig::default(),
    };
    if let Some(w) = args.min_edge_weight {
        config.min_edge_weight = w;
    }
    if let Some(d) = args.min_degree {
        config.min_degree = d;
    }
    if let Some(p) = args.merge_policy {
        config.merge_policy = p;
    }
    config.validate()?;
    tracing::debug!(?config, "using config");
    Ok(config)
}

/// Load the edge files, build the graph and apply both filters.
fn load_pruned(args: &GraphArgs, config: &CographConfig) -> anyhow::Result<CoauthorGraph> {
    let mut graph = GraphBuilder::new(config).build_from_paths(&args.edges)?;
    GraphPruner::filter_edges(&mut graph, config.min_edge_weight);
    GraphPruner::filter_nodes(&mut graph, config.min_degree);
    Ok(graph)
}

fn print_metrics(label: &str, m: &GraphMetrics) {
    println!("{label}:");
    println!("  Nodes: {}", m.num_nodes);
    println!("  Edges: {}", m.num_edges);
    println!("  Average degree: {:.3}", m.avg_degree);
    println!("  Density: {:.4}", m.density);
    println!("  Isolated nodes: {}", m.isolated_nodes);
    println!("  Total weight: {}", m.total_weight);
    println!("  Average clustering: {:.4}", m.avg_clustering);
}

fn cmd_stats(args: &GraphArgs, config: &CographConfig) -> anyhow::Result<()> {
    let mut graph = GraphBuilder::new(config).build_from_paths(&args.edges)?;
    print_metrics("Graph as built", &GraphMetrics::compute(&graph));

    let edges_removed = GraphPruner::filter_edges(&mut graph, config.min_edge_weight);
    let nodes_removed = GraphPruner::filter_nodes(&mut graph, config.min_degree);
    println!(
        "\nPruned {} edges (weight < {}) and {} nodes (degree < {})\n",
        edges_removed, config.min_edge_weight, nodes_removed, config.min_degree
    );
    print_metrics("Graph after pruning", &GraphMetrics::compute(&graph));
    Ok(())
}

fn cmd_triads(args: &GraphArgs, config: &CographConfig, top: usize) -> anyhow::Result<()> {
    let graph = load_pruned(args, config)?;
    let scan = find_triads(&graph, config.min_triad_weight, config.triad_strategy);

    println!(
        "{} triads with weight >= {} ({} candidates examined)",
        scan.len(),
        config.min_triad_weight,
        scan.examined
    );
    for triad in scan.top_n(top) {
        println!(
            "  {:>10}  {} | {} | {}",
            triad.weight, triad.members[0], triad.members[1], triad.members[2]
        );
    }
    Ok(())
}

fn cmd_clique(args: &GraphArgs, config: &CographConfig) -> anyhow::Result<()> {
    let graph = load_pruned(args, config)?;
    let clique = find_max_clique(&graph);

    if clique.is_empty() {
        println!("No clique found (graph has no edges).");
    } else {
        println!("Maximum clique ({} authors):", clique.len());
        for member in &clique.members {
            println!("  {member}");
        }
    }
    Ok(())
}

fn cmd_centrality(
    args: &GraphArgs,
    config: &CographConfig,
    kind: &str,
    fraction: f64,
    top: usize,
) -> anyhow::Result<()> {
    let graph = load_pruned(args, config)?;
    let scores = analyze_centrality_named(&graph, kind, config)?;

    let Some(metric) = scores.kind else {
        println!("Unknown centrality '{kind}': no scores.");
        return Ok(());
    };

    let rows = scores.at_least_fraction_of_max(fraction);
    println!("{} centrality ({} authors, mean {:.4}):", metric, scores.len(), scores.mean());
    for (name, score) in rows.into_iter().take(top) {
        println!("  {:<40} {:.6}", name, score);
    }
    Ok(())
}

fn cmd_bridges(args: &GraphArgs, config: &CographConfig) -> anyhow::Result<()> {
    let graph = load_pruned(args, config)?;
    let bridges = graph.bridging_authors();

    println!("{} authors span more than one journal:", bridges.len());
    for name in bridges {
        let journals: Vec<String> = graph.author_journals(&name).into_iter().collect();
        println!("  {:<40} {}", name, journals.join(", "));
    }
    Ok(())
}

fn cmd_analyze(
    args: &GraphArgs,
    config: &CographConfig,
    out: &Path,
    kinds: &[String],
) -> anyhow::Result<()> {
    let kinds = if kinds.is_empty() {
        CentralityKind::ALL.to_vec()
    } else {
        kinds
            .iter()
            .map(|k| k.parse::<CentralityKind>())
            .collect::<Result<Vec<_>, _>>()?
    };

    let table = EdgeTable::from_paths(&args.edges)?;
    let pipeline = AnalysisPipeline::new(config.clone()).with_kinds(kinds);
    let (_, report) = pipeline.run(&table)?;

    println!(
        "Analyzed {} authors / {} edges: {} triads, max clique of {}",
        report.after.num_nodes,
        report.after.num_edges,
        report.triads.len(),
        report.max_clique.len()
    );

    persistence::save_report(out, &report, config)?;
    println!("Report saved to {}", out.display());
    Ok(())
}

fn cmd_export(args: &GraphArgs, config: &CographConfig, out: &Path) -> anyhow::Result<()> {
    let graph = load_pruned(args, config)?;
    let written = persistence::export_edges(out, &graph)?;
    println!("Wrote {} edges to {}", written, out.display());
    Ok(())
}
