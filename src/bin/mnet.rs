//! CLI entry point for the `mnet` command-line tool.

use std::process;

use clap::{Args, Parser, Subcommand};

use matrix_network::cli::commands::{self, TraversalOrder};
use matrix_network::engine::RouteMetric;
use matrix_network::types::{NetResult, DEFAULT_CAPACITY};
use matrix_network::{NetError, Network};

#[derive(Parser)]
#[command(
    name = "mnet",
    about = "Query weighted undirected networks described on the command line"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// The network every command runs against.
#[derive(Args)]
struct NetworkArgs {
    /// Add a vertex (repeatable); edge endpoints are added implicitly
    #[arg(long = "vertex", value_name = "LABEL")]
    vertices: Vec<String>,
    /// Add an edge as A:B or A:B:WEIGHT (repeatable, weight defaults to 1)
    #[arg(long = "edge", value_name = "A:B[:W]")]
    edges: Vec<String>,
    /// Initial vertex capacity
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,
}

impl NetworkArgs {
    fn build(&self) -> NetResult<Network<String>> {
        commands::build_network(&self.vertices, &self.edges, self.capacity)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Lightest path between two vertices
    Path {
        /// Start vertex
        from: String,
        /// End vertex
        to: String,
        #[command(flatten)]
        net: NetworkArgs,
    },
    /// Path with the fewest edges between two vertices
    Hops {
        /// Start vertex
        from: String,
        /// End vertex
        to: String,
        #[command(flatten)]
        net: NetworkArgs,
    },
    /// Closest of several candidate vertices
    Nearest {
        /// Start vertex
        from: String,
        /// Candidate vertices, earlier ones win ties
        #[arg(required = true)]
        candidates: Vec<String>,
        /// Metric: weight or hops
        #[arg(long, default_value = "weight")]
        by: String,
        #[command(flatten)]
        net: NetworkArgs,
    },
    /// List the vertices reachable from a start vertex
    Traverse {
        /// Start vertex
        start: String,
        /// Order: bfs or dfs
        #[arg(long, default_value = "bfs")]
        order: String,
        #[command(flatten)]
        net: NetworkArgs,
    },
    /// Report whether the network is connected
    Connected {
        #[command(flatten)]
        net: NetworkArgs,
    },
    /// List the neighbors of a vertex with edge weights
    Neighbors {
        /// Vertex to inspect
        vertex: String,
        #[command(flatten)]
        net: NetworkArgs,
    },
    /// Print the weight matrix and vertex table
    Dump {
        #[command(flatten)]
        net: NetworkArgs,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
            .init();
    }

    let result = match cli.command {
        Commands::Path { from, to, net } => net
            .build()
            .and_then(|n| commands::cmd_path(&n, &from, &to, json)),
        Commands::Hops { from, to, net } => net
            .build()
            .and_then(|n| commands::cmd_hops(&n, &from, &to, json)),
        Commands::Nearest {
            from,
            candidates,
            by,
            net,
        } => {
            let metric = match by.as_str() {
                "weight" => RouteMetric::Weight,
                "hops" => RouteMetric::Hops,
                _ => {
                    eprintln!("Invalid metric: {}", by);
                    process::exit(3);
                }
            };
            net.build()
                .and_then(|n| commands::cmd_nearest(&n, &from, &candidates, metric, json))
        }
        Commands::Traverse { start, order, net } => {
            let order = match TraversalOrder::from_name(&order) {
                Some(o) => o,
                None => {
                    eprintln!("Invalid traversal order: {}", order);
                    process::exit(3);
                }
            };
            net.build()
                .and_then(|n| commands::cmd_traverse(&n, &start, order, json))
        }
        Commands::Connected { net } => net
            .build()
            .and_then(|n| commands::cmd_connected(&n, json)),
        Commands::Neighbors { vertex, net } => net
            .build()
            .and_then(|n| commands::cmd_neighbors(&n, &vertex, json)),
        Commands::Dump { net } => net.build().and_then(|n| commands::cmd_dump(&n, json)),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            NetError::InvalidArgument(_)
            | NetError::DuplicateVertex(_)
            | NetError::SelfLoop(_) => 3,
            NetError::ElementNotFound(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
