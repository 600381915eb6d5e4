use anyhow::{Context, Result};
use circuits::api::*;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

use provenance::{provenance_doc, write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Enumerate elementary circuits of generated digraphs")]
struct Cmd {
    /// Optional run label; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Enumerate circuits and write them as JSON with a provenance sidecar
    Run {
        #[command(flatten)]
        graph: GraphArgs,
        /// Check the result with the independent verifier before writing
        #[arg(long)]
        verify: bool,
        #[arg(long)]
        out: String,
    },
    /// Print only the number of circuits
    Count {
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
enum Family {
    Random,
    Cycle,
    Complete,
    Path,
}

#[derive(Args, Clone, Debug, Serialize)]
struct GraphArgs {
    #[arg(long, value_enum, default_value_t = Family::Random)]
    family: Family,
    #[arg(long)]
    vertices: usize,
    /// Edge probability for `--family random`
    #[arg(long, default_value_t = 0.2)]
    edge_prob: f64,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 0)]
    index: u64,
    /// Allow self-loops in random graphs
    #[arg(long)]
    self_loops: bool,
    #[arg(long, default_value_t = SearchCfg::default().max_depth)]
    max_depth: usize,
}

impl GraphArgs {
    fn build(&self) -> Digraph {
        let n = self.vertices;
        match self.family {
            Family::Random => draw_digraph(
                RandomDigraphCfg {
                    vertices: n,
                    edge_prob: self.edge_prob,
                    self_loops: self.self_loops,
                    shuffle_successors: true,
                },
                ReplayToken {
                    seed: self.seed,
                    index: self.index,
                },
            ),
            Family::Cycle => directed_cycle(n),
            Family::Complete => complete_digraph(n),
            Family::Path => directed_path(n),
        }
    }

    fn search_cfg(&self) -> SearchCfg {
        SearchCfg {
            max_depth: self.max_depth,
        }
    }
}

#[derive(Serialize)]
struct RunOutput<'a> {
    vertices: usize,
    edges: usize,
    circuits: &'a [Circuit],
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run { graph, verify, out } => run(&graph, verify, &out, cmd.tag).map(|_| ()),
        Action::Count { graph } => {
            println!("{}", count(&graph, cmd.tag.as_deref())?);
            Ok(())
        }
        Action::Report => report(cmd.tag),
    }
}

fn run(args: &GraphArgs, verify: bool, out: &str, tag: Option<String>) -> Result<PathBuf> {
    tracing::info!(family = ?args.family, vertices = args.vertices, out, tag = ?tag, "run");
    let g = args.build();
    let cs = enumerate_circuits_with(&g, args.search_cfg())
        .with_context(|| format!("enumerating circuits of {:?} graph", args.family))?;
    tracing::info!(edges = g.num_edges(), circuits = cs.len(), "enumerated");
    if verify {
        verify_circuits(&g, &cs).context("verifying enumerator output")?;
        tracing::info!("verified");
    }

    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let doc = RunOutput {
        vertices: g.num_vertices(),
        edges: g.num_edges(),
        circuits: &cs,
    };
    std::fs::write(out_path, serde_json::to_vec(&doc)?)
        .with_context(|| format!("writing {}", out_path.display()))?;

    let payload = Payload::new(serde_json::to_value(args)?, tag);
    write_sidecar(out_path, &payload)
}

fn count(args: &GraphArgs, tag: Option<&str>) -> Result<usize> {
    tracing::info!(family = ?args.family, vertices = args.vertices, tag, "count");
    let g = args.build();
    let n = count_circuits(&g, args.search_cfg())
        .with_context(|| format!("counting circuits of {:?} graph", args.family))?;
    Ok(n)
}

fn report(tag: Option<String>) -> Result<()> {
    let doc = provenance_doc(&Payload::new(serde_json::json!({}), tag), &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
