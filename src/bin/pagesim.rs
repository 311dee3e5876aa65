use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use pagesim::{
    LookaheadMode, PolicyKind, ReferenceString, SimulationConfig, SimulationResult, Simulator,
};

#[derive(Parser)]
#[command(author, version, about = "pagesim - replay FIFO, LRU and OPTIMAL page replacement")]
struct Cli {
    /// Page references as decimal digits, e.g. "7045679"
    references: String,

    /// Number of frames (1-10)
    #[arg(short, long, default_value_t = 3)]
    frames: usize,

    /// Policy to replay: fifo, lru, optimal or all
    #[arg(short, long, default_value = "all")]
    policy: PolicyChoice,

    /// How OPTIMAL finds next uses
    #[arg(long, value_enum, default_value_t = LookaheadArg::Indexed)]
    lookahead: LookaheadArg,

    /// Print one line per step instead of the frame table
    #[arg(long)]
    trace: bool,

    /// Print results as JSON
    #[arg(long, conflicts_with = "trace")]
    json: bool,
}

/// One policy by name, or `all` of them.
#[derive(Clone, Copy)]
enum PolicyChoice {
    All,
    Only(PolicyKind),
}

impl PolicyChoice {
    fn kinds(self) -> Vec<PolicyKind> {
        match self {
            PolicyChoice::All => PolicyKind::ALL.to_vec(),
            PolicyChoice::Only(kind) => vec![kind],
        }
    }
}

impl FromStr for PolicyChoice {
    type Err = pagesim::Error;

    fn from_str(s: &str) -> pagesim::Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(PolicyChoice::All)
        } else {
            s.parse().map(PolicyChoice::Only)
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum LookaheadArg {
    Scan,
    Indexed,
}

impl From<LookaheadArg> for LookaheadMode {
    fn from(arg: LookaheadArg) -> Self {
        match arg {
            LookaheadArg::Scan => LookaheadMode::Scan,
            LookaheadArg::Indexed => LookaheadMode::Indexed,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let references =
        ReferenceString::parse(&cli.references).context("Invalid reference string")?;
    let config = SimulationConfig::new(cli.frames)
        .context("Invalid frame count")?
        .with_lookahead(cli.lookahead.into());
    let simulator = Simulator::new(&references, config);

    let results: Vec<SimulationResult> = cli
        .policy
        .kinds()
        .into_iter()
        .map(|kind| simulator.run_kind(kind))
        .collect();

    if cli.json {
        let wire: serde_json::Map<String, serde_json::Value> = results
            .iter()
            .map(|r| -> Result<(String, serde_json::Value)> {
                Ok((r.policy().to_string(), serde_json::to_value(r.to_wire())?))
            })
            .collect::<Result<_>>()?;
        println!("{}", serde_json::to_string_pretty(&wire)?);
        return Ok(());
    }

    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", result);
        if cli.trace {
            for step in result.table() {
                println!("  {}", step);
            }
            println!("  {}", result.stats());
        } else {
            print_table(&references, result);
        }
    }

    Ok(())
}

/// Frames as rows, steps as columns, misses marked with `*`.
fn print_table(references: &ReferenceString, result: &SimulationResult) {
    let header: Vec<String> = references.iter().map(|p| format!("{:>2}", p)).collect();
    println!("  ref    {}", header.join(" "));

    for frame in 0..result.frames() {
        let cells: Vec<String> = result
            .rows()
            .map(|row| format!("{:>2}", row[frame]))
            .collect();
        println!("  F{:<5} {}", frame, cells.join(" "));
    }

    let marks: Vec<String> = result
        .table()
        .iter()
        .map(|step| format!("{:>2}", if step.outcome.is_miss() { "*" } else { "" }))
        .collect();
    println!("  miss   {}", marks.join(" "));
}
