use std::error::Error;

use clap::Parser;
use waypath::{building, Graph, Instruction};

#[derive(Debug, thiserror::Error)]
#[error("{from} -> {to}: {source}")]
struct PlanError {
    from: String,
    to: String,
    #[source]
    source: waypath::RouteError,
}

/// Prints turn-by-turn directions between two waypoints of the bundled building
#[derive(Parser)]
struct Cli {
    /// Id of the start waypoint
    #[arg(required_unless_present = "list")]
    from: Option<String>,

    /// Id of the destination waypoint
    #[arg(required_unless_present = "list")]
    to: Option<String>,

    /// Print the instructions as JSON
    #[arg(long)]
    json: bool,

    /// List all waypoints of the building and exit
    #[arg(long)]
    list: bool,

    /// Maximum number of waypoints settled by the route search
    #[arg(long, default_value_t = waypath::DEFAULT_STEP_LIMIT)]
    step_limit: usize,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    colog::init();
    let cli = Cli::parse();
    let g = building::sample_building();

    if cli.list {
        print_waypoints(g);
        return Ok(());
    }

    let (Some(from), Some(to)) = (cli.from, cli.to) else {
        return Err("both FROM and TO waypoints are required".into());
    };

    let instructions = match waypath::plan_with_limit(g, &from, &to, cli.step_limit) {
        Ok(instructions) => instructions,
        Err(source) => return Err(PlanError { from, to, source }.into()),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&instructions)?);
    } else {
        print_instructions(&from, &to, &instructions);
    }

    Ok(())
}

fn print_waypoints(g: &Graph) {
    for w in g.iter() {
        println!("{:<10} floor {:>2}  {}", w.id, w.floor, w.category);
    }
}

fn print_instructions(from: &str, to: &str, instructions: &[Instruction]) {
    if instructions.is_empty() {
        println!("You are already at {}.", to);
        return;
    }

    println!("{} -> {}", from, to);
    for (idx, i) in instructions.iter().enumerate() {
        println!(
            "{:>3}. {} ({:.1} m, floor {})",
            idx + 1,
            i.text,
            i.segment_length,
            i.floor,
        );
    }
    println!("Total: {:.1} m", waypath::total_length(instructions));
}
