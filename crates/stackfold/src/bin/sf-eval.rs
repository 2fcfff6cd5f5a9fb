
use std::io::Write;
use log::info;
use colored::*;
use env_logger::Builder;
use clap::Args;
use clap::Parser;
use clap::ArgAction;
use anyhow::Result;

use sf_energy::EnergyModel;
use sf_structure::PairTable;

use stackfold::input_parsers::ruler;
use stackfold::input_parsers::read_eval_input;
use stackfold::energy_parsers::StackingModelArguments;
use stackfold::energy_parsers::check_pairs;


#[derive(Debug, Args)]
pub struct EvalInput {
    /// Input file (FASTA-like, sequence and structure), or "-" for stdin
    #[arg(value_name = "INPUT", default_value = "-")]
    pub input: String,

    /// Verbosity (-v = info, -vv = debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}


#[derive(Debug, Parser)]
#[command(name = "sf-eval")]
#[command(author, version, about)]
pub struct Cli {
    #[command(flatten)]
    pub eval: EvalInput,

    #[command(flatten, next_help_heading = "Energy model parameters")]
    pub energy: StackingModelArguments,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            // no prefix, just the message
            writeln!(buf, "{}", record.args())
        })
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.eval.verbose);

    let model = cli.energy.build_model()?;

    let (header, sequence, structure) = read_eval_input(&cli.eval.input)?;
    if let Some(h) = header {
        println!("{}", h.yellow())
    }

    let pairings = PairTable::try_from(&structure)?;
    check_pairs(&model, &sequence, &pairings)?;
    let energy = model.energy_of_structure(&sequence, &pairings);

    info!("{}", ruler(sequence.len().saturating_sub(1)).magenta());
    println!("{}\n{} {}", sequence, structure, format!("{:>6.2}", energy).green());
    info!("{}", ruler(sequence.len().saturating_sub(1)).magenta());

    Ok(())
}
