
use std::io::Write;
use std::time::Instant;
use log::info;
use colored::*;
use env_logger::Builder;
use clap::Args;
use clap::Parser;
use clap::ArgAction;
use anyhow::Result;

use sf_fold::fold_with;
use sf_fold::reconstruct;

use stackfold::input_parsers::ruler;
use stackfold::input_parsers::read_fasta_like_input;
use stackfold::energy_parsers::StackingModelArguments;
use stackfold::fold_parsers::FoldArguments;
use stackfold::report::MfeReport;


#[derive(Debug, Args)]
pub struct MfeInput {
    /// Input file (FASTA-like), or "-" for stdin
    #[arg(value_name = "INPUT", default_value = "-")]
    pub input: String,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbosity (-v = info, -vv = debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}


#[derive(Debug, Parser)]
#[command(name = "sf-mfe")]
#[command(author, version, about)]
pub struct Cli {
    #[command(flatten)]
    pub mfe: MfeInput,

    #[command(flatten, next_help_heading = "Energy model parameters")]
    pub energy: StackingModelArguments,

    #[command(flatten, next_help_heading = "Folding parameters")]
    pub fold: FoldArguments,
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
    init_logging(cli.mfe.verbose);
    cli.fold.init_thread_pool()?;

    let model = cli.energy.build_model()?;
    let (header, sequence) = read_fasta_like_input(&cli.mfe.input)?;

    let start = Instant::now();
    let tables = fold_with(&sequence, &model, cli.fold.schedule());
    let mfe = reconstruct(&tables, &sequence, &model)?;
    let elapsed = start.elapsed();

    if cli.mfe.json {
        let report = MfeReport::new(header, &sequence, &mfe)?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if let Some(h) = header {
        println!("{}", h.yellow())
    }

    let structure = mfe.dot_bracket()?;
    info!("{}", ruler(sequence.len().saturating_sub(1)).magenta());
    println!("{}\n{} {}", sequence, structure, format!("{:>6.2}", mfe.energy()).green());
    info!("{}", ruler(sequence.len().saturating_sub(1)).magenta());

    info!("Pairs ({}):", mfe.pairs().len());
    for p in mfe.pairs().iter() {
        info!("  ({:>3},{:>3}) {}-{}", p.i(), p.j(), sequence[p.i()], sequence[p.j()]);
    }
    info!("Stacks ({}):", mfe.stacks().len());
    for s in mfe.stacks() {
        info!("  {}", s);
    }
    info!("Stack energy sum: {:.2}", mfe.stack_energy());
    info!("Folding time: {:.3?}", elapsed);

    Ok(())
}
