use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use geomancy_chart::{
    Chart, House, HouseSystem, IndicationConfig, Indications, ShieldSlot, DEFAULT_QUERENT,
    DEFAULT_QUESITED, MOTHERS,
};
use geomancy_figures::{Figure, FigureDetails};
use serde::Serialize;
use std::io;
use std::path::PathBuf;

mod flags;
mod render;

use flags::{HouseSystemFlag, ImpeditionFlag};

fn print_stdout(text: &str) -> Result<()> {
    use std::io::Write;

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[derive(Parser)]
#[command(name = "geomancy")]
#[command(about = "Cast and judge geomantic charts", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast a chart from four mothers
    Chart(ChartArgs),

    /// List the sixteen figures
    Figures(FiguresArgs),
}

#[derive(Args)]
struct ChartArgs {
    /// First mother
    #[arg(default_value = "populus")]
    figure1: String,

    /// Second mother
    #[arg(default_value = "populus")]
    figure2: String,

    /// Third mother
    #[arg(default_value = "populus")]
    figure3: String,

    /// Fourth mother
    #[arg(default_value = "populus")]
    figure4: String,

    /// House of the querent (0-11)
    #[arg(short = 'Q', long, default_value_t = DEFAULT_QUERENT)]
    querent: usize,

    /// House of the quesited (0-11)
    #[arg(short = 'q', long, default_value_t = DEFAULT_QUESITED)]
    quesited: usize,

    /// How houses are read off the shield
    #[arg(long, value_enum, default_value = "ordinary")]
    house_system: HouseSystemFlag,

    /// Override the impedition policy from the config
    #[arg(long, value_enum)]
    impedition: Option<ImpeditionFlag>,

    /// Show the indications found between querent and quesited
    #[arg(short, long)]
    indications: bool,

    /// Show the summed weight of the indications
    #[arg(short, long)]
    weight: bool,

    /// Show each house with its figure drawn
    #[arg(long)]
    list: bool,

    /// Draw the shield chart
    #[arg(long)]
    shield: bool,

    /// Draw the square house chart
    #[arg(long)]
    houses: bool,

    /// Output the whole reading as JSON
    #[arg(long)]
    json: bool,

    /// Engine configuration (TOML)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args)]
struct FiguresArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Everything a chart reading produces, as printed by `chart --json`
#[derive(Serialize)]
struct ChartOutput {
    seeds: [Figure; MOTHERS],
    house_system: HouseSystem,
    querent: usize,
    quesited: usize,
    houses: Vec<House>,
    shield: Vec<ShieldSlot>,
    index: House,
    part_of_fortune: House,
    way_of_the_point: Vec<House>,
    indications: Indications,
    weight: i32,
}

pub fn main_entry() -> Result<()> {
    let mut cli = Cli::parse();

    // keep stdout clean for JSON parsing
    let json_output = match &cli.command {
        Commands::Chart(args) => args.json,
        Commands::Figures(args) => args.json,
    };
    if json_output {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Chart(args) => run_chart(args),
        Commands::Figures(args) => run_figures(args),
    }
}

fn load_config(args: &ChartArgs) -> Result<IndicationConfig> {
    let mut config = match &args.config {
        Some(path) => IndicationConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => IndicationConfig::default(),
    };
    if let Some(policy) = args.impedition {
        config.impedition = policy.as_domain();
    }
    Ok(config)
}

fn build_chart(args: &ChartArgs) -> Result<Chart> {
    let names = [&args.figure1, &args.figure2, &args.figure3, &args.figure4];
    let chart = Chart::from_names(&names)
        .context("Invalid mother")?
        .with_positions(args.querent, args.quesited)
        .context("Invalid querent or quesited")?
        .with_house_system(args.house_system.as_domain())
        .with_config(load_config(args)?);
    log::debug!(
        "Cast chart from {:?} ({} houses)",
        chart.seeds(),
        chart.house_system()
    );
    Ok(chart)
}

fn run_chart(args: ChartArgs) -> Result<()> {
    let chart = build_chart(&args)?;
    let indications = chart.indications()?;

    if args.json {
        let output = ChartOutput {
            seeds: chart.seeds(),
            house_system: chart.house_system(),
            querent: args.querent,
            quesited: args.quesited,
            houses: chart.houses()?.to_vec(),
            shield: chart.shield(),
            index: chart.index()?,
            part_of_fortune: chart.part_of_fortune()?,
            way_of_the_point: chart.way_of_the_point()?,
            weight: indications.weight(),
            indications,
        };
        return print_stdout(&serde_json::to_string_pretty(&output)?);
    }

    let mut sections = Vec::new();
    if args.list {
        sections.push(render::render_house_list(&chart)?);
    }
    if args.shield {
        sections.push(format!(
            "Shield Chart\n------------\n{}",
            render::render_shield(&chart)?
        ));
    }
    if args.houses {
        sections.push(format!(
            "House Chart\n-----------\n{}",
            render::render_house_chart(&chart)?
        ));
    }
    if sections.is_empty() {
        sections.push(render::render_house_names(&chart)?);
    }
    if args.indications {
        sections.push(render::render_indications(&indications)?);
    }
    if args.weight {
        sections.push(format!("Weight = {}", indications.weight()));
    }

    print_stdout(&sections.join("\n\n"))
}

fn run_figures(args: FiguresArgs) -> Result<()> {
    let details: Vec<&FigureDetails> = Figure::all().map(Figure::details).collect();

    if args.json {
        return print_stdout(&serde_json::to_string_pretty(&details)?);
    }

    let lines: Vec<String> = details
        .iter()
        .map(|d| format!("{:04b} {:<15} {}", d.flags, d.name, d.english))
        .collect();
    print_stdout(&lines.join("\n"))
}
