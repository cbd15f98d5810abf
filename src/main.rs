use std::num::NonZeroUsize;

use clap::{Parser, Subcommand};
use gachasim::{CategoricalSampler, Rarity, RollSession, Roller, Statistics, percentages, tally};
use serde::Serialize;

const MULTI_PULL: NonZeroUsize = NonZeroUsize::new(11).unwrap();
const DRAW_LIMIT: NonZeroUsize = NonZeroUsize::new(gachasim::DEFAULT_DRAW_LIMIT).unwrap();

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Random seed for reproducibility
    #[arg(long, default_value = None)]
    seed: Option<u64>,

    /// Give up an `until` pull after this many draws
    #[arg(long, default_value_t = DRAW_LIMIT)]
    limit: NonZeroUsize,

    /// Print one JSON document instead of text
    #[arg(long, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw once
    Single,
    /// Draw a batch (11 by default)
    Multi {
        #[arg(short, long, default_value_t = MULTI_PULL)]
        count: NonZeroUsize,
    },
    /// Draw until the given tier appears (label or alias, e.g. 英雄 or heroic)
    Until { target: Rarity },
}

#[derive(Serialize)]
struct Report<'a> {
    session: &'a RollSession<Rarity>,
    count: usize,
    statistics: &'a Statistics<Rarity>,
    percentages: Vec<(Rarity, f64)>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::builder()
        .format_timestamp_secs()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
    log::debug!("args: {:?}", args);

    let mut roller = match args.seed {
        Some(seed) => Roller::from_seed(seed),
        None => Roller::new(),
    };
    let sampler = CategoricalSampler::new(Rarity::table()?).with_limit(args.limit);

    let session = match args.command {
        Command::Single => sampler.draw_n(&mut roller, NonZeroUsize::MIN),
        Command::Multi { count } => sampler.draw_n(&mut roller, count),
        Command::Until { target } => {
            if !target.is_special() {
                log::info!("{target} is not one of the special tiers");
            }
            let (session, count) = sampler.draw_until(&mut roller, &target)?;
            log::debug!("{target} appeared after {count} draws");
            session
        }
    };

    let statistics = tally(sampler.table(), &session);
    let report = Report {
        session: &session,
        count: session.len(),
        statistics: &statistics,
        percentages: percentages(&statistics)?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &Report<'_>) {
    if let gachasim::RollKind::UntilTarget(target) = report.session.kind() {
        println!("{target} appeared after {} draws", report.count);
    }
    println!("Results:");
    println!("{}", report.session);
    println!();
    println!("Statistics:");
    print!("{}", report.statistics);
}
