//! lift-ga — search for an elevator dispatch policy with a genetic algorithm.
//!
//! Loads a scenario description, evolves fixed-length candidate action
//! sequences scored by `lift-sim`, and writes the consumed prefix of every
//! improving fully-completing candidate to the result file.
//!
//! ```text
//! RUST_LOG=info cargo run --release -p lift-ga -- data/input.txt --out best.txt
//! ```

mod search;

#[cfg(test)]
mod tests;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, ensure};
use clap::Parser;
use log::{debug, info, warn};

use lift_core::SimConfig;
use lift_output::{CsvWriter, GenerationRow, OutputWriter, TraceObserver, write_best_actions};
use lift_scenario::load_scenario;
use lift_sim::{SimBuilder, evaluate};

use search::{Search, SearchParams};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(version, about = "Evolve an elevator dispatch policy for a fixed request stream")]
struct Args {
    /// Scenario description (cars, then time-stamped requests).
    scenario: PathBuf,

    /// Where the best completing action sequence is written.
    #[arg(long, default_value = "out.txt")]
    out: PathBuf,

    /// Directory for generations.csv and the final events.csv trace.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    #[arg(long, default_value_t = 1_000)]
    population: usize,

    /// Length of every candidate action sequence.
    #[arg(long, default_value_t = 200)]
    actions: usize,

    #[arg(long, default_value_t = 1_000)]
    generations: u64,

    /// Stop once the best fitness exceeds this (0.32 ≈ 1,140 ticks).
    #[arg(long, default_value_t = 0.32)]
    target: f64,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    #[arg(long, default_value_t = 5)]
    elite: usize,

    #[arg(long, default_value_t = 0.95)]
    crossover: f64,

    #[arg(long, default_value_t = 0.1)]
    mutation: f64,

    /// Tick budget per simulation run.
    #[arg(long, default_value_t = SimConfig::DEFAULT_MAX_TICKS)]
    max_ticks: u64,

    /// Worker threads for scoring.  Defaults to all logical cores.
    #[arg(long)]
    threads: Option<usize>,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    ensure!(args.population > args.elite, "population must exceed the elite count");
    ensure!(args.actions > 0, "candidates need at least one action");

    if let Some(n) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .context("configure scoring thread pool")?;
    }

    let scenario = load_scenario(&args.scenario)
        .with_context(|| format!("load scenario {}", args.scenario.display()))?;
    info!(
        "scenario: {} cars, {} riders, {} requests, top floor {}",
        scenario.cars().len(),
        scenario.rider_count(),
        scenario.request_count(),
        scenario.top_floor()
    );

    let config = SimConfig::default().with_max_ticks(args.max_ticks);
    config.validate()?;

    let mut writer = match &args.output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            Some(CsvWriter::new(dir)?)
        }
        None => None,
    };

    let params = SearchParams {
        population:     args.population,
        actions:        args.actions,
        elite:          args.elite,
        crossover_rate: args.crossover,
        mutation_rate:  args.mutation,
        ..SearchParams::default()
    };

    let t0 = Instant::now();
    let mut search = Search::new(&scenario, config.clone(), params, args.seed);
    let mut best_saved = 0.0;

    loop {
        let best = search.best();

        // Re-run the leader on a fresh simulation for the progress line.
        match evaluate(&scenario, &best.genes, &config) {
            Ok(run) => {
                info!(
                    "generation {}{}: fitness {:.9}, tick {}, missed {}, moves {}",
                    search.generation(),
                    if best.elite { "*" } else { "" },
                    best.fitness,
                    run.final_tick.0,
                    run.unfulfilled,
                    run.used_actions
                );
                if run.used_actions == best.genes.len() {
                    warn!("best candidate used every action; --actions may be too small");
                }
                if let Some(w) = writer.as_mut() {
                    w.write_generation(&GenerationRow {
                        generation:   search.generation(),
                        fitness:      best.fitness,
                        elite:        best.elite,
                        final_tick:   run.final_tick.0,
                        unfulfilled:  run.unfulfilled as u64,
                        used_actions: run.used_actions as u64,
                    })?;
                }
                if run.is_complete() && best.fitness > best_saved {
                    best_saved = best.fitness;
                    write_best_actions(&args.out, &best.genes[..run.used_actions])
                        .with_context(|| format!("write {}", args.out.display()))?;
                    info!("new best written to {}", args.out.display());
                }
            }
            Err(e) => warn!("leader failed to replay: {e}"),
        }

        if let Some(worst) = search.population().last() {
            debug!("fitness spread {:.9} .. {:.9}", worst.fitness, best.fitness);
        }

        if best.fitness > args.target || search.generation() >= args.generations {
            break;
        }
        search.advance();
    }

    let best = search.best().genes.clone();
    info!(
        "search finished after {} generations in {:.1} s (best fitness {:.9})",
        search.generation(),
        t0.elapsed().as_secs_f64(),
        search.best().fitness
    );

    // Trace the final leader event by event.
    if let Some(w) = writer {
        let mut obs = TraceObserver::new(w);
        let replay = SimBuilder::new(&scenario, &best)
            .config(config)
            .build()?
            .run_observed(&mut obs);
        // An aborted run leaves its last tick in the buffer.
        obs.flush()?;
        if let Some(e) = obs.take_error() {
            return Err(e.into());
        }
        obs.writer_mut().finish()?;
        replay?;
    }

    Ok(())
}
