use crate::cli::args::Cli;
use crate::core::engine;
use crate::core::model::{MismatchPolicy, RunConfig};
use anyhow::{Context, Result, bail};
use clap::Parser;
use std::env;
use std::io::{self, Write};
use std::time::{Duration, Instant};

pub fn entry() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

fn run(args: Cli) -> Result<()> {
    let stats = stats_enabled();
    let t0 = Instant::now();

    stage(stats, "preflight", || {
        if args.table.as_os_str() == "-" {
            bail!("stdin is not supported; provide a table file path");
        }
        if !args.table.is_file() {
            bail!("input file not found: {}", args.table.display());
        }
        Ok(())
    })?;

    let config = RunConfig {
        table: args.table.clone(),
        include_mean: args.mean,
        mismatch: if args.strict {
            MismatchPolicy::Strict
        } else {
            MismatchPolicy::Truncate
        },
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let t_run = Instant::now();
    engine::run(&config, &mut out)
        .with_context(|| format!("failed to summarize {}", args.table.display()))?;
    stage_done(stats, "summarize", t_run);
    out.flush().context("failed to flush stdout")?;

    if stats {
        eprintln!("CANDLE_STATS total={}", fmt_dur(t0.elapsed()));
    }

    Ok(())
}

fn stats_enabled() -> bool {
    matches!(env::var("CANDLE_STATS").as_deref(), Ok("1"))
}

fn stage<F>(stats: bool, name: &str, f: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    let t = Instant::now();
    let res = f();
    if stats {
        eprintln!("CANDLE_STATS stage={} time={}", name, fmt_dur(t.elapsed()));
    }
    res
}

fn stage_done(stats: bool, name: &str, t: Instant) {
    if stats {
        eprintln!("CANDLE_STATS stage={} time={}", name, fmt_dur(t.elapsed()));
    }
}

fn fmt_dur(d: Duration) -> String {
    if d.as_secs_f64() < 1.0 {
        format!("{}ms", d.as_millis())
    } else {
        format!("{:.3}s", d.as_secs_f64())
    }
}
