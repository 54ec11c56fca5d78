use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use sparse_life::{
    Demo, Driver, Error, presets,
    input::{self, Args, Interrupt},
};

/// Environment variable holding the tracing filter
const LOG_ENV: &str = "SPARSE_LIFE_LOG";

fn init_tracing() {
    // Frames go to stdout, so logs stay on stderr and quiet by default
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn list<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Demos:")?;
    for (i, demo) in Demo::MENU.iter().enumerate() {
        writeln!(out, "  {}. {:<12} {}", i + 1, demo.name(), demo.description())?;
    }
    writeln!(out, "Patterns:")?;
    for p in presets::all_patterns() {
        writeln!(out, "  {:<18} {:>3} cells  {}", p.name, p.len(), p.description)?;
    }
    Ok(())
}

fn main() -> Result<(), Error> {
    init_tracing();
    let args = Args::parse();
    let mut stdout = io::stdout();

    if args.list {
        list(&mut stdout)?;
        return Ok(());
    }

    let config = input::resolve_config(&args, &mut io::stdin().lock(), &mut stdout)?;

    writeln!(stdout, "\nStarting simulation...\n")?;
    writeln!(stdout, "{}", config.mode)?;
    writeln!(stdout, "Speed: {}ms per generation", config.delay.as_millis())?;
    stdout.flush()?;
    if config.clear_screen {
        thread::sleep(Duration::from_secs(1));
    }

    // Installed only now so Ctrl+C during the prompts still exits at once
    let interrupt = Interrupt::install();
    let summary = Driver::new(config).run_until(&mut stdout, |_| !interrupt.is_set())?;
    if interrupt.is_set() {
        writeln!(stdout, "\n\nStopped by user.")?;
    }
    writeln!(
        stdout,
        "\nSimulation complete! {} generations, final population {}",
        summary.final_generation, summary.final_population
    )?;
    Ok(())
}
