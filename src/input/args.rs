use clap::Parser;

/// Command-line arguments. Values are taken as text so that bad input
/// falls back to defaults instead of aborting the program.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "sparse_life")]
#[command(version)]
#[command(about = "Conway's Game of Life on an unbounded plane, drawn in the terminal")]
pub struct Args {
    /// Demo key (1-6), demo name, or pattern name [asked if omitted]
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Run mode: a = limited, b = infinite [asked if omitted]
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Delay between generations in ms (50-1000, default 200) [asked if omitted]
    #[arg(short, long, allow_negative_numbers = true)]
    pub speed: Option<String>,

    /// Generations for a limited run (default depends on the demo)
    #[arg(short, long)]
    pub generations: Option<u64>,

    /// Rule name (Conway, HighLife)
    #[arg(short, long, default_value = "Conway")]
    pub rule: String,

    /// Random seed for the random soup
    #[arg(long)]
    pub seed: Option<u64>,

    /// Do not clear the terminal between frames
    #[arg(long)]
    pub no_clear: bool,

    /// List demos and patterns, then exit
    #[arg(long)]
    pub list: bool,
}
