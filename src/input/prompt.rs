use std::io::{self, BufRead, Write};

use crate::application::Demo;

/// Print the question and read one trimmed line. End of input reads as "".
pub fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> io::Result<String> {
    writeln!(out, "{}", message)?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Title, demo list and run modes
pub fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Conway's Game of Life")?;
    writeln!(out, "====================")?;
    writeln!(out)?;
    writeln!(out, "Choose a demo:")?;
    for (i, demo) in Demo::MENU.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, demo.description())?;
    }
    writeln!(out)?;
    writeln!(out, "Run mode:")?;
    writeln!(out, "a. Limited generations (stops automatically)")?;
    writeln!(out, "b. Infinite mode (run forever, press Ctrl+C to stop)")?;
    writeln!(out)
}
