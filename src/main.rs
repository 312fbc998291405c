use clap::Parser;
use anyhow::Result;

mod drill;
mod output;
mod roster;
mod types;

use roster::Roster;

/// Menagerie - Train whatever can be trained, and find out who refuses
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output in JSON format
    #[arg(short = 'j', long)]
    json: bool,

    /// Have every pet make its sound before the drill
    #[arg(short = 's', long)]
    sounds: bool,

    /// Disable colored text output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let roster = Roster::canonical();

    let mut report = drill::run(&roster.army(), roster.pets());
    if cli.sounds {
        report.roll_call = drill::roll_call(roster.pets());
    }

    if cli.json {
        output::output_json(&report)?;
    } else {
        output::output_text(&report)?;
    }

    Ok(())
}
