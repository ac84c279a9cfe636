mod logging;

use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use luach_core::{
    GregorianDate, HebrewDate, LinearDay, candles, cycle_position, days_in_year, gregorian,
    hebrew, is_leap_year, molad_of_tishrei, months_in_year, postponement, weekday, year_length,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "luach", about = "Hebrew calendar diagnostics")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Today's date (UTC) in both calendars
    Today,
    /// Hebrew date of a civil date
    ToHebrew {
        /// Civil date (YYYY-MM-DD)
        date: GregorianDate,
    },
    /// Civil date of a Hebrew date
    ToGregorian {
        /// Hebrew year
        year: i32,
        /// Month: Nisan=1 .. Elul=6, Tishrei=7 .. Adar II=13
        month: u32,
        /// Day of month
        day: u32,
    },
    /// Structure of a Hebrew year
    Year {
        /// Hebrew year
        year: i32,
    },
    /// Hanukkah candles for a civil date
    Candles {
        /// Civil date (YYYY-MM-DD), today if omitted
        date: Option<GregorianDate>,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Today => print_report(today()?),
        Commands::ToHebrew { date } => print_report(date),
        Commands::ToGregorian { year, month, day } => {
            let date = HebrewDate::try_new(year, month, day)?;
            let days = hebrew::to_linear(date)?;
            let civil = gregorian::from_linear(days)?;
            println!("Hebrew: {date}, {}", weekday(days).name());
            println!("Days since 1900: {days}");
            println!("Gregorian: {civil}");
            Ok(())
        }
        Commands::Year { year } => print_year(year),
        Commands::Candles { date } => {
            let date = match date {
                Some(d) => d,
                None => today()?,
            };
            let days = gregorian::to_linear(date)?;
            println!("{date}: {} candles", candles(days)?);
            Ok(())
        }
    }
}

/// Current civil date from the system clock, in UTC.
fn today() -> Result<GregorianDate> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock is before 1970")?;
    let date = date_from_unix_seconds(elapsed.as_secs())?;
    info!(%date, "read system clock");
    Ok(date)
}

/// Civil date (UTC) of a Unix timestamp.
fn date_from_unix_seconds(secs: u64) -> Result<GregorianDate> {
    let unix_epoch = gregorian::to_linear(GregorianDate::new(1970, 1, 1))?;
    let elapsed = LinearDay::try_from(secs / 86_400).context("timestamp out of range")?;
    Ok(gregorian::from_linear(unix_epoch + elapsed)?)
}

fn print_report(date: GregorianDate) -> Result<()> {
    let days = gregorian::to_linear(date).with_context(|| format!("converting {date}"))?;
    let dow = weekday(days);
    let hdate =
        hebrew::from_linear(days).with_context(|| format!("converting day {days}"))?;
    println!("Gregorian: {date}, DOW={}", dow.index());
    println!("Days since 1900: {days}");
    println!("Hebrew: {hdate}, {}", dow.name());
    Ok(())
}

fn print_year(year: i32) -> Result<()> {
    let molad = molad_of_tishrei(year);
    let resolved = postponement::resolve(year, molad);
    let start = hebrew::new_year(year);
    let rule = match (resolved.rule, resolved.lo_adu) {
        (None, false) => "none".to_string(),
        (Some(r), false) => r.name().to_string(),
        (None, true) => "Lo ADU Rosh".to_string(),
        (Some(r), true) => format!("{}, Lo ADU Rosh", r.name()),
    };

    println!("Year: {year}");
    println!(
        "Leap: {} (cycle year {} of 19)",
        is_leap_year(year),
        cycle_position(year)
    );
    println!("Months: {}", months_in_year(year));
    println!("Days: {} ({})", days_in_year(year), year_length(year).name());
    println!(
        "Molad of Tishrei: {}, {}h {}p",
        weekday(molad.day - hebrew::EPOCH_OFFSET).name(),
        molad.hours(),
        molad.hour_parts()
    );
    println!("Postponement: {rule}");
    println!(
        "Rosh Hashanah: {}, {}",
        gregorian::from_linear(start)?,
        weekday(start).name()
    );
    Ok(())
}
