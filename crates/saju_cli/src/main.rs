use std::path::PathBuf;

use clap::{Parser, Subcommand};
use saju_base::{
    ALL_BRANCHES, ALL_ELEMENTS, ALL_STEMS, CalculationError, ElementCounts, FourPillars, Pillar,
    calculate, four_pillars, hour_branch_index, hour_stem_index,
};
use saju_calendar::{LunarCalendarKernel, LunarDate, SolarDate, day_indices_for_jdn};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "saju", about = "Four Pillars (사주) calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars for a birth date and hour
    Pillars {
        /// Birth date (YYYY-MM-DD), Gregorian unless --lunar
        #[arg(long)]
        date: String,
        /// Civil hour of birth (0-23)
        #[arg(long)]
        hour: u32,
        /// Interpret the date as a lunar date
        #[arg(long)]
        lunar: bool,
        /// The lunar month is the leap (intercalary) month
        #[arg(long, requires = "lunar")]
        leap: bool,
        /// Path to the lunar month table
        #[arg(long, env = "SAJU_CALENDAR_TABLE")]
        calendar: PathBuf,
    },
    /// Hour pillar from a day stem index and civil hour
    HourPillar {
        /// Day stem index (0=甲 .. 9=癸)
        #[arg(long)]
        day_stem: u8,
        /// Civil hour (0-23)
        #[arg(long)]
        hour: u32,
    },
    /// Day pillar for a Gregorian date
    Day {
        /// Gregorian date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// List the 10 heavenly stems
    Stems,
    /// List the 12 earthly branches
    Branches,
}

fn parse_date(s: &str) -> Result<(i32, u32, u32), String> {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        return Err(format!("expected YYYY-MM-DD, got {s}"));
    }
    let year: i32 = parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: u32 = parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: u32 = parts[2].parse().map_err(|e| format!("{e}"))?;
    Ok((year, month, day))
}

fn require_date(s: &str) -> (i32, u32, u32) {
    parse_date(s).unwrap_or_else(|e| {
        eprintln!("Invalid date: {e}");
        std::process::exit(1);
    })
}

fn load_calendar(path: &PathBuf) -> LunarCalendarKernel {
    LunarCalendarKernel::load(path).unwrap_or_else(|e| {
        eprintln!("Failed to load lunar month table: {e}");
        std::process::exit(1);
    })
}

fn fail(e: CalculationError) -> ! {
    eprintln!("Calculation failed: {e}");
    std::process::exit(1);
}

/// Chart for a date in a leap month. The hour is checked before the
/// table lookup, matching `calculate`.
fn leap_chart(
    kernel: &LunarCalendarKernel,
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
) -> Result<(LunarDate, FourPillars), CalculationError> {
    if hour >= 24 {
        return Err(CalculationError::InvalidHour(hour));
    }
    let lunar_date = kernel.resolve_lunar_leap(year, month, day).map_err(|e| {
        debug!(year, month, day, error = %e, "leap month resolution failed");
        CalculationError::InvalidDate
    })?;
    let chart = four_pillars(&lunar_date, hour)?;
    Ok((lunar_date, chart))
}

fn describe(p: Pillar) -> String {
    format!(
        "{} ({}) {} {} / {} {}",
        p,
        p.hangul(),
        p.stem.polarity().name(),
        p.stem.element().name(),
        p.branch.element().name(),
        p.branch.animal()
    )
}

fn element_tally(counts: &ElementCounts) -> String {
    let tally: Vec<String> = ALL_ELEMENTS
        .iter()
        .map(|&e| format!("{}{}({}) {}", e.name(), e.hanja(), e.hangul(), counts.get(e)))
        .collect();
    tally.join(", ")
}

fn print_chart(chart: &FourPillars) {
    println!("Year:   {}", describe(chart.year));
    println!("Month:  {}", describe(chart.month));
    println!("Day:    {}", describe(chart.day));
    println!("Hour:   {}", describe(chart.hour));

    let counts = chart.element_counts();
    println!("Elements: {}", element_tally(&counts));
    let missing = counts.missing();
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|e| e.name()).collect();
        println!("Missing:  {}", names.join(", "));
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Pillars {
            date,
            hour,
            lunar,
            leap,
            calendar,
        } => {
            let (year, month, day) = require_date(&date);
            let kernel = load_calendar(&calendar);

            if leap {
                let (lunar_date, chart) =
                    leap_chart(&kernel, year, month, day, hour).unwrap_or_else(|e| fail(e));
                println!("Lunar:  {lunar_date}");
                println!("Solar:  {}", lunar_date.to_solar());
                print_chart(&chart);
                return;
            }

            let chart = calculate(&kernel, year, month, day, hour, lunar)
                .unwrap_or_else(|e| fail(e));

            if lunar {
                if let Ok(d) = kernel.resolve_lunar_month(year, month, false, day) {
                    println!("Lunar:  {d}");
                    println!("Solar:  {}", d.to_solar());
                }
            } else if let Ok(d) = kernel
                .resolve_solar(year, month, day)
                .and_then(|s| kernel.to_lunar(&s))
            {
                println!("Solar:  {}", d.to_solar());
                println!("Lunar:  {d}");
            }
            print_chart(&chart);
        }

        Commands::HourPillar { day_stem, hour } => {
            if day_stem >= 10 {
                eprintln!("Invalid day stem index: {day_stem} (0-9)");
                std::process::exit(1);
            }
            if hour >= 24 {
                fail(CalculationError::InvalidHour(hour));
            }
            let branch = hour_branch_index(hour);
            let p = Pillar::from_indices(hour_stem_index(day_stem, branch), branch);
            let (start, end) = p.branch.hour_window();
            println!(
                "{} - {:02}:00-{:02}:59",
                describe(p),
                start,
                (end + 23) % 24
            );
        }

        Commands::Day { date } => {
            let (year, month, day) = require_date(&date);
            let solar = SolarDate::new(year, month, day).unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            let (stem, branch) = day_indices_for_jdn(solar.jdn);
            let p = Pillar::from_indices(stem, branch);
            let position = p.sexagenary_index().map_or(0, |n| n + 1);
            println!("{} (JDN {}) - {} (cycle {position}/60)", solar, solar.jdn, describe(p));
        }

        Commands::Stems => {
            for s in ALL_STEMS {
                println!(
                    "{:>2}  {} {}  {:<7} {} {}",
                    s.index(),
                    s.hanja(),
                    s.hangul(),
                    s.name(),
                    s.polarity().name(),
                    s.element().name()
                );
            }
        }

        Commands::Branches => {
            for b in ALL_BRANCHES {
                let (start, end) = b.hour_window();
                println!(
                    "{:>2}  {} {}  {:<5} {:<8} {:02}:00-{:02}:59  {}",
                    b.index(),
                    b.hanja(),
                    b.hangul(),
                    b.name(),
                    b.animal(),
                    start,
                    (end + 23) % 24,
                    b.element().name()
                );
            }
        }
    }
}
