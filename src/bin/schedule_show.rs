use std::env;

use anyhow::{anyhow, Context, Result};
use catapult::{DayKey, Planner, Weekday};

fn main() -> Result<()> {
    let args = CliArgs::parse()?;
    let planner = Planner::new()?;
    let state = planner.schedule();

    println!(
        "Schedule: {} weeks, {} activities",
        state.num_weeks(),
        state.total_activities()
    );

    for week in 1..=state.num_weeks() {
        if let Some(filter) = args.week {
            if week != filter {
                continue;
            }
        }
        let mut cells = Vec::new();
        for day in Weekday::ALL {
            let key = DayKey::new(week, day);
            if let Some(filter) = &args.day {
                if key != *filter {
                    continue;
                }
            }
            let activities = planner.activities_on(&key);
            if activities.is_empty() {
                continue;
            }
            let names: Vec<String> = activities
                .iter()
                .map(|activity| {
                    let mut label = format!("{} [{}]", activity.name, activity.pillar);
                    if activity.is_field_trip {
                        label.push_str(" (field trip)");
                    }
                    if activity.guest_speaker {
                        label.push_str(" (guest speaker)");
                    }
                    label
                })
                .collect();
            cells.push(format!("  {}: {}", key, names.join("; ")));
        }
        if !cells.is_empty() {
            println!("Week {week}:");
            for cell in cells {
                println!("{cell}");
            }
        }
    }

    Ok(())
}

struct CliArgs {
    week: Option<u32>,
    day: Option<DayKey>,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let mut week = None;
        let mut day = None;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--week" => {
                    let value = args.next().context("Expected a week number after --week")?;
                    week = Some(
                        value
                            .parse()
                            .with_context(|| format!("Invalid week number '{value}'"))?,
                    );
                }
                "--day" => {
                    let value = args
                        .next()
                        .context("Expected a day key (e.g. W1-Mon) after --day")?;
                    day = Some(
                        DayKey::parse(&value)
                            .ok_or_else(|| anyhow!("Invalid day key '{value}'"))?,
                    );
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => {
                    return Err(anyhow!(
                        "Unknown argument '{other}'. Run with --help for usage instructions."
                    ));
                }
            }
        }
        Ok(Self { week, day })
    }
}

fn print_usage() {
    println!("Catapult schedule inspector");
    println!("Prints the stored schedule, one line per non-empty day.");
    println!("Usage: cargo run --bin schedule_show -- [options]");
    println!("Options:");
    println!("  --week <n>        Only show the given week");
    println!("  --day <key>       Only show the given day cell (e.g. W1-Mon)");
}
