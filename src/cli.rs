// src/cli.rs
use std::{env, path::PathBuf};

use crate::config::options::{Params, TaskKind};
use crate::progress::ConsoleProgress;
use crate::runner::{self, RunSummary};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let params = parse_cli()?;
    let mut progress = ConsoleProgress::new();
    let summary = runner::run(&params, Some(&mut progress))?;
    print_summary(params.task, &summary);
    Ok(())
}

fn parse_cli() -> Result<Params, Box<dyn std::error::Error>> {
    let mut task: Option<TaskKind> = None;
    let mut params = Params::new(TaskKind::Verify); // task overwritten below

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "rotate" | "scrape" | "verify" | "probe" if task.is_none() => {
                task = Some(parse_task(&a)?);
            }
            "--task" => {
                let v = args.next().ok_or("Missing value for --task")?;
                task = Some(parse_task(&v)?);
            }
            "-c" | "--catalog" => {
                params.catalog = PathBuf::from(args.next().ok_or("Missing catalog path")?);
            }
            "--pools" => {
                params.pools_file = Some(PathBuf::from(args.next().ok_or("Missing pools path")?));
            }
            "--audit" => {
                params.audit = Some(PathBuf::from(args.next().ok_or("Missing audit path")?));
            }
            "--pause-ms" => {
                let v: u64 = args.next().ok_or("Missing value for --pause-ms")?.parse()?;
                params.pause_ms = Some(v);
            }
            "-n" | "--dry-run" => params.dry_run = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    params.task = task.ok_or("Specify a task: rotate | scrape | verify | probe")?;
    Ok(params)
}

fn parse_task(s: &str) -> Result<TaskKind, Box<dyn std::error::Error>> {
    match s.to_ascii_lowercase().as_str() {
        "rotate" => Ok(TaskKind::Rotate),
        "scrape" => Ok(TaskKind::Scrape),
        "verify" => Ok(TaskKind::Verify),
        "probe" => Ok(TaskKind::Probe),
        other => Err(format!("Unknown task: {}", other).into()),
    }
}

fn print_summary(task: TaskKind, s: &RunSummary) {
    match task {
        TaskKind::Rotate => {
            println!("Replaced {} placeholder image(s).", s.replaced);
        }
        TaskKind::Scrape => {
            println!("Scraped {} image(s), {} failed.", s.fixed, s.broken);
        }
        TaskKind::Verify => {
            println!(
                "Accessible: {}  Fixed: {}  Broken: {}",
                s.accessible, s.fixed, s.broken
            );
            if let Some(rate) = s.success_rate() {
                println!(
                    "Success rate: {:.1}% ({}/{} images working)",
                    rate,
                    s.accessible + s.fixed,
                    s.processed
                );
            }
        }
        TaskKind::Probe => {
            println!("Working: {}  Broken: {}", s.accessible, s.broken);
            if let Some(rate) = s.success_rate() {
                println!("Success rate: {:.1}%", rate);
            }
        }
    }
}
