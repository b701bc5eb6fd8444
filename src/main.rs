use std::borrow::Cow;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;

use blues_flow::voicing::{resolve_bass_root, resolve_voicing};
use blues_flow::{
    accompany, all_progressions, load_progressions, random_progression, walking_bass, BarNotes,
    BluesError, ChordFunction, Progression, Resolution, Voicing,
};

#[derive(Parser)]
#[command(name = "blues-flow")]
#[command(about = "12-bar blues voicings and walking bass lines")]
struct Args {
    /// YAML progression file to use instead of the built-in catalog
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the available progressions
    List,
    /// Show every bar of a progression
    Show { id: u32 },
    /// Show a randomly chosen progression
    Random {
        /// Seed for a repeatable pick
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Look up the voicing for a chord symbol
    Voicing { symbol: String },
    /// Walk one bar of bass from one chord into the next
    Walk { current: String, next: String },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ShowOutput<'a> {
    progression: &'a Progression,
    bars: Vec<BarNotes>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VoicingOutput<'a> {
    symbol: &'a str,
    voicing: &'static Voicing,
    resolution: Resolution,
    bass_root: &'static str,
    bass_resolution: Resolution,
    function: ChordFunction,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), BluesError> {
    let progressions: Cow<'static, [Progression]> = match &args.file {
        Some(path) => {
            let loaded = load_progressions(path)?;
            log::info!("loaded {} progressions from {}", loaded.len(), path.display());
            Cow::Owned(loaded)
        }
        None => Cow::Borrowed(all_progressions()),
    };

    match &args.command {
        Command::List => {
            if args.json {
                emit_json(&*progressions);
            } else {
                for p in progressions.iter() {
                    match &p.description {
                        Some(description) => println!("{:>3}. {} - {}", p.id, p.name, description),
                        None => println!("{:>3}. {}", p.id, p.name),
                    }
                }
            }
        }
        Command::Show { id } => {
            let progression = progressions
                .iter()
                .find(|p| p.id == *id)
                .ok_or(BluesError::UnknownProgression(*id))?;
            show(progression, args.json);
        }
        Command::Random { seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(*seed),
                None => StdRng::from_entropy(),
            };
            let progression = match &args.file {
                None => random_progression(&mut rng),
                Some(_) => progressions
                    .choose(&mut rng)
                    .ok_or_else(|| BluesError::Metadata("file lists no progressions".to_string()))?,
            };
            show(progression, args.json);
        }
        Command::Voicing { symbol } => {
            let (voicing, resolution) = resolve_voicing(symbol);
            let (bass_root, bass_resolution) = resolve_bass_root(symbol);
            let output = VoicingOutput {
                symbol,
                voicing,
                resolution,
                bass_root,
                bass_resolution,
                function: ChordFunction::classify(symbol),
            };
            if args.json {
                emit_json(&output);
            } else {
                println!("{} ({})", symbol, output.function);
                println!("  voicing: {}{}", voicing.notes.join(" "), marker(resolution));
                println!("  bass:    {}{}", bass_root, marker(bass_resolution));
                println!("  tones:   {}", voicing.chord_tones.join(" "));
            }
        }
        Command::Walk { current, next } => {
            let line = walking_bass(current, next);
            if args.json {
                emit_json(&line);
            } else {
                println!("{}", line.join(" "));
            }
        }
    }
    Ok(())
}

fn show(progression: &Progression, json: bool) {
    let bars = accompany(progression);
    if json {
        emit_json(&ShowOutput { progression, bars });
        return;
    }

    println!("{}. {}", progression.id, progression.name);
    if let Some(description) = &progression.description {
        println!("   {}", description);
    }
    for bar in &bars {
        let mut voicing = bar.voicing.join(" ");
        if let Some(second) = &bar.second_voicing {
            voicing = format!("{} / {}", voicing, second.join(" "));
        }
        println!(
            "{:>3}  {:<16} {:<28} | {}{}",
            bar.bar + 1,
            bar.chord,
            voicing,
            bar.bass.join(" "),
            marker(bar.voicing_resolution.max(bar.bass_resolution))
        );
    }
}

fn marker(resolution: Resolution) -> &'static str {
    match resolution {
        Resolution::Exact => "",
        Resolution::Respelled => "  (respelled)",
        Resolution::Fallback => "  (fallback)",
    }
}

fn emit_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error encoding JSON: {}", e);
            process::exit(1);
        }
    }
}
