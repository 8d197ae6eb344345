//! yh: command line front end for the Yahtzee rules engine.
//!
//! Subcommands:
//! - rules
//! - score
//! - play

use std::env;
use std::process;

use yh_core::{face_word, play_game, Hand, Registry, RulesConfig, Scorecard, StraightMode};
use yh_logging::{
    hash_config_bytes, now_ms, CategoryScoreV1, GameEndEventV1, NdjsonWriter, ScoreEventV1,
    VersionInfoV1, EVENT_SCHEMA_VERSION,
};

/// Rules config plus the hash of the bytes it was read from.
struct LoadedConfig {
    config: RulesConfig,
    hash: Option<String>,
}

fn load_config(path: Option<&str>) -> LoadedConfig {
    let Some(path) = path else {
        return LoadedConfig {
            config: RulesConfig::default(),
            hash: None,
        };
    };
    let bytes = std::fs::read(path).unwrap_or_else(|e| {
        eprintln!("Failed to read config file {path}: {e}");
        process::exit(1);
    });
    let text = String::from_utf8_lossy(&bytes);
    let config = RulesConfig::from_yaml(&text).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}");
        process::exit(1);
    });
    LoadedConfig {
        config,
        hash: Some(hash_config_bytes(&bytes)),
    }
}

fn take_value<'a>(args: &'a [String], i: usize, flag: &str) -> &'a str {
    if i + 1 >= args.len() {
        eprintln!("Missing value for {flag}");
        process::exit(1);
    }
    &args[i + 1]
}

fn mode_name(mode: StraightMode) -> &'static str {
    match mode {
        StraightMode::Consecutive => "consecutive",
        StraightMode::Legacy => "legacy",
    }
}

fn cmd_rules(args: &[String]) {
    let mut config_path: Option<String> = None;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"yh rules

USAGE:
    yh rules [--config PATH]

OPTIONS:
    --config PATH    Rules config YAML (default: standard game)
"#
                );
                return;
            }
            "--config" => {
                config_path = Some(take_value(args, i, "--config").to_string());
                i += 2;
            }
            other => {
                eprintln!("Unknown option for `yh rules`: {}", other);
                eprintln!("Run `yh rules --help` for usage.");
                process::exit(1);
            }
        }
    }

    let loaded = load_config(config_path.as_deref());
    let registry = Registry::new(&loaded.config);
    for e in &registry {
        println!("{:<14} {}", e.name(), e.description);
    }
}

fn cmd_score(args: &[String]) {
    let mut config_path: Option<String> = None;
    let mut rule: Option<String> = None;
    let mut dice_args: Vec<&str> = Vec::new();

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"yh score

USAGE:
    yh score <DICE> [--rule NAME] [--config PATH]

ARGS:
    <DICE>           Five faces, e.g. `1 2 3 4 5`, `1,2,3,4,5` or `12345`

OPTIONS:
    --rule NAME      Print only this category (e.g. fullHouse)
    --config PATH    Rules config YAML (default: standard game)
"#
                );
                return;
            }
            "--config" => {
                config_path = Some(take_value(args, i, "--config").to_string());
                i += 2;
            }
            "--rule" => {
                rule = Some(take_value(args, i, "--rule").to_string());
                i += 2;
            }
            other if other.starts_with("--") => {
                eprintln!("Unknown option for `yh score`: {}", other);
                eprintln!("Run `yh score --help` for usage.");
                process::exit(1);
            }
            other => {
                dice_args.push(other);
                i += 1;
            }
        }
    }

    if dice_args.is_empty() {
        eprintln!("Missing dice");
        process::exit(1);
    }
    let hand: Hand = dice_args.join(" ").parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        process::exit(1);
    });

    let loaded = load_config(config_path.as_deref());
    let registry = Registry::new(&loaded.config);

    match rule {
        Some(name) => {
            let score = registry.score(&name, &hand).unwrap_or_else(|e| {
                eprintln!("{e}");
                process::exit(1);
            });
            println!("{score}");
        }
        None => {
            println!("Dice: {}", render_dice(&hand));
            for (cat, score) in registry.score_all(&hand) {
                println!("  {:<14} {:>3}", cat.name(), score);
            }
        }
    }
}

fn render_dice(hand: &Hand) -> String {
    hand.dice()
        .iter()
        .map(|&d| face_word(d).unwrap_or("?"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_scoreboard(registry: &Registry, card: &Scorecard) {
    for row in card.rows(registry) {
        match row.score {
            Some(s) => println!("  {:<14} {:>3}", row.name, s),
            None => println!("  {:<14} {:>3}", row.name, "-"),
        }
    }
    println!("  {:<14} {:>3}", "total", card.total());
}

fn cmd_play(args: &[String]) {
    let mut config_path: Option<String> = None;
    let mut seed: u64 = 0;
    let mut log_path: Option<String> = None;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"yh play

USAGE:
    yh play [--seed S] [--config PATH] [--log PATH]

OPTIONS:
    --seed S         Dice seed (default: 0)
    --config PATH    Rules config YAML (default: standard game)
    --log PATH       Append NDJSON events for every turn and the final score
"#
                );
                return;
            }
            "--seed" => {
                let v = take_value(args, i, "--seed");
                seed = v.parse().unwrap_or_else(|_| {
                    eprintln!("Invalid --seed value: {}", v);
                    process::exit(1);
                });
                i += 2;
            }
            "--config" => {
                config_path = Some(take_value(args, i, "--config").to_string());
                i += 2;
            }
            "--log" => {
                log_path = Some(take_value(args, i, "--log").to_string());
                i += 2;
            }
            other => {
                eprintln!("Unknown option for `yh play`: {}", other);
                eprintln!("Run `yh play --help` for usage.");
                process::exit(1);
            }
        }
    }

    let loaded = load_config(config_path.as_deref());
    let registry = Registry::new(&loaded.config);
    let v = VersionInfoV1 {
        schema_version: EVENT_SCHEMA_VERSION,
        straight_mode: mode_name(loaded.config.straights.mode).to_string(),
        config_hash: loaded.hash.clone(),
    };

    let mut log = log_path.as_deref().map(|p| {
        NdjsonWriter::open_append(p).unwrap_or_else(|e| {
            eprintln!("Failed to open log {p}: {e}");
            process::exit(1);
        })
    });

    let record = play_game(&registry, &loaded.config, seed, |t| {
        println!(
            "turn {:>2}: {} -> {} {}",
            t.turn + 1,
            t.hand,
            t.category,
            t.score
        );
        if let Some(w) = log.as_mut() {
            let e = ScoreEventV1 {
                event: "score".to_string(),
                ts_ms: now_ms(),
                v: v.clone(),
                seed,
                turn: t.turn,
                rolls: t.rolls.clone(),
                dice: t.hand.dice(),
                category: t.category.name().to_string(),
                score: t.score,
            };
            if let Err(e) = w.write_event(&e) {
                eprintln!("Failed to write log event: {e}");
            }
        }
    })
    .unwrap_or_else(|e| {
        eprintln!("Game failed: {e}");
        process::exit(1);
    });

    println!();
    print_scoreboard(&registry, &record.card);

    if let Some(mut w) = log {
        let end = GameEndEventV1 {
            event: "game_end".to_string(),
            ts_ms: now_ms(),
            v,
            seed,
            total: record.total(),
            upper_total: record.card.upper_total(),
            scores: record
                .card
                .rows(&registry)
                .into_iter()
                .map(|r| CategoryScoreV1 {
                    category: r.name.to_string(),
                    score: r.score.unwrap_or(0),
                })
                .collect(),
        };
        if let Err(e) = w.write_event(&end).and_then(|_| w.flush()) {
            eprintln!("Failed to write log: {e}");
            process::exit(1);
        }
    }
}

fn print_help() {
    eprintln!(
        r#"yh - Yahtzee rules engine CLI

USAGE:
    yh <COMMAND> [OPTIONS]

COMMANDS:
    rules       List scoring categories and their descriptions
    score       Score a hand of five dice
    play        Play a seeded solitaire game with a greedy policy

OPTIONS:
    -h, --help          Print this help message
    -V, --version       Print version

Run `yh <COMMAND> --help` for command options.
"#
    );
}

fn print_version() {
    println!("yh {}", env!("CARGO_PKG_VERSION"));
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_help();
        process::exit(0);
    }

    match args[1].as_str() {
        "-h" | "--help" | "help" => print_help(),
        "-V" | "--version" => print_version(),
        "rules" => cmd_rules(&args[2..]),
        "score" => cmd_score(&args[2..]),
        "play" => cmd_play(&args[2..]),
        other => {
            eprintln!("Unknown command: {}", other);
            eprintln!("Run `yh --help` for usage.");
            process::exit(1);
        }
    }
}
