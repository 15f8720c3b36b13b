/// Name Forge — generates fictional place names from a corpus of real ones.
///
/// Usage: name_forge --input <corpus.txt|corpus.json> [--count <n>] [--seed <n>] [--max-words <n>] [--config <file.ron>]
use std::env;
use std::path::Path;
use std::process;

use toponym_engine::core::engine::ToponymEngine;
use toponym_engine::core::sampler::SamplerConfig;
use toponym_engine::corpus::Corpus;

const USAGE: &str = "Usage: name_forge --input <corpus.txt|corpus.json> [--count <n>] [--seed <n>] [--max-words <n>] [--config <file.ron>]";

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut input = None;
    let mut count = 1usize;
    let mut seed = None;
    let mut max_words = None;
    let mut config_path = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                input = Some(args[i].clone());
            }
            "--count" => {
                i += 1;
                count = args[i].parse().unwrap_or_else(|_| {
                    eprintln!("Error: --count must be a non-negative integer");
                    process::exit(1);
                });
            }
            "--seed" => {
                i += 1;
                seed = Some(args[i].parse().unwrap_or_else(|_| {
                    eprintln!("Error: --seed must be an integer");
                    process::exit(1);
                }));
            }
            "--max-words" => {
                i += 1;
                max_words = Some(args[i].parse().unwrap_or_else(|_| {
                    eprintln!("Error: --max-words must be a positive integer");
                    process::exit(1);
                }));
            }
            "--config" => {
                i += 1;
                config_path = Some(args[i].clone());
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("{}", USAGE);
                process::exit(1);
            }
        }
        i += 1;
    }

    let input_path = input.unwrap_or_else(|| {
        eprintln!("Error: --input is required");
        eprintln!("{}", USAGE);
        process::exit(1);
    });

    let path = Path::new(&input_path);
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let corpus = if is_json {
        Corpus::load_json(path)
    } else {
        Corpus::load_lines(path)
    }
    .unwrap_or_else(|e| {
        eprintln!("Error reading corpus '{}': {}", input_path, e);
        process::exit(1);
    });

    eprintln!("Corpus loaded: {} names from '{}'", corpus.len(), input_path);

    let mut config = match config_path {
        Some(p) => SamplerConfig::load_from_ron(Path::new(&p)).unwrap_or_else(|e| {
            eprintln!("Error reading config '{}': {}", p, e);
            process::exit(1);
        }),
        None => SamplerConfig::default(),
    };
    if let Some(words) = max_words {
        config.max_words = words;
    }

    let mut engine = ToponymEngine::builder()
        .corpus(corpus)
        .seed(seed.unwrap_or_else(rand::random))
        .config(config)
        .build()
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            process::exit(1);
        });

    eprintln!(
        "Chain built: {} start syllables, {} transitions",
        engine.chain().start_count(),
        engine.chain().transition_count()
    );

    let names = engine.generate_unique(count).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    for name in &names {
        println!("{}", name);
    }
}
