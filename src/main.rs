//*** START FILE: src/main.rs ***//
use clap::Parser;

use quenya_corpus::config;
use quenya_corpus::corpus_generator::run_corpus_generation;

/// Generate parallel corpora from the Bible books
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the config file
    #[arg(short, long, value_name = "CONFIG_PATH")]
    config_path: String,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = match config::load_config_from_file(&args.config_path) {
        Ok(loaded_config) => loaded_config,
        Err(err_msg) => {
            eprintln!("Error loading {}: {}", args.config_path, err_msg);
            std::process::exit(1);
        }
    };

    if let Err(e) = run_corpus_generation(&config) {
        eprintln!("Corpus generation failed: {}", e);
        std::process::exit(1);
    }
}
//*** END FILE: src/main.rs ***//
