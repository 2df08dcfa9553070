//! bible-bot binary: `run` starts the Telegram bot; `read`, `random` and `books` work offline.

use anyhow::Result;
use bible_bot::cli::{book_list, corpus_path, random_verses, read_reference};
use bible_bot::components::load_corpus;
use bible_bot::{load_config, run_bot, Cli, Commands};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run_bot(config).await
        }
        Commands::Read { reference, data } => {
            let corpus = load_corpus(&corpus_path(data))?;
            match read_reference(&corpus, &reference.join(" ")) {
                Ok(text) => println!("{}", text),
                Err(message) => {
                    eprintln!("{}", message);
                    std::process::exit(1);
                }
            }
            Ok(())
        }
        Commands::Random {
            count,
            data,
            sampling,
        } => {
            let corpus = load_corpus(&corpus_path(data))?;
            let verses = random_verses(&corpus, sampling, count, &mut rand::thread_rng());
            println!("{}", verses.join("\n\n---\n\n"));
            Ok(())
        }
        Commands::Books { data } => {
            let corpus = load_corpus(&corpus_path(data))?;
            println!("{}", book_list(&corpus));
            Ok(())
        }
    }
}
