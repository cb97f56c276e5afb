use clap::{Arg, Command};
use ogospeak::{Context, History, translate_sentence, translate_word};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("ogospeak")
        .version("0.1.0")
        .about("Translate English words and sentences into Ogospeak")
        .arg(
            Arg::new("text")
                .help("Word or sentence to translate")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("sentence")
                .long("sentence")
                .short('s')
                .help("Treat the input as a sentence ending in punctuation")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let text = matches.get_one::<String>("text").unwrap();
    let as_sentence = matches.get_flag("sentence");

    let context = Context::default();
    let history = Arc::new(History::new());

    let result = if as_sentence {
        translate_sentence(&context, &history, text).await
    } else {
        translate_word(&context, &history, text).await
    };

    match result {
        Ok(translated) => {
            println!("{}", translated);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            Err(e.into())
        }
    }
}
