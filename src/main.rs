use std::{
    error::Error,
    io::{self, Read, Write},
    path::PathBuf,
};

use clap::Parser;
use furiganize::{
    AnnotationMode, Generator, MecabProcess, Token, chars::decode_lossy,
    tokenizer::mecab::parse_output,
};
use tracing::{Level, debug, warn};

#[derive(Parser, Debug)]
#[command(
    name = "furiganize",
    version,
    about = "Add Anki-style furigana to Japanese text read from stdin"
)]
struct Cli {
    /// Annotate each input line as a single word
    #[arg(long = "word", conflicts_with = "from_mecab")]
    word: bool,

    /// Bracket whole words instead of splitting compounds
    #[arg(long = "whole-word")]
    whole_word: bool,

    /// MeCab executable to run
    #[arg(long = "mecab", value_name = "PROGRAM", default_value = "mecab")]
    mecab: PathBuf,

    /// MeCab dictionary directory (passed as `-d`)
    #[arg(long = "dict", value_name = "DIR")]
    dict: Option<PathBuf>,

    /// Read MeCab output instead of raw text
    #[arg(long = "from-mecab")]
    from_mecab: bool,

    /// Log to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    if !verbose {
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .try_init();
}

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut buffer = Vec::new();
    io::stdin().read_to_end(&mut buffer)?;
    let (input, invalid) = decode_lossy(&buffer);
    if invalid > 0 {
        warn!(invalid, "replaced undecodable input bytes");
    }

    let mode = if cli.whole_word {
        AnnotationMode::WholeWord
    } else {
        AnnotationMode::Compound
    };
    let mut mecab = MecabProcess::new(&cli.mecab);
    if let Some(dir) = &cli.dict {
        mecab = mecab.with_dictionary(dir);
    }
    let generator = Generator::builder().mode(mode).build(mecab);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.from_mecab {
        for sentence in parse_output(&input) {
            let tokens: Vec<Token> = sentence.into_iter().map(Token::from).collect();
            writeln!(out, "{}", generator.annotate_tokens(&tokens))?;
        }
        return Ok(());
    }

    for line in input.lines() {
        let line = line.trim_end_matches('\r');
        debug!(line, "annotating");
        let annotated = if cli.word {
            generator.generate_for_word(line)?
        } else {
            generator.generate_for_sentence(line)?
        };
        writeln!(out, "{annotated}")?;
    }
    Ok(())
}
