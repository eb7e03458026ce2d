// pron: Metaphone 3 keys for a word, a phrase, a file or a directory.
//
// Usage:
//   pron -w WORD | -p PHRASE | -i FILE | -I DIR [-v] [-e] [-f txt|csv] [-c]
//
// Output (txt):
//   word  PRIMARY  ALTERNATE
// Output (csv):
//   word;PRIMARY;ALTERNATE

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use metaphone3::Metaphone3;
use metaphone3_cli::{CliError, Format};

#[derive(Parser)]
#[command(name = "pron")]
#[command(version)]
#[command(about = "Metaphone 3 phonetic keys for words and names", long_about = None)]
struct Args {
    /// Input word
    #[arg(short = 'w', long)]
    word: Option<String>,

    /// Phrase (in quotes)
    #[arg(short = 'p', long)]
    phrase: Option<String>,

    /// Input file, one word or phrase per line
    #[arg(short = 'i', long)]
    infile: Option<PathBuf>,

    /// Input directory; every .txt file below it is read
    #[arg(short = 'I', long)]
    indir: Option<PathBuf>,

    /// Encode vowels after the first letter
    #[arg(short = 'v', long)]
    vowels: bool,

    /// Keep voiced and unvoiced consonants apart
    #[arg(short = 'e', long)]
    exact: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, ignore_case = true, default_value = "txt")]
    format: Format,

    /// Print codes shared by more than one word
    #[arg(short = 'c', long)]
    collisions: bool,

    /// Maximum key length
    #[arg(short = 'l', long, value_name = "N")]
    key_length: Option<usize>,

    /// TOML options file (default: $PRON_CONFIG)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn read_input(args: &Args) -> Result<Vec<String>, CliError> {
    let given = [
        args.word.is_some(),
        args.phrase.is_some(),
        args.infile.is_some(),
        args.indir.is_some(),
    ];
    if given.iter().filter(|&&g| g).count() != 1 {
        return Err(CliError::NoInput);
    }

    if let Some(word) = &args.word {
        Ok(vec![word.clone()])
    } else if let Some(phrase) = &args.phrase {
        Ok(vec![phrase.clone()])
    } else if let Some(path) = &args.infile {
        metaphone3_cli::read_word_file(path)
    } else if let Some(dir) = &args.indir {
        metaphone3_cli::read_word_dir(dir)
    } else {
        Err(CliError::NoInput)
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let mut options = metaphone3_cli::load_options(args.config.as_deref())?;
    options.encode_vowels |= args.vowels;
    options.encode_exact |= args.exact;

    let mut encoder = Metaphone3::with_options(options);
    if let Some(length) = args.key_length {
        encoder.set_key_length(length)?;
    }

    let words = read_input(args)?;
    let entries = metaphone3_cli::encode_entries(&mut encoder, &words);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let _ = out.write_all(metaphone3_cli::format_entries(&entries, args.format).as_bytes());

    if args.collisions {
        let collisions = metaphone3_cli::find_collisions(&entries);
        let _ = writeln!(out);
        let _ = out.write_all(metaphone3_cli::format_collisions(&entries, &collisions).as_bytes());
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        metaphone3_cli::fatal(&e.to_string());
    }
}
