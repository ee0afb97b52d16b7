use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use clap::{ArgAction, Parser};
use huffcode::{Huffman, Symbol};
use log::{LevelFilter, info};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Build a Huffman code for a text, then encode and decode it.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Text to encode. Prompts for a line on stdin when neither this nor
    /// --file is given.
    text: Option<String>,

    /// Read the input from a file
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Code raw bytes instead of characters
    #[arg(short, long)]
    bytes: bool,

    /// Print the tree structure
    #[arg(short, long)]
    tree: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("initialise logger")?;

    let input = read_input(&args)?;
    info!("read {} bytes of input", input.len());

    if args.bytes {
        run(
            &input,
            args.tree,
            |byte| format!("{:?}", byte as char),
            |symbols| String::from_utf8_lossy(symbols).into_owned(),
        )
    } else {
        let text = String::from_utf8(input).context("input is not valid utf-8")?;
        let chars: Vec<char> = text.chars().collect();
        run(
            &chars,
            args.tree,
            |c| format!("{:?}", c),
            |symbols| symbols.iter().collect(),
        )
    }
}

fn read_input(args: &Args) -> Result<Vec<u8>> {
    if let Some(text) = &args.text {
        return Ok(text.clone().into_bytes());
    }
    if let Some(path) = &args.file {
        return fs::read(path).with_context(|| format!("read {}", path.display()));
    }

    print!("Enter the string to encode: ");
    io::stdout().flush().context("flush prompt")?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("read line from stdin")?;
    let trimmed = line.trim_end_matches(['\r', '\n']);
    Ok(trimmed.as_bytes().to_vec())
}

fn run<S: Symbol>(
    input: &[S],
    show_tree: bool,
    label: impl Fn(S) -> String,
    render: impl Fn(&[S]) -> String,
) -> Result<()> {
    let huffman = Huffman::from_symbols(input).context("build huffman code")?;

    if show_tree {
        println!("\nHuffman Tree:\n{}", huffman.tree());
    }

    println!("\nHuffman Codes:");
    for (symbol, code) in huffman.codes().iter() {
        println!("{}: {}", label(symbol), code);
    }

    let encoded = huffman.encode(input).context("encode input")?;
    println!("\nEncoded Binary String: {}", encoded);

    let decoded = huffman.decode(&encoded).context("decode bits")?;
    println!("\nDecoded String: {}", render(&decoded));

    ensure!(decoded == input, "decoded output differs from the input");
    info!(
        "{} symbols -> {} bits ({:.2} bits per symbol)",
        input.len(),
        encoded.len(),
        encoded.len() as f64 / input.len() as f64
    );

    Ok(())
}
