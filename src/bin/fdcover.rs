//! fd-cover - Command Line Interface
//!
//! Reads an `.fd` file and prints one or all minimal covers of its dependencies.

use clap::{Parser, ValueEnum};
use fd_cover::{
    check_minimal_cover, write_covers, AttributeSet, CoverConfig, DependencySet, FdReader,
    FdWriter, Minimizable,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, ValueEnum)]
enum Command {
    /// Compute one minimal cover (default)
    One,
    /// Compute every minimal cover
    All,
    /// Print the closure of the attributes given with -a
    Closure,
    /// Check that the cover given with -c is a minimal cover of the input
    Check,
    /// Print statistics about the input
    Stats,
    /// Echo the parsed input without modification
    Echo,
}

#[derive(Parser, Debug)]
#[command(name = "fdcover")]
#[command(about = "Minimal covers of functional dependencies", long_about = None)]
#[command(version = VERSION)]
struct Args {
    /// Input .fd file (required)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Subcommand to execute
    #[arg(short = 'D', long = "do", value_enum, default_value = "one")]
    command: Command,

    /// Attributes for -D closure, separated by commas or spaces
    #[arg(short = 'a', long = "attributes", value_name = "ATTRS")]
    attributes: Option<String>,

    /// Candidate cover file for -D check
    #[arg(short = 'c', long = "cover", value_name = "COVER")]
    cover: Option<PathBuf>,

    /// Provide execution summary
    #[arg(short = 's', long = "summary")]
    summary: bool,

    /// Suppress printing of solution
    #[arg(short = 'x', long = "no-output")]
    no_output: bool,

    /// Output file (writes to stdout if not specified)
    #[arg(short = 'O', long = "out-file")]
    output_file: Option<PathBuf>,

    /// Verify every computed cover before printing it
    #[arg(long = "verify")]
    verify: bool,

    /// Refuse inputs with more distinct attributes
    #[arg(long = "max-attributes", value_name = "N")]
    max_attributes: Option<usize>,

    /// Refuse searches starting from more dependencies
    #[arg(long = "max-dependencies", value_name = "N")]
    max_dependencies: Option<usize>,

    /// Refuse all-covers searches with more combinations
    #[arg(long = "max-combinations", value_name = "N")]
    max_combinations: Option<usize>,
}

/// What a command produced, ready to be written out
enum Output {
    Dependencies(DependencySet),
    Covers(Vec<DependencySet>),
    Attributes(AttributeSet),
    Nothing,
}

fn fail(context: &str, err: impl std::fmt::Display) -> ! {
    eprintln!("{}: {}", context, err);
    process::exit(1);
}

fn parse_attributes(text: &str) -> AttributeSet {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect()
}

fn write_output<W: Write>(writer: &mut W, output: &Output) -> io::Result<()> {
    match output {
        Output::Dependencies(deps) => deps.write_fd(writer)?,
        Output::Covers(covers) => write_covers(writer, covers)?,
        Output::Attributes(attributes) => writeln!(writer, "{}", attributes)?,
        Output::Nothing => {}
    }
    writer.flush()
}

fn main() {
    let _ = env_logger::builder().try_init();
    let args = Args::parse();

    let config = CoverConfig {
        max_attributes: args.max_attributes,
        max_dependencies: args.max_dependencies,
        max_combinations: args.max_combinations,
        verify: args.verify,
    };

    if args.summary {
        eprintln!("fdcover {}", VERSION);
        eprintln!();
    }

    let deps = match DependencySet::from_fd_file(&args.input) {
        Ok(deps) => deps,
        Err(e) => fail(
            &format!("Error reading FD file '{}'", args.input.display()),
            e,
        ),
    };

    if args.summary {
        let stats = deps.stats();
        eprintln!(
            "Input: {} dependencies over {} attributes",
            stats.dependencies, stats.attributes
        );
        eprintln!();
    }

    let output = match args.command {
        Command::One => {
            if args.summary {
                eprintln!("Computing one minimal cover...");
            }
            match deps.minimal_cover_with_config(&config) {
                Ok(cover) => {
                    if args.summary {
                        eprintln!("Cover has {} dependencies", cover.len());
                    }
                    Output::Dependencies(cover)
                }
                Err(e) => fail("Error computing cover", e),
            }
        }
        Command::All => {
            if args.summary {
                eprintln!("Computing all minimal covers...");
            }
            match deps.all_minimal_covers_with_config(&config) {
                Ok(covers) => {
                    if args.summary {
                        eprintln!("Found {} distinct covers", covers.len());
                    }
                    Output::Covers(covers)
                }
                Err(e) => fail("Error computing covers", e),
            }
        }
        Command::Closure => {
            let Some(text) = args.attributes.as_deref() else {
                fail("Error", "-D closure requires -a ATTRS")
            };
            let attributes = parse_attributes(text);
            let closure = deps.normalize().closure(&attributes);
            if args.summary {
                eprintln!("Closure of {{{}}} has {} attributes", attributes, closure.len());
            }
            Output::Attributes(closure)
        }
        Command::Check => {
            let Some(path) = args.cover.as_ref() else {
                fail("Error", "-D check requires -c COVER")
            };
            let cover = match DependencySet::from_fd_file(path) {
                Ok(cover) => cover,
                Err(e) => fail(
                    &format!("Error reading FD file '{}'", path.display()),
                    e,
                ),
            };
            match check_minimal_cover(deps.as_slice(), cover.as_slice()) {
                Ok(()) => {
                    if !args.no_output {
                        println!(
                            "{} is a minimal cover of {}",
                            path.display(),
                            args.input.display()
                        );
                    }
                    Output::Nothing
                }
                Err(violation) => fail("Not a minimal cover", violation),
            }
        }
        Command::Stats => {
            let stats = deps.stats();
            println!("FD Statistics:");
            println!("  Dependencies:        {}", stats.dependencies);
            println!("  Attributes:          {}", stats.attributes);
            println!("  Singleton RHS:       {}", stats.singleton);
            println!("  Trivial:             {}", stats.trivial);
            println!("  Vacuous:             {}", stats.vacuous);
            Output::Nothing
        }
        Command::Echo => {
            if args.summary {
                eprintln!("Echoing input without modification...");
            }
            Output::Dependencies(deps)
        }
    };

    if !args.no_output {
        let result = if let Some(ref output_path) = args.output_file {
            File::create(output_path)
                .and_then(|file| write_output(&mut BufWriter::new(file), &output))
                .map(|_| {
                    if args.summary {
                        eprintln!("Wrote output to: {}", output_path.display());
                    }
                })
        } else {
            write_output(&mut io::stdout().lock(), &output)
        };
        if let Err(e) = result {
            fail("Error writing output", e);
        }
    }

    if args.summary {
        eprintln!("Done.");
    }
}
