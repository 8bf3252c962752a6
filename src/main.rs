use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use varpath::{Error, cli, validate};

#[derive(Parser)]
#[command(name = "varpath")]
#[command(about = "Apply ordered set/delete/push instructions to JSON documents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply an instruction list to a document
    Apply {
        /// JSON document to start from (absent if omitted)
        #[arg(long)]
        data: Option<PathBuf>,

        /// JSON array of { path, operator, value } instructions
        #[arg(long)]
        instructions: PathBuf,

        /// Where to write the result (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the result on a single line
        #[arg(long)]
        compact: bool,
    },

    /// Print the value at a path
    Get {
        #[arg(long)]
        data: PathBuf,

        path: String,
    },

    /// Check that paths are well-formed
    Validate {
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

fn run(command: Commands) -> Result<bool, Error> {
    match command {
        Commands::Apply {
            data,
            instructions,
            output,
            compact,
        } => {
            let result = cli::apply_files(data.as_deref(), &instructions)?;
            cli::write_json(&result, output.as_deref(), compact)?;
            Ok(true)
        }
        Commands::Get { data, path } => match cli::get_from_file(&data, &path)? {
            Some(value) => {
                cli::write_json(&value, None, false)?;
                Ok(true)
            }
            None => {
                eprintln!("No value at '{path}'");
                Ok(false)
            }
        },
        Commands::Validate { paths } => {
            let mut all_valid = true;
            for path in &paths {
                match validate(path) {
                    Ok(()) => println!("ok      {path}"),
                    Err(e) => {
                        all_valid = false;
                        println!("invalid {path}: {e}");
                    }
                }
            }
            Ok(all_valid)
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
