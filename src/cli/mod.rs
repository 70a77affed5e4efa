//! CLI argument parsing and dispatch

pub mod encode;

use clap::error::ErrorKind;
use clap::Parser;

/// Maidenhead grid square encoder
#[derive(Parser)]
#[command(name = "gridsq")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub args: encode::EncodeArgs,
}

/// Run the CLI
pub fn run() -> crate::error::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = err.print();
                return Ok(());
            }
            ErrorKind::ValueValidation | ErrorKind::InvalidValue => {
                // Refuse non-numeric coordinates rather than defaulting
                // them to zero.
                eprintln!("error: LON and LAT must be decimal numbers");
                usage_exit();
            }
            _ => usage_exit(),
        },
    };

    encode::run(cli.args)
}

fn usage_exit() -> ! {
    let program = std::env::args()
        .next()
        .unwrap_or_else(|| String::from("gridsq"));
    eprintln!("usage: {} LON LAT", program);
    std::process::exit(1);
}
