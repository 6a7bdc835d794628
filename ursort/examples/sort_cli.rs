//! Sort CLI - sort numbers or strings from the command line and print JSON

use clap::{Parser, Subcommand};

use ursort::{
    fitting_width, pad_to_records, unpack_records, Direction, PassOrder, RadixSorter, SortConfig,
    SortKind,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(about = "ursort CLI - radix-sort fixed-width values and print the result as JSON")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Sort from largest to smallest
    #[arg(long, global = true)]
    descending: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort signed integers
    Ints {
        /// Values to sort
        values: Vec<i64>,
    },
    /// Sort double-precision floats
    Floats {
        /// Values to sort
        values: Vec<f64>,
    },
    /// Sort strings as zero-padded fixed-width records
    Strings {
        /// Values to sort
        values: Vec<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let direction = if cli.descending {
        Direction::Descending
    } else {
        Direction::Ascending
    };

    let json = match cli.command {
        Commands::Ints { mut values } => {
            let sorter = RadixSorter::new(SortConfig::new(
                SortKind::SignedInteger,
                PassOrder::LsbFirst,
                direction,
            ));
            sorter.sort(&mut values).map_err(|e| e.to_string())?;
            serde_json::to_string(&values)?
        }
        Commands::Floats { mut values } => {
            let sorter = RadixSorter::new(SortConfig::new(
                SortKind::Float64,
                PassOrder::LsbFirst,
                direction,
            ));
            sorter.sort(&mut values).map_err(|e| e.to_string())?;
            serde_json::to_string(&values)?
        }
        Commands::Strings { values } => {
            let width = fitting_width(&values);
            let mut slab = pad_to_records(&values, width).map_err(|e| e.to_string())?;
            ursort::sort_fixed_width(&mut slab, width, direction).map_err(|e| e.to_string())?;
            serde_json::to_string(&unpack_records(&slab, width).map_err(|e| e.to_string())?)?
        }
    };

    println!("{json}");
    Ok(())
}
