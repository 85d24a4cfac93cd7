use clap::{Parser, Subcommand};
use grid_partition::{Cell, GridPartitioner, GridShape, expand_block};

#[derive(Parser)]
#[command(name = "gridtool", version, about = "Grid partitioning CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Enumerate the anchor cells of a grid at a stride
    Anchors {
        #[arg(long)]
        cols: i32,
        #[arg(long)]
        rows: i32,
        #[arg(long, default_value_t = 2)]
        interval: i32,
        /// Print only the anchor count
        #[arg(long)]
        count: bool,
    },
    /// Expand one anchor into the cells its block covers
    Block {
        #[arg(long, default_value_t = 0)]
        x: i32,
        #[arg(long, default_value_t = 0)]
        y: i32,
        #[arg(long, default_value_t = 2)]
        interval: i32,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Anchors {
            cols,
            rows,
            interval,
            count,
        } => anchors_cmd(cols, rows, interval, count),
        Command::Block { x, y, interval } => block_cmd(x, y, interval),
    }
}

fn anchors_cmd(cols: i32, rows: i32, interval: i32, count: bool) {
    let shape = match GridShape::new(cols, rows) {
        Ok(shape) => shape,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };
    let part = match GridPartitioner::new(shape, interval) {
        Ok(part) => part,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    if count {
        println!("{}", part.anchor_count());
        return;
    }
    for cell in part.anchors() {
        println!("({}, {})", cell.x, cell.y);
    }
}

fn block_cmd(x: i32, y: i32, interval: i32) {
    match expand_block(Cell::new(x, y), interval) {
        Ok(block) => {
            for cell in block {
                println!("({}, {})", cell.x, cell.y);
            }
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
