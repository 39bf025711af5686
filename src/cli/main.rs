#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::io::BufReader;

use clap::Parser;

use marten_sat::{context::Context, reports::Report};

mod misc;
mod parse_args;

use misc::examine_parser_report;
use parse_args::Args;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();

    let config = match args.config() {
        Ok(config) => config,
        Err(e) => {
            println!("c Configuration error: {e:?}");
            std::process::exit(1);
        }
    };

    let mut ctx: Context = Context::from_config(config);

    println!("c Reading DIMACS file from {:?}", args.path);

    let file = match std::fs::File::open(&args.path) {
        Ok(file) => file,
        Err(_) => {
            println!("c Failed to open CNF file");
            std::process::exit(1);
        }
    };

    let parse_report = match &args.path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if *extension == "xz" => {
            ctx.read_dimacs(BufReader::new(xz2::read::XzDecoder::new(&file)))
        }

        _ => ctx.read_dimacs(BufReader::new(&file)),
    };

    if !examine_parser_report(parse_report) {
        std::process::exit(1);
    }

    let result = match ctx.solve() {
        Ok(report) => report,

        Err(e) => {
            println!("c Solve error: {e:?}");
            std::process::exit(2);
        }
    };

    println!(
        "c {} conflicts, {} decisions, {} propagations, {} restarts, {} reductions",
        ctx.counters.total_conflicts,
        ctx.counters.total_decisions,
        ctx.counters.total_propagations,
        ctx.counters.restarts,
        ctx.counters.reductions
    );
    println!("c Time: {:.2?}", ctx.counters.time);

    println!("s {result}");

    match result {
        Report::Satisfiable => {
            if args.model {
                println!("v {}", ctx.valuation_string());
            }
            std::process::exit(10)
        }

        Report::Unsatisfiable => std::process::exit(20),

        Report::Unknown => std::process::exit(0),
    }
}
