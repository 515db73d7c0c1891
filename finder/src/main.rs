use backend::progress::ProgressUpdate;
use backend::search::{self, SearchConfig};
use crossbeam::channel;
use std::env;
use std::process;
use std::thread;
use std::time::Instant;

mod arguments;

use crate::arguments::{parse_bound_and_workers, DEFAULT_BOUND};

fn main() {
    let args: Vec<String> = env::args().collect();
    let arguments = match parse_bound_and_workers(args) {
        Ok(arguments) => arguments,
        Err(message) => {
            eprintln!("{}", message);
            process::exit(1);
        }
    };

    if arguments.bound_defaulted {
        println!("No argument for p was detected. Using p = {}.", DEFAULT_BOUND);
        println!("Usage: finder <p> [workers]   to find the Mersenne primes from 1 to 2^p - 1");
    } else {
        println!(
            "Calculating Mersenne primes (2^p - 1) up to p = {}:",
            arguments.bound
        );
    }

    let mut config = SearchConfig::default();
    if let Some(workers) = arguments.workers {
        config.workers = workers;
    }
    println!("Using {} workers", config.workers);

    let (tx, rx) = channel::unbounded();

    // Every worker's senders are dropped once the search returns, which
    // ends this printer.
    let printer = thread::spawn(move || {
        while let Ok(ProgressUpdate { percent, .. }) = rx.recv() {
            println!("~{:.1}% finished.", percent);
        }
    });

    let started = Instant::now();
    match search::run(arguments.bound, &config, tx) {
        Ok(exponents) => {
            let elapsed = started.elapsed();
            let _ = printer.join();

            println!(
                "\nIt took {:.3} seconds to calculate the Mersenne primes up to 2^{} - 1.\n",
                elapsed.as_secs_f64(),
                arguments.bound
            );
            for p in exponents {
                println!("2^{} - 1", p);
            }
        }
        Err(error) => {
            eprintln!("{}", error);
            process::exit(1);
        }
    }
}
