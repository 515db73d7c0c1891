pub(crate) const DEFAULT_BOUND: u32 = 10_000;

const BOUND_HELP: &str =
    "Please enter a number, p, greater than 1 to find the Mersenne primes from 1 to 2^p - 1";
const WORKERS_HELP: &str = "Worker count must be a whole number of at least 1";

pub(crate) struct Arguments {
    pub bound: u32,
    pub workers: Option<usize>,
    pub bound_defaulted: bool,
}

pub(crate) fn parse_bound_and_workers(args: Vec<String>) -> Result<Arguments, String> {
    let mut arguments = Arguments {
        bound: DEFAULT_BOUND,
        workers: None,
        bound_defaulted: true,
    };

    if args.len() >= 2 {
        let bound: u32 = args[1].parse().map_err(|_| BOUND_HELP.to_string())?;
        if bound < 2 {
            return Err(BOUND_HELP.to_string());
        }
        arguments.bound = bound;
        arguments.bound_defaulted = false;
    }

    if args.len() >= 3 {
        let workers: usize = args[2].parse().map_err(|_| WORKERS_HELP.to_string())?;
        if workers == 0 {
            return Err(WORKERS_HELP.to_string());
        }
        arguments.workers = Some(workers);
    }

    Ok(arguments)
}
