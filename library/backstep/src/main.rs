//! Backstep CLI

use backstep::{init_tracing, parse_args, run, Action};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let action = match parse_args(&args) {
        Ok(action) => action,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    match action {
        Action::Help => print_usage(),
        Action::Version => {
            println!("backstep {}", env!("CARGO_PKG_VERSION"));
        }
        Action::Reverse(invocation) => {
            init_tracing(invocation.config.verbose);

            let stdin = std::io::stdin().lock();
            let mut stdout = std::io::stdout().lock();
            if let Err(e) = run(&invocation, stdin, &mut stdout) {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("Backstep - reverse text one pull at a time");
    println!();
    println!("Usage: backstep <command> [options] [args]");
    println!();
    println!("Commands:");
    println!("  chars <text...>     Print the characters in reverse");
    println!("  words <word...>     Print the words in reverse order");
    println!("  lines               Print stdin lines in reverse order");
    println!("  help                Show this help message");
    println!("  version             Show version information");
    println!();
    println!("Options:");
    println!("  --take=<n>          Stop after n elements");
    println!("  --separator=<s>     Join output with s (\\n and \\t are expanded)");
    println!("  -v, --verbose       Debug logging to stderr");
    println!("  --                  Treat everything after as arguments");
    println!();
    println!("Environment:");
    println!("  BACKSTEP_LOG        Log filter (falls back to RUST_LOG, then warn)");
    println!("  BACKSTEP_LOG_TREE   Set to 1 for hierarchical log output");
}
