// src/main.rs

use taskorder::{cli, exit_code, logging, run};

fn main() {
    if let Err(err) = run_main() {
        eprintln!("taskorder error: {err:?}");
        std::process::exit(exit_code(&err));
    }
}

fn run_main() -> anyhow::Result<()> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args)
}
