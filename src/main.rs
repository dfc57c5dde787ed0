// src/main.rs

use robak::{cli, logging};

#[tokio::main]
async fn main() {
    let args = cli::parse();

    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("robak error: {err:?}");
        std::process::exit(1);
    }

    // The wrapper's own exit status is the copy tool's exit code on a
    // completed run, or a reserved setup code when the run never got that far.
    let code = match robak::run(args).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("robak error: {err:#}");
            err.exit_code()
        }
    };

    std::process::exit(code);
}
