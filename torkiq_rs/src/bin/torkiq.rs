use std::any::Any;
use std::panic;
use std::process::ExitCode;

use clap::Parser;
use torkiq::cli::{self, Cli};

fn install_broken_pipe_handler() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let payload = info.payload();
        let is_broken = <dyn Any>::downcast_ref::<&str>(payload)
            .is_some_and(|s| s.contains("Broken pipe"))
            || <dyn Any>::downcast_ref::<String>(payload)
                .is_some_and(|s| s.contains("Broken pipe"));

        if is_broken {
            std::process::exit(0);
        }

        default_hook(info);
    }));
}

fn init_tracing(log_level: &str) {
    // stdout carries documents and reports; logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.parse().unwrap_or_default()),
        )
        .init();
}

fn main() -> ExitCode {
    install_broken_pipe_handler();

    let args = Cli::parse();
    init_tracing(&args.log_level);

    match cli::run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[torkiq] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
