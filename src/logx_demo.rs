use log::info;
use logx::{Level, Logger};
use std::env;
use std::io;
use std::process;

fn main() {
    let mut args: Vec<String> = env::args().collect();

    // Check for verbose flag
    let verbose = args.contains(&"--verbose".to_string());
    if verbose {
        args.retain(|x| x != "--verbose");
    }

    if args.len() > 1 {
        eprintln!("Usage: {} [--verbose]", args[0]);
        process::exit(1);
    }

    // Route the log facade through a stderr logger
    if verbose {
        match Logger::new(io::stderr(), Level::Fine, true) {
            Ok(logger) => {
                log::set_max_level(logger.level_filter());
                if let Err(e) = log::set_boxed_logger(Box::new(logger)) {
                    eprintln!("Failed to install logger: {}", e);
                    process::exit(1);
                }
            }
            Err(e) => {
                eprintln!("Failed to create logger: {}", e);
                process::exit(1);
            }
        }
        info!("Verbose mode enabled");
    }

    println!("Logging level: Debug ");
    let lgr = Logger::new(io::stdout(), Level::Debug, false).ok();
    logx::fine!(lgr, "logx: fine messages are only visible when the logging level is less than or equals to Fine.");
    logx::debug!(lgr, "logx: this is a debug message.");
    logx::info!(lgr, "logx: hello world!");
    logx::error!(lgr, "logx: the server is not responding, please check logs for more details.");

    println!("Logging level: Info ");
    let lgr = Logger::new(io::stderr(), Level::Info, true).ok();
    logx::fine!(lgr, "logx: fine messages are only visible when the logging level is less than or equals to Fine.");
    logx::fine!(lgr, "logx: debug messages are only visible when the logging level is less than or equals to Debug.");
    logx::info!(lgr, "logx: hello world!");
    logx::error!(lgr, "logx: the server is not responding, please check logs for more details.");
    info!("Demo finished");
}
