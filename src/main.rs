use anyhow::Result;
use tasklist::config::Config;
use tasklist::constants::API_URL_ENV;
use tasklist::logger::Logger;

fn print_usage() {
    println!("tasklist - terminal client for a REST to-do service");
    println!();
    println!("Usage: tasklist [--init-config] [--help]");
    println!();
    println!("  --init-config   Write a default config file to the user config directory");
    println!("  --help          Show this message");
    println!();
    println!("Set {} to point at a different task service.", API_URL_ENV);
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_usage();
        return Ok(());
    }

    if args.iter().any(|arg| arg == "--init-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    if let Some(unknown) = args.first() {
        eprintln!("❌ Unknown argument: {}", unknown);
        print_usage();
        std::process::exit(2);
    }

    let config = Config::load()?;
    let logger = Logger::from_config(config.logging.enabled)?;

    tasklist::ui::run_app(config, logger).await
}
