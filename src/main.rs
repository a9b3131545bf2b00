use {
    anyhow::Result,
    clap::Parser,
    defi_scope::{Cli, run},
    std::panic,
};

#[tokio::main]
async fn main() -> Result<()> {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Warn)
    };

    let mut builder = env_logger::Builder::new();

    builder
        .filter(None, global_level)
        .filter(Some("defi_scope"), my_code_level)
        .parse_default_env()
        .init();

    let args = Cli::parse();
    let output = run(&args).await?;
    println!("{}", output);
    Ok(())
}
