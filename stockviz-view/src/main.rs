use clap::Parser;
use stockviz::{run, Args};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("PANIC: stockviz panicked");
        eprintln!(
            "  Location: {}",
            panic_info
                .location()
                .map(|l| l.to_string())
                .unwrap_or_else(|| "unknown".to_string())
        );
        eprintln!(
            "  Message: {}",
            panic_info
                .payload()
                .downcast_ref::<&str>()
                .copied()
                .or_else(|| panic_info.payload().downcast_ref::<String>().map(String::as_str))
                .unwrap_or("<no message>")
        );
    }));

    let args = Args::parse();
    stockviz_core::tracing::init_with_filter(&args.log_level);

    info!("stockviz {}", env!("CARGO_PKG_VERSION"));

    let config = args.into_config();
    info!("input: {}", config.input_path.display());

    run(&config)
}
