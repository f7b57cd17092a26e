use std::fs::File;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use jumplist::core::alphabet::Alphabet;
use jumplist::core::config;
use jumplist::core::index::{build_index, dump};
use jumplist::core::library::Library;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "jumplist", about = "Game list browser with jump-to-letter navigation")]
struct Args {
    /// Config file to use instead of ~/.jumplist/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Keyboard language (en, gb)
    #[arg(short, long)]
    language: Option<String>,

    /// System to open first
    #[arg(short, long)]
    system: Option<String>,

    /// Print the jump index as JSON and exit
    #[arg(long)]
    print_index: bool,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to jumplist.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("jumplist.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match &args.config {
        Some(path) => config::load_config_from(path, false),
        None => config::load_config(),
    }
    .map_err(io::Error::other)?;
    let resolved = config::resolve(&file_config, args.language.as_deref(), args.system.as_deref());

    log::info!(
        "Jumplist starting up: {} systems, language {}",
        resolved.systems.len(),
        resolved.language
    );

    let library = Library::scan(&resolved.systems);

    if args.print_index {
        return print_index(&library, &resolved.keyboard.alphabet);
    }

    if let Some(path) = jumplist::tui::run(&resolved, library)? {
        println!("{}", path.display());
    }
    Ok(())
}

fn print_index(library: &Library, alphabet: &Alphabet) -> io::Result<()> {
    let set = build_index(&library.systems, alphabet);
    let json = serde_json::to_string_pretty(&dump(library, &set)).map_err(io::Error::other)?;
    println!("{json}");
    Ok(())
}
