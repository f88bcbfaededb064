use std::io::{BufRead, Write};
use std::path::PathBuf;

use blogshell::config::{ShellConfig, StorageBackend};
use blogshell::fs::{FileSystem, KeyValueStore, MemoryStore, SledStore, VirtualFs};
use blogshell::seed::{seed_blog_posts, DEFAULT_POSTS, PROFILE};
use blogshell::{CommandResult, Shell};
use clap::Parser;
use tracing::{info, warn};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

#[derive(Parser)]
#[command(name = "blogshell")]
#[command(about = "A tiny terminal over a persistent virtual file system")]
#[command(version)]
struct Cli {
    /// Run a single command line and exit
    #[arg(short = 'c')]
    command: Option<String>,

    /// Path to a TOML config file
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Directory holding the persistent state
    #[arg(long = "data-dir")]
    data_dir: Option<PathBuf>,

    /// Keep everything in memory for this session
    #[arg(long = "ephemeral")]
    ephemeral: bool,

    /// Log filter, e.g. `info` or `blogshell=debug`
    #[arg(long = "log-level")]
    log_level: Option<String>,

    /// Start from an empty file system
    #[arg(long = "reset")]
    reset: bool,
}

fn load_config(cli: &Cli) -> ShellConfig {
    let path = cli.config.clone().or_else(ShellConfig::default_file);
    let mut config = match path {
        Some(path) => match ShellConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("blogshell: {}", e);
                std::process::exit(2);
            }
        },
        None => ShellConfig::default(),
    };

    if let Some(dir) = &cli.data_dir {
        config.storage.path = Some(dir.clone());
    }
    if cli.ephemeral {
        config.storage.backend = StorageBackend::Memory;
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    config
}

fn open_store(config: &ShellConfig) -> Box<dyn KeyValueStore> {
    if config.storage.backend == StorageBackend::Memory {
        return Box::new(MemoryStore::new());
    }

    let opened = config
        .data_dir()
        .map_err(|e| e.to_string())
        .and_then(|dir| SledStore::open(dir.join("state")).map_err(|e| e.to_string()));
    match opened {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!(error = %e, "persistent storage unavailable, keeping state in memory");
            Box::new(MemoryStore::new())
        }
    }
}

/// Print a result and whatever panels the command asked for.
fn render(shell: &mut Shell, line: &str, result: &CommandResult) {
    let is_clear = line
        .split_whitespace()
        .next()
        .map_or(false, |verb| verb.eq_ignore_ascii_case("clear"));
    if is_clear {
        print!("{}", CLEAR_SCREEN);
    }

    if !result.output.is_empty() {
        if result.is_error {
            eprintln!("{}", result.output);
        } else {
            println!("{}", result.output);
        }
    }

    let session = shell.session_mut();
    if let Some(panel) = session.close_blog_panel() {
        println!("\n== {} ==\n\n{}\n", panel.title, panel.content.trim_end());
    }
    if session.whoami_open() {
        println!("\n{}\n", PROFILE.trim_end());
        session.set_whoami_open(false);
    }
}

fn print_welcome() {
    println!("Welcome to the Terminal Portfolio!");
    println!("Type 'help' to see available commands.");
    println!("Type 'whoami' to learn more about me.\n");
}

fn run_interactive(shell: &mut Shell) {
    print_welcome();
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{} ", shell.prompt());
        let _ = std::io::stdout().flush();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("blogshell: {}", e);
                break;
            }
            None => {
                println!();
                break;
            }
        };

        if let Some(result) = shell.submit(&line) {
            render(shell, &line, &result);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let config = load_config(&cli);
    blogshell::logging::init(&config.logging);

    let mut fs = VirtualFs::open(open_store(&config), config.storage.key.clone());
    if cli.reset {
        info!("resetting file system");
        fs.reset();
    }
    if config.seed.enabled {
        seed_blog_posts(&mut fs, DEFAULT_POSTS);
    }

    let mut shell = Shell::new(fs);

    if let Some(line) = cli.command {
        let result = shell.handle_command(&line);
        render(&mut shell, &line, &result);
        std::process::exit(if result.is_error { 1 } else { 0 });
    }

    run_interactive(&mut shell);
}
