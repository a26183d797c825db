mod config;
mod error;
mod i18n;
mod ui;

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::{AppConfig, MemoryStore, PreferenceStore, RonFileStore};
use i18n::{LocaleCatalog, LocaleHandle, LocaleService};
use ui::LanguageSelector;

const HELP: &str = "\
bizrecovery - localized business recovery console

USAGE:
  bizrecovery [OPTIONS]

OPTIONS:
  --lang <CODE>      Switch to and remember a language (en, pidgin, yoruba)
  --list             List available languages and exit
  --page <PATH>      Route highlighted in the navigation bar [default: /]
  --store <KIND>     Preference storage: file or memory [default: file]
  --write-config     Write the current configuration file and exit
  -h, --help         Print help
";

#[derive(Debug)]
struct Args {
    lang: Option<String>,
    list: bool,
    page: String,
    memory_store: bool,
    write_config: bool,
}

fn parse_args() -> anyhow::Result<Option<Args>> {
    let mut pargs = pico_args::Arguments::from_env();
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }
    let store: Option<String> = pargs.opt_value_from_str("--store")?;
    let memory_store = match store.as_deref() {
        None | Some("file") => false,
        Some("memory") => true,
        Some(other) => anyhow::bail!("unknown store kind '{other}'"),
    };
    let args = Args {
        lang: pargs.opt_value_from_str("--lang")?,
        list: pargs.contains("--list"),
        page: pargs
            .opt_value_from_str("--page")?
            .unwrap_or_else(|| "/".to_string()),
        memory_store,
        write_config: pargs.contains("--write-config"),
    };
    let rest = pargs.finish();
    if !rest.is_empty() {
        anyhow::bail!("unexpected arguments: {rest:?}");
    }
    Ok(Some(args))
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open_store(config: &AppConfig, memory: bool) -> Box<dyn PreferenceStore> {
    if memory {
        return Box::new(MemoryStore::new());
    }
    let path: Option<PathBuf> = config
        .preferences_path
        .clone()
        .or_else(config::default_preferences_path);
    match path {
        Some(path) => {
            let store = RonFileStore::new(path);
            info!(path = %store.path().display(), "using preference file");
            Box::new(store)
        }
        None => {
            warn!("no config directory found, preferences will not persist");
            Box::new(MemoryStore::new())
        }
    }
}

fn main() -> anyhow::Result<()> {
    let Some(args) = parse_args().context("invalid arguments")? else {
        return Ok(());
    };
    let app_config = config::load_config();
    init_tracing(&app_config);

    if args.write_config {
        config::save_config(&app_config);
        return Ok(());
    }

    let store = open_store(&app_config, args.memory_store);
    let catalog = LocaleCatalog::builtin().context("built-in locale catalog is invalid")?;
    let service = Arc::new(LocaleService::new(catalog, store));
    let handle = LocaleHandle::new(Arc::clone(&service));

    if args.list {
        let active = service.get_active().code;
        for (code, name) in service.list_available() {
            let marker = if code == active { "*" } else { " " };
            println!("{marker} {code:<8} {name}");
        }
        return Ok(());
    }

    let needs_redraw = Arc::new(AtomicBool::new(args.lang.is_none()));
    let redraw = Arc::clone(&needs_redraw);
    let subscription = service.subscribe(move |_| redraw.store(true, Ordering::Relaxed));

    if let Some(code) = args.lang.as_deref() {
        LanguageSelector::new(handle.clone())
            .select(code)
            .context("cannot switch language; try --list")?;
    }

    if needs_redraw.swap(false, Ordering::Relaxed) {
        println!("{}", ui::render_home(&handle, &args.page)?);
    }
    service.unsubscribe(subscription);
    Ok(())
}
