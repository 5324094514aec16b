use clap::Parser;
use relm4::prelude::*;
use rotor::{Engine, FileStore, LabelStore, MemoryStore};
use whirl::config;
use whirl::gui::app::AppModel;
use whirl::sys::runtime;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed for the spin generator, for a reproducible sequence of spins
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write the default config file (if missing), print its path and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.init_config {
        let path = config::write_default_config()?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = config::load_or_default();

    let store: Box<dyn LabelStore> = match FileStore::default_location() {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("Entries will not be saved: {}", e);
            Box::new(MemoryStore::new())
        }
    };
    let engine = Engine::new(store, args.seed.or(config.spin.seed));

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx);

    let app = RelmApp::new("org.whirl.Whirl").with_args(Vec::<String>::new());

    app.run::<AppModel>((engine, config, rx));
    Ok(())
}
