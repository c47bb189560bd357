// SPDX-License-Identifier: PMPL-1.0-or-later

//! tapaterra: browse world flags by continent, in English or Polish.

use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use tapaterra::catalog::CountryCatalog;
use tapaterra::config::{Config, Overrides};
use tapaterra::i18n::{Lang, LanguageStore};
use tapaterra::logging::setup_logging;
use tapaterra::preferences::FilePreferences;
use tapaterra::render;
use tapaterra::splash::{self, SplashTimer};
use tapaterra::state::{Action, Browser};
use tapaterra::storage::ItemLog;
use tapaterra::types::Continent;

#[derive(Parser)]
#[command(name = "tapaterra")]
#[command(version)]
#[command(about = "Explore the world's flags, grouped by continent")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding preferences and the item log
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Use this language for one run without saving it (en, pl)
    #[arg(long, global = true, value_name = "CODE")]
    lang: Option<String>,

    /// Skip the splash sequence
    #[arg(long, global = true)]
    no_splash: bool,

    /// Country details JSON to use instead of the built-in table
    #[arg(long, global = true, value_name = "FILE")]
    details: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the splash sequence
    Splash,

    /// List flags, optionally narrowed by continent and name
    List {
        /// Continent filter
        #[arg(short, long, value_enum, default_value = "all")]
        continent: ContinentArg,

        /// Case-insensitive name search
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show the detail card for a country
    Show {
        /// ISO 3166-1 alpha-2 code or country name
        #[arg(value_name = "COUNTRY")]
        country: String,
    },

    /// Show or change the display language
    Lang {
        /// Language code to switch to (en, pl)
        #[arg(value_name = "CODE")]
        code: Option<String>,
    },

    /// Manage the item log
    Items {
        #[command(subcommand)]
        action: Option<ItemsCommand>,
    },
}

#[derive(Subcommand)]
enum ItemsCommand {
    /// List items
    List,
    /// Add an item stamped with the current time
    Add,
    /// Delete items by position
    Delete {
        #[arg(value_name = "INDEX", required = true)]
        indices: Vec<usize>,
    },
}

// CLI argument types
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ContinentArg {
    All,
    Africa,
    Asia,
    Europe,
    NorthAmerica,
    SouthAmerica,
    Oceania,
    Antarctica,
}

impl From<ContinentArg> for Continent {
    fn from(arg: ContinentArg) -> Self {
        match arg {
            ContinentArg::All => Continent::All,
            ContinentArg::Africa => Continent::Africa,
            ContinentArg::Asia => Continent::Asia,
            ContinentArg::Europe => Continent::Europe,
            ContinentArg::NorthAmerica => Continent::NorthAmerica,
            ContinentArg::SouthAmerica => Continent::SouthAmerica,
            ContinentArg::Oceania => Continent::Oceania,
            ContinentArg::Antarctica => Continent::Antarctica,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = Config::resolve(Overrides {
        data_dir: cli.data_dir,
        skip_splash: cli.no_splash,
        details_file: cli.details,
    });
    tracing::debug!(?config, "configuration resolved");

    // Either store failing to open is fatal: there is nothing to fall back to.
    let preferences = FilePreferences::open(config.preferences_path())?;
    let mut items = ItemLog::open(config.items_path())?;

    let mut store = match cli.lang.as_deref() {
        Some(code) => {
            let lang = Lang::from_code(code)
                .ok_or_else(|| anyhow!("unsupported language '{}' (supported: en, pl)", code))?;
            LanguageStore::fixed(lang)
        }
        None => LanguageStore::open(Box::new(preferences)),
    };

    let catalog = match &config.details_file {
        Some(path) => CountryCatalog::new().with_details_file(path)?,
        None => CountryCatalog::new(),
    };

    match cli.command {
        None => {
            if !config.skip_splash {
                play_splash(&catalog, &store);
            }
            let browser = Browser::new(catalog);
            print!("{}", render::render_country_list(&browser, &store));
        }

        Some(Commands::Splash) => play_splash(&catalog, &store),

        Some(Commands::List { continent, search }) => {
            let mut browser = Browser::new(catalog);
            browser.dispatch(Action::SelectContinent(continent.into()));
            if let Some(query) = search {
                browser.dispatch(Action::Search(query));
            }
            print!("{}", render::render_country_list(&browser, &store));
        }

        Some(Commands::Show { country }) => {
            let Some(found) = catalog.find(&country) else {
                bail!("{}: {}", store.get("detail.not_found"), country);
            };
            let id = found.id;
            let mut browser = Browser::new(catalog);
            browser.dispatch(Action::SelectCountry(id));
            if let Some(selected) = browser.selected_country() {
                print!(
                    "{}",
                    render::render_country_detail(selected, browser.selected_details(), &store)
                );
            }
        }

        Some(Commands::Lang { code }) => match code {
            Some(code) => {
                if cli.lang.is_some() {
                    bail!("--lang is a one-off override; drop it to change the saved language");
                }
                store.subscribe(|store| print!("{}", render::render_language_settings(store)));
                let before = store.current_language();
                store.set_language_code(&code)?;
                if store.current_language() == before {
                    print!("{}", render::render_language_settings(&store));
                }
            }
            None => print!("{}", render::render_language_settings(&store)),
        },

        Some(Commands::Items { action }) => match action.unwrap_or(ItemsCommand::List) {
            ItemsCommand::List => print!("{}", render::render_items(&items, &store)),
            ItemsCommand::Add => {
                let item = items.add()?;
                println!(
                    "{}: {} {}",
                    store.get("content.add_item"),
                    store.get("content.item_at"),
                    item.timestamp.format("%Y-%m-%d %H:%M:%S")
                );
            }
            ItemsCommand::Delete { indices } => {
                let removed = items.delete(&indices)?;
                println!("{}: {}", store.get("content.deleted"), removed);
                print!("{}", render::render_items(&items, &store));
            }
        },
    }

    Ok(())
}

fn play_splash(catalog: &CountryCatalog, store: &LanguageStore) {
    let flags = splash::featured(catalog, store);
    print!("{}", render::render_splash(&flags, store));
    let mut timer = SplashTimer::default();
    timer.start(Instant::now());
    timer.wait();
    println!();
}
