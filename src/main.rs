use anyhow::{bail, Context, Result};
use carddb::carddb::{CardDB, CardRepository};
use carddb::config::DbConfig;
use common::card_entities::{Card, CardKind};
use log::info;
use std::path::PathBuf;
mod write_schema;

const USAGE: &str = "usage: landtap [DATASET] [--json] [--schema PATH]";

#[derive(Debug, Default)]
struct Args {
    dataset: Option<PathBuf>,
    json: bool,
    schema: Option<PathBuf>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let mut res = Args::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => res.json = true,
            "--schema" => {
                let path = args.next().context("--schema needs a path")?;
                res.schema = Some(PathBuf::from(path));
            }
            "-h" | "--help" => bail!(USAGE),
            flag if flag.starts_with("--") => bail!("unknown flag {}\n{}", flag, USAGE),
            _ if res.dataset.is_none() => res.dataset = Some(PathBuf::from(&arg)),
            _ => bail!("unexpected argument {}\n{}", arg, USAGE),
        }
    }
    Ok(res)
}

fn describe(card: &Card) -> String {
    let mut line = format!("{} [{}]", card.name, card.description.replace('\n', " "));
    if let Some(mana) = card.mana_tap_profile() {
        line.push_str(&format!(" taps for {}", mana));
    }
    if card.behavior.entrance.enters_tapped {
        line.push_str(", enters tapped");
    }
    if let CardKind::NonbasicLand { tap_purposes, .. } = &card.kind {
        line.push_str(&format!(", tap abilities {:?}", tap_purposes));
    }
    line
}

fn print_summary(repository: &CardRepository) {
    println!("Basic lands ({}):", repository.library.len());
    for card in &repository.library {
        println!("  {}", describe(card));
    }
    println!("Nonbasic lands ({}):", repository.lands.len());
    for card in &repository.lands {
        println!("  {}", describe(card));
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = parse_args(std::env::args().skip(1))?;
    let mut config = DbConfig::from_env();
    if let Some(dataset) = args.dataset {
        config.dataset_path = dataset;
    }
    if let Some(path) = &args.schema {
        write_schema::write_types(path)?;
        info!("wrote schema to {}", path.display());
    }
    let db = CardDB::from_path(&config.dataset_path)
        .with_context(|| format!("loading {}", config.dataset_path.display()))?;
    let repository = db.build_repository(&config.land_selection);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&repository)?);
    } else {
        print_summary(&repository);
    }
    Ok(())
}
