#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use league::{
    game::Game,
    io,
    model::League,
    store::{open_file_store, PlayerStore},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de league (victoires par joueur, fichier JSON)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON des joueurs (créé s'il n'existe pas)
    #[arg(long, global = true, default_value = "game.db.json")]
    db: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Afficher le classement et optionnellement l'exporter
    League {
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Afficher le nombre de victoires d'un joueur
    Score {
        #[arg(long)]
        name: String,
    },

    /// Enregistrer une victoire
    Record {
        #[arg(long)]
        name: String,
    },

    /// Lire des lignes "<Name> wins" sur l'entrée standard
    Play,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let mut store = open_file_store(&cli.db)?;

    match cli.cmd {
        Commands::League { out_json, out_csv } => {
            let league = store.league().with_context(|| format!("loading {}", cli.db))?;
            if let Some(path) = out_json {
                io::export_league_json(path, &league)?;
            }
            if let Some(path) = out_csv {
                export_csv(&path, &league)?;
            }
            for (idx, p) in league.iter().enumerate() {
                println!("{} | {} | {}", idx + 1, p.name, p.wins);
            }
        }
        Commands::Score { name } => {
            let wins = store.player_score(&name)?;
            println!("{wins}");
        }
        Commands::Record { name } => {
            store.record_win(&name)?;
            println!("{}: {}", name, store.player_score(&name)?);
        }
        Commands::Play => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let mut game = Game::new(&mut store);
            let recorded = game.record_results(stdin.lock(), stdout.lock())?;
            eprintln!("{recorded} win(s) recorded");
        }
    }

    Ok(())
}

#[cfg(feature = "csv")]
fn export_csv(path: &str, league: &League) -> Result<()> {
    io::export_league_csv(path, league)
}

#[cfg(not(feature = "csv"))]
fn export_csv(_path: &str, _league: &League) -> Result<()> {
    anyhow::bail!("CSV export requires the `csv` feature")
}
