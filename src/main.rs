use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use console::Emoji;

use podvoice::{
    ConsoleHost, DEFAULT_PLAYER, FeedConfig, Intent, LocalPlayback, PodcastSession, ReqwestClient,
    Skill, select_playback,
};

static MICROPHONE: Emoji<'_, '_> = Emoji("🎙️  ", "");
static WAVE: Emoji<'_, '_> = Emoji("👋 ", "");

/// Ask for podcast episodes by voice, from the terminal
#[derive(Parser, Debug)]
#[command(name = "podvoice")]
#[command(about = "Pick and play podcast episodes from your configured feeds")]
#[command(version)]
struct Args {
    /// Settings JSON with nameone/feedone .. namethree/feedthree
    #[arg(short, long)]
    settings: PathBuf,

    /// Player program used for playback
    #[arg(long, default_value = DEFAULT_PLAYER)]
    player: String,

    /// Extra argument passed to the player before the URL (repeatable)
    #[arg(long = "player-arg", allow_hyphen_values = true)]
    player_args: Vec<String>,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,

    /// Seconds to wait for an answer while browsing episodes
    #[arg(long, default_value = "20")]
    prompt_timeout: u64,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Choose an episode of the named podcast and play it
    Play {
        /// What you would say, e.g. "play rust radio"
        utterance: Vec<String>,
    },
    /// Hear the latest episode of one podcast, or of all of them
    Latest {
        utterance: Vec<String>,
    },
    /// Read commands line by line until end of input
    Listen,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

type Session = PodcastSession<ReqwestClient, ConsoleHost<tokio::io::BufReader<tokio::io::Stdin>>>;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = FeedConfig::load(&args.settings).context("Failed to load settings")?;
    let client = ReqwestClient::with_timeout(Duration::from_secs(args.timeout))
        .context("Failed to set up HTTP")?;
    let host = ConsoleHost::stdin(Duration::from_secs(args.prompt_timeout));

    // The terminal host has no audio service of its own
    let playback = select_playback(None, LocalPlayback::new(args.player, args.player_args));
    let mut session: Session = PodcastSession::new(config, client, host, playback);

    match args.command {
        Command::Play { utterance } => {
            let outcome = session
                .handle(Intent::PlayPodcast {
                    utterance: utterance.join(" "),
                })
                .await;
            if outcome.is_success() {
                play_until_done(&mut session).await?;
            } else {
                std::process::exit(1);
            }
        }
        Command::Latest { utterance } => {
            let outcome = session
                .handle(Intent::LatestEpisode {
                    utterance: utterance.join(" "),
                })
                .await;
            if !outcome.is_success() {
                std::process::exit(1);
            }
        }
        Command::Listen => listen(&mut session).await,
    }

    Ok(())
}

/// Keep the process alive while the player runs; Ctrl-C stops it
async fn play_until_done(session: &mut Session) -> Result<()> {
    let interrupted = tokio::select! {
        result = session.wait_for_playback() => {
            result.context("Player failed")?;
            false
        }
        _ = tokio::signal::ctrl_c() => true,
    };

    if interrupted {
        session.stop().await;
    }
    Ok(())
}

async fn listen(session: &mut Session) {
    println!(
        "\n{}{} {}\n",
        MICROPHONE,
        "podvoice".bold().magenta(),
        "- say play, latest or stop".dimmed()
    );

    while let Some(utterance) = session.host().read_utterance().await {
        match Intent::recognize(&utterance) {
            Some(intent) => {
                let outcome = session.handle(intent).await;
                log::debug!("Outcome: {outcome:?}");
            }
            None => println!("{}", "Sorry, I can only play podcasts.".yellow()),
        }
    }

    session.stop().await;
    println!("\n{WAVE}{}", "Bye".dimmed());
}
