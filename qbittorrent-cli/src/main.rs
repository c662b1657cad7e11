use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use qbittorrent_api::types::{AddTorrent, LogOptions, TorrentFilter, TorrentListOptions};
use qbittorrent_api::{ClientConfig, Hashes, QbitClient};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qbt", version, about = "qBittorrent WebUI command-line client")]
struct Cli {
    /// WebUI address
    #[arg(long, env = "QBT_URL", default_value = "http://localhost:8080")]
    url: String,
    /// Log in with this user before running the command
    #[arg(short, long, env = "QBT_USERNAME")]
    username: Option<String>,
    #[arg(short, long, env = "QBT_PASSWORD", hide_env_values = true)]
    password: Option<String>,
    /// Request timeout in seconds
    #[arg(long, env = "QBT_TIMEOUT", default_value = "10")]
    timeout: u64,
    /// Log every request and echo response bodies to stderr
    #[arg(long)]
    debug: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show application and WebUI API versions
    Version,
    /// List torrents
    List {
        /// all, downloading, seeding, completed, paused, active, ...
        #[arg(short, long)]
        filter: Option<TorrentFilter>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        tag: Option<String>,
    },
    /// Add torrents from URLs or .torrent files
    Add {
        /// .torrent files to upload
        files: Vec<PathBuf>,
        /// Magnet link or URL (repeatable)
        #[arg(long = "url", value_name = "URL")]
        urls: Vec<String>,
        #[arg(short, long)]
        category: Option<String>,
        /// Download directory
        #[arg(short, long, value_name = "PATH")]
        savepath: Option<String>,
        /// Comma separated tags
        #[arg(short, long, value_delimiter = ',')]
        tags: Vec<String>,
        /// Add without starting
        #[arg(long)]
        paused: bool,
    },
    /// Pause torrents
    Pause(Targets),
    /// Resume torrents
    Resume(Targets),
    /// Recheck torrent data
    Recheck(Targets),
    /// Remove torrents
    Delete {
        #[command(flatten)]
        targets: Targets,
        /// Also delete downloaded data
        #[arg(long)]
        files: bool,
    },
    /// Show global transfer statistics
    Transfer,
    /// Print the application log
    Log {
        /// Only entries newer than this id
        #[arg(long, default_value = "-1", allow_hyphen_values = true)]
        last_known_id: i64,
    },
    /// List categories
    Categories,
}

#[derive(Args)]
struct Targets {
    /// Info-hashes of the torrents
    #[arg(required_unless_present = "all")]
    hashes: Vec<String>,
    /// Apply to every torrent
    #[arg(long, conflicts_with = "hashes")]
    all: bool,
}

impl From<Targets> for Hashes {
    fn from(t: Targets) -> Self {
        Hashes::new(t.hashes, t.all)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = ClientConfig::new(&cli.url)
        .timeout(Duration::from_secs(cli.timeout))
        .debug(cli.debug);
    let client = QbitClient::with_config(config).context("failed to create client")?;
    if let Some(username) = &cli.username {
        login(&client, username, cli.password.as_deref().unwrap_or_default())?;
    }

    match cli.command {
        Command::Version => cmd_version(&client),
        Command::List {
            filter,
            category,
            tag,
        } => cmd_list(&client, filter, category, tag),
        Command::Add {
            files,
            urls,
            category,
            savepath,
            tags,
            paused,
        } => {
            let add = AddTorrent {
                urls,
                torrents: files,
                savepath,
                category,
                tags,
                paused: paused.then_some(true),
                ..AddTorrent::default()
            };
            cmd_add(&client, &add)
        }
        Command::Pause(targets) => {
            client.torrents().pause(&targets.into())?;
            Ok(())
        }
        Command::Resume(targets) => {
            client.torrents().resume(&targets.into())?;
            Ok(())
        }
        Command::Recheck(targets) => {
            client.torrents().recheck(&targets.into())?;
            Ok(())
        }
        Command::Delete { targets, files } => {
            client.torrents().delete(&targets.into(), files)?;
            Ok(())
        }
        Command::Transfer => cmd_transfer(&client),
        Command::Log { last_known_id } => cmd_log(&client, last_known_id),
        Command::Categories => cmd_categories(&client),
    }
}

fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn login(client: &QbitClient, username: &str, password: &str) -> Result<()> {
    let answer = client
        .auth()
        .login(username, password)
        .context("login request failed")?;
    if answer != "Ok." {
        bail!("login rejected for {username}: {answer}");
    }
    tracing::debug!(username, "logged in");
    Ok(())
}

// ── app ──

fn cmd_version(client: &QbitClient) -> Result<()> {
    let app = client.app();
    println!("qBittorrent: {}", app.version()?);
    println!("WebUI API:   {}", app.webapi_version()?);
    Ok(())
}

// ── torrents ──

fn cmd_list(
    client: &QbitClient,
    filter: Option<TorrentFilter>,
    category: Option<String>,
    tag: Option<String>,
) -> Result<()> {
    let options = TorrentListOptions {
        filter,
        category,
        tag,
        ..TorrentListOptions::default()
    };
    let torrents = client.torrents().info(&options)?;
    if torrents.is_empty() {
        println!("No torrents.");
        return Ok(());
    }
    for t in &torrents {
        println!(
            "{}  {:>5.1}%  {:<18}  {}",
            t.hash,
            t.progress * 100.0,
            format!("{:?}", t.state),
            t.name
        );
    }
    Ok(())
}

fn cmd_add(client: &QbitClient, add: &AddTorrent) -> Result<()> {
    let answer = client.torrents().add(add)?;
    if answer.trim() != "Ok." {
        bail!("server refused the torrents: {answer}");
    }
    println!("Added {} torrent(s).", add.urls.len() + add.torrents.len());
    Ok(())
}

fn cmd_categories(client: &QbitClient) -> Result<()> {
    let mut categories: Vec<_> = client.torrents().categories()?.into_values().collect();
    categories.sort_by(|a, b| a.name.cmp(&b.name));
    for c in &categories {
        if c.save_path.is_empty() {
            println!("{}", c.name);
        } else {
            println!("{}  ->  {}", c.name, c.save_path);
        }
    }
    Ok(())
}

// ── transfer / log ──

fn cmd_transfer(client: &QbitClient) -> Result<()> {
    let transfer = client.transfer();
    let info = transfer.info()?;
    println!("Status:    {:?}", info.connection_status);
    println!("DHT nodes: {}", info.dht_nodes);
    println!(
        "Download:  {} B/s (limit {}), {} B this session",
        info.dl_info_speed, info.dl_rate_limit, info.dl_info_data
    );
    println!(
        "Upload:    {} B/s (limit {}), {} B this session",
        info.up_info_speed, info.up_rate_limit, info.up_info_data
    );
    println!("Limits:    {:?}", transfer.speed_limits_mode()?);
    Ok(())
}

fn cmd_log(client: &QbitClient, last_known_id: i64) -> Result<()> {
    let options = LogOptions {
        last_known_id,
        ..LogOptions::default()
    };
    for entry in client.log().main(&options)? {
        println!("[{}] {:?}: {}", entry.id, entry.kind, entry.message);
    }
    Ok(())
}
