use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;
use tracing_subscriber::EnvFilter;

use emoji_folders::{App, EntryRef, listing, util};

const USAGE: &str = "usage: emoji-folders [--config PATH] [--all] [--watch] [DIR|file:URI]";
const POLL_INTERVAL: Duration = Duration::from_millis(500);

struct Options {
    dir: PathBuf,
    config: PathBuf,
    show_hidden: bool,
    watch: bool,
}

fn parse_args() -> Result<Options, String> {
    let mut dir = None;
    let mut config = None;
    let mut show_hidden = false;
    let mut watch = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-c" | "--config" => {
                let p = args.next().ok_or("--config needs a path")?;
                config = Some(PathBuf::from(p));
            }
            "-a" | "--all" => show_hidden = true,
            "-w" | "--watch" => watch = true,
            "-h" | "--help" => return Err(USAGE.into()),
            s if s.starts_with('-') => return Err(format!("unknown option {s}\n{USAGE}")),
            _ if dir.is_some() => return Err(USAGE.into()),
            _ => dir = Some(local_dir(&arg)?),
        }
    }

    let dir = match dir {
        Some(d) => d,
        None => std::env::current_dir().map_err(|e| e.to_string())?,
    };
    Ok(Options {
        dir,
        config: config.unwrap_or_else(util::default_config_path),
        show_hidden,
        watch,
    })
}

/// `DIR` may be a plain path or a `file:` URI.
fn local_dir(arg: &str) -> Result<PathBuf, String> {
    let entry = EntryRef::parse(arg);
    if !entry.is_local() {
        return Err(format!("{arg}: not a local directory"));
    }
    Ok(entry.path().to_path_buf())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("EMOJI_FOLDERS_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let opts = match parse_args() {
        Ok(o) => o,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::from(2);
        }
    };

    let mut app = App::new(opts.config.clone());
    let result = if opts.watch {
        watch(&mut app, &opts).await
    } else {
        let mut stdout = io::stdout();
        listing::print_dir(app.supplier(), &opts.dir, opts.show_hidden, &mut stdout).await
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

async fn redraw(app: &App, opts: &Options) -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
    writeln!(stdout, "{}", opts.dir.display())?;
    listing::print_dir(app.supplier(), &opts.dir, opts.show_hidden, &mut stdout).await?;
    if !app.status_message.is_empty() {
        writeln!(stdout, "\n{}", app.status_message)?;
    }
    stdout.flush()
}

/// Re-list whenever decorations go stale. Lines typed on stdin are run as
/// commands (`refresh`).
async fn watch(app: &mut App, opts: &Options) -> io::Result<()> {
    let mut changes = app.supplier().subscribe();
    let mut ticker = tokio::time::interval(POLL_INTERVAL);
    let mut stdin = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    redraw(app, opts).await?;
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => return Ok(()),
            _ = ticker.tick() => {
                app.poll_config();
            }
            change = changes.recv() => match change {
                Ok(_) | Err(RecvError::Lagged(_)) => {
                    redraw(app, opts).await?;
                    app.status_message.clear();
                }
                Err(RecvError::Closed) => return Ok(()),
            },
            line = stdin.next_line(), if stdin_open => match line? {
                Some(cmd) if cmd.trim().is_empty() => {}
                Some(cmd) => {
                    if let Err(e) = app.execute_command(&cmd) {
                        app.status_message = e.to_string();
                        redraw(app, opts).await?;
                        app.status_message.clear();
                    }
                }
                None => stdin_open = false,
            },
        }
    }
}
