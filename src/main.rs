use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use video_player::session::{Decline, LineSelector, Selector};
use video_player::{Command, Session, SessionConfig};

#[derive(Parser, Debug)]
#[command(name = "video-player")]
#[command(about = "Interactive video playback and playlist session", long_about = None)]
struct Args {
    /// Path to the video catalog (one `Title | id | #tag1,#tag2` per line)
    #[arg(short = 'c', long, default_value = "videos.txt")]
    catalog: String,

    /// Run these commands instead of reading from stdin (can be specified multiple times)
    #[arg(short = 'e', long = "command")]
    commands: Vec<String>,

    /// Reason recorded when FLAG_VIDEO is given none
    #[arg(long, default_value = video_player::session::DEFAULT_FLAG_REASON)]
    default_flag_reason: String,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in paths
    let catalog_path = shellexpand::tilde(&args.catalog);
    let library =
        video_player::catalog::load_library(PathBuf::from(catalog_path.as_ref()).as_path())?;

    let config = SessionConfig::new().with_default_flag_reason(args.default_flag_reason);
    let mut session = Session::new(&library).with_config(config);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    if !args.commands.is_empty() {
        for line in &args.commands {
            if !run_line(&mut session, line, &mut input, &mut output)? {
                break;
            }
        }
        return Ok(());
    }

    writeln!(output, "Hello and welcome to the video player, what would you like to do?")?;
    writeln!(output, "Enter HELP for a list of available commands or EXIT to terminate.")?;

    let mut line = String::new();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line).context("Failed to read command")? == 0 {
            break;
        }
        if !run_line(&mut session, &line, &mut input, &mut output)? {
            break;
        }
    }

    writeln!(output, "The video player has now terminated its execution. Thank you and goodbye!")?;
    Ok(())
}

/// Parse and run one command line. Returns false once the user asks to exit.
fn run_line<C, R, W>(
    session: &mut Session<C>,
    line: &str,
    input: &mut R,
    output: &mut W,
) -> Result<bool>
where
    C: video_player::Catalog,
    R: BufRead,
    W: Write,
{
    let command = match line.parse::<Command>() {
        Ok(command) => command,
        Err(e) => {
            writeln!(output, "{}", e)?;
            return Ok(true);
        }
    };

    if command == Command::Exit {
        return Ok(false);
    }

    let lines = match &command {
        // The listing has to be on screen before the answer is read
        Command::Search(query) => {
            let results = session.search(query);
            for text in results.lines() {
                writeln!(output, "{}", text)?;
            }
            output.flush()?;

            if results.is_empty() {
                Vec::new()
            } else {
                match LineSelector::new(input).choose(&results) {
                    Some(answer) => session
                        .select(&results, &answer)
                        .unwrap_or_else(|e| vec![e.to_string()]),
                    None => Vec::new(),
                }
            }
        }
        _ => session.execute(&command, &mut Decline),
    };
    for text in lines {
        writeln!(output, "{}", text)?;
    }
    Ok(true)
}
