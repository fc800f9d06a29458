use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
    time::Duration,
};

use anyhow::Context as _;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use phonepad_config::PadConfig;
use phonepad_core::{Decoder, Region};

mod snake;

use snake::SnakeGame;

/// 老式手机键盘解码器
#[derive(Parser, Debug)]
#[command(name = "phonepad")]
#[command(about = "Decode old phone keypad presses (digits, space = pause, * = backspace, # = send)")]
#[command(version)]
struct Args {
    /// 要解码的输入；省略时进入交互模式
    inputs: Vec<String>,

    /// TOML 配置文件
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 地区变体（India / Holland / Thailand），在配置之后应用
    #[arg(short, long)]
    region: Option<Region>,

    /// 日志级别（RUST_LOG 优先）
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// 贪吃蛇每步间隔（毫秒）
    #[arg(long, default_value_t = 200)]
    tick_ms: u64,
}

fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_logging(&args.log_level);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut decoder = build_decoder(&args)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !args.inputs.is_empty() {
        for input in &args.inputs {
            writeln!(out, "{}", decoder.decode(input))?;
        }
        return Ok(());
    }

    let stdin = io::stdin();
    repl(
        &mut decoder,
        stdin.lock(),
        &mut out,
        Duration::from_millis(args.tick_ms),
    )?;
    Ok(())
}

fn build_decoder(args: &Args) -> anyhow::Result<Decoder> {
    let config = match &args.config {
        Some(path) => PadConfig::from_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => PadConfig::default(),
    };
    let mut decoder = config.build_decoder().context("building decoder")?;
    if let Some(region) = args.region {
        info!(%region, "regional shift from command line");
        decoder.keymap_mut().mutate(region.tag());
    }
    Ok(decoder)
}

fn repl(
    decoder: &mut Decoder,
    mut input: impl BufRead,
    out: &mut impl Write,
    tick: Duration,
) -> io::Result<()> {
    let mut line = String::new();
    writeln!(out, "OldPhonePad T9 Decoder")?;
    writeln!(out)?;
    writeln!(out, "Enter T9 input or type 'snake' for the game, 'quit' to exit:")?;
    writeln!(out)?;

    loop {
        line.clear();
        write!(out, "> ")?;
        out.flush()?;
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let text = line.trim_end_matches(['\r', '\n']);
        if text.is_empty() || text.eq_ignore_ascii_case("quit") {
            break;
        }

        if text.eq_ignore_ascii_case("snake") {
            let score = SnakeGame::new().run(out, tick, snake::GAME_OVER_HOLD)?;
            info!(score, "snake finished");
            writeln!(out)?;
            writeln!(out, "Game over! Score: {score}. Back to T9 decoding...")?;
            writeln!(out)?;
        } else if text.ends_with('#') {
            writeln!(out, "  → {}", decoder.decode(text))?;
        } else {
            writeln!(out, "  (Don't forget to end with #)")?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Thanks for texting across cultures!")?;
    Ok(())
}
