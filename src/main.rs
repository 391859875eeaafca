use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, error, info, warn};
mod config;
mod error;
mod model;
mod services;
mod utils;

use config::Config;
use error::{Result, SwitchError};
use services::{create_window_source, FocusDispatcher, FocusOutcome, ProcessChooser, Switcher};

#[derive(Parser, Debug)]
#[command(name = "wswitch", version)]
#[command(about = "Выбор окна X11 через внешний chooser и запрос фокуса для него")]
struct Args {
    /// Программа выбора (dmenu, rofi, fzf, ...); по умолчанию chooser.command из конфигурации
    chooser: Option<String>,

    /// Дополнительные аргументы chooser (после `--`)
    #[arg(last = true)]
    chooser_args: Vec<String>,

    /// Напечатать id выбранного окна в stdout (фокус всё равно запрашивается)
    #[arg(short, long)]
    print: bool,

    /// Путь к файлу конфигурации
    #[arg(short, long, default_value = "wswitch.toml")]
    config: String,

    /// Режим сухого запуска (без X сервера, окна эмулируются)
    #[arg(long)]
    dry_run: bool,

    /// Уровень логирования (переопределяет logging.level)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(outcome) => {
            debug!("Завершение: {:?}", outcome);
            ExitCode::SUCCESS
        }
        Err(e) => ExitCode::from(report_error(&e)),
    }
}

/// Залогировать ошибку и вернуть код завершения
fn report_error(e: &SwitchError) -> u8 {
    // До init_tracing подписчика нет, поэтому сообщение дублируется в stderr
    error!("{}", e);
    debug!("Ошибка: {:?}", e);
    eprintln!("wswitch: {}", e);
    e.exit_code()
}

async fn run(args: Args) -> Result<FocusOutcome> {
    // Загрузка конфигурации
    let mut config = Config::load(&args.config)?;
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
        config.validate()?;
    }
    config.apply_chooser_override(args.chooser, args.chooser_args);

    // Инициализация системы логирования
    init_tracing(&config.logging.level, &config.logging.format)?;

    info!("Запуск wswitch v{}", env!("CARGO_PKG_VERSION"));
    info!("Конфигурация загружена из: {}", args.config);

    let chooser = ProcessChooser::new(config.chooser_command()?, config.chooser.args.clone());

    if args.dry_run {
        warn!("Режим сухого запуска - окна эмулируются, фокус не запрашивается");
    }
    let windows = create_window_source(args.dry_run)?;

    let dispatcher = FocusDispatcher::from_config(&config, args.print);
    let switcher = Switcher::new(windows.as_ref(), &chooser, dispatcher);

    let mut stdout = std::io::stdout().lock();
    switcher.run(&mut stdout).await
}

fn init_tracing(level: &str, format: &str) -> Result<()> {
    use tracing_subscriber::{
        layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| SwitchError::Config(e.into()))?;

    // stdout занят под --print, логи только в stderr
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let fmt_layer: Box<dyn Layer<Registry> + Send + Sync> = match format {
        "pretty" => fmt_layer.pretty().boxed(),
        "full" => fmt_layer.boxed(),
        _ => fmt_layer.compact().boxed(),
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .try_init()
        .map_err(|e| SwitchError::Config(e.into()))?;

    Ok(())
}
