mod app;
mod cli;
mod error;
mod event;
mod logging;
mod model;
mod state;
mod storage;
mod theme;
mod ui;
mod ui_state;

use std::io;
use std::panic;

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tracing::{info, warn};

use app::App;
use cli::{Cli, Commands};
use state::TaskList;
use storage::config;
use theme::Theme;

/// 按名称解析主题，未知名称回退到默认主题
fn resolve_theme(name: &str) -> Theme {
    Theme::from_name(name).unwrap_or_else(|| {
        warn!(name, "unknown theme, falling back to default");
        Theme::default()
    })
}

/// 启动 TUI 界面
fn run_tui(mut app: App) -> io::Result<()> {
    // 初始化终端
    let mut terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture)?;

    // 运行主循环
    let result = run(&mut terminal, &mut app);

    // 恢复终端
    execute!(io::stdout(), DisableMouseCapture)?;
    ratatui::restore();

    let counts = app.list.counts();
    info!(
        total = counts.total,
        completed = counts.completed,
        "tasklist exited"
    );

    result
}

fn main() -> io::Result<()> {
    // Set up panic hook to restore terminal state on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(io::stdout(), DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));

    // 解析命令行参数
    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(config::config_path);

    if let Some(Commands::Init { force }) = cli.command {
        cli::init::execute(&config_path, force);
        return Ok(());
    }

    // 配置解析失败时先用默认值启动，日志就绪后再记录
    let (config, config_error) = config::load_or_default(&config_path);

    if let Err(e) = logging::init(&config.log.level, &storage::log_path()) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    if let Some(e) = config_error {
        warn!(path = %config_path.display(), error = %e, "failed to load config, using defaults");
    }

    let theme = resolve_theme(cli.theme.as_deref().unwrap_or(&config.theme.name));
    let list = if cli.empty || !config.list.seed_examples {
        TaskList::empty()
    } else {
        TaskList::seeded()
    };

    info!(
        theme = theme.label(),
        tasks = list.tasks().len(),
        "tasklist started"
    );
    run_tui(App::new(list, theme))
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        // 渲染界面
        app.ui.click_areas.reset();
        terminal.draw(|frame| ui::task_page::render(frame, app))?;

        // 处理事件
        if !event::handle_events(app)? {
            break;
        }
    }

    Ok(())
}
