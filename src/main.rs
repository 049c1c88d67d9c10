use aviate::build_info;
use aviate::config::{parse_args, Command, GameConfig, USAGE};
use aviate::core::constants::REALTIME_FRAME_MS;
use aviate::input::{map_key, should_exit};
use aviate::obstacles::SpawnTimer;
use aviate::ui::draw_ui;
use aviate::{AppError, FlightSession, OrientationSample, OrientationSource, SourceError};
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use std::process::ExitCode;
use std::time::{Duration, Instant};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("aviate: {e}");
            if matches!(e, AppError::Config(_)) {
                eprintln!("Run 'aviate --help' for usage.");
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let config = match parse_args(std::env::args().skip(1))? {
        Command::Help => {
            println!("{USAGE}");
            return Ok(());
        }
        Command::Version => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        Command::Run(config) => config,
    };

    init_logging(config.log_file.as_deref())?;

    // No terminal setup until the sensor is confirmed; a missing device is
    // reported on a normal screen.
    let source = open_source(&config)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = FlightSession::with_spawner(SpawnTimer::new(config.spawn_interval));
    info!(
        "session start: source={} spawn_interval={}s seed={:?}",
        source.name(),
        config.spawn_interval,
        config.seed
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = fly(&mut terminal, &mut session, &source, &mut rng);

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result?;

    let state = session.state();
    info!(
        "session end: score={} game_over={} elapsed={:.1}s",
        state.score,
        state.game_over,
        session.elapsed()
    );
    if state.game_over {
        println!("Game over. Score: {}", state.score);
    } else {
        println!("Left the flight. Score: {}", state.score);
    }
    Ok(())
}

fn init_logging(log_file: Option<&Path>) -> Result<(), AppError> {
    // Stderr shares the screen with the UI, so keep it quiet by default.
    let default_filter = if log_file.is_some() { "info" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    if let Some(path) = log_file {
        builder.target(env_logger::Target::Pipe(Box::new(File::create(path)?)));
    }
    builder.init();
    Ok(())
}

fn open_source(config: &GameConfig) -> Result<OrientationSource, SourceError> {
    match &config.replay {
        Some(path) => {
            let name = path.display().to_string();
            let file = File::open(path).map_err(|source| SourceError::DeviceUnavailable {
                address: name.clone(),
                source,
            })?;
            info!("replaying orientation records from {name}");
            OrientationSource::from_reader(name, BufReader::new(file))
        }
        None => OrientationSource::connect_with_timeout(
            &config.device,
            config.baud_rate,
            config.read_timeout,
        ),
    }
}

/// Host frame loop: step the session, draw it, handle keys.
fn fly<B: Backend>(
    terminal: &mut Terminal<B>,
    session: &mut FlightSession,
    source: &OrientationSource,
    rng: &mut StdRng,
) -> io::Result<()> {
    let frame_budget = Duration::from_millis(REALTIME_FRAME_MS);
    let mut last_frame = Instant::now();
    let mut tilt = OrientationSample::ZERO;

    loop {
        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f64();
        last_frame = now;

        let was_over = session.is_over();
        let report = session.frame(dt, source, rng);
        if !was_over {
            tilt = report.sample;
        }

        terminal.draw(|frame| draw_ui(frame, &session.snapshot(), tilt))?;

        if event::poll(frame_budget)? {
            if let Event::Key(key) = event::read()? {
                if should_exit(map_key(key), session.is_over()) {
                    return Ok(());
                }
            }
        }
    }
}
