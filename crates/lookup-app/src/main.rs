mod app_state;
mod cli;

use lookup_config::schema::log_directives;
use lookup_config::LookupConfig;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

fn main() {
    let args = cli::parse();

    // Config comes first so its log level can seed the subscriber.
    let loaded = lookup_config::load_config(args.config.as_deref());

    let level = match (&args.log_level, &loaded) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => config.logging.level.as_str().to_string(),
        (None, Err(_)) => "info".to_string(),
    };
    let mut filter = EnvFilter::from_default_env();
    for directive in log_directives(&level).split(',') {
        match directive.parse() {
            Ok(d) => filter = filter.add_directive(d),
            Err(e) => eprintln!("ignoring invalid log directive {directive:?}: {e}"),
        }
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("word-lookup v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "config load failed, using defaults");
            LookupConfig::default()
        }
    };

    let sources_path = match lookup_config::sources_path(&config) {
        Ok(path) => path,
        Err(e) => {
            tracing::error!(error = %e, "cannot resolve the sources file location");
            std::process::exit(1);
        }
    };
    tracing::info!(path = %sources_path.display(), "using sources file");

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!(error = %e, "failed to create event loop");
            std::process::exit(1);
        }
    };
    let mut app = app_state::LookupApp::new(config, sources_path);

    tracing::info!("entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!(error = %e, "event loop error");
    }

    let code = app.exit_code();
    tracing::info!(code, "shutdown complete");
    if code != 0 {
        std::process::exit(code);
    }
}
