//! Interactive orrery window: `orrery [OPTIONS.toml] [SYSTEM.toml]`.

use std::path::Path;

use orrery::{
    options::Options, scene::SystemDescription, viewer::Viewer, OrreryError,
};

/// Resolve the viewer configuration from `orrery [OPTIONS.toml] [SYSTEM.toml]`.
///
/// Either file may be omitted; the defaults and the built-in solar system
/// stand in for them.
fn configure(
    options_path: Option<&str>,
    system_path: Option<&str>,
) -> Result<Viewer, OrreryError> {
    let mut builder = Viewer::builder();
    if let Some(path) = options_path {
        builder = builder.with_options(Options::load(Path::new(path))?);
        log::info!("loaded options from {path}");
    }
    if let Some(path) = system_path {
        builder = builder.with_system(SystemDescription::load(Path::new(path))?);
        log::info!("loaded system from {path}");
    }
    Ok(builder.build())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() > 2 {
        log::error!("Usage: orrery [OPTIONS.toml] [SYSTEM.toml]");
        std::process::exit(1);
    }

    let viewer = match configure(
        args.first().map(String::as_str),
        args.get(1).map(String::as_str),
    ) {
        Ok(viewer) => viewer,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = viewer.run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
