//! Classic solar system, run headless.
//!
//! Loads a scene manifest (or the built-in preset), drives it for a number of
//! frames through a `FrameCanvas` and logs where every body ended up.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use glam::Vec3;
use log::LevelFilter;

use orrery::{
    classic_scene, wrap_degrees, CommandList, FrameCanvas, Orrery, RunnerConfig, Scene,
    SceneError, SceneManifest,
};

/// Solar-system demo command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "solar-system", about = "Run an orrery scene headless")]
struct Args {
    /// Scene manifest (JSON). Defaults to the built-in solar system.
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Number of frames to run.
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Wall time per frame in seconds.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    frame_dt: f32,

    /// Write the last frame's draw commands here as JSON.
    #[arg(long)]
    dump: Option<PathBuf>,

    /// Write the scene back out as a manifest.
    #[arg(long)]
    write_manifest: Option<PathBuf>,

    /// Draw with global lighting switched off.
    #[arg(long)]
    unlit: bool,

    /// Log level (error, warn, info, debug, trace). `RUST_LOG` still applies.
    #[arg(long)]
    log_level: Option<String>,
}

fn init_logging(level: Option<&str>) {
    let filter = match level.map(LevelFilter::from_str) {
        Some(Ok(filter)) => filter,
        Some(Err(_)) => {
            eprintln!("unknown log level {:?}, using info", level.unwrap_or_default());
            LevelFilter::Info
        }
        None => LevelFilter::Info,
    };
    env_logger::builder()
        .filter_level(filter)
        .format_timestamp_secs()
        .parse_default_env()
        .init();
}

fn load(args: &Args) -> Result<(Scene, RunnerConfig, Option<SceneManifest>), SceneError> {
    match &args.manifest {
        Some(path) => {
            let manifest = SceneManifest::from_path(path)?;
            let scene = Scene::from_manifest(&manifest)?;
            let config = manifest.runner_config();
            Ok((scene, config, Some(manifest)))
        }
        None => {
            log::info!("no manifest given, using the classic solar system");
            Ok((classic_scene(), RunnerConfig::default(), None))
        }
    }
}

fn write_file(path: &PathBuf, contents: &str) -> Result<(), SceneError> {
    std::fs::write(path, contents).map_err(|source| SceneError::Io {
        path: path.clone(),
        source,
    })?;
    log::info!("wrote {}", path.display());
    Ok(())
}

fn main() -> Result<(), SceneError> {
    let args = Args::parse();
    init_logging(args.log_level.as_deref());

    let (scene, config, manifest) = load(&args)?;

    if let Some(path) = &args.write_manifest {
        let manifest = manifest.unwrap_or_else(orrery::classic_manifest);
        write_file(path, &manifest.to_json()?)?;
    }

    let mut orrery = Orrery::with_config(scene, config);
    if args.unlit {
        orrery.lights_mut().set_lighting(false);
    }

    let mut canvas = FrameCanvas::new();
    let mut ticks = 0u64;
    for _ in 0..args.frames {
        ticks += orrery.tick(args.frame_dt, &mut canvas) as u64;
    }
    log::info!(
        "ran {} frames, {} ticks, sim time {:.1}, {:.4}s carried over",
        args.frames,
        ticks,
        orrery.sim_time(),
        orrery.clock().pending()
    );

    // One sphere per body, in scene order
    let spheres = canvas.spheres().instances();
    for (body, sphere) in orrery.scene().iter().zip(spheres) {
        let pos: Vec3 = sphere.position();
        log::info!(
            "{:<8} angle {:>7.2} deg  at ({:>8.2}, {:>8.2})  dist={:.2}{}",
            body.tag,
            wrap_degrees(body.alpha),
            pos.x,
            pos.y,
            pos.length(),
            if sphere.is_lit() { "" } else { "  (unlit)" }
        );
    }
    #[cfg(feature = "vectors")]
    log::info!(
        "orbit strokes: {} vertices",
        canvas.vectors().vertex_count()
    );

    if let Some(path) = &args.dump {
        let mut list = CommandList::new();
        orrery.render(&mut list);
        log::debug!("recorded {} draw commands", list.len());
        let json = list.to_json().map_err(SceneError::Serialize)?;
        write_file(path, &json)?;
    }

    Ok(())
}
