//! Headless starfield generator
//!
//! Run with: cargo run --features cli --bin starfield-cli
//!
//! Env: STARFIELD_WIDTH / STARFIELD_HEIGHT / STARFIELD_COUNT,
//! STARFIELD_FORMAT = summary | svg | json. Pass `--watch` to keep sampling
//! the blinking field once per second until Ctrl-C.

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use starfield::core::{populate, to_svg, OutputFormat, Scene, StarfieldConfig};
    use starfield::time::now_seconds;
    use tokio::io::AsyncWriteExt;
    use tracing::info;
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,starfield=debug"));
    // Logs go to stderr so svg/json on stdout stays clean
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let watch = std::env::args().skip(1).any(|a| a == "--watch");
    let config = StarfieldConfig::from_env();
    info!(
        width = config.viewport.width,
        height = config.viewport.height,
        count = config.count,
        format = ?config.format,
        watch,
        "Configuration resolved"
    );

    let mut scene = Scene::new();
    let lights = populate(&config, &mut scene, &mut rand::thread_rng(), now_seconds());

    match config.format {
        OutputFormat::Svg => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(to_svg(&scene).as_bytes()).await?;
            stdout.flush().await?;
        }
        OutputFormat::Json => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(serde_json::to_string_pretty(&scene)?.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }
        OutputFormat::Summary => {
            let (min_r, max_r) = lights
                .iter()
                .fold((f32::MAX, f32::MIN), |(min, max), l| (min.min(l.radius), max.max(l.radius)));
            let (min_p, max_p) = lights
                .iter()
                .fold((f32::MAX, f32::MIN), |(min, max), l| (min.min(l.period), max.max(l.period)));
            if lights.is_empty() {
                info!("Empty starfield");
            } else {
                info!(
                    stars = lights.len(),
                    animated = scene.animated_count(),
                    radius = format!("{:.3}..{:.3}", min_r, max_r),
                    period = format!("{:.2}..{:.2}s", min_p, max_p),
                    "summary"
                );
            }
        }
    }

    if !watch {
        return Ok(());
    }

    let mut stats_interval = tokio::time::interval(std::time::Duration::from_secs(1));
    info!("Watching starfield, Ctrl-C to stop");

    loop {
        tokio::select! {
            _ = stats_interval.tick() => {
                let now = now_seconds();
                let mut total_radius = 0.0f64;
                let mut dark = 0usize;
                for (node, sample) in scene.nodes().iter().zip(scene.sample(now)) {
                    total_radius += sample.radius as f64;
                    if sample.radius < node.circle.radius * 0.1 {
                        dark += 1;
                    }
                }
                let stars = scene.len();
                info!(
                    t = format!("{:.1}s", now),
                    stars,
                    dark,
                    mean_radius = format!("{:.4}", total_radius / stars.max(1) as f64),
                    "tick"
                );
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Stopped");
                break;
            }
        }
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
