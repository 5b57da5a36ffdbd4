//! Builds a B-spline bounded plane surface and prints the generated script.
//!
//! Usage:
//! ```text
//! cargo run --example bspline                 # print the script
//! cargo run --example bspline -- out.msh      # also mesh it with gmsh
//! ```

use std::path::Path;

use geoscript::engine::{default_executable, engine_args, run_engine};
use geoscript::math::Point3;
use geoscript::script::OrientedCurve;
use geoscript::{Geometry, MeshOptions, TargetDimension};

fn main() -> geoscript::Result<()> {
    // Default: WARN for everything, INFO for geoscript.
    // Override with RUST_LOG env var (e.g. RUST_LOG=geoscript=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("geoscript=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut geom = Geometry::new();
    let control: Vec<_> = [(0.0, 0.0), (0.5, 1.0), (1.5, 1.0), (2.0, 0.0)]
        .into_iter()
        .map(|(x, y)| geom.add_point_with_lcar(Point3::new(x, y, 0.0), 0.05))
        .collect();
    let arc = geom.add_bspline(&control)?;
    let base = geom.add_line(control[3], control[0])?;
    let boundary = geom.add_curve_loop(&[OrientedCurve::forward(arc), OrientedCurve::forward(base)])?;
    geom.add_plane_surface(boundary, &[])?;

    let code = geom.get_code();
    println!("{code}");

    if let Some(out) = std::env::args().nth(1) {
        let script = Path::new(&out).with_extension("geo");
        std::fs::write(&script, &code)?;
        let options = MeshOptions {
            dim: TargetDimension::Two,
            ..MeshOptions::default()
        };
        let args = engine_args(&script, Path::new(&out), &options);
        run_engine(&default_executable(), &args, options.verbose)?;
    }
    Ok(())
}
