use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use giftwrap::geom2::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
use giftwrap::hull::{find_hull, polygon_area, HullCfg, HullFinder};
use giftwrap::Point;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use io::PointRow;
use provenance::Payload;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hulls by gift wrapping, from point files")]
struct Cmd {
    /// Optional run tag; propagated to provenance and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull and area of a point file (.csv with x,y columns or .json)
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Merge points closer than this distance before the scan (default: exact)
        #[arg(long)]
        eps: Option<f64>,
    },
    /// Shuffle the eight demonstration points, print their hull and area
    Demo {
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Sample a point cloud into a .csv or .json file
    Gen {
        #[arg(long, default_value_t = 64)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, value_enum, default_value_t = ShapeArg::Box)]
        shape: ShapeArg,
        #[arg(long, default_value_t = 1.0)]
        half_extent: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShapeArg {
    Box,
    Disk,
    Grid,
}

impl From<ShapeArg> for CloudShape {
    fn from(s: ShapeArg) -> Self {
        match s {
            ShapeArg::Box => CloudShape::Box,
            ShapeArg::Disk => CloudShape::Disk,
            ShapeArg::Grid => CloudShape::Grid,
        }
    }
}

/// Written by `hull`.
#[derive(Debug, Serialize)]
struct HullReport {
    hull: Vec<PointRow>,
    area: f64,
    input_count: usize,
    distinct_count: usize,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull { input, out, eps } => hull(&input, &out, eps, cmd.tag),
        Action::Demo { seed } => demo(seed),
        Action::Gen {
            count,
            seed,
            shape,
            half_extent,
            out,
        } => gen(count, seed, shape, half_extent, &out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn hull(input: &Path, out: &Path, eps: Option<f64>, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), eps = ?eps, tag = ?tag, "hull");
    let points = io::read_points(input)?;
    let report = hull_report(&points, eps)?;
    tracing::info!(
        vertices = report.hull.len(),
        area = report.area,
        distinct = report.distinct_count,
        "hull_done"
    );

    io::ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(&report)?)?;
    let payload = Payload::new(serde_json::json!({
        "input": input.to_string_lossy(),
        "eps": eps,
        "input_count": report.input_count,
    }))
    .with_tag(tag);
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

fn hull_report(points: &[Point], eps: Option<f64>) -> Result<HullReport> {
    let cfg = eps.map(HullCfg::with_eps).unwrap_or_default();
    let finder = HullFinder::from_points(points, cfg)?;
    let distinct_count = finder.points().len();
    let hull = finder.scan()?;
    Ok(HullReport {
        area: polygon_area(&hull),
        hull: hull.into_iter().map(PointRow::from).collect(),
        input_count: points.len(),
        distinct_count,
    })
}

fn demo_points() -> Vec<Point> {
    [
        (0.0, 0.0),
        (4.0, 4.0),
        (2.0, 2.0),
        (0.0, 2.0),
        (4.0, 1.0),
        (4.0, 2.0),
        (4.0, 3.0),
        (2.0, 3.0),
    ]
    .into_iter()
    .map(Point::from)
    .collect()
}

fn demo(seed: u64) -> Result<()> {
    let mut points = demo_points();
    points.shuffle(&mut StdRng::seed_from_u64(seed));
    tracing::info!(seed, n = points.len(), "demo");
    let hull = find_hull(&points)?;
    for p in &hull {
        println!("{p}");
    }
    println!("{}", polygon_area(&hull));
    Ok(())
}

fn gen(
    count: usize,
    seed: u64,
    shape: ShapeArg,
    half_extent: f64,
    out: &Path,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(count, seed, shape = ?shape, half_extent, out = %out.display(), "gen");
    let cfg = CloudCfg {
        count,
        shape: shape.into(),
        half_extent,
    };
    let cloud = draw_cloud(cfg, ReplayToken::new(seed, 0));
    io::write_points(out, &cloud)?;
    let payload = Payload::new(serde_json::json!({
        "count": count,
        "seed": seed,
        "shape": format!("{shape:?}").to_lowercase(),
        "half_extent": half_extent,
    }))
    .with_tag(tag);
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "giftwrap": giftwrap::VERSION,
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
