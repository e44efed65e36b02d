//! Point files: CSV (`x,y` header, read/written through polars) and JSON
//! (array of `{"x":..,"y":..}` objects or `[x, y]` pairs).

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use giftwrap::Point;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// One point as it appears in JSON files.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointRow {
    Named { x: f64, y: f64 },
    Pair([f64; 2]),
}

impl From<PointRow> for Point {
    fn from(row: PointRow) -> Self {
        match row {
            PointRow::Named { x, y } => Point::new(x, y),
            PointRow::Pair([x, y]) => Point::new(x, y),
        }
    }
}

impl From<Point> for PointRow {
    fn from(p: Point) -> Self {
        PointRow::Named { x: p.x, y: p.y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FileKind {
    Csv,
    Json,
}

fn format_of(path: &Path) -> Result<FileKind> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(e) if e.eq_ignore_ascii_case("csv") => Ok(FileKind::Csv),
        Some(e) if e.eq_ignore_ascii_case("json") => Ok(FileKind::Json),
        _ => bail!("unsupported point file {} (expected .csv or .json)", path.display()),
    }
}

pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let points = match format_of(path)? {
        FileKind::Csv => read_csv(path),
        FileKind::Json => read_json(path),
    }
    .with_context(|| format!("reading points from {}", path.display()))?;
    tracing::info!(path = %path.display(), count = points.len(), "points_loaded");
    Ok(points)
}

pub fn write_points(path: &Path, points: &[Point]) -> Result<()> {
    ensure_parent(path)?;
    match format_of(path)? {
        FileKind::Csv => write_csv(path, points),
        FileKind::Json => {
            let rows: Vec<PointRow> = points.iter().copied().map(PointRow::from).collect();
            fs::write(path, serde_json::to_vec_pretty(&rows)?).map_err(Into::into)
        }
    }
    .with_context(|| format!("writing points to {}", path.display()))
}

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    Ok(())
}

fn read_json(path: &Path) -> Result<Vec<Point>> {
    let rows: Vec<PointRow> = serde_json::from_slice(&fs::read(path)?)?;
    Ok(rows.into_iter().map(Point::from).collect())
}

fn read_csv(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .collect()?;
    // integer columns are fine too
    let xs = df.column("x")?.cast(&DataType::Float64)?;
    let ys = df.column("y")?.cast(&DataType::Float64)?;
    let xs = xs.f64()?;
    let ys = ys.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Point::new(x, y)),
            _ => bail!("row {}: missing x or y", row),
        })
        .collect()
}

fn write_csv(path: &Path, points: &[Point]) -> Result<()> {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    let mut file = fs::File::create(path)?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)?;
    Ok(())
}
