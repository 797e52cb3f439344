// File: crates/demo/src/main.rs
// Summary: Demo loads MESA history/profile files (or CSV tables), binds axes, then replays pan, box-zoom,
//          inspector and reset gestures and prints the resulting domains and frames.

use anyhow::{Context, Result};
use explorer_core::axis::AxisRole;
use explorer_core::chart::{Chart, Frame};
use explorer_core::config::ExplorerConfig;
use explorer_core::geometry::PixelPoint;
use explorer_core::listener::ChartListener;
use explorer_core::table::{common_columns, FileKind, Table};
use explorer_core::view::{Interaction, Tool};
use std::path::{Path, PathBuf};
use std::rc::Rc;

#[derive(Default)]
struct Args {
    files: Vec<PathBuf>,
    x: Option<String>,
    y: Option<String>,
    y_other: Option<String>,
    config: Option<PathBuf>,
}

/// Mirrors committed limits to stdout, standing in for the limit input fields.
struct LimitsEcho;

impl ChartListener for LimitsEcho {
    fn limits_changed(&mut self, role: AxisRole, min: Option<f64>, max: Option<f64>) {
        let show = |v: Option<f64>| v.map(|v| format!("{v:.6}")).unwrap_or_else(|| "auto".into());
        println!("  [{role}] limits -> {} .. {}", show(min), show(max));
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = parse_args(std::env::args().skip(1))?;

    let tables = if args.files.is_empty() {
        log::info!("no input files; using a generated history track");
        vec![Rc::new(Table::parse_mesa("generated_history.data", &generated_history(400))?)]
    } else {
        args.files
            .iter()
            .map(|p| load_table(p).map(Rc::new).with_context(|| format!("failed to load '{}'", p.display())))
            .collect::<Result<Vec<_>>>()?
    };
    for t in &tables {
        log::info!("loaded {} ({:?}): {} rows, {} columns", t.name, t.kind, t.len(), t.column_names().len());
    }

    let mut chart = Chart::new();
    chart.add_listener(Box::new(LimitsEcho));
    let common = common_columns(&tables);
    let kind = tables.first().map(|t| t.kind).unwrap_or(FileKind::Unknown);
    chart.register_tables(tables);

    let (x, y) = default_columns(kind, &common);
    let x = args.x.clone().or(x).context("no x column available")?;
    let y = args.y.clone().or(y).context("no y column available")?;
    chart.batch(|c| {
        c.assign_axis_column(AxisRole::X, x.clone());
        c.assign_axis_column(AxisRole::Y, y.clone());
        if let Some(col) = &args.y_other {
            c.assign_axis_column(AxisRole::YOther, col.clone());
        }
    });
    if let Some(path) = &args.config {
        let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        log::info!("applying config {}", path.display());
        let cfg: ExplorerConfig = serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
        cfg.apply(&mut chart);
    }
    let frame = chart.update_plot().context("chart is paused")?;
    print_frame("initial", &frame);

    let (left, right) = chart.geometry.pixel_range(AxisRole::X, true, args.y_other.is_some());
    let (bottom, top) = chart.geometry.pixel_range(AxisRole::Y, true, args.y_other.is_some());
    let cx = (left + right) / 2.0;
    let cy = (bottom + top) / 2.0;
    let mut ix = Interaction::new();

    println!("\nPan by (-80, +40) px");
    ix.select_tool(&mut chart, Tool::Pan);
    drag(&mut chart, &mut ix, (cx, cy), (cx - 80.0, cy + 40.0));
    print_domains(&chart);

    println!("\nBox zoom to the middle half");
    ix.select_tool(&mut chart, Tool::BoxZoom);
    let qx = (right - left) / 4.0;
    let qy = (bottom - top) / 4.0;
    drag(&mut chart, &mut ix, (left + qx, top + qy), (right - qx, bottom - qy));
    print_domains(&chart);

    println!("\nInspector at plot center");
    ix.select_tool(&mut chart, Tool::Inspector);
    ix.pointer_move(&mut chart, PixelPoint::new(cx, cy));
    if let Some(tip) = &ix.tooltip {
        for line in &tip.lines {
            println!("  {}", line.display());
        }
    }
    ix.pointer_leave(&mut chart);

    println!("\nReset view");
    if let Some(frame) = ix.select_tool(&mut chart, Tool::ResetView) {
        print_frame("reset", &frame);
    }
    log::info!("{} redraws", chart.redraw_count());
    Ok(())
}

fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args::default();
    while let Some(a) = it.next() {
        let mut value = |flag: &str| it.next().with_context(|| format!("{flag} needs a value"));
        match a.as_str() {
            "--x" => args.x = Some(value("--x")?),
            "--y" => args.y = Some(value("--y")?),
            "--y-other" => args.y_other = Some(value("--y-other")?),
            "--config" => args.config = Some(PathBuf::from(value("--config")?)),
            _ if a.starts_with("--") => anyhow::bail!("unknown option {a}"),
            _ => args.files.push(PathBuf::from(a)),
        }
    }
    Ok(args)
}

fn load_table(path: &Path) -> Result<Table> {
    let name = path.file_name().and_then(|s| s.to_str()).unwrap_or("table").to_string();
    let is_csv = path.extension().map(|e| e.eq_ignore_ascii_case("csv")).unwrap_or(false);
    if is_csv {
        return load_csv(path, name);
    }
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(Table::parse_mesa(name, &text)?)
}

/// Plain CSV with a header row; cells that do not parse become missing values.
fn load_csv(path: &Path, name: String) -> Result<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let names: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        rows.push(rec.iter().map(|s| s.parse::<f64>().unwrap_or(f64::NAN)).collect());
    }
    Ok(Table::from_columns(name, names, rows)?)
}

fn default_columns(kind: FileKind, common: &[String]) -> (Option<String>, Option<String>) {
    let has = |c: &str| common.iter().any(|n| n == c);
    let pick = |prefs: &[&str], fallback: usize| {
        prefs.iter().find(|c| has(c)).map(|c| c.to_string()).or_else(|| common.get(fallback).cloned())
    };
    match kind {
        FileKind::History => (pick(&["star_age", "model_number"], 0), pick(&["log_L", "log_Teff"], 1)),
        FileKind::Profile => (pick(&["mass", "zone"], 0), pick(&["logT", "logRho"], 1)),
        _ => (common.first().cloned(), common.get(1).cloned()),
    }
}

fn drag(chart: &mut Chart, ix: &mut Interaction, from: (f64, f64), to: (f64, f64)) {
    ix.pointer_down(PixelPoint::new(from.0, from.1));
    ix.pointer_move(chart, PixelPoint::new(to.0, to.1));
    ix.pointer_up(chart, PixelPoint::new(to.0, to.1));
}

fn print_domains(chart: &Chart) {
    for axis in chart.axes.iter() {
        if let Some(s) = axis.scale {
            let (lo, hi) = s.domain();
            println!("  {:<7} {:?} [{:.6}, {:.6}]", axis.role.as_str(), s.kind(), lo, hi);
        }
    }
}

fn print_frame(tag: &str, frame: &Frame) {
    println!("Frame ({tag}):");
    for a in &frame.axes {
        println!(
            "  axis {:<7} {:<14} {:?} domain [{:.6}, {:.6}] px [{:.1}, {:.1}]",
            a.role.as_str(), a.label, a.kind, a.domain.0, a.domain.1, a.pixel_range.0, a.pixel_range.1
        );
    }
    for s in &frame.series {
        println!("  series {:<24} {} line pts, {} markers ({})", s.id.0, s.line.len(), s.markers.len(), s.style.color);
    }
}

/// Synthetic history output: a star slowly brightening and cooling, with one retried step.
fn generated_history(n: usize) -> String {
    let mut out = String::from("1 2 3\nversion_number compiler initial_mass\n\"demo\" \"none\" 1.0\n\n1 2 3 4\n");
    out.push_str("model_number star_age log_L log_Teff\n");
    for i in 1..=n {
        let t = i as f64;
        let age = 1.0e6 * t.powf(1.5);
        let log_l = (t / n as f64) * 2.0 + 0.05 * (t * 0.1).sin();
        let log_teff = 3.76 - 0.2 * (t / n as f64);
        out.push_str(&format!("{i} {age:.6e} {log_l:.6} {log_teff:.6}\n"));
        if i == n / 2 {
            // a backup: MESA repeats model numbers after a retry
            out.push_str(&format!("{} {age:.6e} {log_l:.6} {log_teff:.6}\n", i - 1));
        }
    }
    out
}
