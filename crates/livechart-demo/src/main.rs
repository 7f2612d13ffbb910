// File: crates/livechart-demo/src/main.rs
// Summary: Demo replays a CSV (or synthetic) feed into a live chart, exercising
// toggles, highlight and hover, and writes PNG frames plus a final SVG.

use anyhow::{Context, Result};
use livechart_core::{
    theme, ChartConfig, DataPoint, DataWindow, LiveChart, ManualClock, PointerEvent, PropertySpec, RenderOptions,
    ToggleEvent,
};
use std::path::{Path, PathBuf};

const STEP_MS: i64 = 1_000;

fn main() -> Result<()> {
    env_logger::init();

    // Usage: livechart-demo [feed.csv] [config.json] [light|dark]
    let mut args = std::env::args().skip(1);
    let feed_path = args.next().map(PathBuf::from);
    let config_path = args.next().map(PathBuf::from);
    let theme = theme::find(args.next().as_deref().unwrap_or("light"));

    let config = match &config_path {
        Some(p) => ChartConfig::from_json_file(p).with_context(|| format!("loading config '{}'", p.display()))?,
        None => ChartConfig::default(),
    };

    let (properties, points) = match &feed_path {
        Some(p) => load_feed_csv(p).with_context(|| format!("failed to load CSV '{}'", p.display()))?,
        None => synthetic_feed(90),
    };
    check_feed(&properties, &points)?;
    println!("Loaded {} points for {} series", points.len(), properties.len());

    let session_start = points[0].timestamp;
    let config = config.with_refresh_interval(STEP_MS).with_session_start(session_start);
    let clock = ManualClock::new(0.0);
    let mut chart = LiveChart::with_clock("demo", config, Box::new(clock.clone()))?;
    chart.on_properties_changed(&properties);

    let out_dir = PathBuf::from("target/out/livechart");
    let opts = RenderOptions { theme, ..RenderOptions::default() };
    log::info!("rendering with the {} theme", theme.name);
    let mut window = DataWindow::new();
    let window_ms = chart.config().window_ms;

    for (i, point) in points.into_iter().enumerate() {
        window.push(point);
        // Keep one window of history plus a little slack for the slide-in.
        if let Some(end) = window.last_timestamp() {
            window.prune_before(end - 2 * window_ms);
        }
        chart.on_data_changed(window.clone());

        // Script a few host interactions along the way.
        match i {
            10 => chart.highlight_line(&properties[0].name, true),
            20 => chart.highlight_line(&properties[0].name, false),
            30 if properties.len() > 1 => chart.toggle_line(&ToggleEvent::OFF, &properties[1].name),
            45 => chart.toggle_all_lines(&ToggleEvent::ON),
            60 => chart.pointer(&PointerEvent::EnterChart),
            _ => {}
        }

        // Sample mid-transition, then let it settle before the next point.
        clock.advance(STEP_MS as f64 / 2.0);
        if i % 15 == 0 {
            let out = out_dir.join(format!("frame_{i:03}.png"));
            chart.render_to_png(&opts, &out)?;
            println!("Wrote {}", out.display());
        }
        clock.advance(STEP_MS as f64 / 2.0);
    }

    hover_first_marker(&mut chart);
    let png = out_dir.join("final.png");
    chart.render_to_png(&opts, &png)?;
    let svg = out_dir.join("final.svg");
    chart.render_to_svg(&svg)?;
    println!("Wrote {} and {}", png.display(), svg.display());
    Ok(())
}

/// The scripted interactions need at least one point and one series.
fn check_feed(properties: &[PropertySpec], points: &[DataPoint]) -> Result<()> {
    if points.is_empty() {
        anyhow::bail!("no data points loaded; check headers/delimiter.");
    }
    anyhow::ensure!(!properties.is_empty(), "feed has no value columns besides the timestamp");
    Ok(())
}

/// Point the tooltip at the newest marker of the first series.
fn hover_first_marker(chart: &mut LiveChart) {
    let Some(marker) = chart.renderer().markers().iter().rev().find(|m| m.center.target().0.is_finite()) else {
        log::warn!("no markers to hover");
        return;
    };
    let (cx, cy) = *marker.center.target();
    let margins = chart.config().margins;
    let (page_x, page_y) = (cx + margins.left as f64, cy + margins.top as f64);
    chart.pointer(&PointerEvent::Move { page_x, page_y });
}

/// Load a feed CSV: a `timestamp` column (epoch ms) plus one numeric column per series.
fn load_feed_csv(path: &Path) -> Result<(Vec<PropertySpec>, Vec<DataPoint>)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_string()).collect::<Vec<_>>();
    let i_time = headers
        .iter()
        .position(|h| matches!(h.to_lowercase().as_str(), "timestamp" | "time" | "ts"))
        .context("feed needs a timestamp column")?;
    let properties = headers
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != i_time)
        .map(|(_, h)| PropertySpec::new(h.clone()))
        .collect::<Vec<_>>();
    println!("Series: {:?}", properties.iter().map(|p| p.name.as_str()).collect::<Vec<_>>());

    let mut points = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let ts = rec
            .get(i_time)
            .and_then(|s| s.parse::<i64>().ok())
            .with_context(|| format!("row {row}: bad timestamp"))?;
        let mut point = DataPoint::new(ts);
        for (i, h) in headers.iter().enumerate().filter(|(i, _)| *i != i_time) {
            // Unparseable cells plot as gaps rather than aborting the replay.
            let v = rec.get(i).and_then(|s| s.parse::<f64>().ok()).unwrap_or(f64::NAN);
            point = point.with(h.clone(), v);
        }
        points.push(point);
    }
    points.sort_by_key(|p| p.timestamp);
    Ok((properties, points))
}

/// Temperature/humidity/wind waveforms sampled once per second.
fn synthetic_feed(n: i64) -> (Vec<PropertySpec>, Vec<DataPoint>) {
    let props = ["temp", "humidity", "wind"].map(PropertySpec::new).to_vec();
    let start = 1_700_000_000_000;
    let points = (0..n)
        .map(|i| {
            let t = i as f64;
            DataPoint::new(start + i * STEP_MS)
                .with("temp", 45.0 + 15.0 * (t * 0.15).sin())
                .with("humidity", 60.0 + 10.0 * (t * 0.07).cos())
                .with("wind", 20.0 + 8.0 * (t * 0.4).sin().abs())
        })
        .collect();
    (props, points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_without_value_columns_is_rejected() {
        let points = vec![DataPoint::new(1_000), DataPoint::new(2_000)];
        assert!(check_feed(&[], &points).is_err());
        assert!(check_feed(&[PropertySpec::new("temp")], &[]).is_err());
        assert!(check_feed(&[PropertySpec::new("temp")], &points).is_ok());
    }

    #[test]
    fn synthetic_feed_passes_checks() {
        let (props, points) = synthetic_feed(5);
        check_feed(&props, &points).unwrap();
    }
}
