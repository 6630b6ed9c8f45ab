extern crate plotters;
use plotters::prelude::*;

use std::time::Duration;

use checkstroke::{CheckConfig, Point2, ProgressDriver, Rect};

const SIZE: f64 = 100.0;
const PANELS: usize = 8;
const FRAME_STEP_MS: u64 = 75;
const RING_STEPS: usize = 90;

/// Apply the pulse scale around the glyph center and flip y for the chart.
fn to_chart(p: Point2<f64>, scale: f64) -> (f64, f64) {
    let c = SIZE / 2.0;
    let x = c + (p.x() - c) * scale;
    let y = c + (p.y() - c) * scale;
    (x, SIZE - y)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut driver = ProgressDriver::<f64>::new(CheckConfig::default());
    driver.on_size_changed(Rect::new(0.0, 0.0, SIZE, SIZE), 8.0);
    driver.check(Duration::ZERO);

    let style = driver.style();
    let color = RGBColor(style.color.red(), style.color.green(), style.color.blue());
    let stroke = ShapeStyle::from(&color).stroke_width(style.width as u32);

    let root = SVGBackend::new("check_frames.svg", (200 * PANELS as u32, 200)).into_drawing_area();
    root.fill(&WHITE)?;

    for (i, panel) in root.split_evenly((1, PANELS)).iter().enumerate() {
        let now = Duration::from_millis(i as u64 * FRAME_STEP_MS);
        let frame = match driver.frame(now) {
            Some(frame) => frame,
            None => continue,
        };
        log::info!(
            "t={:?}  check points={}  sweep={:.1}  scale={:.3}",
            now,
            frame.check.len(),
            frame.ring.sweep_angle,
            frame.scale
        );

        let mut chart = ChartBuilder::on(panel)
            .margin(5)
            .build_cartesian_2d(0f64..SIZE, 0f64..SIZE)?;

        if frame.check.is_drawable() {
            let check: Vec<(f64, f64)> = frame
                .check
                .iter()
                .map(|p| to_chart(*p, frame.scale))
                .collect();
            chart.draw_series(LineSeries::new(check, stroke.clone()))?;
        }

        if !frame.ring.is_empty() {
            let ring: Vec<(f64, f64)> = (0..=RING_STEPS)
                .map(|step| {
                    let angle = frame.ring.start_angle
                        + frame.ring.sweep_angle * (step as f64 / RING_STEPS as f64);
                    to_chart(frame.ring.point_at_angle(angle), frame.scale)
                })
                .collect();
            chart.draw_series(LineSeries::new(ring, stroke.clone()))?;
        }
    }

    root.present()?;
    Ok(())
}
