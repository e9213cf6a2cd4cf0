// src/analysis/report.rs
//! Renders the dashboard PNG: one horizontal bar chart per panel

use super::frequency::FrequencyTable;
use crate::utils::{ensure_parent_dir, truncate_label};
use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::fmt::Display;
use std::path::Path;
use tracing::info;

const FONT: &str = "sans-serif";
const MAX_LABEL_CHARS: usize = 30;

pub struct Panel {
    pub title: String,
    pub table: FrequencyTable,
    pub color: RGBColor,
    /// Shown instead of the chart when `table` is empty.
    pub empty_message: String,
}

fn plot_err<E: Display>(e: E) -> anyhow::Error {
    anyhow::anyhow!("Failed to draw chart: {}", e)
}

pub fn render_dashboard(path: &Path, panels: &[Panel], width: u32, height: u32) -> Result<()> {
    ensure_parent_dir(path)?;

    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let areas = root.split_evenly((panels.len().max(1), 1));
    for (panel, area) in panels.iter().zip(areas.iter()) {
        draw_panel(area, panel)?;
    }

    root.present().map_err(plot_err)?;
    info!("Dashboard saved to {}", path.display());
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>, panel: &Panel) -> Result<()> {
    if panel.table.is_empty() {
        return draw_placeholder(area, panel);
    }

    let rows = panel.table.rows();
    let n = rows.len();
    let max = panel.table.max_count() as u32;
    let x_max = max + (max / 10).max(1);
    let labels: Vec<String> = rows
        .iter()
        .map(|(value, _)| truncate_label(value, MAX_LABEL_CHARS))
        .collect();

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, (FONT, 22))
        .margin(12)
        .x_label_area_size(35)
        .y_label_area_size(230)
        .build_cartesian_2d(0u32..x_max, (0..n).into_segmented())
        .map_err(plot_err)?;

    // Largest count goes at the top, so slot 0 (bottom) holds the last row.
    let label_for = |pos: &SegmentValue<usize>| match pos {
        SegmentValue::CenterOf(slot) => n
            .checked_sub(slot + 1)
            .and_then(|i| labels.get(i))
            .cloned()
            .unwrap_or_default(),
        _ => String::new(),
    };

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(n)
        .y_label_formatter(&label_for)
        .x_desc("Frequency")
        .label_style((FONT, 14))
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(rows.iter().enumerate().map(|(i, (_, count))| {
            let slot = n - 1 - i;
            let shade = 1.0 - 0.5 * (i as f64 / n as f64);
            let mut bar = Rectangle::new(
                [
                    (0, SegmentValue::Exact(slot)),
                    (*count as u32, SegmentValue::Exact(slot + 1)),
                ],
                panel.color.mix(shade).filled(),
            );
            bar.set_margin(4, 4, 0, 0);
            bar
        }))
        .map_err(plot_err)?;

    Ok(())
}

fn draw_placeholder<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
) -> Result<()> {
    let area = area.titled(&panel.title, (FONT, 22)).map_err(plot_err)?;
    let (w, h) = area.dim_in_pixel();
    let grey = RGBColor(110, 110, 110);
    let style = TextStyle::from((FONT, 20).into_font())
        .color(&grey)
        .pos(Pos::new(HPos::Center, VPos::Center));

    area.draw(&Text::new(
        panel.empty_message.clone(),
        ((w / 2) as i32, (h / 2) as i32),
        style,
    ))
    .map_err(plot_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_png_with_empty_panel() {
        let dir = std::env::temp_dir().join(uuid::Uuid::new_v4().to_string());
        let path = dir.join("dashboard.png");
        let panels = vec![
            Panel {
                title: "Cities".to_string(),
                table: FrequencyTable::from_values(["Pune", "Pune", "Mumbai"], 10),
                color: BLUE,
                empty_message: "No cities".to_string(),
            },
            Panel {
                title: "Skills".to_string(),
                table: FrequencyTable::default(),
                color: RED,
                empty_message: "No skills detected".to_string(),
            },
        ];

        render_dashboard(&path, &panels, 600, 600).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
