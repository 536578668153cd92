use crate::bounds::AxisBounds;
use crate::table::SeriesSlice;
use crate::ChartKind;
use plotters::prelude::*;
use std::path::Path;

pub const CHART_SIZE: (u32, u32) = (1600, 800);

const LINE_COLOR: RGBColor = RGBColor(31, 119, 180);

/// Plots the slice as a line chart to svg at `fout`, overwriting it.
/// The drawing area lives only for this call and is flushed before returning.
pub fn render_svg(
    kind: ChartKind,
    slice: &SeriesSlice,
    bounds: &AxisBounds,
    fout: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let xmin = slice.years.first().copied().unwrap_or_default();
    let xmax = slice.years.last().copied().unwrap_or_default();
    // a single year still needs a non-empty x range
    let xmax = xmax.max(xmin + 1);

    let root = SVGBackend::new(fout, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(kind.title(slice.name), ("sans-serif", 36))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(100)
        .build_cartesian_2d(xmin..xmax, bounds.y_min..bounds.y_max)?;
    chart
        .configure_mesh()
        .light_line_style(&TRANSPARENT)
        .bold_line_style(RGBColor(150, 150, 150).stroke_width(2))
        .set_all_tick_mark_size(2)
        .label_style(("sans-serif", 24))
        .x_desc("Year")
        .y_desc(kind.y_label())
        .x_labels(14) // max number of labels
        .x_label_formatter(&|x: &i32| format!("{}", x))
        .y_label_formatter(&|y: &f64| format!("{:.1}", y))
        .draw()?;

    // one line per run of present values, labelled once
    for (i, run) in slice.runs().into_iter().enumerate() {
        let line = chart.draw_series(LineSeries::new(run, LINE_COLOR.stroke_width(3)))?;
        if i == 0 {
            line.label(kind.legend_label()).legend(|(x, y)| {
                PathElement::new(vec![(x, y), (x + 30, y)], LINE_COLOR.stroke_width(3))
            });
        }
    }
    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font(("sans-serif", 24))
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
