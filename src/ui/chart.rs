use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Drawing surface for the trend polyline, in abstract units.
#[derive(Debug, Clone, Copy)]
pub struct ChartSurface {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

/// Scale samples onto the surface as polyline points, in index order.
///
/// Returns None for fewer than two samples; the caller shows a textual
/// placeholder instead. The value span is clamped to at least 1.0; a
/// flat series maps to a horizontal line at the bottom edge.
pub fn polyline(samples: &[f64], surface: ChartSurface) -> Option<Vec<(f64, f64)>> {
    if samples.len() < 2 {
        return None;
    }

    let max = samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min = samples.iter().cloned().fold(f64::INFINITY, f64::min);
    let span = (max - min).max(1.0);

    let n = samples.len();
    let inner_w = surface.width - 2.0 * surface.padding;
    let inner_h = surface.height - 2.0 * surface.padding;

    Some(
        samples
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let x = surface.padding + (i as f64 / (n - 1) as f64) * inner_w;
                let y = surface.height - surface.padding - ((v - min) / span) * inner_h;
                (x, y)
            })
            .collect(),
    )
}

pub struct TrendChart<'a> {
    prices: &'a [f64],
    ticker: &'a str,
}

impl<'a> TrendChart<'a> {
    pub fn new(prices: &'a [f64], ticker: &'a str) -> Self {
        Self { prices, ticker }
    }
}

impl Widget for TrendChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" Recent Price Trend ({}) ", self.ticker))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 2 || inner.width < 4 {
            return;
        }

        let surface = ChartSurface {
            width: inner.width as f64,
            height: inner.height as f64,
            padding: 1.0,
        };
        let Some(points) = polyline(self.prices, surface) else {
            Paragraph::new("No chart data available yet.")
                .style(Style::default().fg(Color::DarkGray))
                .render(inner, buf);
            return;
        };

        for (x, y) in points {
            let col = inner.x + (x.round() as u16).min(inner.width - 1);
            let row = inner.y + (y.round() as u16).min(inner.height - 1);
            buf.set_string(col, row, "●", Style::default().fg(Color::Cyan));
        }

        // Axis labels
        let max = self.prices.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let min = self.prices.iter().cloned().fold(f64::INFINITY, f64::min);
        buf.set_string(
            inner.x,
            inner.y,
            format!("{:.1}", max),
            Style::default().fg(Color::DarkGray),
        );
        buf.set_string(
            inner.x,
            inner.y + inner.height - 1,
            format!("{:.1}", min),
            Style::default().fg(Color::DarkGray),
        );
    }
}
