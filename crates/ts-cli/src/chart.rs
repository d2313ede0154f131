// Text rendering of a session snapshot.

use ts_session::{BarKind, Snapshot};

fn glyph(kind: BarKind) -> char {
    match kind {
        BarKind::Selected => '*',
        BarKind::Candidate => '#',
        BarKind::Eliminated => '.',
        BarKind::Default => ' ',
    }
}

/// Render the distribution as horizontal bars, tallest first, followed by
/// the status line.
pub fn render(snapshot: &Snapshot, width: usize) -> String {
    let bars = snapshot.bars();
    let label_width = bars
        .iter()
        .map(|b| b.token.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = format!(
        "temperature {:.2}  top-p {:.2}\n",
        snapshot.temperature, snapshot.top_p
    );
    for bar in &bars {
        let len = (bar.height * width as f64).round() as usize;
        let fill: String = std::iter::repeat(glyph(bar.kind)).take(len).collect();
        out.push_str(&format!(
            "{:<label_width$} |{:<width$}| {:>5.1}%\n",
            bar.token,
            fill,
            bar.probability * 100.0,
        ));
    }
    out.push_str(&snapshot.status());
    out.push('\n');
    out
}
