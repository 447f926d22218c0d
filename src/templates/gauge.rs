//! SVG doughnut for the fuel tank gauge.

use crate::core::gauge::Gauge;
use crate::format::compact;

/// Makes the ring circumference exactly 100, so that dash lengths are percentages.
const RADIUS: &str = "15.91549430918954";

/// Dash array starts at 3 o'clock, shift it to 12 o'clock.
const START_OFFSET: f64 = 25.0;

markup::define! {
    GaugeChart(gauge: Gauge) {
        figure.gauge {
            svg[viewBox = "0 0 42 42", role = "img", "aria-label" = gauge.title()] {
                circle[cx = "21", cy = "21", r = RADIUS, fill = "transparent", stroke = "#eeeeee", "stroke-width" = "5"] {}
                @for stroke in strokes(gauge) {
                    circle[
                        cx = "21",
                        cy = "21",
                        r = RADIUS,
                        fill = "transparent",
                        stroke = stroke.color,
                        "stroke-width" = "5",
                        "stroke-dasharray" = stroke.dash_array,
                        "stroke-dashoffset" = stroke.dash_offset
                    ] {
                        title { @stroke.title }
                    }
                }
                text[x = "21", y = "21", "text-anchor" = "middle", "dominant-baseline" = "central", "font-size" = "7"] {
                    @percentage_text(gauge)
                }
            }
            figcaption."has-text-centered" { @gauge.title() }
        }
    }
}

pub struct Stroke {
    pub title: String,
    pub color: &'static str,
    pub dash_array: String,
    pub dash_offset: String,
}

/// One ring stroke per non-empty segment.
pub fn strokes(gauge: &Gauge) -> Vec<Stroke> {
    let max = gauge.max();
    if max == 0.0 {
        return Vec::new();
    }
    let mut offset = START_OFFSET;
    let mut strokes = Vec::new();
    for segment in gauge.segments().iter().filter(|segment| segment.value > 0.0) {
        let length = segment.value / max * 100.0;
        strokes.push(Stroke {
            title: format!("{}: {} L", segment.title, compact(segment.value)),
            color: segment.color,
            dash_array: format!("{} {}", compact(length), compact(100.0 - length)),
            dash_offset: compact(offset),
        });
        offset -= length;
    }
    strokes
}

pub fn percentage_text(gauge: &Gauge) -> String {
    format!("{}%", gauge.percentage().round())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_strokes() {
        let strokes = strokes(&Gauge::new(10.0, 40.0));
        assert_eq!(strokes.len(), 2);
        assert_eq!(strokes[0].dash_array, "25 75");
        assert_eq!(strokes[0].dash_offset, "25");
        assert_eq!(strokes[0].title, "Available: 10 L");
        assert_eq!(strokes[1].dash_array, "75 25");
        assert_eq!(strokes[1].dash_offset, "0");
        assert_eq!(strokes[1].title, "Used: 30 L");
    }

    #[test]
    fn full_tank() {
        assert_eq!(strokes(&Gauge::new(35.0, 35.0)).len(), 1);
    }

    #[test]
    fn zero_capacity() {
        assert!(strokes(&Gauge::new(0.0, 0.0)).is_empty());
    }

    #[test]
    fn render() {
        let html = GaugeChart {
            gauge: Gauge::new(10.0, 35.0),
        }
        .to_string();
        assert!(html.contains("<figcaption class=\"has-text-centered\">Tank level (10 L of 35 L)</figcaption>"));
        assert!(html.contains("29%"));
        assert_eq!(html.matches("stroke-dasharray").count(), 2);
    }
}
