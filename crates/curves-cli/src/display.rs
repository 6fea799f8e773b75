//! Text report of curve lists.

use std::io::Write;
use std::rc::Rc;

use curves_core::Result;
use curves_geometry::{Circle, Curve};

pub const SEPARATOR_WIDTH: usize = 79;

pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Section title followed by a separator line.
pub fn write_header(out: &mut impl Write, title: &str) -> Result<()> {
    writeln!(out, "{title}")?;
    writeln!(out, "{}", separator())?;
    Ok(())
}

/// One entry per curve: tag, point and tangent at `t`, then the strong count.
///
/// The entry line is `<tag><point> <vector>`: the tag's own trailing space
/// separates it from the point, and a single space separates point and
/// vector, e.g. `Circle P{1, 0, 0} V{-0, 1, 0}`.
pub fn write_curves(out: &mut impl Write, curves: &[Rc<dyn Curve>], t: f64) -> Result<()> {
    for curve in curves {
        writeln!(
            out,
            "{}{} {}",
            curve.info(),
            curve.curve_point(t),
            curve.curve_vector(t)
        )?;
        writeln!(out, " count ptr = {}", Rc::strong_count(curve))?;
    }
    write_footer(out)
}

/// Like [`write_curves`], with the radius appended to each entry.
pub fn write_circles(out: &mut impl Write, circles: &[Rc<Circle>], t: f64) -> Result<()> {
    for circle in circles {
        writeln!(
            out,
            "{}{} {} r = {}",
            circle.info(),
            circle.curve_point(t),
            circle.curve_vector(t),
            circle.radius()
        )?;
        writeln!(out, " count ptr = {}", Rc::strong_count(circle))?;
    }
    write_footer(out)
}

pub fn write_radius_sum(out: &mut impl Write, sum: f64) -> Result<()> {
    writeln!(out, "{} Amount radius listTwo = {sum}", separator())?;
    write_footer(out)
}

fn write_footer(out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", separator())?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use curves_math::Point;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_separator_width() {
        assert_eq!(separator().len(), 79);
        assert!(separator().chars().all(|c| c == '-'));
    }

    #[test]
    fn test_header() {
        let text = render(|out| write_header(out, "List ONE"));
        assert_eq!(text, format!("List ONE\n{}\n", separator()));
    }

    #[test]
    fn test_curve_entry_format() {
        let curves: Vec<Rc<dyn Curve>> = vec![Rc::new(Circle::new(Point::xy(1.0, 2.0), 3.0))];
        let text = render(|out| write_curves(out, &curves, 0.0));
        let expected = format!(
            "Circle P{{4, 2, 0}} V{{-0, 3, 0}}\n count ptr = 1\n{}\n\n",
            separator()
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_circle_entry_has_radius_and_count() {
        let circle = Rc::new(Circle::new(Point::ORIGIN, 2.0));
        let circles = vec![Rc::clone(&circle)];
        let text = render(|out| write_circles(out, &circles, 0.0));
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Circle P{2, 0, 0} V{-0, 2, 0} r = 2"));
        assert_eq!(lines.next(), Some(" count ptr = 2"));
    }

    #[test]
    fn test_empty_list_prints_only_footer() {
        let text = render(|out| write_curves(out, &[], 0.0));
        assert_eq!(text, format!("{}\n\n", separator()));
    }

    #[test]
    fn test_radius_sum_line() {
        let text = render(|out| write_radius_sum(out, 3.0));
        assert!(text.starts_with(&format!("{} Amount radius listTwo = 3\n", separator())));
    }
}
