//! Two-list workflow: random curves, circles shared into a second list,
//! radius sum, sort.

use std::io::Write;
use std::rc::Rc;

use curves_core::{CurveError, Result, Validate};
use curves_geometry::{Circle, Curve, CurveFactory};
use log::{debug, info};
use rand::Rng;

use crate::config::Options;
use crate::display;

/// The two lists. `circles` holds additional handles to circles owned by
/// `curves`, never copies.
#[derive(Debug, Default)]
pub struct Workflow {
    curves: Vec<Rc<dyn Curve>>,
    circles: Vec<Rc<Circle>>,
    radius_sum: f64,
}

impl Workflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_curves(curves: Vec<Rc<dyn Curve>>) -> Self {
        Self {
            curves,
            ..Self::default()
        }
    }

    /// Append `count` random curves to the first list.
    pub fn populate<R: Rng>(&mut self, factory: &mut CurveFactory<R>, count: usize) -> Result<()> {
        self.curves.reserve(count);
        for _ in 0..count {
            let curve = factory.random_variant();
            curve.validate()?;
            self.curves.push(curve);
        }
        debug!("populated {} curves", self.curves.len());
        Ok(())
    }

    /// Share every circle of the first list into the second list, in order,
    /// and return the sum of their radii.
    ///
    /// The second list is rebuilt on each call.
    pub fn partition_circles(&mut self) -> f64 {
        self.circles.clear();
        let mut sum = 0.0;
        for curve in &self.curves {
            if let Some(circle) = Circle::narrow(curve) {
                sum += circle.radius();
                self.circles.push(circle);
            }
        }
        self.radius_sum = sum;
        debug!(
            "partitioned {} circles out of {} curves, radius sum {sum}",
            self.circles.len(),
            self.curves.len()
        );
        sum
    }

    /// Stable ascending sort of the second list by radius.
    pub fn sort_circles(&mut self) {
        self.circles.sort_by(|a, b| a.radius().total_cmp(&b.radius()));
    }

    pub fn curves(&self) -> &[Rc<dyn Curve>] {
        &self.curves
    }

    pub fn circles(&self) -> &[Rc<Circle>] {
        &self.circles
    }

    /// Sum of radii computed by the last [`Workflow::partition_circles`].
    pub fn radius_sum(&self) -> f64 {
        self.radius_sum
    }

    /// Drop both lists, releasing every curve.
    pub fn clear(&mut self) {
        self.circles.clear();
        self.curves.clear();
        self.radius_sum = 0.0;
    }

    /// Run the partition, sum and sort stages on the current first list,
    /// writing each intermediate state to `out`.
    pub fn report(&mut self, t: f64, out: &mut impl Write) -> Result<()> {
        if !t.is_finite() {
            return Err(CurveError::InvalidOperation(format!(
                "curve parameter must be finite, got {t}"
            )));
        }

        display::write_header(out, "List ONE")?;
        display::write_curves(out, &self.curves, t)?;

        let sum = self.partition_circles();

        display::write_header(out, "List ONE after cast")?;
        display::write_curves(out, &self.curves, t)?;

        display::write_header(out, "List TWO after cast")?;
        display::write_circles(out, &self.circles, t)?;

        display::write_radius_sum(out, sum)?;

        self.sort_circles();

        display::write_header(out, "List TWO after sort")?;
        display::write_circles(out, &self.circles, t)?;
        writeln!(out)?;
        Ok(())
    }
}

/// Generate the first list from `options` and write the full report.
pub fn run(options: &Options, out: &mut impl Write) -> Result<Workflow> {
    let mut factory = options.factory();
    run_with_factory(&mut factory, options, out)
}

pub fn run_with_factory<R: Rng>(
    factory: &mut CurveFactory<R>,
    options: &Options,
    out: &mut impl Write,
) -> Result<Workflow> {
    info!(
        "running with {} curves, seed {:?}, t = {}",
        options.count, options.seed, options.param
    );
    let mut workflow = Workflow::new();
    workflow.populate(factory, options.count)?;
    workflow.report(options.param, out)?;
    info!(
        "{} circles, radius sum {}",
        workflow.circles().len(),
        workflow.radius_sum()
    );
    Ok(workflow)
}
