//! Scatter chart state.
//!
//! This module owns everything the chart shows independent of the terminal:
//! the chosen field of each axis, the scales built for them, the running
//! transitions and the hovered point. Positions are in unit space (`[0, 1]`
//! on both axes, Y growing downwards) and are scaled to the plot area when
//! drawn, so a window resize never invalidates them.

mod transition;

pub use transition::{ease_cubic_in_out, lerp_point, Transition};

use std::time::{Duration, Instant};

use crate::data::{AxisField, CensusData, StateRecord, XField, YField};
use crate::scale::LinearScale;
use crate::util::{ChartConfig, ScaleConfig};

/// Unit range of the X scale: left to right.
pub const X_RANGE: (f64, f64) = (0.0, 1.0);
/// Unit range of the Y scale: bottom (1) to top (0).
pub const Y_RANGE: (f64, f64) = (1.0, 0.0);

/// One tick of an axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    /// Tick value in the field's units.
    pub value: f64,
    /// Unit-space position along the axis.
    pub position: f64,
    /// Formatted tick label.
    pub label: String,
    /// Whether the axis is still moving towards its target scale.
    pub moving: bool,
}

/// A clickable axis label and whether its field is the chosen one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelState<F> {
    /// Field selected by clicking this label.
    pub field: F,
    /// Label text.
    pub text: &'static str,
    /// Whether this is the chosen field.
    pub active: bool,
}

/// Tooltip content for a hovered point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    /// State name.
    pub title: String,
    /// `"<x label>: <x value>"`.
    pub x_line: String,
    /// `"<y label>: <y value>"`.
    pub y_line: String,
}

impl Tooltip {
    /// Lines in display order.
    pub fn lines(&self) -> [&str; 3] {
        [&self.title, &self.x_line, &self.y_line]
    }

    /// Tooltip as plain text, one line per row.
    pub fn text(&self) -> String {
        self.lines().join("\n")
    }
}

/// State of one axis: chosen field, its scale, and the scale being left.
#[derive(Debug, Clone)]
pub struct AxisState<F: AxisField> {
    field: F,
    scale: LinearScale,
    leaving: Option<(LinearScale, Transition)>,
}

impl<F: AxisField> AxisState<F> {
    fn new(data: &CensusData, field: F, range: (f64, f64), config: &ScaleConfig) -> Self {
        Self {
            field,
            scale: LinearScale::for_field(data, field, range, config),
            leaving: None,
        }
    }

    /// Chosen field.
    pub fn field(&self) -> F {
        self.field
    }

    /// Target scale of the chosen field.
    pub fn scale(&self) -> &LinearScale {
        &self.scale
    }

    /// Scale as drawn at `now`: interpolated while the axis animates.
    pub fn scale_at(&self, now: Instant) -> LinearScale {
        match &self.leaving {
            Some((from, tr)) if !tr.is_finished(now) => from.lerp(&self.scale, tr.eased(now)),
            _ => self.scale,
        }
    }

    /// Whether the axis is still animating at `now`.
    pub fn is_animating(&self, now: Instant) -> bool {
        matches!(&self.leaving, Some((_, tr)) if !tr.is_finished(now))
    }

    fn rebind(
        &mut self,
        data: &CensusData,
        field: F,
        config: &ScaleConfig,
        now: Instant,
        duration: Duration,
    ) {
        let shown = self.scale_at(now);
        self.field = field;
        self.scale = LinearScale::for_field(data, field, self.scale.range, config);
        self.leaving = Some((shown, Transition::new(now, duration)));
    }

    /// Ticks of the scale drawn at `now`. While the axis animates these
    /// follow the interpolated domain, so the axis starts on the old field's
    /// ticks, ends on the new field's, and is never empty in between.
    pub fn ticks(&self, now: Instant, count: usize) -> Vec<AxisTick> {
        let drawn = self.scale_at(now);
        let format = drawn.tick_format(count);
        let moving = self.is_animating(now);
        drawn
            .ticks(count)
            .into_iter()
            .filter_map(|value| {
                let position = drawn.map(value);
                (-1e-9..=1.0 + 1e-9).contains(&position).then(|| AxisTick {
                    value,
                    position: position.clamp(0.0, 1.0),
                    label: format(value),
                    moving,
                })
            })
            .collect()
    }

    /// Label of every field of this axis, in display order.
    pub fn labels(&self) -> Vec<LabelState<F>> {
        F::ALL
            .iter()
            .map(|&field| LabelState {
                field,
                text: field.axis_label(),
                active: field == self.field,
            })
            .collect()
    }

    fn position_of(&self, record: &StateRecord) -> f64 {
        self.scale.map(self.field.value(record))
    }
}

/// The chart session: data, axes, transitions and hover.
#[derive(Debug, Clone)]
pub struct ChartState {
    data: CensusData,
    x: AxisState<XField>,
    y: AxisState<YField>,
    scale_config: ScaleConfig,
    duration: Duration,
    points_from: Vec<(f64, f64)>,
    points_transition: Option<Transition>,
    hovered: Option<usize>,
}

impl ChartState {
    /// Build the chart for `data` with the initial fields.
    pub fn new(data: CensusData, config: &ChartConfig, x_field: XField, y_field: YField) -> Self {
        let x = AxisState::new(&data, x_field, X_RANGE, &config.scale);
        let y = AxisState::new(&data, y_field, Y_RANGE, &config.scale);
        tracing::debug!(
            x = %x_field,
            y = %y_field,
            records = data.len(),
            "chart initialised"
        );
        Self {
            data,
            x,
            y,
            scale_config: config.scale,
            duration: config.transition,
            points_from: Vec::new(),
            points_transition: None,
            hovered: None,
        }
    }

    /// Loaded records.
    pub fn data(&self) -> &CensusData {
        &self.data
    }

    /// X axis state.
    pub fn x(&self) -> &AxisState<XField> {
        &self.x
    }

    /// Y axis state.
    pub fn y(&self) -> &AxisState<YField> {
        &self.y
    }

    /// Bind `field` to the X axis. Returns false if it already is.
    pub fn select_x(&mut self, field: XField, now: Instant) -> bool {
        if field == self.x.field {
            return false;
        }
        self.points_from = self.point_positions(now);
        self.x
            .rebind(&self.data, field, &self.scale_config, now, self.duration);
        self.points_transition = Some(Transition::new(now, self.duration));
        tracing::info!(x = %field, "X axis changed");
        true
    }

    /// Bind `field` to the Y axis. Returns false if it already is.
    pub fn select_y(&mut self, field: YField, now: Instant) -> bool {
        if field == self.y.field {
            return false;
        }
        self.points_from = self.point_positions(now);
        self.y
            .rebind(&self.data, field, &self.scale_config, now, self.duration);
        self.points_transition = Some(Transition::new(now, self.duration));
        tracing::info!(y = %field, "Y axis changed");
        true
    }

    /// Bind the next X field in label order.
    pub fn cycle_x(&mut self, now: Instant) -> XField {
        let next = self.x.field.next();
        self.select_x(next, now);
        next
    }

    /// Bind the next Y field in label order.
    pub fn cycle_y(&mut self, now: Instant) -> YField {
        let next = self.y.field.next();
        self.select_y(next, now);
        next
    }

    /// Final unit-space position of every point for the chosen fields.
    pub fn target_positions(&self) -> Vec<(f64, f64)> {
        self.data
            .records()
            .iter()
            .map(|r| (self.x.position_of(r), self.y.position_of(r)))
            .collect()
    }

    /// Unit-space position of every point (circle and its text) at `now`.
    pub fn point_positions(&self, now: Instant) -> Vec<(f64, f64)> {
        let targets = self.target_positions();
        match &self.points_transition {
            Some(tr) if !tr.is_finished(now) && self.points_from.len() == targets.len() => {
                let t = tr.eased(now);
                self.points_from
                    .iter()
                    .zip(&targets)
                    .map(|(&from, &to)| lerp_point(from, to, t))
                    .collect()
            },
            _ => targets,
        }
    }

    /// Whether any transition is still running at `now`.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.x.is_animating(now)
            || self.y.is_animating(now)
            || matches!(&self.points_transition, Some(tr) if !tr.is_finished(now))
    }

    /// Ticks of the bottom axis at `now`.
    pub fn axis_ticks_x(&self, now: Instant, count: usize) -> Vec<AxisTick> {
        self.x.ticks(now, count)
    }

    /// Ticks of the left axis at `now`.
    pub fn axis_ticks_y(&self, now: Instant, count: usize) -> Vec<AxisTick> {
        self.y.ticks(now, count)
    }

    /// Clickable X labels.
    pub fn label_states_x(&self) -> Vec<LabelState<XField>> {
        self.x.labels()
    }

    /// Clickable Y labels.
    pub fn label_states_y(&self) -> Vec<LabelState<YField>> {
        self.y.labels()
    }

    /// Tooltip of the point at `index` for the chosen fields.
    pub fn tooltip(&self, index: usize) -> Option<Tooltip> {
        let record = self.data.get(index)?;
        let x = self.x.field;
        let y = self.y.field;
        Some(Tooltip {
            title: record.state.clone(),
            x_line: format!("{}: {}", x.tooltip_label(), x.format_value(x.value(record))),
            y_line: format!("{}: {}", y.tooltip_label(), y.format_value(y.value(record))),
        })
    }

    /// Hovered point, if any.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Tooltip of the hovered point.
    pub fn hovered_tooltip(&self) -> Option<Tooltip> {
        self.hovered.and_then(|i| self.tooltip(i))
    }

    /// Show the tooltip of `index`. Out of range indices are ignored.
    pub fn hover(&mut self, index: usize) {
        if index < self.data.len() {
            self.hovered = Some(index);
        }
    }

    /// Hide the tooltip.
    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    /// Hover the next point in ascending X order, wrapping.
    pub fn hover_next(&mut self) {
        self.step_hover(true);
    }

    /// Hover the previous point in ascending X order, wrapping.
    pub fn hover_prev(&mut self) {
        self.step_hover(false);
    }

    fn step_hover(&mut self, forward: bool) {
        let order = self.x_order();
        if order.is_empty() {
            return;
        }
        let next = match self.hovered.and_then(|h| order.iter().position(|&i| i == h)) {
            None if forward => 0,
            None => order.len() - 1,
            Some(pos) if forward => (pos + 1) % order.len(),
            Some(pos) => (pos + order.len() - 1) % order.len(),
        };
        self.hovered = Some(order[next]);
    }

    fn x_order(&self) -> Vec<usize> {
        let records = self.data.records();
        let field = self.x.field;
        let mut order: Vec<usize> = (0..records.len()).collect();
        order.sort_by(|&a, &b| {
            field
                .value(&records[a])
                .total_cmp(&field.value(&records[b]))
                .then_with(|| records[a].state.cmp(&records[b].state))
        });
        order
    }

    /// Nearest point whose ellipse of radii `radius` (unit space) contains
    /// `point` at `now`.
    pub fn hit_test(&self, point: (f64, f64), radius: (f64, f64), now: Instant) -> Option<usize> {
        if radius.0 <= 0.0 || radius.1 <= 0.0 {
            return None;
        }
        self.point_positions(now)
            .iter()
            .enumerate()
            .map(|(i, &(px, py))| {
                let dx = (point.0 - px) / radius.0;
                let dy = (point.1 - py) / radius.1;
                (i, dx * dx + dy * dy)
            })
            .filter(|&(_, d)| d <= 1.0)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CensusData {
        CensusData::from_records(vec![
            StateRecord::new("Alabama", "AL", 19.3, 38.6, 42830.0, 13.9, 21.1, 33.5),
            StateRecord::new("Alaska", "AK", 11.2, 33.3, 71583.0, 15.0, 19.9, 29.7),
            StateRecord::new("Arizona", "AZ", 18.2, 36.9, 50068.0, 14.4, 16.5, 28.9),
            StateRecord::new("Utah", "UT", 11.7, 30.5, 60922.0, 13.7, 9.7, 24.5),
        ])
    }

    fn chart() -> ChartState {
        ChartState::new(sample(), &ChartConfig::default(), XField::Poverty, YField::Healthcare)
    }

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn starts_settled_on_initial_fields() {
        let chart = chart();
        let now = Instant::now();
        assert_eq!(chart.x().field(), XField::Poverty);
        assert_eq!(chart.y().field(), YField::Healthcare);
        assert!(!chart.is_animating(now));
        assert_eq!(chart.point_positions(now), chart.target_positions());
    }

    #[test]
    fn selecting_chosen_field_is_a_no_op() {
        let mut chart = chart();
        let now = Instant::now();
        assert!(!chart.select_x(XField::Poverty, now));
        assert!(!chart.select_y(YField::Healthcare, now));
        assert!(!chart.is_animating(now));
    }

    #[test]
    fn switching_x_animates_points_from_old_to_new() {
        let mut chart = chart();
        let t0 = Instant::now();
        let before = chart.point_positions(t0);

        assert!(chart.select_x(XField::Income, t0));
        assert!(chart.is_animating(t0));

        let start = chart.point_positions(t0);
        for (a, b) in before.iter().zip(&start) {
            assert!(close(*a, *b));
        }

        let mid = chart.point_positions(t0 + Duration::from_millis(1000));
        let end = chart.target_positions();
        for ((from, m), to) in before.iter().zip(&mid).zip(&end) {
            let lo = from.0.min(to.0) - 1e-9;
            let hi = from.0.max(to.0) + 1e-9;
            assert!(m.0 >= lo && m.0 <= hi);
            assert!((m.1 - to.1).abs() < 1e-9, "y does not move on an x switch");
        }

        let done = t0 + Duration::from_millis(2000);
        assert!(!chart.is_animating(done));
        assert_eq!(chart.point_positions(done), end);
    }

    #[test]
    fn interrupted_transition_starts_from_current_positions() {
        let mut chart = chart();
        let t0 = Instant::now();
        chart.select_y(YField::Smokes, t0);
        let t1 = t0 + Duration::from_millis(700);
        let current = chart.point_positions(t1);
        chart.select_y(YField::Obesity, t1);
        let restarted = chart.point_positions(t1);
        for (a, b) in current.iter().zip(&restarted) {
            assert!(close(*a, *b));
        }
    }

    #[test]
    fn largest_value_is_on_the_right_and_top() {
        let chart = chart();
        let positions = chart.target_positions();
        // Alabama has the highest poverty, Alaska the highest healthcare gap.
        let rightmost = positions
            .iter()
            .enumerate()
            .max_by(|a, b| a.1 .0.total_cmp(&b.1 .0))
            .map(|(i, _)| i);
        let topmost = positions
            .iter()
            .enumerate()
            .min_by(|a, b| a.1 .1.total_cmp(&b.1 .1))
            .map(|(i, _)| i);
        assert_eq!(rightmost, Some(0));
        assert_eq!(topmost, Some(1));
    }

    #[test]
    fn exactly_one_label_active_per_axis() {
        let mut chart = chart();
        let mut now = Instant::now();
        for _ in 0..5 {
            chart.cycle_x(now);
            chart.cycle_y(now);
            now += Duration::from_millis(300);
            let xs = chart.label_states_x();
            let ys = chart.label_states_y();
            assert_eq!(xs.iter().filter(|l| l.active).count(), 1);
            assert_eq!(ys.iter().filter(|l| l.active).count(), 1);
            assert!(xs.iter().any(|l| l.active && l.field == chart.x().field()));
            assert!(ys.iter().any(|l| l.active && l.field == chart.y().field()));
        }
    }

    #[test]
    fn tooltip_follows_chosen_fields() {
        let mut chart = chart();
        let tip = chart.tooltip(0).unwrap();
        assert_eq!(tip.title, "Alabama");
        assert_eq!(tip.x_line, "Poverty Rate: 19.3%");
        assert_eq!(tip.y_line, "Lacking Healthcare: 13.9%");

        let now = Instant::now();
        chart.select_x(XField::Income, now);
        chart.select_y(YField::Obesity, now);
        let tip = chart.tooltip(0).unwrap();
        assert_eq!(tip.x_line, "Median Household Income: $42,830");
        assert_eq!(tip.y_line, "Obesity Rate: 33.5%");
        assert_eq!(tip.text(), "Alabama\nMedian Household Income: $42,830\nObesity Rate: 33.5%");

        assert!(chart.tooltip(99).is_none());
    }

    #[test]
    fn age_tooltip_has_no_unit() {
        let mut chart = chart();
        chart.select_x(XField::Age, Instant::now());
        assert_eq!(chart.tooltip(3).unwrap().x_line, "Median Age: 30.5");
    }

    #[test]
    fn keyboard_hover_walks_x_order() {
        let mut chart = chart();
        // Poverty ascending: Alaska 11.2, Utah 11.7, Arizona 18.2, Alabama 19.3.
        chart.hover_next();
        assert_eq!(chart.hovered(), Some(1));
        chart.hover_next();
        assert_eq!(chart.hovered(), Some(3));
        chart.hover_prev();
        chart.hover_prev();
        assert_eq!(chart.hovered(), Some(0));
        chart.clear_hover();
        assert!(chart.hovered_tooltip().is_none());
        chart.hover_prev();
        assert_eq!(chart.hovered(), Some(0));
    }

    #[test]
    fn hover_ignores_out_of_range() {
        let mut chart = chart();
        chart.hover(42);
        assert_eq!(chart.hovered(), None);
    }

    #[test]
    fn hit_test_finds_nearest_point() {
        let chart = chart();
        let now = Instant::now();
        let positions = chart.point_positions(now);
        let (x, y) = positions[2];
        assert_eq!(chart.hit_test((x + 0.001, y), (0.02, 0.05), now), Some(2));
        assert_eq!(chart.hit_test((-5.0, -5.0), (0.02, 0.05), now), None);
    }

    #[test]
    fn ticks_stay_inside_axis_during_transition() {
        let mut chart = chart();
        let t0 = Instant::now();
        chart.select_x(XField::Income, t0);
        for ms in [0u64, 400, 1000, 1600, 2000] {
            let ticks = chart.axis_ticks_x(t0 + Duration::from_millis(ms), 10);
            assert!(ticks.iter().all(|t| (0.0..=1.0).contains(&t.position)));
        }
        let settled = chart.axis_ticks_x(t0 + Duration::from_millis(2000), 10);
        assert!(!settled.is_empty());
        assert!(settled.iter().all(|t| t.value % 5000.0 == 0.0));
    }

    #[test]
    fn axis_keeps_ticks_through_disjoint_switch() {
        let mut chart = chart();
        let t0 = Instant::now();
        let before: Vec<f64> = chart.axis_ticks_x(t0, 10).iter().map(|t| t.value).collect();
        chart.select_x(XField::Income, t0);

        let start: Vec<f64> = chart.axis_ticks_x(t0, 10).iter().map(|t| t.value).collect();
        assert_eq!(start, before);

        for ms in (0..=2000u64).step_by(50) {
            let ticks = chart.axis_ticks_x(t0 + Duration::from_millis(ms), 10);
            assert!(!ticks.is_empty(), "no ticks at {ms} ms");
            assert!(ticks.windows(2).all(|w| w[0].position <= w[1].position));
            assert_eq!(ticks.iter().all(|t| t.moving), ms < 2000);
        }

        let end = chart.axis_ticks_x(t0 + Duration::from_millis(2000), 10);
        let expected = chart.x().scale().ticks(10);
        assert_eq!(end.iter().map(|t| t.value).collect::<Vec<_>>(), expected);
        assert_eq!(end[0].label, "35,000");
    }

    #[test]
    fn zero_duration_switches_instantly() {
        let config = ChartConfig {
            transition: Duration::ZERO,
            ..ChartConfig::default()
        };
        let mut chart = ChartState::new(sample(), &config, XField::Poverty, YField::Healthcare);
        let now = Instant::now();
        chart.select_y(YField::Smokes, now);
        assert!(!chart.is_animating(now));
        assert_eq!(chart.point_positions(now), chart.target_positions());
    }
}
