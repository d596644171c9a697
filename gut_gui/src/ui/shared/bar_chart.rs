//! Canvas drawing for the horizontal priority bar chart
//!
//! One bar per ranked row, top to bottom in ranking order. Bar length is
//! proportional to priority over the chart's `x_max`, bar color comes from
//! the tier palette. Dashed guides mark the tier thresholds.

use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke, Text};
use iced::{Color, Point, Rectangle, Renderer, Size, Theme};

use gut_core::ranking::{HIGH_THRESHOLD, MEDIUM_THRESHOLD};
use gut_core::ChartSpec;

use crate::Message;

/// Vertical space per bar, in pixels
const ROW_HEIGHT: f32 = 22.0;

/// Space below the bars for the axis and the legend
const FOOTER_HEIGHT: f32 = 48.0;

/// Labels longer than this are cut with `…`
const MAX_LABEL_CHARS: usize = 44;

/// Canvas program for the ranking chart
pub struct BarChart {
    spec: ChartSpec,
}

impl BarChart {
    pub fn new(spec: ChartSpec) -> Self {
        Self { spec }
    }

    /// Canvas height that fits `bars` rows plus the footer
    pub fn height_for(bars: usize) -> f32 {
        bars as f32 * ROW_HEIGHT + FOOTER_HEIGHT
    }

    /// Horizontal offset of `value` inside a plot `width` pixels wide
    fn scale(&self, value: f32, width: f32) -> f32 {
        if self.spec.x_max == 0 {
            return 0.0;
        }
        (value / self.spec.x_max as f32).clamp(0.0, 1.0) * width
    }

    fn short_label(label: &str) -> String {
        if label.chars().count() <= MAX_LABEL_CHARS {
            label.to_string()
        } else {
            let mut cut: String = label.chars().take(MAX_LABEL_CHARS - 1).collect();
            cut.push('…');
            cut
        }
    }

    fn draw_bars(&self, frame: &mut Frame, plot_x: f32, plot_width: f32, text_color: Color) {
        let bar_thickness = ROW_HEIGHT * 0.65;

        for (i, bar) in self.spec.bars.iter().enumerate() {
            let row_y = i as f32 * ROW_HEIGHT;
            let bar_y = row_y + (ROW_HEIGHT - bar_thickness) / 2.0;
            let length = self.scale(bar.priority.value() as f32, plot_width);
            let [r, g, b] = bar.color.rgb_f32();

            frame.fill_text(Text {
                content: format!("{}. {}", bar.id, Self::short_label(&bar.label)),
                position: Point::new(plot_x - 6.0, row_y + 4.0),
                color: text_color,
                size: iced::Pixels(10.0),
                align_x: iced::alignment::Horizontal::Right.into(),
                ..Text::default()
            });

            let rect = Path::rectangle(Point::new(plot_x, bar_y), Size::new(length, bar_thickness));
            frame.fill(&rect, Color::from_rgb(r, g, b));

            frame.fill_text(Text {
                content: bar.priority.to_string(),
                position: Point::new(plot_x + length + 4.0, row_y + 4.0),
                color: text_color,
                size: iced::Pixels(10.0),
                ..Text::default()
            });
        }
    }

    fn draw_axis(&self, frame: &mut Frame, plot_x: f32, plot_width: f32, axis_y: f32, axis_color: Color) {
        let axis = Path::line(Point::new(plot_x, axis_y), Point::new(plot_x + plot_width, axis_y));
        frame.stroke(&axis, Stroke::default().with_color(axis_color).with_width(1.0));

        let step = 25;
        for tick in (0..=self.spec.x_max as u32).step_by(step) {
            let x = plot_x + self.scale(tick as f32, plot_width);
            let mark = Path::line(Point::new(x, axis_y), Point::new(x, axis_y + 4.0));
            frame.stroke(&mark, Stroke::default().with_color(axis_color).with_width(1.0));

            frame.fill_text(Text {
                content: tick.to_string(),
                position: Point::new(x, axis_y + 6.0),
                color: axis_color,
                size: iced::Pixels(9.0),
                align_x: iced::alignment::Horizontal::Center.into(),
                ..Text::default()
            });
        }

        frame.fill_text(Text {
            content: self.spec.x_field.to_string(),
            position: Point::new(plot_x + plot_width, axis_y + 18.0),
            color: axis_color,
            size: iced::Pixels(9.0),
            align_x: iced::alignment::Horizontal::Right.into(),
            ..Text::default()
        });
    }

    fn draw_thresholds(&self, frame: &mut Frame, plot_x: f32, plot_width: f32, axis_y: f32, color: Color) {
        for threshold in [MEDIUM_THRESHOLD, HIGH_THRESHOLD] {
            let x = plot_x + self.scale(threshold as f32, plot_width);
            // Dashed guide built from short segments
            let guide = Path::new(|builder| {
                let mut y = 0.0;
                while y < axis_y {
                    builder.move_to(Point::new(x, y));
                    builder.line_to(Point::new(x, (y + 4.0).min(axis_y)));
                    y += 8.0;
                }
            });
            frame.stroke(&guide, Stroke::default().with_color(color).with_width(1.0));
        }
    }

    fn draw_legend(&self, frame: &mut Frame, x: f32, y: f32, text_color: Color) {
        frame.fill_text(Text {
            content: format!("{}:", self.spec.color_field),
            position: Point::new(x, y),
            color: text_color,
            size: iced::Pixels(10.0),
            ..Text::default()
        });

        let mut cursor_x = x + 60.0;
        for (label, color) in self.spec.legend() {
            let [r, g, b] = color.rgb_f32();
            let swatch = Path::rectangle(Point::new(cursor_x, y + 1.0), Size::new(10.0, 10.0));
            frame.fill(&swatch, Color::from_rgb(r, g, b));

            frame.fill_text(Text {
                content: label.to_string(),
                position: Point::new(cursor_x + 14.0, y),
                color: text_color,
                size: iced::Pixels(10.0),
                ..Text::default()
            });
            cursor_x += 90.0;
        }
    }
}

impl canvas::Program<Message> for BarChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let text_color = theme.extended_palette().background.base.text;
        let axis_color = Color::from_rgb(0.5, 0.5, 0.5);
        let guide_color = Color::from_rgba(0.5, 0.5, 0.5, 0.6);

        // Layout: labels on the left, bars on the right, axis and legend below
        let label_area = (bounds.width * 0.45).min(320.0);
        let value_margin = 30.0;
        let plot_x = label_area;
        let plot_width = (bounds.width - label_area - value_margin).max(0.0);
        let axis_y = self.spec.bars.len() as f32 * ROW_HEIGHT;

        self.draw_thresholds(&mut frame, plot_x, plot_width, axis_y, guide_color);
        self.draw_bars(&mut frame, plot_x, plot_width, text_color);
        self.draw_axis(&mut frame, plot_x, plot_width, axis_y, axis_color);
        self.draw_legend(&mut frame, plot_x, axis_y + 32.0, text_color);

        vec![frame.into_geometry()]
    }
}
