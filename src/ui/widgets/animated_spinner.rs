// SPDX-License-Identifier: MPL-2.0
//! Canvas spinner shown while the gallery list is being refreshed.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};

/// Radians advanced per animation tick.
pub const ROTATION_STEP: f32 = 0.15;

const ARC_SEGMENTS: u16 = 30;
const STROKE_WIDTH: f32 = 3.0;

/// Advances `rotation` by one tick, wrapping at a full turn.
#[must_use]
pub fn next_rotation(rotation: f32) -> f32 {
    (rotation + ROTATION_STEP) % TAU
}

/// Half-circle arc that rotates with each redraw.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::ICON_MD,
        }
    }

    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

/// Points along the visible arc, starting at the top when `rotation` is 0.
fn arc_points(center: Point, radius: f32, rotation: f32) -> Vec<Point> {
    let start = rotation - PI / 2.0;
    (0..=ARC_SEGMENTS)
        .map(|i| {
            let angle = start + PI * f32::from(i) / f32::from(ARC_SEGMENTS);
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default().with_width(STROKE_WIDTH).with_color(Color {
                        a: 0.25,
                        ..self.color
                    }),
                );

                let points = arc_points(center, radius, self.rotation);
                let mut arc = canvas::path::Builder::new();
                if let Some((first, rest)) = points.split_first() {
                    arc.move_to(*first);
                    for point in rest {
                        arc.line_to(*point);
                    }
                }

                frame.stroke(
                    &arc.build(),
                    Stroke::default()
                        .with_width(STROKE_WIDTH)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}
