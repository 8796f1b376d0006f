// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/overlay.rs
//
// Region overlay widget: draggable question bands and the width band,
// drawn over the sheet image and hit-tested in image space.

use cosmic::{
    Element, Renderer,
    iced::{
        Color, Length, Point, Rectangle, Size,
        advanced::{
            Clipboard, Layout, Shell, Widget,
            layout::{Limits, Node},
            renderer::{Quad, Renderer as QuadRenderer},
            widget::Tree,
        },
        event::{Event, Status},
        mouse::{self, Button, Cursor},
    },
};

use crate::app::message::AppMessage;
use crate::app::region::{BandHandle, DragTarget, RegionId, RegionSet};

const EDGE_HIT_SIZE: f32 = 16.0;
const EDGE_WIDTH: f32 = 2.0;
const EDGE_COLOR: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.9);
const Y_BAND_COLOR: Color = Color::from_rgba(0.0, 0.39, 1.0, 0.24);
const Y_BAND_SELECTED_COLOR: Color = Color::from_rgba(0.0, 0.39, 1.0, 0.45);
const X_BAND_COLOR: Color = Color::from_rgba(1.0, 0.55, 0.0, 0.24);

#[derive(Clone, Copy)]
struct Band {
    id: RegionId,
    top: f32,
    bottom: f32,
}

pub struct RegionOverlay {
    img_width: u32,
    img_height: u32,
    bands: Vec<Band>,
    x_band: Option<(f32, f32)>,
    selected: Option<RegionId>,
    active: Option<DragTarget>,
}

impl RegionOverlay {
    pub fn new(
        img_width: u32,
        img_height: u32,
        regions: &RegionSet,
        selected: Option<RegionId>,
        active: Option<DragTarget>,
    ) -> Self {
        Self {
            img_width,
            img_height,
            bands: regions
                .iter()
                .map(|r| Band {
                    id: r.id(),
                    top: r.top,
                    bottom: r.bottom,
                })
                .collect(),
            x_band: regions.x_region().map(|x| (x.left, x.right)),
            selected,
            active,
        }
    }

    /// Scale that fits the image into the widget, matching `ContentFit::Contain`.
    fn fit_scale(&self, bounds: &Rectangle) -> f32 {
        let scale_x = bounds.width / self.img_width as f32;
        let scale_y = bounds.height / self.img_height as f32;
        scale_x.min(scale_y)
    }

    /// Screen rectangle the (centered) image occupies.
    fn image_rect(&self, bounds: &Rectangle) -> Rectangle {
        let scale = self.fit_scale(bounds);
        let w = self.img_width as f32 * scale;
        let h = self.img_height as f32 * scale;
        Rectangle::new(
            Point::new(
                bounds.x + (bounds.width - w) / 2.0,
                bounds.y + (bounds.height - h) / 2.0,
            ),
            Size::new(w, h),
        )
    }

    fn screen_to_image(&self, bounds: &Rectangle, point: Point) -> (f32, f32) {
        let scale = self.fit_scale(bounds);
        let rect = self.image_rect(bounds);
        let x = ((point.x - rect.x) / scale)
            .max(0.0)
            .min(self.img_width as f32);
        let y = ((point.y - rect.y) / scale)
            .max(0.0)
            .min(self.img_height as f32);
        (x, y)
    }

    fn image_to_screen(&self, bounds: &Rectangle, img_x: f32, img_y: f32) -> Point {
        let scale = self.fit_scale(bounds);
        let rect = self.image_rect(bounds);
        Point::new(rect.x + img_x * scale, rect.y + img_y * scale)
    }

    /// Find what a press at `point` grabs. Edges win over interiors, and the
    /// width band's edges win over question-band edges since it is drawn on
    /// top; among question bands the most recently created wins.
    fn hit_test(&self, bounds: &Rectangle, point: Point) -> Option<DragTarget> {
        let rect = self.image_rect(bounds);
        if !rect.contains(point) {
            return None;
        }

        if let Some((left, right)) = self.x_band {
            if let Some(handle) = edge_hit(
                point.x,
                self.image_to_screen(bounds, left, 0.0).x,
                self.image_to_screen(bounds, right, 0.0).x,
            ) {
                return Some(DragTarget::X { handle });
            }
        }

        for band in self.bands.iter().rev() {
            if let Some(handle) = edge_hit(
                point.y,
                self.image_to_screen(bounds, 0.0, band.top).y,
                self.image_to_screen(bounds, 0.0, band.bottom).y,
            ) {
                return Some(DragTarget::Y {
                    id: band.id,
                    handle,
                });
            }
        }

        for band in self.bands.iter().rev() {
            let y1 = self.image_to_screen(bounds, 0.0, band.top.min(band.bottom)).y;
            let y2 = self.image_to_screen(bounds, 0.0, band.top.max(band.bottom)).y;
            if point.y >= y1 && point.y <= y2 {
                return Some(DragTarget::Y {
                    id: band.id,
                    handle: BandHandle::Move,
                });
            }
        }

        if let Some((left, right)) = self.x_band {
            let x1 = self.image_to_screen(bounds, left.min(right), 0.0).x;
            let x2 = self.image_to_screen(bounds, left.max(right), 0.0).x;
            if point.x >= x1 && point.x <= x2 {
                return Some(DragTarget::X {
                    handle: BandHandle::Move,
                });
            }
        }

        None
    }

    fn cursor_for(&self, target: DragTarget, dragging: bool) -> mouse::Interaction {
        match target {
            DragTarget::Y { handle, .. } => match handle {
                BandHandle::Start | BandHandle::End => mouse::Interaction::ResizingVertically,
                BandHandle::Move if dragging => mouse::Interaction::Grabbing,
                BandHandle::Move => mouse::Interaction::Grab,
            },
            DragTarget::X { handle } => match handle {
                BandHandle::Start | BandHandle::End => mouse::Interaction::ResizingHorizontally,
                BandHandle::Move if dragging => mouse::Interaction::Grabbing,
                BandHandle::Move => mouse::Interaction::Grab,
            },
        }
    }

    fn draw_bands(&self, renderer: &mut Renderer, bounds: &Rectangle) {
        let rect = self.image_rect(bounds);

        for band in &self.bands {
            let p1 = self.image_to_screen(bounds, 0.0, band.top.min(band.bottom));
            let p2 = self.image_to_screen(bounds, 0.0, band.top.max(band.bottom));

            let fill = if self.selected == Some(band.id) {
                Y_BAND_SELECTED_COLOR
            } else {
                Y_BAND_COLOR
            };
            draw_quad(
                renderer,
                Rectangle::new(
                    Point::new(rect.x, p1.y),
                    Size::new(rect.width, p2.y - p1.y),
                ),
                fill,
            );

            for y in [p1.y, p2.y - EDGE_WIDTH] {
                draw_quad(
                    renderer,
                    Rectangle::new(Point::new(rect.x, y), Size::new(rect.width, EDGE_WIDTH)),
                    EDGE_COLOR,
                );
            }
        }

        if let Some((left, right)) = self.x_band {
            let p1 = self.image_to_screen(bounds, left.min(right), 0.0);
            let p2 = self.image_to_screen(bounds, left.max(right), 0.0);

            draw_quad(
                renderer,
                Rectangle::new(
                    Point::new(p1.x, rect.y),
                    Size::new(p2.x - p1.x, rect.height),
                ),
                X_BAND_COLOR,
            );

            for x in [p1.x, p2.x - EDGE_WIDTH] {
                draw_quad(
                    renderer,
                    Rectangle::new(Point::new(x, rect.y), Size::new(EDGE_WIDTH, rect.height)),
                    EDGE_COLOR,
                );
            }
        }
    }
}

impl Widget<AppMessage, cosmic::Theme, Renderer> for RegionOverlay {
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn layout(&self, _tree: &mut Tree, _renderer: &Renderer, limits: &Limits) -> Node {
        Node::new(limits.max())
    }

    fn draw(
        &self,
        _tree: &Tree,
        renderer: &mut Renderer,
        _theme: &cosmic::Theme,
        _style: &cosmic::iced::advanced::renderer::Style,
        layout: Layout<'_>,
        _cursor: Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        self.draw_bands(renderer, &bounds);
    }

    fn on_event(
        &mut self,
        _tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, AppMessage>,
        _viewport: &Rectangle,
    ) -> Status {
        let bounds = layout.bounds();

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(Button::Left)) => {
                if let Some(pos) = cursor.position_in(bounds) {
                    let pos = Point::new(pos.x + bounds.x, pos.y + bounds.y);
                    match self.hit_test(&bounds, pos) {
                        Some(target) => {
                            let (img_x, img_y) = self.screen_to_image(&bounds, pos);
                            shell.publish(AppMessage::RegionDragStart {
                                target,
                                x: img_x,
                                y: img_y,
                            });
                            return Status::Captured;
                        }
                        None => {
                            // Pressing empty canvas clears the selection.
                            shell.publish(AppMessage::SelectRegion(None));
                        }
                    }
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                if self.active.is_some()
                    && let Some(pos) = cursor.position_in(bounds)
                {
                    let pos = Point::new(pos.x + bounds.x, pos.y + bounds.y);
                    let (img_x, img_y) = self.screen_to_image(&bounds, pos);
                    shell.publish(AppMessage::RegionDragMove { x: img_x, y: img_y });
                    return Status::Captured;
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(Button::Left)) => {
                if self.active.is_some() {
                    shell.publish(AppMessage::RegionDragEnd);
                    return Status::Captured;
                }
            }
            _ => {}
        }

        Status::Ignored
    }

    fn mouse_interaction(
        &self,
        _tree: &Tree,
        layout: Layout<'_>,
        cursor: Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        if let Some(target) = self.active {
            return self.cursor_for(target, true);
        }

        let bounds = layout.bounds();
        if let Some(pos) = cursor.position_in(bounds) {
            let pos = Point::new(pos.x + bounds.x, pos.y + bounds.y);
            if let Some(target) = self.hit_test(&bounds, pos) {
                return self.cursor_for(target, false);
            }
        }

        mouse::Interaction::default()
    }
}

impl<'a> From<RegionOverlay> for Element<'a, AppMessage> {
    fn from(overlay: RegionOverlay) -> Self {
        Self::new(overlay)
    }
}

/// Which edge of a band, if any, a screen coordinate grabs.
/// Prefers the nearer edge when a band is thin enough for the zones to overlap.
fn edge_hit(coord: f32, start: f32, end: f32) -> Option<BandHandle> {
    let half = EDGE_HIT_SIZE / 2.0;
    let d_start = (coord - start).abs();
    let d_end = (coord - end).abs();

    if d_start <= half && d_start <= d_end {
        Some(BandHandle::Start)
    } else if d_end <= half {
        Some(BandHandle::End)
    } else {
        None
    }
}

fn draw_quad(renderer: &mut Renderer, bounds: Rectangle, color: Color) {
    renderer.fill_quad(
        Quad {
            bounds,
            ..Quad::default()
        },
        color,
    );
}

pub fn region_overlay(
    img_width: u32,
    img_height: u32,
    regions: &RegionSet,
    selected: Option<RegionId>,
    active: Option<DragTarget>,
) -> RegionOverlay {
    RegionOverlay::new(img_width, img_height, regions, selected, active)
}
