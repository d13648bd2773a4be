//! Raster renderer for plans.
//!
//! Repaints the whole plan into a `tiny-skia` pixmap on every call, in a
//! fixed layer order: background, backdrop image, grid, rooms, elements,
//! measurements, then the editing overlay. Labels are rasterized with
//! `rusttype`.

use image::{ImageEncoder, RgbaImage};
use rusttype::{point as rt_point, Font, Scale};
use siteplan_core::constants::{BACKDROP_OPACITY, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
use siteplan_core::ExportError;
use std::path::Path;
use tiny_skia::{
    Color, ColorU8, FillRule, Paint, PathBuilder, Pixmap, PixmapPaint, Rect, Stroke, StrokeDash,
    Transform,
};

use crate::backdrop::Backdrop;
use crate::editor::{GesturePreview, Overlay};
use crate::font_manager;
use crate::grid::grid_lines;
use crate::model::{
    DrawElement, Fixture, FixtureKind, PlanDocument, PolyLine, FIXTURE_HEIGHT, FIXTURE_WIDTH,
};

const GRID_WIDTH: f32 = 0.5;
const ROOM_STROKE_WIDTH: f32 = 2.0;
const LINE_WIDTH: f32 = 3.0;
const MEASURE_WIDTH: f32 = 3.0;
const FIXTURE_OUTLINE_WIDTH: f32 = 1.0;
const ROOM_LABEL_OFFSET: (f32, f32) = (5.0, 15.0);
const SELECTION_PADDING: f32 = 4.0;

fn background_color() -> ColorU8 {
    ColorU8::from_rgba(255, 255, 255, 255)
}
fn grid_color() -> ColorU8 {
    ColorU8::from_rgba(0xe0, 0xe0, 0xe0, 255)
}
fn room_fill_color() -> ColorU8 {
    ColorU8::from_rgba(200, 220, 255, 77)
}
fn room_stroke_color() -> ColorU8 {
    ColorU8::from_rgba(0x4a, 0x90, 0xe2, 255)
}
fn ink_color() -> ColorU8 {
    ColorU8::from_rgba(0x33, 0x33, 0x33, 255)
}
fn door_color() -> ColorU8 {
    ColorU8::from_rgba(0x8b, 0x45, 0x13, 255)
}
fn window_color() -> ColorU8 {
    ColorU8::from_rgba(0x87, 0xce, 0xeb, 255)
}
fn measure_color() -> ColorU8 {
    ColorU8::from_rgba(0xff, 0x44, 0x44, 255)
}
fn selection_color() -> ColorU8 {
    ColorU8::from_rgba(255, 165, 0, 255)
}

fn to_color(c: ColorU8) -> Color {
    Color::from_rgba8(c.red(), c.green(), c.blue(), c.alpha())
}

fn paint(c: ColorU8) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(to_color(c));
    paint.anti_alias = true;
    paint
}

fn stroke(width: f32) -> Stroke {
    Stroke {
        width,
        ..Default::default()
    }
}

fn dashed(width: f32) -> Stroke {
    Stroke {
        width,
        dash: StrokeDash::new(vec![4.0, 4.0], 0.0),
        ..Default::default()
    }
}

/// Appearance options.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub show_grid: bool,
    pub backdrop_opacity: f32,
    pub label_font_family: String,
    pub room_label_size: f32,
    pub measurement_label_size: f32,
    /// Whether labels are drawn at all.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_grid: true,
            backdrop_opacity: BACKDROP_OPACITY,
            label_font_family: "Arial".to_string(),
            room_label_size: 12.0,
            measurement_label_size: 10.0,
            draw_labels: true,
        }
    }
}

/// Owns the drawing surface a plan is painted on.
#[derive(Debug)]
pub struct PlanRenderer {
    pixmap: Pixmap,
    backdrop: Option<Backdrop>,
    options: RenderOptions,
}

impl PlanRenderer {
    pub fn new(width: u32, height: u32) -> Result<Self, ExportError> {
        Self::with_options(width, height, RenderOptions::default())
    }

    /// Renderer for the default 800x600 canvas.
    pub fn default_canvas() -> Result<Self, ExportError> {
        Self::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
    }

    pub fn with_options(
        width: u32,
        height: u32,
        options: RenderOptions,
    ) -> Result<Self, ExportError> {
        let pixmap = Pixmap::new(width, height).ok_or(ExportError::Surface { width, height })?;
        Ok(Self {
            pixmap,
            backdrop: None,
            options,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: RenderOptions) {
        self.options = options;
    }

    /// Lays an image under the plan. It is stretched to the surface size.
    pub fn set_backdrop(&mut self, backdrop: Option<Backdrop>) {
        self.backdrop = backdrop;
    }

    pub fn has_backdrop(&self) -> bool {
        self.backdrop.is_some()
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Repaints the whole surface from `doc`, plus the editing overlay if given.
    pub fn render(&mut self, doc: &PlanDocument, overlay: Option<&Overlay>) {
        self.pixmap.fill(to_color(background_color()));
        self.draw_backdrop();
        if self.options.show_grid {
            self.draw_grid(doc.grid_pitch());
        }

        let font = if self.options.draw_labels {
            font_manager::get_font_for(&self.options.label_font_family)
        } else {
            None
        };

        for room in doc.rooms() {
            let (x, y) = (room.origin.x as f32, room.origin.y as f32);
            if let Some(rect) = Rect::from_xywh(x, y, room.width as f32, room.height as f32) {
                let path = PathBuilder::from_rect(rect);
                self.pixmap.fill_path(
                    &path,
                    &paint(room_fill_color()),
                    FillRule::Winding,
                    Transform::identity(),
                    None,
                );
                self.pixmap.stroke_path(
                    &path,
                    &paint(room_stroke_color()),
                    &stroke(ROOM_STROKE_WIDTH),
                    Transform::identity(),
                    None,
                );
            }
            if let Some(font) = font {
                self.draw_text(
                    font,
                    &room.name,
                    x + ROOM_LABEL_OFFSET.0,
                    y + ROOM_LABEL_OFFSET.1,
                    self.options.room_label_size,
                    ink_color(),
                );
            }
        }

        for element in doc.elements() {
            match element {
                DrawElement::Line(line) => self.draw_line(line),
                DrawElement::Fixture(fixture) => self.draw_fixture(fixture),
            }
        }

        for m in doc.measurements() {
            self.stroke_segment(
                (m.from.x as f32, m.from.y as f32),
                (m.to.x as f32, m.to.y as f32),
                &stroke(MEASURE_WIDTH),
                measure_color(),
            );
            if let Some(font) = font {
                let (mx, my) = m.label_anchor();
                self.draw_text(
                    font,
                    &m.display_label(),
                    mx as f32,
                    my as f32,
                    self.options.measurement_label_size,
                    measure_color(),
                );
            }
        }

        if let Some(overlay) = overlay {
            self.draw_overlay(overlay);
        }
    }

    fn draw_backdrop(&mut self) {
        let Some(backdrop) = &self.backdrop else {
            return;
        };
        let source = backdrop.pixmap();
        let sx = self.pixmap.width() as f32 / source.width() as f32;
        let sy = self.pixmap.height() as f32 / source.height() as f32;
        let pixmap_paint = PixmapPaint {
            opacity: self.options.backdrop_opacity.clamp(0.0, 1.0),
            ..Default::default()
        };
        self.pixmap.draw_pixmap(
            0,
            0,
            source.as_ref(),
            &pixmap_paint,
            Transform::from_scale(sx, sy),
            None,
        );
    }

    fn draw_grid(&mut self, pitch: u32) {
        let (w, h) = (self.pixmap.width(), self.pixmap.height());
        let lines = grid_lines(w, h, pitch);
        let mut pb = PathBuilder::new();
        for x in &lines.vertical {
            pb.move_to(*x as f32, 0.0);
            pb.line_to(*x as f32, h as f32);
        }
        for y in &lines.horizontal {
            pb.move_to(0.0, *y as f32);
            pb.line_to(w as f32, *y as f32);
        }
        if let Some(path) = pb.finish() {
            self.pixmap.stroke_path(
                &path,
                &paint(grid_color()),
                &stroke(GRID_WIDTH),
                Transform::identity(),
                None,
            );
        }
    }

    fn draw_line(&mut self, line: &PolyLine) {
        if !line.is_renderable() {
            return;
        }
        let mut pb = PathBuilder::new();
        let points = line.points();
        pb.move_to(points[0].x as f32, points[0].y as f32);
        for p in &points[1..] {
            pb.line_to(p.x as f32, p.y as f32);
        }
        if let Some(path) = pb.finish() {
            self.pixmap.stroke_path(
                &path,
                &paint(ink_color()),
                &stroke(LINE_WIDTH),
                Transform::identity(),
                None,
            );
        }
    }

    fn draw_fixture(&mut self, fixture: &Fixture) {
        let (x, y) = (fixture.position.x as f32, fixture.position.y as f32);
        let Some(rect) = Rect::from_xywh(x, y, FIXTURE_WIDTH as f32, FIXTURE_HEIGHT as f32) else {
            return;
        };
        let fill = match fixture.kind {
            FixtureKind::Door => door_color(),
            FixtureKind::Window => window_color(),
        };
        let path = PathBuilder::from_rect(rect);
        self.pixmap
            .fill_path(&path, &paint(fill), FillRule::Winding, Transform::identity(), None);
        self.pixmap.stroke_path(
            &path,
            &paint(ink_color()),
            &stroke(FIXTURE_OUTLINE_WIDTH),
            Transform::identity(),
            None,
        );
        if fixture.kind == FixtureKind::Window {
            let tick_x = x + FIXTURE_WIDTH as f32 / 2.0;
            self.stroke_segment(
                (tick_x, y),
                (tick_x, y + FIXTURE_HEIGHT as f32),
                &stroke(FIXTURE_OUTLINE_WIDTH),
                ink_color(),
            );
        }
    }

    fn draw_overlay(&mut self, overlay: &Overlay) {
        if let Some((x1, y1, x2, y2)) = overlay.selection {
            let rect = Rect::from_ltrb(
                x1 as f32 - SELECTION_PADDING,
                y1 as f32 - SELECTION_PADDING,
                x2 as f32 + SELECTION_PADDING,
                y2 as f32 + SELECTION_PADDING,
            );
            if let Some(rect) = rect {
                self.stroke_rect(rect, selection_color());
            }
        }
        match &overlay.preview {
            Some(GesturePreview::Room {
                origin,
                width,
                height,
            }) => {
                let rect =
                    Rect::from_xywh(origin.x as f32, origin.y as f32, *width as f32, *height as f32);
                if let Some(rect) = rect {
                    self.stroke_rect(rect, room_stroke_color());
                }
            }
            Some(GesturePreview::Measure { from, to }) => {
                self.stroke_segment(
                    (from.x as f32, from.y as f32),
                    (to.x as f32, to.y as f32),
                    &dashed(1.0),
                    measure_color(),
                );
            }
            None => {}
        }
    }

    fn stroke_rect(&mut self, rect: Rect, color: ColorU8) {
        let path = PathBuilder::from_rect(rect);
        self.pixmap.stroke_path(
            &path,
            &paint(color),
            &dashed(1.0),
            Transform::identity(),
            None,
        );
    }

    fn stroke_segment(&mut self, a: (f32, f32), b: (f32, f32), stroke: &Stroke, color: ColorU8) {
        let mut pb = PathBuilder::new();
        pb.move_to(a.0, a.1);
        pb.line_to(b.0, b.1);
        if let Some(path) = pb.finish() {
            self.pixmap
                .stroke_path(&path, &paint(color), stroke, Transform::identity(), None);
        }
    }

    /// Draws `text` with its baseline starting at `(x, y)`.
    fn draw_text(&mut self, font: &Font<'_>, text: &str, x: f32, y: f32, size: f32, color: ColorU8) {
        let width = self.pixmap.width() as i32;
        let height = self.pixmap.height() as i32;
        let scale = Scale::uniform(size);
        let data = self.pixmap.data_mut();

        for glyph in font.layout(text, scale, rt_point(x, y)) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, coverage| {
                let px = gx as i32 + bb.min.x;
                let py = gy as i32 + bb.min.y;
                if px < 0 || py < 0 || px >= width || py >= height {
                    return;
                }
                let idx = ((py * width + px) * 4) as usize;
                blend(&mut data[idx..idx + 4], color, coverage);
            });
        }
    }

    /// Colour at `(x, y)` as straight (non-premultiplied) RGBA. `None`
    /// outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.pixmap.width() || y >= self.pixmap.height() {
            return None;
        }
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    pub fn to_rgba_image(&self) -> RgbaImage {
        let (w, h) = (self.pixmap.width(), self.pixmap.height());
        let mut data = Vec::with_capacity((w * h * 4) as usize);
        for px in self.pixmap.pixels() {
            let c = px.demultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        RgbaImage::from_raw(w, h, data).unwrap_or_else(|| RgbaImage::new(w, h))
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, ExportError> {
        let img = self.to_rgba_image();
        let mut out = Vec::new();
        image::codecs::png::PngEncoder::new(&mut out)
            .write_image(
                img.as_raw(),
                img.width(),
                img.height(),
                image::ExtendedColorType::Rgba8,
            )
            .map_err(|e| ExportError::Encode {
                reason: e.to_string(),
            })?;
        Ok(out)
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> siteplan_core::Result<()> {
        let bytes = self.encode_png()?;
        std::fs::write(path.as_ref(), bytes)?;
        tracing::info!("Exported plan image to {}", path.as_ref().display());
        Ok(())
    }
}

/// Source-over of an opaque colour at `coverage` onto a premultiplied pixel.
fn blend(dst: &mut [u8], color: ColorU8, coverage: f32) {
    let a = (coverage.clamp(0.0, 1.0) * f32::from(color.alpha()) / 255.0).clamp(0.0, 1.0);
    if a <= 0.0 {
        return;
    }
    let src = [color.red(), color.green(), color.blue()];
    for (d, s) in dst.iter_mut().zip(src) {
        let v = f32::from(s) * a + f32::from(*d) * (1.0 - a);
        *d = v.round().clamp(0.0, 255.0) as u8;
    }
    let da = f32::from(dst[3]) * (1.0 - a);
    dst[3] = (a * 255.0 + da).round().clamp(0.0, 255.0) as u8;
}
