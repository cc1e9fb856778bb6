// File: crates/stream-render-skia/src/lib.rs
// Summary: Headless rasterisation of stream-core scenes using Skia CPU raster surfaces.

use anyhow::{anyhow, bail, Result};
use log::debug;
use skia_safe as skia;
use stream_core::geometry::{Path, PathCmd};
use stream_core::scene::{Node, Scene, TextAnchor, TextStyle};
use stream_core::Rgba;

pub struct RasterOptions {
    /// Device pixels per logical unit.
    pub scale: f32,
    /// Fill behind the scene; `None` keeps the surface transparent.
    pub background: Option<Rgba>,
    /// Labels depend on installed fonts; snapshot tests turn them off.
    pub draw_labels: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { scale: 1.0, background: Some(Rgba::WHITE), draw_labels: true }
    }
}

pub struct SkiaRenderer {
    opts: RasterOptions,
    fonts: skia::FontMgr,
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new(RasterOptions::default())
    }
}

impl SkiaRenderer {
    pub fn new(opts: RasterOptions) -> Self {
        Self { opts, fonts: skia::FontMgr::default() }
    }

    pub fn options(&self) -> &RasterOptions {
        &self.opts
    }

    /// Pixel size of the raster for `scene`.
    pub fn pixel_size(&self, scene: &Scene) -> (i32, i32) {
        let s = self.opts.scale.max(0.01) as f64;
        (((scene.width * s).ceil() as i32).max(1), ((scene.height * s).ceil() as i32).max(1))
    }

    fn rasterize(&self, scene: &Scene) -> Result<skia::Surface> {
        let (w, h) = self.pixel_size(scene);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow!("failed to create {w}x{h} raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(self.opts.background.map(to_color).unwrap_or(skia::Color::TRANSPARENT));
        canvas.save();
        canvas.scale((self.opts.scale, self.opts.scale));
        for node in &scene.nodes {
            self.draw_node(canvas, node);
        }
        canvas.restore();
        debug!("rasterized scene {}x{} -> {w}x{h}px", scene.width, scene.height);
        Ok(surface)
    }

    /// Encode `scene` as PNG bytes.
    pub fn render_to_png_bytes(&self, scene: &Scene) -> Result<Vec<u8>> {
        let mut surface = self.rasterize(scene)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the scene to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, scene: &Scene, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(scene)?;
        let out = output_png_path.as_ref();
        if let Some(parent) = out.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(out, bytes)?;
        Ok(())
    }

    /// Unpremultiplied RGBA8 pixels: `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&self, scene: &Scene) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.rasterize(scene)?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            bail!("reading back {w}x{h} pixels failed");
        }
        Ok((pixels, w as u32, h as u32, row_bytes))
    }

    fn draw_node(&self, canvas: &skia::Canvas, node: &Node) {
        match node {
            Node::Group(g) => {
                canvas.save();
                canvas.translate((g.translate.0 as f32, g.translate.1 as f32));
                for child in &g.children {
                    self.draw_node(canvas, child);
                }
                canvas.restore();
            }
            Node::Path(p) => {
                let path = to_skia_path(&p.path);
                if let Some(fill) = p.fill {
                    let mut paint = paint(fill);
                    paint.set_style(skia::paint::Style::Fill);
                    canvas.draw_path(&path, &paint);
                }
                if let Some(stroke) = p.stroke {
                    let mut paint = paint(stroke.color);
                    paint.set_style(skia::paint::Style::Stroke);
                    paint.set_stroke_width(stroke.width as f32);
                    canvas.draw_path(&path, &paint);
                }
            }
            Node::Rect(r) => {
                let rect = skia::Rect::from_xywh(r.x as f32, r.y as f32, r.width as f32, r.height as f32);
                canvas.draw_rect(rect, &paint(r.fill));
            }
            Node::Line(l) => {
                let mut paint = paint(l.stroke.color);
                paint.set_style(skia::paint::Style::Stroke);
                paint.set_stroke_width(l.stroke.width as f32);
                canvas.draw_line((l.x1 as f32, l.y1 as f32), (l.x2 as f32, l.y2 as f32), &paint);
            }
            Node::Text(t) => {
                if !self.opts.draw_labels {
                    return;
                }
                let font = self.font(&t.style);
                let (width, _) = font.measure_str(&t.text, None);
                let x = match t.style.anchor {
                    TextAnchor::Start => t.x as f32,
                    TextAnchor::Middle => t.x as f32 - width / 2.0,
                    TextAnchor::End => t.x as f32 - width,
                };
                let y = (t.y + t.dy_em * t.style.font_size) as f32;
                canvas.draw_str(&t.text, (x, y), &font, &paint(t.style.fill));
            }
        }
    }

    fn font(&self, style: &TextStyle) -> skia::Font {
        use skia::font_style::{Slant, Weight, Width};
        let weight = match style.font_weight {
            Some(w) if w >= 600 => Weight::BOLD,
            Some(w) if w >= 500 => Weight::MEDIUM,
            _ => Weight::NORMAL,
        };
        let fs = skia::FontStyle::new(weight, Width::NORMAL, Slant::Upright);
        let size = style.font_size as f32;
        match self.fonts.match_family_style("sans-serif", fs) {
            Some(typeface) => skia::Font::from_typeface(typeface, size),
            None => {
                let mut font = skia::Font::default();
                font.set_size(size);
                font
            }
        }
    }
}

fn to_color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn paint(c: Rgba) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(to_color(c));
    paint
}

fn to_skia_path(path: &Path) -> skia::Path {
    let mut out = skia::Path::new();
    let pt = |p: stream_core::Point| (p.x as f32, p.y as f32);
    for cmd in path.commands() {
        match *cmd {
            PathCmd::MoveTo(p) => {
                out.move_to(pt(p));
            }
            PathCmd::LineTo(p) => {
                out.line_to(pt(p));
            }
            PathCmd::CubicTo(c1, c2, p) => {
                out.cubic_to(pt(c1), pt(c2), pt(p));
            }
            PathCmd::Close => {
                out.close();
            }
        }
    }
    out
}
