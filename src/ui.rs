use eframe::egui::{
    self, Color32, ColorImage, Key, Pos2, Sense, Stroke, TextureHandle, TextureOptions,
    ViewportBuilder, ViewportCommand,
};
use log::error;
use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};

use crate::session::AnnotationSession;
use crate::types::{BBox, DataDirs};

const BOX_STROKE: Stroke = Stroke {
    width: 2.0,
    color: Color32::GREEN,
};
const CENTER_RADIUS: f32 = 3.0;

/// One loaded image together with its in-progress annotation state.
struct CurrentImage {
    session: AnnotationSession,
    texture: TextureHandle,
    width: u32,
    height: u32,
}

/// Modal annotation window over a queue of unlabeled images.
///
/// Each image is a session of its own: closing the window persists (or
/// discards) the current session and loads the next image; the window only
/// really closes once the queue is empty.
struct AnnotateApp {
    dirs: DataDirs,
    queue: VecDeque<PathBuf>,
    current: Option<CurrentImage>,
}

impl AnnotateApp {
    fn new(dirs: DataDirs, img_files: Vec<PathBuf>) -> Self {
        AnnotateApp {
            dirs,
            queue: img_files.into(),
            current: None,
        }
    }

    fn load_next_image(&mut self, ctx: &egui::Context) {
        while let Some(img_file) = self.queue.pop_front() {
            match load_image_to_texture(ctx, &img_file) {
                Ok((texture, width, height)) => {
                    let session = AnnotationSession::new(&img_file, &self.dirs, width, height);
                    ctx.send_viewport_cmd(ViewportCommand::Title(format!(
                        "annotate - {}",
                        img_file.display()
                    )));
                    ctx.send_viewport_cmd(ViewportCommand::InnerSize(egui::vec2(
                        width as f32,
                        height as f32,
                    )));
                    self.current = Some(CurrentImage {
                        session,
                        texture,
                        width,
                        height,
                    });
                    return;
                }
                Err(e) => {
                    error!("Failed to load image {}: {}", img_file.display(), e);
                }
            }
        }
        self.current = None;
    }

    fn finish_current(&mut self) {
        if let Some(mut current) = self.current.take() {
            if let Err(e) = current.session.finish() {
                error!(
                    "Failed to save annotation for {}: {}",
                    current.session.img_file().display(),
                    e
                );
            }
        }
    }
}

impl eframe::App for AnnotateApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.current.is_none() {
            self.load_next_image(ctx);
            if self.current.is_none() {
                ctx.send_viewport_cmd(ViewportCommand::Close);
                return;
            }
        }

        // Closing the window ends the session for the current image only;
        // the next image reuses the same window.
        if ctx.input(|i| i.viewport().close_requested()) {
            self.finish_current();
            if !self.queue.is_empty() {
                ctx.send_viewport_cmd(ViewportCommand::CancelClose);
            }
            return;
        }

        let current = self.current.as_mut().expect("No image loaded");

        if ctx.input(|i| i.key_pressed(Key::U)) {
            current.session.undo();
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let response = ui.add(
                    egui::Image::new(&current.texture)
                        .fit_to_exact_size(ui.available_size())
                        .sense(Sense::click()),
                );
                let rect = response.rect;

                // Widget coordinates -> image pixel coordinates
                let scale_x = current.width as f32 / rect.width();
                let scale_y = current.height as f32 / rect.height();

                if response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        let x = ((pos.x - rect.min.x) * scale_x) as f64;
                        let y = ((pos.y - rect.min.y) * scale_y) as f64;
                        current.session.click(x, y);
                    }
                }

                let to_screen = |x: f64, y: f64| {
                    Pos2::new(
                        rect.min.x + x as f32 / scale_x,
                        rect.min.y + y as f32 / scale_y,
                    )
                };

                let painter = ui.painter_at(rect);
                for bbox in current.session.boxes() {
                    draw_bbox(&painter, bbox, &to_screen);
                }
            });
    }
}

/// Render a box as its four border segments plus a center point marker.
fn draw_bbox(painter: &egui::Painter, bbox: &BBox, to_screen: &impl Fn(f64, f64) -> Pos2) {
    let (x_min, y_min) = (bbox.x_min as f64, bbox.y_min as f64);
    let (x_max, y_max) = (bbox.x_max as f64, bbox.y_max as f64);

    painter.line_segment([to_screen(x_min, y_min), to_screen(x_max, y_min)], BOX_STROKE);
    painter.line_segment([to_screen(x_min, y_max), to_screen(x_max, y_max)], BOX_STROKE);
    painter.line_segment([to_screen(x_min, y_min), to_screen(x_min, y_max)], BOX_STROKE);
    painter.line_segment([to_screen(x_max, y_min), to_screen(x_max, y_max)], BOX_STROKE);

    let (cx, cy) = bbox.center();
    painter.circle_filled(to_screen(cx, cy), CENTER_RADIUS, Color32::BLUE);
}

fn load_image_to_texture(
    ctx: &egui::Context,
    path: &Path,
) -> Result<(TextureHandle, u32, u32), String> {
    let img = image::open(path).map_err(|e| e.to_string())?;
    let (width, height) = (img.width(), img.height());
    let image_buffer = img.to_rgba8();
    let pixels = image_buffer.as_flat_samples();
    let color_image =
        ColorImage::from_rgba_unmultiplied([width as usize, height as usize], pixels.as_slice());
    let texture = ctx.load_texture(
        path.to_string_lossy().to_string(),
        color_image,
        TextureOptions::LINEAR,
    );
    Ok((texture, width, height))
}

/// Open the annotation window and work through the images one session at a
/// time. Blocks until the last session is closed.
pub fn run_annotation_batch(dirs: &DataDirs, img_files: Vec<PathBuf>) -> io::Result<()> {
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_title("annotate"),
        ..Default::default()
    };

    let app = AnnotateApp::new(dirs.clone(), img_files);
    eframe::run_native("annotate", options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|e| io::Error::other(e.to_string()))
}
