//! Native window that displays a rendered legend.

use eframe::egui;

use crate::error::{LegendError, Result};

/// Window chrome around the image, in logical pixels.
const WINDOW_MARGIN: f32 = 16.0;

struct LegendViewer {
    image: Option<egui::ColorImage>,
    texture: Option<egui::TextureHandle>,
}

impl eframe::App for LegendViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.texture.is_none()
            && let Some(image) = self.image.take()
        {
            self.texture = Some(ctx.load_texture("legend", image, egui::TextureOptions::LINEAR));
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::WHITE))
            .show(ctx, |ui| {
                if let Some(texture) = &self.texture {
                    ui.centered_and_justified(|ui| {
                        ui.image(texture);
                    });
                }
            });
    }
}

/// Open a window showing an RGB image and block until it is closed.
pub fn show_rgb(title: &str, width: u32, height: u32, rgb: &[u8]) -> Result<()> {
    let image = egui::ColorImage::from_rgb([width as usize, height as usize], rgb);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([
                width as f32 + WINDOW_MARGIN,
                height as f32 + WINDOW_MARGIN,
            ])
            .with_title(title),
        ..Default::default()
    };

    eframe::run_native(
        title,
        options,
        Box::new(move |_cc| {
            Ok(Box::new(LegendViewer {
                image: Some(image),
                texture: None,
            }))
        }),
    )
    .map_err(|e| LegendError::Display(e.to_string()))
}
