use std::time::Instant;

use core::{DiamondSquare2D, flatten2, utils::to_terrain_image};
use eframe::{App, Frame, NativeOptions, egui, run_native};
use egui::{ColorImage, Rect, Sense, TextureHandle, Vec2, pos2};

struct TerrainApp {
    // parameters
    // slider is for n; size = 2^n + 1
    exp: u32,
    seed: u64,
    roughness: f64,
    roughness_text: String,

    // view-only parameters: neither touches the generator
    scale: u32,
    offset: Vec2,

    generator: Option<DiamondSquare2D>,

    // generated texture
    terrain_texture: Option<TextureHandle>,

    // timing & status
    last_duration: Option<f32>,
    status_message: String,

    // Store the last RGB buffer
    last_flat: Option<Vec<u8>>,
    // Stores last size of the generated terrain
    last_size: usize,
}

impl Default for TerrainApp {
    fn default() -> Self {
        Self {
            exp: 7, // 2^7 + 1 = 129
            seed: 2025,
            roughness: 1.0,
            roughness_text: "1.0".to_string(),
            scale: 1,
            offset: Vec2::ZERO,
            generator: None,
            terrain_texture: None,
            last_duration: None,
            status_message: String::new(),
            last_flat: None,
            last_size: 129,
        }
    }
}

impl TerrainApp {
    // Build a fresh generator for the current size/seed/roughness
    fn regenerate(&mut self, ctx: &egui::Context, size: usize) {
        let start = Instant::now();
        match DiamondSquare2D::new(size, self.seed, self.roughness) {
            Ok(generator) => {
                self.generator = Some(generator);
                self.rebuild_texture(ctx, size);
                self.last_duration = Some(start.elapsed().as_secs_f32() * 1000.0);
                self.status_message = format!(
                    "Generated in {:.2} ms (seed {})",
                    self.last_duration.unwrap(),
                    self.seed
                );
            }
            Err(e) => {
                self.status_message = e.to_string();
            }
        }
    }

    // Re-run the algorithm on the existing grid with a newly committed
    // roughness; falls back to a fresh generator if none exists yet
    fn apply_roughness(&mut self, ctx: &egui::Context, size: usize) {
        let parsed = match self.roughness_text.trim().parse::<f64>() {
            Ok(v) => v,
            Err(_) => {
                self.status_message =
                    "Invalid roughness value. Please enter a number.".to_string();
                return;
            }
        };

        match &mut self.generator {
            Some(generator) if generator.size() == size => {
                let start = Instant::now();
                match generator.generate(parsed) {
                    Ok(()) => {
                        self.roughness = parsed;
                        self.rebuild_texture(ctx, size);
                        self.last_duration = Some(start.elapsed().as_secs_f32() * 1000.0);
                        self.status_message = format!(
                            "Regenerated in {:.2} ms (roughness {})",
                            self.last_duration.unwrap(),
                            parsed
                        );
                    }
                    Err(e) => {
                        self.status_message = e.to_string();
                    }
                }
            }
            _ => {
                self.roughness = parsed;
                self.regenerate(ctx, size);
            }
        }
    }

    fn rebuild_texture(&mut self, ctx: &egui::Context, size: usize) {
        let Some(generator) = &self.generator else {
            return;
        };
        let flat = flatten2(generator.grid());
        let img = to_terrain_image(&flat, size);
        let color_image = ColorImage::from_rgb([size, size], &img);
        self.terrain_texture =
            Some(ctx.load_texture("terrain", color_image, egui::TextureOptions::NEAREST));
        self.last_flat = Some(img);
        // Keep size in sync with flat
        self.last_size = size;
    }
}

impl App for TerrainApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // compute real size
        let size = (1 << self.exp) + 1;

        egui::SidePanel::left("controls").show(ctx, |ui| {
            ui.heading("Diamond-Square Terrain");
            ui.separator();

            // Resolution slider
            let prev_exp = self.exp;
            ui.horizontal(|ui| {
                ui.label("Resolution 2^n+1:");
                ui.add(
                    egui::Slider::new(&mut self.exp, 6..=9)
                        .text(format!("{}×{}", size, size))
                        .step_by(1.0),
                );
            });
            if prev_exp != self.exp {
                self.generator = None; // size is fixed per generator
                self.terrain_texture = None;
                self.last_flat = None;
                self.status_message = "Texture reset due to size change".into();
            }

            // Seed
            ui.label("Seed");
            ui.add(egui::DragValue::new(&mut self.seed).speed(1.0));

            // Roughness field, committed on Enter or focus loss
            ui.label("Roughness (0.1 – 10.0)");
            let roughness_edit = ui.text_edit_singleline(&mut self.roughness_text);
            let committed =
                roughness_edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if committed {
                self.apply_roughness(ctx, size);
            }

            // Scale only changes how large the texture is drawn
            ui.label("Scale");
            ui.add(egui::Slider::new(&mut self.scale, 1..=10));

            ui.separator();

            if ui.button("Generate Terrain").clicked() {
                self.regenerate(ctx, size);
            }

            // Save to PNG
            if ui.button("Save PNG…").clicked() {
                if let Some(img) = &self.last_flat {
                    let filename = format!("terrain_{}.png", self.seed);
                    match image::save_buffer(
                        &filename,
                        img,
                        self.last_size as u32,
                        self.last_size as u32,
                        image::ColorType::Rgb8,
                    ) {
                        Ok(()) => self.status_message = format!("Saved {}", filename),
                        Err(e) => self.status_message = format!("PNG error: {}", e),
                    }
                }
            }

            ui.separator();
            ui.label(&self.status_message);
        });

        // central display: classified map drawn at size·scale, panned by drag
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(tex) = &self.terrain_texture {
                let response = ui.allocate_response(ui.available_size(), Sense::drag());
                if response.dragged() {
                    self.offset += response.drag_delta();
                }
                let side = (self.last_size as u32 * self.scale) as f32;
                let rect = Rect::from_min_size(response.rect.min + self.offset, Vec2::splat(side));
                ui.painter_at(response.rect).image(
                    tex.id(),
                    rect,
                    Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            } else {
                ui.centered_and_justified(|ui| {
                    ui.label("Click “Generate” to start");
                });
            }
        });
    }
}

fn main() {
    let opts = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 800.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };
    run_native(
        "Diamond-Square Terrain Generator",
        opts,
        Box::new(|_cc| Ok(Box::new(TerrainApp::default()))),
    )
    .unwrap();
}
