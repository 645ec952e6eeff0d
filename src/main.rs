//! Shape2D-Designer.
//!
//! Interaktiver 2D-Vektor-Shape-Editor: Layer mit WebGL-Topologien
//! bearbeiten und als Model2D-JavaScript-Klassen exportieren.

use std::sync::{Arc, Mutex};

use eframe::egui;
use shape2d_designer::{render, ui, AppController, AppIntent, AppState, EditorOptions};

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    log::info!("Shape2D-Designer v{}", env!("CARGO_PKG_VERSION"));

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_title("Shape2D-Designer"),
        renderer: eframe::Renderer::Wgpu,
        multisampling: 4,
        ..Default::default()
    };

    eframe::run_native(
        "Shape2D-Designer",
        native_options,
        Box::new(|cc| {
            let render_state = cc.wgpu_render_state.as_ref().ok_or_else(|| {
                anyhow::anyhow!("wgpu-Render-State fehlt: ohne Hardware-Renderer kein Editor")
            })?;
            Ok(Box::new(DesignerApp::new(render_state)))
        }),
    )
}

struct DesignerApp {
    state: AppState,
    controller: AppController,
    renderer: Arc<Mutex<render::Renderer>>,
    device: wgpu::Device,
    queue: wgpu::Queue,
}

impl DesignerApp {
    fn new(render_state: &egui_wgpu::RenderState) -> Self {
        let options = EditorOptions::load_from_file(&EditorOptions::config_path());

        Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
            renderer: Arc::new(Mutex::new(render::Renderer::new(render_state))),
            device: render_state.device.clone(),
            queue: render_state.queue.clone(),
        }
    }

    /// Zeichnet alle Panels und sammelt die dabei erzeugten Absichten ein.
    fn draw_ui(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut intents = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        intents.extend(ui::render_side_panel(ctx, &mut self.state));
        intents.extend(ui::render_vertex_editor(ctx, &self.state));
        intents.extend(ui::handle_file_dialogs(&mut self.state.ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
                intents.extend(ui::collect_canvas_events(&response));

                let scene = self.controller.build_render_scene(&self.state);
                ui.painter().add(egui_wgpu::Callback::new_paint_callback(
                    rect,
                    render::WgpuRenderCallback {
                        renderer: self.renderer.clone(),
                        scene,
                        device: self.device.clone(),
                        queue: self.queue.clone(),
                    },
                ));

                if self.state.document.is_empty() {
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Kein Layer vorhanden. Links ➕ Neu wählen.",
                        egui::FontId::proportional(20.0),
                        egui::Color32::WHITE,
                    );
                }
            });

        intents
    }

    fn dispatch(&mut self, intents: Vec<AppIntent>) {
        for intent in intents {
            if let Err(e) = self.controller.handle_intent(&mut self.state, intent) {
                log::error!("Intent-Verarbeitung fehlgeschlagen: {:#}", e);
            }
        }
    }

    /// Übergibt wartenden Clipboard-Text an egui.
    fn flush_clipboard(&mut self, ctx: &egui::Context) {
        if let Some(text) = self.state.ui.pending_clipboard.take() {
            log::info!("Clipboard: {} Zeichen kopiert", text.len());
            ctx.copy_text(text);
        }
    }
}

impl eframe::App for DesignerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let intents = self.draw_ui(ctx);

        // Das Canvas-Rechteck kommt jedes Frame; nur echte Eingaben
        // rechtfertigen ein sofortiges Neuzeichnen
        let needs_repaint = intents
            .iter()
            .any(|i| !matches!(i, AppIntent::CanvasResized { .. }));

        self.dispatch(intents);
        self.flush_clipboard(ctx);

        if needs_repaint || ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
        }
    }
}
