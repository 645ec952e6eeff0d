//! Paint-Callback: hängt den Szenen-Renderer in egui ein.

use super::Renderer;
use crate::shared::RenderScene;
use std::sync::{Arc, Mutex};

/// Zeichnet die Szene eines Frames innerhalb des egui-Render-Passes.
pub struct WgpuRenderCallback {
    /// Geteilter Renderer (der Callback läuft auf dem Render-Thread)
    pub renderer: Arc<Mutex<Renderer>>,
    pub scene: RenderScene,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
}

impl egui_wgpu::CallbackTrait for WgpuRenderCallback {
    fn prepare(
        &self,
        _device: &wgpu::Device,
        _queue: &wgpu::Queue,
        _screen_descriptor: &egui_wgpu::ScreenDescriptor,
        _egui_encoder: &mut wgpu::CommandEncoder,
        _callback_resources: &mut egui_wgpu::CallbackResources,
    ) -> Vec<wgpu::CommandBuffer> {
        Vec::new()
    }

    fn paint<'b>(
        &'b self,
        _info: egui::PaintCallbackInfo,
        render_pass: &mut wgpu::RenderPass<'static>,
        _callback_resources: &'b egui_wgpu::CallbackResources,
    ) {
        if let Ok(mut renderer) = self.renderer.lock() {
            renderer.render_scene(&self.device, &self.queue, render_pass, &self.scene);
        } else {
            log::error!("Renderer-Lock fehlgeschlagen, Frame wird übersprungen");
        }
    }
}
