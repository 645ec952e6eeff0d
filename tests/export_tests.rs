//! Integrationstests für Export, Clipboard und Shape-Replay.

use shape2d_designer::export::{collect_shapes, replay_shapes};
use shape2d_designer::{
    AppController, AppIntent, AppState, CanvasRect, DrawMode, ShapeSink,
};

fn setup() -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::CanvasResized {
                rect: CanvasRect::new(0.0, 0.0, 200.0, 200.0),
            },
        )
        .unwrap();
    (controller, state)
}

fn click(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    controller
        .handle_intent(state, AppIntent::CanvasPointerPressed { screen_x: x, screen_y: y })
        .unwrap();
    controller
        .handle_intent(state, AppIntent::CanvasPointerReleased)
        .unwrap();
}

/// Layer mit vier Ecken eines Quadrats, Topologie TRIANGLE_FAN.
fn with_quad(controller: &mut AppController, state: &mut AppState) {
    controller
        .handle_intent(state, AppIntent::AddLayerRequested)
        .unwrap();
    controller
        .handle_intent(state, AppIntent::DrawModeChanged { mode: DrawMode::TriangleFan })
        .unwrap();
    click(controller, state, 50.0, 150.0);
    click(controller, state, 150.0, 150.0);
    click(controller, state, 150.0, 50.0);
    click(controller, state, 50.0, 50.0);
}

#[test]
fn test_export_bereitet_artefakt_vor_und_oeffnet_dialog() {
    let (mut controller, mut state) = setup();
    with_quad(&mut controller, &mut state);
    controller
        .handle_intent(&mut state, AppIntent::ModelNameChanged { name: "quad".into() })
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::ExportModelRequested)
        .unwrap();

    assert!(state.ui.show_export_save_dialog);
    let artefakt = state.ui.pending_export.as_ref().expect("Artefakt vorbereitet");
    assert_eq!(artefakt.file_name, "model2D_quad.js");
    assert!(artefakt
        .content
        .contains("class Model2D_Quad extends Model2D {"));
    assert!(artefakt
        .content
        .contains("this.addShape(vertices1, colors1, indices1, this.gl.TRIANGLE_FAN);"));
}

#[test]
fn test_export_mit_leerem_namen_wird_abgebrochen() {
    let (mut controller, mut state) = setup();
    with_quad(&mut controller, &mut state);
    controller
        .handle_intent(&mut state, AppIntent::ExportModelRequested)
        .unwrap();

    assert!(state.ui.pending_export.is_none(), "kein Artefakt ohne Namen");
    assert!(!state.ui.show_export_save_dialog);
    assert!(state.ui.status_message.is_some());
}

#[test]
fn test_pfadwahl_schreibt_artefakt_auf_platte() {
    let (mut controller, mut state) = setup();
    with_quad(&mut controller, &mut state);
    controller
        .handle_intent(&mut state, AppIntent::ModelNameChanged { name: "quad".into() })
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::ExportModelRequested)
        .unwrap();
    let erwartet = state.ui.pending_export.as_ref().unwrap().content.clone();

    let path = std::env::temp_dir().join("shape2d_designer_export_test.js");
    controller
        .handle_intent(
            &mut state,
            AppIntent::ExportPathSelected { path: path.to_string_lossy().into_owned() },
        )
        .unwrap();

    let geschrieben = std::fs::read_to_string(&path).expect("Datei geschrieben");
    assert_eq!(geschrieben, erwartet);
    assert!(state.ui.pending_export.is_none());
    std::fs::remove_file(&path).ok();
}

#[test]
fn test_laufzeitklasse_export() {
    let (mut controller, mut state) = setup();
    controller
        .handle_intent(&mut state, AppIntent::ExportRuntimeRequested)
        .unwrap();

    let artefakt = state.ui.pending_export.as_ref().unwrap();
    assert_eq!(artefakt.file_name, "model2D.js");
    assert!(artefakt.content.starts_with("class Model2D {"));
}

#[test]
fn test_copy_snippets_landen_im_clipboard_puffer() {
    let (mut controller, mut state) = setup();
    with_quad(&mut controller, &mut state);

    controller
        .handle_intent(&mut state, AppIntent::CopyVerticesRequested { layer_index: 0 })
        .unwrap();
    let vertices = state.ui.pending_clipboard.take().unwrap();
    assert!(vertices.starts_with("const vertices = [\n    "));

    controller
        .handle_intent(&mut state, AppIntent::CopyIndicesRequested { layer_index: 0 })
        .unwrap();
    let indices = state.ui.pending_clipboard.take().unwrap();
    assert!(indices.contains("0, 1, 2,\n    0, 2, 3"));

    // Ungültiger Index: kein neuer Clipboard-Inhalt
    controller
        .handle_intent(&mut state, AppIntent::CopyColorsRequested { layer_index: 9 })
        .unwrap();
    assert!(state.ui.pending_clipboard.is_none());
}

#[test]
fn test_bulk_copy_liefert_json_aller_layer() {
    let (mut controller, mut state) = setup();
    with_quad(&mut controller, &mut state);
    controller
        .handle_intent(&mut state, AppIntent::AddLayerRequested)
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::CopyAllLayersRequested)
        .unwrap();

    let json = state.ui.pending_clipboard.take().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    let layers = parsed.as_array().unwrap();
    assert_eq!(layers.len(), 2);
    assert_eq!(layers[0]["drawMode"], "TRIANGLE_FAN");
    assert_eq!(layers[0]["vertices"].as_array().unwrap().len(), 12);
    assert_eq!(layers[1]["name"], "Layer 2");
}

/// Stub-Konsument: protokolliert jeden `add_shape`-Aufruf.
#[derive(Default)]
struct RecordingSink {
    calls: Vec<(usize, usize, Vec<u32>, DrawMode)>,
}

impl ShapeSink for RecordingSink {
    fn add_shape(&mut self, vertices: &[f32], colors: &[f32], indices: &[u32], mode: DrawMode) {
        self.calls
            .push((vertices.len(), colors.len(), indices.to_vec(), mode));
    }
}

#[test]
fn test_replay_registriert_genau_ein_shape_pro_layer() {
    let (mut controller, mut state) = setup();
    with_quad(&mut controller, &mut state);
    controller
        .handle_intent(&mut state, AppIntent::AddLayerRequested)
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::DrawModeChanged { mode: DrawMode::Points })
        .unwrap();
    click(&mut controller, &mut state, 100.0, 100.0);

    let mut sink = RecordingSink::default();
    replay_shapes(&collect_shapes(&state.document), &mut sink);

    assert_eq!(sink.calls.len(), 2);
    assert_eq!(sink.calls[0].0, 12, "vier Vertices à drei Komponenten");
    assert_eq!(sink.calls[0].2, vec![0, 1, 2, 0, 2, 3]);
    assert_eq!(sink.calls[0].3, DrawMode::TriangleFan);
    assert_eq!(sink.calls[1].2, vec![0]);
    assert_eq!(sink.calls[1].3, DrawMode::Points);
}
