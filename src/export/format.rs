//! Zahlenlisten-Formatierung für den JavaScript-Export.
//!
//! Alle Listen werden gruppenweise umbrochen: innerhalb einer Gruppe
//! trennt `", "`, zwischen Gruppen `",\n    "`. Bei Gruppengröße 3
//! steht damit genau ein Vertex (bzw. eine Farbe oder ein Dreieck)
//! pro Zeile.

/// Formatiert Gleitkommawerte mit fester Nachkommastellen-Zahl.
pub fn format_number_list(values: &[f32], precision: usize, group_size: usize) -> String {
    format_list(values.iter().map(|v| format!("{v:.precision$}")), group_size)
}

/// Formatiert Index-Listen (ohne Nachkommastellen).
pub fn format_index_list(values: &[u32], group_size: usize) -> String {
    format_list(values.iter().map(u32::to_string), group_size)
}

fn format_list(values: impl ExactSizeIterator<Item = String>, group_size: usize) -> String {
    let group_size = group_size.max(1);
    let len = values.len();
    let mut out = String::new();
    for (i, value) in values.enumerate() {
        out.push_str(&value);
        if i + 1 < len {
            if (i + 1) % group_size == 0 {
                out.push_str(",\n    ");
            } else {
                out.push_str(", ");
            }
        }
    }
    out
}
