use std::f32::consts::FRAC_PI_2;

use eframe::egui::{self, epaint::TextShape, Align2, Color32, FontId, Pos2, Rect, Sense, Ui, Vec2};

use crate::color::{contrasting_text, coolwarm};
use crate::data::stats::CorrelationMatrix;

const LABEL_FONT: f32 = 12.0;
const LEGEND_WIDTH: f32 = 60.0;

/// Annotation text for one cell: two decimals, blank when undefined.
pub fn cell_label(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        format!("{value:.2}")
    }
}

/// Paint an annotated correlation heatmap with a colour bar on the right.
pub fn paint(ui: &mut Ui, matrix: &CorrelationMatrix) {
    let k = matrix.columns.len();
    if k == 0 {
        return;
    }
    let text_color = ui.visuals().text_color();
    let label_font = FontId::proportional(LABEL_FONT);
    let label_galleys: Vec<_> = matrix
        .columns
        .iter()
        .map(|name| ui.fonts(|f| f.layout_no_wrap(name.clone(), label_font.clone(), text_color)))
        .collect();
    let label_extent = label_galleys
        .iter()
        .map(|g| g.size().x)
        .fold(0.0f32, f32::max)
        + 8.0;

    let cell = ((ui.available_width() - label_extent - LEGEND_WIDTH) / k as f32).clamp(28.0, 72.0);
    let grid_side = cell * k as f32;
    let size = Vec2::new(label_extent + grid_side + LEGEND_WIDTH, grid_side + label_extent);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let origin = response.rect.min + Vec2::new(label_extent, 0.0);

    let value_font = FontId::proportional((cell * 0.3).clamp(9.0, 13.0));
    for (i, row) in matrix.values.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            let rect = Rect::from_min_size(
                origin + Vec2::new(j as f32 * cell, i as f32 * cell),
                Vec2::splat(cell),
            );
            let fill = coolwarm(value);
            painter.rect_filled(rect, 0.0, fill);
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                cell_label(value),
                value_font.clone(),
                contrasting_text(fill),
            );
        }
    }

    // Row labels, right-aligned against the grid.
    for (i, galley) in label_galleys.iter().enumerate() {
        let y = origin.y + (i as f32 + 0.5) * cell;
        let pos = Pos2::new(origin.x - 4.0 - galley.size().x, y - galley.size().y / 2.0);
        painter.galley(pos, galley.clone(), text_color);
    }

    // Column labels under the grid, reading bottom to top.
    for (j, galley) in label_galleys.iter().enumerate() {
        let x = origin.x + (j as f32 + 0.5) * cell - galley.size().y / 2.0;
        let pos = Pos2::new(x, origin.y + grid_side + 4.0 + galley.size().x);
        painter.add(TextShape::new(pos, galley.clone(), text_color).with_angle(-FRAC_PI_2));
    }

    paint_legend(
        &painter,
        Pos2::new(origin.x + grid_side + 12.0, origin.y),
        grid_side,
        text_color,
    );

    if let Some(pointer) = response.hover_pos() {
        let rel = pointer - origin;
        if rel.x >= 0.0 && rel.y >= 0.0 {
            let (i, j) = ((rel.y / cell) as usize, (rel.x / cell) as usize);
            if i < k && j < k {
                response.on_hover_text(format!(
                    "{} × {}: {}",
                    matrix.columns[i],
                    matrix.columns[j],
                    cell_label(matrix.values[i][j])
                ));
            }
        }
    }
}

fn paint_legend(painter: &egui::Painter, top_left: Pos2, height: f32, text_color: Color32) {
    const STEPS: usize = 40;
    let bar_width = 14.0;
    let step_h = height / STEPS as f32;
    for s in 0..STEPS {
        // Top is +1, bottom is -1.
        let value = 1.0 - 2.0 * (s as f64 + 0.5) / STEPS as f64;
        let rect = Rect::from_min_size(
            top_left + Vec2::new(0.0, s as f32 * step_h),
            Vec2::new(bar_width, step_h + 0.5),
        );
        painter.rect_filled(rect, 0.0, coolwarm(value));
    }

    let font = FontId::proportional(11.0);
    for (frac, label) in [(0.0, "1.0"), (0.5, "0.0"), (1.0, "-1.0")] {
        painter.text(
            top_left + Vec2::new(bar_width + 4.0, frac * height),
            Align2::LEFT_CENTER,
            label,
            font.clone(),
            text_color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_two_decimals() {
        assert_eq!(cell_label(1.0), "1.00");
        assert_eq!(cell_label(-0.4666), "-0.47");
        assert_eq!(cell_label(f64::NAN), "");
    }
}
