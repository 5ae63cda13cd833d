//! A small word-cloud layout: words sized by relative frequency and
//! placed along an Archimedean spiral from the canvas centre.

use std::sync::Arc;

use eframe::egui::{self, Align2, Color32, FontId, Id, Pos2, Rect, Sense, Ui, Vec2};

use crate::color::generate_palette;

/// Nominal canvas, scaled down to the available width when drawn.
pub const CANVAS: Vec2 = Vec2::new(800.0, 400.0);

const MIN_FONT: f32 = 4.0;
const FONT_STEP: f32 = 1.0;
const RELATIVE_SCALING: f32 = 0.5;
const PADDING: f32 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub text: String,
    pub font_size: f32,
    pub rect: Rect,
}

/// Word frequencies normalised to the most frequent word, most frequent
/// first; ties keep first-appearance order.
pub fn word_frequencies(text: &str) -> Vec<(String, f32)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for word in text
        .split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '_'))
        .filter(|w| !w.is_empty())
    {
        match counts.iter_mut().find(|(w, _)| w == word) {
            Some((_, n)) => *n += 1,
            None => counts.push((word.to_string(), 1)),
        }
    }
    let max = counts.iter().map(|(_, n)| *n).max().unwrap_or(1) as f32;
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .map(|(w, n)| (w, n as f32 / max))
        .collect()
}

/// Place words on a `canvas`-sized area. `measure(text, font_size)` returns
/// the rendered text size. Words that no longer fit at [`MIN_FONT`] are
/// dropped, together with everything after them.
pub fn layout(
    words: &[(String, f32)],
    canvas: Vec2,
    measure: impl Fn(&str, f32) -> Vec2,
) -> Vec<PlacedWord> {
    let mut placed: Vec<PlacedWord> = Vec::new();
    let Some((first, _)) = words.first() else {
        return placed;
    };

    // Start at the largest size at which the first word spans 90% of the width.
    let unit = measure(first, 1.0);
    let mut font = (canvas.y * 0.5).min(canvas.x * 0.9 / unit.x.max(f32::EPSILON)).floor();
    let mut last_freq = 1.0;

    for (i, (word, freq)) in words.iter().enumerate() {
        if i > 0 {
            font = ((RELATIVE_SCALING * freq / last_freq + (1.0 - RELATIVE_SCALING)) * font).round();
        }
        loop {
            if font < MIN_FONT {
                return placed;
            }
            let size = measure(word, font) + Vec2::splat(2.0 * PADDING);
            if let Some(rect) = find_spot(size, canvas, &placed) {
                placed.push(PlacedWord {
                    text: word.clone(),
                    font_size: font,
                    rect: rect.shrink(PADDING),
                });
                break;
            }
            font -= FONT_STEP;
        }
        last_freq = *freq;
    }
    placed
}

fn find_spot(size: Vec2, canvas: Vec2, placed: &[PlacedWord]) -> Option<Rect> {
    let bounds = Rect::from_min_size(Pos2::ZERO, canvas);
    let center = bounds.center();
    let aspect = canvas.x / canvas.y;
    let max_radius = canvas.length();

    let mut t = 0.0f32;
    loop {
        let r = 1.5 * t;
        if r > max_radius {
            return None;
        }
        let c = center + Vec2::new(r * t.cos() * aspect, r * t.sin());
        let rect = Rect::from_center_size(c, size);
        if bounds.contains_rect(rect)
            && !placed.iter().any(|p| p.rect.expand(PADDING).intersects(rect))
        {
            return Some(rect);
        }
        t += 0.1;
    }
}

// ---------------------------------------------------------------------------
// Painting
// ---------------------------------------------------------------------------

/// Lay out (cached per text) and paint the word cloud on a white canvas.
pub fn paint(ui: &mut Ui, text: &str) {
    let id = Id::new(("wordcloud", text));
    let cached = ui.ctx().data(|d| d.get_temp::<Arc<Vec<PlacedWord>>>(id));
    let words = match cached {
        Some(words) => words,
        None => {
            let freqs = word_frequencies(text);
            let words = Arc::new(layout(&freqs, CANVAS, |w, size| {
                ui.fonts(|f| {
                    f.layout_no_wrap(w.to_owned(), FontId::proportional(size), Color32::BLACK)
                        .size()
                })
            }));
            log::debug!("word cloud: placed {} of {} words", words.len(), freqs.len());
            ui.ctx().data_mut(|d| d.insert_temp(id, words.clone()));
            words
        }
    };

    let scale = (ui.available_width() / CANVAS.x).min(1.0);
    let (response, painter) = ui.allocate_painter(CANVAS * scale, Sense::hover());
    painter.rect_filled(response.rect, 0.0, Color32::WHITE);

    let colors = generate_palette(words.len());
    for (word, color) in words.iter().zip(colors) {
        painter.text(
            response.rect.min + word.rect.min.to_vec2() * scale,
            Align2::LEFT_TOP,
            &word.text,
            egui::FontId::proportional(word.font_size * scale),
            color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measure(w: &str, size: f32) -> Vec2 {
        Vec2::new(w.chars().count() as f32 * size * 0.6, size * 1.2)
    }

    const COLUMNS: &str =
        "Pregnancies Glucose BloodPressure SkinThickness Insulin BMI DiabetesPedigreeFunction Age Outcome";

    #[test]
    fn frequencies_are_normalised_and_ordered() {
        let f = word_frequencies("BMI Age BMI");
        assert_eq!(f, vec![("BMI".to_string(), 1.0), ("Age".to_string(), 0.5)]);
        assert!(word_frequencies("").is_empty());
    }

    #[test]
    fn places_every_column_name_without_overlap() {
        let words = layout(&word_frequencies(COLUMNS), CANVAS, measure);
        assert_eq!(words.len(), 9);

        let bounds = Rect::from_min_size(Pos2::ZERO, CANVAS);
        for (i, a) in words.iter().enumerate() {
            assert!(bounds.contains_rect(a.rect), "{} outside canvas", a.text);
            for b in &words[i + 1..] {
                assert!(!a.rect.intersects(b.rect), "{} overlaps {}", a.text, b.text);
            }
        }
    }

    #[test]
    fn first_word_fits_the_width() {
        let words = layout(&word_frequencies("DiabetesPedigreeFunction"), CANVAS, measure);
        assert_eq!(words.len(), 1);
        assert!(words[0].rect.width() <= CANVAS.x);
    }
}
