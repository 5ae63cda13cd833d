use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use super::{subheader, View, ViewContext};
use crate::data::dataset::Dataset;
use crate::data::stats::{describe, ColumnSummary};

pub struct DatasetView;

impl View for DatasetView {
    fn title(&self) -> &'static str {
        "Dataset Diabetes"
    }

    fn show(&self, ui: &mut Ui, ctx: &mut ViewContext<'_>) -> anyhow::Result<()> {
        let dataset = ctx.services.dataset.get()?;

        ui.label("Berikut adalah dataset yang digunakan dalam aplikasi ini:");
        ui.add_space(4.0);
        data_table(ui, dataset);

        ui.add_space(6.0);
        ui.horizontal(|ui: &mut Ui| {
            ui.label(RichText::new("Total Data:").strong());
            ui.label(format!("{}.", shape_summary(dataset)));
        });

        subheader(ui, "Statistik Deskriptif");
        describe_grid(ui, &describe(dataset));
        Ok(())
    }
}

/// `"{rows} baris dan {cols} kolom"`.
pub fn shape_summary(dataset: &Dataset) -> String {
    format!("{} baris dan {} kolom", dataset.n_rows(), dataset.n_cols())
}

// ---------------------------------------------------------------------------
// Full table (virtualised rows)
// ---------------------------------------------------------------------------

fn data_table(ui: &mut Ui, dataset: &Dataset) {
    let row_height = 18.0;
    ScrollArea::horizontal()
        .id_salt("dataset_hscroll")
        .show(ui, |ui: &mut Ui| {
            ui.push_id("dataset_table", |ui: &mut Ui| {
                TableBuilder::new(ui)
                    .striped(true)
                    .max_scroll_height(360.0)
                    .column(Column::auto().at_least(40.0))
                    .columns(Column::auto().at_least(60.0), dataset.n_cols())
                    .header(22.0, |mut header| {
                        header.col(|ui: &mut Ui| {
                            ui.strong("");
                        });
                        for name in dataset.column_names() {
                            header.col(|ui: &mut Ui| {
                                ui.strong(name);
                            });
                        }
                    })
                    .body(|body| {
                        body.rows(row_height, dataset.n_rows(), |mut row| {
                            let idx = row.index();
                            row.col(|ui: &mut Ui| {
                                ui.label(RichText::new(idx.to_string()).weak());
                            });
                            for cell in &dataset.rows()[idx] {
                                row.col(|ui: &mut Ui| {
                                    ui.label(cell.to_string());
                                });
                            }
                        });
                    });
            });
        });
}

// ---------------------------------------------------------------------------
// describe() grid
// ---------------------------------------------------------------------------

fn describe_grid(ui: &mut Ui, summaries: &[ColumnSummary]) {
    if summaries.is_empty() {
        ui.label("Tidak ada kolom numerik.");
        return;
    }
    ScrollArea::horizontal()
        .id_salt("describe_hscroll")
        .show(ui, |ui: &mut Ui| {
            egui::Grid::new("describe_grid")
                .striped(true)
                .spacing([16.0, 4.0])
                .show(ui, |ui: &mut Ui| {
                    ui.label("");
                    for s in summaries {
                        ui.strong(&s.name);
                    }
                    ui.end_row();

                    let n_stats = summaries[0].rows().len();
                    for stat in 0..n_stats {
                        let label = summaries[0].rows()[stat].0;
                        ui.strong(label);
                        for s in summaries {
                            ui.monospace(format_stat(s.rows()[stat].1));
                        }
                        ui.end_row();
                    }
                });
        });
}

/// Six decimals, like the Pandas describe() table.
pub fn format_stat(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else {
        format!("{v:.6}")
    }
}
