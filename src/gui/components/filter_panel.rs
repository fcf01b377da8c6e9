// src/gui/components/filter_panel.rs
//
// Optional facets next to the search box. They only ever narrow the text
// query's result; with everything at "All" the board is the bare query.

use eframe::egui;
use tracing::info;

use crate::filter::{ Range, SortKey, YesNo };
use crate::gui::app::App;

use super::export_bar;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Filters");

    let facets = app.facets.clone();
    let mut changed = false;

    {
        let criteria = &mut app.state.options.criteria;

        // Manufacturer
        let current = criteria.manufacturer.clone().unwrap_or_else(|| s!("All"));
        egui::ComboBox::from_label("Manufacturer")
            .selected_text(current)
            .show_ui(ui, |ui| {
                changed |= ui.selectable_value(&mut criteria.manufacturer, None, "All").changed();
                for m in &facets.manufacturers {
                    changed |= ui
                        .selectable_value(&mut criteria.manufacturer, Some(m.clone()), m)
                        .changed();
                }
            });

        // Grade (any of the ticked ones)
        if !facets.grades.is_empty() {
            ui.label("Min Grade Level:");
            ui.horizontal_wrapped(|ui| {
                for g in &facets.grades {
                    let mut on = criteria.grades.contains(g);
                    if ui.checkbox(&mut on, g).changed() {
                        if on {
                            criteria.grades.push(g.clone());
                        } else {
                            criteria.grades.retain(|x| x != g);
                        }
                        changed = true;
                    }
                }
            });
        }

        changed |= yes_no(ui, "Rechargeable", &mut criteria.rechargeable);
        changed |= yes_no(ui, "Batteries", &mut criteria.batteries);
        changed |= ui.checkbox(&mut criteria.available_only, "Classroom set available").changed();

        changed |= range(ui, "Price ($)", &mut criteria.price, facets.price, 1.0);
        changed |= range(ui, "Min Age", &mut criteria.min_age, facets.min_age, 1.0);
    }

    ui.separator();

    let sort = &mut app.state.options.sort;
    egui::ComboBox::from_label("Sort")
        .selected_text(sort.label())
        .show_ui(ui, |ui| {
            for key in SortKey::ALL {
                changed |= ui.selectable_value(sort, key, key.label()).changed();
            }
        });

    if changed {
        info!("UI: Facets → {:?} sort={:?}", app.state.options.criteria, app.state.options.sort);
        app.refresh();
    }

    if ui.button("Reset filters").clicked() {
        app.reset_facets();
    }

    ui.separator();
    export_bar::draw(ui, app);
}

fn yes_no(ui: &mut egui::Ui, label: &str, value: &mut YesNo) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(format!("{label}:"));
        for v in [YesNo::Any, YesNo::Yes, YesNo::No] {
            changed |= ui.selectable_value(value, v, v.label()).changed();
        }
    });
    changed
}

/// Checkbox to enable the bound plus min/max fields, seeded from the data.
fn range(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut Option<Range>,
    bounds: Option<Range>,
    speed: f64,
) -> bool {
    let Some(bounds) = bounds else { return false };
    let mut changed = false;

    ui.horizontal(|ui| {
        let mut on = value.is_some();
        if ui.checkbox(&mut on, label).changed() {
            *value = on.then_some(bounds);
            changed = true;
        }

        if let Some(r) = value.as_mut() {
            let mut lo = r.min;
            let mut hi = r.max;
            changed |= ui
                .add(egui::DragValue::new(&mut lo).speed(speed).range(bounds.min..=bounds.max))
                .changed();
            ui.label("to");
            changed |= ui
                .add(egui::DragValue::new(&mut hi).speed(speed).range(bounds.min..=bounds.max))
                .changed();
            *r = Range::new(lo, hi);
        }
    });
    changed
}
