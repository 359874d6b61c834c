use egui::{Color32, RichText, ScrollArea, Ui};

use museum_map::Action;

use super::{MuseumMapApp, PALETTE_ORANGE};

impl MuseumMapApp {
    pub(crate) fn list_view(&self, ui: &mut Ui, actions: &mut Vec<Action>) {
        if let Some(place) = self.state.opened_place() {
            ui.horizontal(|ui| {
                if ui.button("‹ Museums").clicked() {
                    actions.push(Action::ClosePlaceDetail);
                }
            });
            ui.separator();
            ui.heading(&place.name);
            ui.label(RichText::new(&place.address).color(Color32::GRAY));
            ui.add_space(20.);
            // no real detail screen yet
            ui.label("Details coming soon");
            ui.add_space(20.);
            if ui.button("Show on map").clicked() {
                actions.push(Action::ShowPlaceOnMap(place.id));
            }
            return;
        }

        ui.heading(RichText::new("Museums").color(PALETTE_ORANGE));
        ui.separator();
        ScrollArea::vertical().show(ui, |ui| {
            for place in self.state.catalog.places() {
                let response = ui
                    .vertical(|ui| {
                        ui.label(RichText::new(&place.name).strong().size(16.));
                        ui.label(RichText::new(&place.address).color(Color32::GRAY));
                    })
                    .response
                    .interact(egui::Sense::click());
                if response.clicked() {
                    actions.push(Action::OpenPlace(place.id));
                }
                ui.separator();
            }
        });
    }
}
