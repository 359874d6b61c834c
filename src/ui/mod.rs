mod auth_view;
mod list_view;
mod map_view;

use std::sync::Arc;

use egui::{Color32, RichText, Visuals, style::Widgets};
use log::{debug, error};

use museum_map::{
    Action, AppConfig, AppState, Effect, MapController, RouteDispatcher, Tab,
    catalog::museum_catalog,
    map::LocalRouteProvider,
    profile::{FileDialogPicker, ImagePicker},
};

pub(crate) const PALETTE_BLACK: Color32 = Color32::from_rgb(12, 12, 12);
pub(crate) const PALETTE_BROWN: Color32 = Color32::from_rgb(72, 30, 20);
pub(crate) const PALETTE_MAROON: Color32 = Color32::from_rgb(155, 57, 34);
pub(crate) const PALETTE_ORANGE: Color32 = Color32::from_rgb(242, 97, 63);
pub(crate) const PALETTE_SEA: Color32 = Color32::from_rgb(28, 40, 52);

const TAB_BAR_HEIGHT: f32 = 48.;

/// `MuseumMapApp` is the egui shell around the library state.
///
/// Widgets never mutate `AppState` directly except for form text bindings;
/// everything else is collected as `Action`s and run through
/// `AppState::update` once per frame. Effects returned by the update are
/// carried out here.
pub struct MuseumMapApp {
    state: AppState,
    map: MapController,
    dispatcher: RouteDispatcher,
    picker: Box<dyn ImagePicker>,
}

impl MuseumMapApp {
    pub fn new(app_config: AppConfig, cc: &eframe::CreationContext<'_>) -> Self {
        let default_visuals = Visuals {
            dark_mode: true,
            hyperlink_color: PALETTE_MAROON,
            faint_bg_color: PALETTE_BLACK,
            extreme_bg_color: PALETTE_BROWN,
            panel_fill: PALETTE_BLACK,
            button_frame: true,
            widgets: Widgets::dark(),
            striped: false,
            ..Default::default()
        };
        cc.egui_ctx.set_visuals(default_visuals);
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let repaint_ctx = cc.egui_ctx.clone();
        let provider = LocalRouteProvider::new(app_config.route_provider.clone());
        let dispatcher =
            RouteDispatcher::new(Arc::new(provider)).with_notifier(move || repaint_ctx.request_repaint());

        let catalog = museum_catalog();
        let mut map = MapController::new();
        match catalog.get_or_first(app_config.initial_place) {
            Some(place) => {
                map.set_selected_place(place.clone());
            }
            None => error!("Catalog is empty, no place to select"),
        }

        Self {
            state: AppState::new(catalog),
            map,
            dispatcher,
            picker: Box::new(FileDialogPicker),
        }
    }

    fn tab_bar(&self, ui: &mut egui::Ui, actions: &mut Vec<Action>) {
        ui.columns(3, |columns| {
            for (column, tab) in columns.iter_mut().zip(self.state.visible_tabs()) {
                column.vertical_centered(|ui| {
                    let selected = self.state.selected_tab == tab;
                    let color = if selected {
                        PALETTE_ORANGE
                    } else {
                        Color32::GRAY
                    };
                    let text = RichText::new(format!("{}\n{}", tab.icon(), tab.label())).color(color);
                    if ui.selectable_label(selected, text).clicked() {
                        actions.push(Action::SelectTab(tab));
                    }
                });
            }
        });
    }

    fn run_actions(&mut self, actions: Vec<Action>) {
        for action in actions {
            for effect in self.state.update(action) {
                self.run_effect(effect);
            }
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::OpenImagePicker => {
                let image = self.picker.pick();
                if image.is_none() {
                    debug!("Image selection cancelled");
                }
                self.run_actions(vec![Action::ProfileImageSelected(image)]);
            }
            Effect::SelectPlace(place) => {
                if let Some(request) = self.map.set_selected_place(place) {
                    self.dispatcher.dispatch(request);
                }
            }
        }
    }
}

impl eframe::App for MuseumMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        while let Some(response) = self.dispatcher.try_recv() {
            self.map.apply_route_response(response);
        }

        let mut actions = Vec::new();

        egui::TopBottomPanel::bottom("tabs")
            .exact_height(TAB_BAR_HEIGHT)
            .show(ctx, |ui| self.tab_bar(ui, &mut actions));

        egui::CentralPanel::default().show(ctx, |ui| match self.state.selected_tab {
            Tab::Map => self.map_view(ui),
            Tab::List => self.list_view(ui, &mut actions),
            Tab::Profile => self.profile_view(ui, &mut actions),
            Tab::Login => self.login_view(ui, &mut actions),
            Tab::Register => self.register_view(ui, &mut actions),
        });

        self.alert_window(ctx, &mut actions);

        self.run_actions(actions);
    }
}
