use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Ui};
use itertools::Itertools;

use museum_map::map::{
    RouteStatus,
    controller::{ROUTE_STROKE_COLOR, ROUTE_STROKE_WIDTH},
};

use super::{MuseumMapApp, PALETTE_MAROON, PALETTE_ORANGE, PALETTE_SEA};

const GRID_LINES: usize = 10;
const MARKER_RADIUS: f32 = 8.;
const PLACE_DOT_RADIUS: f32 = 4.;
const TOUCH_RADIUS: f32 = 5.;

impl MuseumMapApp {
    pub(crate) fn map_view(&mut self, ui: &mut Ui) {
        self.map_status(ui);

        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click());
        let canvas = response.rect;
        let region = *self.map.region();

        painter.rect_filled(canvas, 0., PALETTE_SEA);
        draw_grid(&painter, canvas);

        // every catalog place, the selected one gets the marker below
        for place in self.state.catalog.places() {
            if region.contains(&place.coordinate) {
                let pos = region.coordinate_to_screen(&place.coordinate, canvas);
                painter.circle_filled(pos, PLACE_DOT_RADIUS, Color32::LIGHT_GRAY);
            }
        }

        if let Some(route) = self.map.overlay() {
            let points = route
                .polyline
                .iter()
                .map(|c| region.coordinate_to_screen(c, canvas))
                .collect_vec();
            painter.add(Shape::line(
                points,
                Stroke::new(ROUTE_STROKE_WIDTH, ROUTE_STROKE_COLOR),
            ));
        }

        for marker in self.map.markers() {
            let pos = region.coordinate_to_screen(&marker.coordinate, canvas);
            painter.circle(pos, MARKER_RADIUS, PALETTE_MAROON, Stroke::new(2., Color32::WHITE));
            painter.text(
                pos - egui::vec2(0., MARKER_RADIUS + 2.),
                Align2::CENTER_BOTTOM,
                &marker.title,
                FontId::proportional(14.),
                Color32::WHITE,
            );
        }

        if let Some(touch) = self.map.touch_location()
            && region.contains(&touch)
        {
            let pos = region.coordinate_to_screen(&touch, canvas);
            painter.circle_filled(pos, TOUCH_RADIUS, PALETTE_ORANGE);
        }

        if response.clicked()
            && let Some(point) = response.interact_pointer_pos()
            && let Some(request) = self.map.on_map_tapped(point, canvas)
        {
            self.dispatcher.dispatch(request);
        }
    }

    fn map_status(&self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            if let Some(place) = self.map.selected_place() {
                ui.strong(&place.name);
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                match self.map.status() {
                    RouteStatus::RequestInFlight { .. } => {
                        ui.spinner();
                    }
                    RouteStatus::Idle => {
                        if let Some(notice) = self.map.route_notice() {
                            ui.colored_label(PALETTE_ORANGE, notice);
                        } else if let Some(route) = self.map.overlay() {
                            ui.label(format!(
                                "{:.1} km · {:.0} min",
                                route.distance_m / 1000.,
                                (route.expected_travel_time_s / 60.).ceil()
                            ));
                        } else {
                            ui.weak("Tap the map to get directions");
                        }
                    }
                }
            });
        });
    }
}

fn draw_grid(painter: &egui::Painter, canvas: Rect) {
    let stroke = Stroke::new(1., Color32::from_gray(50));
    for i in 1..GRID_LINES {
        let t = i as f32 / GRID_LINES as f32;
        let x = canvas.left() + t * canvas.width();
        let y = canvas.top() + t * canvas.height();
        painter.line_segment([Pos2::new(x, canvas.top()), Pos2::new(x, canvas.bottom())], stroke);
        painter.line_segment([Pos2::new(canvas.left(), y), Pos2::new(canvas.right(), y)], stroke);
    }
}

