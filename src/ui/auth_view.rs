use egui::{Align2, Color32, Image, RichText, Sense, Stroke, TextEdit, Ui, Vec2};

use museum_map::Action;

use super::{MuseumMapApp, PALETTE_MAROON, PALETTE_ORANGE};

const AVATAR_SIZE: f32 = 150.;
const FIELD_WIDTH: f32 = 260.;

impl MuseumMapApp {
    pub(crate) fn login_view(&mut self, ui: &mut Ui, actions: &mut Vec<Action>) {
        let session = &mut self.state.session;
        ui.vertical_centered(|ui| {
            ui.add_space(40.);
            ui.add(
                TextEdit::singleline(&mut session.username)
                    .hint_text("Username")
                    .desired_width(FIELD_WIDTH),
            );
            ui.add_space(10.);
            ui.add(
                TextEdit::singleline(&mut session.password)
                    .hint_text("Password")
                    .password(true)
                    .desired_width(FIELD_WIDTH),
            );
            ui.add_space(20.);
            if ui.button("Login").clicked() {
                actions.push(Action::SubmitLogin);
            }
            ui.add_space(10.);
            if ui.button("Register").clicked() {
                actions.push(Action::BeginRegistration);
            }
        });
    }

    pub(crate) fn register_view(&mut self, ui: &mut Ui, actions: &mut Vec<Action>) {
        let session = &mut self.state.session;
        ui.vertical_centered(|ui| {
            ui.add_space(40.);
            ui.add(
                TextEdit::singleline(&mut session.username)
                    .hint_text("Username")
                    .desired_width(FIELD_WIDTH),
            );
            ui.add_space(10.);
            ui.add(
                TextEdit::singleline(&mut session.email)
                    .hint_text("Email")
                    .desired_width(FIELD_WIDTH),
            );
            ui.add_space(10.);
            ui.add(
                TextEdit::singleline(&mut session.password)
                    .hint_text("Password")
                    .password(true)
                    .desired_width(FIELD_WIDTH),
            );
            ui.add_space(10.);
            ui.add(
                TextEdit::singleline(&mut session.confirm_password)
                    .hint_text("Confirm Password")
                    .password(true)
                    .desired_width(FIELD_WIDTH),
            );
            if !session.confirm_password.is_empty() && !session.passwords_match() {
                ui.label(RichText::new("Passwords do not match").small().color(PALETTE_ORANGE));
            }
            ui.add_space(20.);
            if ui.button("Register").clicked() {
                actions.push(Action::SubmitRegistration);
            }
            ui.add_space(10.);
            if ui.button("Back to login").clicked() {
                actions.push(Action::CancelRegistration);
            }
        });
    }

    pub(crate) fn profile_view(&self, ui: &mut Ui, actions: &mut Vec<Action>) {
        let session = &self.state.session;
        ui.horizontal(|ui| {
            ui.heading(RichText::new("Profile").color(PALETTE_ORANGE));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Logout").clicked() {
                    actions.push(Action::Logout);
                }
            });
        });
        ui.separator();

        ui.vertical_centered(|ui| {
            ui.add_space(20.);
            let avatar = match &session.profile_image {
                Some(image) => ui.add(
                    Image::new(image.uri())
                        .fit_to_exact_size(Vec2::splat(AVATAR_SIZE))
                        .corner_radius(AVATAR_SIZE / 2.)
                        .sense(Sense::click()),
                ),
                None => placeholder_avatar(ui),
            };
            if avatar.on_hover_text("Choose a profile picture").clicked() {
                actions.push(Action::PickProfileImage);
            }
            ui.add_space(10.);
            if !session.username.is_empty() {
                ui.label(RichText::new(&session.username).size(18.));
            }
        });
    }

    pub(crate) fn alert_window(&self, ctx: &egui::Context, actions: &mut Vec<Action>) {
        let Some(alert) = self.state.session.alert else {
            return;
        };
        egui::Window::new(alert.title())
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0., 0.])
            .show(ctx, |ui| {
                ui.label(alert.message());
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        actions.push(Action::DismissAlert);
                    }
                });
            });
    }
}

fn placeholder_avatar(ui: &mut Ui) -> egui::Response {
    let (response, painter) = ui.allocate_painter(Vec2::splat(AVATAR_SIZE), Sense::click());
    let center = response.rect.center();
    let radius = AVATAR_SIZE / 2.;
    painter.circle(center, radius, PALETTE_MAROON, Stroke::new(2., Color32::WHITE));
    // head and shoulders
    painter.circle_filled(center - egui::vec2(0., radius * 0.25), radius * 0.3, Color32::WHITE);
    painter.circle_filled(center + egui::vec2(0., radius * 0.55), radius * 0.45, Color32::WHITE);
    response
}
