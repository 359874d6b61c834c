// Screen state and the single update function that mutates it

use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{Catalog, Place};
use crate::profile::ProfileImage;
use crate::session::SessionState;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Map,
    List,
    Profile,
    Login,
    Register,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Map => "Map",
            Tab::List => "List",
            Tab::Profile => "Profile",
            Tab::Login => "Login",
            Tab::Register => "Register",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Map => "🗺",
            Tab::List => "☰",
            Tab::Profile | Tab::Login | Tab::Register => "👤",
        }
    }

    fn is_auth(&self) -> bool {
        matches!(self, Tab::Profile | Tab::Login | Tab::Register)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectTab(Tab),
    SubmitLogin,
    BeginRegistration,
    CancelRegistration,
    SubmitRegistration,
    Logout,
    DismissAlert,
    PickProfileImage,
    ProfileImageSelected(Option<ProfileImage>),
    OpenPlace(Uuid),
    ClosePlaceDetail,
    ShowPlaceOnMap(Uuid),
}

/// Side effects the shell has to carry out after an update
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    OpenImagePicker,
    SelectPlace(Place),
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub selected_tab: Tab,
    pub session: SessionState,
    pub catalog: Catalog,
    /// Place whose detail placeholder is open in the list tab
    pub opened_place: Option<Uuid>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Default::default()
        }
    }

    /// The auth tab that currently replaces the other two variants
    pub fn auth_tab(&self) -> Tab {
        if self.session.is_authenticated {
            Tab::Profile
        } else if self.session.is_registering {
            Tab::Register
        } else {
            Tab::Login
        }
    }

    pub fn visible_tabs(&self) -> [Tab; 3] {
        [Tab::Map, Tab::List, self.auth_tab()]
    }

    pub fn opened_place(&self) -> Option<&Place> {
        self.opened_place.and_then(|id| self.catalog.find(id))
    }

    pub fn update(&mut self, action: Action) -> Vec<Effect> {
        debug!("Handling {:?}", action);
        let mut effects = Vec::new();
        match action {
            Action::SelectTab(tab) => {
                if self.visible_tabs().contains(&tab) {
                    self.selected_tab = tab;
                }
            }
            // a failed attempt leaves its alert on the session for the shell to draw
            Action::SubmitLogin => {
                self.session.submit_login();
            }
            Action::BeginRegistration => self.session.begin_registration(),
            Action::CancelRegistration => self.session.cancel_registration(),
            Action::SubmitRegistration => self.session.register(),
            Action::Logout => self.session.logout(),
            Action::DismissAlert => self.session.dismiss_alert(),
            Action::PickProfileImage => {
                if self.session.is_authenticated {
                    effects.push(Effect::OpenImagePicker);
                }
            }
            Action::ProfileImageSelected(image) => self.session.set_profile_image(image),
            Action::OpenPlace(id) => {
                if self.catalog.find(id).is_some() {
                    self.opened_place = Some(id);
                }
            }
            Action::ClosePlaceDetail => self.opened_place = None,
            Action::ShowPlaceOnMap(id) => {
                if let Some(place) = self.catalog.find(id) {
                    effects.push(Effect::SelectPlace(place.clone()));
                    self.selected_tab = Tab::Map;
                }
            }
        }

        // keep the selection on the auth variant that is actually shown
        if self.selected_tab.is_auth() {
            self.selected_tab = self.auth_tab();
        }
        effects
    }
}
