// Tab and auth flow driven only through AppState::update

use museum_map::profile::ProfileImage;
use museum_map::session::AuthAlert;
use museum_map::{Action, AppState, Effect, Tab, museum_catalog};

fn type_credentials(state: &mut AppState, username: &str, password: &str) {
    state.session.username = username.to_string();
    state.session.password = password.to_string();
}

#[test]
fn test_full_session() {
    let mut state = AppState::new(museum_catalog());
    state.update(Action::SelectTab(Tab::Login));

    // wrong password first
    type_credentials(&mut state, "user", "wrong");
    assert!(state.update(Action::SubmitLogin).is_empty());
    assert_eq!(state.session.alert, Some(AuthAlert::AuthenticationFailed));
    assert!(!state.session.is_authenticated);
    assert_eq!(state.selected_tab, Tab::Login);
    state.update(Action::DismissAlert);
    assert!(state.session.alert.is_none());

    type_credentials(&mut state, "user", "password");
    assert!(state.update(Action::SubmitLogin).is_empty());
    assert!(state.session.is_authenticated);
    assert_eq!(state.selected_tab, Tab::Profile);

    assert_eq!(state.update(Action::PickProfileImage), vec![Effect::OpenImagePicker]);
    state.update(Action::ProfileImageSelected(Some(ProfileImage::new(
        "/tmp/avatar.jpg".into(),
    ))));
    // a cancelled second pick keeps the first image
    state.update(Action::ProfileImageSelected(None));
    assert!(state.session.profile_image.is_some());

    state.update(Action::Logout);
    assert!(!state.session.is_authenticated);
    assert!(state.session.profile_image.is_none());
    assert_eq!(state.visible_tabs(), [Tab::Map, Tab::List, Tab::Login]);
}

#[test]
fn test_register_with_mismatched_confirmation() {
    let mut state = AppState::new(museum_catalog());
    state.update(Action::SelectTab(Tab::Login));
    state.update(Action::BeginRegistration);
    assert!(state.session.is_registering);
    assert!(!state.session.is_authenticated);
    assert_eq!(state.visible_tabs(), [Tab::Map, Tab::List, Tab::Register]);

    state.session.username = "anna".to_string();
    state.session.email = "anna@example.com".to_string();
    state.session.password = "secret".to_string();
    state.session.confirm_password = "different".to_string();
    state.update(Action::SubmitRegistration);

    assert!(state.session.is_authenticated);
    assert!(!state.session.is_registering);
    assert_eq!(state.selected_tab, Tab::Profile);
}

#[test]
fn test_map_and_list_unaffected_by_auth() {
    let mut state = AppState::new(museum_catalog());
    state.update(Action::SelectTab(Tab::List));
    type_credentials(&mut state, "user", "password");
    state.update(Action::SubmitLogin);
    assert_eq!(state.selected_tab, Tab::List);

    state.update(Action::Logout);
    assert_eq!(state.selected_tab, Tab::List);
}
