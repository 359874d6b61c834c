// Profile picture selection

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// Handle to a picked image on disk. The file is not validated.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ProfileImage {
    pub path: PathBuf,
}

impl ProfileImage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// URI understood by the egui_extras file loader
    pub fn uri(&self) -> String {
        format!("file://{}", self.path.display())
    }
}

pub trait ImagePicker {
    /// `None` when the user cancels
    fn pick(&self) -> Option<ProfileImage>;
}

/// Native file dialog restricted to image files
#[derive(Default)]
pub struct FileDialogPicker;

impl ImagePicker for FileDialogPicker {
    fn pick(&self) -> Option<ProfileImage> {
        rfd::FileDialog::new()
            .set_title("Choose a profile picture")
            .add_filter("Images", &IMAGE_EXTENSIONS)
            .pick_file()
            .map(ProfileImage::new)
    }
}
