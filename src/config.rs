use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Application configuration
// ---------------------------------------------------------------------------

/// Fixed file locations and window geometry. Paths are relative to the
/// working directory the dashboard is started from.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub dataset_path: PathBuf,
    pub model_path: PathBuf,
    pub home_image_path: PathBuf,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("diabetes.csv"),
            model_path: PathBuf::from("model").join("diabetes_model.json"),
            home_image_path: PathBuf::from("kesehatan diabetes.jpg"),
            window_size: [1200.0, 800.0],
            min_window_size: [600.0, 400.0],
        }
    }
}

impl AppConfig {
    /// The default layout re-rooted under `dir`.
    #[cfg(test)]
    pub fn rooted_at(dir: &Path) -> Self {
        let defaults = Self::default();
        Self {
            dataset_path: dir.join(&defaults.dataset_path),
            model_path: dir.join(&defaults.model_path),
            home_image_path: dir.join(&defaults.home_image_path),
            ..defaults
        }
    }
}

/// Split a model path into `(file name, parent folder)` for display.
pub fn model_location(path: &Path) -> (String, String) {
    let file = path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let folder = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| ".".to_string());
    (file, folder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_location() {
        let (file, folder) = model_location(&AppConfig::default().model_path);
        assert_eq!(file, "diabetes_model.json");
        assert_eq!(folder, "model");
    }

    #[test]
    fn rooted_config_keeps_file_names() {
        let cfg = AppConfig::rooted_at(Path::new("/srv/app"));
        assert_eq!(cfg.dataset_path, Path::new("/srv/app/diabetes.csv"));
        assert_eq!(cfg.window_size, AppConfig::default().window_size);
        assert_eq!(model_location(Path::new("m.json")).1, ".");
    }
}
