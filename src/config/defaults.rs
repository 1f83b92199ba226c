use std::path::PathBuf;

pub fn default_export_filename() -> PathBuf {
    PathBuf::from("smorgasbord-plan.doc")
}

pub fn default_export_title() -> String {
    "Smorgasbord Plan".to_string()
}
