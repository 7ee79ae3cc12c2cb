pub mod sectors;

use crate::settings;

/// Backend API base URL, resolved from settings
pub fn api_base() -> String {
    settings::get_settings().api_base_url()
}
