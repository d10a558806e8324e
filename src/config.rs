use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Development builds show hook diagnostics
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Google Maps embed centred on Washington, DC.
pub const COVERAGE_MAP_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3105.001839478255!2d-77.0368703!3d38.9071923!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x89b7b7bcdf572b1f%3A0xefbdfd5714d0c857!2sWashington%2C%20DC!5e0!3m2!1sen!2sus!4v1730590800000!5m2!1sen!2sus";

pub const CONNECT_IMAGE_URL: &str = "https://images.unsplash.com/photo-1522770179533-24471fcdba45?auto=format&fit=crop&w=1600&q=80";
pub const POWER_UP_IMAGE_URL: &str = "https://images.unsplash.com/photo-1518458028785-8fbcd101ebb9?auto=format&fit=crop&w=1600&q=80";
pub const CTA_IMAGE_URL: &str = "https://images.unsplash.com/photo-1503376780353-7e6692767b70?auto=format&fit=crop&w=1600&q=80";

/// Intrinsic size hint for remote photos, keeps layout stable before they load.
pub const IMAGE_WIDTH: u32 = 1280;
pub const IMAGE_HEIGHT: u32 = 960;
pub const IMAGE_SIZES: &str = "(min-width: 1024px) 600px, (min-width: 768px) 80vw, 100vw";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_urls_are_https() {
        for url in [COVERAGE_MAP_URL, CONNECT_IMAGE_URL, POWER_UP_IMAGE_URL, CTA_IMAGE_URL] {
            assert!(url.starts_with("https://"), "{url}");
        }
    }

    #[test]
    fn map_url_is_an_embed() {
        assert!(COVERAGE_MAP_URL.contains("/maps/embed"));
    }
}
