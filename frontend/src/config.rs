const PRODUCTION_RELAY_URL: &str = "https://formspree.io/f/xvgkqwzv";

/// Subject line the relay puts on every join-team application.
pub const RELAY_SUBJECT: &str = "New Team Member Application";

/// Viewport widths below this many pixels get the mobile layouts.
pub const MOBILE_BREAKPOINT: u32 = 768;

pub const TOAST_DURATION_MS: u32 = 4000;

#[cfg(debug_assertions)]
pub fn get_relay_url() -> &'static str {
    // Lets local builds post to a mock relay instead of the live form.
    option_env!("FORM_RELAY_URL").unwrap_or(PRODUCTION_RELAY_URL)
}

#[cfg(not(debug_assertions))]
pub fn get_relay_url() -> &'static str {
    PRODUCTION_RELAY_URL
}
