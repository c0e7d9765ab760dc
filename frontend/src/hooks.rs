use yew::prelude::*;
use yew_hooks::prelude::*;

pub fn is_mobile_width(width: f64, max_width: u32) -> bool {
    width < f64::from(max_width)
}

/// True while the viewport is narrower than `max_width` pixels. Re-evaluated
/// on every window resize.
#[hook]
pub fn use_mobile(max_width: u32) -> bool {
    let (width, _height) = use_window_size();
    is_mobile_width(width, max_width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MOBILE_BREAKPOINT;

    #[test]
    fn breakpoint_is_exclusive() {
        assert!(is_mobile_width(767.0, MOBILE_BREAKPOINT));
        assert!(!is_mobile_width(768.0, MOBILE_BREAKPOINT));
        assert!(!is_mobile_width(1440.0, MOBILE_BREAKPOINT));
    }

    #[test]
    fn custom_threshold() {
        assert!(is_mobile_width(1000.0, 1024));
        assert!(!is_mobile_width(320.0, 320));
    }
}
