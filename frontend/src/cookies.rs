use std::time::Duration;
use wasm_cookies::CookieOptions;
use crate::theme::Theme;

const THEME: &str = "theme";
const POLL: &str = "poll";

/// Both cookies are kept for a year from the last write.
const YEAR: Duration = Duration::from_secs(365 * 24 * 60 * 60);

fn options() -> CookieOptions<'static> {
    CookieOptions::default().expires_after(YEAR)
}

/// The theme recorded on a previous visit, if any.
pub fn theme() -> Option<Theme> {
    wasm_cookies::get(THEME)?.ok()?.parse().ok()
}

pub fn save_theme(theme: Theme) {
    wasm_cookies::set(THEME, &theme.to_string(), &options());
}

/// The id the server assigned to this browser's vote, if it has one.
pub fn poll_id() -> Option<String> {
    wasm_cookies::get(POLL)?.ok()
}

pub fn save_poll_id(id: &str) {
    wasm_cookies::set(POLL, id, &options());
}

pub fn forget_poll_id() {
    wasm_cookies::delete(POLL);
}
