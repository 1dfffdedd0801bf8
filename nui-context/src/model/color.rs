//! Color token resolution for progress bars.
//!
//! Hosts use palette tokens (`"blue"`, `"dark.3"`) for `colorScheme`. Tokens
//! from the built-in palette map onto CSS custom properties defined in
//! `assets/style.css`; anything else is passed through as a CSS color.

/// Palette names with CSS variables `--nui-<name>-<0..9>`.
pub const PALETTE: &[&str] = &[
    "dark", "gray", "red", "pink", "grape", "violet", "indigo", "blue", "cyan", "teal", "green", "lime",
    "yellow", "orange",
];

/// Shade used when a token names a palette without a shade.
const DEFAULT_SHADE: u8 = 6;

/// Resolve a color token into a CSS color value.
#[must_use]
pub fn resolve_color(token: &str) -> String {
    let token = token.trim();
    let (name, shade) = match token.split_once('.') {
        Some((name, shade)) => match shade.parse::<u8>() {
            Ok(shade) if shade <= 9 => (name, shade),
            _ => return token.to_string(),
        },
        None => (token, DEFAULT_SHADE),
    };

    if PALETTE.contains(&name) {
        format!("var(--nui-{name}-{shade})")
    } else {
        token.to_string()
    }
}
