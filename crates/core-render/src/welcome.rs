//! Welcome banner shown on an otherwise empty screen.

use core_state::EditorConfig;

/// Banner row for a screen `cols` wide: `"<product> -- version <version>"`
/// cut to the width, then centered by left padding. When there is any
/// padding its first cell is the `~` filler glyph.
pub fn welcome_line(cols: usize, config: &EditorConfig) -> String {
    let message = format!("{} -- version {}", config.product_name, config.version);
    let text: String = message.chars().take(cols).collect();
    let mut padding = (cols - text.chars().count()) / 2;
    let mut line = String::with_capacity(cols);
    if padding > 0 {
        line.push('~');
        padding -= 1;
    }
    line.extend(std::iter::repeat_n(' ', padding));
    line.push_str(&text);
    line
}
