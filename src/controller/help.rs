const HELP_LINES: &[&str] = &[
    "STUDY BUDDY HELP",
    "================",
    "",
    "HOME:",
    "  t - Study tips",
    "  w - Study websites",
    "  ←, →, Tab - Switch button",
    "  Enter, Space - Open selected button",
    "  m - Email the contact address (when configured)",
    "",
    "STUDY TIPS:",
    "  j, ↓ - Next tip",
    "  k, ↑ - Previous tip",
    "  1-9 - Jump to tip",
    "  Tab, Shift+Tab - Focus next/previous link",
    "  Enter - Open focused link",
    "  y - Copy focused link",
    "  J, K - Scroll content one line",
    "  Space, Page Down, Ctrl+d - Scroll down a page",
    "  Page Up, Ctrl+u - Scroll up a page",
    "  gg, G - Top/bottom of tip",
    "  Esc, b - Back home",
    "",
    "STUDY WEBSITES:",
    "  h, j, k, l, arrows - Move between sites",
    "  Home, End - First/last site",
    "  Enter - Open site",
    "  y - Copy site address",
    "  Esc, b - Back home",
    "",
    "MOUSE:",
    "  Click buttons, tips, links and site cards",
    "  Wheel scrolls tip content",
    "",
    "OTHER:",
    "  ? - Toggle this help",
    "  Ctrl+l - Redraw screen",
    "  q, Ctrl+c - Quit",
    "",
    "Press any key to close",
];

pub fn help_lines() -> &'static [&'static str] {
    HELP_LINES
}
