/// Label colours offered by the card editor.
pub const LABELS: [&str; 8] = [
    "#ff6b6b", "#ffa94d", "#ffd43b", "#69db7c", "#38d9a9", "#4dabf7", "#9775fa", "#f783ac",
];

/// Board background styles. New boards use the first entry.
pub const WALLPAPERS: [&str; 8] = [
    "linear-gradient(135deg,#1d2b64,#f8cdda)",
    "linear-gradient(135deg,#141e30,#243b55)",
    "linear-gradient(135deg,#0f2027,#203a43,#2c5364)",
    "linear-gradient(135deg,#3a1c71,#d76d77,#ffaf7b)",
    "linear-gradient(135deg,#2b5876,#4e4376)",
    "linear-gradient(135deg,#bdc3c7,#2c3e50)",
    "linear-gradient(135deg,#16222A,#3A6073)",
    "linear-gradient(135deg,#20002c,#cbb4d4)",
];

pub fn default_wallpaper() -> String {
    WALLPAPERS[0].to_string()
}
