// DOM-facing names and styles used by the web bindings.

/// Inline style for the background canvas: fill the container, ignore input.
pub const CANVAS_STYLE: &str =
    "display:block;width:100%;height:100%;pointer-events:none;position:absolute;inset:0";

// Classes toggled on host elements
pub const HOVERED_CLASS: &str = "is-hovered";
pub const ZOOM_CLASS: &str = "zoom-hover";
pub const REVEALED_CLASS: &str = "is-revealed";

// Attribute carrying the scrambled overlay text on evervault cards
pub const SCRAMBLE_ATTR: &str = "data-scramble";
