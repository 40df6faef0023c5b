//! Compile-time design constants shared across sections.

pub const MOSS: &str = "#2E4036";
pub const CLAY: &str = "#CC5833";
pub const CREAM: &str = "#F2F0E9";
pub const CHARCOAL: &str = "#1A1A1A";

pub const HERO_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1470115636492-6d2b56f9146d?q=80&w=2070&auto=format&fit=crop";
pub const PHILOSOPHY_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1542601906990-b4d3fb778b09?q=80&w=2074&auto=format&fit=crop";

pub const FONTS_URL: &str = "https://fonts.googleapis.com/css2?family=Cormorant+Garamond:ital,wght@0,400;0,600;1,400;1,600&family=JetBrains+Mono:wght@400;700&family=Outfit:wght@300;400;600&family=Plus+Jakarta+Sans:ital,wght@0,300;0,400;0,600;0,800;1,400&display=swap";
