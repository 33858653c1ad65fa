//! Default content for a fresh site.

/// Images inserted into an empty `slider_images` table.
pub const DATABASE_SLIDER_IMAGES: [&str; 2] = [
    "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?q=80&w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1558494949-efc025793ad1?q=80&w=1920&h=1080&fit=crop",
];

/// Slider images the in-memory store starts with.
pub const LOCAL_SLIDER_IMAGES: [&str; 4] = [
    "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?q=80&w=2070&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1497366216548-37526070297c?q=80&w=2069&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1497215842964-222b430dc094?q=80&w=2070&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1556761175-5973dc0f32e7?q=80&w=2032&auto=format&fit=crop",
];

/// Partners the in-memory store starts with, as `(name, logo_url)`.
pub const LOCAL_PARTNERS: [(&str, &str); 2] = [
    (
        "Partner 1",
        "https://upload.wikimedia.org/wikipedia/commons/thumb/9/96/Microsoft_logo_%282012%29.svg/2560px-Microsoft_logo_%282012%29.svg.png",
    ),
    (
        "Partner 2",
        "https://upload.wikimedia.org/wikipedia/commons/thumb/2/2f/Google_2015_logo.svg/2560px-Google_2015_logo.svg.png",
    ),
];
