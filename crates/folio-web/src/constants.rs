// Page wiring and canvas sizing

// Section canvases looked up by id; a missing one leaves its section unmounted
pub const HERO_CANVAS_ID: &str = "hero-canvas";
pub const ABOUT_CANVAS_ID: &str = "about-canvas";
pub const SKILLS_CANVAS_ID: &str = "skills-canvas";
pub const CONTACT_CANVAS_ID: &str = "contact-canvas";

// One canvas per project card, in document order
pub const PROJECT_CANVAS_SELECTOR: &str = ".project-canvas";

// Card enclosing a project canvas and the attribute naming its visualization
pub const PROJECT_CARD_SELECTOR: &str = ".project-card";
pub const PROJECT_KIND_ATTR: &str = "data-project";

// Cap on devicePixelRatio used for canvas backing stores
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;
