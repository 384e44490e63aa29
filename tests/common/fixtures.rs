use folio::SectionBounds;
use serde_json::{Value, json};

/// Sections of the stock portfolio page, tops in document pixels.
pub fn portfolio_sections() -> Vec<SectionBounds> {
    vec![
        SectionBounds::new("about", 0.0),
        SectionBounds::new("experience", 500.0),
        SectionBounds::new("projects", 1200.0),
        SectionBounds::new("skills", 1900.0),
        SectionBounds::new("contact", 2400.0),
    ]
}

/// A configuration overriding a handful of fields from every section.
pub fn custom_config() -> Value {
    json!({
        "selectors": { "hero": ".banner" },
        "features": { "stats": false },
        "activeLink": { "lookahead": 80, "activeClass": "current" },
        "parallax": { "factor": 0.5, "maxOffset": 200 },
        "stats": { "durationMs": 1000, "tickMs": 20 },
        "email": { "navigation": "afterClipboard", "navigationDelayMs": 300 },
        "toast": { "message": "Copied!", "displayMs": 1500 }
    })
}
