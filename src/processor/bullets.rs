//! Bullet budget read from the map's own custom properties.

use super::MissingSection;
use crate::model::BulletBudget;
use crate::parser::Element;

pub const MAX_BULLETS: &str = "maxBullets";
pub const MEDAL_BULLETS: &str = "medalBullets";

/// A missing entry is not an error here, it just stays `None`.
pub fn extract_bullets(root: &Element) -> Result<BulletBudget, MissingSection> {
    let props = root.child("properties").ok_or(MissingSection::MapProperties)?;

    let lookup = |name: &str| {
        props
            .children_named("property")
            .find(|p| p.attr("name") == Some(name))
            .and_then(|p| p.attr("value"))
            .map(str::to_string)
    };

    Ok(BulletBudget {
        max_bullets: lookup(MAX_BULLETS),
        medal_bullets: lookup(MEDAL_BULLETS),
    })
}
