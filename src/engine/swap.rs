//! Instant switch, no animation.

use super::Descriptor;
use crate::core::{PageClass, Stage};

pub(super) fn apply(stage: &mut Stage, d: &Descriptor) {
    if let Some(from) = stage.page_mut(d.from) {
        from.classes
            .remove(PageClass::Active)
            .add(PageClass::Disabled);
    }
    if let Some(to) = stage.page_mut(d.to) {
        to.classes
            .remove(PageClass::Disabled)
            .add(PageClass::Active);
    }
}
