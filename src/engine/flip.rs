//! Flip the outgoing page over to reveal the incoming one on its back.

use super::Descriptor;
use crate::core::{PageClass, Side, Stage};

fn flip_class(side: Side) -> PageClass {
    match side {
        Side::Left => PageClass::FlipLeft,
        Side::Right => PageClass::FlipRight,
    }
}

pub(super) fn setup(stage: &mut Stage, d: &Descriptor) {
    let width = d.geometry.width;

    stage.container.classes.add(PageClass::Stacked);
    stage.container.style.width = Some(width);

    if let Some(from) = stage.page_mut(d.from) {
        from.classes.add(PageClass::Front);
        from.style.width = Some(width);
    }
    if let Some(to) = stage.page_mut(d.to) {
        to.classes.add(PageClass::Back).remove(PageClass::Disabled);
        to.style.width = Some(width);
    }
}

pub(super) fn trigger(stage: &mut Stage, side: Side) {
    stage.container.classes.add(flip_class(side));
}

pub(super) fn settle(stage: &mut Stage, d: &Descriptor, side: Side) {
    if let Some(from) = stage.page_mut(d.from) {
        from.classes
            .add(PageClass::Disabled)
            .remove(PageClass::Front)
            .remove(PageClass::Active);
        from.style.width = None;
    }
    if let Some(to) = stage.page_mut(d.to) {
        to.classes.remove(PageClass::Back).add(PageClass::Active);
        to.style.width = None;
    }

    stage.container.style.width = None;
    stage
        .container
        .classes
        .remove(PageClass::Stacked)
        .remove(flip_class(side));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{InlineStyle, Page, PageState, Size, TransitionKind};

    fn staged(side: Side) -> (Stage, Descriptor) {
        let stage = Stage::attach(
            Size::new(300.0, 500.0),
            vec![
                Page::tagged("page", "a"),
                Page::tagged("page", "b"),
                Page::tagged("page", "c"),
            ],
        );
        let d = Descriptor::resolve(&stage, "page", "c", TransitionKind::FlipTowards(side));
        (stage, d)
    }

    #[test]
    fn setup_stacks_front_and_back() {
        let (mut stage, d) = staged(Side::Left);
        setup(&mut stage, &d);

        assert!(stage.container.classes.contains(PageClass::Stacked));
        assert_eq!(stage.container.style.width, Some(300.0));
        assert_eq!(
            stage.pages[0].state(),
            PageState::Transitioning(PageClass::Front)
        );
        assert_eq!(
            stage.pages[2].state(),
            PageState::Transitioning(PageClass::Back)
        );
        assert_eq!(stage.pages[1].state(), PageState::Disabled);
    }

    #[test]
    fn trigger_adds_direction_class() {
        let (mut stage, d) = staged(Side::Right);
        setup(&mut stage, &d);
        trigger(&mut stage, Side::Right);

        assert!(stage.container.classes.contains(PageClass::FlipRight));
        assert!(!stage.container.classes.contains(PageClass::FlipLeft));
    }

    #[test]
    fn settle_restores_rest_state() {
        let (mut stage, d) = staged(Side::Right);
        setup(&mut stage, &d);
        trigger(&mut stage, Side::Right);
        settle(&mut stage, &d, Side::Right);

        assert_eq!(stage.container.style, InlineStyle::default());
        assert_eq!(stage.container.classes.transient().count(), 0);
        assert_eq!(stage.pages[0].state(), PageState::Disabled);
        assert_eq!(stage.pages[2].state(), PageState::Active);
        assert!(stage
            .pages
            .iter()
            .all(|p| p.element.style == InlineStyle::default()));
    }
}
