//! Slide the incoming page in from one edge.
//!
//! The container is stretched to two pages along the slide axis with both
//! pages laid out side by side, then translated by one page so the incoming
//! page ends up where the outgoing one was. Horizontal and vertical slides
//! are the same routine on different axes.

use super::Descriptor;
use crate::core::{Edge, InlineStyle, PageClass, Stage, Translate};

/// Axis-specific classes and style slots.
struct Axis {
    container_class: PageClass,
    length: f64,
    size: fn(&mut InlineStyle) -> &mut Option<f64>,
    offset: fn(&mut InlineStyle) -> &mut Option<f64>,
    translate: fn(f64) -> Translate,
}

impl Axis {
    fn of(edge: Edge, d: &Descriptor) -> Self {
        if edge.is_horizontal() {
            Self {
                container_class: PageClass::Horizontal,
                length: d.geometry.width,
                size: width,
                offset: left,
                translate: Translate::x,
            }
        } else {
            Self {
                container_class: PageClass::Vertical,
                length: d.geometry.height,
                size: height,
                offset: top,
                translate: Translate::y,
            }
        }
    }
}

fn width(style: &mut InlineStyle) -> &mut Option<f64> {
    &mut style.width
}

fn height(style: &mut InlineStyle) -> &mut Option<f64> {
    &mut style.height
}

fn left(style: &mut InlineStyle) -> &mut Option<f64> {
    &mut style.left
}

fn top(style: &mut InlineStyle) -> &mut Option<f64> {
    &mut style.top
}

/// Positional marks as (outgoing, incoming).
fn marks(edge: Edge) -> (PageClass, PageClass) {
    match edge {
        Edge::Left => (PageClass::Right, PageClass::Left),
        Edge::Right => (PageClass::Left, PageClass::Right),
        Edge::Top => (PageClass::Bottom, PageClass::Top),
        Edge::Bottom => (PageClass::Top, PageClass::Bottom),
    }
}

pub(super) fn setup(stage: &mut Stage, d: &Descriptor, edge: Edge) {
    let axis = Axis::of(edge, d);
    let (out_mark, in_mark) = marks(edge);

    // Incoming page sits before the outgoing one when entering from the
    // leading edge, so the container starts shifted back by one page.
    let offset = if edge.is_leading() { -axis.length } else { 0.0 };
    *(axis.size)(&mut stage.container.style) = Some(axis.length * 2.0);
    *(axis.offset)(&mut stage.container.style) = Some(offset);
    stage.container.classes.add(axis.container_class);

    if let Some(from) = stage.page_mut(d.from) {
        *(axis.size)(&mut from.style) = Some(axis.length);
        from.classes.add(out_mark);
    }
    if let Some(to) = stage.page_mut(d.to) {
        *(axis.size)(&mut to.style) = Some(axis.length);
        to.classes.add(in_mark).remove(PageClass::Disabled);
    }
}

pub(super) fn trigger(stage: &mut Stage, d: &Descriptor, edge: Edge) {
    let axis = Axis::of(edge, d);
    let distance = if edge.is_leading() {
        axis.length
    } else {
        -axis.length
    };
    stage.container.classes.add(PageClass::Slide);
    stage.container.style.transform = Some((axis.translate)(distance));
}

pub(super) fn settle(stage: &mut Stage, d: &Descriptor, edge: Edge) {
    let axis = Axis::of(edge, d);
    let (out_mark, in_mark) = marks(edge);

    if let Some(from) = stage.page_mut(d.from) {
        from.classes
            .add(PageClass::Disabled)
            .remove(out_mark)
            .remove(PageClass::Active);
        *(axis.size)(&mut from.style) = None;
    }
    if let Some(to) = stage.page_mut(d.to) {
        to.classes.remove(in_mark).add(PageClass::Active);
        *(axis.size)(&mut to.style) = None;
    }

    let container = &mut stage.container;
    *(axis.size)(&mut container.style) = None;
    container.style.transform = None;
    container
        .classes
        .remove(axis.container_class)
        .remove(PageClass::Slide);
    // Vertical slides pin the container back to the top instead of
    // dropping the offset.
    *(axis.offset)(&mut container.style) = if edge.is_horizontal() {
        None
    } else {
        Some(0.0)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Page, PageState, Size, TransitionKind};

    fn staged(edge: Edge) -> (Stage, Descriptor) {
        let stage = Stage::attach(
            Size::new(320.0, 480.0),
            vec![Page::tagged("page", "a"), Page::tagged("page", "b")],
        );
        let d = Descriptor::resolve(&stage, "page", "b", TransitionKind::SlideFrom(edge));
        (stage, d)
    }

    #[test]
    fn from_left_setup_shifts_container_back() {
        let (mut stage, d) = staged(Edge::Left);
        setup(&mut stage, &d, Edge::Left);

        assert_eq!(stage.container.style.width, Some(640.0));
        assert_eq!(stage.container.style.left, Some(-320.0));
        assert!(stage.container.classes.contains(PageClass::Horizontal));
        assert!(stage.pages[0].element.classes.contains(PageClass::Right));
        assert_eq!(stage.pages[0].element.style.width, Some(320.0));
        assert!(stage.pages[1].element.classes.contains(PageClass::Left));
        assert!(!stage.pages[1].element.classes.contains(PageClass::Disabled));
    }

    #[test]
    fn from_right_trigger_translates_forward() {
        let (mut stage, d) = staged(Edge::Right);
        setup(&mut stage, &d, Edge::Right);
        trigger(&mut stage, &d, Edge::Right);

        assert_eq!(stage.container.style.left, Some(0.0));
        assert_eq!(stage.container.style.transform, Some(Translate::x(-320.0)));
        assert!(stage.container.classes.contains(PageClass::Slide));
        assert!(stage.pages[0].element.classes.contains(PageClass::Left));
        assert!(stage.pages[1].element.classes.contains(PageClass::Right));
    }

    #[test]
    fn from_top_uses_height() {
        let (mut stage, d) = staged(Edge::Top);
        setup(&mut stage, &d, Edge::Top);
        trigger(&mut stage, &d, Edge::Top);

        assert_eq!(stage.container.style.height, Some(960.0));
        assert_eq!(stage.container.style.top, Some(-480.0));
        assert_eq!(stage.container.style.width, None);
        assert_eq!(stage.container.style.transform, Some(Translate::y(480.0)));
        assert!(stage.container.classes.contains(PageClass::Vertical));
        assert!(stage.pages[0].element.classes.contains(PageClass::Bottom));
        assert!(stage.pages[1].element.classes.contains(PageClass::Top));
    }

    #[test]
    fn horizontal_settle_clears_everything() {
        let (mut stage, d) = staged(Edge::Left);
        setup(&mut stage, &d, Edge::Left);
        trigger(&mut stage, &d, Edge::Left);
        settle(&mut stage, &d, Edge::Left);

        assert_eq!(stage.container.style, InlineStyle::default());
        assert_eq!(stage.container.classes.transient().count(), 0);
        assert_eq!(stage.pages[0].state(), PageState::Disabled);
        assert_eq!(stage.pages[1].state(), PageState::Active);
        assert_eq!(stage.pages[0].element.style, InlineStyle::default());
        assert_eq!(stage.pages[1].element.style, InlineStyle::default());
    }

    #[test]
    fn vertical_settle_pins_top_to_zero() {
        let (mut stage, d) = staged(Edge::Bottom);
        setup(&mut stage, &d, Edge::Bottom);
        trigger(&mut stage, &d, Edge::Bottom);
        settle(&mut stage, &d, Edge::Bottom);

        assert_eq!(stage.container.style.top, Some(0.0));
        assert_eq!(stage.container.style.height, None);
        assert_eq!(stage.container.style.transform, None);
        assert!(stage.container.style.is_at_rest());
        assert_eq!(stage.pages[1].state(), PageState::Active);
    }
}
