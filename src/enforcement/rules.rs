//! Rest-state checks using Validation.

use crate::controller::PageController;
use crate::core::{Element, NodeRef, PageClass, Stage};
use crate::enforcement::violations::InvariantViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<InvariantViolation>>;

fn ok() -> Check {
    Validation::success(())
}

fn single_active(stage: &Stage) -> Check {
    match stage.active_count() {
        1 => ok(),
        0 => Validation::fail(InvariantViolation::NoActivePage),
        count => Validation::fail(InvariantViolation::MultipleActivePages { count }),
    }
}

fn element_at_rest(node: NodeRef, element: &Element) -> Vec<Check> {
    let classes = element.classes.transient().map(|class| -> Check {
        Validation::fail(InvariantViolation::TransientClass { node, class })
    });
    let styles = element.style.transient().into_iter().map(|property| -> Check {
        Validation::fail(InvariantViolation::TransientStyle { node, property })
    });
    classes.chain(styles).collect()
}

fn flags_consistent(index: usize, element: &Element) -> Check {
    let classes = &element.classes;
    if classes.contains(PageClass::Active) && classes.contains(PageClass::Disabled) {
        Validation::fail(InvariantViolation::ConflictingFlags { index })
    } else {
        ok()
    }
}

/// Check every rest invariant, accumulating ALL violations.
///
/// At rest exactly one page is active, no element carries a transient
/// class, and no element keeps transient inline sizing, offsets, or
/// transforms.
///
/// ```rust
/// use page_transit::core::{Page, Size, Stage};
/// use page_transit::enforcement::check_rest;
///
/// let stage = Stage::attach(Size::new(320.0, 480.0), vec![Page::tagged("page", "a")]);
/// assert!(check_rest(&stage).is_success());
///
/// let bare = Stage::new(Size::new(320.0, 480.0), vec![Page::tagged("page", "a")]);
/// assert!(check_rest(&bare).is_failure());
/// ```
pub fn check_rest(stage: &Stage) -> Check {
    let mut checks = vec![single_active(stage)];
    checks.extend(element_at_rest(NodeRef::Root, &stage.root));
    checks.extend(element_at_rest(NodeRef::Container, &stage.container));
    for (index, page) in stage.pages.iter().enumerate() {
        checks.extend(element_at_rest(NodeRef::Page(index), &page.element));
        checks.push(flags_consistent(index, &page.element));
    }
    Validation::all_vec(checks).map(|_| ())
}

impl PageController {
    /// Check the rest invariants, including that nothing is still running.
    pub fn verify_rest(&self) -> Check {
        let pending = if self.is_transitioning() {
            Validation::fail(InvariantViolation::TransitionPending)
        } else {
            ok()
        };
        let checks = vec![pending, check_rest(self.stage())];
        Validation::all_vec(checks).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{ElementId, PageOptions};
    use crate::core::{Page, Side, Size, StyleProperty, TransitionKind};
    use crate::engine::TransitionEnd;

    fn controller() -> PageController {
        PageController::attach(
            ElementId::new(),
            Size::new(320.0, 480.0),
            vec![Page::tagged("page", "a"), Page::tagged("page", "b")],
            PageOptions::default(),
        )
    }

    #[test]
    fn attached_stage_is_at_rest() {
        assert!(controller().verify_rest().is_success());
    }

    #[test]
    fn mid_flip_accumulates_all_violations() {
        let mut pages = controller();
        pages
            .transit("b", TransitionKind::FlipTowards(Side::Right))
            .unwrap();

        match pages.verify_rest() {
            Validation::Failure(errors) => {
                let has = |expected: InvariantViolation| errors.iter().any(|e| *e == expected);
                assert!(has(InvariantViolation::TransitionPending));
                assert!(has(InvariantViolation::TransientClass {
                    node: NodeRef::Container,
                    class: PageClass::Stacked,
                }));
                assert!(has(InvariantViolation::TransientClass {
                    node: NodeRef::Container,
                    class: PageClass::FlipRight,
                }));
                assert!(has(InvariantViolation::TransientStyle {
                    node: NodeRef::Page(1),
                    property: StyleProperty::Width,
                }));
                assert!(has(InvariantViolation::TransientClass {
                    node: NodeRef::Page(0),
                    class: PageClass::Front,
                }));
            }
            Validation::Success(_) => panic!("expected violations mid-transition"),
        }

        pages.notify(&TransitionEnd::container());
        assert!(pages.verify_rest().is_success());
    }

    #[test]
    fn unresolved_target_reports_no_active_page() {
        let mut pages = controller();
        pages.transit("ghost", TransitionKind::None).unwrap();

        let result = pages.verify_rest();
        assert!(result.is_failure());
        if let Validation::Failure(errors) = result {
            assert_eq!(errors.len(), 1);
            assert!(errors
                .iter()
                .any(|e| matches!(e, InvariantViolation::NoActivePage)));
        }
    }

    #[test]
    fn conflicting_flags_are_reported() {
        let mut stage = Stage::attach(Size::new(10.0, 10.0), vec![Page::tagged("page", "a")]);
        stage.pages[0].element.classes.add(PageClass::Disabled);

        let result = check_rest(&stage);
        assert!(result.is_failure());
        if let Validation::Failure(errors) = result {
            assert!(errors
                .iter()
                .any(|e| matches!(e, InvariantViolation::ConflictingFlags { index: 0 })));
        }
    }
}
