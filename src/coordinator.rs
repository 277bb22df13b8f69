//! Keeps every selector showing the shared colour without feedback loops.
//!
//! A selector that produced an edit already shows it, so a user edit is pushed to
//! every *other* selector. Colours arriving from outside the panel (a drop, the
//! host's brush) are pushed to all of them.

use std::cell::RefCell;
use std::rc::Rc;

use crate::color_space::Color;
use crate::model::ColorModel;

/// Anything that displays the shared colour.
pub trait ColorSelector {
    /// Show `color`. Must not report the change back as a user edit.
    fn set_color(&mut self, color: Color);

    /// Short name used in log output.
    fn name(&self) -> &'static str;
}

/// Handle identifying a registered selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectorId(usize);

pub type SharedSelector = Rc<RefCell<dyn ColorSelector>>;

pub struct SelectorCoordinator {
    model: ColorModel,
    selectors: Vec<(SelectorId, SharedSelector)>,
    next_id: usize,
}

impl SelectorCoordinator {
    pub fn new(model: ColorModel) -> Self {
        Self {
            model,
            selectors: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a selector and bring it up to date with the current colour.
    pub fn register(&mut self, selector: SharedSelector) -> SelectorId {
        let id = SelectorId(self.next_id);
        self.next_id += 1;
        selector.borrow_mut().set_color(self.model.current());
        log::debug!(
            "SelectorCoordinator: registered {} as {:?}",
            selector.borrow().name(),
            id
        );
        self.selectors.push((id, selector));
        id
    }

    pub fn unregister(&mut self, id: SelectorId) -> bool {
        let before = self.selectors.len();
        self.selectors.retain(|(selector_id, _)| *selector_id != id);
        self.selectors.len() != before
    }

    pub fn model(&self) -> &ColorModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut ColorModel {
        &mut self.model
    }

    pub fn current(&self) -> Color {
        self.model.current()
    }

    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    /// A selector committed a colour: store it and update every other selector.
    pub fn user_edited(&mut self, source: SelectorId, color: Color) {
        self.model.set_color(color);
        self.broadcast(color, Some(source));
    }

    /// A selector is still being dragged: show `color` everywhere else without
    /// committing it.
    pub fn user_previewed(&mut self, source: SelectorId, color: Color) {
        self.model.preview_color(color);
        self.broadcast(color, Some(source));
    }

    /// A colour from outside the panel: store it and update every selector.
    pub fn external_color_push(&mut self, color: Color) {
        self.model.set_color(color);
        self.broadcast(color, None);
    }

    fn broadcast(&self, color: Color, exclude: Option<SelectorId>) {
        for (id, selector) in &self.selectors {
            if Some(*id) == exclude {
                continue;
            }
            // A selector already mid-update is the source itself; skip it.
            match selector.try_borrow_mut() {
                Ok(mut selector) => selector.set_color(color),
                Err(_) => log::warn!("SelectorCoordinator: {id:?} busy, skipped broadcast"),
            }
        }
        log::trace!(
            "SelectorCoordinator: broadcast {:?} (excluding {exclude:?})",
            color.rgb()
        );
    }
}

impl std::fmt::Debug for SelectorCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectorCoordinator")
            .field("model", &self.model)
            .field("selectors", &self.selectors.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_space::Rgb;

    /// Records every colour it is shown.
    struct Recorder {
        seen: Vec<Color>,
    }

    impl ColorSelector for Recorder {
        fn set_color(&mut self, color: Color) {
            self.seen.push(color);
        }

        fn name(&self) -> &'static str {
            "recorder"
        }
    }

    fn recorder() -> Rc<RefCell<Recorder>> {
        Rc::new(RefCell::new(Recorder { seen: Vec::new() }))
    }

    fn setup() -> (SelectorCoordinator, Vec<(SelectorId, Rc<RefCell<Recorder>>)>) {
        let mut coordinator = SelectorCoordinator::new(ColorModel::default());
        let recorders = (0..3)
            .map(|_| {
                let p = recorder();
                let id = coordinator.register(p.clone());
                p.borrow_mut().seen.clear();
                (id, p)
            })
            .collect();
        (coordinator, recorders)
    }

    #[test]
    fn test_register_pushes_current_color() {
        let mut coordinator = SelectorCoordinator::new(ColorModel::default());
        let p = recorder();
        coordinator.register(p.clone());
        assert_eq!(p.borrow().seen, vec![Color::default()]);
        assert_eq!(coordinator.len(), 1);
    }

    #[test]
    fn test_user_edit_skips_source() {
        let (mut coordinator, recorders) = setup();
        let white = Color::from_rgb(Rgb::WHITE);
        coordinator.user_edited(recorders[1].0, white);

        assert_eq!(coordinator.current(), white);
        assert_eq!(recorders[0].1.borrow().seen, vec![white]);
        assert!(recorders[1].1.borrow().seen.is_empty());
        assert_eq!(recorders[2].1.borrow().seen, vec![white]);
    }

    #[test]
    fn test_external_push_reaches_everyone() {
        let (mut coordinator, recorders) = setup();
        let black = Color::from_rgb(Rgb::BLACK);
        coordinator.external_color_push(black);
        for (_, p) in &recorders {
            assert_eq!(p.borrow().seen, vec![black]);
        }
    }

    #[test]
    fn test_user_edit_updates_model_previous() {
        let (mut coordinator, recorders) = setup();
        coordinator.user_edited(recorders[0].0, Color::from_rgb(Rgb::WHITE));
        assert_eq!(coordinator.model().previous(), Color::default());
    }

    #[test]
    fn test_preview_skips_source_and_keeps_previous() {
        let (mut coordinator, recorders) = setup();
        let white = Color::from_rgb(Rgb::WHITE);
        coordinator.user_previewed(recorders[0].0, white);

        assert_eq!(coordinator.current(), white);
        assert!(recorders[0].1.borrow().seen.is_empty());
        assert_eq!(recorders[1].1.borrow().seen, vec![white]);
        assert_eq!(coordinator.model().previous(), Color::default());
    }

    #[test]
    fn test_busy_selector_is_skipped() {
        let (mut coordinator, recorders) = setup();
        let _held = recorders[2].1.borrow_mut();
        coordinator.external_color_push(Color::from_rgb(Rgb::WHITE));
        assert_eq!(recorders[0].1.borrow().seen.len(), 1);
    }

    #[test]
    fn test_unregister() {
        let (mut coordinator, recorders) = setup();
        assert!(coordinator.unregister(recorders[0].0));
        assert!(!coordinator.unregister(recorders[0].0));
        coordinator.external_color_push(Color::from_rgb(Rgb::WHITE));
        assert!(recorders[0].1.borrow().seen.is_empty());
    }
}
