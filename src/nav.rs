/// The page sections the navigation bar tracks, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Projects,
    Services,
}

impl Section {
    /// Sections that get a link in the navigation bar.
    pub const LINKED: [Section; 3] = [Section::Home, Section::About, Section::Projects];

    /// Classifies a vertical scroll offset into the section whose band contains it.
    ///
    /// Bands are half-open and one viewport tall, except the first (half a
    /// viewport) and the last (unbounded):
    /// `[0, 0.5H)` home, `[0.5H, 1.5H)` about, `[1.5H, 2.5H)` projects, `[2.5H, ∞)` services.
    ///
    /// A viewport height that is not strictly positive, or a NaN offset, yields `Home`.
    pub fn from_scroll(offset: f64, viewport_height: f64) -> Self {
        if offset.is_nan() || viewport_height.is_nan() || viewport_height <= 0.0 {
            return Self::Home;
        }
        if offset < viewport_height * 0.5 {
            Self::Home
        } else if offset < viewport_height * 1.5 {
            Self::About
        } else if offset < viewport_height * 2.5 {
            Self::Projects
        } else {
            Self::Services
        }
    }

    /// The DOM id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Services => "services",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Início",
            Self::About => "Sobre Mim",
            Self::Projects => "Projetos",
            Self::Services => "Serviços",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

/// The parts of the browser window that programmatic scrolling needs.
pub trait Viewport {
    /// Document offset of the top of the element with `id`, if it exists.
    fn section_top(&self, id: &str) -> Option<f64>;
    fn smooth_scroll_to(&self, top: f64);
}

/// Scrolls the viewport so that `target` sits at the top of the window.
///
/// The mobile menu is closed whether or not the section exists; a missing
/// section is otherwise a no-op. Returns `true` when a scroll was issued.
pub fn scroll_to_section<V: Viewport>(
    viewport: &V,
    target: Section,
    close_menu: impl FnOnce(),
) -> bool {
    let scrolled = match viewport.section_top(target.id()) {
        Some(top) => {
            viewport.smooth_scroll_to(top);
            true
        }
        None => {
            log::debug!("no element with id '{}', skipping scroll", target.id());
            false
        }
    };
    close_menu();
    scrolled
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    use super::*;

    const H: f64 = 800.0;

    struct FakeViewport {
        tops: HashMap<&'static str, f64>,
        scrolled_to: RefCell<Vec<f64>>,
    }

    impl FakeViewport {
        fn with_sections(sections: &[(&'static str, f64)]) -> Self {
            Self {
                tops: sections.iter().copied().collect(),
                scrolled_to: RefCell::new(Vec::new()),
            }
        }
    }

    impl Viewport for FakeViewport {
        fn section_top(&self, id: &str) -> Option<f64> {
            self.tops.get(id).copied()
        }

        fn smooth_scroll_to(&self, top: f64) {
            self.scrolled_to.borrow_mut().push(top);
        }
    }

    #[test]
    fn test_band_interiors() {
        assert_eq!(Section::from_scroll(0.0, H), Section::Home);
        assert_eq!(Section::from_scroll(100.0, H), Section::Home);
        assert_eq!(Section::from_scroll(800.0, H), Section::About);
        assert_eq!(Section::from_scroll(1600.0, H), Section::Projects);
        assert_eq!(Section::from_scroll(10_000.0, H), Section::Services);
    }

    #[test]
    fn test_band_boundaries_are_half_open() {
        assert_eq!(Section::from_scroll(0.5 * H - 0.001, H), Section::Home);
        assert_eq!(Section::from_scroll(0.5 * H, H), Section::About);
        assert_eq!(Section::from_scroll(1.5 * H - 0.001, H), Section::About);
        assert_eq!(Section::from_scroll(1.5 * H, H), Section::Projects);
        assert_eq!(Section::from_scroll(2.5 * H - 0.001, H), Section::Projects);
        assert_eq!(Section::from_scroll(2.5 * H, H), Section::Services);
    }

    #[test]
    fn test_depends_only_on_ratio() {
        for h in [300.0, 667.0, 1080.0, 2160.0] {
            for ratio in [0.0, 0.25, 0.5, 1.0, 1.5, 2.0, 2.5, 7.0] {
                assert_eq!(
                    Section::from_scroll(ratio * h, h),
                    Section::from_scroll(ratio * H, H),
                    "ratio {ratio} at height {h}"
                );
            }
        }
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(Section::from_scroll(500.0, 0.0), Section::Home);
        assert_eq!(Section::from_scroll(500.0, -10.0), Section::Home);
        assert_eq!(Section::from_scroll(f64::NAN, H), Section::Home);
        assert_eq!(Section::from_scroll(500.0, f64::NAN), Section::Home);
        // overscroll bounce on mobile browsers
        assert_eq!(Section::from_scroll(-40.0, H), Section::Home);
        // viewport size before hydration
        assert_eq!(Section::from_scroll(0.0, f64::INFINITY), Section::Home);
    }

    #[test]
    fn test_ids_and_hrefs() {
        assert_eq!(Section::About.id(), "about");
        assert_eq!(Section::Projects.href(), "#projects");
        assert!(!Section::LINKED.contains(&Section::Services));
    }

    #[test]
    fn test_scroll_to_existing_section() {
        let viewport = FakeViewport::with_sections(&[("home", 0.0), ("about", 812.0)]);
        let menu_open = Cell::new(true);

        let scrolled = scroll_to_section(&viewport, Section::About, || menu_open.set(false));

        assert!(scrolled);
        assert_eq!(*viewport.scrolled_to.borrow(), vec![812.0]);
        assert!(!menu_open.get());
    }

    #[test]
    fn test_scroll_to_missing_section_still_closes_menu() {
        let viewport = FakeViewport::with_sections(&[("home", 0.0)]);
        let menu_open = Cell::new(true);

        let scrolled = scroll_to_section(&viewport, Section::Services, || menu_open.set(false));

        assert!(!scrolled);
        assert!(viewport.scrolled_to.borrow().is_empty());
        assert!(!menu_open.get());
    }
}
