use thiserror::Error;

/// Offset added to the scroll position before matching, so content sitting
/// under the fixed navigation bar does not count as in view.
pub const NAV_OFFSET: f64 = 100.0;

/// Named page regions, in visual top-to-bottom order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Projects,
    Skills,
    Hobby,
    Contact,
}

impl Section {
    /// Every section, in the order used for scroll matching.
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Hobby,
        Section::Contact,
    ];

    /// Sections listed in the navigation bar (everything below the hero).
    pub const NAV: [Section; 5] = [
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Hobby,
        Section::Contact,
    ];

    /// Element id of the section's region in the rendered page.
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Hobby => "hobby",
            Section::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Hobby => "Hobby",
            Section::Contact => "Contact",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct UnknownSection(String);

impl TryFrom<&str> for Section {
    type Error = UnknownSection;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "hero" => Ok(Section::Hero),
            "about" => Ok(Section::About),
            "projects" => Ok(Section::Projects),
            "skills" => Ok(Section::Skills),
            "hobby" => Ok(Section::Hobby),
            "contact" => Ok(Section::Contact),
            _ => Err(UnknownSection(value.to_string())),
        }
    }
}

/// Current document coordinates of a section's rendered region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    /// Half-open containment: `top <= pos < bottom`.
    pub fn contains(self, pos: f64) -> bool {
        pos >= self.top && pos < self.bottom()
    }
}

/// Maps the vertical scroll position to the active section.
///
/// Bounds are looked up per scan so the tracker works against any layout
/// source. When nothing matches (scrolled past the last section, or layout
/// not measured yet) the previous answer is kept.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    active: Section,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self {
            active: Section::ALL[0],
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Recompute the active section for a scroll offset.
    ///
    /// The first section in `ALL` order whose bounds contain the probe wins;
    /// sections without bounds are skipped.
    pub fn handle_scroll<F>(&mut self, scroll_y: f64, bounds: F) -> Section
    where
        F: Fn(Section) -> Option<SectionBounds>,
    {
        let probe = scroll_y + NAV_OFFSET;
        for section in Section::ALL {
            if bounds(section).is_some_and(|b| b.contains(probe)) {
                self.active = section;
                break;
            }
        }
        self.active
    }
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Page-like layout: hero fills a viewport, content sections follow with
    // no gaps, every height comfortably above NAV_OFFSET.
    fn fixture(section: Section) -> Option<SectionBounds> {
        match section {
            Section::Hero => Some(SectionBounds::new(0.0, 800.0)),
            Section::About => Some(SectionBounds::new(800.0, 700.0)),
            Section::Projects => Some(SectionBounds::new(1500.0, 1600.0)),
            Section::Skills => Some(SectionBounds::new(3100.0, 900.0)),
            Section::Hobby => Some(SectionBounds::new(4000.0, 750.0)),
            Section::Contact => Some(SectionBounds::new(4750.0, 450.0)),
        }
    }

    #[test]
    fn test_bounds_are_half_open() {
        let b = SectionBounds::new(100.0, 50.0);
        assert!(!b.contains(99.0));
        assert!(b.contains(100.0));
        assert!(b.contains(149.0));
        assert!(!b.contains(150.0));
    }

    #[test]
    fn test_scroll_activates_containing_section() {
        let mut tracker = SectionTracker::new();
        assert_eq!(tracker.active(), Section::Hero);

        // Probes inside each region
        assert_eq!(tracker.handle_scroll(0.0, fixture), Section::Hero);
        assert_eq!(tracker.handle_scroll(900.0, fixture), Section::About);
        assert_eq!(tracker.handle_scroll(2000.0, fixture), Section::Projects);
        assert_eq!(tracker.handle_scroll(4700.0, fixture), Section::Contact);

        // A smooth scroll to a section parks scroll_y at the section's top,
        // which must map back to that same section
        for section in Section::ALL {
            let top = fixture(section).unwrap().top;
            assert_eq!(tracker.handle_scroll(top, fixture), section);
        }
    }

    #[test]
    fn test_switches_at_exact_boundaries() {
        // For each adjacent pair: one unit below the boundary still maps to
        // the earlier section, the boundary itself maps to the later one.
        let mut tracker = SectionTracker::new();
        for pair in Section::ALL.windows(2) {
            let (earlier, later) = (pair[0], pair[1]);
            let boundary = fixture(later).unwrap().top;
            assert_eq!(
                tracker.handle_scroll(boundary - NAV_OFFSET - 1.0, fixture),
                earlier,
                "one unit before {later} should still be {earlier}"
            );
            assert_eq!(
                tracker.handle_scroll(boundary - NAV_OFFSET, fixture),
                later,
                "the boundary itself should already be {later}"
            );
            assert_eq!(
                tracker.handle_scroll(boundary - NAV_OFFSET + 1.0, fixture),
                later
            );
        }
    }

    #[test]
    fn test_no_match_retains_previous_answer() {
        let mut tracker = SectionTracker::new();

        // Nothing measured yet: stays on the initial section
        assert_eq!(tracker.handle_scroll(2000.0, |_| None), Section::Hero);

        // Scrolled past the last region: the last match sticks
        assert_eq!(tracker.handle_scroll(4800.0, fixture), Section::Contact);
        assert_eq!(tracker.handle_scroll(9999.0, fixture), Section::Contact);
        assert_eq!(tracker.active(), Section::Contact);
    }

    #[test]
    fn test_missing_regions_are_skipped() {
        let bounds = |section: Section| {
            if section == Section::About {
                None
            } else {
                fixture(section)
            }
        };
        let mut tracker = SectionTracker::new();
        // probe lands where about used to be, nothing else matches
        assert_eq!(tracker.handle_scroll(900.0, bounds), Section::Hero);
        // regions after the gap still match
        assert_eq!(tracker.handle_scroll(2000.0, bounds), Section::Projects);
    }

    #[test]
    fn test_overlap_prefers_the_earlier_section() {
        let bounds = |section: Section| match section {
            Section::About => Some(SectionBounds::new(800.0, 900.0)),
            Section::Projects => Some(SectionBounds::new(1500.0, 1000.0)),
            _ => None,
        };
        // probe 1600 sits inside both regions; about is listed first
        let mut tracker = SectionTracker::new();
        assert_eq!(tracker.handle_scroll(1500.0, bounds), Section::About);
    }

    #[test]
    fn test_section_id_parsing() {
        for section in Section::ALL {
            assert_eq!(Section::try_from(section.id()), Ok(section));
        }
        assert!(Section::try_from("blog").is_err());
        assert!(Section::try_from("").is_err());
        assert!(Section::try_from("About").is_err());
    }
}
