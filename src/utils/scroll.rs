//! Scroll-driven view state: which named section currently sits under the
//! reference line, and how far through the document the user has scrolled.

use web_sys::Document;

/// Distance in px from the viewport top; the first section whose box crosses
/// this line is the active one.
pub const SECTION_REFERENCE_LINE: f64 = 200.0;

/// Viewport-relative vertical extent of a rendered section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub bottom: f64,
}

impl SectionRect {
    fn straddles(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// First section, in declared order, whose rect straddles the reference line.
/// `None` means the previous active section should be kept.
pub fn active_section<'a, I>(sections: I, line: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, SectionRect)>,
{
    sections
        .into_iter()
        .find(|(_, rect)| rect.straddles(line))
        .map(|(id, _)| id)
}

/// Scroll completion as a percentage of the scrollable range, clamped to
/// [0, 100]. A document no taller than the viewport has no scrollable range
/// and reports 0.
pub fn scroll_percentage(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let range = scroll_height - client_height;
    if range <= 0.0 {
        return 0.0;
    }
    (scroll_top / range * 100.0).clamp(0.0, 100.0)
}

/// Viewport rects for every rendered section, in the declared id order.
/// Ids without a matching element are skipped.
pub fn rendered_section_rects(
    document: &Document,
    ids: &[&'static str],
) -> Vec<(&'static str, SectionRect)> {
    ids.iter()
        .filter_map(|id| {
            let rect = document.get_element_by_id(id)?.get_bounding_client_rect();
            Some((
                *id,
                SectionRect {
                    top: rect.top(),
                    bottom: rect.bottom(),
                },
            ))
        })
        .collect()
}

/// Current document scroll completion, read off the scrolling element.
pub fn document_scroll_percentage(document: &Document) -> f64 {
    match document.document_element() {
        Some(root) => scroll_percentage(
            f64::from(root.scroll_top()),
            f64::from(root.scroll_height()),
            f64::from(root.client_height()),
        ),
        None => 0.0,
    }
}

/// Smooth-scroll the viewport to the section with the given id.
pub fn scroll_to_section(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(id));
    match element {
        Some(element) => {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::warn!("scroll target #{id} is not rendered"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(top: f64, bottom: f64) -> SectionRect {
        SectionRect { top, bottom }
    }

    #[test]
    fn first_straddling_section_wins() {
        let sections = [
            ("above", rect(-500.0, 100.0)),
            ("hit", rect(150.0, 900.0)),
            ("also-straddling", rect(190.0, 1400.0)),
        ];
        assert_eq!(active_section(sections, 200.0), Some("hit"));
    }

    #[test]
    fn section_touching_the_line_counts() {
        let sections = [("edge", rect(200.0, 200.0))];
        assert_eq!(active_section(sections, 200.0), Some("edge"));
    }

    #[test]
    fn no_straddling_section_yields_none() {
        let sections = [
            ("past", rect(-800.0, -100.0)),
            ("upcoming", rect(600.0, 1200.0)),
        ];
        assert_eq!(active_section(sections, 200.0), None);
        assert_eq!(active_section(std::iter::empty(), 200.0), None);
    }

    #[test]
    fn percentage_spans_zero_to_hundred() {
        assert_eq!(scroll_percentage(0.0, 3000.0, 800.0), 0.0);
        assert_eq!(scroll_percentage(2200.0, 3000.0, 800.0), 100.0);
        let half = scroll_percentage(1100.0, 3000.0, 800.0);
        assert!((half - 50.0).abs() < 1e-9);
    }

    #[test]
    fn percentage_is_clamped() {
        // Overscroll (rubber-banding) can push scroll_top past the range.
        assert_eq!(scroll_percentage(2500.0, 3000.0, 800.0), 100.0);
        assert_eq!(scroll_percentage(-40.0, 3000.0, 800.0), 0.0);
    }

    #[test]
    fn short_document_reports_zero() {
        assert_eq!(scroll_percentage(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_percentage(0.0, 500.0, 800.0), 0.0);
    }
}
