//! Decorative floating-dot background. The dots are generated once per page
//! load and owned by the page component; this module only renders them.

use yew::prelude::*;

/// How many dots one page load scatters across the viewport.
pub const PATTERN_COUNT: usize = 15;

#[derive(Clone, PartialEq)]
pub struct Pattern {
    pub id: usize,
    /// Diameter in px, 10..40.
    pub size: f64,
    /// Viewport-percentage position, 0..100.
    pub x: f64,
    pub y: f64,
    /// Float-animation length in seconds, 10..30.
    pub duration: f64,
    /// Stagger in seconds, 0..5.
    pub delay: f64,
}

/// Build the dot set from a unit-interval random source (`Math.random` in
/// the browser, a fixed sequence in tests).
pub fn generate_patterns(count: usize, mut random: impl FnMut() -> f64) -> Vec<Pattern> {
    (0..count)
        .map(|id| Pattern {
            id,
            size: random() * 30.0 + 10.0,
            x: random() * 100.0,
            y: random() * 100.0,
            duration: random() * 20.0 + 10.0,
            delay: random() * 5.0,
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct BackgroundPatternProps {
    pub patterns: Vec<Pattern>,
}

#[function_component(BackgroundPattern)]
pub fn background_pattern(props: &BackgroundPatternProps) -> Html {
    html! {
        <div class="background-pattern" aria-hidden="true">
            { for props.patterns.iter().map(|dot| {
                let style = format!(
                    "width: {size:.1}px; height: {size:.1}px; left: {x:.2}%; top: {y:.2}%; \
                     animation: float {duration:.2}s infinite ease-in-out {delay:.2}s;",
                    size = dot.size,
                    x = dot.x,
                    y = dot.y,
                    duration = dot.duration,
                    delay = dot.delay,
                );
                html! { <div key={dot.id} class="pattern-dot" {style}></div> }
            }) }
            <style>
                {r#"
                .background-pattern {
                    position: fixed;
                    inset: 0;
                    overflow: hidden;
                    pointer-events: none;
                    z-index: 0;
                }
                .pattern-dot {
                    position: absolute;
                    border-radius: 50%;
                    background: rgba(30, 64, 175, 0.1);
                }
                .dark-mode .pattern-dot {
                    background: rgba(30, 58, 138, 0.1);
                }
                @keyframes float {
                    0% { transform: translateY(0px) rotate(0deg); }
                    50% { transform: translateY(-20px) rotate(5deg); }
                    100% { transform: translateY(0px) rotate(0deg); }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_stay_within_viewport_bounds() {
        // Worst cases of the unit interval.
        for value in [0.0, 0.5, 0.999_999] {
            for dot in generate_patterns(PATTERN_COUNT, || value) {
                assert!((0.0..=100.0).contains(&dot.x));
                assert!((0.0..=100.0).contains(&dot.y));
            }
        }
    }

    #[test]
    fn sizes_and_timings_honor_their_ranges() {
        let mut seq = [0.0, 0.25, 0.5, 0.75, 0.999].iter().cycle();
        let dots = generate_patterns(40, || *seq.next().unwrap());
        for dot in &dots {
            assert!((10.0..40.0).contains(&dot.size));
            assert!((10.0..30.0).contains(&dot.duration));
            assert!((0.0..5.0).contains(&dot.delay));
        }
    }

    #[test]
    fn ids_are_sequential() {
        let dots = generate_patterns(5, || 0.3);
        let ids: Vec<usize> = dots.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }
}
