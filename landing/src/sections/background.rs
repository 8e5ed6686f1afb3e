use leptos::prelude::*;
use tamizha_core::content::FLOATING_LEAVES;

struct Leaf {
    glyph: &'static str,
    left: f64,
    top: f64,
    duration: f64,
}

/// Randomly placed, slowly drifting glyphs behind the page content.
/// Positions are picked once per mount.
#[component]
pub fn FloatingLeaves() -> impl IntoView {
    let leaves: Vec<Leaf> = FLOATING_LEAVES
        .into_iter()
        .enumerate()
        .map(|(i, glyph)| Leaf {
            glyph,
            left: js_sys::Math::random() * 100.0,
            top: js_sys::Math::random() * 100.0,
            duration: leaf_duration(i),
        })
        .collect();

    view! {
        <div class="floating-leaves" aria-hidden="true">
            {leaves
                .into_iter()
                .map(|leaf| {
                    let style = format!(
                        "left: {:.2}%; top: {:.2}%; animation-duration: {}s;",
                        leaf.left, leaf.top, leaf.duration,
                    );
                    view! { <span class="floating-leaf" style=style>{leaf.glyph}</span> }
                })
                .collect_view()}
        </div>
    }
}

/// Drift period of the `index`-th leaf, in seconds. Later leaves drift slower.
fn leaf_duration(index: usize) -> f64 {
    5.0 + index as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_periods_start_at_five_seconds_and_grow_by_one() {
        let periods: Vec<f64> = (0..FLOATING_LEAVES.len()).map(leaf_duration).collect();
        assert_eq!(periods, vec![5.0, 6.0, 7.0, 8.0, 9.0, 10.0]);
    }
}
