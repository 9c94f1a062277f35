use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::motion::Motion;

/// Plays `motion` the first time enough of the wrapped content scrolls into view.
///
/// "Enough" is [`Motion::amount_pct`] of the wrapper's box.
#[component]
pub fn Reveal(
    #[prop(optional)] motion: Motion,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let (revealed, set_revealed) = signal(false);

    use_intersection_observer_with_options(
        target,
        move |entries, _| {
            if !revealed.get_untracked()
                && entries
                    .iter()
                    .any(|entry| motion.reached(entry.intersection_ratio()))
            {
                set_revealed.set(true);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![motion.threshold()]),
    );

    view! {
        <div
            node_ref=target
            class=move || format!("{} {class}", motion.class(revealed.get()))
            style=motion.style()
        >
            {children()}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::motion::{Entrance, CARD_AMOUNT_PCT};

    #[test]
    fn test_starts_in_hidden_pose() {
        let motion = Motion::new(Entrance::Scale).amount(CARD_AMOUNT_PCT).delay(300);
        let html = Owner::new().with(|| {
            view! { <Reveal motion class="extra">"card"</Reveal> }.to_html()
        });
        assert!(html.contains(&format!("{} extra", motion.class(false))));
        assert!(html.contains("transition-delay: 300ms;"));
        assert!(html.contains("card"));
    }
}
