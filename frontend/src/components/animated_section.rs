use yew::prelude::*;

use crate::config;
use crate::hooks::use_reveal;

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: AttrValue,
    /// Visible share of the section that triggers the fade-in.
    #[prop_or(config::REVEAL_THRESHOLD)]
    pub threshold: f64,
    #[prop_or_default]
    pub children: Children,
}

/// `<section>` that fades and slides in the first time it scrolls into view.
/// The `.reveal` transition lives in the page stylesheet.
#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let node_ref = use_node_ref();
    let revealed = use_reveal(node_ref.clone(), props.threshold);

    html! {
        <section
            id={props.id.clone()}
            ref={node_ref}
            class={classes!("reveal", revealed.then(|| "revealed"), props.class.clone())}
            style={props.style.clone()}
        >
            { for props.children.iter() }
        </section>
    }
}
