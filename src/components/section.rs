use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    /// Colour scheme of the band behind the content: "light" or "dark".
    #[prop_or(AttrValue::Static("dark"))]
    pub tone: AttrValue,
    pub children: Children,
}

#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    html! {
        <section id={props.id.clone()} class={classes!("band", format!("band--{}", props.tone))}>
            <div class={classes!("band-inner", props.class.clone())}>
                { for props.children.iter() }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeadingProps {
    pub kicker: AttrValue,
    pub title: AttrValue,
}

/// Small uppercase label with the section title under it.
#[function_component(SectionHeading)]
pub fn section_heading(props: &HeadingProps) -> Html {
    html! {
        <>
            <span class="kicker">{"✦ "}{props.kicker.clone()}</span>
            <h2 class="section-title">{props.title.clone()}</h2>
        </>
    }
}
