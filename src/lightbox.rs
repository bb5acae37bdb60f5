use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LightboxProps {
    pub(crate) src: AttrValue,
    pub(crate) alt: AttrValue,
    pub(crate) on_close: Callback<()>,
}

/// Full-size image overlay. Backdrop click or the close button dismisses;
/// clicks on the image itself do not.
#[function_component(Lightbox)]
pub(crate) fn lightbox(props: &LightboxProps) -> Html {
    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let swallow = Callback::from(|event: MouseEvent| event.stop_propagation());
    html! {
        <div class="lightbox" role="dialog" aria-modal="true" onclick={on_backdrop}>
            <button
                type="button"
                class="lightbox-close"
                aria-label="Close"
                onclick={on_close_button}
            >
                {"✕"}
            </button>
            <div class="lightbox-content" onclick={swallow}>
                <img src={props.src.clone()} alt={props.alt.clone()} />
            </div>
        </div>
    }
}
