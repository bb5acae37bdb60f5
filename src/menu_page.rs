//! Menu graphics project page: a five-image, center-focused circular picker.

use yew::prelude::*;

use sakuhinshu_core::{CarouselClick, CarouselState};

use crate::content::{self, CarouselImage};
use crate::lightbox::Lightbox;

const STEP_PX: i32 = 200;
const SIDE_SCALE: f64 = 0.58;
const SIDE_OPACITY: f64 = 0.4;
const SIDE_BLUR_PX: f64 = 4.0;

#[derive(Properties, PartialEq)]
pub(crate) struct MenuGraphicsPageProps {
    pub(crate) on_back: Callback<()>,
}

#[function_component(MenuGraphicsPage)]
pub(crate) fn menu_graphics_page(props: &MenuGraphicsPageProps) -> Html {
    let carousel = use_state(|| CarouselState::new(content::MENU_IMAGES.len(), 0));
    let lightbox = use_state(|| None::<usize>);

    let on_item_click = {
        let carousel = carousel.clone();
        let lightbox = lightbox.clone();
        Callback::from(move |index: usize| {
            let mut state = *carousel;
            match state.click(index) {
                CarouselClick::Zoom(index) => lightbox.set(Some(index)),
                CarouselClick::Recenter(_) => carousel.set(state),
            }
        })
    };

    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    let state = *carousel;
    let items = content::MENU_IMAGES
        .iter()
        .enumerate()
        .map(|(index, image)| carousel_item(index, image, state, &on_item_click))
        .collect::<Html>();

    let center_label = content::MENU_IMAGES[state.center()].label;

    html! {
        <div class="project-page menu-page">
            <nav class="project-nav">
                <button type="button" class="project-back" onclick={on_back}>
                    {"← Back"}
                </button>
            </nav>
            <header class="project-header">
                <span class="project-badge">{"Graphic Design"}</span>
                <h1>{"Seasonal Menus"}</h1>
                <p class="project-subtitle">{"Print & Identity"}</p>
            </header>
            <div class="menu-carousel">
                <div class="menu-carousel-track">{items}</div>
            </div>
            <p class="menu-carousel-label">{center_label}</p>
            if let Some(index) = *lightbox {
                <Lightbox
                    src={content::MENU_IMAGES[index].src}
                    alt={content::MENU_IMAGES[index].alt}
                    on_close={
                        let lightbox = lightbox.clone();
                        Callback::from(move |_| lightbox.set(None))
                    }
                />
            }
        </div>
    }
}

fn carousel_item(
    index: usize,
    image: &CarouselImage,
    carousel: CarouselState,
    on_click: &Callback<usize>,
) -> Html {
    let offset = carousel.offset_of(index);
    let is_center = offset == 0;
    let (scale, opacity, blur) = if is_center {
        (1.0, 1.0, 0.0)
    } else {
        (SIDE_SCALE, SIDE_OPACITY, SIDE_BLUR_PX)
    };
    let z_index = if is_center { 10 } else { 5 - offset.abs() };
    let style = format!(
        "transform: translateX({x}px) scale({scale}); opacity: {opacity}; filter: blur({blur}px); z-index: {z_index};",
        x = offset * STEP_PX,
    );
    let onclick = {
        let on_click = on_click.clone();
        Callback::from(move |_: MouseEvent| on_click.emit(index))
    };
    html! {
        <button
            type="button"
            key={image.src}
            class={classes!("menu-carousel-item", is_center.then_some("is-center"))}
            {style}
            {onclick}
        >
            <img src={image.src} alt={image.alt} draggable="false" />
        </button>
    }
}
