//! Merch gallery project page: titled image sections with a lightbox and a
//! circular team-photo carousel.

use yew::prelude::*;

use sakuhinshu_core::{CarouselClick, CarouselState};

use crate::content::{self, GallerySection};
use crate::lightbox::Lightbox;

const TEAM_STEP_PX: i32 = 220;
const TEAM_SCALE_FALLOFF: f64 = 0.26;

#[derive(Properties, PartialEq)]
pub(crate) struct GalleryPageProps {
    pub(crate) on_back: Callback<()>,
}

#[function_component(GalleryPage)]
pub(crate) fn gallery_page(props: &GalleryPageProps) -> Html {
    let lightbox = use_state(|| None::<(&'static str, &'static str)>);
    let carousel = use_state(|| CarouselState::new(content::TEAM_PHOTOS.len(), 1));

    let open_lightbox = {
        let lightbox = lightbox.clone();
        Callback::from(move |target: (&'static str, &'static str)| lightbox.set(Some(target)))
    };

    let on_team_click = {
        let carousel = carousel.clone();
        let lightbox = lightbox.clone();
        Callback::from(move |index: usize| {
            let mut state = *carousel;
            match state.click(index) {
                CarouselClick::Zoom(index) => {
                    let photo = &content::TEAM_PHOTOS[index];
                    lightbox.set(Some((photo.src, photo.alt)));
                }
                CarouselClick::Recenter(_) => carousel.set(state),
            }
        })
    };

    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    let sections = content::GALLERY_SECTIONS
        .iter()
        .map(|section| gallery_section(section, &open_lightbox))
        .collect::<Html>();

    let team_items = content::TEAM_PHOTOS
        .iter()
        .enumerate()
        .map(|(index, photo)| {
            let offset = carousel.offset_of(index);
            let is_center = offset == 0;
            let scale = 1.0 - TEAM_SCALE_FALLOFF * offset.abs() as f64;
            let z_index = if is_center { 10 } else { 6 - offset.abs() };
            let style = format!(
                "transform: translateX({x}px) scale({scale}); z-index: {z_index};",
                x = offset * TEAM_STEP_PX,
            );
            let onclick = {
                let on_team_click = on_team_click.clone();
                Callback::from(move |_: MouseEvent| on_team_click.emit(index))
            };
            html! {
                <button
                    type="button"
                    key={photo.src}
                    class={classes!("team-carousel-item", is_center.then_some("is-center"))}
                    {style}
                    {onclick}
                >
                    <img src={photo.src} alt={photo.alt} draggable="false" />
                </button>
            }
        })
        .collect::<Html>();

    html! {
        <div class="project-page gallery-page">
            <nav class="project-nav">
                <button type="button" class="project-back" onclick={on_back}>
                    {"← Back"}
                </button>
            </nav>
            <header class="project-header">
                <span class="project-badge">{"Graphic Design"}</span>
                <h1>{"Jargon Merch"}</h1>
                <p class="project-subtitle">{"Merchandise Design"}</p>
            </header>
            {sections}
            <section class="gallery-section team-section">
                <h2>{"The Team"}</h2>
                <p>
                    {"Click a side photo to bring it to the center; click the \
                      center photo to view it full size."}
                </p>
                <div class="team-carousel">
                    <div class="team-carousel-track">{team_items}</div>
                </div>
            </section>
            if let Some((src, alt)) = *lightbox {
                <Lightbox
                    src={src}
                    alt={alt}
                    on_close={
                        let lightbox = lightbox.clone();
                        Callback::from(move |_| lightbox.set(None))
                    }
                />
            }
        </div>
    }
}

fn gallery_section(
    section: &GallerySection,
    open_lightbox: &Callback<(&'static str, &'static str)>,
) -> Html {
    let thumbs = section
        .images
        .iter()
        .map(|image| {
            let onclick = {
                let open_lightbox = open_lightbox.clone();
                let target = (image.src, image.alt);
                Callback::from(move |_: MouseEvent| open_lightbox.emit(target))
            };
            html! {
                <button type="button" key={image.src} class="gallery-thumb" {onclick}>
                    <img src={image.src} alt={image.alt} loading="lazy" />
                </button>
            }
        })
        .collect::<Html>();
    html! {
        <section class="gallery-section" key={section.id}>
            <h2>{section.title}</h2>
            <p>{section.paragraph}</p>
            <div class="gallery-grid">{thumbs}</div>
        </section>
    }
}
