mod app_router;
mod case_study;
mod content;
mod gallery_page;
mod lightbox;
mod menu_page;
mod persisted;
mod scroll_runtime;
mod section_tracker;
mod yew_app;

fn main() {
    // Theme lands on the document root before the first paint.
    persisted::apply_theme(persisted::load_settings().theme_mode);
    yew::Renderer::<yew_app::App>::new().render();
}
