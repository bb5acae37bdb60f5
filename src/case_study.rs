//! Case-study project page with a sticky section index. The index entry for
//! the section nearest the viewport center stays highlighted while the
//! reader scrolls.

use std::rc::Rc;

use yew::prelude::*;

use crate::content::{self, CASE_SECTIONS};
use crate::section_tracker::{DomLayoutProbe, SectionTracker};

#[derive(Properties, PartialEq)]
pub(crate) struct CaseStudyPageProps {
    pub(crate) id: &'static str,
    pub(crate) on_back: Callback<()>,
}

#[function_component(CaseStudyPage)]
pub(crate) fn case_study_page(props: &CaseStudyPageProps) -> Html {
    let active = use_state(|| CASE_SECTIONS[0].id);
    let tracker_slot = use_mut_ref(|| None::<Rc<SectionTracker>>);

    {
        let active = active.clone();
        let tracker_slot = tracker_slot.clone();
        use_effect_with(props.id, move |_| {
            let ids = CASE_SECTIONS.iter().map(|section| section.id).collect();
            let tracker = SectionTracker::new(
                ids,
                Box::new(DomLayoutProbe),
                Rc::new(move |id| active.set(id)),
            );
            tracker.install();
            *tracker_slot.borrow_mut() = Some(Rc::clone(&tracker));
            move || tracker.teardown()
        });
    }

    let on_nav = {
        let tracker_slot = tracker_slot.clone();
        Callback::from(move |id: &'static str| {
            if let Some(tracker) = tracker_slot.borrow().as_ref() {
                tracker.set_active_manual(id);
            }
        })
    };

    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    let item = content::work_item(props.id);
    let (title, subtitle, category) = match item {
        Some(item) => (item.title, item.subtitle, item.category),
        None => ("Case Study", "", ""),
    };

    let index_entries = CASE_SECTIONS
        .iter()
        .map(|section| {
            let onclick = {
                let on_nav = on_nav.clone();
                let id = section.id;
                Callback::from(move |_: MouseEvent| on_nav.emit(id))
            };
            let is_active = *active == section.id;
            html! {
                <li key={section.id}>
                    <button
                        type="button"
                        class={classes!("case-index-entry", is_active.then_some("is-active"))}
                        aria-current={if is_active { Some("true") } else { None }}
                        {onclick}
                    >
                        {section.title}
                    </button>
                </li>
            }
        })
        .collect::<Html>();

    let sections = CASE_SECTIONS
        .iter()
        .map(|section| {
            html! {
                <section id={section.id} key={section.id} class="case-section">
                    <h2>{section.title}</h2>
                    <p>{section.body}</p>
                </section>
            }
        })
        .collect::<Html>();

    html! {
        <div class="project-page case-study">
            <nav class="project-nav">
                <button type="button" class="project-back" onclick={on_back}>
                    {"← Back"}
                </button>
            </nav>
            <header class="project-header">
                <span class="project-badge">{category}</span>
                <h1>{title}</h1>
                <p class="project-subtitle">{subtitle}</p>
            </header>
            <div class="case-layout">
                <aside class="case-index">
                    <ul>{index_entries}</ul>
                </aside>
                <div class="case-body">{sections}</div>
            </div>
        </div>
    }
}
