use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::config;
use crate::content::{Milestone, Side, MILESTONES};
use crate::timeline::{now_ms, use_wake, Cascade};
use crate::visibility::use_first_visible;

/// Which milestones have slid into place. Entries come in one at a time,
/// `STORY_STAGGER_MS` apart, starting from the first time the section is seen.
#[derive(Clone, Debug, PartialEq)]
pub struct StoryReveal {
    cascade: Cascade,
    revealed: Vec<usize>,
}

pub enum StoryAction {
    Visible(f64),
    Wake(f64),
}

impl StoryReveal {
    pub fn new(entries: usize) -> Self {
        Self {
            cascade: Cascade::staggered(entries, config::STORY_STAGGER_MS),
            revealed: Vec::with_capacity(entries),
        }
    }

    /// Starts the stagger. Only the first call counts.
    pub fn on_visible(&mut self, now: f64) -> bool {
        if !self.cascade.start(now) {
            return false;
        }
        self.on_wake(now);
        true
    }

    pub fn on_wake(&mut self, now: f64) {
        for index in self.cascade.advance(now) {
            debug!("Story milestone {} revealed", index);
            self.revealed.push(index);
        }
    }

    pub fn revealed(&self) -> &[usize] {
        &self.revealed
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed().contains(&index)
    }

    pub fn next_wake(&self) -> Option<f64> {
        self.cascade.next_wake()
    }
}

impl Reducible for StoryReveal {
    type Action = StoryAction;

    fn reduce(self: Rc<Self>, action: StoryAction) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            StoryAction::Visible(now) => next.on_visible(now),
            StoryAction::Wake(now) => {
                next.on_wake(now);
                next.revealed.len() != self.revealed.len()
            }
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

fn milestone_classes(side: Side, revealed: bool) -> Classes {
    let side = match side {
        Side::Left => "from-left",
        Side::Right => "from-right",
    };
    classes!("milestone", side, revealed.then(|| "revealed"))
}

fn milestone_card(index: usize, milestone: &Milestone, revealed: bool) -> Html {
    let side = Side::for_index(index);
    html! {
        <div key={index} class={milestone_classes(side, revealed)}>
            <div class="milestone-row">
                <div class="milestone-body">
                    <div class="milestone-card">
                        <h3>{milestone.title}</h3>
                        <p>{milestone.description}</p>
                        <span class="milestone-date">{milestone.date_label}</span>
                    </div>
                </div>
                <div class="milestone-dot">
                    <div class="milestone-ping"></div>
                </div>
                <div class="milestone-spacer"></div>
            </div>
        </div>
    }
}

#[function_component(StorySection)]
pub fn story_section() -> Html {
    let section_ref = use_node_ref();
    let story = use_reducer(|| StoryReveal::new(MILESTONES.len()));

    let on_visible = {
        let story = story.dispatcher();
        Callback::from(move |_| story.dispatch(StoryAction::Visible(now_ms())))
    };
    use_first_visible(section_ref.clone(), config::STORY_THRESHOLD, on_visible);

    let on_wake = {
        let story = story.dispatcher();
        Callback::from(move |now| story.dispatch(StoryAction::Wake(now)))
    };
    use_wake(story.next_wake(), on_wake);

    html! {
        <section ref={section_ref} class="story-section">
            <style>
                {r#"
                    .story-section {
                        padding: 5rem 1rem;
                        background: #ffffff;
                    }
                    .story-inner {
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .story-heading {
                        font-family: 'Playfair Display', serif;
                        font-size: clamp(3rem, 6vw, 3.75rem);
                        font-weight: 700;
                        text-align: center;
                        color: #1f2937;
                        margin-bottom: 4rem;
                    }
                    .timeline {
                        position: relative;
                    }
                    .timeline-line {
                        position: absolute;
                        left: 50%;
                        transform: translateX(-50%);
                        height: 100%;
                        width: 4px;
                        background: linear-gradient(to bottom, #fda4af, #f87171);
                    }
                    .milestone {
                        position: relative;
                        margin-bottom: 4rem;
                        opacity: 0;
                        transition: all 1s ease;
                    }
                    .milestone.from-left { transform: translateX(-2.5rem); }
                    .milestone.from-right { transform: translateX(2.5rem); }
                    .milestone.revealed {
                        opacity: 1;
                        transform: translateX(0);
                    }
                    .milestone-row {
                        display: flex;
                        align-items: center;
                    }
                    .milestone.from-right .milestone-row { flex-direction: row-reverse; }
                    .milestone-body { width: 50%; }
                    .milestone-spacer { width: 50%; }
                    .milestone.from-left .milestone-body { padding-right: 2rem; text-align: right; }
                    .milestone.from-right .milestone-body { padding-left: 2rem; text-align: left; }
                    .milestone-card {
                        background: linear-gradient(135deg, #fff1f2, #fdf2f8);
                        padding: 1.5rem;
                        border-radius: 0.5rem;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        transition: box-shadow 0.3s ease;
                    }
                    .milestone-card:hover { box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15); }
                    .milestone-card h3 {
                        font-family: 'Playfair Display', serif;
                        font-size: 1.5rem;
                        color: #e11d48;
                        margin-bottom: 0.5rem;
                    }
                    .milestone-card p {
                        font-family: 'Lato', sans-serif;
                        color: #4b5563;
                        margin-bottom: 0.75rem;
                    }
                    .milestone-date {
                        font-family: 'Lato', sans-serif;
                        font-size: 0.875rem;
                        font-weight: 600;
                        color: #fb7185;
                    }
                    .milestone-dot {
                        position: absolute;
                        left: 50%;
                        transform: translateX(-50%);
                        width: 1.5rem;
                        height: 1.5rem;
                        background: #f43f5e;
                        border: 4px solid #ffffff;
                        border-radius: 9999px;
                        z-index: 10;
                    }
                    .milestone-ping {
                        position: absolute;
                        inset: 0;
                        background: #f43f5e;
                        border-radius: 9999px;
                        opacity: 0.75;
                        animation: ping 1s cubic-bezier(0, 0, 0.2, 1) infinite;
                    }
                    @keyframes ping {
                        75%, 100% { transform: scale(2); opacity: 0; }
                    }
                "#}
            </style>
            <div class="story-inner">
                <h2 class="story-heading">{"Our Story"}</h2>
                <div class="timeline">
                    <div class="timeline-line"></div>
                    {
                        MILESTONES.iter().enumerate().map(|(index, milestone)| {
                            milestone_card(index, milestone, story.is_revealed(index))
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
