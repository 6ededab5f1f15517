//! The closing question.
//!
//! The section walks `Hidden -> Revealed -> Questioning -> Answered`. Seeing
//! the section starts a two-step cascade (question text, then the two
//! buttons); accepting is terminal and sets off a short-lived particle burst.
//! The decline button never changes state, it only jumps somewhere else in
//! the viewport each time it is pressed.

use std::rc::Rc;

use log::{debug, info, warn};
use web_sys::{window, HtmlElement};
use yew::prelude::*;

use crate::config;
use crate::random::{BrowserRandom, RandomSource};
use crate::timeline::{earliest, now_ms, use_wake, Cascade};
use crate::visibility::use_first_visible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Hidden,
    Revealed,
    Questioning { controls_shown: bool },
    Answered,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeartParticle {
    pub id: u64,
    /// Horizontal position, percent of the section width.
    pub x: f64,
    /// Vertical position, percent of the section height.
    pub y: f64,
    pub rise_secs: f64,
}

impl HeartParticle {
    fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-duration: {:.2}s;",
            self.x, self.y, self.rise_secs
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Proposal {
    stage: Stage,
    cascade: Cascade,
    particles: Vec<HeartParticle>,
    particles_expire_at: Option<f64>,
    next_particle_id: u64,
}

pub enum ProposalAction {
    Visible(f64),
    Wake(f64),
    Accept(f64),
}

impl Default for Proposal {
    fn default() -> Self {
        Self {
            stage: Stage::Hidden,
            cascade: Cascade::new(vec![config::QUESTION_DELAY_MS, config::CONTROLS_DELAY_MS]),
            particles: Vec::new(),
            particles_expire_at: None,
            next_particle_id: 0,
        }
    }
}

impl Proposal {
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// First crossing reveals the section and starts the timed cascade.
    pub fn on_visible(&mut self, now: f64) -> bool {
        if !self.cascade.start(now) {
            return false;
        }
        if self.stage == Stage::Hidden {
            self.stage = Stage::Revealed;
        }
        self.on_wake(now);
        true
    }

    pub fn on_wake(&mut self, now: f64) {
        for step in self.cascade.advance(now) {
            if self.stage == Stage::Answered {
                continue;
            }
            self.stage = Stage::Questioning { controls_shown: step > 0 };
            debug!("Proposal cascade reached {:?}", self.stage);
        }
        if self.particles_expire_at.is_some_and(|at| at <= now) {
            debug!("Clearing {} heart particles", self.particles.len());
            self.particles.clear();
            self.particles_expire_at = None;
        }
    }

    /// Only honored once the buttons are on screen. Answering is final.
    pub fn accept(&mut self, now: f64, rng: &mut impl RandomSource) -> bool {
        if self.stage != (Stage::Questioning { controls_shown: true }) {
            return false;
        }
        self.stage = Stage::Answered;
        self.burst(now, rng);
        true
    }

    fn burst(&mut self, now: f64, rng: &mut impl RandomSource) {
        let (rise_lo, rise_hi) = config::PARTICLE_RISE_SECS;
        self.particles = (0..config::PARTICLE_COUNT)
            .map(|_| {
                let id = self.next_particle_id;
                self.next_particle_id += 1;
                HeartParticle {
                    id,
                    x: rng.percent(),
                    y: rng.percent(),
                    rise_secs: rng.between(rise_lo, rise_hi),
                }
            })
            .collect();
        self.particles_expire_at = Some(now + config::PARTICLE_LIFETIME_MS);
    }

    pub fn is_revealed(&self) -> bool {
        self.stage != Stage::Hidden
    }

    pub fn shows_question(&self) -> bool {
        matches!(self.stage, Stage::Questioning { .. })
    }

    pub fn shows_controls(&self) -> bool {
        self.stage == Stage::Questioning { controls_shown: true }
    }

    pub fn is_answered(&self) -> bool {
        self.stage == Stage::Answered
    }

    pub fn particles(&self) -> &[HeartParticle] {
        &self.particles
    }

    pub fn next_wake(&self) -> Option<f64> {
        earliest(self.cascade.next_wake(), self.particles_expire_at)
    }
}

impl Reducible for Proposal {
    type Action = ProposalAction;

    fn reduce(self: Rc<Self>, action: ProposalAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ProposalAction::Visible(now) => {
                if next.on_visible(now) {
                    debug!("Proposal {:?}", next.stage());
                }
            }
            ProposalAction::Wake(now) => next.on_wake(now),
            ProposalAction::Accept(now) => {
                if next.accept(now, &mut BrowserRandom) {
                    info!("Proposal accepted");
                }
            }
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Picks a spot for the decline button that keeps it fully on screen, with
/// `EVASION_MARGIN` left free on the right and bottom. A viewport too small
/// for the button pins that axis to 0.
pub fn evade(viewport: Size, control: Size, rng: &mut impl RandomSource) -> Position {
    let max_x = (viewport.width - control.width - config::EVASION_MARGIN).max(0.0);
    let max_y = (viewport.height - control.height - config::EVASION_MARGIN).max(0.0);
    Position {
        x: rng.next_unit() * max_x,
        y: rng.next_unit() * max_y,
    }
}

fn measure(button: &NodeRef) -> Option<(Size, Size)> {
    let window = window()?;
    let viewport = Size {
        width: window.inner_width().ok()?.as_f64()?,
        height: window.inner_height().ok()?.as_f64()?,
    };
    let button = button.cast::<HtmlElement>()?;
    let control = Size {
        width: f64::from(button.offset_width()),
        height: f64::from(button.offset_height()),
    };
    Some((viewport, control))
}

#[function_component(ProposalSection)]
pub fn proposal_section() -> Html {
    let section_ref = use_node_ref();
    let decline_ref = use_node_ref();
    let proposal = use_reducer(Proposal::default);
    let decline_at = use_state(|| None::<Position>);

    let on_visible = {
        let proposal = proposal.dispatcher();
        Callback::from(move |_| proposal.dispatch(ProposalAction::Visible(now_ms())))
    };
    use_first_visible(section_ref.clone(), config::PROPOSAL_THRESHOLD, on_visible);

    let on_wake = {
        let proposal = proposal.dispatcher();
        Callback::from(move |now| proposal.dispatch(ProposalAction::Wake(now)))
    };
    use_wake(proposal.next_wake(), on_wake);

    let on_accept = {
        let proposal = proposal.dispatcher();
        Callback::from(move |_: MouseEvent| proposal.dispatch(ProposalAction::Accept(now_ms())))
    };

    let on_decline = {
        let decline_at = decline_at.clone();
        let decline_ref = decline_ref.clone();
        Callback::from(move |_: MouseEvent| match measure(&decline_ref) {
            Some((viewport, control)) => {
                let position = evade(viewport, control, &mut BrowserRandom);
                debug!("Decline button moves to ({:.0}, {:.0})", position.x, position.y);
                decline_at.set(Some(position));
            }
            None => warn!("Could not measure viewport or decline button"),
        })
    };

    let decline_style = (*decline_at)
        .map(|p| format!("position: fixed; left: {:.0}px; top: {:.0}px; z-index: 50;", p.x, p.y));

    let question_class = |extra: &'static str| {
        classes!("proposal-line", extra, proposal.shows_question().then(|| "shown"))
    };

    html! {
        <section ref={section_ref} class="proposal-section">
            <style>
                {r#"
                    .proposal-section {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        background: linear-gradient(135deg, #ffe4e6, #fce7f3, #fee2e2);
                    }
                    .heart-particle {
                        position: absolute;
                        font-size: 2.25rem;
                        pointer-events: none;
                        animation: heart-float ease-out forwards;
                    }
                    @keyframes heart-float {
                        0% { transform: translateY(0) scale(0) rotate(0deg); opacity: 1; }
                        50% { opacity: 1; }
                        100% { transform: translateY(-100vh) scale(1.5) rotate(360deg); opacity: 0; }
                    }
                    .proposal-inner {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                        padding: 0 1rem;
                        max-width: 56rem;
                    }
                    .proposal-stage {
                        opacity: 0;
                        transform: scale(0.95);
                        transition: all 1s ease;
                    }
                    .proposal-stage.revealed {
                        opacity: 1;
                        transform: none;
                    }
                    .proposal-ring {
                        font-size: 6rem;
                        margin-bottom: 3rem;
                        animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                    }
                    @keyframes pulse {
                        50% { opacity: 0.5; }
                    }
                    .proposal-line {
                        opacity: 0;
                        transform: translateY(2.5rem);
                        transition: all 1s ease;
                    }
                    .proposal-line.shown {
                        opacity: 1;
                        transform: none;
                    }
                    .proposal-line.delay-300 { transition-delay: 300ms; }
                    .proposal-line.delay-500 { transition-delay: 500ms; }
                    .proposal-lead {
                        font-family: 'Playfair Display', serif;
                        font-size: clamp(2.25rem, 5vw, 3.75rem);
                        color: #e11d48;
                        margin-bottom: 2rem;
                    }
                    .proposal-body {
                        font-family: 'Lato', sans-serif;
                        font-size: clamp(1.25rem, 2.5vw, 1.5rem);
                        line-height: 1.625;
                        color: #374151;
                        margin-bottom: 3rem;
                    }
                    .proposal-question {
                        font-family: 'Playfair Display', serif;
                        font-size: clamp(3rem, 7vw, 4.5rem);
                        color: #dc2626;
                        margin-bottom: 4rem;
                    }
                    .proposal-actions {
                        display: flex;
                        gap: 1.5rem;
                        justify-content: center;
                        align-items: center;
                        opacity: 0;
                        transform: translateY(2.5rem);
                        pointer-events: none;
                        transition: all 1s ease 700ms;
                    }
                    .proposal-actions.shown {
                        opacity: 1;
                        transform: none;
                        pointer-events: auto;
                    }
                    .proposal-button {
                        font-family: 'Lato', sans-serif;
                        font-size: 1.5rem;
                        font-weight: 700;
                        padding: 1rem 3rem;
                        border: none;
                        border-radius: 9999px;
                        cursor: pointer;
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .proposal-accept {
                        color: #ffffff;
                        background: linear-gradient(to right, #f43f5e, #ef4444);
                        box-shadow: 0 25px 50px rgba(225, 29, 72, 0.35);
                    }
                    .proposal-accept:hover { transform: scale(1.1); }
                    .proposal-decline {
                        color: #4b5563;
                        background: #d1d5db;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    .proposal-hint {
                        font-family: 'Lato', sans-serif;
                        font-size: 0.875rem;
                        font-style: italic;
                        color: #6b7280;
                        margin-top: 2rem;
                    }
                    .proposal-answer {
                        animation: answer-in 1s ease-out forwards;
                    }
                    @keyframes answer-in {
                        from { opacity: 0; transform: scale(0.8); }
                        to { opacity: 1; transform: scale(1); }
                    }
                    .proposal-answer h2 {
                        font-family: 'Playfair Display', serif;
                        font-size: clamp(3rem, 7vw, 4.5rem);
                        color: #e11d48;
                        margin-bottom: 2rem;
                    }
                    .proposal-answer p {
                        font-family: 'Lato', sans-serif;
                        color: #374151;
                    }
                    .proposal-lucky { font-size: clamp(1.5rem, 3vw, 1.875rem); margin-bottom: 2rem; }
                    .proposal-couple { font-size: 3.75rem; animation: bounce 1s infinite; }
                    @keyframes bounce {
                        0%, 100% { transform: translateY(-25%); }
                        50% { transform: translateY(0); }
                    }
                    .proposal-forever { font-size: 1.25rem; font-style: italic; margin-top: 3rem; }
                "#}
            </style>
            {
                proposal.particles().iter().map(|heart| html! {
                    <div key={heart.id} class="heart-particle" style={heart.style()}>{"❤️"}</div>
                }).collect::<Html>()
            }
            <div class="proposal-inner">
                <div class={classes!("proposal-stage", proposal.is_revealed().then(|| "revealed"))}>
                    <div class="proposal-ring">{"💍"}</div>
                    if proposal.is_answered() {
                        <div class="proposal-answer">
                            <h2>{"She Said Yes! 🎉"}</h2>
                            <p class="proposal-lucky">{"I'm the luckiest person in the world! ❤️"}</p>
                            <div class="proposal-couple">{"💑"}</div>
                            <p class="proposal-forever">{"Forever starts now..."}</p>
                        </div>
                    } else {
                        <h2 class={question_class("proposal-lead")}>{"You are my everything"}</h2>
                        <p class={question_class("proposal-body delay-300")}>
                            {"Every day with you is a gift. You make me laugh, you make me think, \
                              you make me want to be a better person. I cannot imagine my life without you, \
                              and I don't want to spend another day not being able to call you my forever."}
                        </p>
                        <h1 class={question_class("proposal-question delay-500")}>{"Will You Marry Me?"}</h1>
                        <div class={classes!("proposal-actions", proposal.shows_controls().then(|| "shown"))}>
                            <button class="proposal-button proposal-accept" onclick={on_accept}>
                                {"Yes! 💕"}
                            </button>
                            <button ref={decline_ref} class="proposal-button proposal-decline"
                                style={decline_style} onclick={on_decline}>
                                {"No"}
                            </button>
                        </div>
                        <p class="proposal-hint">
                            {"(Hint: The \"No\" button is shy... it might run away! 😉)"}
                        </p>
                    }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::testing::{Scripted, Seeded};
    use pretty_assertions::assert_eq;

    fn questioning_at(start: f64) -> Proposal {
        let mut proposal = Proposal::default();
        proposal.on_visible(start);
        proposal.on_wake(start + config::CONTROLS_DELAY_MS);
        proposal
    }

    #[test]
    fn starts_hidden() {
        let proposal = Proposal::default();
        assert_eq!(proposal.stage(), Stage::Hidden);
        assert!(!proposal.is_revealed());
        assert_eq!(proposal.next_wake(), None);
    }

    #[test]
    fn timed_cascade_after_reveal() {
        let mut proposal = Proposal::default();
        assert!(proposal.on_visible(500.0));
        assert_eq!(proposal.stage(), Stage::Revealed);
        assert_eq!(proposal.next_wake(), Some(1_500.0));

        proposal.on_wake(1_499.0);
        assert_eq!(proposal.stage(), Stage::Revealed);

        proposal.on_wake(1_500.0);
        assert_eq!(proposal.stage(), Stage::Questioning { controls_shown: false });
        assert!(proposal.shows_question());
        assert!(!proposal.shows_controls());
        assert_eq!(proposal.next_wake(), Some(2_500.0));

        proposal.on_wake(2_500.0);
        assert_eq!(proposal.stage(), Stage::Questioning { controls_shown: true });
        assert_eq!(proposal.next_wake(), None);
    }

    #[test]
    fn reveal_fires_once() {
        let mut proposal = Proposal::default();
        assert!(proposal.on_visible(0.0));
        assert!(!proposal.on_visible(100.0));
        assert!(!proposal.on_visible(10_000.0));
        // Cascade still measured from the first crossing.
        assert_eq!(proposal.next_wake(), Some(1_000.0));
    }

    #[test]
    fn accept_ignored_before_controls_show() {
        let mut proposal = Proposal::default();
        let mut rng = Seeded::new(1);
        assert!(!proposal.accept(0.0, &mut rng));
        proposal.on_visible(0.0);
        assert!(!proposal.accept(10.0, &mut rng));
        proposal.on_wake(1_000.0);
        assert!(!proposal.accept(1_010.0, &mut rng));
        assert!(!proposal.is_answered());
        assert!(proposal.particles().is_empty());
    }

    #[test]
    fn accept_answers_and_bursts() {
        let mut proposal = questioning_at(-2_000.0);
        assert!(!proposal.is_answered());
        assert!(proposal.particles().is_empty());

        assert!(proposal.accept(0.0, &mut Seeded::new(9)));
        assert!(proposal.is_answered());
        assert_eq!(proposal.particles().len(), 50);

        proposal.on_wake(2_999.0);
        assert_eq!(proposal.particles().len(), 50);
        assert_eq!(proposal.next_wake(), Some(3_000.0));

        proposal.on_wake(3_000.0);
        assert!(proposal.particles().is_empty());
        assert_eq!(proposal.next_wake(), None);
        assert!(proposal.is_answered());
    }

    #[test]
    fn answered_is_terminal() {
        let mut proposal = questioning_at(0.0);
        let mut rng = Seeded::new(3);
        assert!(proposal.accept(2_000.0, &mut rng));
        assert!(!proposal.accept(2_100.0, &mut rng));
        assert!(!proposal.on_visible(2_200.0));
        proposal.on_wake(50_000.0);
        assert_eq!(proposal.stage(), Stage::Answered);
    }

    #[test]
    fn particles_have_unique_ids_and_positions_in_range() {
        let mut proposal = questioning_at(0.0);
        proposal.accept(2_000.0, &mut Seeded::new(11));
        let mut ids: Vec<u64> = proposal.particles().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 50);
        for p in proposal.particles() {
            assert!((0.0..100.0).contains(&p.x));
            assert!((0.0..100.0).contains(&p.y));
            assert!((2.0..4.0).contains(&p.rise_secs));
        }
    }

    #[test]
    fn particle_draws_follow_random_source() {
        let mut proposal = questioning_at(0.0);
        proposal.accept(2_000.0, &mut Scripted::new(&[0.5, 0.25, 0.5]));
        assert_eq!(
            proposal.particles()[0],
            HeartParticle { id: 0, x: 50.0, y: 25.0, rise_secs: 3.0 }
        );
        assert_eq!(
            proposal.particles()[0].style(),
            "left: 50.00%; top: 25.00%; animation-duration: 3.00s;"
        );
    }

    #[test]
    fn evasion_scenario_stays_inside_viewport() {
        let viewport = Size { width: 1000.0, height: 800.0 };
        let control = Size { width: 100.0, height: 50.0 };
        let mut rng = Seeded::new(2024);
        for _ in 0..1_000 {
            let p = evade(viewport, control, &mut rng);
            assert!((0.0..=880.0).contains(&p.x), "x out of range: {}", p.x);
            assert!((0.0..=730.0).contains(&p.y), "y out of range: {}", p.y);
        }
    }

    #[test]
    fn evasion_respects_bounds_for_many_sizes() {
        let mut rng = Seeded::new(5);
        for w in (200..2000).step_by(137) {
            for cw in (10..180).step_by(29) {
                let viewport = Size { width: w as f64, height: (w / 2) as f64 };
                let control = Size { width: cw as f64, height: (cw / 3) as f64 };
                let p = evade(viewport, control, &mut rng);
                assert!(p.x >= 0.0 && p.x <= viewport.width - control.width - 20.0);
                assert!(p.y >= 0.0 && p.y <= viewport.height - control.height - 20.0);
            }
        }
    }

    #[test]
    fn evasion_clamps_when_viewport_too_small() {
        let mut rng = Scripted::new(&[0.99]);
        let p = evade(
            Size { width: 110.0, height: 60.0 },
            Size { width: 100.0, height: 50.0 },
            &mut rng,
        );
        assert_eq!(p, Position { x: 0.0, y: 0.0 });

        let p = evade(
            Size { width: 1000.0, height: 60.0 },
            Size { width: 100.0, height: 50.0 },
            &mut Scripted::new(&[0.5]),
        );
        assert_eq!(p, Position { x: 440.0, y: 0.0 });
    }

    #[test]
    fn decline_does_not_touch_proposal_state() {
        let proposal = questioning_at(0.0);
        let before = proposal.clone();
        let mut rng = Seeded::new(8);
        for _ in 0..10 {
            evade(Size { width: 800.0, height: 600.0 }, Size { width: 90.0, height: 40.0 }, &mut rng);
        }
        assert_eq!(proposal, before);
        assert!(proposal.shows_controls());
    }

    #[test]
    fn reducer_returns_same_state_when_nothing_changes() {
        let proposal = Rc::new(Proposal::default());
        let after = proposal.clone().reduce(ProposalAction::Wake(1_000.0));
        assert!(Rc::ptr_eq(&proposal, &after));
        let seen = after.reduce(ProposalAction::Visible(0.0));
        assert_eq!(seen.stage(), Stage::Revealed);
    }
}
