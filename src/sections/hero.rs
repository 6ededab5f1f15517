use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::config;
use crate::random::{BrowserRandom, RandomSource};
use crate::timeline::{Reveal, Show};

/// A decorative heart drifting somewhere behind the title.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingHeart {
    pub left: f64,
    pub top: f64,
    pub delay_secs: f64,
    pub duration_secs: f64,
}

impl FloatingHeart {
    pub fn scatter(rng: &mut impl RandomSource, count: usize) -> Vec<FloatingHeart> {
        let (delay_lo, delay_hi) = config::FLOATING_HEART_DELAY_SECS;
        let (dur_lo, dur_hi) = config::FLOATING_HEART_DURATION_SECS;
        (0..count)
            .map(|_| FloatingHeart {
                left: rng.percent(),
                top: rng.percent(),
                delay_secs: rng.between(delay_lo, delay_hi),
                duration_secs: rng.between(dur_lo, dur_hi),
            })
            .collect()
    }

    fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.left, self.top, self.delay_secs, self.duration_secs
        )
    }
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let reveal = use_reducer(Reveal::default);

    {
        let reveal = reveal.dispatcher();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::HERO_REVEAL_DELAY_MS, move || {
                    debug!("Hero revealed");
                    reveal.dispatch(Show);
                });
                move || drop(timeout)
            },
            (),
        );
    }

    // Positions are redrawn on every render.
    let hearts = FloatingHeart::scatter(&mut BrowserRandom, config::FLOATING_HEART_COUNT);

    html! {
        <section class="hero-section">
            <style>
                {r#"
                    .hero-section {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        background: linear-gradient(135deg, #fdf2f8, #fff1f2, #fef2f2);
                    }
                    .hero-hearts {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                    }
                    .floating-heart {
                        position: absolute;
                        font-size: 1.5rem;
                        opacity: 0.3;
                        animation: float linear infinite;
                    }
                    @keyframes float {
                        0%, 100% { transform: translateY(0) rotate(0deg); }
                        50% { transform: translateY(-100px) rotate(180deg); }
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                        padding: 0 1rem;
                        opacity: 0;
                        transform: translateY(2.5rem);
                        transition: all 2s ease;
                    }
                    .hero-content.visible {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .hero-title {
                        font-family: 'Playfair Display', serif;
                        font-size: clamp(3.5rem, 9vw, 6rem);
                        font-weight: 700;
                        color: #e11d48;
                        margin-bottom: 1.5rem;
                        animation: hero-fade-in 1.5s ease-out forwards;
                    }
                    .hero-subtitle {
                        font-family: 'Lato', sans-serif;
                        font-size: clamp(1.25rem, 2.5vw, 1.5rem);
                        color: #374151;
                        margin-bottom: 2rem;
                        opacity: 0;
                        animation: hero-fade-in 1.5s ease-out 0.5s forwards;
                    }
                    @keyframes hero-fade-in {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .scroll-hint {
                        margin-top: 3rem;
                        color: #fb7185;
                        animation: bounce 1s infinite;
                    }
                    @keyframes bounce {
                        0%, 100% { transform: translateY(-25%); }
                        50% { transform: translateY(0); }
                    }
                "#}
            </style>
            <div class="hero-hearts">
                {
                    hearts.iter().map(|heart| html! {
                        <div class="floating-heart" style={heart.style()}>{"❤️"}</div>
                    }).collect::<Html>()
                }
            </div>
            <div class={classes!("hero-content", reveal.is_visible().then(|| "visible"))}>
                <h1 class="hero-title">{"For My Love"}</h1>
                <p class="hero-subtitle">{"Every moment with you is a treasure"}</p>
                <div class="scroll-hint">
                    <svg width="32" height="32" fill="none" stroke="currentColor" stroke-width="2"
                        stroke-linecap="round" stroke-linejoin="round" viewBox="0 0 24 24">
                        <path d="M19 14l-7 7m0 0l-7-7m7 7V3"></path>
                    </svg>
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

    #[test]
    fn scatter_draws_each_field_independently() {
        let mut rng = Scripted::new(&[0.25, 0.5, 0.2, 0.3]);
        let hearts = FloatingHeart::scatter(&mut rng, 1);
        assert_eq!(
            hearts,
            vec![FloatingHeart {
                left: 25.0,
                top: 50.0,
                delay_secs: 1.0,
                duration_secs: 8.0,
            }]
        );
    }

    #[test]
    fn scatter_stays_in_ranges() {
        let hearts = FloatingHeart::scatter(&mut Seeded::new(7), config::FLOATING_HEART_COUNT);
        assert_eq!(hearts.len(), 20);
        for heart in hearts {
            assert!((0.0..100.0).contains(&heart.left));
            assert!((0.0..100.0).contains(&heart.top));
            assert!((0.0..5.0).contains(&heart.delay_secs));
            assert!((5.0..15.0).contains(&heart.duration_secs));
        }
    }

    #[test]
    fn heart_style_uses_percentages_and_seconds() {
        let heart = FloatingHeart {
            left: 12.5,
            top: 80.0,
            delay_secs: 1.25,
            duration_secs: 9.0,
        };
        assert_eq!(
            heart.style(),
            "left: 12.50%; top: 80.00%; animation-delay: 1.25s; animation-duration: 9.00s;"
        );
    }

    #[test]
    fn mount_then_rerenders_reveal_once() {
        let mut reveal = Reveal::default();
        assert!(!reveal.is_visible());
        assert!(reveal.show());
        for _ in 0..3 {
            assert!(!reveal.show());
            assert!(reveal.is_visible());
        }
    }
}
