use log::debug;
use yew::prelude::*;

use crate::config;
use crate::content::{MemoryCard, MEMORIES};
use crate::timeline::{Reveal, Show};
use crate::visibility::use_first_visible;

/// Cards share one reveal and fan in by index.
pub fn card_delay_ms(index: usize) -> u32 {
    index as u32 * config::GALLERY_STAGGER_MS
}

fn card_style(index: usize, card: &MemoryCard) -> String {
    format!(
        "transition-delay: {}ms; --card-gradient: {};",
        card_delay_ms(index),
        card.gradient.css()
    )
}

#[function_component(GallerySection)]
pub fn gallery_section() -> Html {
    let section_ref = use_node_ref();
    let reveal = use_reducer(Reveal::default);

    let on_visible = {
        let reveal = reveal.dispatcher();
        Callback::from(move |_| {
            debug!("Gallery revealed");
            reveal.dispatch(Show);
        })
    };
    use_first_visible(section_ref.clone(), config::GALLERY_THRESHOLD, on_visible);

    let visible = reveal.is_visible();

    html! {
        <section ref={section_ref} class="gallery-section">
            <style>
                {r#"
                    .gallery-section {
                        padding: 5rem 1rem;
                        background: linear-gradient(135deg, #f9fafb, #fff1f2);
                    }
                    .gallery-inner {
                        max-width: 72rem;
                        margin: 0 auto;
                    }
                    .gallery-heading {
                        font-family: 'Playfair Display', serif;
                        font-size: clamp(3rem, 6vw, 3.75rem);
                        font-weight: 700;
                        text-align: center;
                        color: #1f2937;
                        margin-bottom: 1rem;
                    }
                    .gallery-subtitle {
                        font-family: 'Lato', sans-serif;
                        text-align: center;
                        color: #4b5563;
                        font-size: 1.125rem;
                        margin-bottom: 4rem;
                    }
                    .gallery-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 1.5rem;
                    }
                    .memory-card {
                        position: relative;
                        overflow: hidden;
                        border-radius: 0.75rem;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        opacity: 0;
                        transform: translateY(2.5rem);
                        transition: all 0.7s ease;
                    }
                    .memory-card.visible {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .memory-card.visible:hover {
                        transform: scale(1.05);
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    }
                    .memory-face {
                        aspect-ratio: 1 / 1;
                        background: var(--card-gradient);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 2rem;
                        position: relative;
                    }
                    .memory-glyph {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 6rem;
                        opacity: 0.2;
                        transition: transform 0.3s ease;
                    }
                    .memory-card:hover .memory-glyph { transform: scale(1.1); }
                    .memory-text {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                        color: #ffffff;
                    }
                    .memory-text h3 {
                        font-family: 'Playfair Display', serif;
                        font-size: 1.5rem;
                        margin-bottom: 0.75rem;
                        text-shadow: 0 2px 4px rgba(0, 0, 0, 0.25);
                    }
                    .memory-text p {
                        font-family: 'Lato', sans-serif;
                        font-size: 0.875rem;
                        opacity: 0.9;
                    }
                    .memory-frame {
                        position: absolute;
                        inset: 0;
                        border: 4px solid #ffffff;
                        border-radius: 0.75rem;
                        pointer-events: none;
                    }
                    .gallery-hint {
                        margin-top: 3rem;
                        text-align: center;
                        font-family: 'Lato', sans-serif;
                        font-style: italic;
                        color: #6b7280;
                    }
                "#}
            </style>
            <div class="gallery-inner">
                <h2 class="gallery-heading">{"Our Memories"}</h2>
                <p class="gallery-subtitle">{"A collection of moments that made us who we are"}</p>
                <div class="gallery-grid">
                    {
                        MEMORIES.iter().enumerate().map(|(index, card)| html! {
                            <div key={index} class={classes!("memory-card", visible.then(|| "visible"))}
                                style={card_style(index, card)}>
                                <div class="memory-face">
                                    <div class="memory-glyph">{"❤️"}</div>
                                    <div class="memory-text">
                                        <h3>{card.title}</h3>
                                        <p>{card.description}</p>
                                    </div>
                                </div>
                                <div class="memory-frame"></div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <p class="gallery-hint">
                    {"Replace these colorful placeholders with your actual photos to make it even more special! 📸"}
                </p>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Gradient;

    #[test]
    fn cards_are_staggered_by_index() {
        let delays: Vec<u32> = (0..MEMORIES.len()).map(card_delay_ms).collect();
        assert_eq!(delays, vec![0, 100, 200, 300, 400, 500]);
    }

    #[test]
    fn card_style_carries_delay_and_gradient() {
        let style = card_style(3, &MEMORIES[3]);
        assert!(style.starts_with("transition-delay: 300ms;"));
        assert!(style.contains(Gradient::GreenEmerald.css()));
    }

    #[test]
    fn repeated_crossings_keep_gallery_visible() {
        let mut reveal = Reveal::default();
        assert!(reveal.show());
        assert!(!reveal.show());
        assert!(reveal.is_visible());
    }
}
