#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Milestone {
    pub title: &'static str,
    pub description: &'static str,
    pub date_label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gradient {
    PurplePink,
    BlueCyan,
    YellowOrange,
    GreenEmerald,
    RedRose,
    IndigoPurple,
}

impl Gradient {
    pub fn css(self) -> &'static str {
        match self {
            Gradient::PurplePink => "linear-gradient(135deg, #c084fc, #f472b6)",
            Gradient::BlueCyan => "linear-gradient(135deg, #60a5fa, #22d3ee)",
            Gradient::YellowOrange => "linear-gradient(135deg, #facc15, #fb923c)",
            Gradient::GreenEmerald => "linear-gradient(135deg, #4ade80, #34d399)",
            Gradient::RedRose => "linear-gradient(135deg, #f87171, #fb7185)",
            Gradient::IndigoPurple => "linear-gradient(135deg, #818cf8, #c084fc)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemoryCard {
    pub title: &'static str,
    pub description: &'static str,
    pub gradient: Gradient,
}

/// Which way a timeline entry sits and slides in from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Side::Left
        } else {
            Side::Right
        }
    }
}

pub static MILESTONES: &[Milestone] = &[
    Milestone {
        title: "The First Hello",
        description: "The day our eyes met and my world changed forever. I knew from that moment you were special.",
        date_label: "Day One",
    },
    Milestone {
        title: "Our First Date",
        description: "Nervous butterflies, endless conversation, and the beginning of something beautiful.",
        date_label: "The Beginning",
    },
    Milestone {
        title: "Falling Deeper",
        description: "Every laugh, every smile, every moment together made me fall more in love with you.",
        date_label: "Every Day Since",
    },
    Milestone {
        title: "Building Dreams",
        description: "Planning our future, sharing our hopes, and realizing I want to spend forever with you.",
        date_label: "Our Journey",
    },
];

pub static MEMORIES: &[MemoryCard] = &[
    MemoryCard {
        title: "Our Adventures",
        description: "Every journey with you is an adventure I cherish",
        gradient: Gradient::PurplePink,
    },
    MemoryCard {
        title: "Quiet Moments",
        description: "The simple times together mean the most",
        gradient: Gradient::BlueCyan,
    },
    MemoryCard {
        title: "Laughter & Joy",
        description: "Your smile lights up my entire world",
        gradient: Gradient::YellowOrange,
    },
    MemoryCard {
        title: "Growing Together",
        description: "Building a life and future side by side",
        gradient: Gradient::GreenEmerald,
    },
    MemoryCard {
        title: "Special Celebrations",
        description: "Every milestone is better with you",
        gradient: Gradient::RedRose,
    },
    MemoryCard {
        title: "Everyday Magic",
        description: "Finding beauty in the ordinary moments",
        gradient: Gradient::IndigoPurple,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_content_sizes() {
        assert_eq!(MILESTONES.len(), 4);
        assert_eq!(MEMORIES.len(), 6);
        assert_eq!(MILESTONES[0].title, "The First Hello");
        assert_eq!(MEMORIES[5].title, "Everyday Magic");
    }

    #[test]
    fn sides_alternate() {
        let sides: Vec<Side> = (0..MILESTONES.len()).map(Side::for_index).collect();
        assert_eq!(sides, vec![Side::Left, Side::Right, Side::Left, Side::Right]);
    }
}
