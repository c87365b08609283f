//! Demo catalog data
//!
//! The twelve watches the store ships with. Each illustration is rendered
//! from a three-color palette, so the catalog is fully self-contained.

use crate::domain::product::{watch_image, WatchPalette};
use crate::domain::Product;

struct Seed {
    id: &'static str,
    title: &'static str,
    price: i64,
    rating: f64,
    genre: &'static str,
    description: &'static str,
    palette: WatchPalette,
}

const PURPLE: &str = "#7C5CFF";
const CYAN: &str = "#00E6FF";
const GREEN: &str = "#35F29B";
const BLUE: &str = "#1D2BFF";
const AMBER: &str = "#FFB703";
const PINK: &str = "#FF4D6D";

const SEEDS: [Seed; 12] = [
    Seed {
        id: "neo-chrono",
        title: "Neo Chrono X1",
        price: 7999,
        rating: 4.6,
        genre: "Cyber Sport",
        description: "A neon-edged chronograph with a crisp dial layout and a lightweight strap built for long sessions and late-night runs.",
        palette: WatchPalette::new(PURPLE, CYAN, GREEN),
    },
    Seed {
        id: "aurora-stealth",
        title: "Aurora Stealth S",
        price: 9999,
        rating: 4.8,
        genre: "Stealth Ops",
        description: "Minimal, dark, and razor-clean. Aurora Stealth pairs a deep matte dial with bright edge highlights for quick readability.",
        palette: WatchPalette::new(BLUE, CYAN, PURPLE),
    },
    Seed {
        id: "pulse-runner",
        title: "Pulse Runner R2",
        price: 6499,
        rating: 4.4,
        genre: "Speed Run",
        description: "Designed for movement with a balanced face and bold markers. Clean ergonomics, fast legibility, smooth everyday wear.",
        palette: WatchPalette::new(CYAN, GREEN, CYAN),
    },
    Seed {
        id: "titan-arc",
        title: "Titan Arc T9",
        price: 11999,
        rating: 4.7,
        genre: "Boss Mode",
        description: "A premium heavy-hitter with a strong silhouette and high-contrast hands. Built for those who like presence on the wrist.",
        palette: WatchPalette::new(AMBER, PURPLE, CYAN),
    },
    Seed {
        id: "spectra-lite",
        title: "Spectra Lite L3",
        price: 5499,
        rating: 4.2,
        genre: "Arcade",
        description: "Bright, playful gradients and a compact dial. A daily driver that feels as quick as your reflexes.",
        palette: WatchPalette::new(PINK, CYAN, GREEN),
    },
    Seed {
        id: "nova-field",
        title: "Nova Field N5",
        price: 8999,
        rating: 4.5,
        genre: "Open World",
        description: "Rugged lines with a futuristic finish. The Nova Field is made for exploring: clean dial, durable vibe, easy comfort.",
        palette: WatchPalette::new(GREEN, PURPLE, GREEN),
    },
    Seed {
        id: "vortex-surge",
        title: "Vortex Surge V7",
        price: 10999,
        rating: 4.7,
        genre: "Ranked",
        description: "High-energy styling with strong markers and sharp contrast. A statement watch that still reads instantly at a glance.",
        palette: WatchPalette::new(CYAN, PINK, PURPLE),
    },
    Seed {
        id: "shadow-matrix",
        title: "Shadow Matrix M4",
        price: 7599,
        rating: 4.3,
        genre: "Night Raid",
        description: "Dark dial, bright accents, and a sleek strap. Built for low-light clarity and all-day comfort.",
        palette: WatchPalette::new(PURPLE, PINK, CYAN),
    },
    Seed {
        id: "pixel-pro",
        title: "Pixel Pro P8",
        price: 6999,
        rating: 4.4,
        genre: "Retro",
        description: "A modern take on classic shapes with clean geometry and a friendly feel. The perfect blend of nostalgia and polish.",
        palette: WatchPalette::new(GREEN, CYAN, AMBER),
    },
    Seed {
        id: "orbit-prime",
        title: "Orbit Prime O2",
        price: 13499,
        rating: 4.9,
        genre: "Legendary",
        description: "Top-tier finish, crisp edges, and a premium face. Orbit Prime is for collectors who want a flagship piece.",
        palette: WatchPalette::new(AMBER, CYAN, GREEN),
    },
    Seed {
        id: "drift-core",
        title: "Drift Core D6",
        price: 6299,
        rating: 4.1,
        genre: "Sandbox",
        description: "Simple, smooth, and versatile. Drift Core stays clean and comfortable, from work to weekend sessions.",
        palette: WatchPalette::new(CYAN, PURPLE, GREEN),
    },
    Seed {
        id: "zenith-strike",
        title: "Zenith Strike Z3",
        price: 10499,
        rating: 4.6,
        genre: "FPS",
        description: "Sharp angles and bold contrast for instant readability. A high-focus watch with a competitive edge.",
        palette: WatchPalette::new(PINK, PURPLE, CYAN),
    },
];

/// Generate the demo catalog
pub fn generate_demo_products() -> Vec<Product> {
    SEEDS
        .iter()
        .map(|seed| Product {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            price: seed.price,
            rating: seed.rating,
            genre: seed.genre.to_string(),
            description: seed.description.to_string(),
            image: watch_image(seed.palette),
        })
        .collect()
}
