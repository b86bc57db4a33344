//! Display colors for shops.
//!
//! A report owns its own color source. Nothing here is global, so
//! concurrent reports never share a generator.

use std::collections::{HashMap, HashSet};

use rand::{Rng, SeedableRng, rngs::StdRng};
use uuid::Uuid;

/// Produces `#rrggbb` colors.
pub trait ColorSource {
    fn next_color(&mut self) -> String;
}

/// Uniformly random colors drawn from an owned RNG.
#[derive(Debug)]
pub struct RandomColors<R> {
    rng: R,
}

impl<R: Rng> RandomColors<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomColors<StdRng> {
    /// Fresh generator seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> ColorSource for RandomColors<R> {
    fn next_color(&mut self) -> String {
        format!("#{:06x}", self.rng.random_range(0..=0xFF_FFFF_u32))
    }
}

/// Draws per shop before a repeated color is accepted.
const MAX_DRAWS: usize = 64;

/// Remembers the color handed to each shop within one report.
///
/// Shops in the same report get distinct colors.
#[derive(Debug)]
pub struct ShopColors<C> {
    source: C,
    assigned: HashMap<Uuid, String>,
    issued: HashSet<String>,
}

impl<C: ColorSource> ShopColors<C> {
    pub fn new(source: C) -> Self {
        Self {
            source,
            assigned: HashMap::new(),
            issued: HashSet::new(),
        }
    }

    /// The shop's color, drawing a new one on first use.
    pub fn color_for(&mut self, shop_id: Uuid) -> String {
        if let Some(color) = self.assigned.get(&shop_id) {
            return color.clone();
        }

        let mut color = self.source.next_color();
        for _ in 1..MAX_DRAWS {
            if !self.issued.contains(&color) {
                break;
            }
            color = self.source.next_color();
        }

        self.issued.insert(color.clone());
        self.assigned.insert(shop_id, color.clone());
        color
    }
}
