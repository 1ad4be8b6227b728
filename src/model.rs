use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::config::SlideConfig;
use crate::error::CarouselError;

/// An image reference paired with the caption shown under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub image: String,
    pub caption: String,
}

impl Slide {
    pub fn new(image: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            caption: caption.into(),
        }
    }
}

impl From<SlideConfig> for Slide {
    fn from(cfg: SlideConfig) -> Self {
        Self {
            image: cfg.image,
            caption: cfg.caption,
        }
    }
}

/// Circular navigation over a fixed, non-empty slide deck.
///
/// The deck never changes after construction, so `index` is always a valid
/// position in `slides`.
#[derive(Debug)]
pub struct Carousel {
    slides: Vec<Slide>,
    index: usize,
    rng: StdRng,
}

impl Carousel {
    pub fn new(slides: Vec<Slide>) -> Result<Self, CarouselError> {
        Self::with_rng(slides, StdRng::from_os_rng())
    }

    pub fn with_seed(slides: Vec<Slide>, seed: u64) -> Result<Self, CarouselError> {
        Self::with_rng(slides, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(slides: Vec<Slide>, rng: StdRng) -> Result<Self, CarouselError> {
        if slides.is_empty() {
            return Err(CarouselError::NoSlides);
        }
        Ok(Self {
            slides,
            index: 0,
            rng,
        })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &Slide {
        &self.slides[self.index]
    }

    pub fn go_to_next(&mut self) -> usize {
        self.index = (self.index + 1) % self.slides.len();
        self.index
    }

    pub fn go_to_previous(&mut self) -> usize {
        let len = self.slides.len();
        self.index = (self.index + len - 1) % len;
        self.index
    }

    /// Jumps to a uniformly drawn slide other than the current one.
    ///
    /// Candidates are redrawn until one differs from the current index. A
    /// single-slide deck has no other slide, so the index stays put.
    pub fn go_to_random(&mut self) -> usize {
        let len = self.slides.len();
        if len < 2 {
            return self.index;
        }
        loop {
            let candidate = self.rng.random_range(0..len);
            if candidate != self.index {
                self.index = candidate;
                return candidate;
            }
        }
    }
}
