/// One image in the lightbox gallery, derived from a carousel card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryEntry {
    /// Position of the originating card in the carousel.
    pub card_index: usize,
    pub src: String,
    pub alt: String,
    pub caption: String,
}

impl GalleryEntry {
    /// Alt text for the enlarged image, falling back to the caption.
    pub fn display_alt(&self) -> &str {
        if self.alt.is_empty() {
            &self.caption
        } else {
            &self.alt
        }
    }
}

/// Raw card data as read from the page.
#[derive(Clone, Debug, Default)]
pub struct CardImage {
    pub src: Option<String>,
    pub alt: Option<String>,
    pub caption: Option<String>,
}

pub fn build_gallery(cards: impl IntoIterator<Item = CardImage>) -> Vec<GalleryEntry> {
    cards
        .into_iter()
        .enumerate()
        .filter_map(|(card_index, card)| {
            let src = card.src.filter(|s| !s.is_empty())?;
            Some(GalleryEntry {
                card_index,
                src,
                alt: card.alt.unwrap_or_default(),
                caption: card.caption.map(|c| c.trim().to_string()).unwrap_or_default(),
            })
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LightboxState<F> {
    Closed,
    /// Holds the element focus returns to on close.
    Open { restore_focus: F },
}

/// Lightbox navigation over a fixed gallery. `F` is whatever identifies a
/// focusable element on the rendering side.
#[derive(Clone, Debug)]
pub struct Lightbox<F> {
    gallery: Vec<GalleryEntry>,
    current: usize,
    state: LightboxState<F>,
}

impl<F> Lightbox<F> {
    pub fn new(gallery: Vec<GalleryEntry>) -> Self {
        Self {
            gallery,
            current: 0,
            state: LightboxState::Closed,
        }
    }

    pub fn gallery(&self) -> &[GalleryEntry] {
        &self.gallery
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&GalleryEntry> {
        self.gallery.get(self.current)
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open { .. })
    }

    /// Prev/next controls only make sense with more than one image.
    pub fn shows_navigation(&self) -> bool {
        self.gallery.len() > 1
    }

    /// Opens at `index`. Out-of-range indices leave the lightbox untouched.
    pub fn open(&mut self, index: usize, restore_focus: F) -> Option<&GalleryEntry> {
        if index >= self.gallery.len() {
            return None;
        }
        self.current = index;
        self.state = LightboxState::Open { restore_focus };
        self.gallery.get(index)
    }

    /// Closes and hands back the element to refocus, if it was open.
    pub fn close(&mut self) -> Option<F> {
        match std::mem::replace(&mut self.state, LightboxState::Closed) {
            LightboxState::Open { restore_focus } => Some(restore_focus),
            LightboxState::Closed => None,
        }
    }

    pub fn next(&mut self) -> Option<&GalleryEntry> {
        if self.gallery.is_empty() {
            return None;
        }
        self.current = (self.current + 1) % self.gallery.len();
        self.gallery.get(self.current)
    }

    pub fn prev(&mut self) -> Option<&GalleryEntry> {
        if self.gallery.is_empty() {
            return None;
        }
        let n = self.gallery.len();
        self.current = (self.current + n - 1) % n;
        self.gallery.get(self.current)
    }
}

/// Keys the open lightbox reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxKey {
    Close,
    Prev,
    Next,
    Tab { backwards: bool },
}

pub fn lightbox_key(key: &str, shift: bool) -> Option<LightboxKey> {
    match key {
        "Escape" => Some(LightboxKey::Close),
        "ArrowLeft" => Some(LightboxKey::Prev),
        "ArrowRight" => Some(LightboxKey::Next),
        "Tab" => Some(LightboxKey::Tab { backwards: shift }),
        _ => None,
    }
}

/// Focus trap: given `count` focusable elements and the position of the
/// focused one, returns the element to move focus to when Tab would leave
/// the trap. `None` lets the browser handle the key.
pub fn focus_trap_target(count: usize, focused: Option<usize>, backwards: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let last = count - 1;
    match (backwards, focused) {
        (true, Some(0)) => Some(last),
        (false, Some(i)) if i == last => Some(0),
        _ => None,
    }
}
