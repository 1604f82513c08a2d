use std::fmt;

/// Identifies one preview button on a page. Buttons are numbered by the row
/// they belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ButtonId(pub usize);

impl fmt::Display for ButtonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0 + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Glyph {
    #[default]
    Play,
    Pause,
    Loading,
    Error,
}

impl Glyph {
    pub fn as_str(&self) -> &'static str {
        match self {
            Glyph::Play => "▶",
            Glyph::Pause => "⏸",
            Glyph::Loading => "⏳",
            Glyph::Error => "❌",
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonClass {
    Loading,
    Playing,
}

/// Visual state of a preview button: the glyph plus the `loading` and
/// `playing` classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PreviewButton {
    glyph: Glyph,
    loading: bool,
    playing: bool,
}

impl PreviewButton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn glyph(&self) -> Glyph {
        self.glyph
    }

    pub fn set_glyph(&mut self, glyph: Glyph) {
        self.glyph = glyph;
    }

    pub fn has_class(&self, class: ButtonClass) -> bool {
        match class {
            ButtonClass::Loading => self.loading,
            ButtonClass::Playing => self.playing,
        }
    }

    pub fn add_class(&mut self, class: ButtonClass) {
        self.toggle_class(class, true);
    }

    pub fn remove_class(&mut self, class: ButtonClass) {
        self.toggle_class(class, false);
    }

    fn toggle_class(&mut self, class: ButtonClass, on: bool) {
        match class {
            ButtonClass::Loading => self.loading = on,
            ButtonClass::Playing => self.playing = on,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub(crate) fn show_loading(&mut self) {
        self.glyph = Glyph::Loading;
        self.add_class(ButtonClass::Loading);
    }

    pub(crate) fn show_playing(&mut self) {
        self.glyph = Glyph::Pause;
        self.remove_class(ButtonClass::Loading);
        self.add_class(ButtonClass::Playing);
    }

    pub(crate) fn show_stopped(&mut self) {
        self.glyph = Glyph::Play;
        self.remove_class(ButtonClass::Playing);
    }

    pub(crate) fn show_error(&mut self) {
        self.glyph = Glyph::Error;
        self.remove_class(ButtonClass::Loading);
        self.remove_class(ButtonClass::Playing);
    }
}
