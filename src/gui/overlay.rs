use kiss3d::conrod::{self, widget, Borderable, Colorable, Labelable, Positionable, Sizeable, Widget};
use kiss3d::widget_ids;
use log::info;

// Font sizes, in logical points
const HEADING_SIZE: conrod::FontSize = 36;
const BODY_SIZE: conrod::FontSize = 20;
const BACKDROP_W: conrod::Scalar = 720.0;
const BACKDROP_H: conrod::Scalar = 220.0;
const GAP: conrod::Scalar = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayContent {
    pub name: String,
    pub description: String,
}

/// Centered panel naming the picked body. Either hidden, or showing exactly one
/// body's name and description.
#[derive(Debug, Clone, Default)]
pub struct InfoOverlay {
    content: Option<OverlayContent>,
}

impl InfoOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, name: &str, description: &str) {
        info!("Showing info for {}", name);
        self.content = Some(OverlayContent {
            name: name.to_owned(),
            description: description.to_owned(),
        });
    }

    pub fn hide(&mut self) {
        self.content = None;
    }

    pub fn is_visible(&self) -> bool {
        self.content.is_some()
    }

    pub fn content(&self) -> Option<&OverlayContent> {
        self.content.as_ref()
    }
}

widget_ids! {
    pub struct OverlayIds {
        backdrop,
        heading,
        body,
        close,
    }
}

/// The widgets that draw an `InfoOverlay`. Conrod does the hit testing, so
/// the close button's clickable area is exactly what gets drawn.
pub struct OverlayWidgets {
    ids: OverlayIds,
}

impl OverlayWidgets {
    pub fn new(ui: &mut conrod::Ui) -> Self {
        Self {
            ids: OverlayIds::new(ui.widget_id_generator()),
        }
    }

    /// Instantiates the overlay for this frame. Returns whether the close
    /// button was clicked.
    pub fn set_widgets(&self, ui: &mut conrod::UiCell, overlay: &InfoOverlay) -> bool {
        let content = match overlay.content() {
            Some(content) => content,
            None => return false,
        };
        let ids = &self.ids;

        widget::Canvas::new()
            .w_h(BACKDROP_W, BACKDROP_H)
            .middle()
            .color(conrod::color::BLACK.alpha(0.7))
            .border(0.0)
            .set(ids.backdrop, ui);

        widget::Text::new(&content.name)
            .font_size(HEADING_SIZE)
            .color(conrod::color::WHITE)
            .mid_top_with_margin_on(ids.backdrop, GAP)
            .set(ids.heading, ui);

        widget::Text::new(&content.description)
            .font_size(BODY_SIZE)
            .color(conrod::color::LIGHT_GREY)
            .down_from(ids.heading, GAP)
            .align_middle_x_of(ids.backdrop)
            .set(ids.body, ui);

        widget::Button::new()
            .label("Close")
            .label_font_size(BODY_SIZE)
            .color(conrod::color::rgb(1.0, 0.27, 0.27))
            .w_h(120.0, 40.0)
            .mid_bottom_with_margin_on(ids.backdrop, GAP)
            .set(ids.close, ui)
            .was_clicked()
    }
}
