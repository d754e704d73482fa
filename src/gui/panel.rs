use kiss3d::conrod::{self, widget, Borderable, Colorable, Labelable, Positionable, Sizeable, Widget};
use kiss3d::widget_ids;

use crate::model::settings::SPEED_RANGE;
use crate::model::{SettingChange, Settings};

const MARGIN: conrod::Scalar = 20.0;
const PADDING: conrod::Scalar = 10.0;
const ROW_W: conrod::Scalar = 330.0;
const ROW_H: conrod::Scalar = 30.0;
const FONT_SIZE: conrod::FontSize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelRow {
    RealView,
    Speed,
    ShowOrbits,
}

widget_ids! {
    pub struct PanelIds {
        backdrop,
        real_view,
        speed,
        show_orbits,
    }
}

/// Three live bindings onto `Settings` in the top-left corner: two toggles
/// and a slider over the whole speed range.
pub struct ControlPanel {
    ids: PanelIds,
}

impl ControlPanel {
    pub fn new(ui: &mut conrod::Ui) -> Self {
        Self {
            ids: PanelIds::new(ui.widget_id_generator()),
        }
    }

    pub fn label(row: PanelRow, settings: &Settings) -> String {
        fn on_off(b: bool) -> &'static str {
            if b {
                "on"
            } else {
                "off"
            }
        }

        match row {
            PanelRow::RealView => format!("realView: {}", on_off(settings.real_view())),
            PanelRow::Speed => format!("speed: {:.2}", settings.speed()),
            PanelRow::ShowOrbits => format!("showOrbits: {}", on_off(settings.show_orbits())),
        }
    }

    /// Instantiates the panel for this frame and returns whatever the user
    /// changed, in row order.
    pub fn set_widgets(&self, ui: &mut conrod::UiCell, settings: &Settings) -> Vec<SettingChange> {
        let ids = &self.ids;

        widget::Canvas::new()
            .w_h(ROW_W + 2.0 * PADDING, 3.0 * ROW_H + 4.0 * PADDING)
            .top_left_with_margin(MARGIN)
            .color(conrod::color::DARK_CHARCOAL.alpha(0.8))
            .border(0.0)
            .set(ids.backdrop, ui);

        let real_view = widget::Toggle::new(settings.real_view())
            .label(&Self::label(PanelRow::RealView, settings))
            .label_font_size(FONT_SIZE)
            .label_color(conrod::color::WHITE)
            .w_h(ROW_W, ROW_H)
            .top_left_with_margin_on(ids.backdrop, PADDING)
            .set(ids.real_view, ui)
            .last();

        let speed = widget::Slider::new(settings.speed(), *SPEED_RANGE.start(), *SPEED_RANGE.end())
            .label(&Self::label(PanelRow::Speed, settings))
            .label_font_size(FONT_SIZE)
            .label_color(conrod::color::WHITE)
            .w_h(ROW_W, ROW_H)
            .down_from(ids.real_view, PADDING)
            .set(ids.speed, ui);

        let show_orbits = widget::Toggle::new(settings.show_orbits())
            .label(&Self::label(PanelRow::ShowOrbits, settings))
            .label_font_size(FONT_SIZE)
            .label_color(conrod::color::WHITE)
            .w_h(ROW_W, ROW_H)
            .down_from(ids.speed, PADDING)
            .set(ids.show_orbits, ui)
            .last();

        collect_changes(real_view, speed, show_orbits)
    }
}

/// Turns one frame's widget output into setting changes.
pub fn collect_changes(
    real_view: Option<bool>,
    speed: Option<f64>,
    show_orbits: Option<bool>,
) -> Vec<SettingChange> {
    real_view
        .map(SettingChange::RealView)
        .into_iter()
        .chain(speed.map(SettingChange::Speed))
        .chain(show_orbits.map(SettingChange::ShowOrbits))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        let mut settings = Settings::default();
        settings.apply(SettingChange::Speed(2.25));
        settings.apply(SettingChange::ShowOrbits(false));
        assert_eq!(ControlPanel::label(PanelRow::RealView, &settings), "realView: on");
        assert_eq!(ControlPanel::label(PanelRow::Speed, &settings), "speed: 2.25");
        assert_eq!(ControlPanel::label(PanelRow::ShowOrbits, &settings), "showOrbits: off");
    }

    #[test]
    fn test_collect_changes() {
        assert!(collect_changes(None, None, None).is_empty());
        assert_eq!(
            collect_changes(Some(false), Some(0.3), None),
            vec![SettingChange::RealView(false), SettingChange::Speed(0.3)]
        );
        assert_eq!(
            collect_changes(None, None, Some(true)),
            vec![SettingChange::ShowOrbits(true)]
        );
    }

    #[test]
    fn test_any_slider_value_sticks() {
        // The slider reports arbitrary values; nothing snaps them to a step
        let mut settings = Settings::default();
        for change in collect_changes(None, Some(0.3), None) {
            settings.apply(change);
        }
        assert_eq!(settings.speed(), 0.3);

        for change in collect_changes(None, Some(13.37), None) {
            settings.apply(change);
        }
        assert_eq!(settings.speed(), 13.37);
    }
}
