use crate::ui::container::{MapView, ERROR_TITLE, LOADING_TEXT};
use egui::{Align2, Color32, FontId, Response, Sense, Stroke, Ui, Vec2, Widget};

/// Paints a [`MapView`] in egui: the error panel, the loading placeholder, or
/// an outlined area the SDK draws into.
///
/// ```rust,ignore
/// ui.add(MapPanel::new(&container.view()).size(egui::vec2(640.0, 400.0)));
/// ```
pub struct MapPanel<'a> {
    view: &'a MapView,
    size: Option<Vec2>,
}

impl<'a> MapPanel<'a> {
    pub fn new(view: &'a MapView) -> Self {
        Self { view, size: None }
    }

    pub fn size(mut self, size: Vec2) -> Self {
        self.size = Some(size);
        self
    }
}

impl Widget for MapPanel<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let desired_size = self.size.unwrap_or_else(|| ui.available_size());
        let (rect, response) = ui.allocate_exact_size(desired_size, Sense::hover());
        let painter = ui.painter();

        match self.view {
            MapView::Error { message } => {
                painter.rect_filled(rect, 4.0, Color32::from_rgb(254, 226, 226));
                painter.rect_stroke(rect, 4.0, Stroke::new(1.0, Color32::from_rgb(248, 113, 113)));
                painter.text(
                    rect.center() - Vec2::new(0.0, 10.0),
                    Align2::CENTER_CENTER,
                    ERROR_TITLE,
                    FontId::proportional(14.0),
                    Color32::from_rgb(185, 28, 28),
                );
                painter.text(
                    rect.center() + Vec2::new(0.0, 10.0),
                    Align2::CENTER_CENTER,
                    message,
                    FontId::proportional(12.0),
                    Color32::from_rgb(185, 28, 28),
                );
            }
            MapView::Loading => {
                painter.rect_filled(rect, 0.0, Color32::from_rgb(243, 244, 246));
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    LOADING_TEXT,
                    FontId::proportional(14.0),
                    Color32::from_rgb(75, 85, 99),
                );
            }
            MapView::Ready => {
                painter.rect_stroke(rect, 0.0, Stroke::new(1.0, Color32::GRAY));
            }
        }

        response
    }
}
